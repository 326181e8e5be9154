// crates/form-lens-core/src/tests/mod.rs
// ============================================================================
// Module: Core Unit Tests
// Description: Unit test modules for the Form-Lens core crate.
// Purpose: Group model, logic, i18n, and renderer test suites.
// Dependencies: crate internals
// ============================================================================

//! ## Overview
//! Unit tests live beside the crate so they can exercise internal helpers as
//! well as the public API.
