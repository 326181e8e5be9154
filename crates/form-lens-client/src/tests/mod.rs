// crates/form-lens-client/src/tests/mod.rs
// ============================================================================
// Module: Client Unit Tests
// Description: Unit test modules for the Form-Lens client crate.
// Purpose: Group form-ID parsing and fetch error tests.
// Dependencies: crate internals
// ============================================================================

//! ## Overview
//! Unit tests live beside the crate so they can exercise internal helpers as
//! well as the public API.
