// crates/form-lens-cli/src/tests/mod.rs
// ============================================================================
// Module: CLI Library Unit Tests
// Description: Unit test modules for the Form-Lens CLI library.
// Purpose: Group overview rendering and preference persistence tests.
// Dependencies: crate internals
// ============================================================================

//! ## Overview
//! Unit tests live beside the crate so they can exercise the library pieces
//! the binary builds on.

mod overview;
mod prefs;
