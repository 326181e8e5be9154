// crates/form-lens-cli/src/lib.rs
// ============================================================================
// Module: Form-Lens CLI Library
// Description: Reusable pieces of the form-lens command-line tool.
// Purpose: Expose locale preferences and overview rendering to the binary.
// Dependencies: crate::{overview, prefs}
// ============================================================================

//! ## Overview
//! The binary in `main.rs` stays thin; locale-preference persistence and the
//! document-to-lines overview renderer live here where they can be unit
//! tested without a terminal.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod overview;
pub mod prefs;

#[cfg(test)]
mod tests;
