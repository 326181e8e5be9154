// crates/form-lens-client/tests/form_id_properties.rs
// ============================================================================
// Module: Form-ID Parser Property-Based Tests
// Description: Property tests for form-ID extraction stability.
// Purpose: Detect panics and invariants across wide input ranges.
// ============================================================================

//! Property-based tests for form-ID parsing invariants.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use form_lens_client::parse_form_id;
use proptest::prelude::*;

/// Strategy producing bare alphanumeric form IDs.
fn form_id() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{1,24}"
}

proptest! {
    #[test]
    fn bare_ids_parse_to_themselves(id in form_id()) {
        prop_assert_eq!(parse_form_id(&id), Some(id));
    }

    #[test]
    fn share_urls_yield_the_embedded_id(id in form_id()) {
        let url = format!("https://example.typeform.com/to/{id}");
        prop_assert_eq!(parse_form_id(&url), Some(id));
    }

    #[test]
    fn surrounding_whitespace_never_changes_the_result(id in form_id()) {
        let padded = format!("  {id}\n");
        prop_assert_eq!(parse_form_id(&padded), parse_form_id(&id));
    }

    #[test]
    fn arbitrary_input_never_panics(input in ".*") {
        let _ = parse_form_id(&input);
    }
}
