// crates/form-lens-core/tests/render_properties.rs
// ============================================================================
// Module: Renderer Property Tests
// Description: Property-based checks over the decode-and-render pipeline.
// Purpose: Ensure rendering stays deterministic and structurally stable.
// Dependencies: form-lens-core, proptest, serde_json
// ============================================================================

//! ## Overview
//! Drives generated comparisons and calculations through the public decode
//! and render pipeline and checks the output shape holds for arbitrary
//! variable names and constants.

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
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use form_lens_core::ActionDetails;
use form_lens_core::Comparator;
use form_lens_core::Condition;
use form_lens_core::FieldIndex;
use form_lens_core::Locale;
use form_lens_core::LocaleStore;
use form_lens_core::action_text;
use form_lens_core::condition_text;
use proptest::prelude::Just;
use proptest::prelude::Strategy;
use proptest::prelude::any;
use proptest::prelude::prop_oneof;
use proptest::proptest;
use serde_json::json;

// ============================================================================
// SECTION: Strategies
// ============================================================================

/// Generates plausible hidden-variable names.
fn variable_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,12}"
}

/// Generates one of the recognized comparison operators.
fn comparator() -> impl Strategy<Value = Comparator> {
    prop_oneof![
        Just(Comparator::Is),
        Just(Comparator::IsNot),
        Just(Comparator::Equal),
        Just(Comparator::NotEqual),
        Just(Comparator::LowerThan),
        Just(Comparator::LowerEqualThan),
        Just(Comparator::GreaterThan),
        Just(Comparator::GreaterEqualThan),
    ]
}

// ============================================================================
// SECTION: Properties
// ============================================================================

proptest! {
    #[test]
    fn variable_comparisons_render_predictably(
        name in variable_name(),
        op in comparator(),
        value in any::<i64>(),
    ) {
        let condition: Condition = serde_json::from_value(json!({
            "op": op.as_str(),
            "vars": [
                { "type": "variable", "value": name },
                { "type": "constant", "value": value }
            ]
        })).expect("decode generated condition");
        let store = LocaleStore::new(Locale::En);
        let text = condition_text(&condition, "ctx", &FieldIndex::default(), &store)
            .expect("render generated condition");
        assert_eq!(text, format!("If @{name} {} {value}", op.symbol()));
    }

    #[test]
    fn rendering_is_deterministic_across_calls(
        name in variable_name(),
        value in any::<i64>(),
    ) {
        let condition: Condition = serde_json::from_value(json!({
            "op": "greater_than",
            "vars": [
                { "type": "variable", "value": name },
                { "type": "constant", "value": value }
            ]
        })).expect("decode generated condition");
        let store = LocaleStore::new(Locale::Fr);
        let index = FieldIndex::default();
        let first = condition_text(&condition, "ctx", &index, &store).expect("first render");
        let second = condition_text(&condition, "ctx", &index, &store).expect("second render");
        assert_eq!(first, second);
    }

    #[test]
    fn calculations_render_identically_in_all_locales(
        target in variable_name(),
        value in any::<i64>(),
    ) {
        let details: ActionDetails = serde_json::from_value(json!({
            "target": { "type": "variable", "value": target },
            "value": { "type": "constant", "value": value }
        })).expect("decode generated details");
        let index = FieldIndex::default();
        let en = action_text("add", &details, &index, &LocaleStore::new(Locale::En))
            .expect("render en");
        let fr = action_text("add", &details, &index, &LocaleStore::new(Locale::Fr))
            .expect("render fr");
        assert_eq!(en, fr);
        assert_eq!(en, format!("@{target} + {value}"));
    }
}
