// crates/form-lens-cli/src/tests/overview.rs
// ============================================================================
// Module: Overview Renderer Tests
// Description: Unit tests for the terminal overview of form logic.
// Purpose: Ensure logic rules render as indented condition/action lines.
// Dependencies: crate::overview, form-lens-core, serde_json
// ============================================================================

//! ## Overview
//! Decodes a representative form document and checks the exact lines the
//! `show` command would print, in both locales.

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

use form_lens_core::FieldIndex;
use form_lens_core::FormDocument;
use form_lens_core::Locale;
use form_lens_core::LocaleStore;
use form_lens_core::RenderError;
use serde_json::json;

use crate::overview::overview_lines;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

fn sample_document() -> FormDocument {
    serde_json::from_value(json!({
        "id": "abc123",
        "title": "Customer Survey",
        "fields": [
            {
                "ref": "color",
                "title": "Favorite color",
                "properties": {
                    "choices": [ { "ref": "choice-red", "label": "Red" } ]
                }
            },
            { "ref": "email", "title": "Your email" }
        ],
        "logic": [
            {
                "ref": "color",
                "actions": [
                    {
                        "action": "jump",
                        "details": { "to": { "type": "field", "value": "email" } },
                        "condition": {
                            "op": "is",
                            "vars": [
                                { "type": "field", "value": "color" },
                                { "type": "choice", "value": "choice-red" }
                            ]
                        }
                    },
                    {
                        "action": "jump",
                        "details": { "to": { "type": "thankyou", "value": "default_tys" } },
                        "condition": { "op": "always", "vars": [] }
                    }
                ]
            }
        ]
    }))
    .expect("decode sample document")
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn overview_lists_rules_with_condition_and_action() {
    let document = sample_document();
    let fields = FieldIndex::from_document(&document);
    let store = LocaleStore::new(Locale::En);
    let lines = overview_lines(&document, &fields, &store).expect("render overview");
    assert_eq!(lines, vec![
        "Customer Survey".to_string(),
        "  Favorite color".to_string(),
        "    If this = Red -> Jump to Your email".to_string(),
        "    Always -> Jump to Thank you".to_string(),
    ]);
}

#[test]
fn overview_localizes_vocabulary() {
    let document = sample_document();
    let fields = FieldIndex::from_document(&document);
    let store = LocaleStore::new(Locale::Fr);
    let lines = overview_lines(&document, &fields, &store).expect("render overview");
    assert_eq!(lines[2], "    Si ceci = Red -> Aller à Your email");
    assert_eq!(lines[3], "    Toujours -> Aller à la page de remerciement");
}

#[test]
fn form_without_logic_renders_title_only() {
    let document: FormDocument =
        serde_json::from_value(json!({ "id": "x", "title": "Plain Form" }))
            .expect("decode document");
    let fields = FieldIndex::from_document(&document);
    let store = LocaleStore::new(Locale::En);
    let lines = overview_lines(&document, &fields, &store).expect("render overview");
    assert_eq!(lines, vec!["Plain Form".to_string()]);
}

#[test]
fn unknown_rule_owner_is_reported() {
    let document: FormDocument = serde_json::from_value(json!({
        "id": "x",
        "title": "Broken Form",
        "fields": [],
        "logic": [ { "ref": "ghost", "actions": [] } ]
    }))
    .expect("decode document");
    let fields = FieldIndex::from_document(&document);
    let store = LocaleStore::new(Locale::En);
    let error = overview_lines(&document, &fields, &store).expect_err("missing owner must fail");
    assert_eq!(error, RenderError::MissingFieldRef {
        field_ref: "ghost".to_string(),
    });
}
