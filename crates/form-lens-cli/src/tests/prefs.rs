// crates/form-lens-cli/src/tests/prefs.rs
// ============================================================================
// Module: Locale Preference Tests
// Description: Unit tests for locale persistence.
// Purpose: Ensure stored locales round-trip and absence degrades quietly.
// Dependencies: crate::prefs, form-lens-core, tempfile
// ============================================================================

//! ## Overview
//! Exercises the preference file round-trip against a temporary config
//! directory, without touching the real environment.

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

use std::fs;

use form_lens_core::Locale;

use crate::prefs::load_locale_from;
use crate::prefs::store_locale_in;

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn stored_locale_round_trips() {
    let dir = tempfile::tempdir().expect("create temp dir");
    store_locale_in(dir.path(), Locale::Fr).expect("store locale");
    assert_eq!(load_locale_from(dir.path()), Some(Locale::Fr));
}

#[test]
fn storing_creates_missing_directories() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let nested = dir.path().join("nested").join("form-lens");
    store_locale_in(&nested, Locale::En).expect("store locale");
    assert_eq!(load_locale_from(&nested), Some(Locale::En));
}

#[test]
fn absent_preference_loads_as_none() {
    let dir = tempfile::tempdir().expect("create temp dir");
    assert_eq!(load_locale_from(dir.path()), None);
}

#[test]
fn unparseable_preference_loads_as_none() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join("locale"), "klingon\n").expect("write preference");
    assert_eq!(load_locale_from(dir.path()), None);
}

#[test]
fn preference_file_tolerates_surrounding_whitespace() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join("locale"), "  fr \n").expect("write preference");
    assert_eq!(load_locale_from(dir.path()), Some(Locale::Fr));
}

#[test]
fn latest_store_wins() {
    let dir = tempfile::tempdir().expect("create temp dir");
    store_locale_in(dir.path(), Locale::Fr).expect("store fr");
    store_locale_in(dir.path(), Locale::En).expect("store en");
    assert_eq!(load_locale_from(dir.path()), Some(Locale::En));
}
