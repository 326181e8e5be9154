// crates/form-lens-client/src/form_id.rs
// ============================================================================
// Module: Form-ID Parser
// Description: Extraction of form identifiers from raw IDs and share URLs.
// Purpose: Accept the input shapes users paste into the loader.
// Dependencies: Standard library string scanning.
// ============================================================================

//! ## Overview
//! Users paste either a bare form ID or one of two known URL shapes: the
//! public share URL (`https://xxx.typeform.com/to/<id>`) and the API URL
//! (`https://api.typeform.com/forms/<id>`). Parsing is pure string matching
//! and never fails with an error; unrecognized input returns `None` and the
//! caller surfaces the invalid-URL message.

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Extracts a form identifier from a raw ID or a known URL shape.
///
/// Policy, in order: trimmed empty input yields `None`; a fully alphanumeric
/// input is already an ID; otherwise the first `/to/<id>` segment wins, then
/// the first `/forms/<id>` segment; anything else yields `None`.
#[must_use]
pub fn parse_form_id(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.chars().all(|ch| ch.is_ascii_alphanumeric()) {
        return Some(trimmed.to_string());
    }
    segment_after(trimmed, "/to/")
        .or_else(|| segment_after(trimmed, "/forms/"))
        .map(str::to_string)
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns the alphanumeric run following the first occurrence of `marker`.
fn segment_after<'input>(input: &'input str, marker: &str) -> Option<&'input str> {
    let start = input.find(marker)? + marker.len();
    let rest = &input[start ..];
    let end = rest.find(|ch: char| !ch.is_ascii_alphanumeric()).unwrap_or(rest.len());
    let id = &rest[.. end];
    if id.is_empty() { None } else { Some(id) }
}
