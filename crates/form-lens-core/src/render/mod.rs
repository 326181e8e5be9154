// crates/form-lens-core/src/render/mod.rs
// ============================================================================
// Module: Logic Renderers
// Description: Human-readable text rendering of conditions and actions.
// Purpose: Shared error taxonomy and value formatting for the renderers.
// Dependencies: crate::i18n, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The renderers turn a decoded logic tree into display lines such as
//! `If this > 5 and this < 10`. They are pure: inputs are the logic types, an
//! explicit field index, and a locale store; the output is a `String` or a
//! [`RenderError`] naming the data fault. Missing refs never render as blanks.
//!
//! ## Invariants
//! - Render errors carry the offending reference or type tag.
//! - Absent optional operands render the literal placeholder `undefined`.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod action;
pub mod condition;

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Faults raised while rendering logic into display text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A field reference did not resolve in the field index.
    #[error("unknown field reference: {field_ref}")]
    MissingFieldRef {
        /// The unresolved field reference.
        field_ref: String,
    },
    /// A choice reference did not resolve within its field.
    #[error("unknown choice reference {choice_ref} in field {field_ref}")]
    MissingChoiceRef {
        /// The field whose choices were searched.
        field_ref: String,
        /// The unresolved choice reference.
        choice_ref: String,
    },
    /// A calculation targeted something other than a variable.
    #[error("unsupported calculation target type: {target_type}")]
    UnsupportedTarget {
        /// The unsupported target kind.
        target_type: String,
    },
    /// The action type tag is outside the recognized set.
    #[error("unknown action type: {action_type}")]
    UnknownActionType {
        /// The unrecognized action type tag.
        action_type: String,
    },
    /// The action payload shape does not match the action type.
    #[error("malformed details for action type: {action_type}")]
    MalformedDetails {
        /// The action type whose payload did not match.
        action_type: String,
    },
}

// ============================================================================
// SECTION: Value Formatting
// ============================================================================

/// Placeholder rendered for absent operand values.
pub(crate) const UNDEFINED_VALUE: &str = "undefined";

/// Formats a literal constant for display.
///
/// Strings render bare, without JSON quoting; every other value renders in
/// its JSON notation.
pub(crate) fn constant_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
