// crates/form-lens-core/src/form.rs
// ============================================================================
// Module: Form Data Model
// Description: Typed subset of the Typeform form definition JSON.
// Purpose: Decode fields, choices, and logic rules for display rendering.
// Dependencies: crate::logic, serde
// ============================================================================

//! ## Overview
//! The form document is decoded from the provider's JSON export. Only the
//! parts the renderers consume are modeled; unknown JSON fields are ignored.
//! The [`FieldIndex`] is the explicit ref-to-field mapping handed to the
//! renderers: lookups of missing refs are caller-data faults surfaced by the
//! render layer, never silent blanks.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;

use serde::Deserialize;

use crate::logic::ActionDetails;
use crate::logic::Condition;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum character length of a derived short display name.
const SHORT_NAME_MAX_CHARS: usize = 40;

// ============================================================================
// SECTION: Document Types
// ============================================================================

/// A provider-hosted form definition.
///
/// # Invariants
/// - `fields` and `logic` default to empty when absent from the JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FormDocument {
    /// Provider-assigned form identifier.
    pub id: String,
    /// Form display title.
    pub title: String,
    /// Question fields in document order.
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Branching-logic rules in document order.
    #[serde(default)]
    pub logic: Vec<LogicRule>,
}

/// A single question field within a form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Field {
    /// Stable reference string addressing this field.
    #[serde(rename = "ref")]
    pub field_ref: String,
    /// Field display title.
    pub title: String,
    /// Choice-bearing field properties.
    #[serde(default)]
    pub properties: FieldProperties,
}

/// Properties carried by choice-based fields.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FieldProperties {
    /// Ordered selectable choices; empty for non-choice fields.
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// One selectable option of a choice-type field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Choice {
    /// Stable reference string addressing this choice.
    #[serde(rename = "ref")]
    pub choice_ref: String,
    /// Choice display label.
    pub label: String,
}

/// A logic rule owned by one field of the form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogicRule {
    /// Reference of the field whose logic this rule describes.
    #[serde(rename = "ref")]
    pub owner_ref: String,
    /// Conditional actions evaluated for this rule.
    #[serde(default)]
    pub actions: Vec<LogicAction>,
}

/// One conditional action within a logic rule.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogicAction {
    /// Raw action type tag (`jump`, `add`, `subtract`, `divide`, `multiply`).
    pub action: String,
    /// Typed action payload.
    pub details: ActionDetails,
    /// Condition guarding the action.
    pub condition: Condition,
}

// ============================================================================
// SECTION: Field Index
// ============================================================================

/// Display projection of a field used by the renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSummary {
    /// Stable reference string addressing this field.
    pub field_ref: String,
    /// Short display name derived from the field title.
    pub short_name: String,
    /// Ordered selectable choices; empty for non-choice fields.
    pub choices: Vec<Choice>,
}

impl FieldSummary {
    /// Resolves a choice label by choice reference.
    #[must_use]
    pub fn choice_label(&self, choice_ref: &str) -> Option<&str> {
        self.choices
            .iter()
            .find(|choice| choice.choice_ref == choice_ref)
            .map(|choice| choice.label.as_str())
    }
}

/// Explicit ref-to-field mapping supplied to the renderers.
///
/// # Invariants
/// - Lookups of missing refs return `None`; callers treat that as a fault.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldIndex {
    /// Field summaries keyed by field reference.
    by_ref: HashMap<String, FieldSummary>,
}

impl FieldIndex {
    /// Builds the index from a decoded form document.
    #[must_use]
    pub fn from_document(document: &FormDocument) -> Self {
        let mut index = Self::default();
        for field in &document.fields {
            index.insert(FieldSummary {
                field_ref: field.field_ref.clone(),
                short_name: short_name_of(&field.title),
                choices: field.properties.choices.clone(),
            });
        }
        index
    }

    /// Inserts a field summary, replacing any existing entry for the same ref.
    pub fn insert(&mut self, summary: FieldSummary) {
        self.by_ref.insert(summary.field_ref.clone(), summary);
    }

    /// Looks up a field summary by reference.
    #[must_use]
    pub fn get(&self, field_ref: &str) -> Option<&FieldSummary> {
        self.by_ref.get(field_ref)
    }

    /// Returns the number of indexed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_ref.len()
    }

    /// Returns true when the index holds no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_ref.is_empty()
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Derives a short display name from a field title.
///
/// Long titles are truncated on a character boundary with an ellipsis so
/// rendered logic lines stay readable.
fn short_name_of(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.chars().count() <= SHORT_NAME_MAX_CHARS {
        return trimmed.to_string();
    }
    let mut short: String = trimmed.chars().take(SHORT_NAME_MAX_CHARS).collect();
    short.push('…');
    short
}
