// crates/form-lens-core/src/lib.rs
// ============================================================================
// Module: Form-Lens Core Library
// Description: Public API surface for the Form-Lens core.
// Purpose: Expose the form data model, logic tree, renderers, and i18n.
// Dependencies: crate::{form, i18n, logic, render}
// ============================================================================

//! ## Overview
//! Form-Lens core turns a Typeform form definition into human-readable,
//! localized summaries of its branching logic. It owns the typed logic tree,
//! the recursive condition/action renderers, and the message catalogs. It has
//! no I/O: fetching lives in `form-lens-client`, display in `form-lens-cli`.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod form;
pub mod i18n;
pub mod logic;
pub mod render;

#[cfg(test)]
mod tests;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use form::Choice;
pub use form::Field;
pub use form::FieldIndex;
pub use form::FieldSummary;
pub use form::FormDocument;
pub use form::LogicAction;
pub use form::LogicRule;
pub use i18n::Locale;
pub use i18n::LocaleStore;
pub use i18n::MessageArg;
pub use i18n::SUPPORTED_LOCALES;
pub use logic::ActionDetails;
pub use logic::ActionKind;
pub use logic::CalcValue;
pub use logic::Combinator;
pub use logic::Comparator;
pub use logic::Condition;
pub use logic::JumpTarget;
pub use logic::OperandSlots;
pub use render::RenderError;
pub use render::action::action_text;
pub use render::condition::condition_text;
