// crates/form-lens-cli/src/overview.rs
// ============================================================================
// Module: Overview Renderer
// Description: Plain-text overview of a form's branching logic.
// Purpose: Turn a decoded form document into display lines for the terminal.
// Dependencies: form-lens-core
// ============================================================================

//! ## Overview
//! Produces the lines the `show` command prints: the form title, then one
//! indented block per logic rule with a condition/action line per action.
//! Rendering faults bubble up unchanged; a malformed export is reported, not
//! papered over.

// ============================================================================
// SECTION: Imports
// ============================================================================

use form_lens_core::FieldIndex;
use form_lens_core::FormDocument;
use form_lens_core::LocaleStore;
use form_lens_core::RenderError;
use form_lens_core::action_text;
use form_lens_core::condition_text;

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Renders a form document into display lines.
///
/// # Errors
///
/// Returns [`RenderError`] when a logic rule references an unknown field or
/// choice, or carries an unrenderable action.
pub fn overview_lines(
    document: &FormDocument,
    fields: &FieldIndex,
    store: &LocaleStore,
) -> Result<Vec<String>, RenderError> {
    let mut lines = Vec::with_capacity(1 + document.logic.len() * 2);
    lines.push(document.title.clone());
    for rule in &document.logic {
        let owner =
            fields.get(&rule.owner_ref).ok_or_else(|| RenderError::MissingFieldRef {
                field_ref: rule.owner_ref.clone(),
            })?;
        lines.push(format!("  {}", owner.short_name));
        for action in &rule.actions {
            let condition = condition_text(&action.condition, &rule.owner_ref, fields, store)?;
            let effect = action_text(&action.action, &action.details, fields, store)?;
            lines.push(format!("    {condition} -> {effect}"));
        }
    }
    Ok(lines)
}
