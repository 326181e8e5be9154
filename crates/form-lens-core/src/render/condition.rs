// crates/form-lens-core/src/render/condition.rs
// ============================================================================
// Module: Condition Renderer
// Description: Recursive rendering of condition trees into display text.
// Purpose: Produce localized one-line summaries of branching conditions.
// Dependencies: crate::{form, i18n, logic, render}
// ============================================================================

//! ## Overview
//! Conditions render relative to a context field: a comparison on the field
//! that owns the logic rule reads `this`, other fields read by their short
//! names, and hidden variables carry an `@` prefix. Only the outermost level
//! of the tree receives the localized `If` prefix; the recursion passes an
//! explicit depth so nested groups join bare.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::form::FieldIndex;
use crate::i18n::LocaleStore;
use crate::logic::Condition;
use crate::logic::OperandSlots;
use crate::render::RenderError;
use crate::render::UNDEFINED_VALUE;
use crate::render::constant_text;

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Renders a condition tree into a localized display line.
///
/// `context_ref` identifies the field owning the logic rule, so comparisons
/// against it read `this` instead of the field's name.
///
/// # Errors
///
/// Returns [`RenderError::MissingFieldRef`] or
/// [`RenderError::MissingChoiceRef`] when an operand reference does not
/// resolve in the field index.
pub fn condition_text(
    condition: &Condition,
    context_ref: &str,
    fields: &FieldIndex,
    store: &LocaleStore,
) -> Result<String, RenderError> {
    render_at(condition, context_ref, fields, store, 0)
}

// ============================================================================
// SECTION: Recursive Rendering
// ============================================================================

/// Renders one node of the condition tree at the given nesting depth.
fn render_at(
    condition: &Condition,
    context_ref: &str,
    fields: &FieldIndex,
    store: &LocaleStore,
    depth: usize,
) -> Result<String, RenderError> {
    match condition {
        Condition::Always => Ok(store.resolve("logic.always")),
        Condition::Group { op, children } => {
            let joiner = format!(" {} ", store.resolve(op.message_key()));
            let mut parts = Vec::with_capacity(children.len());
            for child in children {
                parts.push(render_at(child, context_ref, fields, store, depth + 1)?);
            }
            Ok(with_prefix(parts.join(&joiner), store, depth))
        }
        Condition::Compare { op, operands } => {
            let left = left_term(operands, context_ref, fields, store)?;
            let right = right_term(operands, fields)?;
            Ok(with_prefix(format!("{left} {} {right}", op.symbol()), store, depth))
        }
    }
}

/// Prepends the localized `If` prefix at the outermost depth only.
fn with_prefix(text: String, store: &LocaleStore, depth: usize) -> String {
    if depth == 0 {
        format!("{} {text}", store.resolve("logic.if"))
    } else {
        text
    }
}

// ============================================================================
// SECTION: Operand Terms
// ============================================================================

/// Renders the left-hand term of a comparison.
///
/// Variables take priority over fields; the context field reads `this`.
fn left_term(
    operands: &OperandSlots,
    context_ref: &str,
    fields: &FieldIndex,
    store: &LocaleStore,
) -> Result<String, RenderError> {
    if let Some(variable) = &operands.variable {
        return Ok(format!("@{variable}"));
    }
    let field_ref = operands.field.as_deref().unwrap_or_default();
    if field_ref == context_ref {
        return Ok(store.resolve("logic.this"));
    }
    let summary = fields.get(field_ref).ok_or_else(|| RenderError::MissingFieldRef {
        field_ref: field_ref.to_string(),
    })?;
    Ok(summary.short_name.clone())
}

/// Renders the right-hand term of a comparison.
///
/// Choice references resolve to their labels within the field operand;
/// constants render literally; an absent operand renders `undefined`.
fn right_term(operands: &OperandSlots, fields: &FieldIndex) -> Result<String, RenderError> {
    if let Some(choice_ref) = &operands.choice {
        let field_ref = operands.field.as_deref().unwrap_or_default();
        let summary = fields.get(field_ref).ok_or_else(|| RenderError::MissingFieldRef {
            field_ref: field_ref.to_string(),
        })?;
        let label =
            summary
                .choice_label(choice_ref)
                .ok_or_else(|| RenderError::MissingChoiceRef {
                    field_ref: field_ref.to_string(),
                    choice_ref: choice_ref.clone(),
                })?;
        return Ok(label.to_string());
    }
    if let Some(constant) = &operands.constant {
        return Ok(constant_text(constant));
    }
    Ok(UNDEFINED_VALUE.to_string())
}
