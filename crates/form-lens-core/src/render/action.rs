// crates/form-lens-core/src/render/action.rs
// ============================================================================
// Module: Action Renderer
// Description: Rendering of logic action payloads into display text.
// Purpose: Produce localized summaries of jump and calculation actions.
// Dependencies: crate::{form, i18n, logic, render}
// ============================================================================

//! ## Overview
//! Jump actions resolve their destination to a field short name or the
//! thank-you screen; calculation actions render as a variable assignment
//! line such as `@score + 2`. The raw action tag is classified here so an
//! unrecognized tag surfaces as an error instead of a half-rendered line.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::form::FieldIndex;
use crate::i18n::LocaleStore;
use crate::logic::ActionDetails;
use crate::logic::ActionKind;
use crate::logic::CalcValue;
use crate::logic::CalculationDetails;
use crate::logic::JumpTarget;
use crate::render::RenderError;
use crate::render::constant_text;

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Renders a logic action into a localized display line.
///
/// # Errors
///
/// Returns [`RenderError::UnknownActionType`] for unrecognized action tags,
/// [`RenderError::MalformedDetails`] when the payload shape does not match
/// the tag, [`RenderError::UnsupportedTarget`] for non-variable calculation
/// targets, and [`RenderError::MissingFieldRef`] when a jump destination does
/// not resolve in the field index.
pub fn action_text(
    action_type: &str,
    details: &ActionDetails,
    fields: &FieldIndex,
    store: &LocaleStore,
) -> Result<String, RenderError> {
    let Some(kind) = ActionKind::parse(action_type) else {
        return Err(RenderError::UnknownActionType {
            action_type: action_type.to_string(),
        });
    };
    match (kind, details) {
        (ActionKind::Jump, ActionDetails::Jump(jump)) => jump_text(&jump.to, fields, store),
        (kind, ActionDetails::Calculation(calc)) if kind.is_calculation() => {
            calculation_text(kind, calc)
        }
        _ => Err(RenderError::MalformedDetails {
            action_type: action_type.to_string(),
        }),
    }
}

// ============================================================================
// SECTION: Action Variants
// ============================================================================

/// Renders a jump destination.
fn jump_text(
    target: &JumpTarget,
    fields: &FieldIndex,
    store: &LocaleStore,
) -> Result<String, RenderError> {
    match target {
        JumpTarget::ThankYou => Ok(store.resolve("logic.jumpToThankYou")),
        JumpTarget::Field(field_ref) => {
            let summary =
                fields.get(field_ref).ok_or_else(|| RenderError::MissingFieldRef {
                    field_ref: field_ref.clone(),
                })?;
            Ok(format!("{} {}", store.resolve("logic.jumpTo"), summary.short_name))
        }
    }
}

/// Renders a variable-arithmetic assignment line.
fn calculation_text(kind: ActionKind, calc: &CalculationDetails) -> Result<String, RenderError> {
    if calc.target.kind != "variable" {
        return Err(RenderError::UnsupportedTarget {
            target_type: calc.target.kind.clone(),
        });
    }
    // is_calculation guarantees a symbol for every kind reaching this point.
    let Some(symbol) = kind.symbol() else {
        return Err(RenderError::MalformedDetails {
            action_type: kind.as_str().to_string(),
        });
    };
    let operand = match &calc.value {
        CalcValue::Variable(name) => format!("@{name}"),
        CalcValue::Literal(value) => constant_text(value),
    };
    Ok(format!("@{} {symbol} {operand}", calc.target.value))
}
