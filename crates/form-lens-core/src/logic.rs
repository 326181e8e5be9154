// crates/form-lens-core/src/logic.rs
// ============================================================================
// Module: Logic Tree
// Description: Tagged condition and action types decoded from logic JSON.
// Purpose: Classify branching logic once at decode time, not at render time.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Logic rules arrive as loosely shaped JSON: a condition is an `op` plus a
//! `vars` array whose entries are either nested conditions or operand
//! descriptors, and action details change shape with the action type. This
//! module decodes that shape into tagged sum types via `try_from` conversions
//! so the renderers match on structure instead of probing raw JSON.
//!
//! ## Invariants
//! - Unknown operators and jump-target kinds fail decoding loudly.
//! - Duplicate operand descriptors of one kind resolve last-write-wins.
//! - Operand descriptors of unrecognized kinds are ignored.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Faults raised while decoding logic JSON into tagged types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LogicParseError {
    /// The condition `op` value is not a known combinator or comparator.
    #[error("unknown condition operator: {op}")]
    UnknownOperator {
        /// The unrecognized operator value.
        op: String,
    },
    /// A combinator condition carried an operand descriptor instead of a
    /// nested condition.
    #[error("operator {op} requires nested conditions")]
    ExpectedCondition {
        /// The combinator operator value.
        op: String,
    },
    /// A comparison condition carried a nested condition instead of an
    /// operand descriptor.
    #[error("operator {op} requires operand descriptors")]
    ExpectedOperand {
        /// The comparator operator value.
        op: String,
    },
    /// A reference-valued operand descriptor carried a non-string value.
    #[error("operand of type {kind} requires a string value")]
    InvalidOperand {
        /// The operand descriptor kind.
        kind: String,
    },
    /// A jump target carried an unrecognized `type` value.
    #[error("unknown jump target type: {kind}")]
    UnknownJumpTarget {
        /// The unrecognized jump-target kind.
        kind: String,
    },
    /// A field jump target omitted the destination field reference.
    #[error("field jump target requires a value")]
    MissingJumpValue,
}

// ============================================================================
// SECTION: Operators
// ============================================================================

/// Condition combinators joining nested conditions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Combinator {
    /// All nested conditions must hold.
    And,
    /// Any nested condition may hold.
    Or,
}

impl Combinator {
    /// Attempts to parse a combinator from its wire operator value.
    #[must_use]
    pub fn parse(op: &str) -> Option<Self> {
        match op {
            "and" => Some(Self::And),
            "or" => Some(Self::Or),
            _ => None,
        }
    }

    /// Returns the wire operator value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }

    /// Returns the catalog key of the localized joining word.
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::And => "logic.and",
            Self::Or => "logic.or",
        }
    }
}

/// Comparison operators between two operand terms.
///
/// Distinct wire spellings are preserved even when they display the same
/// symbol (`is` and `equal` both render `=`).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Comparator {
    /// `is`, displayed `=`.
    Is,
    /// `is_not`, displayed `≠`.
    IsNot,
    /// `equal`, displayed `=`.
    Equal,
    /// `not_equal`, displayed `≠`.
    NotEqual,
    /// `lower_than`, displayed `<`.
    LowerThan,
    /// `lower_equal_than`, displayed `<=`.
    LowerEqualThan,
    /// `greater_than`, displayed `>`.
    GreaterThan,
    /// `greater_equal_than`, displayed `>=`.
    GreaterEqualThan,
}

impl Comparator {
    /// Attempts to parse a comparator from its wire operator value.
    #[must_use]
    pub fn parse(op: &str) -> Option<Self> {
        match op {
            "is" => Some(Self::Is),
            "is_not" => Some(Self::IsNot),
            "equal" => Some(Self::Equal),
            "not_equal" => Some(Self::NotEqual),
            "lower_than" => Some(Self::LowerThan),
            "lower_equal_than" => Some(Self::LowerEqualThan),
            "greater_than" => Some(Self::GreaterThan),
            "greater_equal_than" => Some(Self::GreaterEqualThan),
            _ => None,
        }
    }

    /// Returns the wire operator value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Is => "is",
            Self::IsNot => "is_not",
            Self::Equal => "equal",
            Self::NotEqual => "not_equal",
            Self::LowerThan => "lower_than",
            Self::LowerEqualThan => "lower_equal_than",
            Self::GreaterThan => "greater_than",
            Self::GreaterEqualThan => "greater_equal_than",
        }
    }

    /// Returns the locale-independent display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Is | Self::Equal => "=",
            Self::IsNot | Self::NotEqual => "≠",
            Self::LowerThan => "<",
            Self::LowerEqualThan => "<=",
            Self::GreaterThan => ">",
            Self::GreaterEqualThan => ">=",
        }
    }
}

// ============================================================================
// SECTION: Conditions
// ============================================================================

/// Typed operand slots collected from a comparison's descriptor list.
///
/// # Invariants
/// - Duplicate descriptors of one kind resolve last-write-wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperandSlots {
    /// Reference of a form field operand.
    pub field: Option<String>,
    /// Name of a hidden-variable operand.
    pub variable: Option<String>,
    /// Reference of a choice operand within the field operand.
    pub choice: Option<String>,
    /// Literal constant operand.
    pub constant: Option<Value>,
}

impl OperandSlots {
    /// Returns true when no operand slot is populated.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.field.is_none()
            && self.variable.is_none()
            && self.choice.is_none()
            && self.constant.is_none()
    }
}

/// A decoded branching-logic condition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawCondition")]
pub enum Condition {
    /// Unconditional: the action always applies.
    Always,
    /// Nested conditions joined by a combinator.
    Group {
        /// Joining combinator.
        op: Combinator,
        /// Nested conditions in document order.
        children: Vec<Condition>,
    },
    /// A comparison between operand terms.
    Compare {
        /// Comparison operator.
        op: Comparator,
        /// Typed operand slots.
        operands: OperandSlots,
    },
}

/// Wire shape of a condition before classification.
#[derive(Debug, Deserialize)]
struct RawCondition {
    /// Operator tag selecting the condition shape.
    op: String,
    /// Nested conditions or operand descriptors, depending on `op`.
    #[serde(default)]
    vars: Vec<RawVar>,
}

/// Wire shape of one `vars` entry.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawVar {
    /// An operand descriptor of a comparison condition.
    Operand {
        /// Operand kind (`field`, `variable`, `choice`, `constant`, ...).
        #[serde(rename = "type")]
        kind: String,
        /// Operand payload; a reference string or a literal constant.
        value: Value,
    },
    /// A nested condition of a combinator condition.
    Nested(Condition),
}

impl TryFrom<RawCondition> for Condition {
    type Error = LogicParseError;

    fn try_from(raw: RawCondition) -> Result<Self, Self::Error> {
        if raw.op == "always" {
            return Ok(Self::Always);
        }
        if let Some(op) = Combinator::parse(&raw.op) {
            let mut children = Vec::with_capacity(raw.vars.len());
            for var in raw.vars {
                match var {
                    RawVar::Nested(child) => children.push(child),
                    RawVar::Operand { .. } => {
                        return Err(LogicParseError::ExpectedCondition {
                            op: raw.op,
                        });
                    }
                }
            }
            return Ok(Self::Group {
                op,
                children,
            });
        }
        if let Some(op) = Comparator::parse(&raw.op) {
            let operands = collect_operands(&raw.op, raw.vars)?;
            return Ok(Self::Compare {
                op,
                operands,
            });
        }
        Err(LogicParseError::UnknownOperator {
            op: raw.op,
        })
    }
}

/// Folds operand descriptors into typed slots, last write winning.
fn collect_operands(op: &str, vars: Vec<RawVar>) -> Result<OperandSlots, LogicParseError> {
    let mut slots = OperandSlots::default();
    for var in vars {
        let RawVar::Operand { kind, value } = var else {
            return Err(LogicParseError::ExpectedOperand {
                op: op.to_string(),
            });
        };
        match kind.as_str() {
            "field" => slots.field = Some(ref_string(&kind, value)?),
            "variable" => slots.variable = Some(ref_string(&kind, value)?),
            "choice" => slots.choice = Some(ref_string(&kind, value)?),
            "constant" => slots.constant = Some(value),
            // Unrecognized descriptor kinds carry no display meaning here.
            _ => {}
        }
    }
    Ok(slots)
}

/// Extracts the string payload of a reference-valued operand descriptor.
fn ref_string(kind: &str, value: Value) -> Result<String, LogicParseError> {
    match value {
        Value::String(text) => Ok(text),
        _ => Err(LogicParseError::InvalidOperand {
            kind: kind.to_string(),
        }),
    }
}

// ============================================================================
// SECTION: Actions
// ============================================================================

/// Recognized action types.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ActionKind {
    /// Jump to another field or the thank-you screen.
    Jump,
    /// Add a value to a variable.
    Add,
    /// Subtract a value from a variable.
    Subtract,
    /// Divide a variable by a value.
    Divide,
    /// Multiply a variable by a value.
    Multiply,
}

impl ActionKind {
    /// Attempts to parse an action kind from its wire type tag.
    #[must_use]
    pub fn parse(action: &str) -> Option<Self> {
        match action {
            "jump" => Some(Self::Jump),
            "add" => Some(Self::Add),
            "subtract" => Some(Self::Subtract),
            "divide" => Some(Self::Divide),
            "multiply" => Some(Self::Multiply),
            _ => None,
        }
    }

    /// Returns the wire type tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Jump => "jump",
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Divide => "divide",
            Self::Multiply => "multiply",
        }
    }

    /// Returns the arithmetic display symbol, or `None` for jumps.
    #[must_use]
    pub const fn symbol(self) -> Option<&'static str> {
        match self {
            Self::Jump => None,
            Self::Add => Some("+"),
            Self::Subtract => Some("-"),
            Self::Divide => Some("/"),
            Self::Multiply => Some("x"),
        }
    }

    /// Returns true for the variable-arithmetic action kinds.
    #[must_use]
    pub const fn is_calculation(self) -> bool {
        !matches!(self, Self::Jump)
    }
}

/// Typed action payload, shaped by the action type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ActionDetails {
    /// Payload of a `jump` action.
    Jump(JumpDetails),
    /// Payload of a variable-arithmetic action.
    Calculation(CalculationDetails),
}

/// Payload of a `jump` action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JumpDetails {
    /// Destination of the jump.
    pub to: JumpTarget,
}

/// Destination of a jump action.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawTargetRef")]
pub enum JumpTarget {
    /// The form's thank-you screen.
    ThankYou,
    /// Another field, addressed by reference.
    Field(String),
}

/// Wire shape of a jump destination.
#[derive(Debug, Deserialize)]
struct RawTargetRef {
    /// Destination kind (`thankyou` or `field`).
    #[serde(rename = "type")]
    kind: String,
    /// Destination field reference when `kind` is `field`.
    #[serde(default)]
    value: Option<String>,
}

impl TryFrom<RawTargetRef> for JumpTarget {
    type Error = LogicParseError;

    fn try_from(raw: RawTargetRef) -> Result<Self, Self::Error> {
        match raw.kind.as_str() {
            "thankyou" => Ok(Self::ThankYou),
            "field" => raw.value.map_or(Err(LogicParseError::MissingJumpValue), |value| {
                Ok(Self::Field(value))
            }),
            _ => Err(LogicParseError::UnknownJumpTarget {
                kind: raw.kind,
            }),
        }
    }
}

/// Payload of a variable-arithmetic action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CalculationDetails {
    /// The assignment target descriptor.
    pub target: CalcTarget,
    /// The operand applied to the target.
    pub value: CalcValue,
}

/// Assignment target of a calculation.
///
/// The kind is kept raw: only `variable` targets are renderable, and the
/// render layer reports any other kind as an unsupported target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CalcTarget {
    /// Target kind; `variable` is the only supported value.
    #[serde(rename = "type")]
    pub kind: String,
    /// Target name, a variable name for `variable` targets.
    pub value: String,
}

/// Operand applied to a calculation target.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawCalcValue")]
pub enum CalcValue {
    /// A hidden-variable reference, displayed with an `@` prefix.
    Variable(String),
    /// A literal constant.
    Literal(Value),
}

/// Wire shape of a calculation operand.
#[derive(Debug, Deserialize)]
struct RawCalcValue {
    /// Operand kind (`variable` or a constant kind).
    #[serde(rename = "type")]
    kind: String,
    /// Operand payload.
    #[serde(default)]
    value: Value,
}

impl TryFrom<RawCalcValue> for CalcValue {
    type Error = LogicParseError;

    fn try_from(raw: RawCalcValue) -> Result<Self, Self::Error> {
        if raw.kind == "variable" {
            return match raw.value {
                Value::String(name) => Ok(Self::Variable(name)),
                _ => Err(LogicParseError::InvalidOperand {
                    kind: raw.kind,
                }),
            };
        }
        Ok(Self::Literal(raw.value))
    }
}
