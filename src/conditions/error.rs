//! failures reported by condition evaluation

use thiserror::Error;

use super::types::ConditionType;
use crate::record::Kind;

/// error returned by [`apply`](crate::apply) and every operator
///
/// every failure ends evaluation of the whole tree and reaches the caller
/// unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// tag not present in the operator registry
    #[error("unknown condition: {0}")]
    UnknownOperator(String),

    /// a field node carrying a combinator tag
    #[error("condition on field '{field}' has type {op}, which is not a field operator")]
    WrongNodeKind { field: String, op: ConditionType },

    /// AND/OR with fewer than two children
    #[error("{condition} condition must have at least two conditions, got {count}")]
    InvalidArity {
        condition: ConditionType,
        count: usize,
    },

    #[error("invalid record type: {0}")]
    InvalidRecordType(String),

    #[error("field '{0}' was not found on record")]
    UnknownField(String),

    #[error("field '{field}' must be of type {expected} but is of type {found}")]
    InvalidFieldType {
        field: String,
        expected: &'static str,
        found: Kind,
    },

    #[error("{condition} value must be of type {expected} but is of type {found}")]
    InvalidOperand {
        condition: ConditionType,
        expected: &'static str,
        found: Kind,
    },

    /// element types of field and operand sequences differ
    #[error("type mismatch: cannot compare {field} (field) and {operand} (value)")]
    TypeMismatch { field: Kind, operand: Kind },

    #[error("cannot compare variables of type {field} and {operand}")]
    Incomparable { field: Kind, operand: Kind },

    #[error("invalid regular expression '{pattern}'")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
