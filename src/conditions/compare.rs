//! equality, ordering and membership on resolved values

use std::cmp::Ordering;

use super::error::FilterError;
use super::types::ConditionType;
use crate::record::FieldValue;

#[derive(Debug, Clone, Copy)]
enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl Number {
    fn of(value: &FieldValue) -> Option<Self> {
        match value {
            FieldValue::Int(n) => Some(Number::Int(*n)),
            FieldValue::UInt(n) => Some(Number::UInt(*n)),
            FieldValue::Float(n) => Some(Number::Float(*n)),
            _ => None,
        }
    }

    fn to_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::UInt(n) => n as f64,
            Number::Float(n) => n,
        }
    }

    fn to_i128(self) -> Option<i128> {
        match self {
            Number::Int(n) => Some(i128::from(n)),
            Number::UInt(n) => Some(i128::from(n)),
            Number::Float(n) => integral_float(n),
        }
    }
}

/// exact integer value of a whole float within i128 range
pub(crate) fn integral_float(n: f64) -> Option<i128> {
    const LIMIT: f64 = (1u128 << 126) as f64;
    if n.is_finite() && n.fract() == 0.0 && n.abs() < LIMIT {
        Some(n as i128)
    } else {
        None
    }
}

/// whole numbers compare exactly, anything with a fractional part goes
/// through f64
fn compare_numbers(a: Number, b: Number) -> Option<Ordering> {
    match (a.to_i128(), b.to_i128()) {
        (Some(x), Some(y)) => Some(x.cmp(&y)),
        _ => a.to_f64().partial_cmp(&b.to_f64()),
    }
}

/// value equality shared by equals, in, the ordering variants and the
/// array operators
///
/// values of different kinds are unequal, except that numbers compare by
/// numeric value and timestamps by instant.
pub fn values_equal(a: &FieldValue, b: &FieldValue) -> bool {
    match (a, b) {
        (FieldValue::Null, FieldValue::Null) => true,
        (FieldValue::Bool(x), FieldValue::Bool(y)) => x == y,
        (FieldValue::Str(x), FieldValue::Str(y)) => x == y,
        (FieldValue::Timestamp(x), FieldValue::Timestamp(y)) => x == y,
        (FieldValue::Seq(x), FieldValue::Seq(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| values_equal(l, r))
        }
        (FieldValue::Ref(x), FieldValue::Ref(y)) => values_equal(x, y),
        _ => match (Number::of(a), Number::of(b)) {
            (Some(x), Some(y)) => compare_numbers(x, y) == Some(Ordering::Equal),
            _ => false,
        },
    }
}

/// order a field value against an operand
///
/// `Ok(None)` means both are orderable but unordered (NaN).
pub fn order(field: &FieldValue, operand: &FieldValue) -> Result<Option<Ordering>, FilterError> {
    if let (Some(x), Some(y)) = (Number::of(field), Number::of(operand)) {
        return Ok(compare_numbers(x, y));
    }

    match (field, operand) {
        (FieldValue::Str(x), FieldValue::Str(y)) => Ok(Some(x.cmp(y))),
        (FieldValue::Timestamp(x), FieldValue::Timestamp(y)) => Ok(Some(x.cmp(y))),
        _ => Err(FilterError::Incomparable {
            field: field.kind(),
            operand: operand.kind(),
        }),
    }
}

pub fn greater_than(field: &FieldValue, operand: &FieldValue) -> Result<bool, FilterError> {
    Ok(order(field, operand)? == Some(Ordering::Greater))
}

pub fn lower_than(field: &FieldValue, operand: &FieldValue) -> Result<bool, FilterError> {
    Ok(order(field, operand)? == Some(Ordering::Less))
}

/// case-insensitive substring test on the textual forms
pub fn contains_text(field: &FieldValue, operand: &FieldValue) -> bool {
    let haystack = field.to_string().to_lowercase();
    let needle = operand.to_string().to_lowercase();
    haystack.contains(&needle)
}

/// field equals at least one element of the operand sequence
pub fn is_in(field: &FieldValue, operand: &FieldValue) -> Result<bool, FilterError> {
    match operand {
        FieldValue::Seq(items) => Ok(items.iter().any(|item| values_equal(field, item))),
        other => Err(FilterError::InvalidOperand {
            condition: ConditionType::In,
            expected: "sequence",
            found: other.kind(),
        }),
    }
}

/// only reference-like kinds can be nil; everything else never is
pub fn is_nil(field: &FieldValue) -> bool {
    field.kind().is_nullable() && field.is_nil()
}
