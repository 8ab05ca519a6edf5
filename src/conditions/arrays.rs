//! array and set operators
//!
//! all of them need a sequence-valued field. overlap and subset tests treat
//! both sides as sets: order does not matter, and once both sides are
//! non-empty the element types of field and operand must agree. null
//! elements do not count towards the element type.

use std::collections::HashSet;

use chrono::NaiveDateTime;

use super::compare::{contains_text, integral_float, values_equal};
use super::error::FilterError;
use super::types::ConditionType;
use crate::record::{FieldValue, Kind};

fn require_seq<'v, 'a>(
    field_name: &str,
    field: &'v FieldValue<'a>,
) -> Result<&'v [FieldValue<'a>], FilterError> {
    field.as_seq().ok_or_else(|| FilterError::InvalidFieldType {
        field: field_name.to_string(),
        expected: "sequence",
        found: field.kind(),
    })
}

/// `Ok(None)` for a null operand
fn operand_items<'v, 'a>(
    op: ConditionType,
    operand: &'v FieldValue<'a>,
) -> Result<Option<&'v [FieldValue<'a>]>, FilterError> {
    match operand {
        FieldValue::Null => Ok(None),
        FieldValue::Seq(items) => Ok(Some(items)),
        other => Err(FilterError::InvalidOperand {
            condition: op,
            expected: "sequence",
            found: other.kind(),
        }),
    }
}

/// common kind of the non-null elements, `Mixed` when they differ
///
/// `Null` when there is no non-null element.
pub fn element_kind(items: &[FieldValue]) -> Kind {
    let mut kinds = items.iter().map(FieldValue::kind).filter(|k| *k != Kind::Null);
    match kinds.next() {
        Some(first) if kinds.all(|k| k == first) => first,
        Some(_) => Kind::Mixed,
        None => Kind::Null,
    }
}

/// an all-null side fits anything, mixed only fits mixed
fn check_element_types(field: &[FieldValue], operand: &[FieldValue]) -> Result<(), FilterError> {
    let field_kind = element_kind(field);
    let operand_kind = element_kind(operand);
    if field_kind == operand_kind || field_kind == Kind::Null || operand_kind == Kind::Null {
        return Ok(());
    }
    Err(FilterError::TypeMismatch {
        field: field_kind,
        operand: operand_kind,
    })
}

#[derive(Debug, PartialEq, Eq, Hash)]
enum MemberKey<'v> {
    Null,
    Bool(bool),
    /// any whole number, whatever its numeric kind
    Whole(i128),
    Float(u64),
    Str(&'v str),
    Timestamp(NaiveDateTime),
}

impl<'v> MemberKey<'v> {
    /// hashable form of a scalar; composite values and NaN have none
    ///
    /// keys agree exactly when `values_equal` does.
    fn of(value: &'v FieldValue<'_>) -> Option<Self> {
        match value {
            FieldValue::Null => Some(MemberKey::Null),
            FieldValue::Bool(b) => Some(MemberKey::Bool(*b)),
            FieldValue::Int(n) => Some(MemberKey::Whole(i128::from(*n))),
            FieldValue::UInt(n) => Some(MemberKey::Whole(i128::from(*n))),
            FieldValue::Float(n) if n.is_nan() => None,
            // also folds -0.0 onto 0
            FieldValue::Float(n) => match integral_float(*n) {
                Some(whole) => Some(MemberKey::Whole(whole)),
                None => Some(MemberKey::Float(n.to_bits())),
            },
            FieldValue::Str(s) => Some(MemberKey::Str(s.as_ref())),
            FieldValue::Timestamp(t) => Some(MemberKey::Timestamp(t.naive_utc())),
            FieldValue::Seq(_) | FieldValue::Ref(_) | FieldValue::Record(_) => None,
        }
    }
}

/// membership set over the operand sequence
struct Membership<'v, 'a> {
    keys: HashSet<MemberKey<'v>>,
    unkeyed: Vec<&'v FieldValue<'a>>,
}

impl<'v, 'a> Membership<'v, 'a> {
    fn new(items: &'v [FieldValue<'a>]) -> Self {
        let mut keys = HashSet::with_capacity(items.len());
        let mut unkeyed = Vec::new();
        for item in items {
            match MemberKey::of(item) {
                Some(key) => {
                    keys.insert(key);
                }
                None => unkeyed.push(item),
            }
        }
        Self { keys, unkeyed }
    }

    fn contains(&self, probe: &FieldValue) -> bool {
        match MemberKey::of(probe) {
            Some(key) => self.keys.contains(&key),
            None => self.unkeyed.iter().any(|member| values_equal(member, probe)),
        }
    }
}

/// a textual field degrades to a substring test; otherwise one element
/// must equal the operand
pub fn array_contains(
    field_name: &str,
    field: &FieldValue,
    operand: &FieldValue,
) -> Result<bool, FilterError> {
    if let FieldValue::Str(_) = field {
        return Ok(contains_text(field, operand));
    }
    let items = require_seq(field_name, field)?;
    Ok(items.iter().any(|item| values_equal(item, operand)))
}

/// the two sequences share at least one element
pub fn arrays_overlap(
    op: ConditionType,
    field_name: &str,
    field: &FieldValue,
    operand: &FieldValue,
) -> Result<bool, FilterError> {
    let items = require_seq(field_name, field)?;
    if items.is_empty() {
        return Ok(false);
    }
    let candidates = match operand_items(op, operand)? {
        Some(candidates) if !candidates.is_empty() => candidates,
        _ => return Ok(false),
    };
    check_element_types(items, candidates)?;

    let members = Membership::new(candidates);
    Ok(items.iter().any(|item| members.contains(item)))
}

/// every element of the field appears in the operand
pub fn array_is_contained(
    field_name: &str,
    field: &FieldValue,
    operand: &FieldValue,
) -> Result<bool, FilterError> {
    let items = require_seq(field_name, field)?;
    if items.is_empty() {
        return Ok(true);
    }
    let candidates = match operand_items(ConditionType::ArrayIsContained, operand)? {
        Some(candidates) if !candidates.is_empty() => candidates,
        _ => return Ok(false),
    };
    check_element_types(items, candidates)?;

    let members = Membership::new(candidates);
    Ok(items.iter().all(|item| members.contains(item)))
}
