//! field resolution
//!
//! callers always spell field names in lower camel case; records may use any
//! convention (`house_ids`, `HouseIds`, `houseIds`). both sides are folded to
//! one canonical spelling before comparing.

use convert_case::{Case, Casing};

use super::{FieldValue, Record};
use crate::conditions::FilterError;

/// canonical spelling of a field name
pub fn normalize_field_name(name: &str) -> String {
    name.to_case(Case::Camel).to_lowercase()
}

/// locate the attribute `name` on `record`
///
/// the returned value borrows from the record; nothing is cached between
/// calls.
pub fn resolve<'r>(record: &'r dyn Record, name: &str) -> Result<FieldValue<'r>, FilterError> {
    let names = record
        .attribute_names()
        .ok_or_else(|| FilterError::InvalidRecordType(record.type_name().to_string()))?;

    let wanted = normalize_field_name(name);
    let declared = names
        .into_iter()
        .find(|candidate| normalize_field_name(candidate) == wanted)
        .ok_or_else(|| FilterError::UnknownField(name.to_string()))?;

    record
        .attribute(declared)
        .ok_or_else(|| FilterError::UnknownField(name.to_string()))
}
