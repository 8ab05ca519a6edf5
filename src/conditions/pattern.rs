//! regex operator

use regex::RegexBuilder;

use super::error::FilterError;
use super::types::ConditionType;
use crate::config::RegexSettings;
use crate::record::{FieldValue, Kind};

/// match a textual field against a pattern operand
///
/// a present reference to a string is followed. the pattern is compiled on
/// every call with the limits from `settings`.
pub fn regex_matches(
    op: ConditionType,
    field_name: &str,
    field: &FieldValue,
    operand: &FieldValue,
    settings: &RegexSettings,
) -> Result<bool, FilterError> {
    let text = field
        .deref_value()
        .as_str()
        .ok_or_else(|| FilterError::InvalidFieldType {
            field: field_name.to_string(),
            expected: Kind::Str.as_str(),
            found: field.kind(),
        })?;

    let pattern = operand.as_str().ok_or_else(|| FilterError::InvalidOperand {
        condition: op,
        expected: Kind::Str.as_str(),
        found: operand.kind(),
    })?;

    let re = RegexBuilder::new(pattern)
        .size_limit(settings.size_limit)
        .dfa_size_limit(settings.dfa_size_limit)
        .nest_limit(settings.nest_limit)
        .build()
        .map_err(|source| FilterError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;

    Ok(re.is_match(text))
}
