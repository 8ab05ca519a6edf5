//! operator registry
//!
//! maps every condition tag to the operator the dispatcher runs for it. the
//! table is built once on first use and is read-only afterwards, so it can be
//! shared by concurrent evaluations without locking.

use std::collections::HashMap;

use super::error::FilterError;
use super::types::ConditionType;

lazy_static::lazy_static! {
    static ref REGISTRY: HashMap<&'static str, ConditionType> = ConditionType::ALL
        .iter()
        .map(|t| (t.as_str(), *t))
        .collect();
}

/// resolve a condition tag
pub fn lookup(tag: &str) -> Result<ConditionType, FilterError> {
    REGISTRY
        .get(tag)
        .copied()
        .ok_or_else(|| FilterError::UnknownOperator(tag.to_string()))
}

/// every tag the evaluator implements, sorted
pub fn supported_condition_types() -> Vec<&'static str> {
    let mut tags: Vec<&'static str> = REGISTRY.keys().copied().collect();
    tags.sort_unstable();
    tags
}

/// tags a host expects that the evaluator does not implement
///
/// an empty result means the host's tree builder cannot produce a condition
/// the evaluator would reject as unknown.
pub fn verify_coverage<'a>(expected: &[&'a str]) -> Vec<&'a str> {
    expected
        .iter()
        .copied()
        .filter(|tag| !REGISTRY.contains_key::<str>(tag))
        .collect()
}
