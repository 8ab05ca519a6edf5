// operator registry introspection

use std::str::FromStr;

use objfilter::{registry, ConditionType, FilterError};

/// every tag a tree builder can produce
const BUILDER_TAGS: [&str; 22] = [
    "and",
    "or",
    "not",
    "where",
    "group",
    "equals",
    "notEquals",
    "contains",
    "regex",
    "notRegex",
    "greaterThan",
    "greaterThanOrEqual",
    "lowerThan",
    "lowerThanOrEqual",
    "in",
    "isNil",
    "notNil",
    "arrayContains",
    "arrayContainsArray",
    "arrayIsContained",
    "arraysOverlap",
    "overlaps",
];

#[test]
fn test_registry_implements_all_condition_types() {
    assert!(registry::verify_coverage(&BUILDER_TAGS).is_empty());

    let mut expected = BUILDER_TAGS.to_vec();
    expected.sort_unstable();
    assert_eq!(registry::supported_condition_types(), expected);
}

#[test]
fn test_tags_round_trip() {
    for tag in BUILDER_TAGS {
        let parsed = ConditionType::from_str(tag).unwrap();
        assert_eq!(parsed.as_str(), tag);
        assert_eq!(registry::lookup(tag), Ok(parsed));
    }
}

#[test]
fn test_combinators() {
    let combinators: Vec<&str> = ConditionType::ALL
        .iter()
        .filter(|t| t.is_combinator())
        .map(|t| t.as_str())
        .collect();
    assert_eq!(combinators.len(), 5);
    for tag in ["and", "or", "not", "where", "group"] {
        assert!(combinators.contains(&tag));
    }
}

#[test]
fn test_unknown_tag() {
    assert_eq!(
        registry::lookup("notIn"),
        Err(FilterError::UnknownOperator("notIn".to_string()))
    );
    assert_eq!(registry::verify_coverage(&["equals", "notIn"]), vec!["notIn"]);
}
