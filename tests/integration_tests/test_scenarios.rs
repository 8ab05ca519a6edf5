// end-to-end evaluation of whole condition trees

use objfilter::{apply, Condition, ConditionType, FilterError};

use crate::common::{check, equals, leaf, test_object};

#[test]
fn test_no_condition_matches_everything() {
    let record = test_object();
    assert_eq!(apply(&record, None), Ok(true));
    assert_eq!(check(&record, &Condition::where_clause(None)), Ok(true));
}

#[test]
fn test_and_with_contains() {
    let mut record = test_object();
    record.name = "Harry Potter".to_string();

    let condition = Condition::where_clause(Some(Condition::and(vec![
        equals("taskType", "magic"),
        leaf("name", ConditionType::Contains, "otter"),
    ])));
    assert_eq!(check(&record, &condition), Ok(true));
}

#[test]
fn test_nested_groups() {
    let mut record = test_object();
    record.id = 42;
    record.name = "Willi".to_string();
    record.house_ids = vec![1, 2, 3];

    let condition = Condition::and(vec![
        Condition::group(Condition::or(vec![equals("id", 42), equals("name", "Hans")])),
        Condition::group(Condition::and(vec![
            Condition::group(Condition::or(vec![
                equals("id", 999),
                equals("name", "Berta"),
            ])),
            Condition::group(leaf("houseIds", ConditionType::ArrayContains, 2)),
        ])),
    ]);
    assert_eq!(check(&record, &condition), Ok(false));

    // flipping the inner OR makes the whole tree match
    let condition = Condition::and(vec![
        Condition::group(Condition::or(vec![equals("id", 42), equals("name", "Hans")])),
        Condition::group(Condition::and(vec![
            Condition::group(Condition::or(vec![
                equals("id", 999),
                equals("name", "Willi"),
            ])),
            Condition::group(leaf("houseIds", ConditionType::ArrayContains, 2)),
        ])),
    ]);
    assert_eq!(check(&record, &condition), Ok(true));
}

#[test]
fn test_regex_scenario() {
    let mut record = test_object();
    record.name = "Mustermann".to_string();

    assert_eq!(check(&record, &leaf("name", ConditionType::Regex, "mann$")), Ok(true));
    assert_eq!(check(&record, &leaf("name", ConditionType::NotRegex, "frau$")), Ok(true));
    assert_eq!(check(&record, &leaf("name", ConditionType::Regex, "frau$")), Ok(false));
}

#[test]
fn test_unknown_field() {
    let record = test_object();
    assert_eq!(
        check(&record, &equals("unknownField", 1)),
        Err(FilterError::UnknownField("unknownField".to_string()))
    );
}

#[test]
fn test_field_names_are_case_and_separator_insensitive() {
    let record = test_object();
    for name in ["taskType", "task_type", "TaskType", "tasktype"] {
        assert_eq!(check(&record, &equals(name, "magic")), Ok(true), "{}", name);
    }
}

#[test]
fn test_failure_inside_deep_tree_reaches_caller() {
    let record = test_object();
    let condition = Condition::where_clause(Some(Condition::negate(Condition::group(
        Condition::or(vec![
            equals("id", 1),
            leaf("name", ConditionType::Regex, "("),
        ]),
    ))));
    assert!(matches!(
        check(&record, &condition),
        Err(FilterError::Pattern { .. })
    ));
}

#[test]
fn test_unknown_tag_from_host() {
    let err = objfilter::FieldCondition::from_tag("between", "id", 1).unwrap_err();
    assert_eq!(err, FilterError::UnknownOperator("between".to_string()));
    assert_eq!(err.to_string(), "unknown condition: between");
}

#[test]
fn test_nested_record_fields_compare_as_records() {
    let mut record = test_object();
    record.child_object = Some(Box::new(crate::common::ChildObject {
        id: 1,
        name: "kid".to_string(),
    }));

    let present = leaf("childObject", ConditionType::NotNil, objfilter::Value::Null);
    assert_eq!(check(&record, &present), Ok(true));
    // records never equal a literal
    assert_eq!(check(&record, &equals("childObject", "kid")), Ok(false));
    // but contains sees their textual form
    assert_eq!(check(&record, &leaf("childObject", ConditionType::Contains, "kid")), Ok(true));
}

struct Chore {
    r#type: String,
    id: i64,
}

objfilter::impl_record!(Chore { r#type, id });

#[test]
fn test_raw_identifier_fields_resolve_by_plain_name() {
    let chore = Chore {
        r#type: "magic".to_string(),
        id: 3,
    };
    let condition = Condition::and(vec![equals("type", "magic"), equals("id", 3)]);
    assert_eq!(apply(&chore, Some(&condition)), Ok(true));
}
