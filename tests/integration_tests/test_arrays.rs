// array and set operators

use objfilter::{ConditionType, FilterError, Kind, Value};

use crate::common::{check, leaf, test_object};

#[test]
fn test_array_contains() {
    let record = test_object();
    assert_eq!(check(&record, &leaf("houseIds", ConditionType::ArrayContains, 2)), Ok(true));
    assert_eq!(check(&record, &leaf("houseIds", ConditionType::ArrayContains, 3)), Ok(false));
    assert_eq!(check(&record, &leaf("nicknames", ConditionType::ArrayContains, "bar")), Ok(true));
}

#[test]
fn test_array_contains_on_text_field() {
    let record = test_object();
    assert_eq!(check(&record, &leaf("name", ConditionType::ArrayContains, "LI")), Ok(true));
}

#[test]
fn test_array_contains_requires_sequence() {
    let record = test_object();
    assert_eq!(
        check(&record, &leaf("id", ConditionType::ArrayContains, 15)),
        Err(FilterError::InvalidFieldType {
            field: "id".to_string(),
            expected: "sequence",
            found: Kind::Int,
        })
    );
}

#[test]
fn test_array_contains_array_is_single_element_membership() {
    let record = test_object();
    assert_eq!(check(&record, &leaf("houseIds", ConditionType::ArrayContainsArray, 2)), Ok(true));
    // a sequence operand is one element and matches no integer
    assert_eq!(
        check(&record, &leaf("houseIds", ConditionType::ArrayContainsArray, vec![2, 4])),
        Ok(false)
    );
}

#[test]
fn test_overlap_boundaries() {
    let mut record = test_object();
    for op in [ConditionType::ArraysOverlap, ConditionType::Overlaps] {
        assert_eq!(check(&record, &leaf("houseIds", op, Vec::<i64>::new())), Ok(false));
        assert_eq!(check(&record, &leaf("houseIds", op, Value::Null)), Ok(false));
    }

    // empty field never reaches the type check
    record.house_ids.clear();
    let overlap = leaf("houseIds", ConditionType::ArraysOverlap, vec!["x"]);
    assert_eq!(check(&record, &overlap), Ok(false));
}

#[test]
fn test_overlap_is_order_independent() {
    let record = test_object();
    let forward = check(&record, &leaf("houseIds", ConditionType::ArraysOverlap, vec![4, 6, 8]));
    let backward = check(&record, &leaf("houseIds", ConditionType::ArraysOverlap, vec![8, 6, 4]));
    assert_eq!(forward, Ok(true));
    assert_eq!(forward, backward);

    let overlap = leaf("nicknames", ConditionType::Overlaps, vec!["baz", "foo"]);
    assert_eq!(check(&record, &overlap), Ok(true));
    assert_eq!(check(&record, &leaf("nicknames", ConditionType::Overlaps, vec!["baz"])), Ok(false));
}

#[test]
fn test_overlap_type_mismatch() {
    let record = test_object();
    assert_eq!(
        check(&record, &leaf("houseIds", ConditionType::ArraysOverlap, vec!["2"])),
        Err(FilterError::TypeMismatch {
            field: Kind::Int,
            operand: Kind::Str,
        })
    );
    // signed and unsigned elements are distinct types for set operators
    assert!(matches!(
        check(&record, &leaf("houseIds", ConditionType::ArraysOverlap, vec![2u32])),
        Err(FilterError::TypeMismatch { .. })
    ));
}

#[test]
fn test_array_is_contained() {
    let mut record = test_object();
    let op = ConditionType::ArrayIsContained;

    assert_eq!(check(&record, &leaf("houseIds", op, vec![1, 2, 3, 4])), Ok(true));
    assert_eq!(check(&record, &leaf("houseIds", op, vec![4, 2])), Ok(true));
    assert_eq!(check(&record, &leaf("houseIds", op, vec![2, 3])), Ok(false));
    assert_eq!(check(&record, &leaf("houseIds", op, Value::Null)), Ok(false));

    record.house_ids.clear();
    for operand in [Value::Null, Value::from(vec!["test"]), Value::from(Vec::<i64>::new())] {
        assert_eq!(check(&record, &leaf("houseIds", op, operand)), Ok(true));
    }
}

#[test]
fn test_set_operators_reject_scalar_operand() {
    let record = test_object();
    assert!(matches!(
        check(&record, &leaf("houseIds", ConditionType::ArrayIsContained, 2)),
        Err(FilterError::InvalidOperand {
            condition: ConditionType::ArrayIsContained,
            ..
        })
    ));
}
