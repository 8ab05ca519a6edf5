// shared fixtures for integration tests

use chrono::{DateTime, Utc};
use objfilter::{apply, impl_record, Condition, ConditionType, FilterError, Value};

pub struct ChildObject {
    pub id: i64,
    pub name: String,
}

impl_record!(ChildObject { id, name });

pub struct TestObject {
    pub id: i64,
    pub task_type: String,
    pub name: String,
    pub nicknames: Vec<String>,
    pub house_ids: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub child_object: Option<Box<ChildObject>>,
    pub score: Option<f64>,
}

impl_record!(TestObject {
    id,
    task_type,
    name,
    nicknames,
    house_ids,
    created_at,
    child_object,
    score,
});

/// a fully populated record; tests override what they need
pub fn test_object() -> TestObject {
    TestObject {
        id: 15,
        task_type: "magic".to_string(),
        name: "felix".to_string(),
        nicknames: vec!["foo".to_string(), "bar".to_string()],
        house_ids: vec![2, 4],
        created_at: Utc::now(),
        child_object: None,
        score: None,
    }
}

pub fn leaf(field: &str, op: ConditionType, value: impl Into<Value>) -> Condition {
    Condition::leaf(field, op, value)
}

pub fn equals(field: &str, value: impl Into<Value>) -> Condition {
    leaf(field, ConditionType::Equals, value)
}

/// evaluate a single condition with default settings
pub fn check(record: &TestObject, condition: &Condition) -> Result<bool, FilterError> {
    apply(record, Some(condition))
}
