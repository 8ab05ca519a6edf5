//! core types for the condition system

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, TimeZone};

use super::error::FilterError;
use crate::record::FieldValue;

/// condition type tags, one per operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConditionType {
    /// every child must match
    And,
    /// at least one child must match
    Or,
    /// negates its child
    Not,
    /// top-level wrapper; an empty where matches everything
    Where,
    /// explicit parenthesization
    Group,
    Equals,
    NotEquals,
    /// case-insensitive substring
    Contains,
    Regex,
    NotRegex,
    GreaterThan,
    GreaterThanOrEqual,
    LowerThan,
    LowerThanOrEqual,
    /// field value is one of the operand's elements
    In,
    IsNil,
    NotNil,
    ArrayContains,
    /// same test as ArrayContains: the operand is a single element
    ArrayContainsArray,
    /// field sequence is a subset of the operand sequence
    ArrayIsContained,
    ArraysOverlap,
    /// alias of ArraysOverlap
    Overlaps,
}

impl ConditionType {
    /// every tag a condition tree can carry
    pub const ALL: [ConditionType; 22] = [
        ConditionType::And,
        ConditionType::Or,
        ConditionType::Not,
        ConditionType::Where,
        ConditionType::Group,
        ConditionType::Equals,
        ConditionType::NotEquals,
        ConditionType::Contains,
        ConditionType::Regex,
        ConditionType::NotRegex,
        ConditionType::GreaterThan,
        ConditionType::GreaterThanOrEqual,
        ConditionType::LowerThan,
        ConditionType::LowerThanOrEqual,
        ConditionType::In,
        ConditionType::IsNil,
        ConditionType::NotNil,
        ConditionType::ArrayContains,
        ConditionType::ArrayContainsArray,
        ConditionType::ArrayIsContained,
        ConditionType::ArraysOverlap,
        ConditionType::Overlaps,
    ];

    /// the tag as it appears in condition trees
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionType::And => "and",
            ConditionType::Or => "or",
            ConditionType::Not => "not",
            ConditionType::Where => "where",
            ConditionType::Group => "group",
            ConditionType::Equals => "equals",
            ConditionType::NotEquals => "notEquals",
            ConditionType::Contains => "contains",
            ConditionType::Regex => "regex",
            ConditionType::NotRegex => "notRegex",
            ConditionType::GreaterThan => "greaterThan",
            ConditionType::GreaterThanOrEqual => "greaterThanOrEqual",
            ConditionType::LowerThan => "lowerThan",
            ConditionType::LowerThanOrEqual => "lowerThanOrEqual",
            ConditionType::In => "in",
            ConditionType::IsNil => "isNil",
            ConditionType::NotNil => "notNil",
            ConditionType::ArrayContains => "arrayContains",
            ConditionType::ArrayContainsArray => "arrayContainsArray",
            ConditionType::ArrayIsContained => "arrayIsContained",
            ConditionType::ArraysOverlap => "arraysOverlap",
            ConditionType::Overlaps => "overlaps",
        }
    }

    /// parse a tag through the operator registry
    pub fn parse(s: &str) -> Result<Self, FilterError> {
        super::registry::lookup(s)
    }

    /// boolean combinators hold child conditions instead of a field
    pub fn is_combinator(&self) -> bool {
        matches!(
            self,
            ConditionType::And
                | ConditionType::Or
                | ConditionType::Not
                | ConditionType::Where
                | ConditionType::Group
        )
    }
}

impl FromStr for ConditionType {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConditionType::parse(s)
    }
}

impl fmt::Display for ConditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// a literal operand carried by a field condition
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
    Timestamp(DateTime<FixedOffset>),
    /// sequence operand (for in and the array operators)
    List(Vec<Value>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// view the literal the same way a resolved field is viewed
    pub fn as_field_value(&self) -> FieldValue<'_> {
        match self {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Int(n) => FieldValue::Int(*n),
            Value::UInt(n) => FieldValue::UInt(*n),
            Value::Float(n) => FieldValue::Float(*n),
            Value::String(s) => FieldValue::Str(Cow::Borrowed(s.as_str())),
            Value::Timestamp(t) => FieldValue::Timestamp(*t),
            Value::List(items) => {
                FieldValue::Seq(items.iter().map(Value::as_field_value).collect())
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::UInt(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Timestamp(t) => write!(f, "{}", t.to_rfc3339()),
            Value::List(l) => {
                write!(f, "[")?;
                for (i, v) in l.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
        }
    }
}

macro_rules! value_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::Int(n as i64)
            }
        })*
    };
}

macro_rules! value_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::UInt(n as u64)
            }
        })*
    };
}

value_from_signed!(i8, i16, i32, i64, isize);
value_from_unsigned!(u8, u16, u32, u64, usize);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(t: DateTime<Tz>) -> Self {
        Value::Timestamp(t.fixed_offset())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Value::List(items.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

/// a single field condition
#[derive(Debug, Clone, PartialEq)]
pub struct FieldCondition {
    /// field name in lower camel case (e.g. "houseIds")
    pub field: String,
    /// operator
    pub op: ConditionType,
    /// literal operand
    pub value: Value,
}

impl FieldCondition {
    /// create a new field condition
    pub fn new(field: impl Into<String>, op: ConditionType, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// create a field condition from its tag
    pub fn from_tag(
        tag: &str,
        field: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Self, FilterError> {
        Ok(Self::new(field, ConditionType::parse(tag)?, value))
    }

    /// create an equality condition
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, ConditionType::Equals, value)
    }

    /// create an 'in' condition
    pub fn is_in<T: Into<Value>>(field: impl Into<String>, values: Vec<T>) -> Self {
        Self::new(field, ConditionType::In, Value::from(values))
    }
}

impl fmt::Display for FieldCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op {
            ConditionType::IsNil | ConditionType::NotNil => write!(f, "{} {}", self.field, self.op),
            _ => write!(f, "{} {} {}", self.field, self.op, self.value),
        }
    }
}

/// a node of the condition tree
///
/// trees are built by the host and only read here; an absent child of
/// where, group or not stands for "always true".
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// top-level wrapper
    Where(Option<Box<Condition>>),
    /// explicit parenthesization
    Group(Option<Box<Condition>>),
    /// all conditions must be true (AND)
    And(Vec<Condition>),
    /// any condition must be true (OR)
    Or(Vec<Condition>),
    /// negate a condition (NOT)
    Not(Option<Box<Condition>>),
    /// a field comparison
    Field(FieldCondition),
}

impl Condition {
    /// create an AND condition
    pub fn and(conditions: Vec<Condition>) -> Self {
        Condition::And(conditions)
    }

    /// create an OR condition
    pub fn or(conditions: Vec<Condition>) -> Self {
        Condition::Or(conditions)
    }

    /// create a NOT condition
    pub fn negate(condition: Condition) -> Self {
        Condition::Not(Some(Box::new(condition)))
    }

    /// create a GROUP condition
    pub fn group(condition: Condition) -> Self {
        Condition::Group(Some(Box::new(condition)))
    }

    /// create a WHERE condition; `None` matches everything
    pub fn where_clause(condition: Option<Condition>) -> Self {
        Condition::Where(condition.map(Box::new))
    }

    /// create a field condition
    pub fn field(fc: FieldCondition) -> Self {
        Condition::Field(fc)
    }

    /// create a field condition from its parts
    pub fn leaf(field: impl Into<String>, op: ConditionType, value: impl Into<Value>) -> Self {
        Condition::Field(FieldCondition::new(field, op, value))
    }

    /// the type tag of this node
    pub fn condition_type(&self) -> ConditionType {
        match self {
            Condition::Where(_) => ConditionType::Where,
            Condition::Group(_) => ConditionType::Group,
            Condition::And(_) => ConditionType::And,
            Condition::Or(_) => ConditionType::Or,
            Condition::Not(_) => ConditionType::Not,
            Condition::Field(fc) => fc.op,
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, name: &str, conditions: &[Condition]) -> fmt::Result {
    write!(f, "{}(", name)?;
    for (i, c) in conditions.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", c)?;
    }
    write!(f, ")")
}

fn write_wrapped(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    inner: &Option<Box<Condition>>,
) -> fmt::Result {
    match inner {
        Some(c) => write!(f, "{}({})", name, c),
        None => write!(f, "{}()", name),
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Where(inner) => write_wrapped(f, "where", inner),
            Condition::Group(inner) => write_wrapped(f, "group", inner),
            Condition::And(conditions) => write_list(f, "and", conditions),
            Condition::Or(conditions) => write_list(f, "or", conditions),
            Condition::Not(inner) => write_wrapped(f, "not", inner),
            Condition::Field(fc) => write!(f, "{}", fc),
        }
    }
}
