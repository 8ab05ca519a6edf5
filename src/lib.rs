// library crate for objfilter
// evaluates declarative condition trees against in-memory records

pub mod conditions;
pub mod config;
mod observability;
pub mod record;

pub use conditions::{
    apply, registry, Condition, ConditionType, Evaluator, FieldCondition, FilterError, Value,
};
pub use config::Settings;
pub use record::{FieldValue, Kind, Record, ToFieldValue};
