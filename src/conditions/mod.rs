//! condition trees and their evaluation against records
//!
//! provides:
//! - boolean combinators: where, group, and, or, not
//! - comparisons: equals, notEquals, greater/lower than (and or-equal forms)
//! - text operators: contains, regex, notRegex
//! - membership and nil checks: in, isNil, notNil
//! - array and set operators: arrayContains, arraysOverlap, arrayIsContained
//!
//! trees are built elsewhere and handed over read-only; evaluation never
//! mutates the tree or the record.

mod arrays;
mod compare;
mod error;
mod eval;
mod pattern;
pub mod registry;
mod types;

pub use error::FilterError;
pub use eval::{apply, Evaluator};
pub use types::{Condition, ConditionType, FieldCondition, Value};
