//! condition evaluator
//!
//! walks a condition tree against one record. combinators recurse, field
//! nodes resolve their field afresh and hand it to the matching operator.
//! nothing is cached between calls and the record is only ever read.

use super::arrays::{array_contains, array_is_contained, arrays_overlap};
use super::compare::{contains_text, greater_than, is_in, is_nil, lower_than, values_equal};
use super::error::FilterError;
use super::pattern::regex_matches;
use super::types::{Condition, ConditionType, FieldCondition};
use crate::config::Settings;
use crate::observability::{log_debug, log_trace, log_warn};
use crate::record::{resolve, Record};

/// evaluates conditions with a fixed set of settings
///
/// holds no per-call state, so one evaluator can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    settings: Settings,
}

impl Evaluator {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// test `record` against `condition`
    ///
    /// an absent condition matches every record. the first failure anywhere
    /// in the tree ends the evaluation and is returned as is.
    pub fn apply<R: Record + ?Sized>(
        &self,
        record: &R,
        condition: Option<&Condition>,
    ) -> Result<bool, FilterError> {
        let Some(condition) = condition else {
            return Ok(true);
        };
        let record: &dyn Record = &record;

        let result = self.eval(record, condition);
        if let Err(err) = &result {
            log_debug!(
                component = "evaluator",
                event = "evaluation_failed",
                record_type = record.type_name(),
                condition = %condition,
                error = %err,
            );
        }
        result
    }

    /// keep the records matching `condition`, in order
    pub fn filter<'r, R: Record>(
        &self,
        records: &'r [R],
        condition: Option<&Condition>,
    ) -> Result<Vec<&'r R>, FilterError> {
        let mut matched = Vec::new();
        for record in records {
            if self.apply(record, condition)? {
                matched.push(record);
            }
        }
        Ok(matched)
    }

    fn eval(&self, record: &dyn Record, condition: &Condition) -> Result<bool, FilterError> {
        log_trace!(
            component = "evaluator",
            event = "eval_node",
            condition_type = condition.condition_type().as_str(),
        );

        match condition {
            Condition::Where(inner) | Condition::Group(inner) => match inner {
                Some(inner) => self.eval(record, inner),
                None => Ok(true),
            },
            Condition::Not(inner) => {
                let applies = match inner {
                    Some(inner) => self.eval(record, inner)?,
                    None => true,
                };
                Ok(!applies)
            }
            Condition::And(children) => {
                check_arity(ConditionType::And, children)?;
                for child in children {
                    if !self.eval(record, child)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Condition::Or(children) => {
                check_arity(ConditionType::Or, children)?;
                for child in children {
                    if self.eval(record, child)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Condition::Field(fc) => self.eval_field(record, fc),
        }
    }

    fn eval_field(&self, record: &dyn Record, fc: &FieldCondition) -> Result<bool, FilterError> {
        if fc.op.is_combinator() {
            return Err(wrong_node_kind(fc));
        }

        let name = fc.field.as_str();
        let field = resolve(record, name)?;
        let operand = fc.value.as_field_value();

        match fc.op {
            ConditionType::Equals => Ok(values_equal(&field, &operand)),
            ConditionType::NotEquals => Ok(!values_equal(&field, &operand)),
            ConditionType::Contains => Ok(contains_text(&field, &operand)),
            ConditionType::Regex => {
                regex_matches(fc.op, name, &field, &operand, &self.settings.regex)
            }
            ConditionType::NotRegex => {
                let matched = regex_matches(fc.op, name, &field, &operand, &self.settings.regex)?;
                Ok(!matched)
            }
            ConditionType::GreaterThan => greater_than(&field, &operand),
            ConditionType::GreaterThanOrEqual => {
                // both halves run so an incomparable pair fails even when equal
                let equal = values_equal(&field, &operand);
                let greater = greater_than(&field, &operand)?;
                Ok(equal || greater)
            }
            ConditionType::LowerThan => lower_than(&field, &operand),
            ConditionType::LowerThanOrEqual => {
                let equal = values_equal(&field, &operand);
                let lower = lower_than(&field, &operand)?;
                Ok(equal || lower)
            }
            ConditionType::In => is_in(&field, &operand),
            ConditionType::IsNil => Ok(is_nil(&field)),
            ConditionType::NotNil => Ok(!is_nil(&field)),
            // arrayContainsArray does not compare sequences: the operand is
            // matched as one element, exactly like arrayContains
            ConditionType::ArrayContains | ConditionType::ArrayContainsArray => {
                array_contains(name, &field, &operand)
            }
            ConditionType::ArraysOverlap | ConditionType::Overlaps => {
                arrays_overlap(fc.op, name, &field, &operand)
            }
            ConditionType::ArrayIsContained => array_is_contained(name, &field, &operand),
            ConditionType::And
            | ConditionType::Or
            | ConditionType::Not
            | ConditionType::Where
            | ConditionType::Group => Err(wrong_node_kind(fc)),
        }
    }
}

fn check_arity(condition: ConditionType, children: &[Condition]) -> Result<(), FilterError> {
    if children.len() < 2 {
        return Err(FilterError::InvalidArity {
            condition,
            count: children.len(),
        });
    }
    Ok(())
}

fn wrong_node_kind(fc: &FieldCondition) -> FilterError {
    log_warn!(
        component = "evaluator",
        event = "wrong_node_kind",
        field = fc.field.as_str(),
        condition_type = fc.op.as_str(),
    );
    FilterError::WrongNodeKind {
        field: fc.field.clone(),
        op: fc.op,
    }
}

/// test `record` against `condition` with default settings
pub fn apply<R: Record + ?Sized>(
    record: &R,
    condition: Option<&Condition>,
) -> Result<bool, FilterError> {
    Evaluator::default().apply(record, condition)
}
