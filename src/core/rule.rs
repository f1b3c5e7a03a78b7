use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::types::BubblePoint;
use crate::error::{ChartError, ChartResult};

/// Comparison kind of a server-defined range rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleOperator {
    #[serde(rename = "BETWEEN")]
    Between,
    #[serde(rename = "LESS_THAN")]
    LessThan,
    #[serde(rename = "GREATER_THAN")]
    GreaterThan,
}

/// Target range condition a learner's configuration is checked against.
///
/// `value_b` is the upper bound for `Between` and unused otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleDescriptor {
    pub operator: RuleOperator,
    pub value_a: f64,
    pub value_b: Option<f64>,
}

impl RuleDescriptor {
    #[must_use]
    pub fn less_than(value_a: f64) -> Self {
        Self {
            operator: RuleOperator::LessThan,
            value_a,
            value_b: None,
        }
    }

    #[must_use]
    pub fn greater_than(value_a: f64) -> Self {
        Self {
            operator: RuleOperator::GreaterThan,
            value_a,
            value_b: None,
        }
    }

    #[must_use]
    pub fn between(value_a: f64, value_b: f64) -> Self {
        Self {
            operator: RuleOperator::Between,
            value_a,
            value_b: Some(value_b),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.value_a.is_finite() {
            return Err(ChartError::InvalidData(
                "rule value_a must be finite".to_owned(),
            ));
        }
        match self.operator {
            RuleOperator::Between => match self.value_b {
                Some(value_b) if value_b.is_finite() => Ok(()),
                Some(_) => Err(ChartError::InvalidData(
                    "rule value_b must be finite".to_owned(),
                )),
                None => Err(ChartError::InvalidData(
                    "BETWEEN rules require value_b".to_owned(),
                )),
            },
            RuleOperator::LessThan | RuleOperator::GreaterThan => Ok(()),
        }
    }
}

/// Grading result for one submitted configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub correct: bool,
    pub feedback: String,
}

/// Grades a point collection against a rule, producing the learner-facing
/// feedback message. Grading never fails: an impossible submission is an
/// incorrect outcome, not an error.
#[must_use]
pub fn evaluate_points(rule: &RuleDescriptor, points: &[BubblePoint]) -> RuleOutcome {
    let Some((min_y, max_y)) = y_extent(points) else {
        return RuleOutcome {
            correct: false,
            feedback: "No data points were submitted.".to_owned(),
        };
    };

    let a = rule.value_a;
    match rule.operator {
        RuleOperator::LessThan => {
            let correct = max_y < a;
            let feedback = if correct {
                format!(
                    "Well done! The range of your data is [{min_y:.1}km, {max_y:.1}km]. \
                     The maximum value ({max_y:.1}km) is less than {a:.1}km."
                )
            } else {
                format!(
                    "Not quite. The maximum value should be less than {a:.1}km, \
                     but your range is [{min_y:.1}km, {max_y:.1}km]."
                )
            };
            RuleOutcome { correct, feedback }
        }
        RuleOperator::GreaterThan => {
            let correct = min_y > a;
            let feedback = if correct {
                format!(
                    "Well done! The range of your data is [{min_y:.1}km, {max_y:.1}km]. \
                     The minimum value ({min_y:.1}km) is greater than {a:.1}km."
                )
            } else {
                format!(
                    "Not quite. The minimum value should be greater than {a:.1}km, \
                     but your range is [{min_y:.1}km, {max_y:.1}km]."
                )
            };
            RuleOutcome { correct, feedback }
        }
        RuleOperator::Between => {
            let Some(b) = rule.value_b else {
                return RuleOutcome {
                    correct: false,
                    feedback: "Challenge configuration error: BETWEEN operator requires two values."
                        .to_owned(),
                };
            };

            let correct = min_y >= a && max_y <= b;
            let feedback = if correct {
                format!(
                    "Well done! The range of your data is [{min_y:.1}km, {max_y:.1}km], \
                     which fits perfectly within the required range of [{a:.1}km, {b:.1}km]."
                )
            } else {
                let mut feedback = format!(
                    "Not quite. The required range was [{a:.1}km, {b:.1}km], \
                     but your range is [{min_y:.1}km, {max_y:.1}km]. "
                );
                if min_y < a {
                    feedback.push_str(&format!("The minimum value ({min_y:.1}km) is too low. "));
                }
                if max_y > b {
                    feedback.push_str(&format!("The maximum value ({max_y:.1}km) is too high."));
                }
                feedback
            };
            RuleOutcome { correct, feedback }
        }
    }
}

fn y_extent(points: &[BubblePoint]) -> Option<(f64, f64)> {
    let min = points.iter().map(|p| OrderedFloat(p.y)).min()?;
    let max = points.iter().map(|p| OrderedFloat(p.y)).max()?;
    Some((min.into_inner(), max.into_inner()))
}
