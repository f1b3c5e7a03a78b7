use tracing::debug;

use crate::core::{BubblePoint, RuleDescriptor, RuleOutcome, evaluate_points};
use crate::error::{ChartError, ChartResult};

use super::ChallengeDefinition;

/// Owns the canonical point collection for one challenge attempt.
///
/// The chart reports drag moves; the session reconciles them into its
/// collection and feeds the updated collection back into the chart. Grading
/// runs against whatever the collection holds at submit time.
#[derive(Debug, Clone, PartialEq)]
pub struct ChallengeSession {
    definition: ChallengeDefinition,
    points: Vec<BubblePoint>,
}

impl ChallengeSession {
    #[must_use]
    pub fn new(definition: ChallengeDefinition) -> Self {
        let points = definition.initial_points.clone();
        Self { definition, points }
    }

    #[must_use]
    pub fn definition(&self) -> &ChallengeDefinition {
        &self.definition
    }

    #[must_use]
    pub fn rule(&self) -> &RuleDescriptor {
        &self.definition.rule
    }

    #[must_use]
    pub fn points(&self) -> &[BubblePoint] {
        &self.points
    }

    /// Reconciles one drag report into the collection.
    pub fn apply_move(&mut self, label: &str, x: f64, y: f64) -> ChartResult<()> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "moved coordinates for `{label}` must be finite"
            )));
        }
        let point = self
            .points
            .iter_mut()
            .find(|point| point.label == label)
            .ok_or_else(|| ChartError::UnknownPoint {
                label: label.to_owned(),
            })?;
        point.x = x;
        point.y = y;
        Ok(())
    }

    /// Restores every point to its server-supplied initial values.
    pub fn reset(&mut self) {
        debug!(title = %self.definition.title, "resetting challenge session");
        self.points = self.definition.initial_points.clone();
    }

    /// Grades the current configuration against the challenge rule.
    #[must_use]
    pub fn evaluate(&self) -> RuleOutcome {
        evaluate_points(&self.definition.rule, &self.points)
    }
}
