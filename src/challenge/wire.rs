//! Serde payloads matching the challenge backend's JSON contract.
//!
//! Transport is the host's concern; this module only fixes the shapes so a
//! session can be hydrated from fixture or response bodies and graded
//! output can be served back in the same format.

use serde::{Deserialize, Serialize};

use crate::core::{BubblePoint, RuleDescriptor, RuleOperator, RuleOutcome};
use crate::error::{ChartError, ChartResult};

/// `GET /api/challenges/` list entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeSummary {
    pub id: i64,
    pub title: String,
    pub instruction_text: String,
}

/// One seeded data point inside a challenge detail payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitialDataPoint {
    pub label: String,
    pub initial_x: f64,
    pub initial_y: f64,
    pub initial_z: f64,
}

/// `GET /api/challenge/{id}/` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeDetail {
    pub title: String,
    pub instruction_text: String,
    pub rule_operator: RuleOperator,
    pub rule_value_a: f64,
    #[serde(default)]
    pub rule_value_b: Option<f64>,
    pub initial_data: Vec<InitialDataPoint>,
}

impl ChallengeDetail {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse challenge detail payload: {e}"))
        })
    }
}

/// `POST /api/challenge/{id}/submit/` request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub submitted_data: Vec<BubblePoint>,
}

impl SubmissionRequest {
    pub fn to_json(&self) -> ChartResult<String> {
        serde_json::to_string(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize submission payload: {e}"))
        })
    }
}

/// `POST /api/challenge/{id}/submit/` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub correct: bool,
    pub feedback: String,
}

impl From<RuleOutcome> for SubmissionResponse {
    fn from(outcome: RuleOutcome) -> Self {
        Self {
            correct: outcome.correct,
            feedback: outcome.feedback,
        }
    }
}

/// Validated, engine-ready form of a challenge detail payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ChallengeDefinition {
    pub title: String,
    pub instruction_text: String,
    pub rule: RuleDescriptor,
    pub initial_points: Vec<BubblePoint>,
}

impl TryFrom<ChallengeDetail> for ChallengeDefinition {
    type Error = ChartError;

    fn try_from(detail: ChallengeDetail) -> ChartResult<Self> {
        let rule = RuleDescriptor {
            operator: detail.rule_operator,
            value_a: detail.rule_value_a,
            value_b: detail.rule_value_b,
        };
        rule.validate()?;

        let initial_points: Vec<BubblePoint> = detail
            .initial_data
            .into_iter()
            .map(|point| {
                BubblePoint::new(point.label, point.initial_x, point.initial_y, point.initial_z)
            })
            .collect();
        for point in &initial_points {
            point.validate()?;
        }

        Ok(Self {
            title: detail.title,
            instruction_text: detail.instruction_text,
            rule,
            initial_points,
        })
    }
}
