//! Challenge orchestration: wire contract types and the session that owns
//! the canonical point collection between the chart and the grader.

mod session;
mod wire;

pub use session::ChallengeSession;
pub use wire::{
    ChallengeDefinition, ChallengeDetail, ChallengeSummary, InitialDataPoint, SubmissionRequest,
    SubmissionResponse,
};
