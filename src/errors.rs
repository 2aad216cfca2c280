// Domain error taxonomy
//
// Only the failures the planner recovers from (or names explicitly) live here.
// Everything else travels as anyhow::Error with context attached.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    /// Goal or detail level was empty after trimming
    #[error("goal and detail level must both be non-empty")]
    InvalidInput,

    /// The configured provider identifier matches no backend
    #[error("LLM provider \"{0}\" is not supported (expected one of: openai, gemini)")]
    UnsupportedProvider(String),

    /// Phase-1 output could not be turned into a question list
    #[error("malformed question plan: {reason}")]
    MalformedPlan { reason: String, raw: String },
}

impl PlanError {
    pub(crate) fn malformed(reason: impl Into<String>, raw: &str) -> Self {
        Self::MalformedPlan {
            reason: reason.into(),
            raw: raw.to_string(),
        }
    }
}
