use serde::{Deserialize, Serialize};

/// Outcome of a single bounded-time page retrieval.
///
/// Failures are values, not propagated errors: one unreachable site must never
/// abort the batch it belongs to. The reason string is human-readable and ends
/// up in the activity log, not in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum FetchOutcome {
    Success { body: String },
    Failure { reason: String },
}

impl FetchOutcome {
    pub fn success(body: impl Into<String>) -> Self {
        Self::Success { body: body.into() }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failure {
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The response body, if the fetch succeeded.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Success { body } => Some(body),
            Self::Failure { .. } => None,
        }
    }

    /// The failure reason, if the fetch failed.
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { reason } => Some(reason),
        }
    }
}
