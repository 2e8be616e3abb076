//! Errors surfaced at the round controller boundary.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Transport failure, non-2xx HTTP status, or a non-"ok" status field.
    #[error("request failed: {detail}")]
    RequestFailed { detail: String },
    /// The response body did not have the expected shape.
    #[error("protocol error: {detail}")]
    Protocol { detail: String },
}

impl RoundError {
    pub fn request_failed(detail: impl Into<String>) -> Self {
        RoundError::RequestFailed {
            detail: detail.into(),
        }
    }

    pub fn protocol(detail: impl Into<String>) -> Self {
        RoundError::Protocol {
            detail: detail.into(),
        }
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            RoundError::RequestFailed { .. } => "REQUEST_FAILED",
            RoundError::Protocol { .. } => "PROTOCOL_ERROR",
        }
    }
}

impl From<reqwest::Error> for RoundError {
    fn from(e: reqwest::Error) -> Self {
        RoundError::request_failed(e.to_string())
    }
}
