//! Application-level error types.

use greenhouse_domain::error::DomainError;
use greenhouse_domain::id::AlertId;

/// A request never produced a usable response (network failure, non-JSON
/// body, …).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Why a dashboard command did not change the view state.
///
/// Operator-facing notifications have already been shown by the time one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("cancelled by operator")]
    Cancelled,

    #[error("invalid input")]
    InvalidInput(#[from] DomainError),

    #[error("rejected by server: {}", .message.as_deref().unwrap_or("no reason given"))]
    Rejected { message: Option<String> },

    #[error("request failed")]
    Transport(#[from] TransportError),

    #[error("response superseded by a newer request")]
    Stale,

    #[error("alert {0} is not awaiting acknowledgment")]
    AlertUnavailable(AlertId),
}
