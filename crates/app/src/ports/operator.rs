//! Operator port: the person in front of the dashboard.

use std::fmt;

/// Messages surfaced to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A device command was refused or could not be delivered.
    DeviceCommandFailed(Option<String>),
    AlertHandlingFailed,
    ThresholdUpdated,
    ThresholdUpdateFailed,
}

impl Notice {
    /// Whether the notice reports a failure.
    #[must_use]
    pub fn is_error(&self) -> bool {
        !matches!(self, Self::ThresholdUpdated)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeviceCommandFailed(message) => write!(
                f,
                "Operation failed: {}",
                message.as_deref().unwrap_or("Unknown error")
            ),
            Self::AlertHandlingFailed => f.write_str("Failed to handle alert"),
            Self::ThresholdUpdated => f.write_str("Threshold updated"),
            Self::ThresholdUpdateFailed => f.write_str("Update failed"),
        }
    }
}

/// Interactive surface: blocking dialogs, notifications and page reload.
pub trait Operator {
    /// Ask a yes/no question. `false` when declined.
    fn confirm(&self, question: &str) -> bool;

    /// Ask for a line of text. `None` when cancelled.
    fn prompt(&self, question: &str) -> Option<String>;

    /// Show a notice.
    fn notify(&self, notice: Notice);

    /// Discard the page and load it again from the server.
    fn reload(&self);
}
