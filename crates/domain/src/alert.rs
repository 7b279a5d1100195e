//! Alerts raised by the backend when a reading leaves its safe band.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::id::AlertId;

/// Acknowledgment state as stored on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    #[default]
    Unhandled,
    Handled,
}

/// An alert shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: AlertId,
    /// Monitored parameter that triggered the alert (e.g. `temperature`).
    #[serde(default)]
    pub param: String,
    /// Reading that triggered the alert.
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub message: String,
    /// Server-formatted creation time, displayed verbatim.
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub status: AlertStatus,
}

impl Alert {
    #[must_use]
    pub fn is_handled(&self) -> bool {
        matches!(self.status, AlertStatus::Handled)
    }

    /// Flip the alert to handled.
    ///
    /// Returns `false` if it already was, so the handled marker is only
    /// ever added once.
    pub fn mark_handled(&mut self) -> bool {
        if self.is_handled() {
            return false;
        }
        self.status = AlertStatus::Handled;
        true
    }

    /// Class list of the alert card.
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        if self.is_handled() {
            "alert alert-handled"
        } else {
            "alert"
        }
    }
}

/// Which alerts a list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertFilter {
    #[default]
    All,
    Unhandled,
    Handled,
}

impl AlertFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Unhandled, Self::Handled];

    #[must_use]
    pub fn matches(self, alert: &Alert) -> bool {
        match self {
            Self::All => true,
            Self::Unhandled => !alert.is_handled(),
            Self::Handled => alert.is_handled(),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Unhandled => "unhandled",
            Self::Handled => "handled",
        }
    }
}

impl FromStr for AlertFilter {
    type Err = std::convert::Infallible;

    /// Unknown values fall back to showing every alert.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "unhandled" => Self::Unhandled,
            "handled" => Self::Handled,
            _ => Self::All,
        })
    }
}
