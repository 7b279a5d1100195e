//! Sensor history window and its export link.

use std::fmt;
use std::str::FromStr;

/// Look-back span of the history page, in hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryWindow(u32);

impl HistoryWindow {
    pub const DEFAULT_HOURS: u32 = 24;
    /// Longest span the export endpoint accepts.
    pub const MAX_EXPORT_HOURS: u32 = 168;
    /// Spans offered by the hours selector.
    pub const CHOICES: [u32; 6] = [6, 12, 24, 48, 72, 168];

    /// A zero span falls back to the default.
    #[must_use]
    pub fn new(hours: u32) -> Self {
        if hours == 0 {
            Self::default()
        } else {
            Self(hours)
        }
    }

    /// Window from a raw `hours` query value; missing or unparsable means default.
    #[must_use]
    pub fn from_query(hours: Option<&str>) -> Self {
        hours
            .and_then(|raw| raw.trim().parse().ok())
            .map_or_else(Self::default, Self::new)
    }

    #[must_use]
    pub fn hours(self) -> u32 {
        self.0
    }

    /// Span sent to the export endpoint, capped at [`Self::MAX_EXPORT_HOURS`].
    #[must_use]
    pub fn export_hours(self) -> u32 {
        self.0.min(Self::MAX_EXPORT_HOURS)
    }
}

impl Default for HistoryWindow {
    fn default() -> Self {
        Self(Self::DEFAULT_HOURS)
    }
}

impl fmt::Display for HistoryWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h", self.0)
    }
}

impl FromStr for HistoryWindow {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_query(Some(s)))
    }
}
