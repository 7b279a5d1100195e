//! Typed identifiers for the things the dashboard addresses by name or number.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a device as known to the Control API (e.g. `heater`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeviceName(String);

impl DeviceName {
    /// Devices every greenhouse exposes.
    pub const KNOWN: [&'static str; 6] = [
        "heater",
        "cooler",
        "fan",
        "light",
        "co2_generator",
        "water_pump",
    ];

    /// Validate and wrap a device name.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyDeviceName`] when `name` is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyDeviceName);
        }
        Ok(Self(name))
    }

    /// Borrow the raw name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human readable label (`co2_generator` → `Co2 generator`).
    #[must_use]
    pub fn label(&self) -> String {
        let spaced = self.0.replace('_', " ");
        let mut chars = spaced.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for DeviceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DeviceName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for DeviceName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DeviceName> for String {
    fn from(value: DeviceName) -> Self {
        value.0
    }
}

/// Numeric identifier of an alert row on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertId(u64);

impl AlertId {
    /// Wrap a raw alert number.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Access the raw number.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }

    /// DOM id of the alert card (`alert-{id}`).
    #[must_use]
    pub fn element_id(self) -> String {
        format!("alert-{}", self.0)
    }
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for AlertId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| DomainError::InvalidAlertId(s.to_string()))
    }
}
