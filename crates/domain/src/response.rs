//! JSON bodies returned by the Control API.

use serde::{Deserialize, Serialize};

use crate::device::{Device, DeviceStatus};
use crate::id::DeviceName;
use crate::sensor::SensorReading;

/// Outcome flag every response carries.
///
/// Anything other than `"success"` (including a missing field) counts as
/// a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    #[default]
    #[serde(other)]
    Error,
}

/// Envelope of every command endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub status: ResponseStatus,
    /// Operator-facing reason, usually only present on failure.
    #[serde(default)]
    pub message: Option<String>,
    /// New control mode, present on mode toggles and mode status queries.
    #[serde(default)]
    pub auto_mode: Option<bool>,
}

impl ApiResponse {
    /// A bare success body.
    #[must_use]
    pub fn success() -> Self {
        Self {
            status: ResponseStatus::Success,
            ..Self::default()
        }
    }

    /// A failure body with an optional message.
    #[must_use]
    pub fn error(message: Option<&str>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.map(str::to_string),
            auto_mode: None,
        }
    }

    /// Set the `auto_mode` field.
    #[must_use]
    pub fn with_auto_mode(mut self, auto_mode: bool) -> Self {
        self.auto_mode = Some(auto_mode);
        self
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self.status, ResponseStatus::Success)
    }
}

/// Latest stored status of one device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub device_name: DeviceName,
    pub status: DeviceStatus,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl From<DeviceRecord> for Device {
    fn from(record: DeviceRecord) -> Self {
        Device::new(record.device_name, record.status)
    }
}

/// Body of `GET /api/get-latest-data`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LatestData {
    #[serde(default)]
    pub status: ResponseStatus,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub sensor_data: Option<SensorReading>,
    #[serde(default)]
    pub devices: Vec<DeviceRecord>,
}

impl LatestData {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self.status, ResponseStatus::Success)
    }
}
