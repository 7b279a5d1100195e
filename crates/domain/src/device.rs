//! Device: an actuator the greenhouse can switch ON or OFF.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::id::DeviceName;

/// Power state of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DeviceStatus {
    On,
    Off,
}

impl DeviceStatus {
    /// The opposite state.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }

    /// Wire form used in URLs and JSON bodies.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "ON",
            Self::Off => "OFF",
        }
    }

    /// Style class of the status badge.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::On => "status-on",
            Self::Off => "status-off",
        }
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ON" => Ok(Self::On),
            "OFF" => Ok(Self::Off),
            _ => Err(DomainError::InvalidDeviceStatus(s.to_string())),
        }
    }
}

/// A device as displayed on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub name: DeviceName,
    pub status: DeviceStatus,
}

impl Device {
    #[must_use]
    pub fn new(name: DeviceName, status: DeviceStatus) -> Self {
        Self { name, status }
    }

    /// Status the device button requests when clicked.
    #[must_use]
    pub fn next_action(&self) -> DeviceStatus {
        self.status.toggled()
    }

    /// Caption of the device button.
    #[must_use]
    pub fn button_label(&self) -> String {
        format!("Set to {}", self.next_action())
    }

    /// Full class list of the status badge.
    #[must_use]
    pub fn status_class(&self) -> String {
        format!("device-status {}", self.status.css_class())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(status: DeviceStatus) -> Device {
        Device::new(DeviceName::new("heater").unwrap(), status)
    }

    #[test]
    fn should_toggle_between_on_and_off() {
        assert_eq!(DeviceStatus::On.toggled(), DeviceStatus::Off);
        assert_eq!(DeviceStatus::Off.toggled(), DeviceStatus::On);
    }

    #[test]
    fn should_parse_status_case_insensitively() {
        assert_eq!("on".parse::<DeviceStatus>().unwrap(), DeviceStatus::On);
        assert_eq!("OFF".parse::<DeviceStatus>().unwrap(), DeviceStatus::Off);
    }

    #[test]
    fn should_reject_unknown_status() {
        let result = "standby".parse::<DeviceStatus>();
        assert!(matches!(result, Err(DomainError::InvalidDeviceStatus(_))));
    }

    #[test]
    fn should_use_uppercase_wire_form() {
        assert_eq!(serde_json::to_string(&DeviceStatus::On).unwrap(), "\"ON\"");
        let parsed: DeviceStatus = serde_json::from_str("\"OFF\"").unwrap();
        assert_eq!(parsed, DeviceStatus::Off);
    }

    #[test]
    fn should_offer_opposite_action_when_device_is_on() {
        let dev = device(DeviceStatus::On);
        assert_eq!(dev.next_action(), DeviceStatus::Off);
        assert_eq!(dev.button_label(), "Set to OFF");
        assert_eq!(dev.status_class(), "device-status status-on");
    }

    #[test]
    fn should_offer_opposite_action_when_device_is_off() {
        let dev = device(DeviceStatus::Off);
        assert_eq!(dev.next_action(), DeviceStatus::On);
        assert_eq!(dev.button_label(), "Set to ON");
        assert_eq!(dev.status_class(), "device-status status-off");
    }
}
