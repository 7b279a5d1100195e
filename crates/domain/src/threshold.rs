//! Threshold setpoints for the monitored parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A server-stored setpoint the automatic loop compares readings against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdParam {
    TempMin,
    TempMax,
    HumidityMin,
    HumidityMax,
    LightMin,
    LightMax,
    Co2Min,
    Co2Max,
}

impl ThresholdParam {
    pub const ALL: [Self; 8] = [
        Self::TempMin,
        Self::TempMax,
        Self::HumidityMin,
        Self::HumidityMax,
        Self::LightMin,
        Self::LightMax,
        Self::Co2Min,
        Self::Co2Max,
    ];

    /// Name used in URLs and JSON keys.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TempMin => "temp_min",
            Self::TempMax => "temp_max",
            Self::HumidityMin => "humidity_min",
            Self::HumidityMax => "humidity_max",
            Self::LightMin => "light_min",
            Self::LightMax => "light_max",
            Self::Co2Min => "co2_min",
            Self::Co2Max => "co2_max",
        }
    }

    /// Factory setting used until the server reports a value.
    #[must_use]
    pub fn default_value(self) -> f64 {
        match self {
            Self::TempMin => 18.0,
            Self::TempMax => 28.0,
            Self::HumidityMin => 50.0,
            Self::HumidityMax => 80.0,
            Self::LightMin => 3000.0,
            Self::LightMax => 8000.0,
            Self::Co2Min => 400.0,
            Self::Co2Max => 1000.0,
        }
    }

    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Self::TempMin | Self::TempMax => "°C",
            Self::HumidityMin | Self::HumidityMax => "%",
            Self::LightMin | Self::LightMax => "lux",
            Self::Co2Min | Self::Co2Max => "ppm",
        }
    }
}

impl fmt::Display for ThresholdParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThresholdParam {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|param| param.as_str() == s)
            .ok_or_else(|| DomainError::UnknownThresholdParam(s.to_string()))
    }
}

/// Parse operator input for a new threshold value.
///
/// Surrounding whitespace is ignored. Empty input, non-numeric text and
/// non-finite numbers (`NaN`, `inf`) are rejected.
///
/// # Errors
///
/// Returns [`DomainError::InvalidThresholdValue`] when the input is not a
/// finite number.
pub fn parse_threshold_value(input: &str) -> Result<f64, DomainError> {
    let trimmed = input.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| DomainError::InvalidThresholdValue(input.to_string()))
}
