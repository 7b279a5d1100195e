//! Sensor readings reported by the greenhouse.

use serde::{Deserialize, Serialize};

/// Latest reading of every monitored parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Air temperature in °C.
    pub temperature: f64,
    /// Relative humidity in %.
    pub humidity: f64,
    /// Light intensity in lux.
    pub light_intensity: f64,
    /// CO2 concentration in ppm.
    pub co2_level: f64,
    /// Server-formatted time of the reading.
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl SensorReading {
    /// `(label, formatted value)` pairs for the summary cards.
    #[must_use]
    pub fn cards(&self) -> [(&'static str, String); 4] {
        [
            ("Temperature", format!("{:.1} °C", self.temperature)),
            ("Humidity", format!("{:.1} %", self.humidity)),
            ("Light", format!("{:.1} lux", self.light_intensity)),
            ("CO2", format!("{:.1} ppm", self.co2_level)),
        ]
    }
}
