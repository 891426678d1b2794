// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::readings::units::{celsius_to_fahrenheit, celsius_to_kelvin, TemperatureDescription};

/// One synthetic reading: temperature, barometric pressure and the time it was taken.
///
/// Observations are never modified once created. Only the Celsius value is stored,
/// the other temperature units are derived on demand.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Observation {
    timestamp: DateTime<Local>,
    temperature_celsius: f64,
    pressure_hpa: f64,
}

impl Observation {
    pub fn new(timestamp: DateTime<Local>, temperature_celsius: f64, pressure_hpa: f64) -> Self {
        Self {
            timestamp,
            temperature_celsius,
            pressure_hpa,
        }
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn temperature_celsius(&self) -> f64 {
        self.temperature_celsius
    }

    pub fn pressure_hpa(&self) -> f64 {
        self.pressure_hpa
    }

    pub fn temperature_fahrenheit(&self) -> f64 {
        celsius_to_fahrenheit(self.temperature_celsius)
    }

    pub fn temperature_kelvin(&self) -> f64 {
        celsius_to_kelvin(self.temperature_celsius)
    }

    pub fn description(&self) -> TemperatureDescription {
        TemperatureDescription::from_celsius(self.temperature_celsius)
    }

    /// Returns a copy of this observation taken at `timestamp` instead.
    pub(crate) fn restamped(&self, timestamp: DateTime<Local>) -> Self {
        Self { timestamp, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_units() {
        let observation = Observation::new(Local::now(), -40.0, 1000.0);

        assert_eq!(observation.temperature_fahrenheit(), -40.0);
        assert_eq!(observation.temperature_kelvin(), -40.0 + 273.15);
        assert_eq!(observation.description(), TemperatureDescription::Colder);
    }

    #[test]
    fn serializes_timestamp_as_rfc3339() {
        let observation = Observation::new(Local::now(), -17.3, 1003.2);
        let json = serde_json::to_string(&observation).unwrap();
        let parsed: Observation = serde_json::from_str(&json).unwrap();

        assert!(json.contains("\"temperature_celsius\":-17.3"));
        assert_eq!(parsed, observation);
    }
}
