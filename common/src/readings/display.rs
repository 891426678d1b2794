// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use crate::readings::Observation;

/// Timestamp format used in the value boxes and the table.
pub const TIMESTAMP_FORMAT: &str = "%m-%d-%Y %H:%M:%S";

/// An observation formatted for display, one decimal place per value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadingDisplay {
    pub timestamp: String,
    pub celsius: String,
    pub fahrenheit: String,
    pub kelvin: String,
    pub pressure: String,
    pub description: String,
}

impl ReadingDisplay {
    pub fn time_of_day(observation: &Observation) -> String {
        observation.timestamp().format("%H:%M:%S").to_string()
    }
}

impl From<&Observation> for ReadingDisplay {
    fn from(observation: &Observation) -> Self {
        Self {
            timestamp: observation.timestamp().format(TIMESTAMP_FORMAT).to_string(),
            celsius: format!("{:.1} °C", observation.temperature_celsius()),
            fahrenheit: format!("{:.1} °F", observation.temperature_fahrenheit()),
            kelvin: format!("{:.1} K", observation.temperature_kelvin()),
            pressure: format!("{:.1} hPa", observation.pressure_hpa()),
            description: observation.description().to_string(),
        }
    }
}
