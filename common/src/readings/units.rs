// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

//! Unit conversions and the cosmetic temperature label shown next to the current reading.

use serde::{Deserialize, Serialize};

/// Readings strictly below this value are labelled [`TemperatureDescription::Colder`].
pub const COLDER_BELOW_CELSIUS: f64 = -30.0;

/// Readings strictly above this value are labelled [`TemperatureDescription::Warmer`].
pub const WARMER_ABOVE_CELSIUS: f64 = -10.0;

const _: () = assert!(COLDER_BELOW_CELSIUS < WARMER_ABOVE_CELSIUS);

const KELVIN_OFFSET: f64 = 273.15;

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + KELVIN_OFFSET
}

/// How the current temperature compares to the usual Antarctic range.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TemperatureDescription {
    Colder,
    Typical,
    Warmer,
}

impl TemperatureDescription {
    pub fn from_celsius(celsius: f64) -> Self {
        if celsius < COLDER_BELOW_CELSIUS {
            Self::Colder
        } else if celsius > WARMER_ABOVE_CELSIUS {
            Self::Warmer
        } else {
            Self::Typical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Colder => "Colder than Usual",
            Self::Typical => "Typical for the Season",
            Self::Warmer => "Warmer than Usual",
        }
    }
}

impl std::fmt::Display for TemperatureDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
