// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use crate::readings::Observation;

/// Errors that prevent a generator from producing an observation.
///
/// A failed tick is skipped by the session, it never ends the process.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("invalid {quantity} range [{low}, {high}]")]
    InvalidRange {
        quantity: &'static str,
        low: f64,
        high: f64,
    },

    #[error("random source failed: {0}")]
    Entropy(#[from] rand::Error),

    #[error("reading script contains no samples")]
    EmptyScript,

    #[error("reading script could not be parsed: {0}")]
    Script(#[from] serde_json::Error),
}

/// Closed interval a generated quantity is drawn from.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub low: f64,
    pub high: f64,
}

impl Range {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.low..=self.high).contains(&value)
    }

    fn is_valid(&self) -> bool {
        self.low.is_finite() && self.high.is_finite() && self.low < self.high
    }
}

/// Bounds for the generated temperature and pressure.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ReadingRanges {
    pub temperature_celsius: Range,
    pub pressure_hpa: Range,
}

impl ReadingRanges {
    /// Plausible values for an Antarctic station.
    pub const ANTARCTIC: Self = Self {
        temperature_celsius: Range::new(-50.0, 0.0),
        pressure_hpa: Range::new(950.0, 1050.0),
    };

    pub fn validate(&self) -> Result<(), GenerationError> {
        for (quantity, range) in [
            ("temperature", self.temperature_celsius),
            ("pressure", self.pressure_hpa),
        ] {
            if !range.is_valid() {
                return Err(GenerationError::InvalidRange {
                    quantity,
                    low: range.low,
                    high: range.high,
                });
            }
        }
        Ok(())
    }
}

impl Default for ReadingRanges {
    fn default() -> Self {
        Self::ANTARCTIC
    }
}

pub type ReadingGeneratorPointer = Box<dyn ReadingGenerator>;

/// Produces one new observation per call.
pub trait ReadingGenerator {
    /// Generates an observation stamped with the current time.
    fn generate(&mut self) -> Result<Observation, GenerationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn antarctic_ranges_are_valid() {
        ReadingRanges::ANTARCTIC.validate().unwrap();
        assert_eq!(ReadingRanges::default(), ReadingRanges::ANTARCTIC);
    }

    #[test]
    fn rejects_inverted_and_non_finite_ranges() {
        let inverted = ReadingRanges {
            temperature_celsius: Range::new(0.0, -50.0),
            ..ReadingRanges::ANTARCTIC
        };
        assert!(matches!(
            inverted.validate(),
            Err(GenerationError::InvalidRange { quantity: "temperature", .. })
        ));

        let empty = ReadingRanges {
            pressure_hpa: Range::new(1000.0, 1000.0),
            ..ReadingRanges::ANTARCTIC
        };
        assert!(matches!(
            empty.validate(),
            Err(GenerationError::InvalidRange { quantity: "pressure", .. })
        ));

        let nan = ReadingRanges {
            pressure_hpa: Range::new(f64::NAN, 1000.0),
            ..ReadingRanges::ANTARCTIC
        };
        assert!(nan.validate().is_err());
    }
}
