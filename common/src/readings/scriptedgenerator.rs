// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use chrono::Local;
use serde::Deserialize;

use crate::readings::generator::{GenerationError, ReadingGenerator};
use crate::readings::Observation;

/// A single scripted temperature and pressure pair.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ScriptedSample {
    pub temperature_celsius: f64,
    pub pressure_hpa: f64,
}

#[derive(Deserialize)]
struct Script {
    samples: Vec<ScriptedSample>,
}

/// Replays a fixed list of samples in a loop, stamping each with the current time.
///
/// Useful for demos and screenshots where the plot should show a recognisable shape.
#[derive(Debug)]
pub struct ScriptedReadingGenerator {
    samples: Vec<ScriptedSample>,
    next: usize,
}

impl ScriptedReadingGenerator {
    pub fn new(samples: Vec<ScriptedSample>) -> Result<Self, GenerationError> {
        if samples.is_empty() {
            return Err(GenerationError::EmptyScript);
        }
        Ok(Self { samples, next: 0 })
    }

    /// Parses a script of the form
    /// `{ "samples": [{ "temperature_celsius": .., "pressure_hpa": .. }] }`.
    pub fn from_json(json: &str) -> Result<Self, GenerationError> {
        let script = serde_json::from_str::<Script>(json)?;

        Self::new(script.samples)
    }

    /// The built-in demo script: a cold front passing through and clearing up again.
    pub fn demo() -> Result<Self, GenerationError> {
        Self::from_json(std::include_str!("./demoreadings.json"))
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl ReadingGenerator for ScriptedReadingGenerator {
    fn generate(&mut self) -> Result<Observation, GenerationError> {
        let sample = self.samples[self.next];
        self.next = (self.next + 1) % self.samples.len();

        Ok(Observation::new(
            Local::now(),
            sample.temperature_celsius,
            sample.pressure_hpa,
        ))
    }
}
