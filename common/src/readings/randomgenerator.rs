// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use chrono::Local;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::readings::generator::{GenerationError, Range, ReadingGenerator, ReadingRanges};
use crate::readings::Observation;

/// Draws temperature and pressure uniformly from fixed ranges.
///
/// The generator keeps no state besides its random source, so seeding the source
/// makes the produced values reproducible.
pub struct RandomReadingGenerator<R = StdRng> {
    rng: R,
    ranges: ReadingRanges,
}

impl RandomReadingGenerator<StdRng> {
    /// Antarctic ranges with a randomly seeded source.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            ranges: ReadingRanges::ANTARCTIC,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            ranges: ReadingRanges::ANTARCTIC,
        }
    }
}

impl Default for RandomReadingGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> RandomReadingGenerator<R> {
    pub fn with_rng(rng: R, ranges: ReadingRanges) -> Result<Self, GenerationError> {
        ranges.validate()?;
        Ok(Self { rng, ranges })
    }

    pub fn ranges(&self) -> &ReadingRanges {
        &self.ranges
    }

    fn sample(&mut self, range: Range) -> Result<f64, GenerationError> {
        // Sampled by hand instead of `gen_range` so a failing source surfaces as an error.
        let mut bytes = [0u8; 8];
        self.rng.try_fill_bytes(&mut bytes)?;

        // 53 random bits give a uniform float in [0, 1].
        let unit = (u64::from_le_bytes(bytes) >> 11) as f64 / ((1u64 << 53) - 1) as f64;
        let value = range.low + (range.high - range.low) * unit;

        Ok(round_to_tenth(value).clamp(range.low, range.high))
    }
}

impl<R: RngCore> ReadingGenerator for RandomReadingGenerator<R> {
    fn generate(&mut self) -> Result<Observation, GenerationError> {
        self.ranges.validate()?;

        let temperature_celsius = self.sample(self.ranges.temperature_celsius)?;
        let pressure_hpa = self.sample(self.ranges.pressure_hpa)?;

        Ok(Observation::new(Local::now(), temperature_celsius, pressure_hpa))
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
