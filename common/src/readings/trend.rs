// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use chrono::{DateTime, Local};

use crate::readings::{Observation, Snapshot};

/// Why no trend line can be drawn for a set of observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FitUndefined {
    #[error("at least two observations are needed for a trend, got {0}")]
    TooFewPoints(usize),

    #[error("all observations share the same timestamp")]
    DegenerateTimestamps,
}

/// Least squares line `temperature = slope * seconds + intercept`.
///
/// `seconds` counts from `origin`, the timestamp of the first observation that went
/// into the fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendFit {
    pub slope: f64,
    pub intercept: f64,
    pub origin: DateTime<Local>,
}

impl TrendFit {
    /// Fits a line through `(seconds since first, celsius)` pairs.
    pub fn compute(observations: &[Observation]) -> Result<Self, FitUndefined> {
        let first = match observations {
            [] | [_] => return Err(FitUndefined::TooFewPoints(observations.len())),
            [first, ..] => first,
        };
        let origin = first.timestamp();

        let points: Vec<(f64, f64)> = observations
            .iter()
            .map(|o| (seconds_between(origin, o.timestamp()), o.temperature_celsius()))
            .collect();

        let n = points.len() as f64;
        let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
        let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

        let (sxx, sxy) = points.iter().fold((0.0, 0.0), |(sxx, sxy), (x, y)| {
            let dx = x - mean_x;
            (sxx + dx * dx, sxy + dx * (y - mean_y))
        });

        if sxx == 0.0 {
            return Err(FitUndefined::DegenerateTimestamps);
        }

        let slope = sxy / sxx;

        Ok(Self {
            slope,
            intercept: mean_y - slope * mean_x,
            origin,
        })
    }

    /// The fitted temperature at `timestamp`.
    pub fn at(&self, timestamp: DateTime<Local>) -> f64 {
        self.at_seconds(seconds_between(self.origin, timestamp))
    }

    pub fn at_seconds(&self, seconds: f64) -> f64 {
        self.slope * seconds + self.intercept
    }

    /// Change in degrees Celsius per hour.
    pub fn celsius_per_hour(&self) -> f64 {
        self.slope * 3600.0
    }
}

/// The trend for a snapshot, or `None` when the fit is undefined.
pub fn trend_for(snapshot: &Snapshot) -> Option<TrendFit> {
    match TrendFit::compute(snapshot.as_slice()) {
        Ok(fit) => Some(fit),
        Err(e) => {
            log::debug!("No trend available: {e}");
            None
        }
    }
}

pub(crate) fn seconds_between(from: DateTime<Local>, to: DateTime<Local>) -> f64 {
    (to - from).num_milliseconds() as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn series(points: &[(i64, f64)]) -> Vec<Observation> {
        let start = Local::now();
        points
            .iter()
            .map(|(secs, c)| Observation::new(start + Duration::seconds(*secs), *c, 1000.0))
            .collect()
    }

    #[test]
    fn too_few_points() {
        assert_eq!(TrendFit::compute(&[]), Err(FitUndefined::TooFewPoints(0)));
        assert_eq!(
            TrendFit::compute(&series(&[(0, -20.0)])),
            Err(FitUndefined::TooFewPoints(1))
        );
        assert!(trend_for(&Snapshot::default()).is_none());
    }

    #[test]
    fn identical_timestamps() {
        let observations = series(&[(0, -20.0), (0, -25.0), (0, -30.0)]);

        assert_eq!(
            TrendFit::compute(&observations),
            Err(FitUndefined::DegenerateTimestamps)
        );
    }

    #[test]
    fn exact_line() {
        let observations = series(&[(0, -40.0), (10, -35.0), (20, -30.0), (30, -25.0)]);
        let fit = TrendFit::compute(&observations).unwrap();

        assert!((fit.slope - 0.5).abs() < 1e-12);
        assert!((fit.intercept + 40.0).abs() < 1e-12);
        assert!((fit.at(observations[3].timestamp()) + 25.0).abs() < 1e-12);
        assert!((fit.celsius_per_hour() - 1800.0).abs() < 1e-9);
    }

    #[test]
    fn satisfies_normal_equations() {
        let observations = series(&[
            (0, -17.2),
            (10, -16.4),
            (25, -17.9),
            (30, -16.1),
            (50, -16.8),
        ]);
        let fit = TrendFit::compute(&observations).unwrap();

        let residuals: Vec<(f64, f64)> = observations
            .iter()
            .map(|o| {
                let x = seconds_between(fit.origin, o.timestamp());
                (x, o.temperature_celsius() - fit.at_seconds(x))
            })
            .collect();

        // Residuals sum to zero and are orthogonal to x.
        let sum: f64 = residuals.iter().map(|(_, r)| r).sum();
        let weighted: f64 = residuals.iter().map(|(x, r)| x * r).sum();
        assert!(sum.abs() < 1e-9);
        assert!(weighted.abs() < 1e-7);
    }
}
