// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use crate::readings::trend::{seconds_between, trend_for, TrendFit};
use crate::readings::{ReadingDisplay, Snapshot};

/// Side length of the square view box the trend path is expressed in.
pub const PLOT_VIEWBOX: f64 = 1000.0;

/// Extra room above and below the data, as a share of the temperature span.
const Y_PADDING: f64 = 0.1;

/// Smallest temperature span shown, so a flat series does not fill the whole height.
const MIN_Y_SPAN: f64 = 1.0;

/// A scatter point in unit coordinates. `x` grows to the right, `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// A temperature scatter plot, scaled to the unit square so any renderer can draw it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotModel {
    pub points: Vec<PlotPoint>,
    /// SVG style path commands for the trend line in a [`PLOT_VIEWBOX`] square, if a trend exists.
    pub trend_path: Option<String>,
    pub trend: Option<TrendFit>,
    pub y_min_label: String,
    pub y_max_label: String,
    pub x_start_label: String,
    pub x_end_label: String,
}

impl PlotModel {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let (Some(first), Some(last)) = (snapshot.first(), snapshot.last()) else {
            return Self::default();
        };

        let origin = first.timestamp();
        let x_span = seconds_between(origin, last.timestamp());

        let trend = trend_for(snapshot);
        let trend_ends = trend.map(|fit| (fit.at(origin), fit.at(last.timestamp())));

        // The fitted line can leave the range of the data, keep its ends inside the plot.
        let (mut y_min, mut y_max) = snapshot
            .iter()
            .map(|o| o.temperature_celsius())
            .chain(trend_ends.into_iter().flat_map(|(start, end)| [start, end]))
            .fold((f64::MAX, f64::MIN), |(lo, hi), celsius| {
                (lo.min(celsius), hi.max(celsius))
            });
        let y_padding = ((y_max - y_min) * Y_PADDING).max((MIN_Y_SPAN - (y_max - y_min)) / 2.0);
        y_min -= y_padding.max(0.0);
        y_max += y_padding.max(0.0);

        let scale_x = |seconds: f64| {
            if x_span > 0.0 {
                seconds / x_span
            } else {
                0.5
            }
        };
        let scale_y = |celsius: f64| (y_max - celsius) / (y_max - y_min);

        let points = snapshot
            .iter()
            .map(|o| PlotPoint {
                x: scale_x(seconds_between(origin, o.timestamp())),
                y: scale_y(o.temperature_celsius()),
            })
            .collect();

        let trend_path = trend_ends.map(|(start, end)| {
            format!(
                "M 0 {:.1} L {:.1} {:.1}",
                scale_y(start) * PLOT_VIEWBOX,
                PLOT_VIEWBOX,
                scale_y(end) * PLOT_VIEWBOX
            )
        });

        Self {
            points,
            trend_path,
            trend,
            y_min_label: format!("{y_min:.1} °C"),
            y_max_label: format!("{y_max:.1} °C"),
            x_start_label: ReadingDisplay::time_of_day(first),
            x_end_label: ReadingDisplay::time_of_day(last),
        }
    }

    pub fn trend_label(&self) -> String {
        match &self.trend {
            Some(fit) => format!("Trend: {:+.1} °C/h", fit.celsius_per_hour()),
            None => "No trend available".into(),
        }
    }
}
