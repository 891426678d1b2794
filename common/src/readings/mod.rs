// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod display;
mod generator;
mod history;
mod observation;
mod plot;
mod randomgenerator;
mod scriptedgenerator;
mod trend;
mod units;

pub use observation::Observation;

pub use generator::GenerationError;
pub use generator::Range;
pub use generator::ReadingGenerator;
pub use generator::ReadingGeneratorPointer;
pub use generator::ReadingRanges;

pub use randomgenerator::RandomReadingGenerator;
pub use scriptedgenerator::{ScriptedReadingGenerator, ScriptedSample};

pub use history::{History, Snapshot};

pub use display::{ReadingDisplay, TIMESTAMP_FORMAT};
pub use plot::{PlotModel, PlotPoint, PLOT_VIEWBOX};
pub use trend::{trend_for, FitUndefined, TrendFit};
pub use units::{
    celsius_to_fahrenheit, celsius_to_kelvin, TemperatureDescription, COLDER_BELOW_CELSIUS,
    WARMER_ABOVE_CELSIUS,
};
