// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::num::NonZeroUsize;

use crate::config::DashboardConfig;
use crate::readings::{
    GenerationError, History, Observation, PlotModel, RandomReadingGenerator, ReadingDisplay,
    ReadingGeneratorPointer, ScriptedReadingGenerator,
};

/// Everything a renderer needs for one refresh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardView {
    pub current: Option<ReadingDisplay>,
    pub rows: Vec<ReadingDisplay>,
    pub plot: PlotModel,
}

/// One generator feeding one history.
///
/// Each window owns its own session. The timer calls [`Session::tick`], renderers read
/// through [`Session::history`] or [`Session::view`].
pub struct Session {
    generator: ReadingGeneratorPointer,
    history: History,
    table_rows: usize,
}

impl Session {
    pub fn new(
        generator: ReadingGeneratorPointer,
        cap: Option<NonZeroUsize>,
        table_rows: usize,
    ) -> Self {
        let history = match cap {
            Some(cap) => History::with_cap(cap),
            None => History::unbounded(),
        };

        Self {
            generator,
            history,
            table_rows,
        }
    }

    /// Builds the session described by `config`.
    pub fn from_config(config: &DashboardConfig) -> Result<Self, GenerationError> {
        let generator: ReadingGeneratorPointer = if config.scripted {
            log::info!("Using scripted demo readings");
            Box::new(ScriptedReadingGenerator::demo()?)
        } else if let Some(seed) = config.seed {
            log::info!("Using random readings with seed {seed}");
            Box::new(RandomReadingGenerator::seeded(seed))
        } else {
            Box::new(RandomReadingGenerator::new())
        };

        Ok(Self::new(generator, config.history_cap(), config.table_rows))
    }

    /// Generates one observation and appends it to the history.
    ///
    /// A failing generator skips the tick: the error is logged and the history stays as it was.
    pub fn tick(&mut self) -> Option<&Observation> {
        match self.generator.generate() {
            Ok(observation) => {
                log::debug!(
                    "New reading: {:.1} °C, {:.1} hPa",
                    observation.temperature_celsius(),
                    observation.pressure_hpa()
                );
                self.history.append(observation);
                self.history.latest()
            }
            Err(e) => {
                log::error!("Skipping tick, could not generate reading: {e}");
                None
            }
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn table_rows(&self) -> usize {
        self.table_rows
    }

    pub fn view(&self) -> DashboardView {
        DashboardView {
            current: self.history.latest().map(ReadingDisplay::from),
            rows: self
                .history
                .recent(self.table_rows)
                .iter()
                .map(ReadingDisplay::from)
                .collect(),
            plot: PlotModel::from_snapshot(&self.history.all()),
        }
    }
}
