// Prevent console window in addition to Slint window in Windows release builds when, e.g., starting the app via file manager. Ignored on other platforms.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod args;

slint::include_modules!();

use std::cell::RefCell;
use std::rc::Rc;

use antarctic_dashboard_common::readings::ReadingDisplay;
use antarctic_dashboard_common::{DashboardConfig, DashboardView, Session};
use clap::Parser;
use slint::ComponentHandle;

/// The session is shared between the App and the timer closure, both on the UI thread.
type SharedSession = Rc<RefCell<Session>>;

/// Our App struct that holds the UI and the reading session.
/// It also holds a timer that takes a new reading every refresh interval.
///
/// Each tick appends one observation to the session history. The latest reading,
/// the most recent rows and the plot are then pushed into the view model.
struct App {
    ui: AppWindow,
    session: SharedSession,
    timer: slint::Timer,
    refresh_interval: std::time::Duration,
    records: Rc<slint::VecModel<ReadingRecord>>,
    points: Rc<slint::VecModel<ScatterPoint>>,
}

impl App {
    /// Create a new App struct.
    ///
    /// The App struct initializes the UI and the session described by `config`.
    fn new(config: &DashboardConfig) -> anyhow::Result<Self> {
        // Make a new AppWindow
        let ui = AppWindow::new()?;

        let session = Rc::new(RefCell::new(Session::from_config(config)?));

        // Create shared models for the table rows and the plot points
        let records: Rc<slint::VecModel<ReadingRecord>> = Rc::default();
        let points: Rc<slint::VecModel<ScatterPoint>> = Rc::default();

        let model = ui.global::<ViewModel>();
        model.set_records(slint::ModelRc::from(records.clone()));
        model.set_points(slint::ModelRc::from(points.clone()));
        model.set_trend_label("No trend available".into());
        model.set_status(slint::format!(
            "Updates every {} s, keeping {}.",
            config.refresh_interval_secs,
            match config.history_cap() {
                Some(cap) => format!("the last {cap} readings"),
                None => "all readings".into(),
            }
        ));

        Ok(Self {
            ui,
            session,
            timer: slint::Timer::default(),
            refresh_interval: config.refresh_interval(),
            records,
            points,
        })
    }

    /// Run the App, take a first reading and then one per refresh interval.
    fn run(&mut self) -> anyhow::Result<()> {
        // Get the handle to the UI as a weak reference.
        let ui_handle = self.ui.as_weak();

        // Clone what the timer closure needs.
        let session = self.session.clone();
        let records = self.records.clone();
        let points = self.points.clone();

        Self::tick(&self.ui, &session, &records, &points);

        self.timer.start(
            slint::TimerMode::Repeated,
            self.refresh_interval,
            move || {
                let Some(ui) = ui_handle.upgrade() else {
                    return;
                };

                Self::tick(&ui, &session, &records, &points);
            },
        );

        // Run the UI (and map an error to an anyhow::Error).
        self.ui.run().map_err(|e| e.into())
    }

    /// Take one reading and refresh the view model. A skipped tick leaves the UI as it is.
    fn tick(
        ui: &AppWindow,
        session: &SharedSession,
        records: &slint::VecModel<ReadingRecord>,
        points: &slint::VecModel<ScatterPoint>,
    ) {
        let mut session = session.borrow_mut();
        if session.tick().is_none() {
            return;
        }

        show(ui, &session.view(), records, points);
    }
}

/// Push a dashboard view into the view model.
fn show(
    ui: &AppWindow,
    view: &DashboardView,
    records: &slint::VecModel<ReadingRecord>,
    points: &slint::VecModel<ScatterPoint>,
) {
    let model = ui.global::<ViewModel>();

    if let Some(current) = &view.current {
        model.set_current(current.into());
        model.set_have_data(true);
    }

    records.set_vec(view.rows.iter().map(ReadingRecord::from).collect::<Vec<_>>());
    points.set_vec(
        view.plot
            .points
            .iter()
            .map(|p| ScatterPoint {
                x: p.x as f32,
                y: p.y as f32,
            })
            .collect::<Vec<_>>(),
    );

    let plot = &view.plot;
    model.set_have_trend(plot.trend_path.is_some());
    model.set_trend_path(plot.trend_path.clone().unwrap_or_default().into());
    model.set_trend_label(plot.trend_label().into());
    model.set_y_min_label(plot.y_min_label.as_str().into());
    model.set_y_max_label(plot.y_max_label.as_str().into());
    model.set_x_start_label(plot.x_start_label.as_str().into());
    model.set_x_end_label(plot.x_end_label.as_str().into());
}

/// Convert a formatted reading into a table record.
impl From<&ReadingDisplay> for ReadingRecord {
    fn from(display: &ReadingDisplay) -> Self {
        Self {
            timestamp: display.timestamp.as_str().into(),
            celsius: display.celsius.as_str().into(),
            fahrenheit: display.fahrenheit.as_str().into(),
            kelvin: display.kelvin.as_str().into(),
            pressure: display.pressure.as_str().into(),
            description: display.description.as_str().into(),
        }
    }
}

/// A minimal main function that reads the options, initializes the App and runs it.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = args::Args::parse().into_config()?;
    log::info!("Starting dashboard with {config:?}");

    let mut app = App::new(&config)?;

    app.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_record_from_display() {
        let display = ReadingDisplay {
            timestamp: "11-03-2024 14:05:09".into(),
            celsius: "-17.2 °C".into(),
            fahrenheit: "1.0 °F".into(),
            kelvin: "255.9 K".into(),
            pressure: "1003.0 hPa".into(),
            description: "Typical for the Season".into(),
        };
        let record = ReadingRecord::from(&display);

        assert_eq!(record.celsius, "-17.2 °C");
        assert_eq!(record.description, "Typical for the Season");
    }
}
