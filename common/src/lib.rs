//! Core of the Antarctic live readings dashboard: synthetic readings, a bounded
//! history and the derived values the UI shows.

pub mod config;
pub mod readings;
pub mod session;

pub use config::{ConfigError, DashboardConfig};
pub use session::{DashboardView, Session};
