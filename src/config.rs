//! Run configuration for the route report.

use std::path::PathBuf;

/// Input file read when no path is given on the command line.
pub const DEFAULT_INPUT: &str = "tickets.json";
pub const DEFAULT_ORIGIN: &str = "Владивосток";
pub const DEFAULT_DESTINATION: &str = "Тель-Авив";

/// `DD.MM.YY HH:MM`, applied to `"<date> <time>"`.
pub const DATE_FORMAT: &str = "%d.%m.%y %H:%M";

/// Immutable settings threaded through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteConfig {
    pub input_path: PathBuf,
    pub origin: String,
    pub destination: String,
    pub date_format: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            origin: DEFAULT_ORIGIN.to_string(),
            destination: DEFAULT_DESTINATION.to_string(),
            date_format: DATE_FORMAT.to_string(),
        }
    }
}

impl RouteConfig {
    /// Same settings, different route.
    pub fn with_route(mut self, origin: &str, destination: &str) -> Self {
        self.origin = origin.to_string();
        self.destination = destination.to_string();
        self
    }

    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }
}
