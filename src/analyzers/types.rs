//! Data types produced by the aggregation step.

use serde::Serialize;

/// Shortest flight time seen for one carrier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarrierDuration {
    pub carrier: String,
    pub min_minutes: i64,
}

/// Price statistics for one carrier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarrierPrices {
    pub carrier: String,
    pub tickets: usize,
    pub mean: f64,
    pub median: f64,
    /// `mean - median`
    pub spread: f64,
}

/// Complete result for one route, ready for the output layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport {
    pub origin: String,
    pub destination: String,
    pub total_tickets: usize,
    pub matched_tickets: usize,
    pub min_durations: Vec<CarrierDuration>,
    pub price_spreads: Vec<CarrierPrices>,
}
