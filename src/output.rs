//! Output formatting and persistence for route reports.
//!
//! Supports the plain-text report, JSON serialization, and CSV append.

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::analyzers::types::RouteReport;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

pub const DURATION_HEADER: &str = "Минимальное время полета (в минутах):";
pub const SPREAD_HEADER: &str = "Разница между средней ценой и медианой:";

/// Writes the two-section text report.
pub fn write_report<W: Write>(out: &mut W, report: &RouteReport) -> Result<()> {
    writeln!(out, "{}", DURATION_HEADER)?;
    for d in &report.min_durations {
        writeln!(out, "{}: {}", d.carrier, d.min_minutes)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", SPREAD_HEADER)?;
    for p in &report.price_spreads {
        writeln!(out, "{}: {:.2}", p.carrier, p.spread)?;
    }

    Ok(())
}

/// Writes the report as pretty-printed JSON.
pub fn write_json<W: Write>(out: &mut W, report: &RouteReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// One CSV row per carrier.
#[derive(Debug, Serialize)]
struct CarrierRecord<'a> {
    origin: &'a str,
    destination: &'a str,
    carrier: &'a str,
    tickets: usize,
    min_duration_minutes: Option<i64>,
    mean_price: f64,
    median_price: f64,
    price_spread: f64,
}

/// Appends one row per carrier of `report` to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_record(path: &Path, report: &RouteReport) -> Result<()> {
    let file_exists = path.exists();
    debug!(path = %path.display(), file_exists, "Appending CSV records");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    for prices in &report.price_spreads {
        let min_duration_minutes = report
            .min_durations
            .iter()
            .find(|d| d.carrier == prices.carrier)
            .map(|d| d.min_minutes);

        writer.serialize(CarrierRecord {
            origin: &report.origin,
            destination: &report.destination,
            carrier: &prices.carrier,
            tickets: prices.tickets,
            min_duration_minutes,
            mean_price: prices.mean,
            median_price: prices.median,
            price_spread: prices.spread,
        })?;
    }
    writer.flush()?;

    Ok(())
}
