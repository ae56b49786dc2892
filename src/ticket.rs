//! Ticket records and the per-ticket values the report is built from.

use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{LoadCause, TicketError};

/// An undecoded element of the input `tickets` array.
pub type TicketRecord = Value;

/// Exact, case-sensitive match on both ends of the route.
///
/// Only the two route fields are read; a record missing either of them, or
/// one that is not an object at all, simply does not match.
pub fn matches_route(record: &TicketRecord, origin: &str, destination: &str) -> bool {
    record.get("origin_name").and_then(Value::as_str) == Some(origin)
        && record.get("destination_name").and_then(Value::as_str) == Some(destination)
}

/// A decoded ticket record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ticket {
    pub origin_name: String,
    pub destination_name: String,
    pub carrier: String,
    pub departure_date: String,
    pub departure_time: String,
    pub arrival_date: String,
    pub arrival_time: String,
    pub price: i64,
}

impl Ticket {
    /// Decodes the record at position `index` of the `tickets` array.
    pub fn from_record(index: usize, record: &TicketRecord) -> Result<Self, LoadCause> {
        Ticket::deserialize(record).map_err(|source| LoadCause::InvalidTicket { index, source })
    }

    pub fn departure(&self, format: &str) -> Result<NaiveDateTime, TicketError> {
        parse_timestamp(&self.departure_date, &self.departure_time, format)
    }

    pub fn arrival(&self, format: &str) -> Result<NaiveDateTime, TicketError> {
        parse_timestamp(&self.arrival_date, &self.arrival_time, format)
    }

    /// Flight time in whole minutes, truncated toward zero.
    ///
    /// Arrival before departure yields a negative value rather than an error.
    pub fn duration_minutes(&self, format: &str) -> Result<i64, TicketError> {
        let departure = self.departure(format)?;
        let arrival = self.arrival(format)?;
        Ok((arrival - departure).num_minutes())
    }
}

/// Parses `"<date> <time>"` with `format`.
///
/// # Errors
///
/// Returns [`TicketError::DateParse`] carrying the joined string.
pub fn parse_timestamp(date: &str, time: &str, format: &str) -> Result<NaiveDateTime, TicketError> {
    let value = format!("{} {}", date, time);
    NaiveDateTime::parse_from_str(&value, format)
        .map_err(|cause| TicketError::DateParse { value, cause })
}

#[cfg(test)]
pub(crate) fn ticket(carrier: &str, origin: &str, destination: &str, price: i64) -> Ticket {
    Ticket {
        origin_name: origin.to_string(),
        destination_name: destination.to_string(),
        carrier: carrier.to_string(),
        departure_date: "01.01.24".to_string(),
        departure_time: "10:00".to_string(),
        arrival_date: "01.01.24".to_string(),
        arrival_time: "12:30".to_string(),
        price,
    }
}

#[cfg(test)]
pub(crate) fn record(carrier: &str, origin: &str, destination: &str, price: i64) -> TicketRecord {
    serde_json::json!({
        "origin_name": origin,
        "destination_name": destination,
        "carrier": carrier,
        "departure_date": "01.01.24",
        "departure_time": "10:00",
        "arrival_date": "01.01.24",
        "arrival_time": "12:30",
        "price": price,
    })
}
