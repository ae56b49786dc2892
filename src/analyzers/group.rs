use std::collections::BTreeMap;
use tracing::warn;

use crate::config::RouteConfig;
use crate::error::TicketError;
use crate::ticket::{Ticket, TicketRecord, matches_route};

/// Values collected for one carrier, in input order.
pub type CarrierBucket = Vec<i64>;

/// Per-carrier durations and prices for tickets on the configured route.
///
/// Both maps are keyed by carrier; a carrier appears only once it has a
/// matching ticket, so no bucket is ever empty.
#[derive(Debug, Default, PartialEq)]
pub struct CarrierBuckets {
    pub durations: BTreeMap<String, CarrierBucket>,
    pub prices: BTreeMap<String, CarrierBucket>,
    pub matched: usize,
}

impl CarrierBuckets {
    /// Buckets every record on the route in `config`.
    ///
    /// Records off the route are never decoded.
    ///
    /// # Errors
    ///
    /// Fails on the first matching record that lacks a ticket field
    /// ([`TicketError::DataLoad`]) or whose date or time does not parse.
    pub fn collect(records: &[TicketRecord], config: &RouteConfig) -> Result<Self, TicketError> {
        let mut buckets = CarrierBuckets::default();

        for (index, record) in records.iter().enumerate() {
            if !matches_route(record, &config.origin, &config.destination) {
                continue;
            }
            let ticket = Ticket::from_record(index, record)
                .map_err(|cause| TicketError::load(&config.input_path, cause))?;

            let minutes = ticket.duration_minutes(&config.date_format)?;
            if minutes < 0 {
                warn!(carrier = %ticket.carrier, minutes, "Arrival precedes departure");
            }

            buckets
                .durations
                .entry(ticket.carrier.clone())
                .or_default()
                .push(minutes);
            buckets
                .prices
                .entry(ticket.carrier.clone())
                .or_default()
                .push(ticket.price);
            buckets.matched += 1;
        }

        Ok(buckets)
    }
}
