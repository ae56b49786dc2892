use crate::analyzers::group::CarrierBuckets;
use crate::analyzers::types::{CarrierDuration, CarrierPrices, RouteReport};
use crate::analyzers::utility::{mean, median};
use crate::config::RouteConfig;

/// Reduces carrier buckets into a [`RouteReport`].
///
/// Carriers keep the iteration order of the bucket maps.
pub fn aggregate_route(config: &RouteConfig, total_tickets: usize, buckets: CarrierBuckets) -> RouteReport {
    let min_durations = buckets
        .durations
        .iter()
        .filter_map(|(carrier, minutes)| {
            Some(CarrierDuration {
                carrier: carrier.clone(),
                min_minutes: *minutes.iter().min()?,
            })
        })
        .collect();

    let mut price_spreads = Vec::with_capacity(buckets.prices.len());
    for (carrier, prices) in &buckets.prices {
        let (Some(avg), Some(med)) = (mean(prices), median(prices)) else {
            continue;
        };

        price_spreads.push(CarrierPrices {
            carrier: carrier.clone(),
            tickets: prices.len(),
            mean: avg,
            median: med,
            spread: avg - med,
        });
    }

    RouteReport {
        origin: config.origin.clone(),
        destination: config.destination.clone(),
        total_tickets,
        matched_tickets: buckets.matched,
        min_durations,
        price_spreads,
    }
}
