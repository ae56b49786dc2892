use tracing::info;

use crate::analyzers::aggregate::aggregate_route;
use crate::analyzers::group::CarrierBuckets;
use crate::analyzers::types::RouteReport;
use crate::config::RouteConfig;
use crate::error::TicketError;
use crate::parser::load_tickets;
use crate::ticket::TicketRecord;

/// Loads the configured input file and builds the full route report.
///
/// Nothing is written anywhere; a load or date failure leaves no partial output.
#[tracing::instrument(skip(config), fields(input = %config.input_path.display()))]
pub fn analyze(config: &RouteConfig) -> Result<RouteReport, TicketError> {
    let tickets = load_tickets(&config.input_path)?;
    analyze_tickets(&tickets, config)
}

/// Builds the report from already-loaded ticket records.
pub fn analyze_tickets(records: &[TicketRecord], config: &RouteConfig) -> Result<RouteReport, TicketError> {
    let buckets = CarrierBuckets::collect(records, config)?;
    let report = aggregate_route(config, records.len(), buckets);

    info!(
        origin = %report.origin,
        destination = %report.destination,
        total = report.total_tickets,
        matched = report.matched_tickets,
        carriers = report.price_spreads.len(),
        "Route aggregated"
    );

    Ok(report)
}
