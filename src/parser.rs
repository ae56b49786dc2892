//! JSON loader for ticket documents.

use serde_json::Value;
use std::path::Path;
use tracing::debug;

use crate::error::{LoadCause, TicketError};
use crate::ticket::TicketRecord;

/// Reads `path` and returns the elements of its `tickets` array.
///
/// Elements are not decoded here; only records on the requested route are
/// turned into [`Ticket`](crate::ticket::Ticket)s later.
///
/// # Errors
///
/// Returns [`TicketError::DataLoad`] if the file cannot be read, is not valid
/// JSON, or has no `tickets` array.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_tickets(path: &Path) -> Result<Vec<TicketRecord>, TicketError> {
    let content = std::fs::read_to_string(path).map_err(|e| TicketError::load(path, e))?;
    debug!(bytes = content.len(), "Ticket file read");

    parse_tickets(&content).map_err(|cause| TicketError::load(path, cause))
}

/// Extracts the `tickets` array of an in-memory JSON document.
pub fn parse_tickets(content: &str) -> Result<Vec<TicketRecord>, LoadCause> {
    let mut root: Value = serde_json::from_str(content)?;

    let tickets = match root.get_mut("tickets").map(Value::take) {
        Some(Value::Array(items)) => items,
        _ => return Err(LoadCause::MissingTickets),
    };

    debug!(count = tickets.len(), "Ticket records extracted");
    Ok(tickets)
}
