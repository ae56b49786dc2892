use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures of a report run.
#[derive(Debug, Error)]
pub enum TicketError {
    #[error("failed to load tickets from {}", .path.display())]
    DataLoad {
        path: PathBuf,
        #[source]
        cause: LoadCause,
    },

    #[error("failed to parse date/time {value:?}")]
    DateParse {
        value: String,
        #[source]
        cause: chrono::ParseError,
    },
}

/// Why the input document could not be turned into tickets.
#[derive(Debug, Error)]
pub enum LoadCause {
    #[error("IoError: {0}")]
    Io(#[from] std::io::Error),

    #[error("JsonError: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document has no `tickets` array")]
    MissingTickets,

    #[error("InvalidTicket at index {index}: {source}")]
    InvalidTicket {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl TicketError {
    pub(crate) fn load(path: impl Into<PathBuf>, cause: impl Into<LoadCause>) -> Self {
        TicketError::DataLoad {
            path: path.into(),
            cause: cause.into(),
        }
    }
}
