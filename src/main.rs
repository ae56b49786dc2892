//! CLI entry point for the ticket route report.
//!
//! Reads a ticket document, reduces the tickets on one route to per-carrier
//! statistics and prints the report to stdout. Logs go to stderr.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use ticket_stats::{
    analyzers::analyzer::analyze,
    config::{DEFAULT_DESTINATION, DEFAULT_INPUT, DEFAULT_ORIGIN, RouteConfig},
    output::{append_record, write_json, write_report},
};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "ticket_stats")]
#[command(about = "Per-carrier flight time and price statistics for one route", long_about = None)]
struct Cli {
    /// JSON file with a top-level `tickets` array
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Origin city, matched exactly
    #[arg(long, default_value = DEFAULT_ORIGIN)]
    origin: String,

    /// Destination city, matched exactly
    #[arg(long, default_value = DEFAULT_DESTINATION)]
    destination: String,

    /// Report format written to stdout
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Optional: CSV file to append per-carrier rows to
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Optional: also write JSON logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Guard must outlive the run so buffered log lines get flushed.
    let _file_guard = init_logging(cli.log_file.as_deref())?;

    let config = RouteConfig::default()
        .with_input(cli.input)
        .with_route(&cli.origin, &cli.destination);

    let report = analyze(&config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        Format::Text => write_report(&mut out, &report)?,
        Format::Json => write_json(&mut out, &report)?,
    }
    out.flush()?;

    if let Some(path) = cli.csv {
        append_record(&path, &report)?;
        info!(path = %path.display(), "CSV rows appended");
    }

    Ok(())
}

/// Colored stderr logging, plus a JSON log file when `log_file` is set.
fn init_logging(
    log_file: Option<&std::path::Path>,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter("RUST_LOG", "warn"));

    let (json_layer, guard) = match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(std::path::Path::new("."));
            let name = path
                .file_name()
                .ok_or_else(|| anyhow::anyhow!("log file path has no file name: {}", path.display()))?;

            let file_appender = tracing_appender::rolling::never(dir, name);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(non_blocking_file)
                .with_filter(env_filter("RUST_LOG_JSON", "debug"));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(guard)
}

/// Filter from `var`, or `default` when the variable is unset or unparsable.
fn env_filter(var: &str, default: &str) -> EnvFilter {
    EnvFilter::try_from_env(var).unwrap_or_else(|_| EnvFilter::new(default))
}
