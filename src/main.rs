//! CLI entry point for the bike-share dashboard tool.
//!
//! Provides subcommands for printing a full analytics report as JSON,
//! exporting per-chart tables as CSV, and snapshotting the published
//! dataset.

use anyhow::{Context, Result, bail};
use bikeshare_dash::analytics::report::build_report;
use bikeshare_dash::{
    fetch::{BasicClient, fetch_bytes},
    output::{export_report, print_json},
    parser::parse_records,
    records::RideDataset,
};
use bytes::Bytes;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Hourly ride data published by the upstream dashboard project.
const DEFAULT_DATA_URL: &str = "https://raw.githubusercontent.com/ramafebradian/Bike-Sharing-Project/main/submission_Rama_Febradian/Dashboard/clean_data.csv";

#[derive(Parser)]
#[command(name = "bikeshare_dash")]
#[command(about = "A tool to analyze bike-share usage data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a full analytics report as JSON from a file or URL
    Report {
        /// Path to file or URL to fetch, defaults to the published dataset
        #[arg(value_name = "FILE_OR_URL")]
        source: Option<String>,

        /// First day to include (YYYY-MM-DD), defaults to the earliest record
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Last day to include (YYYY-MM-DD), defaults to the latest record
        #[arg(long)]
        end: Option<NaiveDate>,
    },
    /// Export per-chart tables as CSV plus the full report as JSON
    Export {
        /// Path to file or URL to fetch, defaults to the published dataset
        #[arg(value_name = "FILE_OR_URL")]
        source: Option<String>,

        /// Directory to write the exported tables to
        #[arg(short = 'd', long, default_value = "tables")]
        output_dir: String,

        /// First day to include (YYYY-MM-DD), defaults to the earliest record
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Last day to include (YYYY-MM-DD), defaults to the latest record
        #[arg(long)]
        end: Option<NaiveDate>,
    },
    /// Download the ride dataset and save a validated local snapshot
    Fetch {
        /// URL to fetch, defaults to the published dataset
        #[arg(value_name = "URL")]
        url: Option<String>,

        /// File to save the dataset to
        #[arg(short, long, default_value = "clean_data.csv")]
        output: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/bikeshare_dash.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_dash.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report { source, start, end } => {
            let dataset = load_dataset(source).await?;
            let (start, end) = resolve_range(&dataset, start, end)?;

            let report = build_report(&dataset, start, end);
            info!(
                filtered = report.filtered_records,
                total_rides = report.totals.total_rides,
                casual_rides = report.totals.casual_rides,
                registered_rides = report.totals.registered_rides,
                "Report built"
            );

            print_json(&report)?;
        }
        Commands::Export {
            source,
            output_dir,
            start,
            end,
        } => {
            let dataset = load_dataset(source).await?;
            let (start, end) = resolve_range(&dataset, start, end)?;

            let report = build_report(&dataset, start, end);
            export_report(&output_dir, &report)?;
        }
        Commands::Fetch { url, output } => {
            let url = resolve_source(url);

            let client = BasicClient::new();
            let bytes = fetch_bytes(&client, &url).await?;
            let records = parse_records(&bytes)?;

            std::fs::write(&output, &bytes)
                .with_context(|| format!("failed to write {output}"))?;
            info!(records = records.len(), output = %output, "Dataset snapshot saved");
        }
    }

    Ok(())
}

/// Loads ride data from a local file path or fetches it over HTTP.
#[tracing::instrument(fields(source = %source))]
async fn fetcher(source: &str) -> Result<Bytes> {
    let bytes = if source.starts_with("http") {
        let client = BasicClient::new();
        fetch_bytes(&client, source).await?
    } else {
        std::fs::read(source)
            .with_context(|| format!("failed to read {source}"))?
            .into()
    };
    Ok(bytes)
}

/// Resolves the dataset location: explicit argument, then the
/// BIKESHARE_DATA_URL environment variable, then the published dataset.
fn resolve_source(source: Option<String>) -> String {
    source
        .or_else(|| std::env::var("BIKESHARE_DATA_URL").ok())
        .unwrap_or_else(|| DEFAULT_DATA_URL.to_string())
}

async fn load_dataset(source: Option<String>) -> Result<RideDataset> {
    let source = resolve_source(source);
    let bytes = fetcher(&source).await?;
    let records = parse_records(&bytes)
        .with_context(|| format!("failed to parse ride data from {source}"))?;

    let dataset = RideDataset::from_records(records);
    info!(records = dataset.len(), source = %source, "Ride data loaded");
    Ok(dataset)
}

/// Resolves the report window, defaulting each missing bound to the
/// dataset's own span.
fn resolve_range(
    dataset: &RideDataset,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<(NaiveDate, NaiveDate)> {
    let (start, end) = match dataset.date_span() {
        Some((first, last)) => (start.unwrap_or(first), end.unwrap_or(last)),
        None => match (start, end) {
            (Some(start), Some(end)) => (start, end),
            _ => bail!("dataset has no records, pass both --start and --end explicitly"),
        },
    };

    if start > end {
        warn!(%start, %end, "Start date is after end date, every table will be empty");
    }

    Ok((start, end))
}
