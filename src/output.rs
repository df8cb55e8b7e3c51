//! Output formatting and persistence for dashboard reports.
//!
//! Supports pretty-printed JSON on stdout, JSON files, and per-table
//! CSV export.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::analytics::types::DashboardReport;
use std::fs::{self, File};
use std::path::Path;

/// Prints the full report as pretty JSON on stdout.
///
/// Logging goes to stderr, so piping stdout yields clean JSON.
pub fn print_json(report: &DashboardReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Writes the full report as pretty JSON to `path`.
pub fn write_json(path: &Path, report: &DashboardReport) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(file, report)?;
    Ok(())
}

/// Writes one aggregated table as CSV with a header row.
///
/// An empty table produces an empty file.
pub fn write_table<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    debug!(path = %path.display(), rows = rows.len(), "Wrote CSV table");
    Ok(())
}

/// Exports every dashboard table as CSV plus the full report as JSON
/// into `dir`, creating the directory if needed.
pub fn export_report(dir: &str, report: &DashboardReport) -> Result<()> {
    let dir = Path::new(dir);
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    write_table(&dir.join("monthly_users.csv"), &report.monthly)?;
    write_table(&dir.join("seasonly_users.csv"), &report.seasonly)?;
    write_table(&dir.join("weekday_users.csv"), &report.weekday)?;
    write_table(&dir.join("hourly_users.csv"), &report.hourly)?;
    write_table(&dir.join("rfm.csv"), &report.rfm)?;
    write_json(&dir.join("report.json"), report)?;

    info!(dir = %dir.display(), "Exported dashboard tables");
    Ok(())
}
