//! Assembles the full dashboard payload for one filter range.

use chrono::{NaiveDate, Utc};
use tracing::debug;

use crate::analytics::aggregate::{
    hourly_usage, monthly_usage, ride_totals, seasonly_usage, weekday_usage,
};
use crate::analytics::filter::filter_by_date;
use crate::analytics::rfm::{
    rfm_by_weekday, rfm_summary, top_by_frequency, top_by_monetary, top_by_recency,
};
use crate::analytics::types::DashboardReport;
use crate::records::RideDataset;

/// How many weekdays the ranked RFM tables keep, matching the dashboard's
/// three head-5 bar charts.
pub const RFM_TOP_N: usize = 5;

const SCHEMA_VERSION: u8 = 1;

/// Filters the dataset to the inclusive `[start, end]` range and runs every
/// calculator over the result.
///
/// Pure over its inputs apart from the `generated_at` timestamp: the same
/// dataset and range always produce the same tables. An empty range (or an
/// inverted one) produces a report whose tables are all empty.
pub fn build_report(dataset: &RideDataset, start: NaiveDate, end: NaiveDate) -> DashboardReport {
    let rows = filter_by_date(dataset.records(), start, end);
    debug!(
        filtered = rows.len(),
        total = dataset.len(),
        %start,
        %end,
        "date filter applied"
    );

    let rfm = rfm_by_weekday(&rows);

    DashboardReport {
        schema_version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        start_date: start,
        end_date: end,
        filtered_records: rows.len(),
        totals: ride_totals(&rows),
        monthly: monthly_usage(&rows),
        seasonly: seasonly_usage(&rows),
        weekday: weekday_usage(&rows),
        hourly: hourly_usage(&rows),
        rfm_summary: rfm_summary(&rfm),
        top_recency: top_by_recency(&rfm, RFM_TOP_N),
        top_frequency: top_by_frequency(&rfm, RFM_TOP_N),
        top_monetary: top_by_monetary(&rfm, RFM_TOP_N),
        rfm,
    }
}
