//! Chart-ready output tables produced by the calculators.
//!
//! Every row type serializes with exactly the column names the dashboard
//! charts expect, so a table can be handed to the frontend (or written as
//! CSV) without renaming anything.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::records::{Season, Weekday};

/// User type of a melted count row.
///
/// Serialized as the chart's `type_of_rides` values, with casual always
/// emitted before registered within a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiderType {
    #[serde(rename = "casual_rides")]
    Casual,
    #[serde(rename = "registered_rides")]
    Registered,
}

/// Headline ride sums over the filtered range (the dashboard metric tiles).
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct RideTotals {
    pub total_rides: u64,
    pub casual_rides: u64,
    pub registered_rides: u64,
}

/// One month of ride sums; `yearmonth` is the `%b-%y` label (`"Jan-23"`).
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyUsage {
    pub yearmonth: String,
    pub casual_rides: u64,
    pub registered_rides: u64,
    pub total_rides: u64,
}

/// Long-form seasonal row: one `(season, rider type)` pair per row.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SeasonUsage {
    pub season: Season,
    pub type_of_rides: RiderType,
    pub count_rides: u64,
}

/// Long-form weekday row, same shape as [`SeasonUsage`].
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WeekdayUsage {
    pub weekday: Weekday,
    pub type_of_rides: RiderType,
    pub count_rides: u64,
}

/// One hour-of-day bucket of ride sums.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HourlyUsage {
    pub hr: u8,
    pub casual_rides: u64,
    pub registered_rides: u64,
    pub total_rides: u64,
}

/// Recency / frequency / monetary scores for one weekday.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RfmStats {
    pub day: Weekday,
    /// Distinct ride events (unique `instant` values) on this weekday.
    pub frequency: u64,
    /// Total rides on this weekday.
    pub monetary: u64,
    /// Whole days between this weekday's latest occurrence and the filtered
    /// set's latest date. Zero for the weekday holding that latest date.
    pub recency: i64,
}

/// Averages across the per-weekday RFM rows (the dashboard's three RFM
/// metric tiles). All zero when the filtered set is empty.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct RfmSummary {
    pub avg_recency: f64,
    pub avg_frequency: f64,
    pub avg_monetary: f64,
}

/// Everything one dashboard render needs, packaged as a single document.
///
/// `schema_version` is bumped whenever a field changes shape, so a detached
/// frontend can detect payloads it does not understand.
#[derive(Debug, Serialize)]
pub struct DashboardReport {
    pub schema_version: u8,
    pub generated_at: DateTime<Utc>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub filtered_records: usize,
    pub totals: RideTotals,
    pub monthly: Vec<MonthlyUsage>,
    pub seasonly: Vec<SeasonUsage>,
    pub weekday: Vec<WeekdayUsage>,
    pub hourly: Vec<HourlyUsage>,
    pub rfm: Vec<RfmStats>,
    pub rfm_summary: RfmSummary,
    pub top_recency: Vec<RfmStats>,
    pub top_frequency: Vec<RfmStats>,
    pub top_monetary: Vec<RfmStats>,
}
