use chrono::NaiveDate;

use crate::records::RideRecord;

/// Returns every record whose date falls within the inclusive
/// `[start, end]` range, in their original order.
///
/// An inverted range (`start > end`) yields an empty set rather than an
/// error; the dashboard treats it as "nothing selected".
pub fn filter_by_date(records: &[RideRecord], start: NaiveDate, end: NaiveDate) -> Vec<RideRecord> {
    records
        .iter()
        .filter(|r| r.date >= start && r.date <= end)
        .copied()
        .collect()
}
