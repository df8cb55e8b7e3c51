use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

use crate::analytics::types::{
    HourlyUsage, MonthlyUsage, RideTotals, RiderType, SeasonUsage, WeekdayUsage,
};
use crate::records::RideRecord;

/// Running casual/registered/total sums for one group.
#[derive(Debug, Default, Clone, Copy)]
struct RideSums {
    casual: u64,
    registered: u64,
    total: u64,
}

/// Folds records into per-key ride sums.
///
/// A `BTreeMap` keyed by the grouping dimension does the ordering work:
/// months sort chronologically, hours numerically, and the category enums
/// by their declared fixed order.
fn sum_by_key<K, F>(records: &[RideRecord], key: F) -> BTreeMap<K, RideSums>
where
    K: Ord,
    F: Fn(&RideRecord) -> K,
{
    let mut groups: BTreeMap<K, RideSums> = BTreeMap::new();

    for record in records {
        let sums = groups.entry(key(record)).or_default();
        sums.casual += u64::from(record.casual);
        sums.registered += u64::from(record.registered);
        sums.total += u64::from(record.cnt);
    }

    groups
}

/// Sums the three count columns over the whole filtered range.
pub fn ride_totals(records: &[RideRecord]) -> RideTotals {
    let mut totals = RideTotals::default();

    for record in records {
        totals.casual_rides += u64::from(record.casual);
        totals.registered_rides += u64::from(record.registered);
        totals.total_rides += u64::from(record.cnt);
    }

    totals
}

/// Ride sums per calendar month, chronological, labeled `%b-%y`.
///
/// Months without records are omitted, not zero-filled; the output only
/// ever contains months present in the input.
pub fn monthly_usage(records: &[RideRecord]) -> Vec<MonthlyUsage> {
    sum_by_key(records, |r| (r.date.year(), r.date.month()))
        .into_iter()
        .map(|((year, month), sums)| MonthlyUsage {
            yearmonth: month_label(year, month),
            casual_rides: sums.casual,
            registered_rides: sums.registered,
            total_rides: sums.total,
        })
        .collect()
}

fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .expect("year and month taken from a valid date")
        .format("%b-%y")
        .to_string()
}

/// Long-form ride sums per season, in the fixed season order; within each
/// season the casual row comes before the registered row.
pub fn seasonly_usage(records: &[RideRecord]) -> Vec<SeasonUsage> {
    let mut rows = Vec::new();

    for (season, sums) in sum_by_key(records, |r| r.season) {
        rows.push(SeasonUsage {
            season,
            type_of_rides: RiderType::Casual,
            count_rides: sums.casual,
        });
        rows.push(SeasonUsage {
            season,
            type_of_rides: RiderType::Registered,
            count_rides: sums.registered,
        });
    }

    rows
}

/// Long-form ride sums per weekday, Monday through Sunday, casual row
/// before registered row within each day.
pub fn weekday_usage(records: &[RideRecord]) -> Vec<WeekdayUsage> {
    let mut rows = Vec::new();

    for (weekday, sums) in sum_by_key(records, |r| r.weekday) {
        rows.push(WeekdayUsage {
            weekday,
            type_of_rides: RiderType::Casual,
            count_rides: sums.casual,
        });
        rows.push(WeekdayUsage {
            weekday,
            type_of_rides: RiderType::Registered,
            count_rides: sums.registered,
        });
    }

    rows
}

/// Ride sums per hour-of-day bucket, ascending; absent hours are omitted.
pub fn hourly_usage(records: &[RideRecord]) -> Vec<HourlyUsage> {
    sum_by_key(records, |r| r.hour)
        .into_iter()
        .map(|(hr, sums)| HourlyUsage {
            hr,
            casual_rides: sums.casual,
            registered_rides: sums.registered,
            total_rides: sums.total,
        })
        .collect()
}
