//! Recency / frequency / monetary scoring of weekdays.
//!
//! Scores every weekday present in the filtered range by how recently it
//! last occurred, how many distinct ride events it saw, and how many total
//! rides it carried. Feeds the RFM metric tiles and the three ranked bar
//! charts.

use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};

use crate::analytics::types::{RfmStats, RfmSummary};
use crate::records::{RideRecord, Weekday};

struct WeekdayGroup {
    instants: HashSet<u32>,
    monetary: u64,
    max_date: NaiveDate,
}

/// Computes one [`RfmStats`] row per weekday present in `records`, in
/// weekday order.
///
/// The recency anchor is the latest date of the whole filtered set,
/// computed once before grouping, so the weekday holding that date scores
/// recency 0 and no recency is ever negative. An empty input yields an
/// empty table; there is no anchor to measure against.
pub fn rfm_by_weekday(records: &[RideRecord]) -> Vec<RfmStats> {
    let anchor = match records.iter().map(|r| r.date).max() {
        Some(date) => date,
        None => return Vec::new(),
    };

    let mut groups: BTreeMap<Weekday, WeekdayGroup> = BTreeMap::new();

    for record in records {
        let group = groups.entry(record.weekday).or_insert_with(|| WeekdayGroup {
            instants: HashSet::new(),
            monetary: 0,
            max_date: record.date,
        });
        group.instants.insert(record.instant);
        group.monetary += u64::from(record.cnt);
        group.max_date = group.max_date.max(record.date);
    }

    groups
        .into_iter()
        .map(|(day, group)| RfmStats {
            day,
            frequency: group.instants.len() as u64,
            monetary: group.monetary,
            recency: (anchor - group.max_date).num_days(),
        })
        .collect()
}

/// Averages the three scores across all weekday rows. Empty input yields
/// all-zero averages rather than a division by zero.
pub fn rfm_summary(rows: &[RfmStats]) -> RfmSummary {
    if rows.is_empty() {
        return RfmSummary::default();
    }

    let n = rows.len() as f64;
    RfmSummary {
        avg_recency: rows.iter().map(|r| r.recency as f64).sum::<f64>() / n,
        avg_frequency: rows.iter().map(|r| r.frequency as f64).sum::<f64>() / n,
        avg_monetary: rows.iter().map(|r| r.monetary as f64).sum::<f64>() / n,
    }
}

/// The `n` most recently seen weekdays (smallest recency first).
pub fn top_by_recency(rows: &[RfmStats], n: usize) -> Vec<RfmStats> {
    let mut ranked = rows.to_vec();
    ranked.sort_by_key(|r| r.recency);
    ranked.truncate(n);
    ranked
}

/// The `n` weekdays with the most distinct ride events (largest first).
pub fn top_by_frequency(rows: &[RfmStats], n: usize) -> Vec<RfmStats> {
    let mut ranked = rows.to_vec();
    ranked.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    ranked.truncate(n);
    ranked
}

/// The `n` weekdays with the most total rides (largest first).
pub fn top_by_monetary(rows: &[RfmStats], n: usize) -> Vec<RfmStats> {
    let mut ranked = rows.to_vec();
    ranked.sort_by(|a, b| b.monetary.cmp(&a.monetary));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Season;

    #[test]
    fn test_rfm_frequency_monetary_recency() {
        // Two Sundays a week apart plus a Monday in between.
        let records = vec![
            rec(1, (2023, 1, 1), Weekday::Sunday, 5, 10),
            rec(2, (2023, 1, 8), Weekday::Sunday, 3, 7),
            rec(3, (2023, 1, 2), Weekday::Monday, 2, 2),
        ];

        let rows = rfm_by_weekday(&records);

        assert_eq!(rows.len(), 2);

        // Weekday order puts Monday first.
        assert_eq!(rows[0].day, Weekday::Monday);
        assert_eq!(rows[0].frequency, 1);
        assert_eq!(rows[0].monetary, 4);
        assert_eq!(rows[0].recency, 6);

        assert_eq!(rows[1].day, Weekday::Sunday);
        assert_eq!(rows[1].frequency, 2);
        assert_eq!(rows[1].monetary, 25);
        assert_eq!(rows[1].recency, 0);
    }

    #[test]
    fn test_rfm_recency_never_negative() {
        let records = vec![
            rec(1, (2023, 5, 1), Weekday::Monday, 1, 1),
            rec(2, (2023, 5, 2), Weekday::Tuesday, 1, 1),
            rec(3, (2023, 5, 9), Weekday::Tuesday, 1, 1),
        ];

        let rows = rfm_by_weekday(&records);

        assert!(rows.iter().all(|r| r.recency >= 0));
        let anchor_day = rows.iter().find(|r| r.day == Weekday::Tuesday).unwrap();
        assert_eq!(anchor_day.recency, 0);
    }

    #[test]
    fn test_rfm_counts_distinct_instants() {
        // Same instant twice must count once toward frequency.
        let records = vec![
            rec(7, (2023, 1, 1), Weekday::Sunday, 1, 1),
            rec(7, (2023, 1, 8), Weekday::Sunday, 1, 1),
            rec(8, (2023, 1, 15), Weekday::Sunday, 1, 1),
        ];

        let rows = rfm_by_weekday(&records);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].frequency, 2);
        assert_eq!(rows[0].monetary, 6);
    }

    #[test]
    fn test_rfm_empty_input() {
        let rows = rfm_by_weekday(&[]);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_rfm_summary_averages() {
        let rows = vec![
            stats(Weekday::Monday, 2, 10, 4),
            stats(Weekday::Tuesday, 4, 30, 0),
        ];

        let summary = rfm_summary(&rows);

        assert_eq!(summary.avg_frequency, 3.0);
        assert_eq!(summary.avg_monetary, 20.0);
        assert_eq!(summary.avg_recency, 2.0);
    }

    #[test]
    fn test_rfm_summary_empty_is_zero() {
        let summary = rfm_summary(&[]);
        assert_eq!(summary.avg_recency, 0.0);
        assert_eq!(summary.avg_frequency, 0.0);
        assert_eq!(summary.avg_monetary, 0.0);
    }

    #[test]
    fn test_top_rankings_sort_and_truncate() {
        let rows = vec![
            stats(Weekday::Monday, 5, 100, 3),
            stats(Weekday::Wednesday, 9, 50, 1),
            stats(Weekday::Saturday, 2, 300, 0),
        ];

        let by_recency = top_by_recency(&rows, 2);
        assert_eq!(by_recency.len(), 2);
        assert_eq!(by_recency[0].day, Weekday::Saturday);
        assert_eq!(by_recency[1].day, Weekday::Wednesday);

        let by_frequency = top_by_frequency(&rows, 2);
        assert_eq!(by_frequency[0].day, Weekday::Wednesday);
        assert_eq!(by_frequency[1].day, Weekday::Monday);

        let by_monetary = top_by_monetary(&rows, 5);
        assert_eq!(by_monetary.len(), 3);
        assert_eq!(by_monetary[0].day, Weekday::Saturday);
        assert_eq!(by_monetary[2].day, Weekday::Wednesday);
    }

    fn rec(
        instant: u32,
        ymd: (i32, u32, u32),
        weekday: Weekday,
        casual: u32,
        registered: u32,
    ) -> RideRecord {
        RideRecord {
            instant,
            date: NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap(),
            hour: 0,
            weekday,
            season: Season::Winter,
            casual,
            registered,
            cnt: casual + registered,
        }
    }

    fn stats(day: Weekday, frequency: u64, monetary: u64, recency: i64) -> RfmStats {
        RfmStats {
            day,
            frequency,
            monetary,
            recency,
        }
    }
}
