use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Season category of a ride record.
///
/// Declaration order is the fixed display order used by every seasonal
/// breakdown, so deriving [`Ord`] makes grouped outputs sort correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

/// Weekday category of a ride record, Monday first.
///
/// Same ordering contract as [`Season`]: declaration order is the fixed
/// display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// One logged bike-share interval: ride counts for a single hour of a
/// single day, as published in the cleaned dataset.
///
/// Field names follow the dataset's logical columns; `dteday` and `hr` are
/// renamed to their spelled-out forms on deserialization. Columns not listed
/// here (`yr`, `mnth`, the weather measurements) are ignored.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RideRecord {
    /// Unique record identifier; only ever used as a distinct-count key.
    pub instant: u32,
    #[serde(rename = "dteday")]
    pub date: NaiveDate,
    /// Hour-of-day bucket, 0–23. The parser rejects anything larger.
    #[serde(rename = "hr")]
    pub hour: u8,
    pub weekday: Weekday,
    pub season: Season,
    pub casual: u32,
    pub registered: u32,
    /// Total rides; the dataset guarantees `cnt == casual + registered`.
    pub cnt: u32,
}

/// The full record store: loaded once at startup, read-only afterwards.
///
/// Records keep their dataset order. All filtering and aggregation work on
/// borrowed views of this store; nothing ever mutates it after load.
#[derive(Debug, Default)]
pub struct RideDataset {
    records: Vec<RideRecord>,
}

impl RideDataset {
    pub fn from_records(records: Vec<RideRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[RideRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the inclusive `(min, max)` date span of the dataset, or
    /// `None` when it holds no records. The span doubles as the default
    /// filter range.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.records.iter().map(|r| r.date).min()?;
        let max = self.records.iter().map(|r| r.date).max()?;
        Some((min, max))
    }
}
