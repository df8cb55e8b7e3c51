//! CSV parser for the cleaned bike-share dataset.

use anyhow::{Context, Result, bail};
use flate2::read::GzDecoder;
use std::io::Read;
use tracing::warn;

use crate::records::RideRecord;

/// Decodes the cleaned bike-share dataset from raw CSV bytes.
///
/// Gzip-compressed payloads are detected by magic number and decompressed
/// transparently. Columns beyond the logical schema are ignored; a
/// header-only file yields an empty record list.
///
/// # Errors
///
/// Fails fast on the first malformed row: an unparseable date, an unknown
/// weekday/season label, a negative count, or an `hr` value outside 0–23
/// rejects the whole dataset. A `cnt` that disagrees with
/// `casual + registered` is not fatal; disagreements are counted and
/// surfaced as a single warning.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<RideRecord>> {
    if is_gzip(bytes) {
        let mut decoded = Vec::new();
        GzDecoder::new(bytes)
            .read_to_end(&mut decoded)
            .context("failed to decompress gzip dataset payload")?;
        return parse_csv(&decoded);
    }

    parse_csv(bytes)
}

fn is_gzip(bytes: &[u8]) -> bool {
    bytes.len() >= 2 && bytes[0] == 0x1f && bytes[1] == 0x8b
}

fn parse_csv(bytes: &[u8]) -> Result<Vec<RideRecord>> {
    let mut reader = csv::Reader::from_reader(bytes);
    let mut records = Vec::new();
    let mut cnt_mismatches = 0usize;

    for (i, result) in reader.deserialize().enumerate() {
        // Line 1 is the header row.
        let line = i + 2;
        let record: RideRecord =
            result.with_context(|| format!("malformed ride record on line {line}"))?;

        if record.hour > 23 {
            bail!("hour {} out of range 0-23 on line {line}", record.hour);
        }

        if u64::from(record.cnt) != u64::from(record.casual) + u64::from(record.registered) {
            cnt_mismatches += 1;
        }

        records.push(record);
    }

    if cnt_mismatches > 0 {
        warn!(
            cnt_mismatches,
            total = records.len(),
            "dataset rows where cnt != casual + registered"
        );
    }

    Ok(records)
}
