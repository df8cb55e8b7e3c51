//! Ride data filtering and aggregation.
//!
//! This module filters parsed ride records to a date range, rolls them up
//! by month, season, weekday, and hour, computes per-weekday RFM stats,
//! and packages everything into a single dashboard report.

pub mod aggregate;
pub mod filter;
pub mod report;
pub mod rfm;
pub mod types;
