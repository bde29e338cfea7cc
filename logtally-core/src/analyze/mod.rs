//! Access Log Aggregation Pipeline
//!
//! This module turns raw Apache access log lines into two running tallies:
//! how many requests landed in each hour of each day, and how many came
//! from each client host.
//!
//! One [`Aggregator`] owns the counts for a whole session. Feeding it a
//! file reads the file line by line; each line is matched against the
//! fixed access-log pattern, checked against the optional date range, and
//! folded into the counts. Calling `parse` again with another file keeps
//! accumulating into the same counts, which is how multi-file runs work.
//!
//! The overall data flow is:
//!
//! log file
//! parse_line
//! LogEntry
//! Period
//! AccessCounts
//! sorted row views (consumed by the report module)

mod aggregate;
mod error;
mod matcher;
mod period;
mod store;
mod types;

#[cfg(test)]
mod tests;

pub use aggregate::{Aggregator, ParseSummary};
pub use error::{AggregateError, ParseError};
pub use matcher::parse_line;
pub use period::{InvalidPeriod, Period};
pub use store::{AccessCounts, HostRow, HourRow};
pub use types::LogEntry;
