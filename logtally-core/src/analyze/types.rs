use chrono::{DateTime, FixedOffset};

/// One successfully parsed access log line.
///
/// Entries are transient: the aggregator folds them into the counts and
/// drops them, nothing stores them.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub host: String,
    /// Timestamp as written in the log, UTC offset preserved. Bucketing
    /// and filtering use the clock date and hour in that offset, not UTC.
    pub timestamp: DateTime<FixedOffset>,
}
