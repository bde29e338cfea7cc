use crate::analyze::error::ParseError;
use crate::analyze::types::LogEntry;
use chrono::DateTime;
use once_cell::sync::Lazy;
use regex::Regex;

// Group 1: host, everything up to the first whitespace. One more field is
// skipped, then group 2 captures the bracketed timestamp.
static LINE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(.*?)\s.*?\s\[(.*)\]\s").unwrap());

// e.g. 18/Apr/2005:10:22:04 +0900. %b only accepts the English month
// abbreviations, independent of locale.
const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

/// Extract host and timestamp from one raw log line.
///
/// A line that misses the pattern or carries an unparseable timestamp is
/// an error, never a defaulted entry.
pub fn parse_line(line: &str) -> Result<LogEntry, ParseError> {
    let caps = LINE_PATTERN.captures(line).ok_or(ParseError::Pattern)?;

    let host = caps[1].to_string();
    let raw = &caps[2];

    let timestamp =
        DateTime::parse_from_str(raw, TIMESTAMP_FORMAT).map_err(|source| ParseError::Timestamp {
            value: raw.to_string(),
            source,
        })?;

    Ok(LogEntry { host, timestamp })
}
