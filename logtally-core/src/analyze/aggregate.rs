use crate::analyze::error::AggregateError;
use crate::analyze::matcher::parse_line;
use crate::analyze::period::Period;
use crate::analyze::store::AccessCounts;
use chrono::{NaiveDate, Timelike};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Per-call tally, fed into the run log.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParseSummary {
    /// Lines parsed from the file.
    pub lines: u64,
    /// Lines that passed the date filter and were counted.
    pub admitted: u64,
}

/// One aggregation session.
///
/// Repeated `parse` calls with different paths fold into the same counts;
/// read the result through [`Aggregator::counts`] once all inputs are in.
#[derive(Debug, Default)]
pub struct Aggregator {
    counts: AccessCounts,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counts(&self) -> &AccessCounts {
        &self.counts
    }

    /// Read one log file into the shared counts.
    ///
    /// The range is validated per call, before the file is opened. A line
    /// that fails the pattern aborts the call; lines folded in before it
    /// stay committed, since counting is incremental, not per-file.
    pub fn parse(
        &mut self,
        path: &Path,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<ParseSummary, AggregateError> {
        let period = Period::new(start, end)?;

        let file = File::open(path).map_err(|e| AggregateError::read(path, e))?;
        let reader = BufReader::new(file);

        let mut summary = ParseSummary::default();

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| AggregateError::read(path, e))?;
            let entry = parse_line(&line)
                .map_err(|source| AggregateError::malformed(path, idx + 1, source))?;
            summary.lines += 1;

            let date = entry.timestamp.date_naive();
            if !period.contains(date) {
                continue;
            }

            self.counts.record_hour(date, entry.timestamp.hour() as usize);
            self.counts.record_host(entry.host);
            summary.admitted += 1;
        }

        Ok(summary)
    }
}
