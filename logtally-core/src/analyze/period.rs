use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("start date {start} is later than end date {end}")]
pub struct InvalidPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Inclusive calendar-date range for admitting entries.
///
/// Comparison is by date only; time of day never excludes an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    start: NaiveDate,
    end: NaiveDate,
}

impl Period {
    /// Build a period from optional bounds. An absent bound leaves that
    /// side unbounded.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self, InvalidPeriod> {
        let start = start.unwrap_or(NaiveDate::MIN);
        let end = end.unwrap_or(NaiveDate::MAX);

        if start > end {
            return Err(InvalidPeriod { start, end });
        }

        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
