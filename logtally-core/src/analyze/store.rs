use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// One (date, hour) bucket, flattened for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourRow {
    /// `yyyy/MM/dd HH`, hour zero-padded.
    pub label: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostRow {
    pub host: String,
    pub count: u64,
}

/// The running aggregate for one session.
///
/// Every admitted line increments exactly one hour slot and one host
/// counter, so the two maps always carry the same total. Counters only
/// grow; repeated parse calls keep accumulating.
#[derive(Debug, Default)]
pub struct AccessCounts {
    // by_hour[date][hour]; a date materializes on its first admitted entry
    by_hour: BTreeMap<NaiveDate, [u64; 24]>,
    // case-sensitive, exact host strings
    by_host: HashMap<String, u64>,
}

impl AccessCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// `hour` is 0..=23; callers derive it from a parsed timestamp.
    pub fn record_hour(&mut self, date: NaiveDate, hour: usize) {
        self.by_hour.entry(date).or_insert([0; 24])[hour] += 1;
    }

    pub fn record_host(&mut self, host: String) {
        *self.by_host.entry(host).or_insert(0) += 1;
    }

    /// Rows ordered by ascending date, then hour 00..23. Every
    /// materialized date emits all 24 slots, zeros included. The iterator
    /// is recomputed per call, not a consuming cursor.
    pub fn hourly(&self) -> impl Iterator<Item = HourRow> + '_ {
        self.by_hour.iter().flat_map(|(date, slots)| {
            slots.iter().enumerate().map(move |(hour, count)| HourRow {
                label: format!("{} {:02}", date.format("%Y/%m/%d"), hour),
                count: *count,
            })
        })
    }

    /// Rows ordered by descending count; equal counts order by host name
    /// so output is deterministic.
    pub fn hosts(&self) -> Vec<HostRow> {
        let mut rows: Vec<HostRow> = self
            .by_host
            .iter()
            .map(|(host, count)| HostRow {
                host: host.clone(),
                count: *count,
            })
            .collect();

        rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.host.cmp(&b.host)));
        rows
    }
}
