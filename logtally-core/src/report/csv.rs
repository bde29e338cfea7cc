use crate::analyze::AccessCounts;
use crate::report::error::ReportError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One `label,count` record per (date, hour) bucket, no header row.
pub fn write_hourly_csv(counts: &AccessCounts, path: &Path) -> Result<(), ReportError> {
    let file = File::create(path).map_err(|e| ReportError::write(path, e))?;
    let mut out = BufWriter::new(file);

    for row in counts.hourly() {
        writeln!(out, "{},{}", row.label, row.count).map_err(|e| ReportError::write(path, e))?;
    }

    out.flush().map_err(|e| ReportError::write(path, e))
}

/// One `host,count` record per host, busiest first. Fields are written
/// verbatim: a host containing a comma is not quoted or escaped.
pub fn write_host_csv(counts: &AccessCounts, path: &Path) -> Result<(), ReportError> {
    let file = File::create(path).map_err(|e| ReportError::write(path, e))?;
    let mut out = BufWriter::new(file);

    for row in counts.hosts() {
        writeln!(out, "{},{}", row.host, row.count).map_err(|e| ReportError::write(path, e))?;
    }

    out.flush().map_err(|e| ReportError::write(path, e))
}
