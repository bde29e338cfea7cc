use crate::analyze::{Aggregator, Period};
use crate::report::{DEFAULT_TEMPLATE, write_host_csv, write_hourly_csv, write_html_report};
use anyhow::Context;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};

/// Everything one invocation needs, already parsed and validated by clap.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub inputs: Vec<PathBuf>,
    pub hourly: Option<PathBuf>,
    pub hosts: Option<PathBuf>,
    pub html: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Aggregate the inputs, then write every requested report.
///
/// An input that cannot be read or parsed is reported with its path and
/// skipped; the run carries on with the remaining inputs. An invalid date
/// range fails here, before any input or output file is touched, so a bad
/// range never leaves partial reports behind.
pub fn run(opts: RunOptions) -> anyhow::Result<()> {
    // Fail fast; each parse call re-validates for itself.
    Period::new(opts.start, opts.end)?;

    let mut aggregator = Aggregator::new();
    let mut skipped = 0usize;
    let mut admitted = 0u64;

    for path in &opts.inputs {
        match aggregator.parse(path, opts.start, opts.end) {
            Ok(summary) => {
                admitted += summary.admitted;
                info!(
                    path = %path.display(),
                    lines = summary.lines,
                    admitted = summary.admitted,
                    "parsed log file"
                );
            }
            Err(err) => {
                skipped += 1;
                error!(path = %path.display(), %err, "skipping input");
            }
        }
    }

    let counts = aggregator.counts();

    if let Some(path) = &opts.hourly {
        write_hourly_csv(counts, path)?;
    }

    if let Some(path) = &opts.hosts {
        write_host_csv(counts, path)?;
    }

    if let Some(path) = &opts.html {
        let template = match &opts.template {
            Some(custom) => fs::read_to_string(custom)
                .with_context(|| format!("failed to read template {}", custom.display()))?,
            None => DEFAULT_TEMPLATE.to_string(),
        };
        write_html_report(counts, path, &template)?;
    }

    info!(
        files = opts.inputs.len() - skipped,
        skipped, admitted, "aggregation complete"
    );

    Ok(())
}
