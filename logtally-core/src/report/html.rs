use crate::analyze::AccessCounts;
use crate::report::error::ReportError;
use minijinja::{Environment, context};
use std::fs;
use std::path::Path;

/// Ships with the binary; `--template` swaps in a user file instead.
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/report.html");

/// Render the aggregate through a minijinja template.
///
/// The context carries both sorted views: `hourly`, rows with `label` and
/// `count` in date-then-hour order, and `hosts`, rows with `host` and
/// `count`, busiest first.
pub fn render_html(counts: &AccessCounts, template: &str) -> Result<String, ReportError> {
    let mut env = Environment::new();
    env.add_template("report", template)?;

    let html = env.get_template("report")?.render(context! {
        hourly => counts.hourly().collect::<Vec<_>>(),
        hosts => counts.hosts(),
    })?;

    Ok(html)
}

/// Render and write the markup verbatim to `path`.
pub fn write_html_report(
    counts: &AccessCounts,
    path: &Path,
    template: &str,
) -> Result<(), ReportError> {
    let html = render_html(counts, template)?;
    fs::write(path, html).map_err(|e| ReportError::write(path, e))
}
