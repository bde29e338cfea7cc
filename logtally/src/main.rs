use chrono::NaiveDate;
use clap::{ArgGroup, Parser};
use logtally_core::cli::{RunOptions, run};
use logtally_core::logging::init_logging;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "logtally",
    version,
    about = "Aggregate Apache access logs into per-hour and per-host request counts"
)]
#[command(group(
    ArgGroup::new("output")
        .required(true)
        .multiple(true)
        .args(["hourly", "hosts", "html"])
))]
struct Cli {
    /// Access log files to aggregate, in order
    #[arg(required = true, value_name = "INPUT")]
    inputs: Vec<PathBuf>,

    /// Write the per-hour summary CSV to this file
    #[arg(short = 't', long, value_name = "FILE")]
    hourly: Option<PathBuf>,

    /// Write the per-host summary CSV to this file
    #[arg(short = 'H', long, value_name = "FILE")]
    hosts: Option<PathBuf>,

    /// Write an HTML report to this file
    #[arg(long, value_name = "FILE")]
    html: Option<PathBuf>,

    /// Custom template for the HTML report (defaults to the built-in one)
    #[arg(long, value_name = "FILE", requires = "html")]
    template: Option<PathBuf>,

    /// First day of the period to count, inclusive (YYYY-MM-DD)
    #[arg(short, long, value_name = "DATE", value_parser = parse_date)]
    start: Option<NaiveDate>,

    /// Last day of the period to count, inclusive (YYYY-MM-DD)
    #[arg(short, long, value_name = "DATE", value_parser = parse_date)]
    end: Option<NaiveDate>,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("expected a date like 2005-04-18, got {value:?}"))
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    let opts = RunOptions {
        inputs: cli.inputs,
        hourly: cli.hourly,
        hosts: cli.hosts,
        html: cli.html,
        template: cli.template,
        start: cli.start,
        end: cli.end,
    };

    if let Err(e) = run(opts) {
        eprintln!("logtally error: {e:#}");
        std::process::exit(1);
    }
}
