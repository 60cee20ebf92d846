use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::{fmt, EnvFilter};

// Local modules
mod commands;
mod errors;
mod file_utils;
mod models;
mod progress;

use commands::empty_columns::{check_empty_columns, resolve_delimiter};
use file_utils::{file_size, format_bytes};
use models::{OutputFormat, ScanReport};

const VERSION: &str = concat!(
    "v",
    env!("CSV_CHECKER_VERSION"),
    " (built ",
    env!("BUILD_DATE"),
    ", ",
    env!("TARGET"),
    ")"
);

#[derive(Parser, Debug)]
#[command(
    name = "csv-column-checker",
    version = VERSION,
    about = "Reports CSV columns that have no value in any row"
)]
struct Args {
    /// Path to the CSV file
    #[arg(short, long)]
    file: PathBuf,

    /// Column delimiter; only the first character is used
    #[arg(short, long, default_value = ",")]
    delimiter: String,

    /// Output column names instead of the indexes
    #[arg(short, long, conflicts_with = "json")]
    names: bool,

    /// Output the full report as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.names {
            OutputFormat::Names
        } else {
            OutputFormat::Indices
        }
    }
}

fn main() -> ExitCode {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let delimiter = match resolve_delimiter(&args.delimiter) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match file_size(&args.file) {
        Ok(size) => debug!("checking {} ({})", args.file.display(), format_bytes(size)),
        Err(e) => debug!("cannot stat {}: {}", args.file.display(), e),
    }

    let report = match check_empty_columns(&args.file, delimiter) {
        Ok(report) => report,
        Err(e) => {
            if e.is_open_error() {
                warn!("check the path and read permissions of {}", args.file.display());
            } else if e.is_row_error() {
                warn!("the file is malformed or has rows wider than its header");
            }
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    for (index, name) in report.empty_columns() {
        debug!(index, name, "empty column");
    }

    match render(&report, args.output_format()) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    }

    if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        // empty columns are a failed check
        ExitCode::FAILURE
    }
}

/// Text printed on stdout for a finished scan.
fn render(report: &ScanReport, format: OutputFormat) -> Result<String, serde_json::Error> {
    if format == OutputFormat::Json {
        return serde_json::to_string_pretty(report);
    }
    if report.is_clean() {
        return Ok("No completely empty columns found.".to_string());
    }

    Ok(match format {
        OutputFormat::Names => format!("Empty columns: {:?}", report.empty_names),
        _ => format!("Empty columns found on position: {:?}", report.empty_indices),
    })
}
