//! Tsumego-Convert: build the problem dataset for the viewer.
//!
//! ## Usage
//!
//! - `tsumego-convert` - Convert `sanderland-tsumego/problems` into `all_problems.json`
//! - `tsumego-convert --output problems.sql` - Write an SQL upsert script instead
//! - `tsumego-convert --max-problems 100` - Only convert the first 100 files

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::{info, warn};

use tsumego_convert::constants::{DEFAULT_INPUT_DIR, DEFAULT_INPUT_EXTENSION, DEFAULT_OUTPUT_FILE};
use tsumego_convert::output::OutputFormat;
use tsumego_convert::pipeline::{ConvertOptions, convert};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum FormatArg {
    Json,
    Sql,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Sql => OutputFormat::Sql,
        }
    }
}

/// Tsumego-Convert: convert Go problem files into one dataset
#[derive(Parser)]
#[command(name = "tsumego-convert")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root directory searched recursively for problem files
    #[arg(long, value_name = "DIR", default_value = DEFAULT_INPUT_DIR)]
    input: PathBuf,

    /// Output file; a .json or .sql extension selects the format
    #[arg(long, value_name = "FILE", default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Output format, overriding the output file's extension
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Extension of problem files
    #[arg(long, value_name = "EXT", default_value = DEFAULT_INPUT_EXTENSION)]
    extension: String,

    /// Convert at most this many files (after sorting)
    #[arg(long, value_name = "N")]
    max_problems: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let options = ConvertOptions {
        input_root: cli.input,
        output_path: cli.output,
        format: cli.format.map(OutputFormat::from),
        extension: cli.extension,
        max_problems: cli.max_problems,
    };

    let summary = convert(&options)?;
    info!(
        "Successfully wrote {} problem(s) to {}",
        summary.converted,
        options.output_path.display()
    );
    if !summary.failures.is_empty() {
        warn!("Failed to convert {} problem(s)", summary.failures.len());
    }
    Ok(())
}
