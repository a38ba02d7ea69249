//! gamut - display gamut coverage CLI
//!
//! Reads measured display primaries and white point, reports which reference
//! gamut the display matches best and the nearest standard illuminant.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "gamut")]
#[command(author, version, about = "Display gamut coverage and white point matching")]
#[command(long_about = "
Computes how much of each reference color gamut a display covers, from the
measured CIE 1931 xy chromaticities of its primaries, and finds the standard
illuminant nearest to its white point.

Input is eight numbers separated by whitespace:
  Rx Ry  Gx Gy  Bx By  Wx Wy

Examples:
  gamut < measurement.txt               # Best match and white point
  gamut --srgb --ntsc measurement.txt   # Also report sRGB and NTSC coverage
  gamut --compare p3 --compare bt2020 - # Any catalog gamut, stdin input
  gamut --all measurement.txt           # Coverage of every catalog gamut
  gamut --list                          # Show the reference catalogs
")]
struct Cli {
    /// Measurement file ('-' or omitted for stdin)
    input: Option<PathBuf>,

    /// Also report coverage of NTSC
    #[arg(long)]
    ntsc: bool,

    /// Also report coverage of sRGB
    #[arg(long)]
    srgb: bool,

    /// Also report coverage of a catalog gamut (repeatable)
    #[arg(short, long, value_name = "NAME")]
    compare: Vec<String>,

    /// Report coverage of every catalog gamut
    #[arg(short, long)]
    all: bool,

    /// List reference gamuts and white points, then exit
    #[arg(short, long)]
    list: bool,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

/// Installs the tracing subscriber.
///
/// `RUST_LOG` overrides the level picked from `verbose`. The returned guard
/// flushes the log file on drop and must outlive all logging.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            (Some(fmt::layer().with_writer(writer).with_ansi(false)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(guard)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    if cli.list {
        return commands::list::run();
    }

    commands::analyze::run(&cli)
}
