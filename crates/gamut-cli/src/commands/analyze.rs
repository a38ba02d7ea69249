//! Coverage analysis command.
//!
//! Prints the best-matching reference gamut, any requested fixed comparisons,
//! and the nearest standard illuminant.

use super::{format_percent, load_measurement};
use crate::Cli;
use anyhow::Result;
use gamut_core::Error;
use gamut_coverage::{Analysis, AnalyzeOptions, analyze};
use gamut_primaries::{NTSC_FCC, SRGB, find_gamut};
use std::fmt::Write;
use tracing::{debug, info, trace};

/// Indent that lines comparison rows up under the coverage figure
const INDENT: &str = "                     ";

pub fn run(cli: &Cli) -> Result<()> {
    trace!(input = ?cli.input, "analyze::run");

    let (options, labels) = build_options(cli)?;
    let measurement = load_measurement(cli.input.as_deref())?;
    info!(white = ?measurement.white(), "Measurement loaded");

    let analysis = analyze(&measurement, &options)?;
    print!("{}", render(&analysis, &labels));

    Ok(())
}

/// Resolve comparison flags into options plus the label printed for each.
///
/// `--ntsc` and `--srgb` come first under their short labels, then each
/// `--compare` under its catalog name.
fn build_options(cli: &Cli) -> Result<(AnalyzeOptions, Vec<&'static str>)> {
    let mut options = AnalyzeOptions::default().report_all(cli.all);
    let mut labels = Vec::new();

    if cli.ntsc {
        options = options.compare(NTSC_FCC);
        labels.push("NTSC");
    }
    if cli.srgb {
        options = options.compare(SRGB);
        labels.push("sRGB");
    }
    for name in &cli.compare {
        let gamut = find_gamut(name).ok_or_else(|| Error::unknown_gamut(name))?;
        debug!(requested = %name, gamut = gamut.name, "comparison");
        options = options.compare(*gamut);
        labels.push(gamut.name);
    }

    Ok((options, labels))
}

/// Render an analysis as the report text.
fn render(analysis: &Analysis<'_>, labels: &[&str]) -> String {
    let mut out = String::new();
    let sep = if analysis.comparisons.is_empty() { ' ' } else { '\t' };

    match &analysis.best {
        Some(best) => {
            let _ = writeln!(
                out,
                "colorspace coverage: {}%{}{}",
                format_percent(best.percent),
                sep,
                best.name
            );
        }
        None => {
            let _ = writeln!(out, "colorspace coverage: 0%{}(none)", sep);
        }
    }

    for (cmp, label) in analysis.comparisons.iter().zip(labels) {
        let _ = writeln!(out, "{}{}%\t{}", INDENT, format_percent(cmp.percent), label);
    }

    let wp = analysis.white_point;
    let _ = writeln!(out, "nearest white point: {} {}K", wp.name, wp.cct);

    if !analysis.report.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "all colorspaces:");
        for row in &analysis.report {
            let note = if row.excluded { "  (contained, not ranked)" } else { "" };
            let _ = writeln!(out, "  {:>9}%  {}{}", format_percent(row.percent), row.name, note);
        }
    }

    out
}
