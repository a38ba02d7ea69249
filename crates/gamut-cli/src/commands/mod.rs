//! CLI command implementations

pub mod analyze;
pub mod list;

use anyhow::{Context, Result};
use gamut_coverage::Measurement;
use std::io;
use std::path::Path;

/// Load a measurement from a file, or stdin for `None` / `-`
pub fn load_measurement(path: Option<&Path>) -> Result<Measurement> {
    match path {
        Some(p) if p != Path::new("-") => {
            let file = std::fs::File::open(p)
                .with_context(|| format!("Failed to open: {}", p.display()))?;
            Measurement::read_from(file)
                .with_context(|| format!("Failed to read measurement: {}", p.display()))
        }
        _ => Measurement::read_from(io::stdin().lock())
            .context("Failed to read measurement from stdin"),
    }
}

/// Format a percentage with six significant digits, trailing zeros trimmed
pub fn format_percent(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{}", value);
    }

    let int_digits = value.abs().log10().floor() as i32 + 1;
    let decimals = (6 - int_digits).clamp(0, 15) as usize;
    let text = format!("{:.*}", decimals, value);

    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}
