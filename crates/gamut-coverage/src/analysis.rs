//! One-call analysis of a measurement against the reference catalogs.

use crate::{GamutCoverage, GamutMatch, Measurement, best_match, coverage, nearest_white_point};
use gamut_core::{Error, Result};
use gamut_primaries::{GAMUTS, NamedGamut, WHITE_POINTS, WhitePoint};
use tracing::{debug, trace};

/// What to report besides the best match.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    /// References to always report coverage against, in output order
    pub compare: Vec<NamedGamut>,
    /// Report coverage for every catalog entry
    pub report_all: bool,
}

impl AnalyzeOptions {
    /// Adds a fixed comparison.
    pub fn compare(mut self, gamut: NamedGamut) -> Self {
        self.compare.push(gamut);
        self
    }

    /// Enables the full per-gamut report.
    pub fn report_all(mut self, yes: bool) -> Self {
        self.report_all = yes;
        self
    }
}

/// Result of [`analyze`].
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis<'a> {
    /// Highest-ranked reference, or `None` if nothing overlaps
    pub best: Option<GamutMatch>,
    /// Fixed comparisons, in the order requested
    pub comparisons: Vec<GamutCoverage>,
    /// Every catalog entry, when requested
    pub report: Vec<GamutCoverage>,
    /// Nearest standard illuminant
    pub white_point: &'a WhitePoint,
}

/// Analyzes `measurement` against the built-in catalogs.
///
/// ```rust
/// use gamut_coverage::{AnalyzeOptions, Measurement, analyze};
/// use gamut_primaries::NTSC_FCC;
///
/// let m = Measurement::parse("0.64 0.33 0.30 0.60 0.15 0.06 0.31271 0.32902").unwrap();
/// let a = analyze(&m, &AnalyzeOptions::default().compare(NTSC_FCC)).unwrap();
///
/// assert_eq!(a.best.unwrap().name, "sRGB");
/// assert_eq!(a.white_point.name, "D65");
/// assert_eq!(a.comparisons.len(), 1);
/// ```
pub fn analyze(measurement: &Measurement, options: &AnalyzeOptions) -> Result<Analysis<'static>> {
    analyze_with(measurement, options, &GAMUTS, &WHITE_POINTS)
}

/// Analyzes `measurement` against caller-supplied catalogs.
///
/// # Errors
///
/// [`Error::EmptyCatalog`] if `white_points` is empty.
pub fn analyze_with<'a>(
    measurement: &Measurement,
    options: &AnalyzeOptions,
    gamuts: &[NamedGamut],
    white_points: &'a [WhitePoint],
) -> Result<Analysis<'a>> {
    trace!(white = ?measurement.white(), gamuts = gamuts.len(), "analyze");

    let white_point = nearest_white_point(measurement.white(), white_points).ok_or(Error::EmptyCatalog)?;

    let display = measurement.display();
    let best = best_match(display, gamuts);

    let comparisons = options
        .compare
        .iter()
        .map(|gamut| GamutCoverage {
            name: gamut.name,
            percent: coverage(&gamut.polygon(), display),
            excluded: false,
        })
        .collect();

    let report = if options.report_all {
        crate::coverage_report(display, gamuts)
    } else {
        Vec::new()
    };

    debug!(?best, white_point = white_point.name, "analysis complete");

    Ok(Analysis {
        best,
        comparisons,
        report,
        white_point,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use gamut_core::Point;
    use gamut_primaries::{NTSC_FCC, SRGB};

    fn srgb_d65() -> Measurement {
        Measurement::new(SRGB.primaries, Point::new(0.31271, 0.32902)).unwrap()
    }

    #[test]
    fn test_analyze_defaults() {
        let a = analyze(&srgb_d65(), &AnalyzeOptions::default()).unwrap();
        let best = a.best.unwrap();
        assert_eq!(best.name, "sRGB");
        assert_relative_eq!(best.percent, 100.0, epsilon = 1e-9);
        assert!(a.comparisons.is_empty());
        assert!(a.report.is_empty());
        assert_eq!(a.white_point.cct, 6504);
    }

    #[test]
    fn test_comparisons_keep_order() {
        let opts = AnalyzeOptions::default().compare(SRGB).compare(NTSC_FCC);
        let a = analyze(&srgb_d65(), &opts).unwrap();
        let names: Vec<_> = a.comparisons.iter().map(|c| c.name).collect();
        assert_eq!(names, ["sRGB", "NTSC-FCC"]);
        assert_relative_eq!(a.comparisons[0].percent, 100.0, epsilon = 1e-9);
        assert!(a.comparisons[1].percent < 70.0);
    }

    #[test]
    fn test_report_all() {
        let a = analyze(&srgb_d65(), &AnalyzeOptions::default().report_all(true)).unwrap();
        assert_eq!(a.report.len(), GAMUTS.len());
    }

    #[test]
    fn test_empty_white_catalog() {
        let err = analyze_with(&srgb_d65(), &AnalyzeOptions::default(), &GAMUTS, &[]).unwrap_err();
        assert!(matches!(err, Error::EmptyCatalog));
    }
}
