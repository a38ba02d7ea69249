//! Gamut coverage evaluation.
//!
//! Coverage of a reference gamut is the share of the reference's area that the
//! display's gamut also covers:
//!
//! ```text
//! coverage = 100 * area(display ∩ reference) / area(reference)
//! ```
//!
//! [`best_match`] ranks a catalog of references by coverage and picks the
//! highest. A reference that the display swallows whole is skipped if the
//! display is also strictly larger, so an oversized display reports the
//! reference it fits most tightly instead of the first one it happens to
//! contain.

use gamut_core::{Polygon, fuzzy_eq};
use gamut_primaries::NamedGamut;
use tracing::{debug, trace};

/// Winner of a catalog ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamutMatch {
    /// Coverage of the reference, in percent
    pub percent: f64,
    /// Reference gamut name
    pub name: &'static str,
}

/// Coverage of a single reference gamut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamutCoverage {
    /// Reference gamut name
    pub name: &'static str,
    /// Coverage of the reference, in percent
    pub percent: f64,
    /// Whether the ranking skips this entry
    pub excluded: bool,
}

/// Percent of `reference` covered by `display`.
///
/// Returns `0.0` when the reference has no area.
///
/// ```rust
/// use gamut_coverage::coverage;
/// use gamut_primaries::{SRGB, BT2020};
///
/// let pct = coverage(&BT2020.polygon(), &SRGB.polygon());
/// assert!(pct > 52.0 && pct < 53.0);
/// ```
pub fn coverage(reference: &Polygon, display: &Polygon) -> f64 {
    let reference_area = reference.area();
    if reference_area == 0.0 {
        return 0.0;
    }
    100.0 * (display & reference).area() / reference_area
}

/// The ranking's exclusion rule.
///
/// An entry is skipped when the display covers all of it (intersection area
/// fuzzy-equal to reference area) and the display's own area is strictly
/// larger than the reference's.
#[inline]
fn is_excluded(display_area: f64, reference_area: f64, intersection_area: f64) -> bool {
    fuzzy_eq(intersection_area, reference_area) && display_area > reference_area
}

/// Highest-coverage entry of `catalog` for `display`.
///
/// Entries are visited in order and a later entry only replaces the current
/// best on strictly greater coverage, so ties go to the earlier entry. Returns
/// `None` if no entry scores above zero.
pub fn best_match(display: &Polygon, catalog: &[NamedGamut]) -> Option<GamutMatch> {
    let display_area = display.area();
    let mut best: Option<GamutMatch> = None;

    for entry in catalog {
        let reference = entry.polygon();
        let reference_area = reference.area();
        let intersection_area = (display & &reference).area();

        if is_excluded(display_area, reference_area, intersection_area) {
            debug!(
                gamut = entry.name,
                display_area, reference_area, "display exceeds reference, skipping"
            );
            continue;
        }

        let percent = 100.0 * intersection_area / reference_area;
        trace!(gamut = entry.name, reference_area, intersection_area, percent, "evaluated");

        let threshold = best.map_or(0.0, |b| b.percent);
        if percent > threshold {
            best = Some(GamutMatch {
                percent,
                name: entry.name,
            });
        }
    }

    debug!(?best, "best gamut match");
    best
}

/// Coverage of every entry in `catalog`, in catalog order.
///
/// Unlike [`best_match`] nothing is dropped; entries the ranking would skip
/// are flagged with [`GamutCoverage::excluded`].
pub fn coverage_report(display: &Polygon, catalog: &[NamedGamut]) -> Vec<GamutCoverage> {
    let display_area = display.area();

    catalog
        .iter()
        .map(|entry| {
            let reference = entry.polygon();
            let reference_area = reference.area();
            let intersection_area = (display & &reference).area();
            let percent = if reference_area == 0.0 {
                0.0
            } else {
                100.0 * intersection_area / reference_area
            };

            GamutCoverage {
                name: entry.name,
                percent,
                excluded: is_excluded(display_area, reference_area, intersection_area),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use gamut_core::Point;
    use gamut_primaries::{ADOBE_RGB, BT709, BT2020, DCI_P3, GAMUTS, NTSC_FCC, SRGB};

    /// Scales a gamut about its vertex centroid.
    fn scaled(gamut: &NamedGamut, factor: f64) -> Polygon {
        let poly = gamut.polygon();
        let c = poly.centroid().unwrap();
        poly.iter()
            .map(|p| Point::new(c.x + (p.x - c.x) * factor, c.y + (p.y - c.y) * factor))
            .collect()
    }

    #[test]
    fn test_srgb_display_matches_srgb() {
        let best = best_match(&SRGB.polygon(), &GAMUTS).unwrap();
        assert_eq!(best.name, "sRGB");
        assert_relative_eq!(best.percent, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_srgb_display_covers_bt709() {
        let pct = coverage(&BT709.polygon(), &SRGB.polygon());
        assert_relative_eq!(pct, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_first_entry_wins_ties() {
        // BT.709 equals sRGB; listing it first makes it the winner
        let best = best_match(&SRGB.polygon(), &[BT709, SRGB]).unwrap();
        assert_eq!(best.name, "BT.709");
    }

    #[test]
    fn test_exclusion_skips_swallowed_reference() {
        let display = scaled(&SRGB, 1.1);
        assert!(display.area() > SRGB.polygon().area());

        let best = best_match(&display, &GAMUTS).unwrap();
        assert_ne!(best.name, "sRGB");
        assert_ne!(best.name, "BT.709");
        assert!(best.percent < 100.0);

        // Still reported as fully covered outside the ranking
        assert_relative_eq!(coverage(&SRGB.polygon(), &display), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_exclusion_needs_strictly_larger_display() {
        // Equal areas: not skipped
        let best = best_match(&DCI_P3.polygon(), &[DCI_P3]).unwrap();
        assert_relative_eq!(best.percent, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_only_swallowed_references() {
        let display = scaled(&BT2020, 1.5);
        assert_eq!(best_match(&display, &[SRGB, ADOBE_RGB]), None);
    }

    #[test]
    fn test_disjoint_display() {
        let display = Polygon::from_points([
            Point::new(5.0, 5.0),
            Point::new(6.0, 5.0),
            Point::new(5.0, 6.0),
        ]);
        assert_eq!(best_match(&display, &GAMUTS), None);
        assert_eq!(coverage(&SRGB.polygon(), &display), 0.0);
    }

    #[test]
    fn test_degenerate_display() {
        let display = Polygon::from_points([Point::new(0.3, 0.3), Point::new(0.4, 0.4)]);
        assert_eq!(best_match(&display, &GAMUTS), None);
        assert_eq!(best_match(&SRGB.polygon(), &[]), None);
    }

    #[test]
    fn test_degenerate_reference() {
        assert_eq!(coverage(&Polygon::new(), &SRGB.polygon()), 0.0);
    }

    #[test]
    fn test_srgb_vs_ntsc() {
        let pct = coverage(&NTSC_FCC.polygon(), &SRGB.polygon());
        assert_relative_eq!(pct, 68.4555725884723, epsilon = 1e-6);
    }

    #[test]
    fn test_report_flags_exclusions() {
        let display = scaled(&SRGB, 1.1);
        let report = coverage_report(&display, &GAMUTS);
        assert_eq!(report.len(), GAMUTS.len());

        let srgb = report.iter().find(|c| c.name == "sRGB").unwrap();
        assert!(srgb.excluded);
        assert_relative_eq!(srgb.percent, 100.0, epsilon = 1e-9);

        let wide = report.iter().find(|c| c.name == "Wide Gamut").unwrap();
        assert!(!wide.excluded);
    }
}
