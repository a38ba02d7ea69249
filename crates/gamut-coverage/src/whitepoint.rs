//! Nearest standard illuminant for a measured white point.

use gamut_core::Point;
use gamut_primaries::WhitePoint;
use tracing::debug;

/// Catalog entry closest to `white` by Euclidean distance in xy.
///
/// The first of several equidistant entries wins. Returns `None` only for an
/// empty catalog.
///
/// ```rust
/// use gamut_core::Point;
/// use gamut_coverage::nearest_white_point;
/// use gamut_primaries::WHITE_POINTS;
///
/// let wp = nearest_white_point(Point::new(0.3127, 0.3290), &WHITE_POINTS).unwrap();
/// assert_eq!(wp.name, "D65");
/// ```
pub fn nearest_white_point(white: Point, catalog: &[WhitePoint]) -> Option<&WhitePoint> {
    let nearest = catalog
        .iter()
        .map(|wp| (wp.xy.distance(white), wp))
        .min_by(|(l, _), (r, _)| l.total_cmp(r));

    if let Some((distance, wp)) = nearest {
        debug!(name = wp.name, cct = wp.cct, distance, "nearest white point");
    }

    nearest.map(|(_, wp)| wp)
}
