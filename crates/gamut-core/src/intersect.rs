//! Polygon intersection.
//!
//! Builds the intersection of two simple polygons from three vertex sources:
//!
//! 1. vertices of each polygon that lie inside the other,
//! 2. crossing points of every edge pair,
//! 3. all of the above sorted by angle around their own average.
//!
//! ```text
//!        B
//!       /\
//!   A  /  \          o  = vertex of one polygon inside the other
//!  ___x____x___      x  = edge crossing
//!  |  / o   \  |
//!  | /       \ |     result: x, o, x, ... ordered around the centroid
//!  |/_________\|
//! ```
//!
//! The angular sort closes the vertex set into a loop. For convex inputs (all
//! gamut triangles) the loop is the exact intersection. For non-convex inputs
//! the ordering can be wrong and the area is an approximation.
//!
//! Parallel and collinear edges never produce a crossing point, so overlapping
//! edges contribute only through vertex containment. Duplicate and coincident
//! vertices are kept; they add zero-length edges and do not change the area.

use crate::{Point, Polygon};
use glam::DVec2;

/// Crossing point of segments `p0-p1` and `p2-p3`.
///
/// Parametric test on both segments with endpoints included. Returns `None`
/// for parallel or collinear segments (zero cross product) and for segments
/// whose supporting lines cross outside either segment.
///
/// ```rust
/// use gamut_core::{Point, segment_intersection};
///
/// let hit = segment_intersection(
///     Point::new(0.0, 0.0),
///     Point::new(2.0, 2.0),
///     Point::new(0.0, 2.0),
///     Point::new(2.0, 0.0),
/// );
/// assert_eq!(hit, Some(Point::new(1.0, 1.0)));
/// ```
pub fn segment_intersection(p0: Point, p1: Point, p2: Point, p3: Point) -> Option<Point> {
    let s10 = DVec2::from(p1) - DVec2::from(p0);
    let s32 = DVec2::from(p3) - DVec2::from(p2);

    let denom = s10.perp_dot(s32);
    if denom == 0.0 {
        return None;
    }
    let denom_positive = denom > 0.0;

    let s02 = DVec2::from(p0) - DVec2::from(p2);

    // Parameter along p2-p3, scaled by denom
    let s_numer = s10.perp_dot(s02);
    if (s_numer < 0.0) == denom_positive {
        return None;
    }

    // Parameter along p0-p1, scaled by denom
    let t_numer = s32.perp_dot(s02);
    if (t_numer < 0.0) == denom_positive {
        return None;
    }

    if (s_numer > denom) == denom_positive || (t_numer > denom) == denom_positive {
        return None;
    }

    let t = t_numer / denom;
    Some(Point::from(DVec2::from(p0) + s10 * t))
}

/// Intersection of two simple polygons.
///
/// Deterministic for identical inputs. Disjoint polygons give an empty
/// polygon; touching polygons may give one or two vertices. Either way the
/// result's [`Polygon::area`] is zero.
///
/// # Example
///
/// ```rust
/// use gamut_core::{Point, Polygon, intersect_polygons};
///
/// let a = Polygon::from_points([
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ]);
/// let b = Polygon::from_points([
///     Point::new(0.5, 0.5),
///     Point::new(1.5, 0.5),
///     Point::new(1.5, 1.5),
///     Point::new(0.5, 1.5),
/// ]);
///
/// let overlap = intersect_polygons(&a, &b);
/// assert_eq!(overlap.area(), 0.25);
/// ```
pub fn intersect_polygons(a: &Polygon, b: &Polygon) -> Polygon {
    let mut vertices: Vec<Point> = Vec::new();

    vertices.extend(a.iter().copied().filter(|&p| b.contains(p)));
    vertices.extend(b.iter().copied().filter(|&p| a.contains(p)));

    for (p0, p1) in a.edges() {
        for (p2, p3) in b.edges() {
            if let Some(hit) = segment_intersection(p0, p1, p2, p3) {
                vertices.push(hit);
            }
        }
    }

    sort_around_centroid(&mut vertices);
    Polygon::from(vertices)
}

/// Orders points by ascending angle around their average.
fn sort_around_centroid(points: &mut Vec<Point>) {
    if points.is_empty() {
        return;
    }

    let n = points.len() as f64;
    let sum: Point = points.iter().sum();
    let center = Point::new(sum.x / n, sum.y / n);

    let mut keyed: Vec<(f64, Point)> = points
        .iter()
        .map(|&p| ((p.y - center.y).atan2(p.x - center.x), p))
        .collect();
    keyed.sort_by(|l, r| l.0.total_cmp(&r.0));

    points.clear();
    points.extend(keyed.into_iter().map(|(_, p)| p));
}
