//! Simple polygons in chromaticity space.
//!
//! A [`Polygon`] is an ordered list of [`Point`]s. Consecutive points form
//! edges and the last point connects back to the first. Gamuts are triangles,
//! but nothing here assumes three vertices or convexity.
//!
//! # Usage
//!
//! ```rust
//! use gamut_core::{Point, Polygon};
//!
//! let tri = Polygon::from_points([
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(0.0, 1.0),
//! ]);
//!
//! assert_eq!(tri.area(), 0.5);
//! assert!(tri.contains(Point::new(0.2, 0.2)));
//! assert!(!tri.contains(Point::new(0.8, 0.8)));
//! ```
//!
//! # Degenerate Input
//!
//! Polygons with fewer than three vertices have zero area and contain no
//! points. Self-intersecting polygons are not detected; results for them are
//! whatever the formulas produce.

use crate::Point;
use std::ops::{BitAnd, Index};

/// An ordered, implicitly closed sequence of vertices.
///
/// Owns its vertex list. Only appending is exposed as mutation; the vertex
/// order is part of the polygon's identity since it defines the edges.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Creates an empty polygon.
    #[inline]
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Creates an empty polygon with room for `capacity` vertices.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Creates a polygon from vertices in edge order.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// Appends a vertex after the current last one.
    #[inline]
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Returns the vertex at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if there are no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the vertices in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// The vertices as a slice.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterates over edges as `(start, end)` pairs, including the closing
    /// edge from the last vertex back to the first.
    ///
    /// A single vertex yields one zero-length edge; an empty polygon yields
    /// nothing.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Unsigned area by the shoelace formula.
    ///
    /// Returns exactly `0.0` for fewer than three vertices. Winding direction
    /// does not matter.
    ///
    /// ```rust
    /// use gamut_core::{Point, Polygon};
    ///
    /// let square = Polygon::from_points([
    ///     Point::new(0.0, 0.0),
    ///     Point::new(2.0, 0.0),
    ///     Point::new(2.0, 2.0),
    ///     Point::new(0.0, 2.0),
    /// ]);
    /// assert_eq!(square.area(), 4.0);
    /// ```
    pub fn area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }

        let doubled: f64 = self
            .edges()
            .map(|(a, b)| a.x * b.y - a.y * b.x)
            .sum();

        0.5 * doubled.abs()
    }

    /// Point-in-polygon test by ray casting (even-odd rule).
    ///
    /// Points exactly on an edge or vertex may land on either side.
    pub fn contains(&self, p: Point) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let pi = self.points[i];
            let pj = self.points[j];

            if (pi.y >= p.y) != (pj.y >= p.y)
                && p.x <= (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x
            {
                inside = !inside;
            }
            j = i;
        }

        inside
    }

    /// Average of the vertices, or `None` if the polygon is empty.
    ///
    /// This is the vertex centroid, not the area centroid.
    pub fn centroid(&self) -> Option<Point> {
        if self.points.is_empty() {
            return None;
        }

        let sum: Point = self.points.iter().sum();
        let n = self.points.len() as f64;
        Some(Point::new(sum.x / n, sum.y / n))
    }

    /// Intersection of this polygon with `other`.
    ///
    /// See [`crate::intersect_polygons`].
    #[inline]
    pub fn intersect(&self, other: &Polygon) -> Polygon {
        crate::intersect_polygons(self, other)
    }
}

impl Index<usize> for Polygon {
    type Output = Point;

    #[inline]
    fn index(&self, index: usize) -> &Point {
        &self.points[index]
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::from_points(iter)
    }
}

impl From<Vec<Point>> for Polygon {
    #[inline]
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl<const N: usize> From<[Point; N]> for Polygon {
    #[inline]
    fn from(points: [Point; N]) -> Self {
        Self {
            points: points.to_vec(),
        }
    }
}

impl IntoIterator for Polygon {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// `&a & &b` is the intersection of `a` and `b`.
impl BitAnd for &Polygon {
    type Output = Polygon;

    #[inline]
    fn bitand(self, rhs: Self) -> Polygon {
        crate::intersect_polygons(self, rhs)
    }
}

impl BitAnd for Polygon {
    type Output = Polygon;

    #[inline]
    fn bitand(self, rhs: Polygon) -> Polygon {
        crate::intersect_polygons(&self, &rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Polygon {
        Polygon::from_points([
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
    }

    #[test]
    fn test_right_triangle_area() {
        let tri = Polygon::from_points([
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ]);
        assert_eq!(tri.area(), 0.5);
    }

    #[test]
    fn test_area_rotation_invariant() {
        let pts = [
            Point::new(0.64, 0.33),
            Point::new(0.30, 0.60),
            Point::new(0.15, 0.06),
        ];
        let base = Polygon::from_points(pts).area();

        for shift in 1..pts.len() {
            let mut rotated = pts;
            rotated.rotate_left(shift);
            let area = Polygon::from_points(rotated).area();
            assert!((area - base).abs() < 1e-15, "shift {shift}: {area} vs {base}");
        }
    }

    #[test]
    fn test_area_winding_independent() {
        let mut pts = unit_square().points().to_vec();
        pts.reverse();
        assert_eq!(Polygon::from(pts).area(), 1.0);
    }

    #[test]
    fn test_degenerate_area() {
        assert_eq!(Polygon::new().area(), 0.0);
        assert_eq!(Polygon::from_points([Point::new(0.3, 0.3)]).area(), 0.0);
        assert_eq!(
            Polygon::from_points([Point::new(0.0, 0.0), Point::new(1.0, 1.0)]).area(),
            0.0
        );
    }

    #[test]
    fn test_contains_square() {
        let sq = unit_square();
        assert!(sq.contains(Point::new(0.5, 0.5)));
        assert!(!sq.contains(Point::new(2.0, 2.0)));
        assert!(!sq.contains(Point::new(-0.5, 0.5)));
        assert!(!sq.contains(Point::new(0.5, 1.5)));
    }

    #[test]
    fn test_contains_non_convex() {
        // L-shape; the notch at (1.5, 1.5) is outside
        let l = Polygon::from_points([
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 2.0),
            Point::new(0.0, 2.0),
        ]);
        assert!(l.contains(Point::new(0.5, 1.5)));
        assert!(l.contains(Point::new(1.5, 0.5)));
        assert!(!l.contains(Point::new(1.5, 1.5)));
        assert_eq!(l.area(), 3.0);
    }

    #[test]
    fn test_contains_degenerate() {
        let line = Polygon::from_points([Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        assert!(!line.contains(Point::new(0.5, 0.5)));
        assert!(!Polygon::new().contains(Point::ORIGIN));
    }

    #[test]
    fn test_centroid() {
        let c = unit_square().centroid().unwrap();
        assert_eq!(c, Point::new(0.5, 0.5));
        assert!(Polygon::new().centroid().is_none());
    }

    #[test]
    fn test_edges_wrap() {
        let sq = unit_square();
        let edges: Vec<_> = sq.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], (Point::new(0.0, 1.0), Point::new(0.0, 0.0)));
        assert_eq!(Polygon::new().edges().count(), 0);
    }

    #[test]
    fn test_access() {
        let mut poly = Polygon::with_capacity(2);
        assert!(poly.is_empty());
        poly.push(Point::new(0.1, 0.2));
        poly.push(Point::new(0.3, 0.4));
        assert_eq!(poly.len(), 2);
        assert_eq!(poly[1], Point::new(0.3, 0.4));
        assert_eq!(poly.get(0), Some(Point::new(0.1, 0.2)));
        assert_eq!(poly.get(2), None);

        let collected: Polygon = poly.iter().copied().collect();
        assert_eq!(collected, poly);
    }
}
