//! Chromaticity point type.
//!
//! [`Point`] is a CIE 1931 xy coordinate pair. It is the value type every
//! other part of the workspace is built from: polygon vertices, white points,
//! and intersection results are all points.
//!
//! # Usage
//!
//! ```rust
//! use gamut_core::Point;
//!
//! let red = Point::new(0.64, 0.33);
//! let green = Point::new(0.30, 0.60);
//!
//! // Componentwise addition, used for centroid sums
//! let sum = red + green;
//! assert!((sum.x - 0.94).abs() < 1e-12);
//! ```

use glam::DVec2;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A 2D chromaticity coordinate (CIE 1931 xy).
///
/// Plain value type: `Copy`, no invariants. Coordinates are expected to be
/// finite, but nothing here enforces it; validation happens where input enters
/// the system (see `gamut-coverage`).
///
/// # Example
///
/// ```rust
/// use gamut_core::Point;
///
/// let d65 = Point::new(0.31271, 0.32902);
/// assert_eq!(d65.x, 0.31271);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Point {
    /// x chromaticity
    pub x: f64,
    /// y chromaticity
    pub y: f64,
}

impl Point {
    /// The origin (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Creates a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    ///
    /// Uses `hypot` so tiny differences do not underflow.
    ///
    /// ```rust
    /// use gamut_core::Point;
    ///
    /// let d = Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0));
    /// assert_eq!(d, 5.0);
    /// ```
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Returns `true` if both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Converts to a [`glam::DVec2`].
    #[inline]
    pub const fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Converts to an `(x, y)` tuple.
    #[inline]
    pub const fn to_tuple(self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sum for Point {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ORIGIN, Add::add)
    }
}

impl<'a> Sum<&'a Point> for Point {
    fn sum<I: Iterator<Item = &'a Point>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_tuple()
    }
}

impl From<DVec2> for Point {
    #[inline]
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_dvec2()
    }
}
