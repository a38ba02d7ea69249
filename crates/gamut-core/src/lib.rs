//! # gamut-core
//!
//! Geometry for measuring how much of a reference color gamut a display covers.
//!
//! Gamuts are polygons (in practice triangles) in CIE 1931 xy chromaticity
//! space. Coverage is the area of the intersection of two such polygons
//! divided by the area of the reference.
//!
//! - [`Point`] - xy chromaticity coordinate
//! - [`Polygon`] - implicitly closed vertex loop with area and containment
//! - [`intersect_polygons`] - intersection of two simple polygons
//! - [`fuzzy_eq`] - relative float comparison
//! - [`Error`] - boundary validation errors
//!
//! # Usage
//!
//! ```rust
//! use gamut_core::{Point, Polygon};
//!
//! let srgb = Polygon::from_points([
//!     Point::new(0.64, 0.33),
//!     Point::new(0.30, 0.60),
//!     Point::new(0.15, 0.06),
//! ]);
//! let display = Polygon::from_points([
//!     Point::new(0.66, 0.32),
//!     Point::new(0.28, 0.63),
//!     Point::new(0.15, 0.05),
//! ]);
//!
//! let coverage = 100.0 * (&display & &srgb).area() / srgb.area();
//! assert!(coverage > 90.0 && coverage <= 100.0);
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! gamut-core (this crate)
//!    ^
//!    |
//!    +-- gamut-primaries (gamut and white point catalogs)
//!    +-- gamut-coverage (coverage evaluation, white point matching)
//!    +-- gamut-cli (command-line tool)
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - 2D vector math for segment intersection
//! - [`thiserror`] - Error derive

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
mod fuzzy;
mod intersect;
mod point;
mod polygon;

pub use error::*;
pub use fuzzy::*;
pub use intersect::*;
pub use point::*;
pub use polygon::*;

/// Prelude module for convenient imports.
///
/// ```
/// use gamut_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::fuzzy::fuzzy_eq;
    pub use crate::intersect::intersect_polygons;
    pub use crate::point::Point;
    pub use crate::polygon::Polygon;
}
