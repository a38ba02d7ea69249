//! Error types for gamut-rs operations.
//!
//! Geometry itself never fails: degenerate polygons have zero area and empty
//! intersections are empty polygons. Errors come from the boundary, where
//! measured coordinates are parsed and validated, and from catalog lookups.
//!
//! # Usage
//!
//! ```rust
//! use gamut_core::{Error, Point, Result};
//!
//! fn check(points: &[Point]) -> Result<()> {
//!     if points.len() < 3 {
//!         return Err(Error::too_few_vertices(points.len(), 3));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(&[Point::ORIGIN]).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or evaluating gamut measurements.
///
/// # Categories
///
/// - **Geometry**: [`TooFewVertices`](Error::TooFewVertices), [`NonFinite`](Error::NonFinite)
/// - **Parsing**: [`InvalidNumber`](Error::InvalidNumber), [`MissingValue`](Error::MissingValue),
///   [`TrailingInput`](Error::TrailingInput)
/// - **Catalog**: [`EmptyCatalog`](Error::EmptyCatalog), [`UnknownGamut`](Error::UnknownGamut)
/// - **I/O**: [`Io`](Error::Io)
#[derive(Debug, Error)]
pub enum Error {
    /// A polygon needs more vertices than it was given.
    #[error("polygon has {got} vertices, at least {min} required")]
    TooFewVertices {
        /// Number of vertices supplied
        got: usize,
        /// Minimum required
        min: usize,
    },

    /// A coordinate is NaN or infinite.
    ///
    /// `index` counts coordinates, not points: the x of the second point is 2.
    #[error("coordinate {index} is not finite: {value}")]
    NonFinite {
        /// Position of the coordinate in input order
        index: usize,
        /// Offending value
        value: f64,
    },

    /// An input token is not a number.
    #[error("invalid number {token:?} at position {position}")]
    InvalidNumber {
        /// Zero-based token position
        position: usize,
        /// The token as read
        token: String,
    },

    /// Input ended before all values were read.
    #[error("expected {expected} values, got {got}")]
    MissingValue {
        /// Values required
        expected: usize,
        /// Values actually present
        got: usize,
    },

    /// Input has tokens after the last expected value.
    #[error("unexpected trailing input: {extra:?}")]
    TrailingInput {
        /// First unexpected token
        extra: String,
    },

    /// A catalog lookup was attempted on an empty catalog.
    #[error("catalog is empty")]
    EmptyCatalog,

    /// No catalog gamut with this name.
    #[error("unknown gamut: {0}")]
    UnknownGamut(String),

    /// I/O error while reading input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates an [`Error::TooFewVertices`] error.
    #[inline]
    pub fn too_few_vertices(got: usize, min: usize) -> Self {
        Self::TooFewVertices { got, min }
    }

    /// Creates an [`Error::NonFinite`] error.
    #[inline]
    pub fn non_finite(index: usize, value: f64) -> Self {
        Self::NonFinite { index, value }
    }

    /// Creates an [`Error::InvalidNumber`] error.
    #[inline]
    pub fn invalid_number(position: usize, token: impl Into<String>) -> Self {
        Self::InvalidNumber {
            position,
            token: token.into(),
        }
    }

    /// Creates an [`Error::MissingValue`] error.
    #[inline]
    pub fn missing_value(expected: usize, got: usize) -> Self {
        Self::MissingValue { expected, got }
    }

    /// Creates an [`Error::TrailingInput`] error.
    #[inline]
    pub fn trailing_input(extra: impl Into<String>) -> Self {
        Self::TrailingInput {
            extra: extra.into(),
        }
    }

    /// Creates an [`Error::UnknownGamut`] error.
    #[inline]
    pub fn unknown_gamut(name: impl Into<String>) -> Self {
        Self::UnknownGamut(name.into())
    }

    /// Returns `true` if the input text could not be parsed.
    #[inline]
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidNumber { .. } | Self::MissingValue { .. } | Self::TrailingInput { .. }
        )
    }

    /// Returns `true` if parsed values failed geometric validation.
    #[inline]
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Self::TooFewVertices { .. } | Self::NonFinite { .. })
    }

    /// Returns `true` if this is an I/O error.
    #[inline]
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
