//! # gamut-coverage
//!
//! Ranks reference gamuts by how much of each a measured display covers, and
//! finds the standard illuminant nearest to the display's white point.
//!
//! - [`best_match`] - highest-coverage catalog entry, with the superset exclusion rule
//! - [`coverage`] - coverage of a single reference, no exclusion
//! - [`coverage_report`] - coverage of every catalog entry
//! - [`nearest_white_point`] - nearest illuminant by xy distance
//! - [`Measurement`] - validated display triangle and white point
//! - [`analyze`] - all of the above in one call
//!
//! # Usage
//!
//! ```rust
//! use gamut_core::Point;
//! use gamut_coverage::{Measurement, best_match, nearest_white_point};
//! use gamut_primaries::{GAMUTS, WHITE_POINTS};
//!
//! let m = Measurement::new(
//!     [Point::new(0.68, 0.32), Point::new(0.265, 0.69), Point::new(0.15, 0.06)],
//!     Point::new(0.3127, 0.329),
//! ).unwrap();
//!
//! let best = best_match(m.display(), &GAMUTS).unwrap();
//! assert_eq!(best.name, "DCI-P3 (Display P3)");
//!
//! let wp = nearest_white_point(m.white(), &WHITE_POINTS).unwrap();
//! assert_eq!(wp.name, "D65");
//! ```
//!
//! # Dependencies
//!
//! - [`gamut-core`] - Geometry
//! - [`gamut-primaries`] - Reference catalogs
//! - [`tracing`] - Diagnostics for each evaluated catalog entry
//!
//! # Used By
//!
//! - `gamut-cli` - The `gamut` command

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod analysis;
mod coverage;
mod measurement;
mod whitepoint;

pub use analysis::*;
pub use coverage::*;
pub use measurement::*;
pub use whitepoint::*;
