//! Integration tests for gamut-rs crates.
//!
//! End-to-end scenarios: text measurement in, ranked coverage and white point
//! out, across `gamut-core`, `gamut-primaries` and `gamut-coverage`.
