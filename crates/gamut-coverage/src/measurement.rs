//! Measured display chromaticities.
//!
//! A [`Measurement`] is what a colorimeter run produces: the xy coordinates of
//! the display's red, green and blue primaries plus its white point. This is
//! the one place input is validated; everything downstream trusts it.
//!
//! # Text Format
//!
//! Eight whitespace-separated numbers, any mix of spaces and newlines:
//!
//! ```text
//! Rx Ry
//! Gx Gy
//! Bx By
//! Wx Wy
//! ```

use gamut_core::{Error, Point, Polygon, Result};
use std::io::Read;
use std::str::FromStr;

/// Number of values in the text format.
pub const MEASUREMENT_VALUES: usize = 8;

/// Display gamut and white point, validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    display: Polygon,
    white: Point,
}

impl Measurement {
    /// Builds a measurement from a display triangle and white point.
    ///
    /// # Errors
    ///
    /// [`Error::NonFinite`] if any coordinate is NaN or infinite.
    pub fn new(primaries: [Point; 3], white: Point) -> Result<Self> {
        Self::from_polygon(Polygon::from(primaries), white)
    }

    /// Builds a measurement from an arbitrary display polygon.
    ///
    /// # Errors
    ///
    /// - [`Error::TooFewVertices`] for fewer than three vertices
    /// - [`Error::NonFinite`] if any coordinate is NaN or infinite
    pub fn from_polygon(display: Polygon, white: Point) -> Result<Self> {
        if display.len() < 3 {
            return Err(Error::too_few_vertices(display.len(), 3));
        }

        let coords = display
            .iter()
            .chain(std::iter::once(&white))
            .flat_map(|p| [p.x, p.y]);
        for (index, value) in coords.enumerate() {
            if !value.is_finite() {
                return Err(Error::non_finite(index, value));
            }
        }

        Ok(Self { display, white })
    }

    /// Parses the eight-value text format.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gamut_coverage::Measurement;
    ///
    /// let m = Measurement::parse("0.64 0.33\n0.30 0.60\n0.15 0.06\n0.3127 0.3290").unwrap();
    /// assert_eq!(m.display().len(), 3);
    /// assert_eq!(m.white().x, 0.3127);
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let mut values = [0.0f64; MEASUREMENT_VALUES];
        let mut tokens = text.split_whitespace();

        for (position, slot) in values.iter_mut().enumerate() {
            let token = tokens
                .next()
                .ok_or_else(|| Error::missing_value(MEASUREMENT_VALUES, position))?;
            *slot = token
                .parse()
                .map_err(|_| Error::invalid_number(position, token))?;
        }

        if let Some(extra) = tokens.next() {
            return Err(Error::trailing_input(extra));
        }

        let [rx, ry, gx, gy, bx, by, wx, wy] = values;
        Self::new(
            [Point::new(rx, ry), Point::new(gx, gy), Point::new(bx, by)],
            Point::new(wx, wy),
        )
    }

    /// Reads and parses the text format from a reader.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] on read failure, otherwise as [`Measurement::parse`].
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// The display gamut polygon.
    #[inline]
    pub fn display(&self) -> &Polygon {
        &self.display
    }

    /// The measured white point.
    #[inline]
    pub fn white(&self) -> Point {
        self.white
    }
}

impl FromStr for Measurement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SRGB_D65: &str = "0.64 0.33\n0.30 0.60\n0.15 0.06\n0.31271 0.32902\n";

    #[test]
    fn test_parse() {
        let m: Measurement = SRGB_D65.parse().unwrap();
        assert_eq!(m.display()[0], Point::new(0.64, 0.33));
        assert_eq!(m.display()[2], Point::new(0.15, 0.06));
        assert_eq!(m.white(), Point::new(0.31271, 0.32902));
    }

    #[test]
    fn test_parse_single_line() {
        let m = Measurement::parse("  0.64 0.33 0.30 0.60\t0.15 0.06 0.31 0.33 ").unwrap();
        assert_eq!(m.display().len(), 3);
    }

    #[test]
    fn test_missing_values() {
        let err = Measurement::parse("0.64 0.33 0.30").unwrap_err();
        assert!(matches!(err, Error::MissingValue { expected: 8, got: 3 }));

        let err = Measurement::parse("").unwrap_err();
        assert!(matches!(err, Error::MissingValue { got: 0, .. }));
    }

    #[test]
    fn test_invalid_number() {
        let err = Measurement::parse("0.64 0.33 green 0.60 0.15 0.06 0.31 0.33").unwrap_err();
        match err {
            Error::InvalidNumber { position, token } => {
                assert_eq!(position, 2);
                assert_eq!(token, "green");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_trailing_input() {
        let err = Measurement::parse("0.64 0.33 0.30 0.60 0.15 0.06 0.31 0.33 0.5").unwrap_err();
        assert!(matches!(err, Error::TrailingInput { ref extra } if extra == "0.5"));
    }

    #[test]
    fn test_non_finite() {
        let err = Measurement::parse("0.64 0.33 0.30 NaN 0.15 0.06 0.31 0.33").unwrap_err();
        assert!(matches!(err, Error::NonFinite { index: 3, .. }));

        let err = Measurement::parse("0.64 0.33 0.30 0.60 0.15 0.06 0.31 inf").unwrap_err();
        assert!(matches!(err, Error::NonFinite { index: 7, .. }));
    }

    #[test]
    fn test_too_few_vertices() {
        let line = Polygon::from_points([Point::new(0.1, 0.1), Point::new(0.2, 0.2)]);
        let err = Measurement::from_polygon(line, Point::new(0.3, 0.3)).unwrap_err();
        assert!(matches!(err, Error::TooFewVertices { got: 2, min: 3 }));
    }

    #[test]
    fn test_read_from() {
        let m = Measurement::read_from(SRGB_D65.as_bytes()).unwrap();
        assert_eq!(m.white().y, 0.32902);
    }
}
