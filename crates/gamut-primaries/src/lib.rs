//! # gamut-primaries
//!
//! Reference catalogs for gamut coverage: RGB primaries of common color spaces
//! and the white points of the CIE standard illuminants.
//!
//! Both catalogs are statics built at compile time. They are read-only for the life of
//! the process and can be shared freely between threads.
//!
//! # Usage
//!
//! ```rust
//! use gamut_primaries::{GAMUTS, SRGB, find_white_point};
//!
//! assert_eq!(GAMUTS[0], SRGB);
//! assert!((SRGB.polygon().area() - 0.11205).abs() < 1e-12);
//!
//! let d65 = find_white_point("d65").unwrap();
//! assert_eq!(d65.cct, 6504);
//! ```
//!
//! # Included Gamuts
//!
//! | Gamut | Primary Use |
//! |-------|-------------|
//! | sRGB / BT.709 | Web, HDTV |
//! | Adobe RGB | Print, photography |
//! | Apple RGB | Legacy Mac displays |
//! | DCI-P3 | Cinema, Apple displays |
//! | NTSC-FCC | 1953 broadcast reference |
//! | CIE RGB | CIE 1931 matching primaries |
//! | Wide Gamut | Adobe Wide Gamut RGB |
//! | BT.601 | SDTV (PAL/SECAM, NTSC) |
//! | BT.2020 | UHDTV, HDR |
//!
//! Coordinates follow
//! <https://en.wikipedia.org/wiki/RGB_color_spaces#RGB_color_space_specifications>
//! and
//! <https://en.wikipedia.org/wiki/Standard_illuminant#White_points_of_standard_illuminants>.
//!
//! # Dependencies
//!
//! - [`gamut-core`] - Point and Polygon types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use gamut_core::{Point, Polygon};

/// A named reference gamut triangle.
///
/// # Example
///
/// ```rust
/// use gamut_core::Point;
/// use gamut_primaries::NamedGamut;
///
/// let custom = NamedGamut::new(
///     "Custom",
///     [(0.64, 0.33), (0.30, 0.60), (0.15, 0.06)],
/// );
/// assert_eq!(custom.red(), Point::new(0.64, 0.33));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedGamut {
    /// Display name
    pub name: &'static str,
    /// Red, green, blue primaries in that order
    pub primaries: [Point; 3],
}

impl NamedGamut {
    /// Creates a gamut from `(x, y)` pairs for red, green and blue.
    pub const fn new(name: &'static str, rgb: [(f64, f64); 3]) -> Self {
        Self {
            name,
            primaries: [
                Point::new(rgb[0].0, rgb[0].1),
                Point::new(rgb[1].0, rgb[1].1),
                Point::new(rgb[2].0, rgb[2].1),
            ],
        }
    }

    /// Red primary.
    #[inline]
    pub const fn red(&self) -> Point {
        self.primaries[0]
    }

    /// Green primary.
    #[inline]
    pub const fn green(&self) -> Point {
        self.primaries[1]
    }

    /// Blue primary.
    #[inline]
    pub const fn blue(&self) -> Point {
        self.primaries[2]
    }

    /// The gamut triangle as a polygon (R, G, B order).
    pub fn polygon(&self) -> Polygon {
        Polygon::from(self.primaries)
    }
}

/// A standard illuminant white point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    /// Illuminant name
    pub name: &'static str,
    /// xy chromaticity
    pub xy: Point,
    /// Correlated color temperature in Kelvin
    pub cct: u32,
}

impl WhitePoint {
    /// Creates a white point entry.
    pub const fn new(name: &'static str, x: f64, y: f64, cct: u32) -> Self {
        Self {
            name,
            xy: Point::new(x, y),
            cct,
        }
    }
}

// ============================================================================
// Reference Gamuts
// ============================================================================

/// sRGB primaries.
pub const SRGB: NamedGamut = NamedGamut::new("sRGB", [(0.6400, 0.3300), (0.3000, 0.6000), (0.1500, 0.0600)]);

/// Adobe RGB (1998) primaries.
pub const ADOBE_RGB: NamedGamut =
    NamedGamut::new("Adobe RGB", [(0.6400, 0.3300), (0.2100, 0.7100), (0.1500, 0.0600)]);

/// Apple RGB primaries.
pub const APPLE_RGB: NamedGamut =
    NamedGamut::new("Apple RGB", [(0.6250, 0.3400), (0.2800, 0.5950), (0.1550, 0.0700)]);

/// DCI-P3 primaries, shared by Display P3.
pub const DCI_P3: NamedGamut = NamedGamut::new(
    "DCI-P3 (Display P3)",
    [(0.6800, 0.3200), (0.2650, 0.6900), (0.1500, 0.0600)],
);

/// NTSC (FCC 1953) primaries.
pub const NTSC_FCC: NamedGamut =
    NamedGamut::new("NTSC-FCC", [(0.6700, 0.3300), (0.2100, 0.7100), (0.1400, 0.0800)]);

/// CIE 1931 RGB primaries.
pub const CIE_RGB: NamedGamut =
    NamedGamut::new("CIE RGB", [(0.7347, 0.2653), (0.2738, 0.7174), (0.1666, 0.0089)]);

/// Adobe Wide Gamut RGB primaries.
pub const WIDE_GAMUT: NamedGamut =
    NamedGamut::new("Wide Gamut", [(0.7350, 0.2650), (0.1150, 0.8260), (0.1570, 0.0180)]);

/// ITU-R BT.601 primaries for 625-line systems.
pub const BT601_PAL: NamedGamut = NamedGamut::new(
    "BT.601 (PAL/SECAM)",
    [(0.6400, 0.3300), (0.2900, 0.6000), (0.1500, 0.0600)],
);

/// ITU-R BT.601 primaries for 525-line systems.
pub const BT601_NTSC: NamedGamut = NamedGamut::new(
    "BT.601 (NTSC)",
    [(0.6300, 0.3400), (0.3100, 0.5950), (0.1550, 0.0700)],
);

/// ITU-R BT.709 primaries. Same coordinates as sRGB, kept as its own entry.
pub const BT709: NamedGamut = NamedGamut::new("BT.709", [(0.6400, 0.3300), (0.3000, 0.6000), (0.1500, 0.0600)]);

/// ITU-R BT.2020 primaries.
pub const BT2020: NamedGamut = NamedGamut::new("BT.2020", [(0.7080, 0.2920), (0.1700, 0.7970), (0.1310, 0.0460)]);

/// Every reference gamut, in ranking order.
///
/// Order matters: when two gamuts score the same coverage the earlier one wins.
pub static GAMUTS: [NamedGamut; 11] = [
    SRGB, ADOBE_RGB, APPLE_RGB, DCI_P3, NTSC_FCC, CIE_RGB, WIDE_GAMUT, BT601_PAL, BT601_NTSC, BT709, BT2020,
];

// ============================================================================
// Standard Illuminants
// ============================================================================

/// CIE standard illuminant white points with correlated color temperatures.
///
/// Order matters: the first of two equidistant entries is the nearest match.
#[rustfmt::skip]
pub static WHITE_POINTS: [WhitePoint; 30] = [
    WhitePoint::new("A",        0.44757, 0.40745, 2856),
    WhitePoint::new("B",        0.34842, 0.35161, 4874),
    WhitePoint::new("C",        0.31006, 0.31616, 6774),
    WhitePoint::new("D50",      0.34567, 0.35850, 5003),
    WhitePoint::new("D55",      0.33242, 0.34743, 5503),
    WhitePoint::new("D65",      0.31271, 0.32902, 6504),
    WhitePoint::new("D75",      0.29902, 0.31485, 7504),
    WhitePoint::new("D93",      0.28315, 0.29711, 9305),
    WhitePoint::new("E",        0.33333, 0.33333, 5454),
    WhitePoint::new("F1",       0.31310, 0.33727, 6430),
    WhitePoint::new("F2",       0.37208, 0.37529, 4230),
    WhitePoint::new("F3",       0.40910, 0.39430, 3450),
    WhitePoint::new("F4",       0.44018, 0.40329, 2940),
    WhitePoint::new("F5",       0.31379, 0.34531, 6350),
    WhitePoint::new("F6",       0.37790, 0.38835, 4150),
    WhitePoint::new("F7",       0.31292, 0.32933, 6500),
    WhitePoint::new("F8",       0.34588, 0.35875, 5000),
    WhitePoint::new("F9",       0.37417, 0.37281, 4150),
    WhitePoint::new("F10",      0.34609, 0.35986, 5000),
    WhitePoint::new("F11",      0.38052, 0.37713, 4000),
    WhitePoint::new("F12",      0.43695, 0.40441, 3000),
    WhitePoint::new("LED-B1",   0.45600, 0.40780, 2733),
    WhitePoint::new("LED-B2",   0.43570, 0.40120, 2998),
    WhitePoint::new("LED-B3",   0.37560, 0.37230, 4103),
    WhitePoint::new("LED-B4",   0.34220, 0.35020, 5109),
    WhitePoint::new("LED-B5",   0.31180, 0.32360, 6598),
    WhitePoint::new("LED-BH1",  0.44740, 0.40660, 2851),
    WhitePoint::new("LED-RGB1", 0.45570, 0.42110, 2840),
    WhitePoint::new("LED-V1",   0.45600, 0.45480, 2724),
    WhitePoint::new("LED-V2",   0.37810, 0.37750, 4070),
];

// ============================================================================
// Lookup
// ============================================================================

/// Finds a reference gamut by name, ignoring ASCII case.
///
/// Accepts a few short aliases: `ntsc`, `p3`, `rec709`, `rec2020`.
///
/// ```rust
/// use gamut_primaries::{find_gamut, NTSC_FCC};
///
/// assert_eq!(find_gamut("ntsc"), Some(&NTSC_FCC));
/// assert_eq!(find_gamut("NTSC-FCC"), Some(&NTSC_FCC));
/// assert!(find_gamut("ProPhoto").is_none());
/// ```
pub fn find_gamut(name: &str) -> Option<&'static NamedGamut> {
    let canonical = match name.to_ascii_lowercase().as_str() {
        "ntsc" => "NTSC-FCC",
        "p3" | "dci-p3" | "display-p3" | "display p3" => "DCI-P3 (Display P3)",
        "rec709" | "rec.709" | "bt709" => "BT.709",
        "rec2020" | "rec.2020" | "bt2020" => "BT.2020",
        _ => name,
    };
    GAMUTS.iter().find(|g| g.name.eq_ignore_ascii_case(canonical))
}

/// Finds a standard illuminant by name, ignoring ASCII case.
pub fn find_white_point(name: &str) -> Option<&'static WhitePoint> {
    WHITE_POINTS.iter().find(|w| w.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bt709_matches_srgb() {
        assert_eq!(BT709.primaries, SRGB.primaries);
        assert_ne!(BT709.name, SRGB.name);
    }

    #[test]
    fn test_catalog_order() {
        let names: Vec<_> = GAMUTS.iter().map(|g| g.name).collect();
        assert_eq!(names.first(), Some(&"sRGB"));
        assert_eq!(names.last(), Some(&"BT.2020"));
        assert_eq!(names.len(), 11);
    }

    #[test]
    fn test_gamut_areas_positive() {
        for g in &GAMUTS {
            assert!(g.polygon().area() > 0.05, "{} area {}", g.name, g.polygon().area());
        }
    }

    #[test]
    fn test_srgb_inside_bt2020() {
        let rec2020 = BT2020.polygon();
        for p in SRGB.primaries {
            assert!(rec2020.contains(p), "{p:?}");
        }
    }

    #[test]
    fn test_white_point_table() {
        assert_eq!(WHITE_POINTS.len(), 30);
        let d65 = find_white_point("D65").unwrap();
        assert_eq!(d65.xy, Point::new(0.31271, 0.32902));
        assert_eq!(d65.cct, 6504);
        assert_eq!(find_white_point("led-v2").map(|w| w.cct), Some(4070));
        assert!(find_white_point("D60").is_none());
    }

    #[test]
    fn test_white_points_plausible() {
        for w in &WHITE_POINTS {
            assert!(w.xy.x > 0.25 && w.xy.x < 0.5, "{}", w.name);
            assert!(w.xy.y > 0.25 && w.xy.y < 0.5, "{}", w.name);
            assert!((2000..10000).contains(&w.cct), "{}", w.name);
        }
    }

    #[test]
    fn test_find_gamut_aliases() {
        assert_eq!(find_gamut("SRGB").map(|g| g.name), Some("sRGB"));
        assert_eq!(find_gamut("p3").map(|g| g.name), Some("DCI-P3 (Display P3)"));
        assert_eq!(find_gamut("rec2020").map(|g| g.name), Some("BT.2020"));
        assert_eq!(find_gamut("bt.601 (ntsc)").map(|g| g.name), Some("BT.601 (NTSC)"));
        assert!(find_gamut("").is_none());
    }
}
