//! This module implements CIE xyY: chromaticity (x, y) plus luminance Y. It's the natural output
//! of the Perez sky model, which predicts "what color" and "how bright" separately.
//!
//! Converting to XYZ divides by the chromaticity y. For y = 0 there is no answer; the plain
//! conversion lets the division produce infinities or NaN so that the bad sample shows up
//! downstream, and [`XYYColor::try_to_xyz`] reports it as an error for callers that would rather
//! stop there.

use crate::colors::{RGBColor, XYZColor};
use crate::coord::Coord;
use crate::error::ColorError;

/// A color in CIE xyY. The luminance is called `big_y` to keep it apart from the chromaticity `y`.
///
/// # Example
/// ```
/// # use skyview::colors::XYYColor;
/// let d65 = XYYColor{x: 0.3127, y: 0.3290, big_y: 1.};
/// let xyz = d65.to_xyz();
/// assert!((xyz.x - 0.9505).abs() < 1e-4);
/// assert!((xyz.z - 1.0891).abs() < 1e-4);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XYYColor {
    /// The chromaticity x, X / (X + Y + Z).
    pub x: f64,
    /// The chromaticity y, Y / (X + Y + Z).
    pub y: f64,
    /// The luminance Y, identical to the Y of the XYZ color.
    pub big_y: f64,
}

impl XYYColor {
    /// Converts to XYZ. A chromaticity y of zero is not guarded against: X and Z come out infinite
    /// or NaN.
    pub fn to_xyz(&self) -> XYZColor {
        XYZColor {
            x: self.x * (self.big_y / self.y),
            y: self.big_y,
            z: (1.0 - self.x - self.y) * (self.big_y / self.y),
        }
    }

    /// Like [`to_xyz`](#method.to_xyz), but returns an error instead of infinities when the
    /// chromaticity y is zero.
    pub fn try_to_xyz(&self) -> Result<XYZColor, ColorError> {
        if self.y == 0.0 {
            Err(ColorError::ZeroChromaticityY {
                x: self.x,
                big_y: self.big_y,
            })
        } else {
            Ok(self.to_xyz())
        }
    }

    /// Converts to linear RGB by way of XYZ.
    pub fn to_rgb(&self) -> RGBColor {
        self.to_xyz().to_rgb()
    }
}

impl From<Coord> for XYYColor {
    fn from(c: Coord) -> XYYColor {
        XYYColor {
            x: c.x,
            y: c.y,
            big_y: c.z,
        }
    }
}

impl From<XYYColor> for Coord {
    fn from(val: XYYColor) -> Self {
        Coord {
            x: val.x,
            y: val.y,
            z: val.big_y,
        }
    }
}
