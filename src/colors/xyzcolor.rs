//! This module implements CIE 1931 XYZ, the hub every other space converts through. There is no
//! illuminant attached: everything in the sky pipeline is implicitly D65, the white point of the
//! fixed RGB matrices.

use crate::colors::{RGBColor, XYYColor};
use crate::consts::XYZ_TO_RGB_TRANSFORM as XYZ_TO_RGB;
use crate::coord::Coord;

/// A point in the CIE 1931 XYZ color space. Y is luminance, in whatever units the producer of the
/// color uses: for sky colors those are the model's zenith luminance units, not a 0-1 range.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XYZColor {
    /// The X axis of the CIE 1931 XYZ space, roughly the red-ish response.
    pub x: f64,
    /// The Y axis of the CIE 1931 XYZ space: luminance.
    pub y: f64,
    /// The Z axis of the CIE 1931 XYZ space, roughly the blue response.
    pub z: f64,
}

impl XYZColor {
    /// Converts to linear RGB with the fixed inverse matrix. Colors outside the RGB gamut come back
    /// with negative or greater-than-one components; nothing is clamped.
    pub fn to_rgb(&self) -> RGBColor {
        let rgb = &*XYZ_TO_RGB * vector![self.x, self.y, self.z];
        RGBColor {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
        }
    }

    /// Splits into chromaticity and luminance. Black (X + Y + Z = 0) has no chromaticity and gives
    /// NaN for x and y.
    pub fn to_xyy(&self) -> XYYColor {
        let sum = self.x + self.y + self.z;
        XYYColor {
            x: self.x / sum,
            y: self.y / sum,
            big_y: self.y,
        }
    }
}

impl From<Coord> for XYZColor {
    fn from(c: Coord) -> XYZColor {
        XYZColor {
            x: c.x,
            y: c.y,
            z: c.z,
        }
    }
}

impl From<XYZColor> for Coord {
    fn from(val: XYZColor) -> Self {
        Coord {
            x: val.x,
            y: val.y,
            z: val.z,
        }
    }
}
