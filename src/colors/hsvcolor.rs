//! This module implements the HSV color space, a cylindrical reshuffling of RGB into hue,
//! saturation and value. It is a poor analog of how colors actually look, but it's convenient for
//! picking track and label colors by hand.
//!
//! Hue has two conventions here, inherited from the hexcone algorithm this is built on. Going
//! from RGB produces hue in degrees (0 to 360), as most people expect. Going back to RGB reads hue
//! in *sector units*, 0 to 6, one unit per side of the hexagon: red is 0, yellow 1, green 2, and so
//! on. Gray has no hue at all and is marked with the sentinel [`ACHROMATIC_HUE`].

use crate::colors::RGBColor;
use crate::coord::Coord;

/// The hue given to colors with zero saturation, for which hue is undefined. Converting a color with
/// this hue to RGB gives a gray at its value, whatever its saturation claims.
pub const ACHROMATIC_HUE: f64 = -1.0;

/// An HSV color, defining parameters for hue, saturation, and value from the RGB space.
///
/// # Example
/// ```
/// # use skyview::colors::{HSVColor, RGBColor};
/// // sector 2 is pure green
/// let green = HSVColor{h: 2., s: 1., v: 1.};
/// assert_eq!(green.to_rgb(), RGBColor{r: 0., g: 1., b: 0.});
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSVColor {
    /// The hue. As an input to [`to_rgb`](#method.to_rgb) this is in sector units on [0, 6]; as the
    /// output of `RGBColor::to_hsv` it is in degrees on [0, 360). Either way [`ACHROMATIC_HUE`]
    /// means gray.
    pub h: f64,
    /// The saturation, between 0 for gray and 1 for a fully saturated color.
    pub s: f64,
    /// The value, the largest RGB primary of the color.
    pub v: f64,
}

impl HSVColor {
    /// Converts to RGB with the hexcone algorithm, reading the hue in sector units.
    ///
    /// Within a sector the fractional part of the hue is flipped on even sectors, so that the
    /// intermediate primary `n` always ramps the right way across the hexagon side. Hues outside
    /// [0, 7) that aren't the achromatic sentinel don't land on any sector; the components are then
    /// passed through unchanged, as the hexcone algorithm does.
    pub fn to_rgb(&self) -> RGBColor {
        if self.h == ACHROMATIC_HUE {
            return RGBColor {
                r: self.v,
                g: self.v,
                b: self.v,
            };
        }

        let sector = self.h.floor();
        let mut f = self.h - sector;
        let sector = sector as i64;
        if sector & 1 == 0 {
            f = 1.0 - f;
        }
        let v = self.v;
        let m = v * (1.0 - self.s);
        let n = v * (1.0 - self.s * f);

        let (r, g, b) = match sector {
            0 | 6 => (v, n, m),
            1 => (n, v, m),
            2 => (m, v, n),
            3 => (m, n, v),
            4 => (n, m, v),
            5 => (v, m, n),
            _ => (self.h, self.s, self.v),
        };
        RGBColor { r, g, b }
    }
}

impl From<Coord> for HSVColor {
    fn from(c: Coord) -> HSVColor {
        HSVColor {
            h: c.x,
            s: c.y,
            v: c.z,
        }
    }
}

impl From<HSVColor> for Coord {
    fn from(val: HSVColor) -> Self {
        Coord {
            x: val.h,
            y: val.s,
            z: val.v,
        }
    }
}
