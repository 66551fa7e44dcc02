//! This file defines [`Color`], a color tagged with the space it lives in, and the conversions
//! between those spaces. The concrete per-space types live in [`colors`](../colors/index.html);
//! `Color` is what code holds when the space is only known at runtime, such as a sky sample that
//! starts out as xyY and ends up as RGB.
//!
//! Every conversion returns a new value and leaves the original alone. Conversions never check
//! ranges: degenerate inputs (zero chromaticity y, black in xyY, negative components raised to
//! fractional powers) give NaN or infinities, which then travel through the rest of the pipeline
//! where they can be seen.

use crate::colors::{HSVColor, RGBColor, XYYColor, XYZColor};
use crate::coord::Coord;

/// The color spaces a [`Color`] can be in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorSpace {
    /// Linear RGB.
    Rgb,
    /// CIE 1931 XYZ.
    Xyz,
    /// Hue, saturation, value.
    Hsv,
    /// CIE chromaticity plus luminance.
    XyY,
}

/// A color in one of the four supported spaces. The variant is the space, so components from
/// different spaces can never be mixed up.
///
/// # Example
/// Sky colors come out of the model as xyY and have to end up as RGB:
///
/// ```
/// # use skyview::color::{Color, ColorSpace};
/// # use skyview::colors::XYYColor;
/// let sky = Color::from(XYYColor{x: 0.25, y: 0.27, big_y: 6.2});
/// let rgb = sky.as_rgb();
/// assert_eq!(rgb.space(), ColorSpace::Rgb);
/// // blue sky has more blue than red
/// let c = rgb.components();
/// assert!(c.z > c.x);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum Color {
    /// A linear RGB color.
    Rgb(RGBColor),
    /// A CIE XYZ color.
    Xyz(XYZColor),
    /// An HSV color, hue in sector units when converting to RGB.
    Hsv(HSVColor),
    /// A CIE xyY color.
    XyY(XYYColor),
}

impl Color {
    /// Builds a color from three raw components and the space they belong to.
    pub fn new(x: f64, y: f64, z: f64, space: ColorSpace) -> Color {
        Color::from_coord(Coord { x, y, z }, space)
    }

    /// Builds a color in the given space from a Coord, mapping the axes in component order.
    pub fn from_coord(c: Coord, space: ColorSpace) -> Color {
        match space {
            ColorSpace::Rgb => Color::Rgb(RGBColor::from(c)),
            ColorSpace::Xyz => Color::Xyz(XYZColor::from(c)),
            ColorSpace::Hsv => Color::Hsv(HSVColor::from(c)),
            ColorSpace::XyY => Color::XyY(XYYColor::from(c)),
        }
    }

    /// The space this color is in.
    pub fn space(&self) -> ColorSpace {
        match *self {
            Color::Rgb(_) => ColorSpace::Rgb,
            Color::Xyz(_) => ColorSpace::Xyz,
            Color::Hsv(_) => ColorSpace::Hsv,
            Color::XyY(_) => ColorSpace::XyY,
        }
    }

    /// The raw components, in the order of the letters of the space's name.
    pub fn components(&self) -> Coord {
        match *self {
            Color::Rgb(c) => c.into(),
            Color::Xyz(c) => c.into(),
            Color::Hsv(c) => c.into(),
            Color::XyY(c) => c.into(),
        }
    }

    /// Converts to linear RGB. xyY goes through XYZ first; HSV reads its hue in sector units.
    pub fn as_rgb(&self) -> Color {
        Color::Rgb(self.to_rgb_color())
    }

    /// Converts to CIE XYZ. HSV goes through RGB first.
    pub fn as_xyz(&self) -> Color {
        Color::Xyz(self.to_xyz_color())
    }

    /// Converts to HSV, with hue in degrees. Everything other than RGB goes through RGB first.
    pub fn as_hsv(&self) -> Color {
        match *self {
            Color::Hsv(_) => *self,
            _ => Color::Hsv(self.to_rgb_color().to_hsv()),
        }
    }

    /// Converts to CIE xyY. Everything other than xyY goes through XYZ first.
    pub fn as_xyy(&self) -> Color {
        match *self {
            Color::XyY(_) => *self,
            _ => Color::XyY(self.to_xyz_color().to_xyy()),
        }
    }

    /// Converts to linear RGB and unwraps the result into the concrete type.
    pub fn to_rgb_color(&self) -> RGBColor {
        match *self {
            Color::Rgb(c) => c,
            Color::Xyz(c) => c.to_rgb(),
            Color::Hsv(c) => c.to_rgb(),
            Color::XyY(c) => c.to_xyz().to_rgb(),
        }
    }

    /// Converts to CIE XYZ and unwraps the result into the concrete type.
    pub fn to_xyz_color(&self) -> XYZColor {
        match *self {
            Color::Rgb(c) => c.to_xyz(),
            Color::Xyz(c) => c,
            Color::Hsv(c) => c.to_rgb().to_xyz(),
            Color::XyY(c) => c.to_xyz(),
        }
    }

    /// Raises each component to the power `1 / gamma`, staying in the same space. This is only
    /// meaningful for display-referred RGB, which is the only thing the sky pipeline calls it on;
    /// the method doesn't check. Negative components give NaN.
    ///
    /// # Example
    /// ```
    /// # use skyview::color::{Color, ColorSpace};
    /// let c = Color::new(0.25, 0.0625, 1., ColorSpace::Rgb).gamma_correct(2.);
    /// assert_eq!(c, Color::new(0.5, 0.25, 1., ColorSpace::Rgb));
    /// ```
    pub fn gamma_correct(&self, gamma: f64) -> Color {
        let exponent = 1.0 / gamma;
        Color::from_coord(self.components().map(|c| c.powf(exponent)), self.space())
    }
}

impl From<RGBColor> for Color {
    fn from(c: RGBColor) -> Color {
        Color::Rgb(c)
    }
}

impl From<XYZColor> for Color {
    fn from(c: XYZColor) -> Color {
        Color::Xyz(c)
    }
}

impl From<HSVColor> for Color {
    fn from(c: HSVColor) -> Color {
        Color::Hsv(c)
    }
}

impl From<XYYColor> for Color {
    fn from(c: XYYColor) -> Color {
        Color::XyY(c)
    }
}
