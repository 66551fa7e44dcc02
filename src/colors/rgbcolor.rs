//! This module implements linear RGB, the space the sky model hands to the renderer. The components
//! are unbounded floats: the sky model regularly produces values in the tens before exposure is
//! applied, and below zero for directions the model extrapolates badly. Nothing here clamps except
//! [`RGBColor::to_rgb8`], which is the point where a color stops being a measurement and becomes a
//! pixel.

use crate::bound::Bound;
use crate::colors::{HSVColor, XYZColor};
use crate::colors::hsvcolor::ACHROMATIC_HUE;
use crate::consts::RGB_TO_XYZ_TRANSFORM as RGB_TO_XYZ;
use crate::coord::Coord;

/// A color in linear RGB, with each primary as a float that is nominally between 0 and 1 once it
/// has been tone mapped.
///
/// # Example
/// ```
/// # use skyview::colors::RGBColor;
/// let orange = RGBColor{r: 1., g: 0.5, b: 0.};
/// assert_eq!(orange.to_rgb8(), [255, 128, 0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red component.
    pub r: f64,
    /// The green component.
    pub g: f64,
    /// The blue component.
    pub b: f64,
}

impl RGBColor {
    /// Converts to CIE XYZ with the fixed forward matrix.
    pub fn to_xyz(&self) -> XYZColor {
        let xyz = &*RGB_TO_XYZ * vector![self.r, self.g, self.b];
        XYZColor {
            x: xyz[0],
            y: xyz[1],
            z: xyz[2],
        }
    }

    /// Converts to HSV using the hexcone model. The hue comes back in degrees, between 0 and 360.
    /// Grays (zero saturation) get the hue [`ACHROMATIC_HUE`]; black gets hue and saturation 0.
    ///
    /// Note that this is not the exact inverse of [`HSVColor::to_rgb`], which reads hue in sector
    /// units between 0 and 6: divide the hue by 60 before going back.
    ///
    /// [`ACHROMATIC_HUE`]: ../hsvcolor/constant.ACHROMATIC_HUE.html
    /// [`HSVColor::to_rgb`]: ../hsvcolor/struct.HSVColor.html#method.to_rgb
    pub fn to_hsv(&self) -> HSVColor {
        // which channel is largest decides the hue sector: on ties, red beats green beats blue
        let mut max_c = self.r;
        let mut max_channel = 0;
        if self.g > max_c {
            max_c = self.g;
            max_channel = 1;
        }
        if self.b > max_c {
            max_c = self.b;
            max_channel = 2;
        }
        let min_c = Coord::from(*self).min_component();
        let delta = max_c - min_c;

        if max_c == 0.0 {
            return HSVColor {
                h: 0.0,
                s: 0.0,
                v: max_c,
            };
        }
        let saturation = delta / max_c;
        if saturation == 0.0 {
            return HSVColor {
                h: ACHROMATIC_HUE,
                s: saturation,
                v: max_c,
            };
        }

        let sector = match max_channel {
            // between yellow and magenta
            0 => (self.g - self.b) / delta,
            // between cyan and yellow
            1 => 2.0 + (self.b - self.r) / delta,
            // between magenta and cyan
            _ => 4.0 + (self.r - self.g) / delta,
        };
        let mut hue = sector * 60.0;
        if hue < 0.0 {
            hue += 360.0;
        }
        HSVColor {
            h: hue,
            s: saturation,
            v: max_c,
        }
    }

    /// Clamps to the displayable range and quantizes each component to a byte, rounding to the
    /// nearest value. NaN components come out as 0.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let clamped = self.clamp();
        let quantize = |c: f64| (c * 255.0).round() as u8;
        [quantize(clamped.r), quantize(clamped.g), quantize(clamped.b)]
    }
}

impl From<Coord> for RGBColor {
    fn from(c: Coord) -> RGBColor {
        RGBColor {
            r: c.x,
            g: c.y,
            b: c.z,
        }
    }
}

impl From<RGBColor> for Coord {
    fn from(val: RGBColor) -> Self {
        Coord {
            x: val.r,
            y: val.g,
            z: val.b,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::consts::TEST_PRECISION;

    #[test]
    fn test_rgb_xyz_rgb_round_trip() {
        let samples = [
            RGBColor{r: 0., g: 0., b: 0.},
            RGBColor{r: 1., g: 1., b: 1.},
            RGBColor{r: 0.6, g: 0.3, b: 0.8},
            RGBColor{r: 0.05, g: 0.9, b: 0.4},
            RGBColor{r: 1., g: 0., b: 0.},
        ];
        for rgb in samples.iter() {
            let back = rgb.to_xyz().to_rgb();
            let dist = Coord::from(*rgb).euclidean_distance(&Coord::from(back));
            assert!(dist <= TEST_PRECISION, "{:?} came back as {:?}", rgb, back);
        }
    }

    #[test]
    fn test_white_is_near_d65() {
        let white = RGBColor{r: 1., g: 1., b: 1.}.to_xyz();
        assert!((white.x - 0.950456).abs() <= 1e-6);
        assert!((white.y - 1.0).abs() <= 1e-6);
        assert!((white.z - 1.088754).abs() <= 1e-6);
    }

    #[test]
    fn test_primary_hues() {
        let red = RGBColor{r: 1., g: 0., b: 0.}.to_hsv();
        assert_eq!((red.h, red.s, red.v), (0., 1., 1.));
        let green = RGBColor{r: 0., g: 1., b: 0.}.to_hsv();
        assert_eq!((green.h, green.s, green.v), (120., 1., 1.));
        let blue = RGBColor{r: 0., g: 0., b: 0.5}.to_hsv();
        assert_eq!((blue.h, blue.s, blue.v), (240., 1., 0.5));
        // a hue just below red wraps around to the top of the circle
        let rose = RGBColor{r: 1., g: 0., b: 0.5}.to_hsv();
        assert!((rose.h - 330.).abs() <= 1e-10);
    }

    #[test]
    fn test_gray_and_black_hsv() {
        let gray = RGBColor{r: 0.4, g: 0.4, b: 0.4}.to_hsv();
        assert_eq!(gray.h, ACHROMATIC_HUE);
        assert_eq!(gray.s, 0.);
        assert_eq!(gray.v, 0.4);
        let black = RGBColor{r: 0., g: 0., b: 0.}.to_hsv();
        assert_eq!((black.h, black.s, black.v), (0., 0., 0.));
    }

    #[test]
    fn test_rgb8_quantization() {
        let c = RGBColor{r: 1.7, g: -0.3, b: 0.2};
        assert_eq!(c.to_rgb8(), [255, 0, 51]);
        let nan = RGBColor{r: std::f64::NAN, g: 0.5, b: 1.};
        assert_eq!(nan.to_rgb8(), [0, 128, 255]);
    }
}
