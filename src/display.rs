//! This module turns scene-linear sky colors into something a screen can show. The sky model's RGB
//! is in luminance units and regularly sits in the tens, so it is first compressed into [0, 1) by an
//! exponential exposure curve and then gamma corrected. Nothing here clamps: the curve never
//! reaches 1 and negative components (which the model produces for a few badly extrapolated
//! directions) come out as NaN after gamma correction, to be clamped away by
//! [`RGBColor::to_rgb8`](../colors/rgbcolor/struct.RGBColor.html#method.to_rgb8).

use crate::color::{Color, ColorSpace};
use crate::colors::RGBColor;
use crate::coord::Coord;

/// Default exposure scale: scene luminance at which a channel reaches `1 - 1/e` of full brightness.
pub const DEFAULT_SCALING: f64 = 15.0;

/// Default display gamma.
pub const DEFAULT_GAMMA: f64 = 2.0;

/// Exposure and gamma settings for showing sky colors.
///
/// # Example
/// ```
/// # use skyview::display::Display;
/// # use skyview::colors::RGBColor;
/// let display = Display::default();
/// let sky = RGBColor{r: 3., g: 5., b: 12.};
/// let shown = display.apply(sky.into());
/// assert!(shown.r < shown.g && shown.g < shown.b);
/// assert!(shown.b < 1.);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Display {
    /// The exposure scale, in the sky model's luminance units.
    pub scaling: f64,
    /// The gamma to correct for. Each channel is raised to `1 / gamma`.
    pub gamma: f64,
}

impl Default for Display {
    fn default() -> Display {
        Display {
            scaling: DEFAULT_SCALING,
            gamma: DEFAULT_GAMMA,
        }
    }
}

impl Display {
    /// Compresses each channel with `1 - exp(-c / scaling)`. Zero stays zero, and the result
    /// approaches but never reaches 1.
    pub fn tone_map(&self, color: RGBColor) -> RGBColor {
        let scaled: Coord = Coord::from(color) / self.scaling;
        RGBColor::from(scaled.map(|c| 1.0 - (-c).exp()))
    }

    /// Converts any color to RGB, tone maps it and gamma corrects it.
    pub fn apply(&self, color: Color) -> RGBColor {
        let mapped = self.tone_map(color.to_rgb_color());
        let corrected = Color::Rgb(mapped).gamma_correct(self.gamma);
        debug_assert_eq!(corrected.space(), ColorSpace::Rgb);
        corrected.to_rgb_color()
    }
}
