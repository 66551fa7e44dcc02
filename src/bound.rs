//! This module describes the Bound trait, which allows for a description of what values a color
//! space can actually display. The sky model itself never clamps anything, so that NaN and
//! out-of-range values stay visible to whoever is looking at them; clamping only happens at the very
//! end, when a color is turned into bytes for a texture.

use crate::colors::RGBColor;
use crate::coord::Coord;

/// Describes a color type whose displayable values have explicit per-component limits. An RGB
/// color meant for a screen can't have negative components or ones above 1, for example, even
/// though the sky model happily produces both.
///
/// # Example
/// ```
/// # use skyview::bound::Bound;
/// # use skyview::colors::RGBColor;
/// let too_bright = RGBColor{r: 1.4, g: 0.5, b: -0.1};
/// let clamped = too_bright.clamp();
/// assert_eq!(clamped, RGBColor{r: 1., g: 0.5, b: 0.});
/// ```
pub trait Bound: Into<Coord> + From<Coord> + Copy {
    /// Returns an array [(min1, max1), (min2, max2), (min3, max3)] that represents the bounds on each
    /// component of the color space, in the order that they appear in the Coord representation. If
    /// some parts of the bounds don't exist, using infinity or negative infinity works.
    fn bounds() -> [(f64, f64); 3];
    /// Given a Coord, returns a Coord such that each component has been clamped to the correct
    /// bounds. NaN components are left as NaN.
    fn clamp_coord(point: Coord) -> Coord {
        let ranges = Self::bounds();
        let clamp = |component: f64, (min, max): (f64, f64)| {
            if component < min {
                min
            } else if component > max {
                max
            } else {
                component
            }
        };
        Coord {
            x: clamp(point.x, ranges[0]),
            y: clamp(point.y, ranges[1]),
            z: clamp(point.z, ranges[2]),
        }
    }
    /// Returns a copy of this color with every component pulled into bounds.
    fn clamp(self) -> Self {
        Self::from(Self::clamp_coord(self.into()))
    }
}

impl Bound for RGBColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 1.), (0., 1.), (0., 1.)]
    }
}

#[cfg(test)]
mod tests {
    use super::Bound;
    use crate::colors::RGBColor;

    #[test]
    fn test_zero_one_bounds() {
        let color1 = RGBColor{r: 0.1, g: -0.2, b: 1.2};
        assert_eq!(color1.clamp(), RGBColor{r: 0.1, g: 0., b: 1.});
    }

    #[test]
    fn test_nan_passes_through() {
        let color = RGBColor{r: std::f64::NAN, g: 2., b: 0.5};
        let clamped = color.clamp();
        assert!(clamped.r.is_nan());
        assert_eq!(clamped.g, 1.);
        assert_eq!(clamped.b, 0.5);
    }
}
