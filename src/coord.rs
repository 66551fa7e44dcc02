//! This module contains a struct, [`Coord`](coord::Coord), that models a point in 3D space with
//! limited support for componentwise math. Every color type in this crate maps onto a `Coord`, so
//! operations that don't care which space a color lives in (gamma correction, tone mapping,
//! clamping) are written once here instead of once per space.

use std::ops::Div;

use num::{Num, NumCast};

/// Represents a scalar value that can be easily converted, described using the common numeric traits
/// in [`num`]. Anything that falls under this category can divide a [`Coord`] to scale it.
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

/// A point in 3D space. `Coord` has three axes, denoted `x`, `y`, and `z`, and nothing in its
/// methods treats them differently. Each color type maps its components onto these axes in the
/// order of the letters in its name: `RGBColor` puts `r` on x, `g` on y and `b` on z, and
/// `XYYColor` puts chromaticity `x` on x, `y` on y and luminance `Y` on z.
///
/// # Example
/// ```
/// # use skyview::coord::Coord;
/// let point = Coord{x: 1., y: 4., z: 9.};
/// let root = point.map(f64::sqrt);
/// assert_eq!(root, Coord{x: 1., y: 2., z: 3.});
/// let half = point / 2;
/// assert_eq!(half, Coord{x: 0.5, y: 2., z: 4.5});
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

// Division by a scalar, (a, b, c) / s = (a/s, b/s, c/s). Dividing by zero is not special-cased:
// it gives infinities or NaN just like plain float division would.
impl<U: Scalar> Div<U> for Coord {
    type Output = Coord;
    fn div(self, rhs: U) -> Coord {
        let r: f64 = num::cast(rhs).unwrap_or(std::f64::NAN);
        Coord {
            x: self.x / r,
            y: self.y / r,
            z: self.z / r,
        }
    }
}

impl Coord {
    /// Applies the same function to each of the three components, returning a new Coord.
    pub fn map<F: Fn(f64) -> f64>(self, f: F) -> Coord {
        Coord {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }

    /// The largest of the three components. NaN components are skipped unless every component is
    /// NaN.
    pub fn max_component(&self) -> f64 {
        self.x.max(self.y).max(self.z)
    }

    /// The smallest of the three components, with the same NaN handling as `max_component`.
    pub fn min_component(&self) -> f64 {
        self.x.min(self.y).min(self.z)
    }

    /// The Euclidean difference between two 3D points, defined as the square root of the sum of
    /// squares of differences in each axis. This is **not** a measure of how different two colors
    /// look: two HSV points 360 degrees of hue apart are the same color, for one. It is a perfectly
    /// good way of checking that a conversion came back to where it started, which is what it's
    /// used for here.
    ///
    /// # Example
    /// ```
    /// # use skyview::coord::Coord;
    /// let point1 = Coord{x: 0., y: 0., z: -1.};
    /// let point2 = Coord{x: 2., y: 3., z: 5.};
    /// let dist = point1.euclidean_distance(&point2);
    /// assert!((dist - 7.).abs() <= 1e-10);
    /// ```
    pub fn euclidean_distance(&self, other: &Coord) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }
}
