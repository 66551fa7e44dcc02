//! This file provides the constant matrices used for converting between CIE XYZ and linear RGB, in
//! the form the rest of the crate multiplies with. The two matrices are the ones the sky renderer
//! has always used: they are rounded to six places independently of each other, so they are only
//! approximately inverse, and conversions that go out and back agree to about 1e-4 rather than
//! to machine precision.

use rulinalg::matrix::Matrix;

lazy_static! {
    /// Linear transform from CIE XYZ to (linear, unclamped) RGB.
    pub static ref XYZ_TO_RGB_TRANSFORM: Matrix<f64> = matrix![
        03.240479, -1.537150, -0.498535;
        -0.969256, 01.875991, 00.041556;
        00.055648, -0.204043, 01.057311
    ];

    /// Linear transform from (linear) RGB to CIE XYZ.
    pub static ref RGB_TO_XYZ_TRANSFORM: Matrix<f64> = matrix![
        0.412453, 0.357580, 0.180423;
        0.212671, 0.715160, 0.072169;
        0.019334, 0.119193, 0.950227
    ];
}

/// Tolerance used across the tests when comparing colors that have gone through the two
/// approximately-inverse matrices above.
#[cfg(test)]
pub const TEST_PRECISION: f64 = 1e-3;
