//! This module implements the Perez all-weather sky model with the clear-sky parameters of Preetham,
//! Shirley and Smits ("A Practical Analytic Model for Daylight", 1999). Given where the sun is, it
//! predicts the luminance and chromaticity of the sky in any direction as the zenith value scaled by
//! the Perez distribution
//!
//! `F(θ, γ) = (1 + A exp(B / cos θ)) (1 + C exp(D γ) + E cos² γ)`
//!
//! taken relative to its value at the zenith, where θ is the zenith angle of the direction and γ its
//! angular distance from the sun. Each of Y, x and y has its own five coefficients, all linear in
//! the atmospheric turbidity.
//!
//! The model is split in two: [`SkyModel::set_solar_position`] does everything that depends only
//! on the sun, and [`SkyModel::colour`] is the cheap per-direction evaluation. `colour` takes
//! `&self`, so once the sun is set a whole grid can be sampled from several threads at once; moving
//! the sun needs `&mut self` and so can't overlap with sampling.
//!
//! Internally angles follow the model's conventions: zenith angle θ in radians from straight up,
//! azimuth φ in radians anticlockwise from South. The public interface takes compass degrees like
//! the rest of the crate.

use std::f64::consts::PI;

use crate::color::Color;
use crate::colors::XYYColor;

/// Clear sky with a little haze.
pub const DEFAULT_TURBIDITY: f64 = 3.0;

/// Luminance (Y) distribution coefficients A to E, each as `[slope, intercept]` in turbidity.
static Y_DISTRIBUTION: [[f64; 2]; 5] = [
    [0.1787, -1.4630],
    [-0.3554, 0.4275],
    [-0.0227, 5.3251],
    [0.1206, -2.5771],
    [-0.0670, 0.3703],
];

/// Chromaticity x distribution coefficients A to E.
static X_DISTRIBUTION: [[f64; 2]; 5] = [
    [-0.0193, -0.2592],
    [-0.0665, 0.0008],
    [-0.0004, 0.2125],
    [-0.0641, -0.8989],
    [-0.0033, 0.0452],
];

/// Chromaticity y distribution coefficients A to E.
static Y_CHROMA_DISTRIBUTION: [[f64; 2]; 5] = [
    [-0.0167, -0.2608],
    [-0.0950, 0.0092],
    [-0.0079, 0.2102],
    [-0.0441, -1.6537],
    [-0.0109, 0.0529],
];

/// Zenith chromaticity x: rows are the T², T and constant terms, columns the θ³, θ², θ and
/// constant terms of a cubic in the solar zenith angle.
static X_ZENITH: [[f64; 4]; 3] = [
    [0.00166, -0.00375, 0.00209, 0.0],
    [-0.02903, 0.06377, -0.03203, 0.00394],
    [0.11693, -0.21196, 0.06052, 0.25886],
];

/// Zenith chromaticity y, laid out like [`X_ZENITH`].
static Y_ZENITH: [[f64; 4]; 3] = [
    [0.00275, -0.00610, 0.00317, 0.0],
    [-0.04214, 0.08970, -0.04153, 0.00516],
    [0.15346, -0.26756, 0.06670, 0.26688],
];

/// The Perez sky model for one turbidity and, once [`set_solar_position`] has been called, one
/// position of the sun.
///
/// A freshly built model has the sun at the zenith. Moving the sun is the caller's job: nothing
/// refreshes the coefficients behind the caller's back, and `colour` keeps using the last position
/// it was given.
///
/// # Example
/// ```
/// # use skyview::skymodel::SkyModel;
/// let mut sky = SkyModel::new();
/// sky.set_solar_position(135., 30.);
/// let toward_sun = sky.luminance(135., 30.);
/// let away_from_sun = sky.luminance(315., 30.);
/// assert!(toward_sun > away_from_sun);
/// let rgb = sky.colour(315., 45.).components();
/// // the sky opposite the sun is blue
/// assert!(rgb.z > rgb.x);
/// ```
///
/// [`set_solar_position`]: #method.set_solar_position
#[derive(Debug, Clone, PartialEq)]
pub struct SkyModel {
    turbidity: f64,
    sun_theta: f64,
    sun_phi: f64,
    chi: f64,
    zenith_x: f64,
    zenith_y: f64,
    zenith_big_y: f64,
    x_coeffs: [f64; 5],
    y_coeffs: [f64; 5],
    big_y_coeffs: [f64; 5],
}

impl Default for SkyModel {
    fn default() -> SkyModel {
        SkyModel::new()
    }
}

impl SkyModel {
    /// A model at the default turbidity, [`DEFAULT_TURBIDITY`].
    pub fn new() -> SkyModel {
        SkyModel::with_turbidity(DEFAULT_TURBIDITY)
    }

    /// A model at the given turbidity. The coefficients were fitted for turbidities of about 2 to
    /// 10; outside that the predictions quickly stop looking like a sky.
    pub fn with_turbidity(turbidity: f64) -> SkyModel {
        let mut model = SkyModel {
            turbidity,
            sun_theta: 0.0,
            sun_phi: 0.0,
            chi: 0.0,
            zenith_x: 0.0,
            zenith_y: 0.0,
            zenith_big_y: 0.0,
            x_coeffs: [0.0; 5],
            y_coeffs: [0.0; 5],
            big_y_coeffs: [0.0; 5],
        };
        model.set_solar_position(0.0, 90.0);
        model
    }

    /// The atmospheric turbidity this model was built for.
    pub fn turbidity(&self) -> f64 {
        self.turbidity
    }

    /// Moves the sun to the given compass azimuth and elevation, in degrees, and recomputes every
    /// coefficient that depends on it.
    pub fn set_solar_position(&mut self, azimuth: f64, elevation: f64) {
        self.sun_theta = PI / 2.0 - elevation.to_radians();
        self.sun_phi = -azimuth.to_radians() + PI;

        let t = self.turbidity;
        // absolute zenith luminance
        self.chi = (4.0 / 9.0 - t / 120.0) * (PI - 2.0 * self.sun_theta);
        self.zenith_big_y = ((4.0453 * t - 4.9710) * self.chi.tan() - 0.2155 * t + 2.4192).abs();
        self.big_y_coeffs = distribution_coefficients(&Y_DISTRIBUTION, t);

        self.zenith_x = zenith_chromaticity(&X_ZENITH, t, self.sun_theta);
        self.x_coeffs = distribution_coefficients(&X_DISTRIBUTION, t);

        self.zenith_y = zenith_chromaticity(&Y_ZENITH, t, self.sun_theta);
        self.y_coeffs = distribution_coefficients(&Y_CHROMA_DISTRIBUTION, t);
    }

    /// The sun position last passed to [`set_solar_position`](#method.set_solar_position), as
    /// compass `(azimuth, elevation)` in degrees. Azimuth is normalised to [0, 360).
    pub fn solar_position(&self) -> (f64, f64) {
        let azimuth = (PI - self.sun_phi).to_degrees().rem_euclid(360.0);
        let elevation = (PI / 2.0 - self.sun_theta).to_degrees();
        (azimuth, elevation)
    }

    /// The zenith values `(x, y, Y)` for the current sun position.
    pub fn zenith(&self) -> XYYColor {
        XYYColor {
            x: self.zenith_x,
            y: self.zenith_y,
            big_y: self.zenith_big_y,
        }
    }

    /// The predicted sky color, as xyY, in the direction with the given compass azimuth and
    /// elevation in degrees.
    ///
    /// Elevations right at the horizon put cos θ at (nearly) zero in the Perez formula. With the
    /// fitted coefficients the exponent there is large and negative, so the term vanishes, but
    /// the model says nothing useful about directions below the horizon.
    pub fn sky_xyy(&self, azimuth: f64, elevation: f64) -> XYYColor {
        let theta = PI / 2.0 - elevation.to_radians();
        let phi = -azimuth.to_radians() + PI;
        let gamma = angle_between(theta, phi, self.sun_theta, self.sun_phi);

        XYYColor {
            x: self.zenith_x * self.distribution(&self.x_coeffs, theta, gamma),
            y: self.zenith_y * self.distribution(&self.y_coeffs, theta, gamma),
            big_y: self.zenith_big_y * self.distribution(&self.big_y_coeffs, theta, gamma),
        }
    }

    /// The predicted sky color in the given direction, as scene-linear RGB. The components are in
    /// the model's luminance units, commonly well above 1: exposure and gamma are applied by
    /// [`Display`](../display/struct.Display.html).
    pub fn colour(&self, azimuth: f64, elevation: f64) -> Color {
        Color::from(self.sky_xyy(azimuth, elevation)).as_rgb()
    }

    /// The predicted luminance Y alone in the given direction.
    pub fn luminance(&self, azimuth: f64, elevation: f64) -> f64 {
        self.sky_xyy(azimuth, elevation).big_y
    }

    /// The Perez distribution in the direction (θ, γ) relative to its value at the zenith.
    fn distribution(&self, coeffs: &[f64; 5], theta: f64, gamma: f64) -> f64 {
        perez(coeffs, theta, gamma) / perez(coeffs, 0.0, self.sun_theta)
    }
}

/// Evaluates `coefficient = slope * turbidity + intercept` for each of A to E.
fn distribution_coefficients(table: &[[f64; 2]; 5], turbidity: f64) -> [f64; 5] {
    let mut coeffs = [0.0; 5];
    for (coeff, row) in coeffs.iter_mut().zip(table.iter()) {
        *coeff = row[0] * turbidity + row[1];
    }
    coeffs
}

/// Zenith chromaticity: a quadratic in turbidity whose coefficients are cubics in the solar zenith
/// angle.
fn zenith_chromaticity(table: &[[f64; 4]; 3], turbidity: f64, sun_theta: f64) -> f64 {
    let t1 = sun_theta;
    let t2 = t1 * t1;
    let t3 = t2 * t1;
    let cubic = |c: &[f64; 4]| c[0] * t3 + c[1] * t2 + c[2] * t1 + c[3];
    cubic(&table[0]) * turbidity * turbidity + cubic(&table[1]) * turbidity + cubic(&table[2])
}

/// The Perez distribution function for one channel.
#[allow(clippy::many_single_char_names)]
fn perez(coeffs: &[f64; 5], theta: f64, gamma: f64) -> f64 {
    let [a, b, c, d, e] = *coeffs;
    let cos_gamma = gamma.cos();
    (1.0 + a * (b / theta.cos()).exp()) * (1.0 + c * (d * gamma).exp() + e * cos_gamma * cos_gamma)
}

/// Angular distance in radians between two directions given as (zenith angle, azimuth) in radians,
/// by the spherical law of cosines. Rounding can push the cosine just past ±1 for (anti)parallel
/// directions; those are pinned to 0 and π.
pub fn angle_between(theta_v: f64, phi_v: f64, theta: f64, phi: f64) -> f64 {
    let cos_psi = theta_v.sin() * theta.sin() * (phi - phi_v).cos() + theta_v.cos() * theta.cos();
    if cos_psi > 1.0 {
        0.0
    } else if cos_psi < -1.0 {
        PI
    } else {
        cos_psi.acos()
    }
}
