//! This module works out where the sun is in the sky for an observer on the ground. The method is
//! the classic low-precision one: the sun's ecliptic longitude from a linear mean anomaly with a
//! first-order eccentricity correction, rotated into right ascension and declination, then into
//! altitude and azimuth using local sidereal time. It is good to a fraction of a degree, which is
//! plenty for placing the sun on a sky background.
//!
//! Angles are in degrees throughout the public interface. Azimuth is measured clockwise from North
//! and lies in [0, 360); elevation is positive above the horizon.

use std::f64::consts::PI;

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::sidereal::{self, days_in_year, gmt_to_gst, gst_to_lst, hour_angle};

/// Ecliptic longitude of the sun at the 1980 epoch, in degrees.
pub const EPSILON_G: f64 = 278.833540;
/// Ecliptic longitude of perigee at the 1980 epoch, in degrees.
pub const OMEGA_G: f64 = 282.596403;
/// Eccentricity of the earth's orbit.
pub const ECCENTRICITY: f64 = 0.016718;
/// Obliquity of the ecliptic, in degrees.
pub const OBLIQUITY: f64 = 23.441884;

/// Which side of the equator the observer is on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hemisphere {
    /// Latitude zero or above.
    North,
    /// Latitude below zero.
    South,
}

/// Which side of the Greenwich meridian the observer is on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LongitudeDirection {
    /// Longitude zero or above.
    East,
    /// Longitude below zero.
    West,
}

/// An observer's location together with the most recently computed position of the sun.
///
/// The position only changes when one of the update methods is called; [`position`] just reads it
/// back.
///
/// # Example
/// ```
/// # use skyview::sun::Sun;
/// # use chrono::{TimeZone, Utc};
/// // Sydney, half past midday local time in midsummer
/// let sun = Sun::at(-33.87, 151.21, Utc.with_ymd_and_hms(2014, 12, 21, 2, 30, 0).unwrap());
/// let (azimuth, elevation) = sun.position();
/// assert!(elevation > 70.);
/// // in the southern hemisphere the midday sun is to the north
/// assert!(azimuth > 270. || azimuth < 90.);
/// ```
///
/// [`position`]: #method.position
#[derive(Debug, Clone, PartialEq)]
pub struct Sun {
    latitude: f64,
    longitude: f64,
    hemisphere: Hemisphere,
    longitude_direction: LongitudeDirection,
    azimuth: f64,
    elevation: f64,
}

impl Sun {
    /// Creates an observer at the given signed latitude and longitude (degrees, North and East
    /// positive) and computes the sun's position for the current time.
    pub fn new(latitude: f64, longitude: f64) -> Sun {
        let mut sun = Sun::unpositioned(latitude, longitude);
        sun.update_now();
        sun
    }

    /// Creates an observer and computes the sun's position at the given instant, without looking
    /// at the system clock.
    pub fn at(latitude: f64, longitude: f64, time: DateTime<Utc>) -> Sun {
        let mut sun = Sun::unpositioned(latitude, longitude);
        sun.update_at(time);
        sun
    }

    fn unpositioned(latitude: f64, longitude: f64) -> Sun {
        let mut sun = Sun {
            latitude: 0.0,
            longitude: 0.0,
            hemisphere: Hemisphere::North,
            longitude_direction: LongitudeDirection::East,
            azimuth: 0.0,
            elevation: 0.0,
        };
        sun.store_location(latitude, longitude);
        sun
    }

    fn store_location(&mut self, latitude: f64, longitude: f64) {
        self.latitude = latitude.abs();
        self.hemisphere = if latitude >= 0.0 {
            Hemisphere::North
        } else {
            Hemisphere::South
        };
        self.longitude = longitude.abs();
        self.longitude_direction = if longitude >= 0.0 {
            LongitudeDirection::East
        } else {
            LongitudeDirection::West
        };
    }

    /// Moves the observer and immediately recomputes the sun's position for the current time.
    pub fn set_location(&mut self, latitude: f64, longitude: f64) {
        self.store_location(latitude, longitude);
        self.update_now();
    }

    /// The observer's signed latitude and longitude, in degrees.
    pub fn location(&self) -> (f64, f64) {
        let lat = match self.hemisphere {
            Hemisphere::North => self.latitude,
            Hemisphere::South => -self.latitude,
        };
        let lon = match self.longitude_direction {
            LongitudeDirection::East => self.longitude,
            LongitudeDirection::West => -self.longitude,
        };
        (lat, lon)
    }

    /// The observer's hemisphere.
    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    /// Whether the observer is east or west of Greenwich.
    pub fn longitude_direction(&self) -> LongitudeDirection {
        self.longitude_direction
    }

    /// Recomputes the sun's position for a UTC date and time.
    ///
    /// No validation is done and nothing here panics: any year is accepted, although years far
    /// from 1980 take time proportional to their distance from it. A month outside 1 to 12 leaves
    /// the position NaN.
    pub fn update(&mut self, year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) {
        let (ra, dec) = solar_ra_dec(year, month, day);
        let gst = gmt_to_gst(hour, minute, second, day, month, year);
        let lst = gst_to_lst(gst, self.longitude, self.longitude_direction);
        let ha = hour_angle(ra, lst);
        let (lat, _) = self.location();
        let (azimuth, elevation) = equatorial_to_horizon(ha, dec, lat);
        self.azimuth = azimuth;
        self.elevation = elevation;
        debug!(
            "sun at {:04}-{:02}-{:02} {:02}:{:02}:{:02} UTC: azimuth {:.2}, elevation {:.2}",
            year, month, day, hour, minute, second, azimuth, elevation
        );
    }

    /// Recomputes the sun's position for the given instant. Sub-second precision is dropped.
    pub fn update_at(&mut self, time: DateTime<Utc>) {
        self.update(
            time.year(),
            time.month(),
            time.day(),
            time.hour(),
            time.minute(),
            f64::from(time.second()),
        );
    }

    /// Recomputes the sun's position for the current time according to the system clock.
    pub fn update_now(&mut self) {
        self.update_at(Utc::now());
    }

    /// The last computed position of the sun as `(azimuth, elevation)`, in degrees.
    pub fn position(&self) -> (f64, f64) {
        (self.azimuth, self.elevation)
    }

    /// Whether the sun was at or below the given elevation (degrees) at the last update.
    pub fn is_night(&self, threshold: f64) -> bool {
        self.elevation <= threshold
    }
}

/// The sun's right ascension (hours) and declination (degrees) at 0h UT on the given date.
///
/// The day count runs from 1980 January 0.0, the epoch of [`EPSILON_G`] and [`OMEGA_G`]; the mean
/// anomaly grows linearly from there and is corrected to first order in the eccentricity.
pub fn solar_ra_dec(year: i32, month: u32, day: u32) -> (f64, f64) {
    // days from the start of the year to the epoch, or from the epoch to the start of the year
    let mut days = 0.0;
    if year < 1980 {
        for y in year..1980 {
            days -= days_in_year(y);
        }
    } else {
        for y in 1981..=year {
            days += days_in_year(y);
        }
    }
    days += sidereal::day_of_year(year, month, day);

    let n = (360.0 / 365.2422 * days).rem_euclid(360.0);
    let mean_anomaly = (n + EPSILON_G - OMEGA_G).rem_euclid(360.0);
    let equation_of_centre = 360.0 / PI * ECCENTRICITY * mean_anomaly.to_radians().sin();
    let longitude = (n + equation_of_centre + EPSILON_G).rem_euclid(360.0);

    ecliptic_to_equatorial(longitude, 0.0)
}

/// Converts ecliptic longitude and latitude (degrees) to right ascension (hours, [0, 24)) and
/// declination (degrees).
pub fn ecliptic_to_equatorial(longitude: f64, latitude: f64) -> (f64, f64) {
    let (sin_l, cos_l) = longitude.to_radians().sin_cos();
    let (sin_b, cos_b) = latitude.to_radians().sin_cos();
    let (sin_e, cos_e) = OBLIQUITY.to_radians().sin_cos();

    let sin_dec = sin_b * cos_e + cos_b * sin_e * sin_l;
    let dec = sin_dec.asin().to_degrees();

    let y = sin_l * cos_e - latitude.to_radians().tan() * sin_e;
    let x = cos_l;
    let mut ra = y.atan2(x).to_degrees();
    if ra < 0.0 {
        ra += 360.0;
    }
    (ra / 15.0, dec)
}

/// Converts hour angle (hours), declination and signed latitude (degrees) to horizon coordinates
/// `(azimuth, altitude)` in degrees.
///
/// The azimuth comes from an arccosine, which can't tell east from west; the sign of the sine of
/// the hour angle decides, and the result is brought into [0, 360). On the meridian the arccosine
/// argument is ±1 and rounding can push it just outside [-1, 1], giving a NaN azimuth. Directly
/// overhead the azimuth is undefined and comes out as whatever direction rounding picks.
pub fn equatorial_to_horizon(hour_angle: f64, declination: f64, latitude: f64) -> (f64, f64) {
    let h = (hour_angle * 15.0).to_radians();
    let (sin_dec, cos_dec) = declination.to_radians().sin_cos();
    let (sin_lat, cos_lat) = latitude.to_radians().sin_cos();

    let sin_alt = sin_dec * sin_lat + cos_dec * cos_lat * h.cos();
    let alt = sin_alt.asin();

    let cos_az = (sin_dec - sin_lat * sin_alt) / (cos_lat * alt.cos());
    let mut az = cos_az.acos();
    if h.sin() > 0.0 {
        az = 2.0 * PI - az;
    }
    (az.to_degrees().rem_euclid(360.0), alt.to_degrees())
}
