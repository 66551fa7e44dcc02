//! Configuration for the sky pipeline, read from RON. Every field has a default, so a file only
//! needs to mention what it changes:
//!
//! ```text
//! (
//!     latitude: 51.5,
//!     longitude: -0.12,
//!     turbidity: 2.5,
//! )
//! ```

use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// The turbidity range the sky model's coefficients were fitted over.
const FITTED_TURBIDITY: (f64, f64) = (2.0, 10.0);

/// Longest update interval a timer can hold, in seconds.
pub const MAX_UPDATE_INTERVAL: u64 = (std::i64::MAX / 1000) as u64;

/// Largest clock offset, in hours, either way: a century.
pub const MAX_TIME_OFFSET_HOURS: f64 = 100.0 * 366.0 * 24.0;

/// Observer, sky model and display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SkyConfig {
    /// Observer latitude in degrees, North positive.
    pub latitude: f64,
    /// Observer longitude in degrees, East positive.
    pub longitude: f64,
    /// Atmospheric turbidity for the sky model.
    pub turbidity: f64,
    /// Display gamma.
    pub gamma: f64,
    /// Display exposure scale.
    pub scaling: f64,
    /// Minimum number of seconds between sky recomputations.
    pub sky_update_interval: u64,
    /// Number of azimuth steps in the sky grid.
    pub naz: usize,
    /// Number of elevation steps in the sky grid.
    pub nel: usize,
    /// Hours added to the clock before working out where the sun is, for previewing other times
    /// of day.
    pub time_offset_hours: f64,
    /// Solar elevation in degrees at or below which the sky is left alone.
    pub night_threshold: f64,
}

impl Default for SkyConfig {
    fn default() -> SkyConfig {
        SkyConfig {
            latitude: -33.87,
            longitude: 151.21,
            turbidity: 3.0,
            gamma: 2.0,
            scaling: 15.0,
            sky_update_interval: 60,
            naz: 90,
            nel: 90,
            time_offset_hours: 0.0,
            night_threshold: -7.0,
        }
    }
}

impl SkyConfig {
    /// Parses and validates a configuration from RON text.
    pub fn from_ron_str(ron_str: &str) -> Result<SkyConfig, ConfigError> {
        let options = ron::Options::default();
        let config: SkyConfig = options
            .from_str(ron_str)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a RON configuration file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<SkyConfig, ConfigError> {
        let text = fs::read_to_string(path)?;
        SkyConfig::from_ron_str(&text)
    }

    /// Checks that every value is usable. Values that work but look unlikely, such as a turbidity
    /// outside the range the sky model was fitted for, are logged rather than rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.latitude >= -90.0 && self.latitude <= 90.0) {
            return Err(invalid("latitude", format!("{} is not within ±90°", self.latitude)));
        }
        if !(self.longitude >= -180.0 && self.longitude <= 180.0) {
            return Err(invalid("longitude", format!("{} is not within ±180°", self.longitude)));
        }
        if !(self.turbidity.is_finite() && self.turbidity > 0.0) {
            let reason = format!("{} is not a positive number", self.turbidity);
            return Err(invalid("turbidity", reason));
        }
        if !(self.gamma > 0.0) {
            return Err(invalid("gamma", format!("{} is not positive", self.gamma)));
        }
        if !(self.scaling > 0.0) {
            return Err(invalid("scaling", format!("{} is not positive", self.scaling)));
        }
        if self.naz == 0 {
            return Err(invalid("naz", "the grid needs at least one azimuth step".to_string()));
        }
        if self.nel == 0 {
            return Err(invalid("nel", "the grid needs at least one elevation step".to_string()));
        }
        if self.sky_update_interval > MAX_UPDATE_INTERVAL {
            return Err(invalid(
                "sky_update_interval",
                format!("{} is above {} seconds", self.sky_update_interval, MAX_UPDATE_INTERVAL),
            ));
        }
        if !(self.time_offset_hours.abs() <= MAX_TIME_OFFSET_HOURS) {
            return Err(invalid(
                "time_offset_hours",
                format!(
                    "{} is not within ±{} hours",
                    self.time_offset_hours, MAX_TIME_OFFSET_HOURS
                ),
            ));
        }
        if self.night_threshold.is_nan() {
            return Err(invalid("night_threshold", "must be a number".to_string()));
        }

        let (low, high) = FITTED_TURBIDITY;
        if self.turbidity < low || self.turbidity > high {
            warn!(
                "turbidity {} is outside the fitted range {}..={}; sky colors may be implausible",
                self.turbidity, low, high
            );
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = SkyConfig::from_ron_str("()").unwrap();
        assert_eq!(config, SkyConfig::default());
        assert_eq!(config.naz, 90);
        assert_eq!(config.sky_update_interval, 60);
        assert_eq!(config.night_threshold, -7.);
    }

    #[test]
    fn test_overrides() {
        let config = SkyConfig::from_ron_str(
            "(latitude: 51.5, longitude: -0.12, turbidity: 2.5, naz: 36, time_offset_hours: -3.5)",
        )
        .unwrap();
        assert_eq!(config.latitude, 51.5);
        assert_eq!(config.longitude, -0.12);
        assert_eq!(config.turbidity, 2.5);
        assert_eq!(config.naz, 36);
        assert_eq!(config.nel, 90);
        assert_eq!(config.time_offset_hours, -3.5);
        assert_eq!(config.gamma, 2.);
    }

    #[test]
    fn test_parse_error() {
        match SkyConfig::from_ron_str("(latitude: \"north\")") {
            Err(ConfigError::Parse(_)) => {}
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(SkyConfig::from_ron_str("(colour_depth: 8)").is_err());
    }

    #[test]
    fn test_invalid_values() {
        let cases: Vec<(&str, &str)> = vec![
            ("(latitude: 91.0)", "latitude"),
            ("(longitude: -180.5)", "longitude"),
            ("(turbidity: 0.0)", "turbidity"),
            ("(gamma: -2.0)", "gamma"),
            ("(scaling: 0.0)", "scaling"),
            ("(naz: 0)", "naz"),
            ("(nel: 0)", "nel"),
            ("(sky_update_interval: 1152921504606846976)", "sky_update_interval"),
            ("(sky_update_interval: 18446744073709551615)", "sky_update_interval"),
            ("(time_offset_hours: 1000000000000.0)", "time_offset_hours"),
            ("(time_offset_hours: -900000.0)", "time_offset_hours"),
        ];
        for (text, expected) in cases {
            match SkyConfig::from_ron_str(text) {
                Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, expected),
                other => panic!("{}: expected invalid {}, got {:?}", text, expected, other),
            }
        }
    }

    #[test]
    fn test_nan_is_invalid() {
        let config = SkyConfig {
            latitude: std::f64::NAN,
            ..SkyConfig::default()
        };
        assert!(config.validate().is_err());
        let config = SkyConfig {
            turbidity: std::f64::INFINITY,
            ..SkyConfig::default()
        };
        assert!(config.validate().is_err());
        let config = SkyConfig {
            time_offset_hours: std::f64::NAN,
            ..SkyConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_timer_limits_are_accepted() {
        let config = SkyConfig {
            sky_update_interval: MAX_UPDATE_INTERVAL,
            time_offset_hours: -MAX_TIME_OFFSET_HOURS,
            ..SkyConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unusual_turbidity_is_accepted() {
        let config = SkyConfig::from_ron_str("(turbidity: 12.0)").unwrap();
        assert_eq!(config.turbidity, 12.);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        match SkyConfig::from_path("/nonexistent/skyview.ron") {
            Err(ConfigError::Io(_)) => {}
            other => panic!("expected an io error, got {:?}", other),
        }
    }

    #[test]
    fn test_serialized_default_reads_back() {
        let text = ron::to_string(&SkyConfig::default()).unwrap();
        assert_eq!(SkyConfig::from_ron_str(&text).unwrap(), SkyConfig::default());
    }
}
