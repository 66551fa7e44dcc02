//! This module keeps a sky grid current as time passes. The host calls [`SkyUpdater::tick`] from
//! its frame loop; most ticks do nothing, and once the update interval has passed the sun is
//! moved to the current time and, if it is day, the grid is recomputed. At night the last daytime
//! grid is left in place: the host is expected to draw something else, and there's no point
//! evaluating a model that is meaningless with the sun below the horizon.

use chrono::{DateTime, Duration, Utc};

use crate::config::SkyConfig;
use crate::display::Display;
use crate::error::ConfigError;
use crate::skygrid::SkyGrid;
use crate::skymodel::SkyModel;
use crate::sun::Sun;

/// What a call to [`SkyUpdater::tick`] did.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UpdateOutcome {
    /// Too soon since the last update: nothing was recomputed.
    Skipped,
    /// The sun was moved and the grid recomputed.
    Day,
    /// The sun was moved, but it is below the night threshold so the grid was kept.
    Night,
}

/// Owns the whole sky pipeline and decides when to rerun it.
///
/// # Example
/// ```
/// # use skyview::config::SkyConfig;
/// # use skyview::updater::{SkyUpdater, UpdateOutcome};
/// # use chrono::{Duration, TimeZone, Utc};
/// let config = SkyConfig{latitude: 51.5, longitude: -0.12, naz: 12, nel: 6,
///                        ..SkyConfig::default()};
/// let mut updater = SkyUpdater::from_config(&config).unwrap();
/// let noon = Utc.with_ymd_and_hms(2014, 6, 21, 12, 0, 0).unwrap();
/// assert_eq!(updater.tick(noon), UpdateOutcome::Day);
/// assert_eq!(updater.tick(noon + Duration::seconds(10)), UpdateOutcome::Skipped);
/// ```
#[derive(Debug, Clone)]
pub struct SkyUpdater {
    sun: Sun,
    model: SkyModel,
    display: Display,
    grid: SkyGrid,
    interval: Duration,
    time_offset: Duration,
    night_threshold: f64,
    last_update: Option<DateTime<Utc>>,
    night: Option<bool>,
}

impl SkyUpdater {
    /// Validates the configuration and builds the sun, model, display and grid it describes.
    pub fn from_config(config: &SkyConfig) -> Result<SkyUpdater, ConfigError> {
        config.validate()?;
        let offset_ms = (config.time_offset_hours * 3_600_000.0).round() as i64;
        Ok(SkyUpdater {
            sun: Sun::new(config.latitude, config.longitude),
            model: SkyModel::with_turbidity(config.turbidity),
            display: Display {
                scaling: config.scaling,
                gamma: config.gamma,
            },
            grid: SkyGrid::new(config.naz, config.nel),
            interval: Duration::seconds(config.sky_update_interval as i64),
            time_offset: Duration::milliseconds(offset_ms),
            night_threshold: config.night_threshold,
            last_update: None,
            night: None,
        })
    }

    /// Reruns the pipeline if more than the update interval has passed since the last update, or
    /// if there hasn't been one yet. `now` is wall-clock time; the configured offset is added to it
    /// only for placing the sun, so the interval is always measured in real seconds.
    pub fn tick(&mut self, now: DateTime<Utc>) -> UpdateOutcome {
        if let Some(last) = self.last_update {
            if (now - last).num_seconds() <= self.interval.num_seconds() {
                return UpdateOutcome::Skipped;
            }
        }
        self.last_update = Some(now);

        match now.checked_add_signed(self.time_offset) {
            Some(sun_time) => self.sun.update_at(sun_time),
            None => {
                warn!("clock offset takes {} out of range; placing the sun without it", now);
                self.sun.update_at(now);
            }
        }
        let (azimuth, elevation) = self.sun.position();
        let night = elevation <= self.night_threshold;
        if self.night != Some(night) {
            let state = if night { "below" } else { "above" };
            info!(
                "sun at {:.1}° is {} the night threshold of {:.1}°",
                elevation, state, self.night_threshold
            );
            self.night = Some(night);
        }
        if night {
            return UpdateOutcome::Night;
        }

        self.model.set_solar_position(azimuth, elevation);
        self.grid.fill(&self.model, &self.display);
        let (columns, rows) = self.grid.dimensions();
        info!(
            "recomputed {}x{} sky grid for sun at azimuth {:.1}, elevation {:.1}",
            columns, rows, azimuth, elevation
        );
        UpdateOutcome::Day
    }

    /// Makes the next tick recompute whatever the time.
    pub fn force_update(&mut self) {
        self.last_update = None;
    }

    /// Moves the observer and forces an update on the next tick.
    pub fn set_location(&mut self, latitude: f64, longitude: f64) {
        self.sun.set_location(latitude, longitude);
        self.force_update();
    }

    /// The sun, as of the last update.
    pub fn sun(&self) -> &Sun {
        &self.sun
    }

    /// The sky model, with the sun where it was at the last daytime update.
    pub fn model(&self) -> &SkyModel {
        &self.model
    }

    /// The display settings.
    pub fn display(&self) -> &Display {
        &self.display
    }

    /// The most recently computed grid. Black until the first daytime update.
    pub fn grid(&self) -> &SkyGrid {
        &self.grid
    }

    /// The wall-clock time of the last update, if there has been one.
    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.last_update
    }

    /// Whether the last update found the sun below the night threshold. False before any update.
    pub fn is_night(&self) -> bool {
        self.night == Some(true)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::colors::RGBColor;
    use chrono::TimeZone;

    fn london() -> SkyUpdater {
        let config = SkyConfig {
            latitude: 51.5,
            longitude: -0.12,
            naz: 12,
            nel: 6,
            ..SkyConfig::default()
        };
        SkyUpdater::from_config(&config).unwrap()
    }

    fn midsummer(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2014, 6, 21, hour, 0, 0).unwrap()
    }

    const BLACK: RGBColor = RGBColor { r: 0., g: 0., b: 0. };

    #[test]
    fn test_first_tick_always_updates() {
        let mut updater = london();
        assert!(updater.last_update().is_none());
        assert_eq!(updater.grid().get(0, 3), Some(BLACK));
        assert_eq!(updater.tick(midsummer(12)), UpdateOutcome::Day);
        assert_eq!(updater.last_update(), Some(midsummer(12)));
        assert_ne!(updater.grid().get(0, 3), Some(BLACK));
        let (az, el) = updater.sun().position();
        assert!((az - 181.9).abs() <= 0.5);
        assert!((el - 61.9).abs() <= 0.5);
        let (model_az, model_el) = updater.model().solar_position();
        assert!((model_az - az).abs() <= 1e-9);
        assert!((model_el - el).abs() <= 1e-9);
    }

    #[test]
    fn test_interval_must_be_exceeded() {
        let mut updater = london();
        let start = midsummer(12);
        updater.tick(start);
        assert_eq!(updater.tick(start + Duration::seconds(30)), UpdateOutcome::Skipped);
        assert_eq!(updater.tick(start + Duration::seconds(60)), UpdateOutcome::Skipped);
        assert_eq!(updater.last_update(), Some(start));
        assert_eq!(updater.tick(start + Duration::seconds(61)), UpdateOutcome::Day);
        assert_eq!(updater.last_update(), Some(start + Duration::seconds(61)));
    }

    #[test]
    fn test_night_keeps_the_grid() {
        let mut updater = london();
        updater.tick(midsummer(12));
        let daytime = updater.grid().clone();
        assert!(!updater.is_night());
        assert_eq!(updater.tick(midsummer(23)), UpdateOutcome::Night);
        assert!(updater.is_night());
        assert_eq!(updater.grid(), &daytime);
        // the sun itself still moves
        assert!(updater.sun().position().1 < -7.);
    }

    #[test]
    fn test_threshold_is_configurable() {
        let config = SkyConfig {
            latitude: 51.5,
            longitude: -0.12,
            naz: 4,
            nel: 2,
            night_threshold: 20.,
            ..SkyConfig::default()
        };
        let mut updater = SkyUpdater::from_config(&config).unwrap();
        // about 18.6° up at 06:00
        assert_eq!(updater.tick(midsummer(6)), UpdateOutcome::Night);
    }

    #[test]
    fn test_time_offset_moves_the_sun_only() {
        let config = SkyConfig {
            latitude: 51.5,
            longitude: -0.12,
            naz: 4,
            nel: 2,
            time_offset_hours: 12.,
            ..SkyConfig::default()
        };
        let mut updater = SkyUpdater::from_config(&config).unwrap();
        // midnight on the clock, midday for the sun
        assert_eq!(updater.tick(midsummer(0)), UpdateOutcome::Day);
        assert!((updater.sun().position().1 - 61.9).abs() <= 0.5);
        assert_eq!(updater.last_update(), Some(midsummer(0)));
    }

    #[test]
    fn test_force_update() {
        let mut updater = london();
        updater.tick(midsummer(12));
        updater.force_update();
        assert_eq!(updater.tick(midsummer(12) + Duration::seconds(1)), UpdateOutcome::Day);
    }

    #[test]
    fn test_set_location_forces_update() {
        let mut updater = london();
        updater.tick(midsummer(12));
        updater.set_location(-33.87, 151.21);
        assert_eq!(updater.sun().location(), (-33.87, 151.21));
        // midday in London is late evening in Sydney
        assert_eq!(updater.tick(midsummer(12) + Duration::seconds(5)), UpdateOutcome::Night);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = SkyConfig {
            naz: 0,
            ..SkyConfig::default()
        };
        assert!(SkyUpdater::from_config(&config).is_err());
    }

    #[test]
    fn test_timer_values_that_do_not_fit_are_rejected() {
        let config = SkyConfig {
            sky_update_interval: 1 << 60,
            ..SkyConfig::default()
        };
        assert!(SkyUpdater::from_config(&config).is_err());
        let config = SkyConfig {
            time_offset_hours: 1e12,
            ..SkyConfig::default()
        };
        assert!(SkyUpdater::from_config(&config).is_err());
    }

    #[test]
    fn test_longest_timer_values_build_and_tick() {
        let config = SkyConfig {
            latitude: 51.5,
            longitude: -0.12,
            naz: 4,
            nel: 2,
            sky_update_interval: crate::config::MAX_UPDATE_INTERVAL,
            time_offset_hours: crate::config::MAX_TIME_OFFSET_HOURS,
            ..SkyConfig::default()
        };
        let mut updater = SkyUpdater::from_config(&config).unwrap();
        updater.tick(midsummer(12));
        assert_eq!(updater.tick(midsummer(13)), UpdateOutcome::Skipped);
    }

    #[test]
    fn test_offset_past_the_end_of_time_falls_back_to_the_clock() {
        let config = SkyConfig {
            latitude: 51.5,
            longitude: -0.12,
            naz: 4,
            nel: 2,
            time_offset_hours: 12.,
            ..SkyConfig::default()
        };
        let mut updater = SkyUpdater::from_config(&config).unwrap();
        let last_instant = DateTime::<Utc>::MAX_UTC;
        updater.tick(last_instant);
        assert_eq!(updater.last_update(), Some(last_instant));
        assert!(updater.sun().position().1.is_finite());
    }
}
