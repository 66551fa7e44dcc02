extern crate chrono;
extern crate skyview;

use chrono::{Duration, TimeZone, Utc};
use skyview::prelude::*;

#[test]
fn sun_to_pixels() {
    let sun = Sun::at(51.5, -0.12, Utc.with_ymd_and_hms(2014, 6, 21, 18, 0, 0).unwrap());
    let (azimuth, elevation) = sun.position();
    // evening in London: low in the west-northwest
    assert!(azimuth > 270. && azimuth < 300.);
    assert!(elevation > 10. && elevation < 25.);

    let mut sky = SkyModel::new();
    sky.set_solar_position(azimuth, elevation);
    let display = Display::default();
    let toward_sun = display.apply(sky.colour(azimuth, elevation)).to_rgb8();
    let overhead = display.apply(sky.colour(azimuth + 180., 80.)).to_rgb8();
    // brighter near the sun, and blue overhead
    assert!(u32::from(toward_sun[0]) > u32::from(overhead[0]));
    assert!(overhead[2] > overhead[0]);
}

#[test]
fn config_to_grid() {
    let config =
        SkyConfig::from_ron_str("(latitude: 51.5, longitude: -0.12, naz: 24, nel: 6)").unwrap();
    let mut updater = SkyUpdater::from_config(&config).unwrap();
    let morning = Utc.with_ymd_and_hms(2014, 6, 21, 9, 0, 0).unwrap();
    assert_eq!(updater.tick(morning), UpdateOutcome::Day);

    let grid = updater.grid();
    assert_eq!(grid.dimensions(), (25, 7));
    let (sun_az, _) = updater.sun().position();
    // the brightest horizon-adjacent sample is on the sun's side of the sky
    let (brightest_az, _, _) = grid
        .samples()
        .filter(|&(_, el, _)| el == 15.)
        .fold((0., 0., -1.), |best, (az, el, c)| {
            let lum = c.r + c.g + c.b;
            if lum > best.2 {
                (az, el, lum)
            } else {
                best
            }
        });
    let diff = (brightest_az - sun_az).abs();
    let diff = if diff > 180. { 360. - diff } else { diff };
    assert!(diff <= 15., "brightest at {}, sun at {}", brightest_az, sun_az);

    let mut csv = Vec::new();
    grid.write_csv(&mut csv).unwrap();
    assert_eq!(String::from_utf8(csv).unwrap().lines().count(), 25 * 7 + 1);

    assert_eq!(updater.tick(morning + Duration::seconds(59)), UpdateOutcome::Skipped);
}

#[test]
fn a_day_in_sydney() {
    let config = SkyConfig {
        naz: 8,
        nel: 4,
        ..SkyConfig::default()
    };
    let mut updater = SkyUpdater::from_config(&config).unwrap();
    let start = Utc.with_ymd_and_hms(2014, 12, 20, 14, 0, 0).unwrap();
    let mut outcomes = Vec::new();
    for hour in 0..24 {
        outcomes.push(updater.tick(start + Duration::hours(hour)));
    }
    // midsummer: long days, short nights
    let days = outcomes.iter().filter(|&&o| o == UpdateOutcome::Day).count();
    let nights = outcomes.iter().filter(|&&o| o == UpdateOutcome::Night).count();
    assert_eq!(days + nights, 24);
    assert!(days >= 14 && days <= 17, "{} daytime updates", days);
    assert!(nights >= 7, "{} night updates", nights);
}
