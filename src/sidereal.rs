//! Calendar and sidereal-time arithmetic for the solar ephemeris: leap years, day numbers, Julian
//! dates, and the conversion from UTC through Greenwich sidereal time to local sidereal time and
//! hour angle. The methods are the low-precision pocket-calculator ones, good to a few seconds of
//! sidereal time over the decades around 1980, which is far finer than a sky background needs.
//!
//! All times here are in hours and all longitudes in degrees.

use crate::sun::LongitudeDirection;

/// Days elapsed before the first of each month in a common year. February starts on day 30 rather
/// than day 31, so February dates in common years are numbered one day early; March onwards is
/// unaffected. The sun moves about a degree a day, well inside what the rest of the model gets
/// wrong, and the table is kept as it is so that positions match those the display has always
/// shown.
pub static DAYS_BEFORE_MONTH: [u32; 12] = [0, 30, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Days elapsed before the first of each month in a leap year.
pub static DAYS_BEFORE_MONTH_LEAP: [u32; 12] =
    [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

/// Gregorian leap year rule: every fourth year, except centuries not divisible by 400.
///
/// # Example
/// ```
/// # use skyview::sidereal::is_leap_year;
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    if year % 4 != 0 {
        return false;
    }
    if year % 100 != 0 {
        return true;
    }
    year % 400 == 0
}

/// Number of days in the given year.
pub fn days_in_year(year: i32) -> f64 {
    if is_leap_year(year) {
        366.0
    } else {
        365.0
    }
}

/// Day number within the year, with January 1st as day 1. Days past the end of the month are
/// simply counted on; a month outside 1 to 12 has no table entry and gives NaN.
pub fn day_of_year(year: i32, month: u32, day: u32) -> f64 {
    let table = if is_leap_year(year) {
        &DAYS_BEFORE_MONTH_LEAP
    } else {
        &DAYS_BEFORE_MONTH
    };
    match table.get((month as usize).wrapping_sub(1)) {
        Some(&before) => f64::from(before) + f64::from(day),
        None => std::f64::NAN,
    }
}

/// Julian date at 0h UT on the given (possibly fractional) day of the month. Dates after
/// 1582-10-15 get the Gregorian correction; earlier ones are treated as Julian calendar dates.
///
/// # Example
/// ```
/// # use skyview::sidereal::julian_date;
/// // noon on 2000-01-01, the J2000 epoch
/// assert_eq!(julian_date(1.5, 1, 2000), 2451545.0);
/// ```
pub fn julian_date(day: f64, month: u32, year: i32) -> f64 {
    // January and February count as months 13 and 14 of the previous year
    let (y, m) = if month == 1 || month == 2 {
        (f64::from(year) - 1.0, f64::from(month) + 12.0)
    } else {
        (f64::from(year), f64::from(month))
    };
    let gregorian = year > 1582
        || (year == 1582 && month > 10)
        || (year == 1582 && month == 10 && day > 15.0);
    let b = if gregorian {
        let a = (y / 100.0) as i64;
        2 - a + a / 4
    } else {
        0
    };
    let c = (365.25 * y) as i64;
    let d = (30.6001 * (m + 1.0)) as i64;
    (b + c + d) as f64 + day + 1720994.5
}

/// The per-year constant B used to get Greenwich sidereal time at 0h UT from the day number: GST at
/// 0h on day `n` of `year` is `0.0657098 n - B`.
pub fn b_constant(year: i32) -> f64 {
    let jd = julian_date(0.0, 1, year);
    let s = jd - 2415020.0;
    let t = s / 36525.0;
    let r = 6.6460656 + 2400.051262 * t + 0.00002581 * t * t;
    let u = r - 24.0 * (f64::from(year) - 1900.0);
    24.0 - u
}

/// Converts a UTC (Greenwich mean) time on the given date to Greenwich sidereal time in hours. The
/// result is brought back into range with a single wrap of 24 hours.
pub fn gmt_to_gst(hour: u32, minute: u32, second: f64, day: u32, month: u32, year: i32) -> f64 {
    let t0 = day_of_year(year, month, day) * 0.0657098 - b_constant(year);
    let gmt = f64::from(hour) + f64::from(minute) / 60.0 + second / 3600.0;
    let gst = gmt * 1.002738 + t0;
    if gst > 24.0 {
        gst - 24.0
    } else if gst < 0.0 {
        gst + 24.0
    } else {
        gst
    }
}

/// Converts Greenwich sidereal time to local sidereal time at the given longitude, a magnitude in
/// degrees with its direction given separately.
pub fn gst_to_lst(gst: f64, longitude: f64, direction: LongitudeDirection) -> f64 {
    let offset = longitude / 15.0;
    let mut lst = match direction {
        LongitudeDirection::West => gst - offset,
        LongitudeDirection::East => gst + offset,
    };
    if lst > 24.0 {
        lst -= 24.0;
    }
    if lst < 0.0 {
        lst += 24.0;
    }
    lst
}

/// Hour angle in hours of an object with the given right ascension (hours), at the given local
/// sidereal time.
pub fn hour_angle(right_ascension: f64, lst: f64) -> f64 {
    let ha = lst - right_ascension;
    if ha < 0.0 {
        ha + 24.0
    } else {
        ha
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2012));
        assert!(is_leap_year(2016));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2013));
        assert!(!is_leap_year(2014));
    }

    #[test]
    fn test_day_of_year_tables() {
        assert_eq!(day_of_year(2014, 1, 1), 1.);
        // the common-year table puts February one day early
        assert_eq!(day_of_year(2014, 2, 1), 31.);
        assert_eq!(day_of_year(2014, 3, 1), 60.);
        assert_eq!(day_of_year(2014, 12, 31), 365.);
        assert_eq!(day_of_year(2016, 2, 1), 32.);
        assert_eq!(day_of_year(2016, 3, 1), 61.);
        assert_eq!(day_of_year(2016, 12, 31), 366.);
    }

    #[test]
    fn test_month_without_table_entry_is_nan() {
        assert!(day_of_year(2014, 0, 1).is_nan());
        assert!(day_of_year(2014, 13, 1).is_nan());
        assert!(day_of_year(2016, std::u32::MAX, 1).is_nan());
        assert!(gmt_to_gst(12, 0, 0., 1, 13, 2014).is_nan());
    }

    #[test]
    fn test_day_past_end_of_month_counts_on() {
        assert_eq!(day_of_year(2014, 1, 32), day_of_year(2014, 2, 2));
        assert_eq!(day_of_year(2014, 12, std::u32::MAX), 334. + f64::from(std::u32::MAX));
    }

    #[test]
    fn test_julian_dates() {
        // 1980 January 0.0, the ephemeris epoch
        assert_eq!(julian_date(0.0, 1, 1980), 2444238.5);
        assert_eq!(julian_date(1.5, 1, 2000), 2451545.0);
        // last day of the Julian calendar: no Gregorian correction
        assert_eq!(julian_date(4.0, 10, 1582), 2299159.5);
        assert_eq!(julian_date(16.0, 10, 1582), 2299161.5);
    }

    #[test]
    fn test_b_constant() {
        assert!((b_constant(1980) - 17.411473).abs() <= 1e-5);
        assert!((b_constant(2014) - 17.361172).abs() <= 1e-5);
    }

    #[test]
    fn test_gst() {
        // 1980-04-22 14:36:51.67 UT is 4h 40m 5.23s GST
        let gst = gmt_to_gst(14, 36, 51.67, 22, 4, 1980);
        assert!((gst - 4.668119).abs() <= 1e-4);
    }

    #[test]
    fn test_gst_wraps_past_midnight() {
        let gst = gmt_to_gst(23, 0, 0., 31, 12, 2014);
        assert!((gst - 5.685879).abs() <= 1e-5);
        assert!(gst >= 0. && gst < 24.);
    }

    #[test]
    fn test_lst_offsets_and_wraps() {
        assert_eq!(gst_to_lst(5., 30., LongitudeDirection::East), 7.);
        assert_eq!(gst_to_lst(23.5, 30., LongitudeDirection::East), 1.5);
        assert_eq!(gst_to_lst(1., 30., LongitudeDirection::West), 23.);
    }

    #[test]
    fn test_hour_angle_wraps() {
        assert_eq!(hour_angle(3., 5.), 2.);
        assert_eq!(hour_angle(5., 3.), 22.);
    }
}
