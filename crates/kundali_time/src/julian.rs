//! Day number and Julian Date from a civil date/time.
//!
//! Both use the standard civil-to-astronomical shift (January and February
//! count as months 13 and 14 of the previous year) and the Gregorian leap
//! correction `B = 2 - A + A/4` (A = century) for dates after 1582-10-04.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 7.

use crate::civil::CivilDateTime;
use crate::delta_t::delta_t_seconds;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Day base that places noon of the civil date on an integer.
const JD_NOON_BASE: f64 = 1_720_995.0;

/// Decimal places kept in a Julian Date.
const JD_DECIMALS: i32 = 7;

/// Year and month after moving January/February to the previous year.
fn shifted_year_month(dt: &CivilDateTime) -> (f64, f64) {
    if dt.month <= 2 {
        (dt.year as f64 - 1.0, dt.month as f64 + 12.0)
    } else {
        (dt.year as f64, dt.month as f64)
    }
}

/// Gregorian reform leap correction; zero for Julian-calendar dates.
fn gregorian_correction(dt: &CivilDateTime, shifted_year: f64) -> f64 {
    if dt.is_gregorian() {
        let a = (shifted_year / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    }
}

/// Continuous day count since J2000.0, in UT.
///
/// The timezone offset and the time of day are folded into the fractional
/// part, so 2000-01-01 12:00 UT is exactly 0.0.
pub fn day_number(dt: &CivilDateTime) -> f64 {
    let (y, m) = shifted_year_month(dt);
    let b = gregorian_correction(dt, y);
    let jd0 = (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + dt.day as f64
        + b
        - 1524.5;
    jd0 + dt.ut_hours() / 24.0 - J2000_JD
}

/// Julian Date with Delta-T applied, rounded to 7 decimal places.
///
/// Delta-T comes from [`delta_t_seconds`] at the mid-month decimal year,
/// and is 0 outside 1986-2050.
pub fn julian_date(dt: &CivilDateTime) -> f64 {
    compose_julian_date(dt, delta_t_seconds(dt.decimal_year()))
}

/// Julian Date in UT (no Delta-T), rounded to 7 decimal places.
pub fn julian_date_ut(dt: &CivilDateTime) -> f64 {
    compose_julian_date(dt, 0.0)
}

fn compose_julian_date(dt: &CivilDateTime, delta_t_s: f64) -> f64 {
    let (y, m) = shifted_year_month(dt);
    let b = gregorian_correction(dt, y);
    let mut jd = (365.25 * y).floor() + (30.6001 * (m + 1.0)).floor() + dt.day as f64
        + JD_NOON_BASE
        + b;

    // The Julian day starts at noon: morning hours belong to the previous one.
    let hours = dt.ut_hours() + delta_t_s / 3600.0;
    let fraction = if hours < 12.0 {
        jd -= 1.0;
        (hours + 12.0) / 24.0
    } else {
        (hours - 12.0) / 24.0
    };
    round_half_up(jd + fraction, JD_DECIMALS)
}

/// Round to `decimals` places, with ties going up.
///
/// Used to keep Julian Dates stable across floating-point implementations.
pub fn round_half_up(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale + 0.5).floor() / scale
}

/// Julian centuries elapsed since J2000.0.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ut(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> CivilDateTime {
        CivilDateTime::new(year, month, day, hour, minute, 0.0)
    }

    #[test]
    fn day_number_zero_at_j2000() {
        assert!(day_number(&ut(2000, 1, 1, 12, 0)).abs() < 1e-9);
    }

    #[test]
    fn day_number_one_day_later() {
        assert!((day_number(&ut(2000, 1, 2, 12, 0)) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn day_number_absorbs_timezone() {
        let local = CivilDateTime::new(2000, 1, 1, 17, 30, 5.5);
        assert!(day_number(&local).abs() < 1e-9);
    }

    #[test]
    fn jd_ut_j2000_noon() {
        assert_eq!(julian_date_ut(&ut(2000, 1, 1, 12, 0)), 2_451_545.0);
    }

    #[test]
    fn jd_ut_midnight_ends_in_half() {
        assert_eq!(julian_date_ut(&ut(2000, 1, 1, 0, 0)), 2_451_544.5);
    }

    #[test]
    fn jd_ut_meeus_sputnik() {
        // Meeus Example 7.a: 1957 Oct 4.81 = JD 2436116.31
        let dt = CivilDateTime::new(1957, 10, 4, 19, 26, 0.0);
        let jd = julian_date_ut(&dt);
        assert!((jd - 2_436_116.31).abs() < 1e-3, "jd = {jd}");
    }

    #[test]
    fn jd_ut_julian_calendar_date() {
        // Meeus Example 7.b: 333 Jan 27.5 = JD 1842713.0
        let jd = julian_date_ut(&ut(333, 1, 27, 12, 0));
        assert_eq!(jd, 1_842_713.0);
    }

    #[test]
    fn jd_ut_reform_days_are_consecutive() {
        let before = julian_date_ut(&ut(1582, 10, 4, 12, 0));
        let after = julian_date_ut(&ut(1582, 10, 15, 12, 0));
        assert_eq!(after - before, 1.0);
    }

    #[test]
    fn jd_includes_delta_t() {
        let dt = ut(2000, 1, 1, 12, 0);
        let jd = julian_date(&dt);
        let expected = 2_451_545.0 + delta_t_seconds(dt.decimal_year()) / 86_400.0;
        assert!((jd - expected).abs() < 1e-7, "jd = {jd}, expected {expected}");
    }

    #[test]
    fn jd_without_delta_t_outside_model() {
        let dt = ut(1900, 1, 1, 12, 0);
        assert_eq!(julian_date(&dt), julian_date_ut(&dt));
    }

    #[test]
    fn jd_and_day_number_agree() {
        let dt = CivilDateTime::new(1987, 4, 10, 19, 21, 0.0);
        let from_day = day_number(&dt) + J2000_JD;
        assert!((julian_date_ut(&dt) - from_day).abs() < 1e-6);
    }

    #[test]
    fn jd_wraps_into_previous_day() {
        // 00:30 at UTC+5:30 is 19:00 UT on the previous day.
        let local = CivilDateTime::new(2000, 1, 2, 0, 30, 5.5);
        let jd = julian_date_ut(&local);
        let expected = 2_451_544.5 + 19.0 / 24.0;
        assert!((jd - expected).abs() < 1e-7, "jd = {jd}");
    }

    #[test]
    fn extreme_years_stay_finite() {
        for year in [i32::MIN, i32::MAX] {
            let dt = ut(year, 1, 1, 12, 0);
            assert!(day_number(&dt).is_finite(), "day number for {year}");
            assert!(julian_date_ut(&dt).is_finite(), "jd for {year}");
            assert!(julian_date(&dt).is_finite(), "jd+dt for {year}");
        }
    }

    #[test]
    fn round_half_up_ties() {
        assert_eq!(round_half_up(1.25, 1), 1.3);
        assert_eq!(round_half_up(2.5, 0), 3.0);
        assert_eq!(round_half_up(-2.5, 0), -2.0);
    }

    #[test]
    fn centuries_roundtrip() {
        let jd = 2_460_000.5;
        let t = centuries_since_j2000(jd);
        assert!((t * DAYS_PER_CENTURY + J2000_JD - jd).abs() < 1e-9);
    }
}
