//! Lahiri ayanamsa as a quadratic in time.
//!
//! The ayanamsa is the angular offset between the tropical zodiac (defined
//! by the vernal equinox) and the sidereal zodiac (anchored to the fixed
//! stars). As the equinox precesses westward, the ayanamsa grows by about
//! 50.3" per year.
//!
//! Model: `aya(T) = 22.460148 + 1.396042·T + 0.000308·T²` degrees, with T in
//! Julian centuries since 1900.0, calibrated to the Lahiri (Chitrapaksha)
//! reference. The month and day of the date enter as a linear fraction of
//! the year.
//!
//! The year must always be the full year (1987, not 87); there is no
//! two-digit shorthand.

use kundali_time::CivilDateTime;

use crate::util::normalize_360;

/// Lahiri ayanamsa at 1900.0 in degrees.
pub const AYANAMSA_1900_DEG: f64 = 22.460_148;

/// Linear rate, degrees per century.
pub const AYANAMSA_RATE_DEG_PER_CENTURY: f64 = 1.396_042;

/// Quadratic coefficient, degrees per century squared.
pub const AYANAMSA_ACCEL_DEG_PER_CENTURY2: f64 = 0.000_308;

/// Reference year of the model.
const EPOCH_YEAR: f64 = 1900.0;

/// Fractional year from month and day, linear across the year.
fn year_fraction(month: u32, day: u32) -> f64 {
    (month as f64 - 1.0) / 12.0 + (day as f64 - 1.0) / 365.25
}

/// Ayanamsa in degrees for a calendar date.
///
/// # Arguments
/// * `year`: full (four-digit) year
/// * `month`: 1-12
/// * `day`: day of month
pub fn ayanamsa_deg(year: i32, month: u32, day: u32) -> f64 {
    let t = (year as f64 + year_fraction(month, day) - EPOCH_YEAR) / 100.0;
    AYANAMSA_1900_DEG + AYANAMSA_RATE_DEG_PER_CENTURY * t + AYANAMSA_ACCEL_DEG_PER_CENTURY2 * t * t
}

/// Ayanamsa in degrees for the civil date of a birth record.
pub fn ayanamsa_for_date(dt: &CivilDateTime) -> f64 {
    ayanamsa_deg(dt.year, dt.month, dt.day)
}

/// Sidereal longitude (tropical minus ayanamsa) in [0, 360).
pub fn sidereal_longitude(tropical_deg: f64, ayanamsa_deg: f64) -> f64 {
    normalize_360(tropical_deg - ayanamsa_deg)
}
