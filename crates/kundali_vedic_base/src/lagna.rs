//! Lagna (Ascendant) computation.
//!
//! Standard spherical-astronomy formula for the ecliptic degree rising on
//! the eastern horizon, given local sidereal time, obliquity and latitude.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 13.
//!
//! The formula divides by `cos(latitude)` through `tan(latitude)`; polar
//! latitudes (|phi| near 90 deg) are outside the supported range.

use kundali_frames::mean_obliquity_deg;
use kundali_time::{CivilDateTime, centuries_since_j2000, julian_date, sidereal_time_deg};

/// Ecliptic longitude of the Ascendant in degrees, not normalized.
///
/// Formula:
/// `Asc = atan2(cos(LST), -sin(LST)*cos(eps) - tan(phi)*sin(eps))`
///
/// The result lies in (-180, 180]; callers normalize to [0, 360).
pub fn ascendant_deg(lst_deg: f64, obliquity_deg: f64, latitude_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let phi = latitude_deg.to_radians();

    f64::atan2(
        lst.cos(),
        -lst.sin() * eps.cos() - phi.tan() * eps.sin(),
    )
    .to_degrees()
}

/// Tropical Ascendant for a civil date/time and observer location.
///
/// Chains local sidereal time (on the UT Julian date) with the mean
/// obliquity of the date. Not normalized.
pub fn ascendant_for(dt: &CivilDateTime, latitude_deg: f64, longitude_deg: f64) -> f64 {
    let lst = sidereal_time_deg(dt, longitude_deg);
    let eps = mean_obliquity_deg(centuries_since_j2000(julian_date(dt)));
    ascendant_deg(lst, eps, latitude_deg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::normalize_360;

    const EPS: f64 = 23.4393;

    #[test]
    fn equator_lst_zero_rises_cancer() {
        // Vernal equinox culminating: 90 deg is on the eastern horizon
        let asc = ascendant_deg(0.0, EPS, 0.0);
        assert!((asc - 90.0).abs() < 1e-10, "asc = {asc}");
    }

    #[test]
    fn equator_lst_180_rises_capricorn() {
        let asc = normalize_360(ascendant_deg(180.0, EPS, 0.0));
        assert!((asc - 270.0).abs() < 1e-10, "asc = {asc}");
    }

    #[test]
    fn equator_lst_90_rises_libra() {
        let asc = normalize_360(ascendant_deg(90.0, EPS, 0.0));
        assert!((asc - 180.0).abs() < 1e-10, "asc = {asc}");
    }

    #[test]
    fn sweep_covers_full_circle() {
        let mut hit = [false; 12];
        for i in 0..360 {
            let asc = normalize_360(ascendant_deg(i as f64, EPS, 28.6));
            hit[(asc / 30.0) as usize % 12] = true;
        }
        assert!(hit.iter().all(|&h| h), "some signs never rise: {hit:?}");
    }

    #[test]
    fn northern_latitude_shifts_ascendant() {
        let eq = normalize_360(ascendant_deg(30.0, EPS, 0.0));
        let north = normalize_360(ascendant_deg(30.0, EPS, 45.0));
        assert!((eq - north).abs() > 1.0);
    }

    #[test]
    fn delhi_j2000_noon() {
        let dt = CivilDateTime::new(2000, 1, 1, 12, 0, 0.0);
        let asc = normalize_360(ascendant_for(&dt, 28.6, 77.2));
        assert!((asc - 100.18).abs() < 0.1, "asc = {asc}");
    }
}
