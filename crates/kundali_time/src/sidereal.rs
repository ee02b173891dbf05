//! Greenwich and local mean sidereal time.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 12.4 (IAU 1982
//! GMST expressed directly in degrees for any instant of UT).

use crate::civil::CivilDateTime;
use crate::julian::{DAYS_PER_CENTURY, J2000_JD, julian_date_ut};

/// Greenwich Mean Sidereal Time at a UT Julian Date, in degrees [0, 360).
///
/// θ0 = 280.46061837 + 360.98564736629·D + 0.000387933·T² − T³/38710000
/// where D = JD − 2451545.0 and T = D / 36525.
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let d = jd_ut - J2000_JD;
    let t = d / DAYS_PER_CENTURY;
    let theta = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    theta.rem_euclid(360.0)
}

/// Local Mean Sidereal Time from GMST and observer east longitude.
///
/// Returns degrees in [0, 360).
pub fn local_sidereal_time_deg(gmst: f64, longitude_east_deg: f64) -> f64 {
    (gmst + longitude_east_deg).rem_euclid(360.0)
}

/// Local sidereal time for a civil date/time at an east longitude.
///
/// Sidereal time follows Earth rotation, so it is evaluated on UT without
/// Delta-T.
pub fn sidereal_time_deg(dt: &CivilDateTime, longitude_east_deg: f64) -> f64 {
    local_sidereal_time_deg(gmst_deg(julian_date_ut(dt)), longitude_east_deg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gmst_meeus_example_12a() {
        // 1987 Apr 10, 0h UT: 13h10m46.3668s = 197.693195 deg
        let g = gmst_deg(2_446_895.5);
        assert!((g - 197.693_195).abs() < 1e-5, "GMST = {g}");
    }

    #[test]
    fn gmst_meeus_example_12b() {
        // 1987 Apr 10, 19h21m00s UT: 128.7378734 deg
        let g = gmst_deg(2_446_896.306_25);
        assert!((g - 128.737_873_4).abs() < 1e-5, "GMST = {g}");
    }

    #[test]
    fn gmst_j2000_midnight() {
        // 2000-Jan-01 0h UT: 6h 39m 51.27s ≈ 99.967 deg
        let g = gmst_deg(2_451_544.5);
        assert!((g - 99.967_8).abs() < 0.01, "GMST = {g}");
    }

    #[test]
    fn lst_east_offset() {
        let lst = local_sidereal_time_deg(350.0, 20.0);
        assert!((lst - 10.0).abs() < 1e-12);
        let lst = local_sidereal_time_deg(10.0, -20.0);
        assert!((lst - 350.0).abs() < 1e-12);
    }

    #[test]
    fn sidereal_time_from_civil() {
        let dt = CivilDateTime::new(1987, 4, 10, 19, 21, 0.0);
        let lst = sidereal_time_deg(&dt, 0.0);
        assert!((lst - 128.737_873_4).abs() < 1e-4, "LST = {lst}");
    }

    #[test]
    fn sidereal_time_range() {
        for lon in [-180.0, -77.0, 0.0, 77.2, 180.0] {
            let dt = CivilDateTime::new(2010, 6, 15, 3, 45, -4.0);
            let lst = sidereal_time_deg(&dt, lon);
            assert!((0.0..360.0).contains(&lst), "LST out of range: {lst}");
        }
    }
}
