//! Mean obliquity of the ecliptic, linear in time.
//!
//! ε = 23°26'21.448" − 46.8150" T, the first two terms of the IAU 1980
//! expression. Higher-order terms stay below 0.0001 deg within a few
//! centuries of J2000 and are dropped.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 22.2.

/// Mean obliquity at J2000.0 in degrees (23°26'21.448").
pub const OBLIQUITY_J2000_DEG: f64 = 23.0 + 26.0 / 60.0 + 21.448 / 3600.0;

/// Change of the mean obliquity per Julian century, in degrees (−46.8150").
pub const OBLIQUITY_RATE_DEG_PER_CENTURY: f64 = -46.815 / 3600.0;

/// Mean obliquity of the ecliptic in degrees.
///
/// # Arguments
/// * `t`: Julian centuries since J2000.0: `(JD - 2451545.0) / 36525.0`
pub fn mean_obliquity_deg(t: f64) -> f64 {
    OBLIQUITY_J2000_DEG + OBLIQUITY_RATE_DEG_PER_CENTURY * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_at_j2000() {
        assert!((mean_obliquity_deg(0.0) - 23.439_291_1).abs() < 1e-7);
    }

    #[test]
    fn decreases_with_time() {
        assert!(mean_obliquity_deg(1.0) < mean_obliquity_deg(0.0));
        assert!(mean_obliquity_deg(-1.0) > mean_obliquity_deg(0.0));
    }

    #[test]
    fn one_century_drift() {
        let diff = mean_obliquity_deg(1.0) - mean_obliquity_deg(0.0);
        assert!((diff + 0.013_004_2).abs() < 1e-6, "drift = {diff}");
    }

    #[test]
    fn meeus_example_22a() {
        // 1987 Apr 10 0h TD, T = -0.127296372348: ε0 = 23°26'27.407" = 23.440946
        let eps = mean_obliquity_deg(-0.127_296_372_348);
        assert!((eps - 23.440_946).abs() < 1e-5, "eps = {eps}");
    }
}
