//! Moon longitude from a truncated Meeus periodic series.
//!
//! Five fundamental arguments (L', D, M, M', F) as quartics in Julian
//! centuries from J2000.0, the longitude terms of Meeus Table 47.A, and
//! the three additive perturbations (Venus, Jupiter, flattening).
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 47.

use crate::util::normalize_360;

/// Fundamental lunar arguments in degrees (not normalized).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarArguments {
    /// Moon's mean longitude L'.
    pub mean_longitude: f64,
    /// Mean elongation D.
    pub elongation: f64,
    /// Sun's mean anomaly M.
    pub sun_anomaly: f64,
    /// Moon's mean anomaly M'.
    pub moon_anomaly: f64,
    /// Argument of latitude F.
    pub latitude_arg: f64,
}

impl LunarArguments {
    pub fn at(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        Self {
            mean_longitude: 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2
                + t3 / 538_841.0
                - t4 / 65_194_000.0,
            elongation: 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2
                + t3 / 545_868.0
                - t4 / 113_065_000.0,
            sun_anomaly: 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2
                + t3 / 24_490_000.0,
            moon_anomaly: 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2
                + t3 / 69_699.0
                - t4 / 14_712_000.0,
            latitude_arg: 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2
                - t3 / 3_526_000.0
                + t4 / 863_310_000.0,
        }
    }
}

/// One longitude term: multiples of D, M, M', F and the sine coefficient
/// in 1e-6 degrees.
struct Term {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    coeff: f64,
}

const fn term(d: i8, m: i8, mp: i8, f: i8, coeff: f64) -> Term {
    Term { d, m, mp, f, coeff }
}

#[rustfmt::skip]
const LONGITUDE_TERMS: [Term; 59] = [
    term(0, 0, 1, 0, 6_288_774.0),
    term(2, 0, -1, 0, 1_274_027.0),
    term(2, 0, 0, 0, 658_314.0),
    term(0, 0, 2, 0, 213_618.0),
    term(0, 1, 0, 0, -185_116.0),
    term(0, 0, 0, 2, -114_332.0),
    term(2, 0, -2, 0, 58_793.0),
    term(2, -1, -1, 0, 57_066.0),
    term(2, 0, 1, 0, 53_322.0),
    term(2, -1, 0, 0, 45_758.0),
    term(0, 1, -1, 0, -40_923.0),
    term(1, 0, 0, 0, -34_720.0),
    term(0, 1, 1, 0, -30_383.0),
    term(2, 0, 0, -2, 15_327.0),
    term(0, 0, 1, 2, -12_528.0),
    term(0, 0, 1, -2, 10_980.0),
    term(4, 0, -1, 0, 10_675.0),
    term(0, 0, 3, 0, 10_034.0),
    term(4, 0, -2, 0, 8_548.0),
    term(2, 1, -1, 0, -7_888.0),
    term(2, 1, 0, 0, -6_766.0),
    term(1, 0, -1, 0, -5_163.0),
    term(1, 1, 0, 0, 4_987.0),
    term(2, -1, 1, 0, 4_036.0),
    term(2, 0, 2, 0, 3_994.0),
    term(4, 0, 0, 0, 3_861.0),
    term(2, 0, -3, 0, 3_665.0),
    term(0, 1, -2, 0, -2_689.0),
    term(2, 0, -1, 2, -2_602.0),
    term(2, -1, -2, 0, 2_390.0),
    term(1, 0, 1, 0, -2_348.0),
    term(2, -2, 0, 0, 2_236.0),
    term(0, 1, 2, 0, -2_120.0),
    term(0, 2, 0, 0, -2_069.0),
    term(2, -2, -1, 0, 2_048.0),
    term(2, 0, 1, -2, -1_773.0),
    term(2, 0, 0, 2, -1_595.0),
    term(4, -1, -1, 0, 1_215.0),
    term(0, 0, 2, 2, -1_110.0),
    term(3, 0, -1, 0, -892.0),
    term(2, 1, 1, 0, -810.0),
    term(4, -1, -2, 0, 759.0),
    term(0, 2, -1, 0, -713.0),
    term(2, 2, -1, 0, -700.0),
    term(2, 1, -2, 0, 691.0),
    term(2, -1, 0, -2, 596.0),
    term(4, 0, 1, 0, 549.0),
    term(0, 0, 4, 0, 537.0),
    term(4, -1, 0, 0, 520.0),
    term(1, 0, -2, 0, -487.0),
    term(2, 1, 0, -2, -399.0),
    term(0, 0, 2, -2, -381.0),
    term(1, 1, 1, 0, 351.0),
    term(3, 0, -2, 0, -340.0),
    term(4, 0, -3, 0, 330.0),
    term(2, -1, 2, 0, 327.0),
    term(0, 2, 1, 0, -323.0),
    term(1, 1, -1, 0, 299.0),
    term(2, 0, 3, 0, 294.0),
];

/// Eccentricity factor applied to terms containing the Sun's anomaly.
fn eccentricity_factor(t: f64) -> f64 {
    1.0 - 0.002_516 * t - 0.000_007_4 * t * t
}

/// Sum of periodic longitude terms, in 1e-6 degrees.
fn periodic_sum(args: &LunarArguments, t: f64) -> f64 {
    let e = eccentricity_factor(t);
    let mut sum = 0.0;
    for term in &LONGITUDE_TERMS {
        let angle = (term.d as f64) * args.elongation
            + (term.m as f64) * args.sun_anomaly
            + (term.mp as f64) * args.moon_anomaly
            + (term.f as f64) * args.latitude_arg;
        let scale = match term.m.unsigned_abs() {
            0 => 1.0,
            1 => e,
            _ => e * e,
        };
        sum += term.coeff * scale * angle.to_radians().sin();
    }

    // Venus (A1), flattening (L' - F), Jupiter (A2)
    let a1 = 119.75 + 131.849 * t;
    let a2 = 53.09 + 479_264.290 * t;
    sum += 3_958.0 * a1.to_radians().sin();
    sum += 1_962.0 * (args.mean_longitude - args.latitude_arg).to_radians().sin();
    sum += 318.0 * a2.to_radians().sin();
    sum
}

/// Tropical geocentric longitude of the Moon in [0, 360).
///
/// `t` is Julian centuries from J2000.0 on the dynamical (Delta-T
/// corrected) Julian date.
pub fn moon_tropical_longitude_deg(t: f64) -> f64 {
    let args = LunarArguments::at(t);
    normalize_360(args.mean_longitude + periodic_sum(&args, t) / 1_000_000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Meeus Example 47.a: 1992 April 12, 0h TD
    const T_47A: f64 = -0.077_221_081_451;

    #[test]
    fn meeus_47a_arguments() {
        let a = LunarArguments::at(T_47A);
        assert!((normalize_360(a.mean_longitude) - 134.290_182).abs() < 1e-5);
        assert!((normalize_360(a.elongation) - 113.842_304).abs() < 1e-5);
        assert!((normalize_360(a.sun_anomaly) - 97.643_514).abs() < 1e-5);
        assert!((normalize_360(a.moon_anomaly) - 5.150_833).abs() < 1e-5);
        assert!((normalize_360(a.latitude_arg) - 219.889_721).abs() < 1e-5);
    }

    #[test]
    fn meeus_47a_longitude() {
        let lon = moon_tropical_longitude_deg(T_47A);
        assert!((lon - 133.162_655).abs() < 0.01, "lon = {lon}");
    }

    #[test]
    fn eccentricity_near_one() {
        assert!((eccentricity_factor(T_47A) - 1.000_194).abs() < 1e-6);
    }

    #[test]
    fn stays_normalized() {
        for i in -50..50 {
            let lon = moon_tropical_longitude_deg(i as f64 * 0.013);
            assert!((0.0..360.0).contains(&lon), "lon = {lon}");
        }
    }

    #[test]
    fn moves_about_13_deg_per_day() {
        let day = 1.0 / 36_525.0;
        let a = moon_tropical_longitude_deg(0.0);
        let b = moon_tropical_longitude_deg(day);
        let diff = (b - a).rem_euclid(360.0);
        assert!((11.0..16.0).contains(&diff), "daily motion = {diff}");
    }
}
