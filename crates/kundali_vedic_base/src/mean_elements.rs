//! First-order mean-element longitudes for the Sun and five planets.
//!
//! `lon = L0 + rate * d` where `d` is the UT day number from J2000.0 and
//! `L0` is the mean longitude at that epoch. No perturbation terms; the
//! drift this implies is accepted.

use crate::util::normalize_360;

/// Mean longitude at J2000.0 and its daily motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanElements {
    /// Mean tropical longitude at J2000.0, degrees.
    pub l0_deg: f64,
    /// Mean daily motion, degrees per day.
    pub rate_deg_per_day: f64,
}

/// Mean Sun (Surya).
pub const SUN: MeanElements = MeanElements {
    l0_deg: 280.460,
    rate_deg_per_day: 0.985_647_4,
};
/// Mercury (Buddh).
pub const MERCURY: MeanElements = MeanElements {
    l0_deg: 252.250_906,
    rate_deg_per_day: 4.092_334_437,
};
/// Venus (Shukra).
pub const VENUS: MeanElements = MeanElements {
    l0_deg: 181.979_801,
    rate_deg_per_day: 1.602_130_224,
};
/// Mars (Mangal).
pub const MARS: MeanElements = MeanElements {
    l0_deg: 355.433_275,
    rate_deg_per_day: 0.524_020_777,
};
/// Jupiter (Guru).
pub const JUPITER: MeanElements = MeanElements {
    l0_deg: 34.351_519,
    rate_deg_per_day: 0.083_085_300,
};
/// Saturn (Shani).
pub const SATURN: MeanElements = MeanElements {
    l0_deg: 50.077_444,
    rate_deg_per_day: 0.033_444_228,
};

/// Tropical mean longitude in [0, 360) at `day_number` days from J2000.0.
pub fn mean_tropical_longitude_deg(elements: MeanElements, day_number: f64) -> f64 {
    normalize_360(elements.l0_deg + elements.rate_deg_per_day * day_number)
}
