//! Delta-T: the difference TT - UT caused by irregular Earth rotation.
//!
//! Piecewise polynomials from Espenak & Meeus, "Five Millennium Canon of
//! Solar Eclipses" (NASA/TP-2006-214141), restricted to the two branches
//! covering 1986-2050. Outside that window the model returns 0; callers
//! can query [`delta_t_is_modeled`] to learn whether the value is real.

/// First year covered by the polynomial model.
pub const DELTA_T_FIRST_YEAR: f64 = 1986.0;

/// Last year covered by the polynomial model.
pub const DELTA_T_LAST_YEAR: f64 = 2050.0;

/// Start of the second polynomial branch.
const BRANCH_2005: f64 = 2005.0;

/// Whether `year` falls inside the modeled 1986-2050 range.
pub fn delta_t_is_modeled(year: f64) -> bool {
    (DELTA_T_FIRST_YEAR..=DELTA_T_LAST_YEAR).contains(&year)
}

/// Delta-T in seconds for a (decimal) year.
///
/// Returns 0.0 outside 1986-2050. That is a limitation of the model, not
/// an error.
pub fn delta_t_seconds(year: f64) -> f64 {
    if !delta_t_is_modeled(year) {
        return 0.0;
    }
    let t = year - 2000.0;
    if year < BRANCH_2005 {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        let t5 = t4 * t;
        63.86 + 0.3345 * t - 0.060374 * t2 + 0.0017275 * t3 + 0.000651814 * t4
            + 0.00002373599 * t5
    } else {
        62.92 + 0.32217 * t + 0.005589 * t * t
    }
}
