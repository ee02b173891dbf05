//! Civil-time to astronomical-time conversions for birth charts.
//!
//! This crate provides:
//! - `CivilDateTime`, a local wall-clock date/time with a timezone offset
//! - Day number relative to J2000.0 and Julian Date (with Delta-T folded in)
//! - A piecewise polynomial Delta-T model for 1986-2050
//! - Greenwich and local mean sidereal time

pub mod civil;
pub mod delta_t;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::{CivilDateTime, MAX_YEAR, MIN_YEAR, days_in_month, is_leap_year};
pub use delta_t::{DELTA_T_FIRST_YEAR, DELTA_T_LAST_YEAR, delta_t_is_modeled, delta_t_seconds};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, centuries_since_j2000, day_number, julian_date, julian_date_ut,
    round_half_up,
};
pub use sidereal::{gmst_deg, local_sidereal_time_deg, sidereal_time_deg};
