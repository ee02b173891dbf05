//! Reference-frame helpers for chart computation.
//!
//! Provides the mean obliquity of the ecliptic (Earth's axial tilt) used by
//! the ascendant solver.

pub mod obliquity;

pub use obliquity::{OBLIQUITY_J2000_DEG, OBLIQUITY_RATE_DEG_PER_CENTURY, mean_obliquity_deg};
