//! Error types for civil date/time validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from validating a civil date/time.
///
/// The conversions themselves are total; these only arise when a caller
/// asks for validation at the input boundary.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Month outside 1-12 or day outside the month's length.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour outside 0-23 or minute outside 0-59.
    InvalidTime { hour: u32, minute: u32 },
    /// Timezone offset not finite or outside [-14, 14] hours.
    InvalidTimezone(f64),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid calendar date: {year:04}-{month:02}-{day:02}")
            }
            Self::InvalidTime { hour, minute } => {
                write!(f, "invalid time of day: {hour:02}:{minute:02}")
            }
            Self::InvalidTimezone(tz) => write!(f, "invalid timezone offset: {tz} hours"),
        }
    }
}

impl Error for TimeError {}
