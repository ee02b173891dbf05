//! Error types for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use kundali_time::TimeError;

/// Errors from building a chart.
///
/// Only raised by input validation; the numeric pipeline itself is total.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Invalid calendar date, time of day or timezone offset.
    Time(TimeError),
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::InvalidLocation(_) => None,
        }
    }
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
