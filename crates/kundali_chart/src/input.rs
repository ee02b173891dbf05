//! Birth data accepted by the chart pipeline.

use serde::{Deserialize, Serialize};

use kundali_time::CivilDateTime;

use crate::coords::{parse_latitude, parse_longitude};
use crate::error::ChartError;

/// Largest accepted |latitude| in degrees.
pub const MAX_LATITUDE_DEG: f64 = 90.0;

/// Largest accepted |longitude| in degrees.
pub const MAX_LONGITUDE_DEG: f64 = 180.0;

/// Birth date, local time, timezone and place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    /// Free-form label carried into the chart.
    #[serde(default)]
    pub name: String,
    /// Full year (e.g. 1987).
    pub year: i32,
    /// Month, 1-12.
    pub month: u32,
    /// Day of month.
    pub day: u32,
    /// Local hour, 0-23.
    pub hour: u32,
    /// Local minute, 0-59.
    pub minute: u32,
    /// Offset of local time from UT in hours, east positive.
    pub tz_hours: f64,
    /// Geographic latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Geographic longitude in degrees, east positive.
    pub longitude_deg: f64,
}

impl BirthInput {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        tz_hours: f64,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Self {
        Self {
            name: name.into(),
            year,
            month,
            day,
            hour,
            minute,
            tz_hours,
            latitude_deg,
            longitude_deg,
        }
    }

    /// Replace the location with parsed coordinate strings (`28N36`, `77E12`
    /// or plain decimals). Unreadable strings become 0.0.
    pub fn with_location_strings(mut self, latitude: &str, longitude: &str) -> Self {
        self.latitude_deg = parse_latitude(latitude);
        self.longitude_deg = parse_longitude(longitude);
        self
    }

    /// Civil date/time part of the input.
    pub fn civil(&self) -> CivilDateTime {
        CivilDateTime::new(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.tz_hours,
        )
    }

    /// Check calendar date, time of day, timezone and coordinates.
    pub fn validate(&self) -> Result<(), ChartError> {
        self.civil().validate()?;
        if !self.latitude_deg.is_finite() || self.latitude_deg.abs() > MAX_LATITUDE_DEG {
            return Err(ChartError::InvalidLocation(
                "latitude must be within [-90, 90] degrees",
            ));
        }
        if !self.longitude_deg.is_finite() || self.longitude_deg.abs() > MAX_LONGITUDE_DEG {
            return Err(ChartError::InvalidLocation(
                "longitude must be within [-180, 180] degrees",
            ));
        }
        Ok(())
    }
}
