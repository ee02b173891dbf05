//! Local civil date and time with a timezone offset.
//!
//! Provides `CivilDateTime`, the wall-clock representation a birth record is
//! given in. Conversion to UT happens by subtracting the timezone offset;
//! seconds are not carried (birth records are minute-precision).

use crate::error::TimeError;

/// Last Julian-calendar date before the Gregorian reform, as (year, month, day).
pub const GREGORIAN_REFORM_LAST_JULIAN: (i32, u32, u32) = (1582, 10, 4);

/// Earliest accepted year: the start of the Julian Period (-4712 = 4713 BC).
pub const MIN_YEAR: i32 = -4712;

/// Latest accepted year.
pub const MAX_YEAR: i32 = 9999;

/// Widest timezone offset in use, in hours (UTC-14 .. UTC+14).
pub const MAX_TZ_OFFSET_HOURS: f64 = 14.0;

/// Local civil date and time plus its offset from UT.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    /// Offset from UT in hours, east positive (e.g. +5.5 for IST).
    pub tz_hours: f64,
}

impl CivilDateTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, tz_hours: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            tz_hours,
        }
    }

    /// Check year, calendar date, time of day and timezone ranges.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year)
            || !(1..=12).contains(&self.month)
            || self.day == 0
            || self.day > days_in_month(self.year, self.month)
        {
            return Err(TimeError::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        if self.hour > 23 || self.minute > 59 {
            return Err(TimeError::InvalidTime {
                hour: self.hour,
                minute: self.minute,
            });
        }
        if !self.tz_hours.is_finite() || self.tz_hours.abs() > MAX_TZ_OFFSET_HOURS {
            return Err(TimeError::InvalidTimezone(self.tz_hours));
        }
        Ok(())
    }

    /// Fractional hours of Universal Time on the civil date.
    ///
    /// May fall outside [0, 24) when the offset pushes UT into the
    /// neighbouring day; the Julian Date formulas absorb that linearly.
    pub fn ut_hours(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0 - self.tz_hours
    }

    /// Whether the date falls after the 1582-10-04 calendar reform.
    pub fn is_gregorian(&self) -> bool {
        (self.year, self.month, self.day) > GREGORIAN_REFORM_LAST_JULIAN
    }

    /// Mid-month decimal year, the argument the Delta-T polynomials expect.
    pub fn decimal_year(&self) -> f64 {
        self.year as f64 + (self.month as f64 - 0.5) / 12.0
    }
}

impl std::fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.tz_hours < 0.0 { '-' } else { '+' };
        let total_min = (self.tz_hours.abs() * 60.0).round() as u32;
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}{}{:02}:{:02}",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            sign,
            total_min / 60,
            total_min % 60
        )
    }
}

/// Leap-year rule: Julian (every 4th year) up to 1582, Gregorian afterwards.
pub fn is_leap_year(year: i32) -> bool {
    if year <= GREGORIAN_REFORM_LAST_JULIAN.0 {
        year.rem_euclid(4) == 0
    } else {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }
}

/// Number of days in a month, or 0 for a month outside 1-12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}
