//! Chart computation options.

/// Configuration for [`compute_chart`](crate::compute_chart).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartConfig {
    /// Reject out-of-range dates, times, timezones and coordinates before
    /// computing. When off, any input is accepted and the pipeline runs
    /// on whatever numbers it is given.
    pub validate_input: bool,
    /// Emit a warning when the birth year lies outside the modeled
    /// Delta-T range (Delta-T is then taken as 0).
    pub flag_delta_t_range: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            validate_input: true,
            flag_delta_t_range: true,
        }
    }
}

impl ChartConfig {
    /// Create a config with explicit settings.
    pub fn new(validate_input: bool, flag_delta_t_range: bool) -> Self {
        Self {
            validate_input,
            flag_delta_t_range,
        }
    }
}
