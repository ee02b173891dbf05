//! Vedic birth-chart computation.
//!
//! Takes a [`BirthInput`] (date, local time, timezone offset, place) and
//! produces a [`Chart`]: ten classified points (Ascendant, seven grahas,
//! Rahu, Ketu) and a whole-sign house layout.
//!
//! The pipeline is pure and deterministic. Input validation is optional
//! and controlled by [`ChartConfig`].

pub mod chart;
pub mod config;
pub mod coords;
pub mod error;
pub mod input;

pub use chart::{BodyPosition, Chart, TimeFrame, compute_chart, compute_chart_unchecked};
pub use config::ChartConfig;
pub use coords::{parse_coordinate, parse_latitude, parse_longitude};
pub use error::ChartError;
pub use input::BirthInput;
