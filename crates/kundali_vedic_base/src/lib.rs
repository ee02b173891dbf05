//! Sidereal positions and Vedic classification for birth charts.
//!
//! This crate provides:
//! - Lahiri ayanamsa (quadratic model) and tropical-to-sidereal conversion
//! - Lagna (Ascendant) from local sidereal time
//! - Mean-element longitudes for the Sun and five planets
//! - Moon longitude from a truncated Meeus series
//! - Mean lunar nodes (Rahu/Ketu)
//! - Rashi, nakshatra/pada and navamsha classification
//! - Whole-sign house rotation
//!
//! Everything here is a pure function of its inputs.

pub mod amsha;
pub mod ayanamsha;
pub mod bhava;
pub mod graha;
pub mod lagna;
pub mod lunar_nodes;
pub mod mean_elements;
pub mod moon;
pub mod nakshatra;
pub mod rashi;
pub mod util;

pub use amsha::{NAVAMSHA_SPAN, RashiElement, navamsha_sign, navamsha_start, rashi_element};
pub use ayanamsha::{ayanamsa_deg, ayanamsa_for_date, sidereal_longitude};
pub use bhava::{assign_houses, house_of_sign, house_signs};
pub use graha::{ALL_POINTS, ChartPoint, rashi_lord};
pub use lagna::{ascendant_deg, ascendant_for};
pub use lunar_nodes::{
    LunarNode, NODE_EPOCH_JD, centuries_since_node_epoch, ketu_from_rahu, lunar_node_deg,
    mean_rahu_tropical_deg, rahu_sidereal_deg,
};
pub use mean_elements::{
    JUPITER, MARS, MERCURY, MeanElements, SATURN, SUN, VENUS, mean_tropical_longitude_deg,
};
pub use moon::{LunarArguments, moon_tropical_longitude_deg};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_LORDS, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use rashi::{
    ALL_RASHIS, Dms, RASHI_SPAN, Rashi, RashiInfo, deg_to_dms, rashi_from_longitude,
    zodiac_sign,
};
pub use util::normalize_360;
