//! Mean lunar node (Rahu/Ketu) longitude.
//!
//! Linear regression of the ascending node in Julian centuries from
//! 1900 January 0.5 (JD 2415020.0), the epoch of Brown's lunar theory.
//! Ketu is never computed independently: it is always Rahu + 180 deg.

use crate::util::normalize_360;

/// Julian date of the node epoch (1900 January 0.5).
pub const NODE_EPOCH_JD: f64 = 2_415_020.0;

/// Longitude of the ascending node at the epoch, degrees.
pub const RAHU_AT_EPOCH_DEG: f64 = 259.183_275;

/// Node regression, degrees per Julian century (negative: retrograde).
pub const RAHU_RATE_DEG_PER_CENTURY: f64 = -1_934.142_008;

const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Which lunar node to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LunarNode {
    /// Ascending node (Rahu / North Node).
    Rahu,
    /// Descending node (Ketu / South Node). Always Rahu + 180 deg.
    Ketu,
}

/// Julian centuries since the 1900 node epoch.
pub fn centuries_since_node_epoch(jd: f64) -> f64 {
    (jd - NODE_EPOCH_JD) / DAYS_PER_CENTURY
}

/// Tropical mean Rahu in [0, 360).
pub fn mean_rahu_tropical_deg(jd: f64) -> f64 {
    let t = centuries_since_node_epoch(jd);
    normalize_360(RAHU_AT_EPOCH_DEG + RAHU_RATE_DEG_PER_CENTURY * t)
}

/// Ketu from a Rahu longitude.
pub fn ketu_from_rahu(rahu_deg: f64) -> f64 {
    normalize_360(rahu_deg + 180.0)
}

/// Sidereal Rahu: tropical mean node minus ayanamsa, in [0, 360).
pub fn rahu_sidereal_deg(jd: f64, ayanamsa_deg: f64) -> f64 {
    normalize_360(mean_rahu_tropical_deg(jd) - ayanamsa_deg)
}

/// Sidereal longitude of the requested node.
pub fn lunar_node_deg(node: LunarNode, jd: f64, ayanamsa_deg: f64) -> f64 {
    let rahu = rahu_sidereal_deg(jd, ayanamsa_deg);
    match node {
        LunarNode::Rahu => rahu,
        LunarNode::Ketu => ketu_from_rahu(rahu),
    }
}
