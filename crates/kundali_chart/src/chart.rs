//! The birth-chart pipeline.
//!
//! Stages, each a pure function chained by value:
//! 1. time frame (day number, JD, Delta-T, sidereal time, obliquity, ayanamsa)
//! 2. tropical Ascendant from LST, obliquity and latitude
//! 3. tropical body longitudes (mean elements, Moon series, mean node)
//! 4. sidereal correction and classification (rashi, navamsha, nakshatra)
//! 5. whole-sign house rotation and placement

use serde::Serialize;
use tracing::{debug, instrument, warn};

use kundali_frames::mean_obliquity_deg;
use kundali_time::{
    CivilDateTime, centuries_since_j2000, day_number, delta_t_is_modeled, delta_t_seconds,
    julian_date, sidereal_time_deg,
};
use kundali_vedic_base::{
    ALL_POINTS, ChartPoint, JUPITER, LunarNode, MARS, MERCURY, MeanElements, Rashi, SATURN, SUN,
    VENUS, ascendant_deg, assign_houses, ayanamsa_for_date, house_of_sign, house_signs,
    lunar_node_deg, mean_tropical_longitude_deg, moon_tropical_longitude_deg,
    nakshatra_from_longitude, navamsha_sign, normalize_360, rashi_from_longitude, rashi_lord,
    sidereal_longitude,
};

use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::input::BirthInput;

/// Time and reference-frame quantities derived from the birth data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeFrame {
    /// Days from J2000.0 (UT).
    pub day_number: f64,
    /// Julian Date with Delta-T applied, 7 decimals.
    pub julian_date: f64,
    /// Delta-T in seconds (0 outside the modeled range).
    pub delta_t: f64,
    /// Local mean sidereal time, degrees [0, 360).
    pub sidereal_time: f64,
    /// Mean obliquity of the ecliptic, degrees.
    pub obliquity: f64,
    /// Lahiri ayanamsa, degrees.
    pub ayanamsa: f64,
    /// Whether the birth year lies inside the Delta-T model.
    pub delta_t_modeled: bool,
}

impl TimeFrame {
    /// Derive the frame for a civil date/time at an east-positive longitude.
    pub fn compute(dt: &CivilDateTime, longitude_deg: f64) -> Self {
        let year = dt.decimal_year();
        let julian_date = julian_date(dt);
        Self {
            day_number: day_number(dt),
            julian_date,
            delta_t: delta_t_seconds(year),
            sidereal_time: sidereal_time_deg(dt, longitude_deg),
            obliquity: mean_obliquity_deg(centuries_since_j2000(julian_date)),
            ayanamsa: ayanamsa_for_date(dt),
            delta_t_modeled: delta_t_is_modeled(year),
        }
    }
}

/// One classified chart point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyPosition {
    #[serde(skip)]
    pub point: ChartPoint,
    /// Short symbol (Asc, Su, Mo, ...).
    pub symbol: &'static str,
    /// Fixed slot 0-9.
    pub index: u8,
    /// Sidereal longitude, degrees [0, 360).
    pub longitude: f64,
    /// Western sign name.
    pub sign_name: &'static str,
    pub degree_in_sign: f64,
    /// 1-12.
    pub sign_number: u8,
    /// Navamsha (D9) sign, 1-12.
    pub navamsa_sign: u8,
    pub nakshatra: &'static str,
    /// Symbol of the nakshatra's ruling graha.
    pub nakshatra_lord: &'static str,
    /// 1-4.
    pub pada: u8,
}

impl BodyPosition {
    /// Classify a point from its tropical longitude.
    pub fn from_tropical(point: ChartPoint, tropical_deg: f64, ayanamsa_deg: f64) -> Self {
        Self::from_sidereal(point, sidereal_longitude(tropical_deg, ayanamsa_deg))
    }

    /// Classify a point from its sidereal longitude.
    pub fn from_sidereal(point: ChartPoint, sidereal_deg: f64) -> Self {
        let rashi = rashi_from_longitude(sidereal_deg);
        let nak = nakshatra_from_longitude(sidereal_deg);
        Self {
            point,
            symbol: point.symbol(),
            index: point.index(),
            longitude: normalize_360(sidereal_deg),
            sign_name: rashi.rashi.western_name(),
            degree_in_sign: rashi.degrees_in_rashi,
            sign_number: rashi.sign_number,
            navamsa_sign: navamsha_sign(sidereal_deg),
            nakshatra: nak.nakshatra.name(),
            nakshatra_lord: nak.lord.symbol(),
            pada: nak.pada,
        }
    }
}

/// A computed birth chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub name: String,
    pub time_frame: TimeFrame,
    /// Slots in [`ALL_POINTS`] order: Asc, Su, Mo, Ma, Me, Ju, Ve, Sa, Ra, Ke.
    pub positions: [BodyPosition; 10],
    /// Sign number of each house; `house_signs[0]` is the ascendant's sign.
    pub house_signs: [u8; 12],
    /// Symbols of the points in each house, in slot order.
    pub house_bodies: [Vec<&'static str>; 12],
    /// Symbol of the lord of each house's sign.
    pub house_lords: [&'static str; 12],
}

impl Chart {
    /// Position of a chart point.
    pub fn position(&self, point: ChartPoint) -> &BodyPosition {
        &self.positions[point.index() as usize]
    }

    /// Sign number of the Ascendant.
    pub fn ascendant_sign(&self) -> u8 {
        self.house_signs[0]
    }

    /// 1-based house holding a chart point.
    pub fn house_of(&self, point: ChartPoint) -> u8 {
        house_of_sign(self.ascendant_sign(), self.position(point).sign_number)
    }

    /// Lord of a 1-based house, or `None` outside 1-12.
    pub fn house_lord(&self, house: u8) -> Option<ChartPoint> {
        let sign = *self.house_signs.get((house as usize).checked_sub(1)?)?;
        Rashi::from_number(sign).map(rashi_lord)
    }
}

/// Compute a chart, validating the input first when the config asks for it.
#[instrument(level = "debug", name = "chart", skip_all, fields(name = %input.name))]
pub fn compute_chart(input: &BirthInput, config: &ChartConfig) -> Result<Chart, ChartError> {
    if config.validate_input {
        input.validate()?;
    }
    Ok(build_chart(input, config.flag_delta_t_range))
}

/// Compute a chart without validation. Total over all inputs.
pub fn compute_chart_unchecked(input: &BirthInput) -> Chart {
    build_chart(input, false)
}

fn build_chart(input: &BirthInput, flag_delta_t_range: bool) -> Chart {
    let dt = input.civil();
    let frame = TimeFrame::compute(&dt, input.longitude_deg);
    debug!(
        day_number = frame.day_number,
        jd = frame.julian_date,
        delta_t = frame.delta_t,
        "time normalized"
    );
    if flag_delta_t_range && !frame.delta_t_modeled {
        warn!(year = dt.year, "Delta-T not modeled for this year, using 0 s");
    }
    debug!(
        lst = frame.sidereal_time,
        obliquity = frame.obliquity,
        ayanamsa = frame.ayanamsa,
        "reference frame"
    );

    let asc = ascendant_deg(frame.sidereal_time, frame.obliquity, input.latitude_deg);
    debug!(ascendant = asc, "ascendant solved");

    let positions = ALL_POINTS.map(|point| position_of(point, asc, &frame));

    let house_signs = house_signs(positions[0].sign_number);
    let placements: Vec<(&'static str, u8)> =
        positions.iter().map(|p| (p.symbol, p.sign_number)).collect();
    let house_bodies = assign_houses(&house_signs, &placements);
    let house_lords = house_signs.map(|sign| {
        Rashi::from_number(sign).map_or("", |r| rashi_lord(r).symbol())
    });
    debug!(ascendant_sign = house_signs[0], "houses assigned");

    Chart {
        name: input.name.clone(),
        time_frame: frame,
        positions,
        house_signs,
        house_bodies,
        house_lords,
    }
}

/// Tropical longitude of a point fed through the shared classification.
fn position_of(point: ChartPoint, asc_deg: f64, frame: &TimeFrame) -> BodyPosition {
    let aya = frame.ayanamsa;
    match point {
        ChartPoint::Lagna => BodyPosition::from_tropical(point, asc_deg, aya),
        ChartPoint::Chandra => {
            let t = centuries_since_j2000(frame.julian_date);
            BodyPosition::from_tropical(point, moon_tropical_longitude_deg(t), aya)
        }
        ChartPoint::Rahu => {
            BodyPosition::from_sidereal(point, lunar_node_deg(LunarNode::Rahu, frame.julian_date, aya))
        }
        ChartPoint::Ketu => {
            BodyPosition::from_sidereal(point, lunar_node_deg(LunarNode::Ketu, frame.julian_date, aya))
        }
        ChartPoint::Surya => mean_position(point, SUN, frame),
        ChartPoint::Mangal => mean_position(point, MARS, frame),
        ChartPoint::Buddh => mean_position(point, MERCURY, frame),
        ChartPoint::Guru => mean_position(point, JUPITER, frame),
        ChartPoint::Shukra => mean_position(point, VENUS, frame),
        ChartPoint::Shani => mean_position(point, SATURN, frame),
    }
}

fn mean_position(point: ChartPoint, elements: MeanElements, frame: &TimeFrame) -> BodyPosition {
    let tropical = mean_tropical_longitude_deg(elements, frame.day_number);
    BodyPosition::from_tropical(point, tropical, frame.ayanamsa)
}
