//! Navamsha (D9) divisional sign.
//!
//! Each 30-degree rashi is split into 9 parts of 3 deg 20'. The parts are
//! mapped onto consecutive rashis, starting from a rashi fixed by the
//! element of the natal sign. Away from exact sign edges this is the same
//! as reading the longitude in a zodiac compressed 9-fold:
//! navamsha index = floor(lon / 3.333) mod 12. An exact edge belongs to the
//! lower sign (see [`zodiac_sign`](crate::rashi::zodiac_sign)) and takes
//! that sign's last navamsha.

use crate::rashi::rashi_from_longitude;

/// Span of one navamsha: 30/9 = 3.3333... degrees.
pub const NAVAMSHA_SPAN: f64 = 30.0 / 9.0;

/// Rashi element classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RashiElement {
    Fire,
    Earth,
    Air,
    Water,
}

/// Determine the element of a rashi by 0-based index.
///
/// Fire: 0,4,8 (Mesha, Simha, Dhanu)
/// Earth: 1,5,9 (Vrishabha, Kanya, Makara)
/// Air: 2,6,10 (Mithuna, Tula, Kumbha)
/// Water: 3,7,11 (Karka, Vrischika, Meena)
pub const fn rashi_element(rashi_index: u8) -> RashiElement {
    match rashi_index % 4 {
        0 => RashiElement::Fire,
        1 => RashiElement::Earth,
        2 => RashiElement::Air,
        _ => RashiElement::Water,
    }
}

/// 0-based rashi index where the navamsha sequence of an element begins.
pub const fn navamsha_start(element: RashiElement) -> u8 {
    match element {
        RashiElement::Fire => 0,  // Mesha
        RashiElement::Earth => 9, // Makara
        RashiElement::Air => 6,   // Tula
        RashiElement::Water => 3, // Karka
    }
}

/// Navamsha sign number (1-12) of a sidereal longitude.
///
/// The natal sign is the one [`rashi_from_longitude`] reports, so the result
/// is always one of that sign's nine navamshas.
pub fn navamsha_sign(sidereal_lon: f64) -> u8 {
    let info = rashi_from_longitude(sidereal_lon);
    let rashi_idx = info.sign_number - 1;
    let div_idx = ((info.degrees_in_rashi / NAVAMSHA_SPAN).floor() as u8).min(8);
    let start = navamsha_start(rashi_element(rashi_idx));
    (start + div_idx) % 12 + 1
}
