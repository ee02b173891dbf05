//! Chart points: the Lagna plus the 9 Vedic grahas, and rashi lordship.
//!
//! A chart always carries exactly these 10 points in this order; the
//! index is stable and doubles as the slot in chart output.

use crate::rashi::Rashi;

/// The 10 points of a birth chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartPoint {
    /// Ascendant: the ecliptic degree rising on the eastern horizon.
    Lagna,
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    /// Ascending lunar node (North Node).
    Rahu,
    /// Descending lunar node (South Node), always Rahu + 180 deg.
    Ketu,
}

/// All 10 chart points in slot order (0 = Lagna .. 9 = Ketu).
pub const ALL_POINTS: [ChartPoint; 10] = [
    ChartPoint::Lagna,
    ChartPoint::Surya,
    ChartPoint::Chandra,
    ChartPoint::Mangal,
    ChartPoint::Buddh,
    ChartPoint::Guru,
    ChartPoint::Shukra,
    ChartPoint::Shani,
    ChartPoint::Rahu,
    ChartPoint::Ketu,
];

impl ChartPoint {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lagna => "Lagna",
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Lagna => "Ascendant",
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Two-letter symbol used in house listings.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Lagna => "Asc",
            Self::Surya => "Su",
            Self::Chandra => "Mo",
            Self::Mangal => "Ma",
            Self::Buddh => "Me",
            Self::Guru => "Ju",
            Self::Shukra => "Ve",
            Self::Shani => "Sa",
            Self::Rahu => "Ra",
            Self::Ketu => "Ke",
        }
    }

    /// 0-based slot index into ALL_POINTS.
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Get the planetary lord of a rashi.
///
/// Standard Vedic lordship assignment (BPHS):
/// - Mesha/Vrischika → Mangal (Mars)
/// - Vrishabha/Tula → Shukra (Venus)
/// - Mithuna/Kanya → Buddh (Mercury)
/// - Karka → Chandra (Moon)
/// - Simha → Surya (Sun)
/// - Dhanu/Meena → Guru (Jupiter)
/// - Makara/Kumbha → Shani (Saturn)
pub const fn rashi_lord(rashi: Rashi) -> ChartPoint {
    match rashi {
        Rashi::Mesha | Rashi::Vrischika => ChartPoint::Mangal,
        Rashi::Vrishabha | Rashi::Tula => ChartPoint::Shukra,
        Rashi::Mithuna | Rashi::Kanya => ChartPoint::Buddh,
        Rashi::Karka => ChartPoint::Chandra,
        Rashi::Simha => ChartPoint::Surya,
        Rashi::Dhanu | Rashi::Meena => ChartPoint::Guru,
        Rashi::Makara | Rashi::Kumbha => ChartPoint::Shani,
    }
}
