//! Whole-sign houses (bhavas).
//!
//! House 1 is the sign holding the Lagna; the remaining eleven houses
//! follow in zodiacal order. A body sits in the house whose sign matches
//! its own sign number.

/// Sign number (1-12) for each of the 12 houses, starting at the
/// ascendant's sign.
///
/// House `i` (0-based) maps to `((asc_sign + i - 1) mod 12) + 1`.
pub fn house_signs(asc_sign: u8) -> [u8; 12] {
    let base = (asc_sign.clamp(1, 12) - 1) as usize;
    std::array::from_fn(|i| ((base + i) % 12) as u8 + 1)
}

/// 1-based house holding `sign` for a given ascendant sign.
pub fn house_of_sign(asc_sign: u8, sign: u8) -> u8 {
    let asc = asc_sign.clamp(1, 12) as i16;
    let s = sign.clamp(1, 12) as i16;
    ((s - asc).rem_euclid(12) + 1) as u8
}

/// Bucket `(item, sign)` placements into houses.
///
/// Every item lands in exactly one house because each sign appears
/// once in `houses`. Order within a house follows input order.
pub fn assign_houses<T: Copy>(houses: &[u8; 12], placements: &[(T, u8)]) -> [Vec<T>; 12] {
    std::array::from_fn(|h| {
        placements
            .iter()
            .filter(|(_, sign)| *sign == houses[h])
            .map(|(item, _)| *item)
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aries_lagna_is_identity() {
        assert_eq!(house_signs(1), [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn pisces_lagna_wraps() {
        assert_eq!(house_signs(12), [12, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
    }

    #[test]
    fn house_of_sign_matches_rotation() {
        for asc in 1..=12u8 {
            let houses = house_signs(asc);
            for (i, &s) in houses.iter().enumerate() {
                assert_eq!(house_of_sign(asc, s), i as u8 + 1);
            }
        }
    }

    #[test]
    fn assignment_buckets_by_sign() {
        let houses = house_signs(3);
        let placed = assign_houses(&houses, &[("Su", 9), ("Mo", 3), ("Ma", 3), ("Ke", 2)]);
        assert_eq!(placed[0], vec!["Mo", "Ma"]);
        assert_eq!(placed[6], vec!["Su"]);
        assert_eq!(placed[11], vec!["Ke"]);
        assert_eq!(placed.iter().map(Vec::len).sum::<usize>(), 4);
    }
}
