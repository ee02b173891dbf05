//! Latitude/longitude string parsing.
//!
//! Accepts either a hemisphere string such as `28N36` (28 deg 36' north)
//! or `77W12`, or a plain signed decimal such as `-12.5`. Parsing never
//! fails: anything unreadable yields 0.0.

/// Parse a latitude. `N` is positive, `S` negative.
pub fn parse_latitude(s: &str) -> f64 {
    parse_with_hemispheres(s, 'N', 'S')
}

/// Parse a longitude. `E` is positive, `W` negative.
pub fn parse_longitude(s: &str) -> f64 {
    parse_with_hemispheres(s, 'E', 'W')
}

/// Parse a coordinate carrying any of `N`, `S`, `E`, `W`.
pub fn parse_coordinate(s: &str) -> f64 {
    let upper = s.trim().to_ascii_uppercase();
    if upper.contains(['E', 'W']) {
        parse_longitude(&upper)
    } else {
        parse_latitude(&upper)
    }
}

fn parse_with_hemispheres(s: &str, positive: char, negative: char) -> f64 {
    let upper = s.trim().to_ascii_uppercase();
    let split = upper
        .char_indices()
        .find(|(_, c)| *c == positive || *c == negative);

    match split {
        Some((at, hemi)) => {
            let degrees = upper[..at].trim().parse::<f64>().unwrap_or(0.0);
            let minutes_text = upper[at + hemi.len_utf8()..].trim();
            let minutes = if minutes_text.is_empty() {
                0.0
            } else {
                minutes_text.parse::<f64>().unwrap_or(0.0)
            };
            let value = degrees + minutes / 60.0;
            if hemi == negative { -value } else { value }
        }
        None => upper.parse::<f64>().unwrap_or(0.0),
    }
}
