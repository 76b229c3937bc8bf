//! Embedded `!1d<lon>!2d<lat>` coordinate payloads found in web map URLs.

use super::CoordinatePair;

/// Marker introducing a longitude value.
pub const LONGITUDE_MARKER: &str = "!1d";
/// Marker introducing a latitude value.
pub const LATITUDE_MARKER: &str = "!2d";

/// Extracts the last `!1d`/`!2d` coordinate found anywhere in `text`.
///
/// Each marker may appear many times; the final occurrence of each is the
/// resolved coordinate. Returns `None` if either marker is missing, its value
/// is not a number, or the pair is out of range.
pub fn extract_embedded(text: &str) -> Option<CoordinatePair> {
    let lon = last_value_after(text, LONGITUDE_MARKER)?;
    let lat = last_value_after(text, LATITUDE_MARKER)?;
    let lon = lon.parse::<f64>().ok()?;
    let lat = lat.parse::<f64>().ok()?;
    CoordinatePair::new(lat, lon).ok()
}

/// Signed decimal following the last occurrence of `marker`.
fn last_value_after<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    let mut last = None;
    let mut from = 0;
    while let Some(pos) = text[from..].find(marker) {
        let start = from + pos + marker.len();
        last = Some(start);
        from = start;
    }
    let rest = &text[last?..];
    let len = signed_decimal_len(rest);
    if len == 0 {
        None
    } else {
        Some(&rest[..len])
    }
}

/// Length of the `[+-]?digits[.digits]` prefix of `s`, or 0 if there is none.
fn signed_decimal_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'-' | b'+')) {
        i += 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == int_start {
        return 0;
    }
    if bytes.get(i) == Some(&b'.') {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > frac_start {
            i = j;
        }
    }
    i
}
