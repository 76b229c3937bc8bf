//! Latitude/longitude pairs and the text heuristics built on them.

mod embedded;

pub use embedded::{extract_embedded, LATITUDE_MARKER, LONGITUDE_MARKER};

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Why a latitude/longitude pair was refused.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    #[error("coordinate is not a finite number")]
    NotFinite,
    #[error("latitude {0} is outside -90..=90")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside -180..=180")]
    LongitudeOutOfRange(f64),
}

/// A range-checked WGS-84 coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoordinatePair {
    lat: f64,
    lon: f64,
}

impl CoordinatePair {
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoordinateError> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(CoordinateError::NotFinite);
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(CoordinateError::LongitudeOutOfRange(lon));
        }
        Ok(Self { lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// True for the `0,0` placeholder some callers send when they only have a label.
    pub fn is_null_island(&self) -> bool {
        self.lat == 0.0 && self.lon == 0.0
    }
}

impl fmt::Display for CoordinatePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// Parses `"<lat>,<lon>"`, splitting on the first comma.
///
/// Both sides are trimmed and must be finite decimals within range. Returns
/// `None` if there is no comma, the comma is the first or last character, or
/// either side is empty or non-numeric.
pub fn parse_pair(text: &str) -> Option<CoordinatePair> {
    let text = text.trim();
    let comma = text.find(',')?;
    if comma == 0 || comma == text.len() - 1 {
        return None;
    }
    let lat = parse_decimal(&text[..comma])?;
    let lon = parse_decimal(&text[comma + 1..])?;
    CoordinatePair::new(lat, lon).ok()
}

/// True iff `text` would parse as a coordinate pair.
pub fn looks_like_coordinates(text: &str) -> bool {
    parse_pair(text).is_some()
}

/// Plain decimal notation only: `inf`, `NaN` and exponents are not coordinates.
// Exponent forms like `1e1` are refused even though general float parsers
// accept them; map URIs never write coordinates that way.
fn parse_decimal(token: &str) -> Option<f64> {
    let token = token.trim();
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    if digits.is_empty()
        || !digits.bytes().any(|b| b.is_ascii_digit())
        || !digits.bytes().all(|b| b.is_ascii_digit() || b == b'.')
    {
        return None;
    }
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}
