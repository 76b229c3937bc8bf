//! Reverse-geocoding interface for coordinate-only requests.
//!
//! The pipeline only depends on this trait; lookups themselves (network or
//! platform services) live with the caller.

use crate::coords::CoordinatePair;

/// Turns coordinates into a human-readable address.
pub trait ReverseGeocoder {
    fn reverse(&self, coords: CoordinatePair) -> Option<String>;
}

/// Geocoder that never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGeocoder;

impl ReverseGeocoder for NoGeocoder {
    fn reverse(&self, _coords: CoordinatePair) -> Option<String> {
        None
    }
}

impl<F> ReverseGeocoder for F
where
    F: Fn(CoordinatePair) -> Option<String>,
{
    fn reverse(&self, coords: CoordinatePair) -> Option<String> {
        self(coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_geocoder_finds_nothing() {
        let coords = CoordinatePair::new(39.9, 116.4).unwrap();
        assert!(NoGeocoder.reverse(coords).is_none());
    }

    #[test]
    fn closures_are_geocoders() {
        let geocoder = |c: CoordinatePair| Some(format!("near {c}"));
        let coords = CoordinatePair::new(1.0, 2.0).unwrap();
        assert_eq!(geocoder.reverse(coords).as_deref(), Some("near 1,2"));
    }
}
