//! Scheme dispatch: raw URI string to a normalized [`Destination`].

use tracing::{debug, trace};
use url::Url;

use crate::coords::{extract_embedded, parse_pair, CoordinatePair};
use crate::destination::Destination;
use crate::extract::{
    extract_geo, extract_navigation, extract_web, geo_payload, is_first_party_host,
    navigation_query, query_param, split_label, viewport_coordinates,
};

/// Input URI family, decided once from the scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// `google.navigation:`
    Navigation,
    /// `geo:`
    Geo,
    /// `http:` / `https:`
    Web,
    Unrecognized,
}

impl Scheme {
    pub const NAVIGATION: &'static str = "google.navigation";
    pub const GEO: &'static str = "geo";

    pub fn from_name(scheme: &str) -> Self {
        match scheme.to_ascii_lowercase().as_str() {
            Self::NAVIGATION => Scheme::Navigation,
            Self::GEO => Scheme::Geo,
            "http" | "https" => Scheme::Web,
            _ => Scheme::Unrecognized,
        }
    }

    pub fn of(uri: &Url) -> Self {
        Self::from_name(uri.scheme())
    }
}

/// Resolves a raw URI into a valid destination, or `None` if it is not a
/// recognized map request.
///
/// `None` tells the caller to try reverse geocoding via
/// [`extract_coordinates`] before giving up.
pub fn resolve(uri: &str) -> Option<Destination> {
    let parsed = match Url::parse(uri.trim()) {
        Ok(parsed) => parsed,
        Err(err) => {
            debug!(error = %err, "input is not a URI");
            return None;
        }
    };
    resolve_url(&parsed)
}

/// [`resolve`] for an already-parsed URI.
pub fn resolve_url(uri: &Url) -> Option<Destination> {
    let scheme = Scheme::of(uri);
    let dest = match scheme {
        Scheme::Navigation => extract_navigation(uri),
        Scheme::Geo => extract_geo(uri),
        Scheme::Web => extract_web(uri),
        Scheme::Unrecognized => {
            trace!(scheme = uri.scheme(), "unrecognized scheme");
            None
        }
    }
    .filter(Destination::is_valid);

    debug!(?scheme, destination = ?dest, "resolved");
    dest
}

/// Raw coordinates carried by `uri`, for the reverse-geocoding fallback.
pub fn extract_coordinates(uri: &str) -> Option<CoordinatePair> {
    let parsed = Url::parse(uri.trim()).ok()?;
    extract_coordinates_url(&parsed)
}

/// [`extract_coordinates`] for an already-parsed URI.
pub fn extract_coordinates_url(uri: &Url) -> Option<CoordinatePair> {
    match Scheme::of(uri) {
        Scheme::Navigation => navigation_query(uri).and_then(|q| parse_pair(&q)),
        Scheme::Geo => {
            let q = query_param(uri, "q");
            q.as_deref()
                .and_then(parse_pair)
                .or_else(|| {
                    q.as_deref()
                        .and_then(split_label)
                        .and_then(|(prefix, _)| parse_pair(prefix))
                })
                .or_else(|| parse_pair(geo_payload(uri)).filter(|c| !c.is_null_island()))
        }
        Scheme::Web => {
            if !is_first_party_host(uri) {
                return None;
            }
            ["destination", "daddr", "q"]
                .iter()
                .find_map(|key| query_param(uri, key).and_then(|v| parse_pair(&v)))
                .or_else(|| viewport_coordinates(uri))
                .or_else(|| extract_embedded(uri.as_str()))
        }
        Scheme::Unrecognized => None,
    }
}
