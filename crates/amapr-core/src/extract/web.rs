//! Google Maps web URLs.

use tracing::debug;
use url::Url;

use super::query_param;
use crate::codec::decode_component;
use crate::coords::{extract_embedded, parse_pair, CoordinatePair};
use crate::destination::{Destination, IntentKind};

/// Domain suffixes owned by the source provider (international, regional).
const FIRST_PARTY_DOMAINS: [&str; 2] = ["google.com", "google.cn"];

/// Host is one of the first-party domains or a subdomain of one.
pub fn is_first_party_host(uri: &Url) -> bool {
    uri.host_str()
        .map(|host| {
            FIRST_PARTY_DOMAINS.iter().any(|d| {
                host == *d
                    || host
                        .strip_suffix(d)
                        .is_some_and(|prefix| prefix.ends_with('.'))
            })
        })
        .unwrap_or(false)
}

/// Extracts a destination from a first-party map URL.
///
/// Strategies are tried in order and the first usable result wins:
/// 1. `destination=` query (navigation)
/// 2. `daddr=` query (navigation)
/// 3. last segment of a `/dir/` path (navigation)
/// 4. segment after `/place/` or `/search/` (geo view)
/// 5. `q=` query (geo view)
/// 6. embedded `!1d`/`!2d` coordinates anywhere in the URL (navigation, no name)
pub fn extract_web(uri: &Url) -> Option<Destination> {
    if !is_first_party_host(uri) {
        debug!(host = ?uri.host_str(), "not a first-party map host");
        return None;
    }

    from_query(uri, "destination", IntentKind::Navigation)
        .or_else(|| from_query(uri, "daddr", IntentKind::Navigation))
        .or_else(|| from_dir_path(uri))
        .or_else(|| from_place_path(uri))
        .or_else(|| from_query(uri, "q", IntentKind::GeoView))
        .or_else(|| {
            extract_embedded(uri.as_str()).map(|c| Destination::at(IntentKind::Navigation, c))
        })
}

fn from_query(uri: &Url, key: &str, kind: IntentKind) -> Option<Destination> {
    let value = query_param(uri, key)?;
    let dest = Destination::named(kind, &value);
    if dest.is_none() {
        debug!(key, value = %value, "query value is not a usable name");
    }
    dest
}

/// `/maps/dir/<origin>/<waypoint>/.../<destination>[/@viewport][/data=...]`
///
/// Only the final place segment is the destination; earlier ones are the
/// origin and waypoints. An empty destination slot, or a lone segment after
/// `dir`, names no destination.
fn from_dir_path(uri: &Url) -> Option<Destination> {
    let segments: Vec<&str> = uri.path_segments()?.collect();
    let dir = segments.iter().position(|s| *s == "dir")?;
    let mut places = &segments[dir + 1..];
    while let Some((last, rest)) = places.split_last() {
        if is_viewport(last) || last.starts_with("data=") {
            places = rest;
        } else {
            break;
        }
    }
    if places.len() < 2 {
        return None;
    }
    let last = places.last()?;
    if last.is_empty() {
        return None;
    }
    Destination::named(IntentKind::Navigation, &decode_component(last))
}

/// `/maps/place/<name>/...` or `/maps/search/<name>/...`
fn from_place_path(uri: &Url) -> Option<Destination> {
    let segments: Vec<&str> = uri.path_segments()?.collect();
    segments
        .windows(2)
        .filter(|pair| pair[0] == "place" || pair[0] == "search")
        .map(|pair| pair[1])
        .filter(|segment| !is_viewport(segment))
        .find_map(|segment| Destination::named(IntentKind::GeoView, &decode_component(segment)))
}

/// Map viewport segment such as `@39.9,116.4,15z`.
fn is_viewport(segment: &str) -> bool {
    segment.starts_with('@')
}

/// Centre of the first `@lat,lon[,zoom]` viewport segment in the path.
pub(crate) fn viewport_coordinates(uri: &Url) -> Option<CoordinatePair> {
    uri.path_segments()?
        .filter_map(|segment| segment.strip_prefix('@'))
        .find_map(|viewport| {
            let decoded = decode_component(viewport);
            let mut parts = decoded.splitn(3, ',');
            let lat = parts.next()?;
            let lon = parts.next()?;
            parse_pair(&format!("{lat},{lon}"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(uri: &str) -> Option<Destination> {
        extract_web(&Url::parse(uri).unwrap())
    }

    #[test]
    fn destination_param() {
        let dest =
            extract("https://www.google.com/maps/dir/?api=1&destination=Beijing+Airport").unwrap();
        assert_eq!(dest.kind(), IntentKind::Navigation);
        assert_eq!(dest.name(), Some("Beijing Airport"));
    }

    #[test]
    fn daddr_param() {
        let dest = extract("https://maps.google.com/maps?saddr=Home&daddr=Shanghai+Tower").unwrap();
        assert_eq!(dest.kind(), IntentKind::Navigation);
        assert_eq!(dest.name(), Some("Shanghai Tower"));
    }

    #[test]
    fn destination_beats_daddr_and_path() {
        let dest = extract(
            "https://www.google.com/maps/place/Elsewhere?daddr=Second&destination=First",
        )
        .unwrap();
        assert_eq!(dest.name(), Some("First"));
    }

    #[test]
    fn coordinate_destination_falls_through() {
        let dest =
            extract("https://www.google.com/maps/dir/?api=1&destination=39.9,116.4&q=Museum")
                .unwrap();
        assert_eq!(dest.kind(), IntentKind::GeoView);
        assert_eq!(dest.name(), Some("Museum"));
    }

    #[test]
    fn dir_path_takes_last_segment() {
        let dest = extract("https://www.google.com/maps/dir/A/B/Beijing+Airport").unwrap();
        assert_eq!(dest.kind(), IntentKind::Navigation);
        assert_eq!(dest.name(), Some("Beijing Airport"));
    }

    #[test]
    fn dir_path_skips_viewport_and_data() {
        let dest = extract(
            "https://www.google.com/maps/dir/Home/Tiananmen/@39.9,116.4,12z/data=!4m2!4m1!3e0",
        )
        .unwrap();
        assert_eq!(dest.name(), Some("Tiananmen"));
    }

    #[test]
    fn dir_path_non_ascii() {
        let dest = extract("https://www.google.com/maps/dir/Home/天安门").unwrap();
        assert_eq!(dest.name(), Some("天安门"));
    }

    #[test]
    fn dir_path_without_destination_is_not_the_origin() {
        for uri in [
            "https://www.google.com/maps/dir/Home/",
            "https://www.google.com/maps/dir/Home/@39.9,116.4,12z",
            "https://www.google.com/maps/dir/Home//@39.9,116.4,12z/data=!4m2!4m1!3e0",
        ] {
            let dest = extract(uri);
            assert!(dest.as_ref().and_then(|d| d.name()).is_none(), "{uri}: {dest:?}");
        }
    }

    #[test]
    fn dir_path_single_segment_is_origin_only() {
        assert!(extract("https://www.google.com/maps/dir/Home").is_none());
    }

    #[test]
    fn place_path() {
        let dest = extract("https://www.google.com/maps/place/Tiananmen/@39.9,116.4,15z").unwrap();
        assert_eq!(dest.kind(), IntentKind::GeoView);
        assert_eq!(dest.name(), Some("Tiananmen"));
    }

    #[test]
    fn search_path() {
        let dest = extract("https://www.google.cn/maps/search/coffee+near+me").unwrap();
        assert_eq!(dest.kind(), IntentKind::GeoView);
        assert_eq!(dest.name(), Some("coffee near me"));
    }

    #[test]
    fn search_path_with_coordinates_falls_to_q() {
        let dest =
            extract("https://www.google.com/maps/search/39.9,116.4?q=Forbidden+City").unwrap();
        assert_eq!(dest.name(), Some("Forbidden City"));
    }

    #[test]
    fn place_viewport_only_is_rejected() {
        assert!(extract("https://www.google.com/maps/place/@39.9,116.4,15z").is_none());
    }

    #[test]
    fn generic_q() {
        let dest = extract("https://maps.google.com/maps?q=Summer+Palace").unwrap();
        assert_eq!(dest.kind(), IntentKind::GeoView);
        assert_eq!(dest.name(), Some("Summer Palace"));
    }

    #[test]
    fn embedded_coordinates_fallback() {
        let dest = extract(
            "https://www.google.com/maps/dir//data=!4m6!4m5!1m1!4e2!1m2!1d119.0!2d25.4!1d119.5!2d25.9",
        )
        .unwrap();
        assert_eq!(dest.kind(), IntentKind::Navigation);
        assert!(dest.name().is_none());
        let coords = dest.coordinates().unwrap();
        assert_eq!((coords.lat(), coords.lon()), (25.9, 119.5));
    }

    #[test]
    fn foreign_host_rejected() {
        assert!(extract("https://example.com/maps?q=Beijing").is_none());
        assert!(extract("https://maps.apple.com/?daddr=Beijing").is_none());
    }

    #[test]
    fn first_party_is_a_domain_suffix() {
        assert!(extract("https://google.com.evil.test/maps?q=Beijing").is_none());
        assert!(extract("https://notgoogle.com/maps?q=Beijing").is_none());
        assert!(extract("https://google.com/maps?q=Beijing").is_some());
        assert!(extract("https://ditu.google.cn/maps?q=Beijing").is_some());
    }

    #[test]
    fn nothing_usable() {
        assert!(extract("https://www.google.com/maps").is_none());
        assert!(extract("https://www.google.com/maps?q=39.9,116.4").is_none());
    }

    #[test]
    fn viewport_centre() {
        let uri = Url::parse("https://www.google.com/maps/@39.9,116.4,15z").unwrap();
        let coords = viewport_coordinates(&uri).unwrap();
        assert_eq!((coords.lat(), coords.lon()), (39.9, 116.4));
    }
}
