//! `geo:<lat>,<lon>[?q=<label or lat,lon(label)>]`

use tracing::debug;
use url::Url;

use super::query_param;
use crate::coords::looks_like_coordinates;
use crate::destination::{Destination, IntentKind};

/// Extracts a named place from a geo URI's `q` parameter.
///
/// `q` is read as `lat,lon(label)` only when the text before the first `(`
/// is empty or a coordinate pair; `Cafe (north)` stays a whole name.
pub fn extract_geo(uri: &Url) -> Option<Destination> {
    let q = query_param(uri, "q")?;

    if let Some((_, label)) = split_label(&q) {
        let dest = Destination::labelled(IntentKind::GeoView, label);
        if dest.is_none() {
            debug!(q = %q, "geo label is empty");
        }
        return dest;
    }

    let dest = Destination::named(IntentKind::GeoView, &q);
    if dest.is_none() {
        debug!(q = %q, "geo q is not a usable name");
    }
    dest
}

/// Splits `lat,lon(label)` into its coordinate prefix and label.
///
/// The prefix must be coordinate-shaped or empty; otherwise the parentheses
/// belong to the place name itself and `None` is returned.
pub(crate) fn split_label(q: &str) -> Option<(&str, &str)> {
    let inner = q.trim().strip_suffix(')')?;
    let open = inner.find('(')?;
    let prefix = &inner[..open];
    if !prefix.trim().is_empty() && !looks_like_coordinates(prefix) {
        return None;
    }
    Some((prefix, &inner[open + 1..]))
}

/// The `lat,lon` part of the payload, without `;crs=`/`;u=` parameters.
pub(crate) fn geo_payload(uri: &Url) -> &str {
    let path = uri.path();
    path.split(';').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(uri: &str) -> Option<Destination> {
        extract_geo(&Url::parse(uri).unwrap())
    }

    #[test]
    fn search_term() {
        let dest = extract("geo:0,0?q=Beijing+Airport").unwrap();
        assert_eq!(dest.kind(), IntentKind::GeoView);
        assert_eq!(dest.name(), Some("Beijing Airport"));
    }

    #[test]
    fn coordinate_with_label() {
        let dest = extract("geo:39.9,116.4?q=39.9,116.4(Tiananmen)").unwrap();
        assert_eq!(dest.name(), Some("Tiananmen"));
    }

    #[test]
    fn label_may_contain_parentheses_and_commas() {
        let dest = extract("geo:0,0?q=39.9,116.4(Gate (North), Tiananmen)").unwrap();
        assert_eq!(dest.name(), Some("Gate (North), Tiananmen"));
    }

    #[test]
    fn parenthesized_place_name_is_kept_whole() {
        let dest = extract("geo:0,0?q=Cafe+(north+entrance)").unwrap();
        assert_eq!(dest.name(), Some("Cafe (north entrance)"));
    }

    #[test]
    fn empty_label_rejected() {
        assert!(extract("geo:39.9,116.4?q=39.9,116.4(%20)").is_none());
    }

    #[test]
    fn rejects_missing_blank_or_coordinate_q() {
        assert!(extract("geo:39.9,116.4").is_none());
        assert!(extract("geo:39.9,116.4?q=").is_none());
        assert!(extract("geo:39.9,116.4?q=+").is_none());
        assert!(extract("geo:0,0?q=39.9,116.4").is_none());
    }

    #[test]
    fn payload_strips_parameters() {
        let uri = Url::parse("geo:39.9,116.4;u=35?q=x").unwrap();
        assert_eq!(geo_payload(&uri), "39.9,116.4");
    }

    #[test]
    fn split_label_shapes() {
        assert_eq!(split_label("1,2(x)"), Some(("1,2", "x")));
        assert_eq!(split_label("(x)"), Some(("", "x")));
        assert_eq!(split_label("Cafe (x)"), None);
        assert_eq!(split_label("1,2(x"), None);
    }
}
