//! `google.navigation:q=<text>[&mode=...]`

use tracing::debug;
use url::Url;

use super::query_param;
use crate::codec::decode_component;
use crate::destination::{Destination, IntentKind};

/// Extracts a named navigation destination from the `q` key of the payload.
///
/// Coordinate-only payloads are refused here; the coordinates stay available
/// to [`crate::router::extract_coordinates`].
pub fn extract_navigation(uri: &Url) -> Option<Destination> {
    let value = navigation_query(uri)?;
    let dest = Destination::named(IntentKind::Navigation, &value);
    if dest.is_none() {
        debug!(value = %value, "navigation q is not a usable name");
    }
    dest
}

/// Decoded `q` value of a navigation URI.
///
/// The payload is opaque rather than a `?query`, so `q=` is searched for at
/// the start or after an `&`; the regular query is only consulted when
/// neither is present.
pub(crate) fn navigation_query(uri: &Url) -> Option<String> {
    let payload = uri.path();
    let raw = payload
        .strip_prefix("q=")
        .or_else(|| payload.find("&q=").map(|idx| &payload[idx + 3..]));

    match raw {
        Some(raw) => {
            let value = raw.split('&').next().unwrap_or(raw);
            Some(decode_component(value))
        }
        None => query_param(uri, "q"),
    }
}
