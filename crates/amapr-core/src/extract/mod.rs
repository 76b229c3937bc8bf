//! Per-format extraction strategies.
//!
//! Each extractor maps an already-parsed URI to a [`Destination`] or `None`
//! when the input does not match its format. None of them fail.
//!
//! [`Destination`]: crate::destination::Destination

mod geo;
mod navigation;
mod web;

pub use geo::extract_geo;
pub use navigation::extract_navigation;
pub use web::{extract_web, is_first_party_host};

pub(crate) use geo::{geo_payload, split_label};
pub(crate) use navigation::navigation_query;
pub(crate) use web::viewport_coordinates;

use url::Url;

/// First value of query parameter `key`, form-decoded.
pub(crate) fn query_param(uri: &Url, key: &str) -> Option<String> {
    uri.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}
