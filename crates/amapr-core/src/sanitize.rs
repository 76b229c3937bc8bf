//! Place-name gatekeeping.
//!
//! Every extractor routes candidate names through [`is_usable_name`] before a
//! string may become `Destination::name`.

use crate::coords::{looks_like_coordinates, LATITUDE_MARKER, LONGITUDE_MARKER};

/// Returns true if `text` is a human-readable place name or address.
///
/// Rejects:
/// - blank text
/// - opaque provider payloads (see [`is_opaque_payload`])
/// - bare `lat,lon` pairs
pub fn is_usable_name(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() || is_opaque_payload(trimmed) {
        return false;
    }
    !looks_like_coordinates(trimmed)
}

/// True for provider-internal blobs: `!`-prefixed or embedded-coordinate
/// encodings, and `data=` path fragments.
pub fn is_opaque_payload(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.starts_with('!')
        || trimmed.contains(LONGITUDE_MARKER)
        || trimmed.contains(LATITUDE_MARKER)
        || trimmed.starts_with("data=")
}
