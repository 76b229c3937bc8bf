//! Normalized destination records produced by the extractors.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::coords::CoordinatePair;
use crate::sanitize::is_usable_name;

/// What the incoming request asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntentKind {
    /// Turn-by-turn route requested.
    Navigation,
    /// Place lookup or search requested.
    GeoView,
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntentKind::Navigation => f.write_str("navigation"),
            IntentKind::GeoView => f.write_str("geo-view"),
        }
    }
}

/// A resolved destination: a kind plus a sanitized name and/or coordinates.
///
/// Fields are private so a name can only enter through [`Destination::named`],
/// which applies [`is_usable_name`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Destination {
    kind: IntentKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    coordinates: Option<CoordinatePair>,
}

impl Destination {
    /// Trims `name` and accepts it only if it is a usable place name.
    pub fn named(kind: IntentKind, name: &str) -> Option<Self> {
        let name = name.trim();
        if !is_usable_name(name) {
            return None;
        }
        Some(Self {
            kind,
            name: Some(name.to_string()),
            coordinates: None,
        })
    }

    /// Coordinate-only destination.
    pub fn at(kind: IntentKind, coordinates: CoordinatePair) -> Self {
        Self {
            kind,
            name: None,
            coordinates: Some(coordinates),
        }
    }

    /// Label taken from a `lat,lon(label)` query. Parenthesized text is a label
    /// by construction, so only blank text and opaque payloads are refused.
    pub(crate) fn labelled(kind: IntentKind, label: &str) -> Option<Self> {
        let label = label.trim();
        if label.is_empty() || crate::sanitize::is_opaque_payload(label) {
            return None;
        }
        Some(Self {
            kind,
            name: Some(label.to_string()),
            coordinates: None,
        })
    }

    /// Attaches coordinates to an existing destination.
    pub fn with_coordinates(mut self, coordinates: CoordinatePair) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    pub fn kind(&self) -> IntentKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn coordinates(&self) -> Option<CoordinatePair> {
        self.coordinates
    }

    /// At least one of name and coordinates is present.
    pub fn is_valid(&self) -> bool {
        self.name.is_some() || self.coordinates.is_some()
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(name) = &self.name {
            write!(f, " name={name:?}")?;
        }
        if let Some(coords) = &self.coordinates {
            write!(f, " at={coords}")?;
        }
        Ok(())
    }
}

/// Opaque route-profile token forwarded to the target provider unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavigationMode(String);

impl NavigationMode {
    pub const DEFAULT_TOKEN: &'static str = "0";

    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NavigationMode {
    fn default() -> Self {
        Self(Self::DEFAULT_TOKEN.to_string())
    }
}

impl From<&str> for NavigationMode {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl fmt::Display for NavigationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
