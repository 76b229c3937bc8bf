//! Amap URI rendering.

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::codec::encode_component;
use crate::destination::{Destination, IntentKind, NavigationMode};

/// Scheme of the target provider.
pub const TARGET_SCHEME: &str = "amapuri";
/// Application identifier reported to the target provider.
pub const DEFAULT_SOURCE_APPLICATION: &str = "AmapRedirect";

/// Whether a destination without a name may still be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoordinatePolicy {
    /// Only named destinations are rendered.
    #[default]
    RequireName,
    /// Coordinate-only destinations render as WGS-84 route/view requests.
    AllowCoordinates,
}

/// Renders destinations as `amapuri://` route or search requests.
#[derive(Debug, Clone)]
pub struct TargetUriBuilder {
    source_application: String,
    coordinate_policy: CoordinatePolicy,
}

impl Default for TargetUriBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_APPLICATION, CoordinatePolicy::default())
    }
}

impl TargetUriBuilder {
    pub fn new(source_application: impl Into<String>, coordinate_policy: CoordinatePolicy) -> Self {
        Self {
            source_application: source_application.into(),
            coordinate_policy,
        }
    }

    /// Builds the target URI for `dest`, or `None` if it cannot be rendered.
    ///
    /// Navigation destinations become `route/plan` requests carrying `mode`
    /// (default `"0"`); geo-view destinations become `poi` keyword searches.
    /// Output is deterministic for identical inputs.
    pub fn build(&self, dest: &Destination, mode: Option<&NavigationMode>) -> Option<Url> {
        let default_mode = NavigationMode::default();
        let mode = mode.unwrap_or(&default_mode).as_str();
        let app = self.source_application.as_str();

        let (base, params): (&str, Vec<(&str, String)>) = match (dest.kind(), dest.name()) {
            (IntentKind::Navigation, Some(name)) => (
                "route/plan/",
                vec![
                    ("sourceApplication", app.to_string()),
                    ("dname", name.to_string()),
                    ("dev", "0".to_string()),
                    ("t", mode.to_string()),
                ],
            ),
            (IntentKind::GeoView, Some(name)) => (
                "poi",
                vec![
                    ("sourceApplication", app.to_string()),
                    ("keyword", name.to_string()),
                ],
            ),
            (kind, None) => {
                let coords = dest.coordinates()?;
                if self.coordinate_policy == CoordinatePolicy::RequireName {
                    debug!(%coords, "destination has no name; not rendering");
                    return None;
                }
                match kind {
                    IntentKind::Navigation => (
                        "route/plan/",
                        vec![
                            ("sourceApplication", app.to_string()),
                            ("dlat", coords.lat().to_string()),
                            ("dlon", coords.lon().to_string()),
                            ("dev", "1".to_string()),
                            ("t", mode.to_string()),
                        ],
                    ),
                    IntentKind::GeoView => (
                        "viewMap",
                        vec![
                            ("sourceApplication", app.to_string()),
                            ("lat", coords.lat().to_string()),
                            ("lon", coords.lon().to_string()),
                            ("dev", "1".to_string()),
                        ],
                    ),
                }
            }
        };

        let query = params
            .iter()
            .map(|(key, value)| format!("{key}={}", encode_component(value)))
            .collect::<Vec<_>>()
            .join("&");
        Url::parse(&format!("{TARGET_SCHEME}://{base}?{query}")).ok()
    }
}

/// [`TargetUriBuilder::build`] with the default application id and policy.
pub fn build_target_uri(dest: &Destination, mode: Option<&NavigationMode>) -> Option<Url> {
    TargetUriBuilder::default().build(dest, mode)
}
