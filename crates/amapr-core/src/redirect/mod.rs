//! End-to-end handling of one intercepted intent.
//!
//! Filters the intent, resolves its URI, falls back to reverse geocoding when
//! only coordinates are known, and renders the target URI.

mod geocode;

pub use geocode::{NoGeocoder, ReverseGeocoder};

use serde::Serialize;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::Settings;
use crate::destination::{Destination, IntentKind, NavigationMode};
use crate::router::{extract_coordinates_url, resolve_url, Scheme};
use crate::target::{CoordinatePolicy, TargetUriBuilder};

/// Platform action for "view this data".
pub const ACTION_VIEW: &str = "android.intent.action.VIEW";

/// The parts of an intercepted intent the pipeline looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Intent {
    pub action: Option<String>,
    pub data: Option<String>,
}

impl Intent {
    /// A VIEW intent for `uri`.
    pub fn view(uri: impl Into<String>) -> Self {
        Self {
            action: Some(ACTION_VIEW.to_string()),
            data: Some(uri.into()),
        }
    }
}

/// What happened to an intent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum RedirectOutcome {
    /// Redirection is switched off in settings.
    Disabled,
    /// Not an intent this tool intercepts; the original request proceeds.
    Ignored,
    /// Intercepted but no renderable destination was found.
    Unresolved,
    /// Redirect to `uri`.
    Redirect { destination: Destination, uri: String },
}

/// Runs the redirect pipeline with fixed settings and a reverse geocoder.
pub struct Redirector<G> {
    settings: Settings,
    builder: TargetUriBuilder,
    geocoder: G,
}

impl<G: ReverseGeocoder> Redirector<G> {
    pub fn new(settings: Settings, geocoder: G) -> Self {
        let builder =
            TargetUriBuilder::new(settings.source_application.clone(), settings.coordinate_policy);
        Self {
            settings,
            builder,
            geocoder,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Handles `intent` with the configured navigation mode.
    pub fn handle(&self, intent: &Intent) -> RedirectOutcome {
        self.handle_with_mode(intent, &self.settings.nav_mode)
    }

    /// Handles `intent`, forwarding `mode` to route requests.
    pub fn handle_with_mode(&self, intent: &Intent, mode: &NavigationMode) -> RedirectOutcome {
        if !self.settings.enable_redirect {
            return RedirectOutcome::Disabled;
        }
        let Some(uri) = intercepted_uri(intent) else {
            return RedirectOutcome::Ignored;
        };
        debug!(uri = %uri, "incoming URI");

        let Some(destination) = self.destination_for(&uri) else {
            debug!(uri = %uri, "could not parse destination");
            return RedirectOutcome::Unresolved;
        };

        match self.builder.build(&destination, Some(mode)) {
            Some(target) => {
                info!(destination = %destination, target = %target, "redirecting");
                RedirectOutcome::Redirect {
                    destination,
                    uri: target.into(),
                }
            }
            None => {
                debug!(destination = %destination, "destination not renderable");
                RedirectOutcome::Unresolved
            }
        }
    }

    /// Resolved destination, completed by reverse geocoding when it lacks a
    /// name the policy requires.
    fn destination_for(&self, uri: &Url) -> Option<Destination> {
        let resolved = resolve_url(uri);
        let needs_name = match &resolved {
            None => true,
            Some(dest) => {
                dest.name().is_none()
                    && self.settings.coordinate_policy == CoordinatePolicy::RequireName
            }
        };
        if !needs_name {
            return resolved;
        }

        let coords = resolved
            .as_ref()
            .and_then(Destination::coordinates)
            .or_else(|| extract_coordinates_url(uri));
        let Some(coords) = coords else {
            return resolved;
        };

        debug!(%coords, "found coordinates, reverse-geocoding");
        let Some(name) = self.geocoder.reverse(coords) else {
            warn!(%coords, "reverse geocoding found nothing");
            return resolved;
        };

        let kind = resolved
            .as_ref()
            .map(Destination::kind)
            .unwrap_or_else(|| fallback_kind(uri));
        match Destination::named(kind, &name) {
            Some(dest) => {
                debug!(name = %name, "geocoded");
                Some(dest.with_coordinates(coords))
            }
            None => {
                warn!(name = %name, "geocoded name is not usable");
                resolved
            }
        }
    }
}

/// Navigation-scheme requests stay navigation; everything else is a view.
fn fallback_kind(uri: &Url) -> IntentKind {
    match Scheme::of(uri) {
        Scheme::Navigation => IntentKind::Navigation,
        _ => IntentKind::GeoView,
    }
}

/// The URI to handle, if this intent is one we intercept: any VIEW intent, or
/// a navigation-scheme URI regardless of action.
fn intercepted_uri(intent: &Intent) -> Option<Url> {
    let data = intent.data.as_deref()?;
    let uri = Url::parse(data.trim()).ok()?;
    let is_view = intent.action.as_deref() == Some(ACTION_VIEW);
    if is_view || Scheme::of(&uri) == Scheme::Navigation {
        Some(uri)
    } else {
        None
    }
}
