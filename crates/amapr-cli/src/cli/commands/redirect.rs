//! `amapr redirect <uri>` – run the whole pipeline and print the Amap URI.

use amapr_core::redirect::{Intent, NoGeocoder, RedirectOutcome, Redirector};
use amapr_core::NavigationMode;
use anyhow::Result;
use std::path::Path;

use super::load_settings;

pub fn run_redirect(
    config: Option<&Path>,
    uri: &str,
    action: &str,
    mode: Option<&str>,
    json: bool,
) -> Result<()> {
    let settings = load_settings(config)?;
    let mode = mode
        .map(NavigationMode::from)
        .unwrap_or_else(|| settings.nav_mode.clone());

    // No network access here, so bare coordinates cannot be named.
    let redirector = Redirector::new(settings, NoGeocoder);
    let intent = Intent {
        action: Some(action.to_string()),
        data: Some(uri.to_string()),
    };
    let outcome = redirector.handle_with_mode(&intent, &mode);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match outcome {
        RedirectOutcome::Redirect { uri, .. } => println!("{uri}"),
        RedirectOutcome::Disabled => println!("Redirect is disabled in settings."),
        RedirectOutcome::Ignored => println!("Not intercepted (action {action})."),
        RedirectOutcome::Unresolved => println!("Could not parse destination."),
    }
    Ok(())
}
