//! CLI command handlers. Each command is in its own file.

mod completions;
mod config;
mod log;
mod redirect;
mod resolve;

pub use completions::run_completions;
pub use config::run_config;
pub use log::run_log;
pub use redirect::run_redirect;
pub use resolve::run_resolve;

use amapr_core::config::{self as core_config, Settings};
use anyhow::Result;
use std::path::Path;

/// Settings from `--config`, or the default location (created if missing).
fn load_settings(config: Option<&Path>) -> Result<Settings> {
    let settings = match config {
        Some(path) => core_config::load_from(path)?,
        None => core_config::load_or_init()?,
    };
    tracing::debug!("loaded settings: {:?}", settings);
    Ok(settings)
}
