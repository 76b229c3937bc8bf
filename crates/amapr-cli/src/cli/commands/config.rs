//! `amapr config` – show where settings live and what they are.

use amapr_core::config::config_path;
use anyhow::Result;
use std::path::Path;

use super::load_settings;

pub fn run_config(config: Option<&Path>) -> Result<()> {
    let path = match config {
        Some(path) => path.to_path_buf(),
        None => config_path()?,
    };
    let settings = load_settings(config)?;
    println!("# {}", path.display());
    print!("{}", settings.to_toml()?);
    Ok(())
}
