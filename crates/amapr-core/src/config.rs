use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::destination::NavigationMode;
use crate::target::{CoordinatePolicy, DEFAULT_SOURCE_APPLICATION};

/// User settings loaded from `~/.config/amapr/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Master switch; when false every intent passes through untouched.
    pub enable_redirect: bool,
    /// Route profile token forwarded to the target provider (e.g. "0" driving).
    pub nav_mode: NavigationMode,
    /// Whether coordinate-only destinations may be rendered without a name.
    pub coordinate_policy: CoordinatePolicy,
    /// Application identifier sent as `sourceApplication`.
    pub source_application: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enable_redirect: true,
            nav_mode: NavigationMode::default(),
            coordinate_policy: CoordinatePolicy::default(),
            source_application: DEFAULT_SOURCE_APPLICATION.to_string(),
        }
    }
}

impl Settings {
    /// Pretty TOML, as written to the config file.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("amapr")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load settings from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<Settings> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = Settings::default();
        let toml = default_cfg.to_toml()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load settings from an explicit file.
pub fn load_from(path: &Path) -> Result<Settings> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: Settings =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_settings_values() {
        let cfg = Settings::default();
        assert!(cfg.enable_redirect);
        assert_eq!(cfg.nav_mode.as_str(), "0");
        assert_eq!(cfg.coordinate_policy, CoordinatePolicy::RequireName);
        assert_eq!(cfg.source_application, "AmapRedirect");
    }

    #[test]
    fn settings_toml_roundtrip() {
        let cfg = Settings::default();
        let toml = cfg.to_toml().unwrap();
        let parsed: Settings = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn settings_toml_custom_values() {
        let toml = r#"
            enable_redirect = false
            nav_mode = "2"
            coordinate_policy = "allow-coordinates"
            source_application = "MyHook"
        "#;
        let cfg: Settings = toml::from_str(toml).unwrap();
        assert!(!cfg.enable_redirect);
        assert_eq!(cfg.nav_mode.as_str(), "2");
        assert_eq!(cfg.coordinate_policy, CoordinatePolicy::AllowCoordinates);
        assert_eq!(cfg.source_application, "MyHook");
    }

    #[test]
    fn settings_toml_partial_uses_defaults() {
        let cfg: Settings = toml::from_str(r#"nav_mode = "4""#).unwrap();
        assert!(cfg.enable_redirect);
        assert_eq!(cfg.nav_mode.as_str(), "4");
        assert_eq!(cfg.coordinate_policy, CoordinatePolicy::RequireName);
    }

    #[test]
    fn load_from_file() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"enable_redirect = false\n").unwrap();
        f.flush().unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert!(!cfg.enable_redirect);
    }

    #[test]
    fn load_from_rejects_bad_toml() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"coordinate_policy = \"sometimes\"\n").unwrap();
        f.flush().unwrap();
        assert!(load_from(f.path()).is_err());
    }
}
