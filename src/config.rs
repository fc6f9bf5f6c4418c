//! Configuration handling for the Wecon CLI.
//! Settings come from an optional rc file in the working directory and may be
//! overridden by environment variables; command-line flags win over both.

use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Supported configuration file names, in lookup order
pub const CONFIG_FILES: [&str; 3] = [".weconrc.json", ".weconrc.yml", ".weconrc.yaml"];

/// Overrides the package manager used to install dependencies.
pub const PACKAGE_MANAGER_ENV: &str = "WECON_PACKAGE_MANAGER";

/// Overrides the project template directory.
pub const TEMPLATES_ENV: &str = "WECON_TEMPLATES";

/// Tool-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Settings {
    /// Author written into new projects when none is given
    pub author: Option<String>,
    /// Program used for `<pm> install`
    pub package_manager: String,
    /// Whether `create` initializes a git repository
    pub git: bool,
    /// Directory replacing the built-in project template set
    pub templates: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self { author: None, package_manager: "npm".to_string(), git: true, templates: None }
    }
}

/// Reads the first configuration file found in `dir`.
///
/// # Returns
/// * `Result<Option<(PathBuf, String)>>` - Path and contents, or None when
///   no configuration file exists
pub fn load_config<P: AsRef<Path>>(dir: P, config_files: &[&str]) -> Result<Option<(PathBuf, String)>> {
    for file in config_files {
        let config_path = dir.as_ref().join(file);
        if config_path.is_file() {
            debug!("Loading configuration from {}", config_path.display());
            let content = std::fs::read_to_string(&config_path)?;
            return Ok(Some((config_path, content)));
        }
    }
    Ok(None)
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor YAML,
///   or has unknown keys
pub fn parse_config(content: &str) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    match serde_json::from_str(content) {
        Ok(settings) => Ok(settings),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}

/// Applies environment overrides to `settings`.
pub fn apply_env<F>(mut settings: Settings, var: F) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(pm) = var(PACKAGE_MANAGER_ENV).filter(|v| !v.trim().is_empty()) {
        settings.package_manager = pm;
    }
    if let Some(dir) = var(TEMPLATES_ENV).filter(|v| !v.trim().is_empty()) {
        settings.templates = Some(PathBuf::from(dir));
    }
    settings
}

/// Loads settings for a command run in `dir`.
pub fn get_settings<P: AsRef<Path>>(dir: P) -> Result<Settings> {
    let settings = match load_config(dir, &CONFIG_FILES)? {
        Some((path, content)) => parse_config(&content).map_err(|e| match e {
            Error::ConfigError(msg) => Error::ConfigError(format!("{}: {msg}", path.display())),
            other => other,
        })?,
        None => Settings::default(),
    };
    Ok(apply_env(settings, |key| std::env::var(key).ok()))
}
