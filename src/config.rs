//! Application configuration.
//!
//! Values are layered, later layers winning:
//! defaults → TOML config file → environment (`RQUOTE_*`) → command-line overrides.
//! Empty strings never override a lower layer.

use crate::error::{Result, RquoteError};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Quote service base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
/// Title used when nothing else is configured.
pub const DEFAULT_APP_TITLE: &str = "Random Quote Generator";

pub const ENV_API_URL: &str = "RQUOTE_API_URL";
pub const ENV_APP_TITLE: &str = "RQUOTE_APP_TITLE";

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the quote service, without the `/quote` path
    pub api_url: String,
    /// Shown as the header and the terminal window title
    pub app_title: String,
    /// Start in the dark theme
    pub dark: bool,
    /// Location of the key-value store file; `None` uses the platform data dir
    pub store_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            app_title: DEFAULT_APP_TITLE.to_string(),
            dark: false,
            store_path: None,
        }
    }
}

/// Shape of the TOML config file. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub api_url: Option<String>,
    pub app_title: Option<String>,
    pub dark: Option<bool>,
    pub store_path: Option<PathBuf>,
}

/// Overrides collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_path: Option<PathBuf>,
    pub api_url: Option<String>,
    pub app_title: Option<String>,
    pub dark: bool,
    pub store_path: Option<PathBuf>,
}

impl AppConfig {
    /// Resolve the full configuration from the real environment
    pub fn load(cli: &CliOverrides) -> Result<Self> {
        let env: HashMap<String, String> = [ENV_API_URL, ENV_APP_TITLE]
            .iter()
            .filter_map(|key| std::env::var(key).ok().map(|v| (key.to_string(), v)))
            .collect();

        let file = match &cli.config_path {
            Some(path) => Some(FileConfig::read(path)?),
            None => match default_config_path() {
                Some(path) if path.is_file() => Some(FileConfig::read(&path)?),
                _ => None,
            },
        };

        Ok(Self::resolve(file, &env, cli))
    }

    /// Layer a config file, environment map and CLI overrides over the defaults
    pub fn resolve(
        file: Option<FileConfig>,
        env: &HashMap<String, String>,
        cli: &CliOverrides,
    ) -> Self {
        let mut config = Self::default();

        if let Some(file) = file {
            config.apply_strings(file.api_url, file.app_title);
            if let Some(dark) = file.dark {
                config.dark = dark;
            }
            if file.store_path.is_some() {
                config.store_path = file.store_path;
            }
        }

        config.apply_strings(env.get(ENV_API_URL).cloned(), env.get(ENV_APP_TITLE).cloned());

        config.apply_strings(cli.api_url.clone(), cli.app_title.clone());
        if cli.dark {
            config.dark = true;
        }
        if cli.store_path.is_some() {
            config.store_path = cli.store_path.clone();
        }

        config
    }

    fn apply_strings(&mut self, api_url: Option<String>, app_title: Option<String>) {
        if let Some(url) = non_empty(api_url) {
            self.api_url = url;
        }
        if let Some(title) = non_empty(app_title) {
            self.app_title = title;
        }
    }
}

impl FileConfig {
    /// Parse a TOML config file
    pub fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => RquoteError::ConfigNotFound {
                path: path.to_path_buf(),
            },
            _ => RquoteError::file_error(format!("failed to read {}", path.display()), e),
        })?;
        Self::parse(&contents)
            .map_err(|e| RquoteError::config(format!("{}: {}", path.display(), e)))
    }

    pub fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

/// `{config_dir}/rquote/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rquote").join("config.toml"))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
