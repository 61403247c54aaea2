//! Dashboard configuration with documented defaults
//!
//! Values come from three layers, later layers winning:
//! built-in defaults, an optional TOML file, then environment variables.

use crate::core::error::{DashError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Credentials for the hosted tables
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteConfig {
    /// Project base URL, e.g. `https://xyz.supabase.co`
    pub url: String,
    /// Public (anon) API key sent with every request
    pub anon_key: String,
}

/// Configuration for the dashboard front end
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Directory holding `pokemon.json`, `combats.json` and `model_results.json`
    pub data_dir: PathBuf,

    /// Hosted database credentials. When absent only the local store is usable.
    pub remote: Option<RemoteConfig>,

    /// Number of rows shown in dataset samples
    pub sample_size: usize,

    /// Tracing filter directive used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            remote: None,
            sample_size: 10,
            log_filter: "pokedex_dashboard=info".into(),
        }
    }
}

impl DashboardConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load a config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Apply environment overrides from the process environment
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    ///
    /// Recognized keys: `POKEDEX_DATA_DIR`, `POKEDEX_SAMPLE_SIZE`,
    /// `SUPABASE_URL`, `SUPABASE_ANON_KEY`. The two credentials only take
    /// effect together, or on top of an existing remote section.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("POKEDEX_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }

        if let Some(size) = lookup("POKEDEX_SAMPLE_SIZE") {
            self.sample_size = size.trim().parse().map_err(|_| {
                DashError::InvalidConfig(format!("POKEDEX_SAMPLE_SIZE is not a number: {}", size))
            })?;
        }

        let url = lookup("SUPABASE_URL");
        let key = lookup("SUPABASE_ANON_KEY");
        match (url, key, self.remote.take()) {
            (Some(url), Some(anon_key), _) => self.remote = Some(RemoteConfig { url, anon_key }),
            (url, key, Some(existing)) => {
                self.remote = Some(RemoteConfig {
                    url: url.unwrap_or(existing.url),
                    anon_key: key.unwrap_or(existing.anon_key),
                })
            }
            (Some(_), None, None) => return Err(DashError::MissingCredentials("SUPABASE_ANON_KEY")),
            (None, Some(_), None) => return Err(DashError::MissingCredentials("SUPABASE_URL")),
            (None, None, None) => {}
        }

        Ok(self)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.sample_size == 0 {
            return Err(DashError::InvalidConfig("sample_size must be at least 1".into()));
        }

        if let Some(remote) = &self.remote {
            if !remote.url.starts_with("http://") && !remote.url.starts_with("https://") {
                return Err(DashError::InvalidConfig(format!(
                    "remote url must be http(s): {}",
                    remote.url
                )));
            }
            if remote.anon_key.trim().is_empty() {
                return Err(DashError::MissingCredentials("SUPABASE_ANON_KEY"));
            }
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<DashboardConfig> = OnceLock::new();

/// Get the global dashboard config (initializes with defaults if not set)
pub fn config() -> &'static DashboardConfig {
    CONFIG.get_or_init(DashboardConfig::default)
}

/// Set the global dashboard config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: DashboardConfig) -> std::result::Result<(), DashboardConfig> {
    CONFIG.set(config)
}
