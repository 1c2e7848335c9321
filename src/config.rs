//! Runtime configuration.
//!
//! The map access token comes from the environment or from an optional JSON
//! file in the user's config directory. The same file may replace the built-in
//! location list.

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::location::{self, MarkerLocation};

/// Primary environment variable for the map access token.
pub const TOKEN_ENV: &str = "CLIFFVIBE_MAP_TOKEN";
/// Fallback environment variable for the map access token.
pub const FALLBACK_TOKEN_ENV: &str = "MAPBOX_TOKEN";

const CONFIG_DIR_NAME: &str = "cliffvibe";
const CONFIG_FILE_NAME: &str = "config.json";

/// Map provider credential. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a token, treating blank strings as absent.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(****)")
    }
}

/// File tokens go through the same trimming as environment tokens.
fn deserialize_token<'de, D>(deserializer: D) -> std::result::Result<Option<AccessToken>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(AccessToken::new))
}

/// Contents of `config.json`. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default, deserialize_with = "deserialize_token")]
    pub access_token: Option<AccessToken>,
    #[serde(default)]
    pub locations: Option<Vec<MarkerLocation>>,
}

impl AppConfig {
    /// Default location of the config file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Reads a config file. A missing file yields the default config.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parses config JSON.
    pub fn parse(text: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(text)?;
        Ok(config)
    }

    /// Loads the config from the default path and applies environment overrides.
    ///
    /// Errors are logged and replaced by the default config.
    pub fn load() -> Self {
        let mut config = match Self::default_path() {
            Some(path) => Self::load_from(&path).unwrap_or_else(|err| {
                tracing::error!("{:#}", err);
                Self::default()
            }),
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Applies token overrides from the environment.
    ///
    /// `lookup` abstracts `std::env::var` so tests need not touch the process env.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let from_env = lookup(TOKEN_ENV)
            .and_then(AccessToken::new)
            .or_else(|| lookup(FALLBACK_TOKEN_ENV).and_then(AccessToken::new));
        if from_env.is_some() {
            self.access_token = from_env;
        }
    }

    /// Locations to plot: the configured list or the built-in one.
    pub fn locations(&self) -> Arc<[MarkerLocation]> {
        match &self.locations {
            Some(list) => Arc::from(list.clone()),
            None => location::default_locations(),
        }
    }

    /// Logs configuration problems that are tolerated at runtime.
    pub fn report_problems(&self) {
        if self.access_token.is_none() {
            tracing::warn!(
                "no map access token configured (set {} or {}); map tiles may render degraded",
                TOKEN_ENV,
                FALLBACK_TOKEN_ENV
            );
        }
        location::report_invalid(&self.locations());
    }
}
