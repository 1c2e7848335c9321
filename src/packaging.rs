//! Site metadata and mobile-shell packaging.
//!
//! The manifest mirrors what the Android shell expects: an application id, a
//! display name, the directory holding the static export and the scheme the
//! embedded web view serves from.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Site title and description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            title: "CliffVibe".to_string(),
            description: "Explore climbing spots with our interactive map".to_string(),
        }
    }
}

/// How the site is built for deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildMode {
    /// Pre-rendered files bundled into the mobile shell.
    #[default]
    StaticExport,
    /// Served by a running web server; the shell loads it remotely.
    Server,
}

impl FromStr for BuildMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "static" | "static-export" | "export" => Ok(BuildMode::StaticExport),
            "server" => Ok(BuildMode::Server),
            other => anyhow::bail!("Unknown build mode '{}' (expected 'static' or 'server')", other),
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildMode::StaticExport => f.write_str("static-export"),
            BuildMode::Server => f.write_str("server"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerSettings {
    pub android_scheme: String,
}

/// Packaging manifest for the mobile shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagingManifest {
    pub app_id: String,
    pub app_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_dir: Option<String>,
    pub server: ServerSettings,
    pub plugins: BTreeMap<String, serde_json::Value>,
}

impl PackagingManifest {
    /// Manifest for the given build mode.
    ///
    /// Only a static export produces a directory to bundle.
    pub fn for_mode(mode: BuildMode, metadata: &SiteMetadata) -> Self {
        Self {
            app_id: "com.cliffvibe.app".to_string(),
            app_name: metadata.title.clone(),
            web_dir: match mode {
                BuildMode::StaticExport => Some("out".to_string()),
                BuildMode::Server => None,
            },
            server: ServerSettings {
                android_scheme: "https".to_string(),
            },
            plugins: BTreeMap::new(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize packaging manifest")
    }
}
