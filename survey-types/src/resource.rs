//! Resource URL resolution.
//!
//! Records and UI constants refer to images and other static resources by
//! relative path. [`resolve_resource_url`] turns such a path into something a
//! client can fetch, using [`ResourceConfig`] for the base URL and the
//! placeholder served when no path is known.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Where resources are served from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Base URL prepended to relative paths. `None` serves from the site root.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Returned when a caller has no path at all.
    #[serde(default = "default_fallback_path")]
    pub fallback_path: String,
}

fn default_fallback_path() -> String {
    "/static/placeholder.png".to_string()
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            fallback_path: default_fallback_path(),
        }
    }
}

/// Raw TOML structure: settings live under a `[resources]` table.
#[derive(Deserialize, Default)]
struct ResourceFile {
    #[serde(default)]
    resources: Option<ResourceConfig>,
}

impl ResourceConfig {
    /// Parses a `[resources]` table from TOML text.
    pub fn from_toml_str(contents: &str) -> crate::Result<Self> {
        let file: ResourceFile = toml::from_str(contents)?;
        Ok(file.resources.unwrap_or_default())
    }

    /// Loads config from `path`, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No resource config at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => {
                    info!("Loaded resource config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!("Failed to parse resource config {:?}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read resource config {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}

fn is_absolute_url(path: &str) -> bool {
    path.starts_with("http://")
        || path.starts_with("https://")
        || path.starts_with("data:")
        || path.starts_with("//")
}

/// Resolves a resource path to a fetchable URL.
///
/// - missing or blank path: the configured fallback
/// - absolute URL: returned unchanged
/// - base URL configured: base and path joined by a single `/`
/// - otherwise: the path rooted at `/`
#[must_use]
pub fn resolve_resource_url(config: &ResourceConfig, path: Option<&str>) -> String {
    let path = match path.map(str::trim) {
        Some(p) if !p.is_empty() => p,
        _ => return config.fallback_path.clone(),
    };

    if is_absolute_url(path) {
        return path.to_string();
    }

    match config.base_url.as_deref().map(str::trim) {
        Some(base) if !base.is_empty() => {
            format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
        }
        _ if path.starts_with('/') => path.to_string(),
        _ => format!("/{path}"),
    }
}
