//! Configuration for the folder-pager binary
//!
//! Loaded from YAML. Every field has a default, so an empty document is a
//! valid configuration:
//!
//! ```yaml
//! data:
//!   path: folders.json
//! pagination:
//!   default_page_size: 10
//!   max_page_size: 100
//! server:
//!   port: 8080
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete configuration loaded from YAML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerConfig {
    /// Where folders are read from
    #[serde(default)]
    pub data: DataConfig,

    /// Page size policy for the CLI and HTTP surfaces
    #[serde(default)]
    pub pagination: PaginationSettings,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerSettings,
}

impl PagerConfig {
    /// Check cross-field constraints
    pub fn validate(&self) -> Result<()> {
        let p = &self.pagination;
        if p.max_page_size > 0 && p.default_page_size > p.max_page_size {
            return Err(Error::config(format!(
                "default_page_size ({}) exceeds max_page_size ({})",
                p.default_page_size, p.max_page_size
            )));
        }
        if self.server.port == 0 {
            return Err(Error::config("server port cannot be 0"));
        }
        Ok(())
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Data source settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    /// JSON file holding the folder collection
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("folders.json")
}

/// Page size policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationSettings {
    /// Size used when a request does not name one
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Largest size a request may ask for (0 = unlimited)
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl PaginationSettings {
    /// Pick the requested size or the default, rejecting sizes over the limit
    pub fn resolve_size(&self, requested: Option<usize>) -> Result<usize> {
        let size = requested.unwrap_or(self.default_page_size);
        if self.max_page_size > 0 && size > self.max_page_size {
            return Err(Error::invalid_request(format!(
                "page size {size} exceeds the maximum of {}",
                self.max_page_size
            )));
        }
        Ok(size)
    }
}

fn default_page_size() -> usize {
    10
}

fn default_max_page_size() -> usize {
    100
}

/// HTTP server settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    8080
}

// ============================================================================
// Loading
// ============================================================================

/// Load and validate a configuration file
pub fn load_config(path: impl AsRef<Path>) -> Result<PagerConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::Io(e)
        }
    })?;

    load_config_from_str(&content)
}

/// Parse and validate a configuration from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<PagerConfig> {
    // serde_yaml reads an empty document as unit, not as an empty map.
    let config: PagerConfig = if yaml.trim().is_empty() {
        PagerConfig::default()
    } else {
        serde_yaml::from_str(yaml)?
    };

    config.validate()?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}
