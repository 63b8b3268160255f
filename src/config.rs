//! Latebind Configuration
//!
//! Handles parsing and management of latebind.toml configuration files.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::bind::platform_library_name;
use crate::catalog::Export;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Unknown export in prebind list: {0}")]
    UnknownExport(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Root configuration structure matching latebind.toml.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BindConfig {
    /// Target library selection
    #[serde(default)]
    pub library: LibraryConfig,

    /// Resolution behavior
    #[serde(default)]
    pub resolver: ResolverConfig,
}

impl BindConfig {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let config: BindConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from the current directory or parents.
    pub fn load_from_cwd() -> ConfigResult<Self> {
        let cwd = std::env::current_dir().map_err(ConfigError::Io)?;
        Self::find_and_load(&cwd)
    }

    /// Find and load configuration by searching up from the given directory.
    pub fn find_and_load(start_dir: &Path) -> ConfigResult<Self> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let config_path = dir.join("latebind.toml");
            if config_path.exists() {
                return Self::load(&config_path);
            }
            if !dir.pop() {
                // Reached root without finding config
                return Ok(Self::default());
            }
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Map the configured prebind names to catalog exports.
    ///
    /// An empty prebind list means the whole catalog.
    pub fn prebind_exports(&self) -> ConfigResult<Vec<Export>> {
        if self.resolver.prebind.is_empty() {
            return Ok(Export::ALL.to_vec());
        }
        self.resolver
            .prebind
            .iter()
            .map(|name| {
                Export::from_name(name).ok_or_else(|| ConfigError::UnknownExport(name.clone()))
            })
            .collect()
    }
}

/// Target library selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Library file name handed to the dynamic linker
    #[serde(default = "default_library_name")]
    pub name: String,

    /// Explicit path, bypassing the search paths entirely
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_library_name() -> String {
    platform_library_name().to_string()
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            name: default_library_name(),
            path: None,
        }
    }
}

/// Resolution behavior.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ResolverConfig {
    /// Extra directories searched before the platform defaults
    #[serde(default)]
    pub search_paths: Vec<PathBuf>,

    /// Export names resolved in one batch at startup; empty means all
    #[serde(default)]
    pub prebind: Vec<String>,
}
