//! Scan configuration for reposim
//!
//! Configuration lives in a TOML file. Resolution order: an explicit path,
//! then `$REPOSIM_CONFIG_DIR/config.toml`, then the platform config directory
//! (`~/.config/reposim/config.toml` on Linux). A missing file means defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ReposimError, Result};

pub use types::{ScanConfig, TokenizerConfig, DEFAULT_CODE_FILTER};

const CONFIG_DIR: &str = "reposim";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "REPOSIM_CONFIG_DIR";

impl ScanConfig {
    /// Location of the implicit config file, if one can be determined
    fn default_path() -> Option<PathBuf> {
        // Allow environment variable override for testing
        if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            return Some(PathBuf::from(env_dir).join(CONFIG_FILE));
        }
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ReposimError::io_operation("read config", path.display(), e))?;
        let config: ScanConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path must exist; the implicit location may be absent.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ReposimError::not_found("config file", path.display()));
            }
            tracing::debug!(path = %path.display(), "load_config");
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "load_config");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Reject settings no scan can run with
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            crate::bail_invalid!("max_depth", "0 (must be at least 1)");
        }
        Ok(())
    }

    /// Serialize to TOML for display
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ReposimError::Other(format!("failed to serialize config: {}", e)))
    }
}
