//! Secrets management for Magpie
//!
//! Secrets are stored separately from configuration to avoid accidental sharing.
//! The secrets file is located at `~/.config/magpie/secrets.toml` and must have
//! restrictive permissions (0600 on Unix).
//!
//! Loading priority:
//! 1. Environment variables (ANTHROPIC_API_KEY)
//! 2. Secrets file (~/.config/magpie/secrets.toml)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// Secrets structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Secrets {
    /// Anthropic configuration
    pub anthropic: AnthropicSecrets,
}

/// Anthropic-related secrets
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AnthropicSecrets {
    /// Anthropic API key
    pub api_key: Option<String>,
}

impl Secrets {
    /// Load secrets from the default location
    ///
    /// Returns default (empty) secrets if file doesn't exist
    pub fn load() -> Result<Self> {
        let secrets_path = Self::default_secrets_path();

        if let Some(path) = secrets_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load secrets from a specific file with permission checking
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        // Check file permissions on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let metadata = std::fs::metadata(path).map_err(Error::Io)?;
            let mode = metadata.permissions().mode();

            // Check if file is readable by group or others (mode & 0o077)
            if mode & 0o077 != 0 {
                return Err(Error::Config(format!(
                    "Secrets file {} has insecure permissions {:o}. \
                     Please run: chmod 600 {}",
                    path.display(),
                    mode & 0o777,
                    path.display()
                )));
            }

            debug!(path = %path.display(), mode = format!("{:o}", mode & 0o777), "Secrets file permissions OK");
        }

        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        let mut secrets: Secrets = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse secrets: {}", e)))?;

        // Trim whitespace from key
        if let Some(ref mut key) = secrets.anthropic.api_key {
            *key = key.trim().to_string();
        }

        Ok(secrets)
    }

    /// Get the default secrets file path
    ///
    /// Returns `~/.config/magpie/secrets.toml` on Unix
    pub fn default_secrets_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("magpie").join("secrets.toml"))
    }

    /// Get the Anthropic API key with environment variable override
    ///
    /// Priority: ANTHROPIC_API_KEY env var > secrets file
    pub fn api_key(&self) -> Option<String> {
        // Check environment variable first
        if let Ok(key) = std::env::var("ANTHROPIC_API_KEY") {
            let key = key.trim().to_string();
            if !key.is_empty() {
                debug!("Using API key from ANTHROPIC_API_KEY environment variable");
                return Some(key);
            }
        }

        // Fall back to secrets file
        if let Some(ref key) = self.anthropic.api_key {
            if !key.is_empty() {
                debug!("Using API key from secrets file");
                return Some(key.clone());
            }
        }

        None
    }
}

/// Resolve the API key or fail with a configuration error
///
/// This is called before any file discovery so that a missing credential
/// terminates the run without touching the filesystem.
pub fn require_api_key() -> Result<String> {
    Secrets::load()?.api_key().ok_or_else(|| {
        Error::Config("ANTHROPIC_API_KEY environment variable not set".to_string())
    })
}
