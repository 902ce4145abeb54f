//! Configuration system for Frontedit
//!
//! # Configuration Hierarchy
//!
//! Configuration values are resolved in the following order (highest priority wins):
//!
//! 1. **Environment Variables** (`FRONTEDIT_*`)
//! 2. **Config File** (`frontedit.toml`)
//! 3. **Defaults**
//!
//! # Example
//!
//! ```no_run
//! use frontedit_core::config::EditorConfig;
//!
//! // Load with full supersedence
//! let config = EditorConfig::load()?;
//!
//! // Or load from specific file
//! let config = EditorConfig::from_file("frontedit.toml")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod form;
pub mod logging;
pub mod security;
pub mod submission;

pub use form::FormConfig;
pub use logging::LoggingConfig;
pub use security::SecurityConfig;
pub use submission::{MissingBooleanPolicy, SubmissionConfig, WritePolicy};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file name
pub const DEFAULT_CONFIG_FILE: &str = "frontedit.toml";

/// Complete editor configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub form: FormConfig,
    pub security: SecurityConfig,
    pub submission: SubmissionConfig,
    pub logging: LoggingConfig,
}

impl EditorConfig {
    /// Load configuration with full supersedence chain
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration from a specific file, then apply the environment
    ///
    /// A missing file is not an error: defaults are used instead.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let mut config = Self::default();

        if path.exists() {
            let file_config = Self::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            config.merge(file_config);
        }

        config.apply_env_vars();
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.as_ref().display()))
    }

    /// Merge another config into this one (other takes priority)
    pub fn merge(&mut self, other: Self) {
        self.form.merge(other.form);
        self.security.merge(other.security);
        self.submission.merge(other.submission);
        self.logging.merge(other.logging);
    }

    /// Apply environment variables to configuration
    pub fn apply_env_vars(&mut self) {
        self.form.apply_env_vars();
        self.security.apply_env_vars();
        self.submission.apply_env_vars();
        self.logging.apply_env_vars();
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.form.validate()?;
        self.security.validate()?;
        self.submission.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
