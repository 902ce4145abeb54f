//! Security configuration

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Authorization and anti-forgery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Action name tokens are bound to
    /// Default: "cpt_editor"
    pub nonce_action: String,

    /// Form field carrying the token
    /// Default: "cpt_editor_nonce"
    pub nonce_field: String,

    /// HMAC secret for tokens; empty means a random per-process secret
    /// Env: FRONTEDIT_TOKEN_SECRET
    pub token_secret: String,

    /// Token lifetime in seconds (tokens live between half and all of it)
    /// Env: FRONTEDIT_TOKEN_LIFETIME
    /// Default: 86400 (1 day)
    pub token_lifetime_secs: u64,

    /// Roles that may edit every entity
    /// Default: ["administrator", "editor"]
    pub editor_roles: Vec<String>,

    /// Roles that may edit the entities they own
    /// Default: ["author", "contributor"]
    pub author_roles: Vec<String>,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            nonce_action: "cpt_editor".to_string(),
            nonce_field: "cpt_editor_nonce".to_string(),
            token_secret: String::new(),
            token_lifetime_secs: 86_400,
            editor_roles: vec!["administrator".to_string(), "editor".to_string()],
            author_roles: vec!["author".to_string(), "contributor".to_string()],
        }
    }
}

impl SecurityConfig {
    pub fn merge(&mut self, other: Self) {
        *self = other;
    }

    pub fn apply_env_vars(&mut self) {
        if let Ok(secret) = env::var("FRONTEDIT_TOKEN_SECRET") {
            self.token_secret = secret;
        }
        if let Ok(lifetime) = env::var("FRONTEDIT_TOKEN_LIFETIME") {
            if let Ok(l) = lifetime.parse() {
                self.token_lifetime_secs = l;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.nonce_action.is_empty() {
            bail!("Invalid nonce_action: must not be empty");
        }
        if self.nonce_field.is_empty() {
            bail!("Invalid nonce_field: must not be empty");
        }
        if self.token_lifetime_secs < 2 {
            bail!("Invalid token_lifetime_secs: must be at least 2");
        }
        Ok(())
    }
}
