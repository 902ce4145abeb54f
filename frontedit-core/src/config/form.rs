//! Form configuration

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Form rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Shortcode tag substituted in page content
    /// Env: FRONTEDIT_SHORTCODE_TAG
    /// Default: "cpt_edit_form"
    pub shortcode_tag: String,

    /// Form heading
    /// Env: FRONTEDIT_FORM_HEADING
    /// Default: "Edit Post"
    pub heading: String,

    /// Submit button label
    /// Env: FRONTEDIT_FORM_SUBMIT_LABEL
    /// Default: "Update"
    pub submit_label: String,

    /// Placeholder of the tags input
    /// Default: "Comma separated"
    pub tags_placeholder: String,

    /// Append the editor's `<style>` block after the form
    /// Env: FRONTEDIT_FORM_INCLUDE_STYLES
    /// Default: true
    pub include_styles: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            shortcode_tag: "cpt_edit_form".to_string(),
            heading: "Edit Post".to_string(),
            submit_label: "Update".to_string(),
            tags_placeholder: "Comma separated".to_string(),
            include_styles: true,
        }
    }
}

impl FormConfig {
    pub fn merge(&mut self, other: Self) {
        *self = other;
    }

    pub fn apply_env_vars(&mut self) {
        if let Ok(tag) = env::var("FRONTEDIT_SHORTCODE_TAG") {
            self.shortcode_tag = tag;
        }
        if let Ok(heading) = env::var("FRONTEDIT_FORM_HEADING") {
            self.heading = heading;
        }
        if let Ok(label) = env::var("FRONTEDIT_FORM_SUBMIT_LABEL") {
            self.submit_label = label;
        }
        if let Ok(styles) = env::var("FRONTEDIT_FORM_INCLUDE_STYLES") {
            self.include_styles = styles.parse().unwrap_or(true);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.shortcode_tag.is_empty() {
            bail!("Invalid shortcode_tag: must not be empty");
        }
        if self.shortcode_tag.chars().any(|c| c.is_whitespace() || matches!(c, '[' | ']' | '/')) {
            bail!("Invalid shortcode_tag: must not contain whitespace, brackets or '/'");
        }
        Ok(())
    }
}
