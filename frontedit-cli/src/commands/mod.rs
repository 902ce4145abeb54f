pub mod handle;
pub mod render;
pub mod token;

use anyhow::{Context, Result};
use clap::Args;
use frontedit_core::config::EditorConfig;
use frontedit_core::security::Caller;
use std::io::Read;
use std::path::Path;

/// Who is making the request
#[derive(Args, Debug, Clone, Default)]
pub struct CallerArgs {
    /// Signed-in user id; anonymous when omitted
    #[arg(long)]
    pub user: Option<u64>,

    /// Role of the user (repeatable)
    #[arg(long = "role")]
    pub roles: Vec<String>,

    /// Session id the anti-forgery token is bound to
    #[arg(long)]
    pub session: Option<String>,
}

impl CallerArgs {
    pub fn caller(&self) -> Caller {
        Caller {
            user_id: self.user,
            roles: if self.user.is_some() { self.roles.clone() } else { Vec::new() },
            session_id: self.session.clone(),
        }
    }
}

/// Page body to expand: the given content or the bare shortcode
pub fn page_content(config: &EditorConfig, content: Option<String>) -> String {
    content.unwrap_or_else(|| format!("[{}]", config.form.shortcode_tag))
}

/// Read a raw HTTP request from a file, or stdin when no path is given
pub fn read_request(path: Option<&Path>) -> Result<Vec<u8>> {
    let mut raw = Vec::new();
    match path {
        Some(path) => {
            raw = std::fs::read(path)
                .with_context(|| format!("failed to read request {}", path.display()))?;
        }
        None => {
            std::io::stdin().read_to_end(&mut raw).context("failed to read request from stdin")?;
        }
    }
    Ok(raw)
}
