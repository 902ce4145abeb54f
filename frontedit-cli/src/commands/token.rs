use anyhow::{bail, Result};
use frontedit_core::config::EditorConfig;
use frontedit_core::security::{HmacTokenIssuer, TokenIssuer};

use super::CallerArgs;

/// Issue a token for the configured action.
///
/// Requires a configured secret: a per-process random one could never be
/// verified by a later `handle` invocation.
pub fn run(config: &EditorConfig, caller: &CallerArgs) -> Result<String> {
    if config.security.token_secret.is_empty() {
        bail!("security.token_secret (or FRONTEDIT_TOKEN_SECRET) must be set to issue tokens");
    }

    let issuer = HmacTokenIssuer::from_config(&config.security);
    Ok(issuer.issue(&config.security.nonce_action, &caller.caller()))
}
