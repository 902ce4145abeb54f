//! Anti-forgery tokens
//!
//! A token proves that a submission comes from a form this system rendered for
//! the same caller. Tokens are bound to an action name, the user and the
//! session, and are valid for the current and the previous time tick.
//!
//! ## Security Features
//! - **Signature**: HMAC-SHA256 over `tick|action|user|session`
//! - **Verification**: constant-time via `Mac::verify_slice`

use super::caller::Caller;
use crate::config::SecurityConfig;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;

/// Type alias for HMAC-SHA256
type HmacSha256 = Hmac<Sha256>;

/// Issues and verifies anti-forgery tokens
pub trait TokenIssuer: Send + Sync {
    /// Issue a token for `action` on behalf of `caller`
    fn issue(&self, action: &str, caller: &Caller) -> String;

    /// Check a submitted token against the `action`/`caller` binding
    fn verify(&self, token: &str, action: &str, caller: &Caller) -> bool;
}

/// HMAC-signed, time-ticked tokens
#[derive(Clone)]
pub struct HmacTokenIssuer {
    secret: Vec<u8>,
    lifetime_secs: i64,
}

impl std::fmt::Debug for HmacTokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacTokenIssuer")
            .field("secret", &"<redacted>")
            .field("lifetime_secs", &self.lifetime_secs)
            .finish()
    }
}

impl HmacTokenIssuer {
    /// Create an issuer; tokens live between `lifetime_secs / 2` and `lifetime_secs`
    pub fn new(secret: impl Into<Vec<u8>>, lifetime_secs: u64) -> Self {
        let lifetime_secs = i64::try_from(lifetime_secs).unwrap_or(i64::MAX).max(2);
        Self { secret: secret.into(), lifetime_secs }
    }

    /// Build from configuration; an empty secret gets a random per-process one
    pub fn from_config(config: &SecurityConfig) -> Self {
        if config.token_secret.is_empty() {
            log::warn!("No token secret configured, tokens will not survive a restart");
            let secret = format!("{}{}", uuid::Uuid::new_v4(), uuid::Uuid::new_v4());
            return Self::new(secret, config.token_lifetime_secs);
        }
        Self::new(config.token_secret.as_bytes(), config.token_lifetime_secs)
    }

    fn tick(&self, now: i64) -> i64 {
        let half = self.lifetime_secs / 2;
        // ceil(now / half) for non-negative timestamps
        (now + half - 1).div_euclid(half)
    }

    fn mac(&self, tick: i64, action: &str, caller: &Caller) -> HmacSha256 {
        let message = format!(
            "{}|{}|{}|{}",
            tick,
            action,
            caller.user_id.unwrap_or(0),
            caller.session_id.as_deref().unwrap_or("")
        );
        let mut mac =
            HmacSha256::new_from_slice(&self.secret).expect("HMAC accepts keys of any size");
        mac.update(message.as_bytes());
        mac
    }

    /// Issue a token as of the given unix timestamp
    pub fn issue_at(&self, action: &str, caller: &Caller, now: i64) -> String {
        let signature = self.mac(self.tick(now), action, caller).finalize();
        URL_SAFE_NO_PAD.encode(signature.into_bytes())
    }

    /// Verify a token as of the given unix timestamp
    pub fn verify_at(&self, token: &str, action: &str, caller: &Caller, now: i64) -> bool {
        let Ok(signature) = URL_SAFE_NO_PAD.decode(token) else {
            return false;
        };
        if signature.is_empty() {
            return false;
        }

        let tick = self.tick(now);
        [tick, tick - 1]
            .into_iter()
            .any(|t| self.mac(t, action, caller).verify_slice(&signature).is_ok())
    }
}

impl TokenIssuer for HmacTokenIssuer {
    fn issue(&self, action: &str, caller: &Caller) -> String {
        self.issue_at(action, caller, Utc::now().timestamp())
    }

    fn verify(&self, token: &str, action: &str, caller: &Caller) -> bool {
        self.verify_at(token, action, caller, Utc::now().timestamp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: u64 = 86_400;
    const NOW: i64 = 1_760_000_000;

    fn issuer() -> HmacTokenIssuer {
        HmacTokenIssuer::new("test-secret", DAY)
    }

    fn caller() -> Caller {
        Caller::user(1, &["editor"]).with_session("sess-a")
    }

    #[test]
    fn test_issue_and_verify() {
        let issuer = issuer();
        let token = issuer.issue_at("cpt_editor", &caller(), NOW);
        assert!(issuer.verify_at(&token, "cpt_editor", &caller(), NOW));
        assert!(issuer.verify(&issuer.issue("cpt_editor", &caller()), "cpt_editor", &caller()));
    }

    #[test]
    fn test_binding() {
        let issuer = issuer();
        let token = issuer.issue_at("cpt_editor", &caller(), NOW);

        assert!(!issuer.verify_at(&token, "other_action", &caller(), NOW));
        assert!(!issuer.verify_at(&token, "cpt_editor", &Caller::user(2, &["editor"]), NOW));
        assert!(!issuer.verify_at(
            &token,
            "cpt_editor",
            &Caller::user(1, &["editor"]).with_session("sess-b"),
            NOW
        ));
        assert!(!HmacTokenIssuer::new("other-secret", DAY).verify_at(
            &token,
            "cpt_editor",
            &caller(),
            NOW
        ));
    }

    #[test]
    fn test_expiry() {
        let issuer = issuer();
        let token = issuer.issue_at("cpt_editor", &caller(), NOW);
        let half = (DAY / 2) as i64;

        assert!(issuer.verify_at(&token, "cpt_editor", &caller(), NOW + half));
        assert!(!issuer.verify_at(&token, "cpt_editor", &caller(), NOW + 2 * half + 1));
    }

    #[test]
    fn test_garbage_tokens_rejected() {
        let issuer = issuer();
        assert!(!issuer.verify_at("", "cpt_editor", &caller(), NOW));
        assert!(!issuer.verify_at("not base64!", "cpt_editor", &caller(), NOW));
        assert!(!issuer.verify_at("AAAA", "cpt_editor", &caller(), NOW));
    }

    #[test]
    fn test_debug_redacts_secret() {
        assert!(!format!("{:?}", issuer()).contains("test-secret"));
    }
}
