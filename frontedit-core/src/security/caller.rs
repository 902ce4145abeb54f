//! Caller identity

use crate::model::UserId;

/// Identity of the user making the request, as established by the host's session layer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Caller {
    /// Logged-in user, `None` for anonymous visitors
    pub user_id: Option<UserId>,

    /// Roles granted to the user
    pub roles: Vec<String>,

    /// Session the request belongs to; anti-forgery tokens are bound to it
    pub session_id: Option<String>,
}

impl Caller {
    /// An anonymous visitor
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A logged-in user with the given roles
    pub fn user(user_id: UserId, roles: &[&str]) -> Self {
        Self {
            user_id: Some(user_id),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            session_id: None,
        }
    }

    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Check if the caller holds any of the given roles
    pub fn has_any_role(&self, roles: &[String]) -> bool {
        roles.iter().any(|role| self.has_role(role))
    }
}
