//! Edit authorization

use super::caller::Caller;
use crate::config::SecurityConfig;
use crate::model::{EntityId, UserId};

/// Decides whether a caller may edit an entity
///
/// Implement this trait to plug in the host's capability system.
pub trait EditAuthorizer: Send + Sync {
    /// `owner` is the entity's author as reported by the content store
    fn can_edit(&self, caller: &Caller, entity: EntityId, owner: Option<UserId>) -> bool;
}

/// Role-based authorization
///
/// - editor roles may edit every entity
/// - author roles may edit entities they own
/// - anonymous callers may edit nothing
#[derive(Debug, Clone)]
pub struct RoleAuthorizer {
    editor_roles: Vec<String>,
    author_roles: Vec<String>,
}

impl RoleAuthorizer {
    pub fn new(editor_roles: Vec<String>, author_roles: Vec<String>) -> Self {
        Self { editor_roles, author_roles }
    }

    pub fn from_config(config: &SecurityConfig) -> Self {
        Self::new(config.editor_roles.clone(), config.author_roles.clone())
    }
}

impl Default for RoleAuthorizer {
    fn default() -> Self {
        Self::from_config(&SecurityConfig::default())
    }
}

impl EditAuthorizer for RoleAuthorizer {
    fn can_edit(&self, caller: &Caller, _entity: EntityId, owner: Option<UserId>) -> bool {
        if !caller.is_authenticated() {
            return false;
        }

        if caller.has_any_role(&self.editor_roles) {
            return true;
        }

        owner.is_some() && owner == caller.user_id && caller.has_any_role(&self.author_roles)
    }
}
