//! Submission configuration
//!
//! Two policies decide how submitted custom-field values reach the store:
//!
//! - [`WritePolicy`]: whether values are coerced through the field schema
//!   (`typed`) or written exactly as the client sent them (`passthrough`).
//! - [`MissingBooleanPolicy`]: what an unchecked (hence absent) boolean
//!   checkbox means under the `typed` policy.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// How submitted metadata is mapped to store writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WritePolicy {
    /// Each schema field parses its own submitted value; unknown keys are ignored
    #[default]
    Typed,
    /// Every submitted key is written verbatim, except unsupported-type fields
    Passthrough,
}

impl FromStr for WritePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "typed" => Ok(WritePolicy::Typed),
            "passthrough" => Ok(WritePolicy::Passthrough),
            other => Err(format!("unknown write policy: {}", other)),
        }
    }
}

/// Meaning of an absent boolean checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingBooleanPolicy {
    /// Absence writes `false`
    #[default]
    SetFalse,
    /// Absence leaves the stored value untouched
    LeaveUnchanged,
}

impl FromStr for MissingBooleanPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "set_false" => Ok(MissingBooleanPolicy::SetFalse),
            "leave_unchanged" => Ok(MissingBooleanPolicy::LeaveUnchanged),
            other => Err(format!("unknown missing-boolean policy: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    /// Env: FRONTEDIT_WRITE_POLICY
    pub write_policy: WritePolicy,

    /// Env: FRONTEDIT_MISSING_BOOLEAN
    pub missing_boolean: MissingBooleanPolicy,
}

impl SubmissionConfig {
    pub fn merge(&mut self, other: Self) {
        *self = other;
    }

    pub fn apply_env_vars(&mut self) {
        if let Ok(policy) = env::var("FRONTEDIT_WRITE_POLICY") {
            match policy.parse() {
                Ok(p) => self.write_policy = p,
                Err(e) => log::warn!("Ignoring FRONTEDIT_WRITE_POLICY: {}", e),
            }
        }
        if let Ok(policy) = env::var("FRONTEDIT_MISSING_BOOLEAN") {
            match policy.parse() {
                Ok(p) => self.missing_boolean = p,
                Err(e) => log::warn!("Ignoring FRONTEDIT_MISSING_BOOLEAN: {}", e),
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}
