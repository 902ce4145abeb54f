//! Submission mapper
//!
//! Turns a [`SubmissionPayload`] into an ordered list of [`WriteCommand`]s and
//! executes them against the content store. Planning is pure; only
//! [`SubmissionMapper::apply_submission`] touches the store.

use super::payload::{RawValue, SubmissionPayload};
use super::sanitize::sanitize_text;
use crate::config::{MissingBooleanPolicy, SubmissionConfig, WritePolicy};
use crate::error::StoreError;
use crate::model::{EntityId, FieldKind, FieldSpec, MetaValue};
use crate::store::ContentStore;
use log::{debug, info};
use std::collections::HashSet;
use std::sync::Arc;

/// One write against the content store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteCommand {
    SetTitle(String),
    /// Replaces the whole tag list
    SetTags(Vec<String>),
    SetMeta { key: String, value: MetaValue },
}

/// Maps submitted values to store writes
#[derive(Clone)]
pub struct SubmissionMapper {
    content: Arc<dyn ContentStore>,
    config: SubmissionConfig,
}

impl SubmissionMapper {
    pub fn new(content: Arc<dyn ContentStore>, config: SubmissionConfig) -> Self {
        Self { content, config }
    }

    /// Plan the writes for a submission, in execution order
    ///
    /// Title first, then tags, then custom fields in schema order (`typed`)
    /// or submission order followed by the settled unchecked fields
    /// (`passthrough`).
    pub fn plan(&self, payload: &SubmissionPayload, specs: &[FieldSpec]) -> Vec<WriteCommand> {
        let mut commands = Vec::new();

        if let Some(title) = &payload.title {
            commands.push(WriteCommand::SetTitle(sanitize_text(title)));
        }

        if let Some(tags) = &payload.tags {
            commands.push(WriteCommand::SetTags(split_tags(tags)));
        }

        match self.config.write_policy {
            WritePolicy::Typed => self.plan_typed(payload, specs, &mut commands),
            WritePolicy::Passthrough => self.plan_passthrough(payload, specs, &mut commands),
        }

        commands
    }

    /// Plan and execute a submission; the first store error aborts the rest
    pub fn apply_submission(
        &self,
        entity: EntityId,
        payload: &SubmissionPayload,
        specs: &[FieldSpec],
    ) -> Result<Vec<WriteCommand>, StoreError> {
        let commands = self.plan(payload, specs);

        for command in &commands {
            match command {
                WriteCommand::SetTitle(title) => self.content.set_title(entity, title)?,
                WriteCommand::SetTags(tags) => self.content.set_tags(entity, tags)?,
                WriteCommand::SetMeta { key, value } => {
                    self.content.set_meta(entity, key, value.clone())?
                }
            }
        }

        info!("Applied {} write(s) to entity {}", commands.len(), entity);
        Ok(commands)
    }

    fn plan_typed(
        &self,
        payload: &SubmissionPayload,
        specs: &[FieldSpec],
        commands: &mut Vec<WriteCommand>,
    ) {
        let mut seen = HashSet::new();

        for spec in specs {
            if !seen.insert(spec.key.as_str()) {
                debug!("Field '{}' declared twice, keeping the first", spec.key);
                continue;
            }

            let raw = payload.meta(&spec.key);
            if let Some(value) = coerce(spec, raw, self.config.missing_boolean) {
                commands.push(WriteCommand::SetMeta { key: spec.key.clone(), value });
            }
        }

        for (key, _) in &payload.meta {
            if !seen.contains(key.as_str()) {
                debug!("Ignoring submitted field '{}' with no schema entry", key);
            }
        }
    }

    /// Write submitted keys as sent, then settle the multi-choice and boolean
    /// fields a browser omits when nothing is checked
    fn plan_passthrough(
        &self,
        payload: &SubmissionPayload,
        specs: &[FieldSpec],
        commands: &mut Vec<WriteCommand>,
    ) {
        for (key, raw) in &payload.meta {
            let unsupported = specs
                .iter()
                .any(|spec| spec.key == *key && !spec.kind.is_supported());
            if unsupported {
                debug!("Ignoring submitted value for unsupported field '{}'", key);
                continue;
            }

            let value = match raw {
                RawValue::Scalar(text) => MetaValue::Text(text.clone()),
                RawValue::List(items) => MetaValue::List(items.clone()),
            };
            commands.push(WriteCommand::SetMeta { key: key.clone(), value });
        }

        let mut seen = HashSet::new();
        for spec in specs {
            if !seen.insert(spec.key.as_str()) || payload.has_meta(&spec.key) {
                continue;
            }
            if matches!(spec.kind, FieldKind::TrueFalse | FieldKind::Checkbox) {
                if let Some(value) = coerce(spec, None, self.config.missing_boolean) {
                    commands.push(WriteCommand::SetMeta { key: spec.key.clone(), value });
                }
            }
        }
    }
}

/// Split comma-separated tags, keeping empty segments
fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',').map(sanitize_text).collect()
}

/// Parse one field's submitted value into the value to store
///
/// `None` means the field is left untouched.
fn coerce(
    spec: &FieldSpec,
    raw: Option<&RawValue>,
    missing_boolean: MissingBooleanPolicy,
) -> Option<MetaValue> {
    match &spec.kind {
        FieldKind::Text
        | FieldKind::Email
        | FieldKind::Url
        | FieldKind::Number
        | FieldKind::Textarea
        | FieldKind::ColorPicker
        | FieldKind::DatePicker
        | FieldKind::Select
        | FieldKind::Radio => match raw? {
            RawValue::Scalar(text) => Some(MetaValue::Text(text.clone())),
            RawValue::List(_) => shape_mismatch(spec, "a single value"),
        },
        FieldKind::TrueFalse => match raw {
            Some(RawValue::Scalar(_)) => Some(MetaValue::Flag(true)),
            Some(RawValue::List(_)) => shape_mismatch(spec, "a single value"),
            None => match missing_boolean {
                MissingBooleanPolicy::SetFalse => Some(MetaValue::Flag(false)),
                MissingBooleanPolicy::LeaveUnchanged => None,
            },
        },
        FieldKind::Checkbox => match raw {
            Some(RawValue::List(items)) => Some(MetaValue::List(items.clone())),
            Some(RawValue::Scalar(_)) => shape_mismatch(spec, "a list"),
            None => Some(MetaValue::List(Vec::new())),
        },
        FieldKind::Unsupported(_) => None,
    }
}

fn shape_mismatch(spec: &FieldSpec, expected: &str) -> Option<MetaValue> {
    debug!("Skipping field '{}' ({}): expected {}", spec.key, spec.kind, expected);
    None
}
