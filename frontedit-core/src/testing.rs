use crate::config::EditorConfig;
use crate::editor::EditForm;
use crate::model::{EntityId, FieldKind, FieldSpec, MetaValue, UserId};
use crate::security::{Caller, HmacTokenIssuer, TokenIssuer};
use crate::store::{FieldGroup, MemoryStore, StoredEntity};
use std::sync::Arc;

// --- Test Site Definition ---

pub const ENTITY: EntityId = EntityId(42);
pub const OWNER: UserId = 7;
pub const SECRET: &str = "test-secret";

/// A post "Draft" tagged `a,b`, with one field group covering every field kind
pub fn sample_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store.insert(
        StoredEntity::new(ENTITY, "Draft")
            .with_tags(&["a", "b"])
            .with_author(OWNER)
            .with_meta("subtitle", MetaValue::from("old")),
    );
    store.add_group(FieldGroup::new("group_details", "Details"), &["post"], sample_fields());
    store
}

pub fn sample_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("subtitle", "Subtitle", FieldKind::Text),
        FieldSpec::new("summary", "Summary", FieldKind::Textarea),
        FieldSpec::new("featured", "Featured", FieldKind::TrueFalse),
        FieldSpec::new("size", "Size", FieldKind::Select)
            .with_choice("s", "Small")
            .with_choice("l", "Large"),
        FieldSpec::new("colors", "Colors", FieldKind::Checkbox)
            .with_choice("r", "Red")
            .with_choice("g", "Green"),
        FieldSpec::new("photos", "Photos", FieldKind::Unsupported("gallery".to_string())),
    ]
}

/// Default config with a fixed token secret and no stylesheet
pub fn editor_config() -> EditorConfig {
    let mut config = EditorConfig::default();
    config.security.token_secret = SECRET.to_string();
    config.form.include_styles = false;
    config
}

pub fn edit_form(store: &Arc<MemoryStore>) -> EditForm {
    EditForm::new(editor_config(), store.clone(), store.clone())
}

/// The entity's owner, with the author role
pub fn author() -> Caller {
    Caller::user(OWNER, &["author"]).with_session("session-1")
}

/// Urlencoded form body carrying a valid token for `caller`
pub fn form_body(form: &EditForm, caller: &Caller, pairs: &[(&str, &str)]) -> String {
    let security = &form.config().security;
    let token = HmacTokenIssuer::from_config(security).issue(&security.nonce_action, caller);

    std::iter::once((security.nonce_field.as_str(), token.as_str()))
        .chain(pairs.iter().copied())
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
