#![allow(dead_code)]
//! Shared fixtures for the integration and BDD tests

use frontedit_core::prelude::*;
use std::sync::Arc;

pub const ENTITY: EntityId = EntityId(42);
pub const OWNER: UserId = 7;
pub const SECRET: &str = "integration-secret";

/// The sample site: post 42 owned by user 7, a page with no field groups,
/// and one group of fields covering every kind
pub const SITE_JSON: &str = r#"{
  "entities": [
    {
      "id": 42,
      "title": "Draft",
      "tags": ["a", "b"],
      "author": 7,
      "meta": { "subtitle": "old", "featured": true, "colors": ["r"] }
    },
    { "id": 43, "kind": "page", "title": "About", "author": 7 }
  ],
  "groups": [
    {
      "key": "group_details",
      "title": "Details",
      "kinds": ["post"],
      "fields": [
        { "key": "subtitle", "label": "Subtitle", "type": "text" },
        { "key": "contact", "label": "Contact", "type": "email" },
        { "key": "summary", "label": "Summary", "type": "textarea" },
        { "key": "featured", "label": "Featured", "type": "true_false" },
        { "key": "size", "label": "Size", "type": "select",
          "choices": [{ "value": "s", "label": "Small" }, { "value": "l", "label": "Large" }] },
        { "key": "layout", "label": "Layout", "type": "radio",
          "choices": [{ "value": "wide", "label": "Wide" }, { "value": "narrow", "label": "Narrow" }] },
        { "key": "colors", "label": "Colors", "type": "checkbox",
          "choices": [{ "value": "r", "label": "Red" }, { "value": "g", "label": "Green" }] },
        { "key": "accent", "label": "Accent", "type": "color_picker" },
        { "key": "published", "label": "Published", "type": "date_picker" },
        { "key": "photos", "label": "Photos", "type": "gallery" }
      ]
    }
  ]
}"#;

pub fn site() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::from_json_str(SITE_JSON).expect("sample site parses"))
}

pub fn config() -> EditorConfig {
    let mut config = EditorConfig::default();
    config.security.token_secret = SECRET.to_string();
    config.form.include_styles = false;
    config
}

pub fn edit_form(store: &Arc<MemoryStore>, config: EditorConfig) -> EditForm {
    EditForm::new(config, store.clone(), store.clone())
}

pub fn owner() -> Caller {
    Caller::user(OWNER, &["author"]).with_session("sess-1")
}

pub fn view(caller: Caller, id: EntityId) -> PageRequest {
    PageRequest::from_http(caller, HttpRequest::get(&format!("/?p={}", id.0)))
}

pub fn submit(caller: Caller, id: EntityId, body: &str) -> PageRequest {
    PageRequest::from_http(caller, HttpRequest::post_form(&format!("/?p={}", id.0), body))
}

pub fn token_for(config: &EditorConfig, caller: &Caller) -> String {
    HmacTokenIssuer::from_config(&config.security).issue(&config.security.nonce_action, caller)
}

/// Urlencode `name=value` pairs into a form body
pub fn encode_body<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    pairs
        .into_iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// A form body with a valid token followed by `pairs`
pub fn signed_body(config: &EditorConfig, caller: &Caller, pairs: &[(&str, &str)]) -> String {
    let token = token_for(config, caller);
    encode_body(
        std::iter::once((config.security.nonce_field.as_str(), token.as_str()))
            .chain(pairs.iter().copied()),
    )
}

pub fn markup(form: &EditForm, page: &PageRequest) -> String {
    match form.handle(page).expect("handler succeeds") {
        ShortcodeOutcome::Markup(html) => html,
        other => panic!("expected markup, got {:?}", other),
    }
}

/// The `name=value` pairs a browser would submit for the rendered form
pub fn successful_controls(html: &str) -> Vec<(String, String)> {
    let mut controls = Vec::new();
    let mut select: Option<String> = None;
    let mut textarea: Option<(String, String)> = None;

    for line in html.lines() {
        if let Some((name, body)) = textarea.as_mut() {
            match line.split_once("</textarea>") {
                Some((last, _)) => {
                    body.push_str(last);
                    controls.push((unescape(name), unescape(body)));
                    textarea = None;
                }
                None => {
                    body.push_str(line);
                    body.push('\n');
                }
            }
        } else if let Some(name) =
            line.strip_prefix("<select name=\"").and_then(|s| s.split('"').next())
        {
            select = Some(unescape(name));
        } else if line.starts_with("</select>") {
            select = None;
        } else if line.starts_with("<option") {
            if let (Some(name), true) = (&select, line.contains(" selected>")) {
                controls.push((name.clone(), unescape(&attr(line, "value").unwrap_or_default())));
            }
        } else if line.starts_with("<textarea") {
            // The newline after the opening tag is not part of the value
            let name = attr(line, "name").unwrap_or_default();
            let rest = line.split_once('>').map(|(_, rest)| rest).unwrap_or_default();
            match rest.split_once("</textarea>") {
                Some((body, _)) => controls.push((unescape(&name), unescape(body))),
                None => textarea = Some((name, rest.to_string())),
            }
        } else if line.contains("<input ") {
            let (Some(kind), Some(name)) = (attr(line, "type"), attr(line, "name")) else {
                continue;
            };
            let value = attr(line, "value").unwrap_or_default();
            let is_box = kind == "checkbox" || kind == "radio";
            if !is_box || line.contains(" checked>") {
                controls.push((unescape(&name), unescape(&value)));
            }
        }
    }

    controls
}

fn attr(line: &str, name: &str) -> Option<String> {
    let needle = format!(" {}=\"", name);
    let start = line.find(&needle)? + needle.len();
    line[start..].split('"').next().map(str::to_string)
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&amp;", "&")
}
