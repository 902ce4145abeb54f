//! Behaviour scenarios for the edit form shortcode

mod helpers;

use cucumber::{given, then, when, World};
use frontedit_core::prelude::*;
use helpers::{config, edit_form, signed_body, submit, view};
use std::sync::Arc;

#[derive(Debug, Default, World)]
pub struct EditorWorld {
    entity: Option<StoredEntity>,
    fields: Vec<FieldSpec>,
    caller: Caller,
    store: Option<Arc<MemoryStore>>,
    outcome: Option<PageOutcome>,
}

impl EditorWorld {
    fn entity_mut(&mut self) -> &mut StoredEntity {
        self.entity.as_mut().expect("a post must be defined first")
    }

    fn entity_id(&self) -> EntityId {
        self.entity.as_ref().map(|e| e.id).expect("a post must be defined first")
    }

    /// The site, built from the Given steps on first use
    fn store(&mut self) -> Arc<MemoryStore> {
        if let Some(store) = &self.store {
            return store.clone();
        }

        let store = Arc::new(MemoryStore::new());
        store.insert(self.entity.clone().expect("a post must be defined first"));
        if !self.fields.is_empty() {
            store.add_group(FieldGroup::new("group_bdd", "Fields"), &[], self.fields.clone());
        }
        self.store = Some(store.clone());
        store
    }

    fn render(&mut self, page: PageRequest) {
        let store = self.store();
        let form = edit_form(&store, config());
        self.outcome = Some(form.render_page("[cpt_edit_form]", &page));
    }

    fn content(&self) -> &str {
        match self.outcome.as_ref().expect("no page rendered yet") {
            PageOutcome::Content(html) => html,
            PageOutcome::Redirect { location } => panic!("page redirected to {}", location),
        }
    }

    fn stored(&mut self) -> StoredEntity {
        let id = self.entity_id();
        self.store().entity(id).expect("post still exists")
    }
}

// --- Given ---

#[given(expr = "a post {int} titled {string} with tags {string} owned by user {int}")]
async fn given_post(world: &mut EditorWorld, id: u64, title: String, tags: String, owner: u64) {
    let tags: Vec<&str> = tags.split(',').collect();
    world.entity =
        Some(StoredEntity::new(EntityId(id), title).with_tags(&tags).with_author(owner));
}

#[given(expr = "the post has a {word} field {string}")]
async fn given_field(world: &mut EditorWorld, kind: String, key: String) {
    world.fields.push(FieldSpec::new(key.clone(), key, FieldKind::from_type_name(&kind)));
}

#[given(expr = "the post has a {word} field {string} with choices {string}")]
async fn given_choice_field(world: &mut EditorWorld, kind: String, key: String, choices: String) {
    let spec = choices.split(',').fold(
        FieldSpec::new(key.clone(), key, FieldKind::from_type_name(&kind)),
        |spec, choice| spec.with_choice(choice, choice.to_uppercase()),
    );
    world.fields.push(spec);
}

#[given(expr = "field {string} of the post holds {string}")]
async fn given_field_value(world: &mut EditorWorld, key: String, value: String) {
    world.entity_mut().meta.insert(key, MetaValue::Text(value));
}

#[given(expr = "user {int} with role {string} is signed in")]
async fn given_user(world: &mut EditorWorld, user: u64, role: String) {
    world.caller = Caller::user(user, &[role.as_str()]).with_session("bdd-session");
}

#[given("nobody is signed in")]
async fn given_anonymous(world: &mut EditorWorld) {
    world.caller = Caller::anonymous();
}

// --- When ---

#[when("they open the post")]
async fn when_open(world: &mut EditorWorld) {
    let page = view(world.caller.clone(), world.entity_id());
    world.render(page);
}

#[when(expr = "they submit title {string}, tags {string} and {string} set to {string}")]
async fn when_submit_values(
    world: &mut EditorWorld,
    title: String,
    tags: String,
    key: String,
    value: String,
) {
    let field = format!("acf[{}]", key);
    let body = signed_body(
        &config(),
        &world.caller,
        &[
            ("post_title", title.as_str()),
            ("post_tags", tags.as_str()),
            (field.as_str(), value.as_str()),
        ],
    );
    let page = submit(world.caller.clone(), world.entity_id(), &body);
    world.render(page);
}

#[when("they submit the form with nothing checked")]
async fn when_submit_empty(world: &mut EditorWorld) {
    let body = signed_body(&config(), &world.caller, &[]);
    let page = submit(world.caller.clone(), world.entity_id(), &body);
    world.render(page);
}

#[when(expr = "they submit title {string} with a forged token")]
async fn when_submit_forged(world: &mut EditorWorld, title: String) {
    let body =
        helpers::encode_body([("cpt_editor_nonce", "forged"), ("post_title", title.as_str())]);
    let page = submit(world.caller.clone(), world.entity_id(), &body);
    world.render(page);
}

// --- Then ---

#[then(expr = "the page redirects to {string}")]
async fn then_redirect(world: &mut EditorWorld, location: String) {
    assert_eq!(world.outcome, Some(PageOutcome::Redirect { location }));
}

#[then("the page shows the edit form")]
async fn then_form(world: &mut EditorWorld) {
    assert!(world.content().contains(r#"<form method="post" class="cpt-editor">"#));
}

#[then("the page is empty")]
async fn then_empty(world: &mut EditorWorld) {
    assert_eq!(world.content(), "");
}

#[then(expr = "the page shows the unsupported notice for {string}")]
async fn then_notice(world: &mut EditorWorld, type_name: String) {
    let notice = format!(r#"<em>Field type "{}" is not supported yet.</em>"#, type_name);
    assert!(world.content().contains(&notice));
}

#[then(expr = "the page has no control named {string}")]
async fn then_no_control(world: &mut EditorWorld, name: String) {
    assert!(!world.content().contains(&format!(r#"name="{}"#, name)));
}

#[then(expr = "the post title is {string}")]
async fn then_title(world: &mut EditorWorld, title: String) {
    assert_eq!(world.stored().title, title);
}

#[then(expr = "the post tags are {string}")]
async fn then_tags(world: &mut EditorWorld, tags: String) {
    assert_eq!(world.stored().tags.join(","), tags);
}

#[then(expr = "field {string} is {string}")]
async fn then_field(world: &mut EditorWorld, key: String, value: String) {
    let stored = world.stored().meta.get(&key).map(MetaValue::to_text).unwrap_or_default();
    assert_eq!(stored, value);
}

#[tokio::main]
async fn main() {
    EditorWorld::cucumber().run_and_exit("tests/features").await;
}
