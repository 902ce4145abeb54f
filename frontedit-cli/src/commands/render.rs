use anyhow::{bail, Context, Result};
use frontedit_core::config::EditorConfig;
use frontedit_core::http::HttpRequest;
use frontedit_core::store::MemoryStore;
use frontedit_core::{EditForm, EntityId, PageOutcome, PageRequest, PageView};
use std::path::Path;
use std::sync::Arc;

use super::{page_content, CallerArgs};

/// Render the page of `entity` as `caller` would see it.
pub fn run(
    config: &EditorConfig,
    store_path: &Path,
    entity: u64,
    content: Option<String>,
    caller: &CallerArgs,
) -> Result<String> {
    let store = Arc::new(
        MemoryStore::from_json_file(store_path)
            .with_context(|| format!("failed to load site {}", store_path.display()))?,
    );
    let form = EditForm::new(config.clone(), store.clone(), store);

    let request = HttpRequest::get(&format!("/?p={}", entity));
    let page = PageRequest::new(PageView::Single(EntityId(entity)), caller.caller(), request);

    match form.render_page(&page_content(config, content), &page) {
        PageOutcome::Content(html) => Ok(html),
        PageOutcome::Redirect { location } => bail!("unexpected redirect to {}", location),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;

    #[test]
    fn renders_form_for_owner() {
        let tmp = tempfile::tempdir().unwrap();
        let site = fixtures::site_file(tmp.path());

        let html = run(&fixtures::config(), &site, 42, None, &fixtures::owner()).unwrap();
        assert!(html.contains(r#"name="post_title" value="Draft""#));
        assert!(html.contains(r#"name="acf[subtitle]" value="old""#));
    }

    #[test]
    fn renders_nothing_for_anonymous() {
        let tmp = tempfile::tempdir().unwrap();
        let site = fixtures::site_file(tmp.path());

        let html = run(
            &fixtures::config(),
            &site,
            42,
            Some("<p>Hello</p>[cpt_edit_form]".to_string()),
            &CallerArgs::default(),
        )
        .unwrap();
        assert_eq!(html, "<p>Hello</p>");
    }

    #[test]
    fn missing_site_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope.json");
        let err = run(&fixtures::config(), &missing, 42, None, &fixtures::owner()).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to load site"));
    }
}
