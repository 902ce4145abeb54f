use anyhow::{Context, Result};
use frontedit_core::config::EditorConfig;
use frontedit_core::http::HttpRequest;
use frontedit_core::store::MemoryStore;
use frontedit_core::{EditForm, PageOutcome, PageRequest};
use std::path::Path;
use std::sync::Arc;

use super::{page_content, CallerArgs};

/// Handle one raw HTTP request and return the raw HTTP response.
///
/// The site file is rewritten only when a submission was applied.
pub fn run(
    config: &EditorConfig,
    store_path: &Path,
    raw_request: &[u8],
    content: Option<String>,
    caller: &CallerArgs,
) -> Result<Vec<u8>> {
    let request = HttpRequest::parse(raw_request).context("invalid HTTP request")?;
    log::debug!("{} {}", request.method(), request.path());

    let store = Arc::new(
        MemoryStore::from_json_file(store_path)
            .with_context(|| format!("failed to load site {}", store_path.display()))?,
    );
    let form = EditForm::new(config.clone(), store.clone(), store.clone());

    let page = PageRequest::from_http(caller.caller(), request);
    let outcome = form.render_page(&page_content(config, content), &page);

    if let PageOutcome::Redirect { location } = &outcome {
        store
            .save_json_file(store_path)
            .with_context(|| format!("failed to save site {}", store_path.display()))?;
        log::info!("Saved {} (redirecting to {})", store_path.display(), location);
    }

    Ok(outcome.into_response().to_bytes())
}
