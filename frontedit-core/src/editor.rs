//! Edit form handler
//!
//! [`EditForm`] ties the collaborators together for one request:
//!
//! 1. only a single-entity page view with a valid id proceeds
//! 2. the caller must be allowed to edit the entity
//! 3. a POST carrying a valid anti-forgery token is applied, then the page
//!    redirects to the entity's permalink
//! 4. anything else renders the form with the entity's current values
//!
//! [`EditForm::render_page`] performs the shortcode substitution inside a page
//! body and absorbs handler errors so a broken store never breaks the page.

use crate::config::EditorConfig;
use crate::error::EditorError;
use crate::form::{SubmissionMapper, SubmissionPayload};
use crate::html::{Escaper, FormRenderer, HtmlEscaper};
use crate::http::{HttpRequest, HttpResponse};
use crate::model::EntityId;
use crate::resolver::SchemaResolver;
use crate::security::{Caller, EditAuthorizer, HmacTokenIssuer, RoleAuthorizer, TokenIssuer};
use crate::shortcode;
use crate::store::{ContentStore, SchemaStore};
use log::{debug, error, warn};
use std::sync::Arc;

/// What kind of page the shortcode is embedded in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageView {
    /// A single entity's page
    Single(EntityId),
    /// The front page or any other list of entities
    Listing,
    /// A category, tag or date archive
    Archive,
    /// Search results
    Search,
}

impl PageView {
    /// Classify a request by its query string
    ///
    /// `?p=<id>` is a single entity, `?s=` a search, `?cat=`, `?tag=` and
    /// `?m=` archives. Everything else is a listing.
    pub fn from_query(request: &HttpRequest) -> Self {
        if let Some(id) = request.query_param("p") {
            return match id.parse::<EntityId>() {
                Ok(id) => PageView::Single(id),
                Err(_) => PageView::Listing,
            };
        }
        if request.query_param("s").is_some() {
            return PageView::Search;
        }
        if ["cat", "tag", "m"].iter().any(|key| request.query_param(key).is_some()) {
            return PageView::Archive;
        }
        PageView::Listing
    }
}

/// One page render: where, who, and the raw request
#[derive(Debug, Clone)]
pub struct PageRequest {
    pub view: PageView,
    pub caller: Caller,
    pub request: HttpRequest,
}

impl PageRequest {
    pub fn new(view: PageView, caller: Caller, request: HttpRequest) -> Self {
        Self { view, caller, request }
    }

    /// Build a page request, deriving the view from the query string
    pub fn from_http(caller: Caller, request: HttpRequest) -> Self {
        let view = PageView::from_query(&request);
        Self::new(view, caller, request)
    }
}

/// Result of expanding one shortcode occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortcodeOutcome {
    /// Nothing to show (wrong page kind or caller may not edit)
    Empty,
    /// The rendered form
    Markup(String),
    /// A submission was applied; the client should go here
    Redirect { location: String },
}

impl ShortcodeOutcome {
    pub fn into_response(self) -> HttpResponse {
        match self {
            ShortcodeOutcome::Empty => HttpResponse::no_content(),
            ShortcodeOutcome::Markup(html) => HttpResponse::ok().html(&html),
            ShortcodeOutcome::Redirect { location } => HttpResponse::redirect(&location),
        }
    }
}

/// Result of rendering a whole page body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    Content(String),
    Redirect { location: String },
}

impl PageOutcome {
    pub fn into_response(self) -> HttpResponse {
        match self {
            PageOutcome::Content(html) => HttpResponse::ok().html(&html),
            PageOutcome::Redirect { location } => HttpResponse::redirect(&location),
        }
    }
}

/// The edit form shortcode
pub struct EditForm {
    config: EditorConfig,
    content: Arc<dyn ContentStore>,
    resolver: SchemaResolver,
    mapper: SubmissionMapper,
    renderer: FormRenderer,
    authorizer: Arc<dyn EditAuthorizer>,
    tokens: Arc<dyn TokenIssuer>,
}

impl EditForm {
    /// Create the handler with the reference authorizer, token issuer and escaper
    pub fn new(
        config: EditorConfig,
        content: Arc<dyn ContentStore>,
        schema: Arc<dyn SchemaStore>,
    ) -> Self {
        let resolver = SchemaResolver::new(schema, content.clone());
        let mapper = SubmissionMapper::new(content.clone(), config.submission.clone());
        let renderer = FormRenderer::new(
            Arc::new(HtmlEscaper),
            config.form.clone(),
            config.security.nonce_field.clone(),
        );
        let authorizer = Arc::new(RoleAuthorizer::from_config(&config.security));
        let tokens = Arc::new(HmacTokenIssuer::from_config(&config.security));

        Self { config, content, resolver, mapper, renderer, authorizer, tokens }
    }

    pub fn with_authorizer(mut self, authorizer: Arc<dyn EditAuthorizer>) -> Self {
        self.authorizer = authorizer;
        self
    }

    pub fn with_token_issuer(mut self, tokens: Arc<dyn TokenIssuer>) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn with_escaper(mut self, escaper: Arc<dyn Escaper>) -> Self {
        self.renderer = FormRenderer::new(
            escaper,
            self.config.form.clone(),
            self.config.security.nonce_field.clone(),
        );
        self
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Handle one shortcode invocation
    pub fn handle(&self, page: &PageRequest) -> Result<ShortcodeOutcome, EditorError> {
        let id = match page.view {
            PageView::Single(id) if id.is_valid() => id,
            view => {
                debug!("Edit form skipped on {:?} view", view);
                return Ok(ShortcodeOutcome::Empty);
            }
        };

        let owner = self.content.author(id)?;
        if !self.authorizer.can_edit(&page.caller, id, owner) {
            debug!("Caller {:?} may not edit entity {}", page.caller.user_id, id);
            return Ok(ShortcodeOutcome::Empty);
        }

        let payload =
            SubmissionPayload::from_request(&page.request, &self.config.security.nonce_field)?;
        if let Some(payload) = payload {
            match payload.token.as_deref() {
                Some(token)
                    if self.tokens.verify(
                        token,
                        &self.config.security.nonce_action,
                        &page.caller,
                    ) =>
                {
                    let specs = self.resolver.specs(id);
                    self.mapper.apply_submission(id, &payload, &specs)?;
                    let location = self.content.permalink(id)?;
                    return Ok(ShortcodeOutcome::Redirect { location });
                }
                Some(_) => warn!("Rejected submission for entity {}: invalid token", id),
                None => debug!("Submission for entity {} carries no token", id),
            }
        }

        self.render_form(id, &page.caller).map(ShortcodeOutcome::Markup)
    }

    fn render_form(&self, id: EntityId, caller: &Caller) -> Result<String, EditorError> {
        let title = self.content.title(id)?;
        let tags = self.content.tags(id)?.join(",");
        let fields = self.resolver.resolve(id);
        let token = self.tokens.issue(&self.config.security.nonce_action, caller);

        Ok(self.renderer.render(&token, &title, &tags, &fields))
    }

    /// Expand every occurrence of the shortcode in a page body
    pub fn render_page(&self, content: &str, page: &PageRequest) -> PageOutcome {
        let occurrences = shortcode::scan(content, &self.config.form.shortcode_tag);
        if occurrences.is_empty() {
            return PageOutcome::Content(content.to_string());
        }

        let mut out = String::with_capacity(content.len());
        let mut last = 0;
        // Decided on the first live occurrence and reused for the rest;
        // `Some(None)` records a failed run
        let mut decided: Option<Option<ShortcodeOutcome>> = None;

        for occurrence in &occurrences {
            out.push_str(&content[last..occurrence.range.start]);
            last = occurrence.range.end;

            if occurrence.escaped {
                out.push_str(occurrence.literal(content));
                continue;
            }
            if !occurrence.attributes.is_empty() {
                debug!("Ignoring shortcode attributes {:?}", occurrence.attributes);
            }

            let outcome = decided.get_or_insert_with(|| match self.handle(page) {
                Ok(outcome) => Some(outcome),
                Err(e) => {
                    error!("Edit form failed: {}", e);
                    None
                }
            });
            match outcome {
                Some(ShortcodeOutcome::Markup(html)) => out.push_str(html),
                Some(ShortcodeOutcome::Redirect { location }) => {
                    return PageOutcome::Redirect { location: location.clone() };
                }
                Some(ShortcodeOutcome::Empty) | None => {}
            }
        }

        out.push_str(&content[last..]);
        PageOutcome::Content(out)
    }
}
