//! Page templates and rendering.
//!
//! Templates are embedded in the binary and registered under their identifier
//! (`posts/index.html`, ...). Every rendered response carries that identifier as a
//! `RenderedTemplate` response extension.

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Extension,
};
use handlebars::Handlebars;
use serde::Serialize;

use crate::server::error::AppError;

pub const INDEX: &str = "posts/index.html";
pub const GROUP_LIST: &str = "posts/group_list.html";
pub const PROFILE: &str = "posts/profile.html";
pub const POST_DETAIL: &str = "posts/post_detail.html";
/// Shared by the create and edit pages.
pub const POST_FORM: &str = "posts/create.html";
pub const LOGGED_OUT: &str = "users/logged_out.html";
pub const NOT_FOUND: &str = "core/404.html";
pub const SERVER_ERROR: &str = "core/500.html";

const TEMPLATES: &[(&str, &str)] = &[
    (INDEX, include_str!("../../templates/posts/index.html")),
    (GROUP_LIST, include_str!("../../templates/posts/group_list.html")),
    (PROFILE, include_str!("../../templates/posts/profile.html")),
    (POST_DETAIL, include_str!("../../templates/posts/post_detail.html")),
    (POST_FORM, include_str!("../../templates/posts/create.html")),
    (LOGGED_OUT, include_str!("../../templates/users/logged_out.html")),
    (NOT_FOUND, include_str!("../../templates/core/404.html")),
    (SERVER_ERROR, include_str!("../../templates/core/500.html")),
];

const PARTIALS: &[(&str, &str)] = &[
    ("header", include_str!("../../templates/includes/header.html")),
    ("footer", include_str!("../../templates/includes/footer.html")),
    ("paginator", include_str!("../../templates/includes/paginator.html")),
    ("post_item", include_str!("../../templates/includes/post_item.html")),
];

/// Identifier of the template a response was rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedTemplate(pub &'static str);

/// Registry of all page templates.
#[derive(Clone)]
pub struct TemplateEngine {
    registry: Arc<Handlebars<'static>>,
}

impl TemplateEngine {
    /// Parses and registers every embedded template and partial.
    ///
    /// # Returns
    /// - `Ok(TemplateEngine)` - All templates parsed
    /// - `Err(AppError::TemplateErr(_))` - A template has a syntax error
    pub fn new() -> Result<Self, AppError> {
        let mut registry = Handlebars::new();

        for (name, source) in PARTIALS {
            registry.register_partial(name, *source)?;
        }
        for (name, source) in TEMPLATES {
            registry.register_template_string(name, *source)?;
        }

        Ok(Self {
            registry: Arc::new(registry),
        })
    }

    /// Renders a template into a `200 OK` HTML response.
    pub fn render<T: Serialize>(&self, name: &'static str, context: &T) -> Result<Response, AppError> {
        self.render_with_status(StatusCode::OK, name, context)
    }

    /// Renders a template into an HTML response with the given status.
    ///
    /// # Returns
    /// - `Ok(Response)` - HTML body with a `RenderedTemplate` extension
    /// - `Err(AppError::RenderErr(_))` - Unknown template or rendering failure
    pub fn render_with_status<T: Serialize>(
        &self,
        status: StatusCode,
        name: &'static str,
        context: &T,
    ) -> Result<Response, AppError> {
        let body = self.registry.render(name, context)?;

        Ok((status, Extension(RenderedTemplate(name)), Html(body)).into_response())
    }
}
