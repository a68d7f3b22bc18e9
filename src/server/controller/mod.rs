//! HTTP request handlers.
//!
//! Handlers resolve the viewer from the session, call into the service layer and
//! render the page template. Errors propagate as `AppError`, which turns them into
//! redirects or status codes.

pub mod auth;
pub mod post;

use axum::http::Uri;

use crate::{
    model::view::LayoutDto,
    server::{error::AppError, model::user::User, state::AppState},
};

/// Builds the header values shared by every page.
fn layout(state: &AppState, viewer: Option<&User>) -> LayoutDto {
    LayoutDto {
        viewer: viewer.cloned().map(User::into_dto),
        login_url: state.login_url.clone(),
    }
}

/// Fallback for every unmatched path.
///
/// The 404 page itself is rendered by `middleware::error_page`.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
