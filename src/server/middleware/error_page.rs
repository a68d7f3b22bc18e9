use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tower_sessions::Session;

use crate::{
    model::view::{ErrorPage, LayoutDto},
    server::{
        middleware::auth::AuthGuard,
        model::user::User,
        state::AppState,
        template::{self, RenderedTemplate},
    },
};

/// Replaces bare 404 and 500 responses with the rendered error templates.
///
/// Responses that were already rendered from a template pass through untouched, as
/// do all other statuses. If the error page itself fails to render the original
/// response is returned.
pub async fn render_error_pages(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    let session = request.extensions().get::<Session>().cloned();

    let response = next.run(request).await;

    if let Some(RenderedTemplate(name)) = response.extensions().get::<RenderedTemplate>() {
        tracing::trace!("{} rendered from {}", path, name);
        return response;
    }

    let status = response.status();
    let name = match status {
        StatusCode::NOT_FOUND => template::NOT_FOUND,
        StatusCode::INTERNAL_SERVER_ERROR => template::SERVER_ERROR,
        _ => return response,
    };

    let viewer = match &session {
        Some(session) => AuthGuard::new(&state.db, session)
            .current_user()
            .await
            .ok()
            .flatten(),
        None => None,
    };

    let context = ErrorPage {
        layout: LayoutDto {
            viewer: viewer.map(User::into_dto),
            login_url: state.login_url.clone(),
        },
        path,
    };

    match state.templates.render_with_status(status, name, &context) {
        Ok(page) => page,
        Err(err) => {
            tracing::error!("Failed to render {}: {}", name, err);
            response
        }
    }
}
