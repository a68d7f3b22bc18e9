use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::server::{
    controller::{
        auth::logout,
        not_found,
        post::{
            group_posts, index, post_create, post_create_form, post_detail, post_edit,
            post_edit_form, profile,
        },
    },
    middleware::error_page::render_error_pages,
    state::AppState,
};

/// Builds the application's routes.
///
/// The returned router still needs the session layer, which `main` (and the HTTP
/// tests) wrap around it.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/group/{slug}/", get(group_posts))
        .route("/profile/{username}/", get(profile))
        .route("/create/", get(post_create_form).post(post_create))
        .route("/posts/{post_id}/", get(post_detail))
        .route("/posts/{post_id}/edit/", get(post_edit_form).post(post_edit))
        .route("/auth/logout/", get(logout))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            render_error_pages,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
