use axum::{extract::State, response::Response};
use tower_sessions::Session;

use crate::{
    model::view::LoggedOutPage,
    server::{
        controller::layout, error::AppError, middleware::session::AuthSession, state::AppState,
        template,
    },
};

/// GET /auth/logout/ - End the session
///
/// Works for anonymous requests too.
///
/// # Returns
/// - `200 OK`: `users/logged_out.html`
pub async fn logout(State(state): State<AppState>, session: Session) -> Result<Response, AppError> {
    let auth_session = AuthSession::new(&session);

    if let Some(user_id) = auth_session.get_user_id().await? {
        tracing::info!("User {} logged out", user_id);
    }
    auth_session.clear().await?;

    state.templates.render(
        template::LOGGED_OUT,
        &LoggedOutPage {
            layout: layout(&state, None),
        },
    )
}
