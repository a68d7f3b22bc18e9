use axum::response::{IntoResponse, Redirect, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The route requires a logged in user but the request is anonymous.
    ///
    /// Results in a redirect to the login page carrying the requested path in
    /// the `next` query parameter.
    #[error("Login required to access {next}")]
    LoginRequired {
        /// Base URL of the login page
        login_url: String,
        /// Path the user should return to after logging in
        next: String,
    },

    /// A user attempted to edit a post written by someone else.
    ///
    /// Results in a redirect to the post's detail page; nothing is changed.
    #[error("User {user_id} is not the author of post {post_id}")]
    NotAuthor { user_id: i32, post_id: i32 },
}

/// Builds `{login_url}?next={next}` with `next` form-encoded.
pub fn login_redirect_url(login_url: &str, next: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("next", next)
        .finish();

    format!("{}?{}", login_url, query)
}

/// Converts authentication errors into redirects.
///
/// - `LoginRequired` → 303 to the login page with `next`
/// - `NotAuthor` → 303 to `/posts/{post_id}/`
///
/// Both outcomes are logged at debug level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::LoginRequired { login_url, next } => {
                Redirect::to(&login_redirect_url(&login_url, &next)).into_response()
            }
            Self::NotAuthor { post_id, .. } => {
                Redirect::to(&format!("/posts/{}/", post_id)).into_response()
            }
        }
    }
}
