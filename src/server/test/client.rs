//! Test clients for the application under test.
//!
//! `TestApp` runs the real router with a session layer over the test database and
//! answers requests in-process through `tower::ServiceExt::oneshot`. Suites talk to
//! it through the `Application` trait and the anonymous/authorized `Client`s.

use std::fmt::Debug;

use axum::{
    body::{self, Body},
    http::{
        header::{CONTENT_TYPE, COOKIE, LOCATION},
        Method, Request, StatusCode,
    },
    Router,
};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    error::AppError,
    middleware::session::AuthSession,
    model::page::DEFAULT_PER_PAGE,
    router::router,
    state::AppState,
    template::{RenderedTemplate, TemplateEngine},
};

pub const LOGIN_URL: &str = "/auth/login/";

/// What a single request produced.
#[derive(Debug, Clone)]
pub struct Observed {
    pub status: StatusCode,
    /// Template the response was rendered from, if any.
    pub template: Option<&'static str>,
    /// `Location` header of redirects.
    pub location: Option<String>,
    pub body: String,
}

/// Credentials a client sends with every request.
#[derive(Debug, Clone)]
pub struct AuthContext {
    cookie: String,
}

/// The web application as seen by the suites.
pub trait Application {
    async fn handle(
        &self,
        method: Method,
        path: &str,
        auth: Option<&AuthContext>,
        form: Option<&[(&str, &str)]>,
    ) -> Result<Observed, AppError>;
}

fn test_error(e: test_utils::error::TestError) -> AppError {
    AppError::InternalError(format!("Test setup failed: {}", e))
}

/// The real application over an in-memory database.
pub struct TestApp {
    context: TestContext,
    app: Router,
}

impl TestApp {
    /// Builds the application over a fresh database with the blog tables.
    pub async fn new() -> Result<Self, AppError> {
        let mut context = TestBuilder::new()
            .with_blog_tables()
            .build()
            .await
            .map_err(test_error)?;
        let db = context.database().await.map_err(test_error)?.clone();

        let session_store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
        session_store.migrate().await?;

        let state = AppState::new(
            db,
            TemplateEngine::new()?,
            LOGIN_URL.to_string(),
            DEFAULT_PER_PAGE,
        );
        let app = router(state).layer(SessionManagerLayer::new(session_store));

        Ok(Self { context, app })
    }

    pub fn db(&self) -> &sea_orm::DatabaseConnection {
        match self.context.db {
            Some(ref db) => db,
            None => unreachable!("database initialized in TestApp::new"),
        }
    }

    /// Saves a new server-side session logged in as `user_id`.
    ///
    /// Every call returns credentials for a distinct session.
    pub async fn force_login(&mut self, user_id: i32) -> Result<AuthContext, AppError> {
        let session = self.context.new_session().await.map_err(test_error)?;

        AuthSession::new(&session).set_user_id(user_id).await?;
        session.save().await?;

        let id = session
            .id()
            .ok_or_else(|| AppError::InternalError("Saved session has no id".to_string()))?;

        Ok(AuthContext {
            cookie: format!("id={}", id),
        })
    }
}

impl Application for TestApp {
    async fn handle(
        &self,
        method: Method,
        path: &str,
        auth: Option<&AuthContext>,
        form: Option<&[(&str, &str)]>,
    ) -> Result<Observed, AppError> {
        let mut request = Request::builder().method(method).uri(path);

        if let Some(auth) = auth {
            request = request.header(COOKIE, &auth.cookie);
        }

        let body = match form {
            Some(fields) => {
                request = request.header(CONTENT_TYPE, "application/x-www-form-urlencoded");
                let encoded = url::form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(fields.iter())
                    .finish();
                Body::from(encoded)
            }
            None => Body::empty(),
        };

        let request = request
            .body(body)
            .map_err(|e| AppError::InternalError(format!("Invalid request: {}", e)))?;

        let response = match self.app.clone().oneshot(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        };

        let status = response.status();
        let template = response
            .extensions()
            .get::<RenderedTemplate>()
            .map(|rendered| rendered.0);
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to read body: {}", e)))?;

        Ok(Observed {
            status,
            template,
            location,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

/// A browser-like client, anonymous or logged in.
pub struct Client<'a, A: Application> {
    app: &'a A,
    auth: Option<AuthContext>,
}

impl<'a, A: Application> Client<'a, A> {
    pub fn anonymous(app: &'a A) -> Self {
        Self { app, auth: None }
    }

    pub fn authorized(app: &'a A, auth: AuthContext) -> Self {
        Self {
            app,
            auth: Some(auth),
        }
    }

    pub async fn get(&self, path: &str) -> Result<Observed, AppError> {
        self.app
            .handle(Method::GET, path, self.auth.as_ref(), None)
            .await
    }

    pub async fn post(&self, path: &str, form: &[(&str, &str)]) -> Result<Observed, AppError> {
        self.app
            .handle(Method::POST, path, self.auth.as_ref(), Some(form))
            .await
    }
}

/// Collects failed checks so every case of a table runs before the test fails.
///
/// Failures are prefixed with the current scope, e.g. `status: /create/: ...`, so a
/// report names the table a failing case belongs to.
#[derive(Default)]
pub struct SubTests {
    scope: Option<&'static str>,
    failures: Vec<String>,
}

impl SubTests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names the table that the following checks belong to.
    pub fn scope(&mut self, name: &'static str) {
        self.scope = Some(name);
    }

    fn push(&mut self, path: &str, message: String) {
        let failure = match self.scope {
            Some(scope) => format!("{}: {}: {}", scope, path, message),
            None => format!("{}: {}", path, message),
        };
        self.failures.push(failure);
    }

    /// Records a failure unless `observed` equals `expected`.
    pub fn check<T: PartialEq + Debug>(&mut self, path: &str, what: &str, expected: T, observed: T) {
        if expected != observed {
            self.push(
                path,
                format!("expected {} {:?}, got {:?}", what, expected, observed),
            );
        }
    }

    /// Records a request that could not be made at all.
    pub fn error(&mut self, path: &str, err: AppError) {
        self.push(path, format!("request failed: {}", err));
    }

    /// Fails the test with every recorded failure.
    pub fn finish(self) {
        assert!(
            self.failures.is_empty(),
            "{} failed check(s):\n{}",
            self.failures.len(),
            self.failures.join("\n")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passing_checks_finish_quietly() {
        let mut checks = SubTests::new();
        checks.scope("status");
        checks.check("/", "status", StatusCode::OK, StatusCode::OK);

        checks.finish();
    }

    #[test]
    #[should_panic(expected = "auth-only: /create/: expected status")]
    fn failures_name_their_scope() {
        let mut checks = SubTests::new();
        checks.scope("status");
        checks.check("/", "status", StatusCode::OK, StatusCode::OK);
        checks.scope("auth-only");
        checks.check("/create/", "status", StatusCode::OK, StatusCode::SEE_OTHER);

        checks.finish();
    }

    #[test]
    #[should_panic(expected = "2 failed check(s)")]
    fn every_failure_is_reported() {
        let mut checks = SubTests::new();
        checks.scope("template");
        checks.check("/", "template", Some("posts/index.html"), None);
        checks.check("/create/", "template", Some("posts/create.html"), None);

        checks.finish();
    }
}
