use crate::server::{
    error::{config::ConfigError, AppError},
    model::page::DEFAULT_PER_PAGE,
};

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_LOGIN_URL: &str = "/auth/login/";

pub struct Config {
    pub database_url: String,

    pub listen_addr: String,
    /// Where anonymous users are sent when a page requires login.
    pub login_url: String,
    pub posts_per_page: u64,
    /// Whether the session cookie is only sent over HTTPS.
    pub session_cookie_secure: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and all values valid
    /// - `Err(AppError::ConfigErr(_))` - Missing required variable or invalid value
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let posts_per_page = match lookup("POSTS_PER_PAGE") {
            None => DEFAULT_PER_PAGE,
            Some(value) => match value.parse::<u64>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "POSTS_PER_PAGE".to_string(),
                        value,
                        reason: "expected a positive integer".to_string(),
                    }
                    .into())
                }
            },
        };

        let session_cookie_secure = match lookup("SESSION_COOKIE_SECURE") {
            None => false,
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "SESSION_COOKIE_SECURE".to_string(),
                        value,
                        reason: "expected true or false".to_string(),
                    }
                    .into())
                }
            },
        };

        Ok(Self {
            database_url,
            listen_addr: lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
            login_url: lookup("LOGIN_URL").unwrap_or_else(|| DEFAULT_LOGIN_URL.to_string()),
            posts_per_page,
            session_cookie_secure,
        })
    }
}
