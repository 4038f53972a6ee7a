use serde_json::Error as SerdeJsonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] SerdeJsonError),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("enter a search term first")]
    EmptyQuery,

    #[error("select an image first")]
    NoImageSelected,

    #[error("log in to access the admin panel")]
    NotLoggedIn,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("no session directory available on this platform")]
    NoSessionDir,
}

impl AppError {
    /// Usage errors are caller mistakes caught before any network traffic.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, AppError::EmptyQuery | AppError::NoImageSelected)
    }
}
