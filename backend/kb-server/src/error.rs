use thiserror::Error;

/// Startup failures. Request-time failures are [`crate::ApiError`].
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] kb_config::ConfigError),

    #[error("Auth setup error: {0}")]
    Auth(#[from] kb_auth::AuthError),

    #[error("Database error: {0}")]
    Database(#[from] kb_db::DbError),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
