use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Short reason safe to show to the caller.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InvalidToken { .. } | Self::JwtDecode { .. } => "Invalid token",
            Self::TokenExpired { .. } => "Token expired",
            Self::MissingHeader { .. } => "Missing authorization header",
            Self::InvalidScheme { .. } => "Authorization header must use the Bearer scheme",
            Self::InvalidClaim { .. } => "Invalid token claims",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
