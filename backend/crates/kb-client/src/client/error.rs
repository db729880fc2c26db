use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Failures seen by the kb-server client and the `kb` CLI
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Could not reach server: {source} {location}")]
    Transport {
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status
    #[error("Server returned {status} {code}: {message} {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Could not decode server response: {source} {location}")]
    Decode {
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid server URL '{url}': {message} {location}")]
    InvalidUrl {
        url: String,
        message: String,
        location: ErrorLocation,
    },

    /// Bad CLI input or a response missing something the CLI needs
    #[error("{message} {location}")]
    Usage {
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    #[track_caller]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server error code such as `NOT_FOUND`
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Field named by a `VALIDATION_ERROR`
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Api { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Transport {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Decode {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
