use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on '{field}': {message} {location}")]
    Validation {
        field: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid priority: {value} {location}")]
    InvalidPriority {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid task sort: {value} {location}")]
    InvalidTaskSort {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Field the error refers to, if any.
    pub fn field(&self) -> &str {
        match self {
            Self::Validation { field, .. } => field,
            Self::InvalidPriority { .. } => "priority",
            Self::InvalidTaskSort { .. } => "sort",
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
