use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Ordering applied when listing the tasks of a column.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskSort {
    /// Newest first.
    #[default]
    Created,
    /// High, medium, low; then by order within each priority.
    Priority,
}

impl TaskSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Priority => "priority",
        }
    }
}

impl FromStr for TaskSort {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "created" | "created_at" => Ok(Self::Created),
            "priority" => Ok(Self::Priority),
            _ => Err(CoreError::InvalidTaskSort {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
