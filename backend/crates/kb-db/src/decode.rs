//! Conversions from stored column values back into domain types.

use crate::{DbError, Result as DbErrorResult};

use kb_core::Priority;

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use uuid::Uuid;

#[track_caller]
pub(crate) fn uuid(value: &str, column: &str) -> DbErrorResult<Uuid> {
    let location = ErrorLocation::from(Location::caller());
    Uuid::parse_str(value).map_err(|e| DbError::Decode {
        column: column.to_string(),
        message: e.to_string(),
        location,
    })
}

#[track_caller]
pub(crate) fn timestamp(value: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    let location = ErrorLocation::from(Location::caller());
    DateTime::from_timestamp(value, 0).ok_or_else(|| DbError::Decode {
        column: column.to_string(),
        message: format!("timestamp {value} out of range"),
        location,
    })
}

#[track_caller]
pub(crate) fn priority(value: &str) -> DbErrorResult<Priority> {
    let location = ErrorLocation::from(Location::caller());
    Priority::from_str(value).map_err(|e| DbError::Decode {
        column: "priority".to_string(),
        message: e.to_string(),
        location,
    })
}
