//! Request field checks shared by the REST handlers.

use crate::{ApiError, ApiResult};

use kb_core::Priority;

use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

const MAX_EMAIL_LENGTH: usize = 254;

/// Trim surrounding whitespace
pub fn sanitize_string(value: &str) -> String {
    value.trim().to_string()
}

/// Check a string's length in characters against `[min, max]`
#[track_caller]
pub fn validate_string(value: &str, field: &str, min: usize, max: usize) -> ApiResult<()> {
    let len = value.chars().count();

    if len < min {
        let message = if min == 1 {
            format!("{field} is required")
        } else {
            format!("{field} must be at least {min} characters")
        };
        return Err(ApiError::validation(field, message));
    }

    if len > max {
        return Err(ApiError::validation(
            field,
            format!("{field} must not exceed {max} characters"),
        ));
    }

    Ok(())
}

/// Trimmed, non-empty text of at most `max` characters
#[track_caller]
pub fn required_text(value: &str, field: &str, max: usize) -> ApiResult<String> {
    let value = sanitize_string(value);
    validate_string(&value, field, 1, max)?;
    Ok(value)
}

/// Trimmed text of at most `max` characters; blank becomes `None`
#[track_caller]
pub fn optional_text(value: &str, field: &str, max: usize) -> ApiResult<Option<String>> {
    let value = sanitize_string(value);
    validate_string(&value, field, 0, max)?;
    Ok(Some(value).filter(|v| !v.is_empty()))
}

#[track_caller]
pub fn parse_id(value: &str, field: &str) -> ApiResult<Uuid> {
    let location = ErrorLocation::from(Location::caller());
    Uuid::parse_str(value).map_err(|e| ApiError::Validation {
        message: format!("Invalid UUID format for {field}: {e}"),
        field: Some(field.to_string()),
        location,
    })
}

#[track_caller]
pub fn parse_priority(value: Option<&str>) -> ApiResult<Option<Priority>> {
    value
        .map(|p| p.trim().to_lowercase().parse::<Priority>())
        .transpose()
        .map_err(ApiError::from)
}

/// Lowercased address with a non-empty local part and domain
#[track_caller]
pub fn validate_email(value: &str) -> ApiResult<String> {
    let email = sanitize_string(value).to_lowercase();
    validate_string(&email, "email", 1, MAX_EMAIL_LENGTH)?;

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(email),
        _ => Err(ApiError::validation(
            "email",
            format!("'{email}' is not a valid email address"),
        )),
    }
}
