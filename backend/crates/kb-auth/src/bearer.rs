use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Extract the token from an `Authorization: Bearer <token>` header value.
#[track_caller]
pub fn bearer_token(header: Option<&str>) -> AuthErrorResult<&str> {
    let value = header.ok_or(AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    })?;

    let token = value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty());

    token.ok_or(AuthError::InvalidScheme {
        location: ErrorLocation::from(Location::caller()),
    })
}
