use crate::{ApiError, AppState};

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

pub const USER_ID_HEADER: &str = "X-User-Id";

/// Acting user for the request
///
/// With auth enabled the id is the `sub` claim of the bearer JWT and anything
/// else is rejected with 401. With auth disabled it comes from the `X-User-Id`
/// header, falling back to the configured desktop user when it is missing or
/// not a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub Uuid);

impl FromRequestParts<AppState> for UserId {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            if let Some(validator) = &state.jwt_validator {
                let header = parts
                    .headers
                    .get(AUTHORIZATION)
                    .and_then(|h| h.to_str().ok());
                let token = kb_auth::bearer_token(header)?;
                let claims = validator.validate(token)?;
                return Ok(UserId(claims.user_id()?));
            }

            let header = parts.headers.get(USER_ID_HEADER);
            if let Some(user_id) = header
                .and_then(|h| h.to_str().ok())
                .and_then(|s| Uuid::parse_str(s.trim()).ok())
            {
                return Ok(UserId(user_id));
            }

            if header.is_some() {
                log::warn!(
                    "Ignoring malformed {} header, acting as desktop user",
                    USER_ID_HEADER
                );
            }

            Ok(UserId(state.desktop_user_id))
        }
    }
}
