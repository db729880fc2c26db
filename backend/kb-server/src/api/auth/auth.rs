//! Registration REST API handlers

use crate::{
    ApiError, ApiJson, ApiResult, RegisterRequest, UserDto, UserId, UserResponse,
    api::validation::{required_text, validate_email},
    app_state::AppState,
};

use kb_core::User;
use kb_db::UserRepository;

use axum::{Json, extract::State, http::StatusCode};

/// POST /api/v1/auth/register
///
/// Register the acting user. The id comes from the credentials, never the body.
pub async fn register(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    // 1. Validate input
    let email = validate_email(&req.email)?;
    let name = required_text(&req.name, "name", state.validation.max_name_length)?;

    // 2. Reject duplicates
    if UserRepository::find_by_id(&state.pool, user_id)
        .await?
        .is_some()
    {
        return Err(ApiError::conflict(format!(
            "User {} is already registered",
            user_id
        )));
    }
    if UserRepository::find_by_email(&state.pool, &email)
        .await?
        .is_some()
    {
        return Err(ApiError::conflict(format!(
            "Email {} is already registered",
            email
        )));
    }

    // 3. Persist. A concurrent duplicate surfaces as a unique violation, i.e. 409.
    let user = User::new(user_id, email, name);
    UserRepository::create(&state.pool, &user).await?;

    log::info!("Registered user {} via REST API", user.id);

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            user: UserDto::from(user),
        }),
    ))
}

/// GET /api/v1/auth/me
///
/// The acting user's profile
pub async fn me(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> ApiResult<Json<UserResponse>> {
    let user = UserRepository::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {} is not registered", user_id)))?;

    Ok(Json(UserResponse {
        user: UserDto::from(user),
    }))
}
