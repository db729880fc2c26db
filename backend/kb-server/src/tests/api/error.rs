use crate::ApiError;

use kb_auth::AuthError;
use kb_core::{Priority, TaskSort};

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Board not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Board not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::validation("title", "title is required");

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "title");
}

#[tokio::test]
async fn test_conflict_returns_409() {
    let (status, json) = body_json(ApiError::conflict("Email taken")).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "CONFLICT");
    assert_eq!(json["error"]["message"], "Email taken");
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let error = ApiError::Unauthorized {
        message: "Token expired".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let error = ApiError::BadRequest {
        message: "Malformed JSON".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[test]
fn test_invalid_priority_converts_to_validation_on_priority() {
    let core_error = "urgent".parse::<Priority>().unwrap_err();

    let error = ApiError::from(core_error);

    match error {
        ApiError::Validation { field, message, .. } => {
            assert_eq!(field.as_deref(), Some("priority"));
            assert!(message.contains("urgent"));
        }
        other => panic!("Expected Validation, got {other:?}"),
    }
}

#[test]
fn test_invalid_sort_converts_to_validation_on_sort() {
    let core_error = "alphabetical".parse::<TaskSort>().unwrap_err();

    let error = ApiError::from(core_error);

    assert_eq!(error.code(), "VALIDATION_ERROR");
    assert!(matches!(error, ApiError::Validation { field: Some(ref f), .. } if f == "sort"));
}

#[test]
fn test_auth_error_converts_to_unauthorized_with_safe_reason() {
    let auth_error = kb_auth::bearer_token(None).unwrap_err();
    assert!(matches!(auth_error, AuthError::MissingHeader { .. }));

    let error = ApiError::from(auth_error);

    assert_eq!(error.status(), StatusCode::UNAUTHORIZED);
    match error {
        ApiError::Unauthorized { message, .. } => {
            assert_eq!(message, "Missing authorization header");
        }
        other => panic!("Expected Unauthorized, got {other:?}"),
    }
}

#[test]
fn test_sqlx_error_converts_to_internal_without_details() {
    let error = ApiError::from(sqlx::Error::RowNotFound);

    match error {
        ApiError::Internal { message, .. } => assert_eq!(message, "Database operation failed"),
        other => panic!("Expected Internal, got {other:?}"),
    }
}
