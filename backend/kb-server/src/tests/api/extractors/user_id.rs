use crate::UserId;
use crate::tests::{TEST_SECRET, create_auth_state, create_test_state};

use kb_auth::Claims;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

fn token_for(sub: &str, expires_in: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: sub.to_string(),
        exp: now + expires_in,
        iat: now,
        email: None,
        roles: vec![],
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .unwrap()
}

async fn extract(state: &crate::AppState, request: Request<Body>) -> Result<UserId, crate::ApiError> {
    let (mut parts, _body) = request.into_parts();
    UserId::from_request_parts(&mut parts, state).await
}

#[tokio::test]
async fn test_extractor_with_valid_header() {
    let state = create_test_state().await;
    let request = Request::builder()
        .header("X-User-Id", "12345678-1234-1234-1234-123456789abc")
        .body(Body::empty())
        .unwrap();

    let user_id = extract(&state, request).await.unwrap();

    assert_eq!(user_id.0.to_string(), "12345678-1234-1234-1234-123456789abc");
}

#[tokio::test]
async fn test_extractor_falls_back_to_desktop_user_when_missing() {
    let state = create_test_state().await;
    let request = Request::builder().body(Body::empty()).unwrap();

    let user_id = extract(&state, request).await.unwrap();

    assert_eq!(user_id.0, state.desktop_user_id);
}

#[tokio::test]
async fn test_extractor_falls_back_when_header_invalid_uuid() {
    let state = create_test_state().await;
    let request = Request::builder()
        .header("X-User-Id", "not-a-valid-uuid")
        .body(Body::empty())
        .unwrap();

    let user_id = extract(&state, request).await.unwrap();

    assert_eq!(user_id.0, state.desktop_user_id);
}

#[tokio::test]
async fn test_extractor_uses_token_subject_when_auth_enabled() {
    let state = create_auth_state().await;
    let subject = Uuid::new_v4();
    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token_for(&subject.to_string(), 3600)))
        .body(Body::empty())
        .unwrap();

    let user_id = extract(&state, request).await.unwrap();

    assert_eq!(user_id.0, subject);
}

#[tokio::test]
async fn test_extractor_ignores_user_id_header_when_auth_enabled() {
    let state = create_auth_state().await;
    let request = Request::builder()
        .header("X-User-Id", Uuid::new_v4().to_string())
        .body(Body::empty())
        .unwrap();

    let error = extract(&state, request).await.unwrap_err();

    assert_eq!(error.code(), "UNAUTHORIZED");
}

#[tokio::test]
async fn test_extractor_rejects_expired_token() {
    let state = create_auth_state().await;
    let request = Request::builder()
        .header(
            "Authorization",
            format!("Bearer {}", token_for(&Uuid::new_v4().to_string(), -3600)),
        )
        .body(Body::empty())
        .unwrap();

    let error = extract(&state, request).await.unwrap_err();

    assert_eq!(error.code(), "UNAUTHORIZED");
}

#[tokio::test]
async fn test_extractor_rejects_non_uuid_subject() {
    let state = create_auth_state().await;
    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token_for("ada", 3600)))
        .body(Body::empty())
        .unwrap();

    let error = extract(&state, request).await.unwrap_err();

    assert_eq!(error.code(), "UNAUTHORIZED");
}
