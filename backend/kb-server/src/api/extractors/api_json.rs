use crate::ApiError;

use axum::extract::FromRequest;

/// `axum::Json` whose rejections use the API error body
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
