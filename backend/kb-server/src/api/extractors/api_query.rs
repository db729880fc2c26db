use crate::ApiError;

use axum::extract::FromRequestParts;

/// `axum::extract::Query` whose rejections use the API error body
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);
