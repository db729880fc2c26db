use serde::Deserialize;

/// Registers the acting user (token subject or X-User-Id) under an email and name
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
}
