#[allow(clippy::module_inception)]
pub mod auth;
pub mod register_request;
pub mod user_dto;
pub mod user_response;
pub mod user_summary_dto;
