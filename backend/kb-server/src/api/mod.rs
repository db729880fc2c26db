pub mod auth;
pub mod boards;
pub mod columns;
pub mod comments;
pub mod error;
pub mod extractors;
pub mod tasks;
pub mod validation;
