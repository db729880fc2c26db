mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod validation_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use validation_config::ValidationConfig;

const CONFIG_DIR_ENV: &str = "KB_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".kanban";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "kanban.db";

const DEFAULT_AUTH_ENABLED: bool = false;
const MIN_JWT_SECRET_LENGTH: usize = 32;
/// Acting user when auth is disabled and no X-User-Id header is sent.
pub const DEFAULT_DESKTOP_USER_ID: &str = "00000000-0000-0000-0000-000000000001";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
