use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, LoggingConfig, ServerConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. KB_CONFIG_DIR env var, else ./.kanban/
    /// 2. Auto-create the config directory
    /// 3. Parse config.toml if present, else defaults
    /// 4. Apply KB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: KB_CONFIG_DIR env var > ./.kanban/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all sections. Call after load() to fail at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let config_dir = Self::config_dir()?;

        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&config_dir)?;
        self.validation.validate()?;

        Ok(())
    }

    /// Absolute path to the SQLite file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Absolute path to the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        Ok(self.logging.file_path(&Self::config_dir()?))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);

        let auth_type = if self.auth.jwt_secret.is_some() {
            "HS256"
        } else if self.auth.jwt_public_key_path.is_some() {
            "RS256"
        } else {
            "none"
        };
        if self.auth.enabled {
            info!("  auth: enabled ({auth_type})");
        } else {
            info!("  auth: disabled (desktop user {})", self.auth.desktop_user_id());
        }

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  validation: name={}, title={}, desc={}, comment={}, page={}/{}",
            self.validation.max_name_length,
            self.validation.max_title_length,
            self.validation.max_description_length,
            self.validation.max_comment_length,
            self.validation.default_page_size,
            self.validation.max_page_size
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("KB_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("KB_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("KB_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_bool("KB_AUTH_ENABLED", &mut self.auth.enabled);
        Self::apply_env_option_string("KB_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_option_string(
            "KB_AUTH_JWT_PUBLIC_KEY_PATH",
            &mut self.auth.jwt_public_key_path,
        );
        Self::apply_env_option_string("KB_AUTH_DESKTOP_USER_ID", &mut self.auth.desktop_user_id);

        // Logging
        Self::apply_env_parse("KB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("KB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("KB_LOG_FILE", &mut self.logging.file);

        // Validation
        Self::apply_env_parse(
            "KB_VALIDATION_MAX_NAME_LENGTH",
            &mut self.validation.max_name_length,
        );
        Self::apply_env_parse(
            "KB_VALIDATION_MAX_TITLE_LENGTH",
            &mut self.validation.max_title_length,
        );
        Self::apply_env_parse(
            "KB_VALIDATION_MAX_DESCRIPTION_LENGTH",
            &mut self.validation.max_description_length,
        );
        Self::apply_env_parse(
            "KB_VALIDATION_MAX_COMMENT_LENGTH",
            &mut self.validation.max_comment_length,
        );
        Self::apply_env_parse(
            "KB_VALIDATION_DEFAULT_PAGE_SIZE",
            &mut self.validation.default_page_size,
        );
        Self::apply_env_parse(
            "KB_VALIDATION_MAX_PAGE_SIZE",
            &mut self.validation.max_page_size,
        );
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"; anything else is false
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values are ignored
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
