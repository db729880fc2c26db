use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENABLED, DEFAULT_DESKTOP_USER_ID,
    MIN_JWT_SECRET_LENGTH,
};

use std::path::{Path, PathBuf};

use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Require a bearer JWT on every API request
    pub enabled: bool,
    /// HS256 shared secret
    pub jwt_secret: Option<String>,
    /// RS256 public key (PEM), relative to the config directory unless absolute
    pub jwt_public_key_path: Option<String>,
    /// Acting user when auth is disabled
    pub desktop_user_id: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            jwt_secret: None,
            jwt_public_key_path: None,
            desktop_user_id: None,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        if let Some(id) = self.desktop_user_id.as_deref().filter(|id| !id.is_empty())
            && Uuid::parse_str(id).is_err()
        {
            return Err(ConfigError::auth(format!(
                "auth.desktop_user_id must be a UUID, got '{id}'"
            )));
        }

        if !self.enabled {
            return Ok(());
        }

        match (&self.jwt_secret, &self.jwt_public_key_path) {
            (Some(secret), _) => {
                if secret.len() < MIN_JWT_SECRET_LENGTH {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_secret must be at least {MIN_JWT_SECRET_LENGTH} characters"
                    )));
                }
            }
            (None, Some(_)) => {
                let path = self.public_key_path(config_dir).unwrap_or_default();
                if !path.exists() {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_public_key_path not found: {}",
                        path.display()
                    )));
                }
            }
            (None, None) => {
                return Err(ConfigError::auth(
                    "auth.enabled requires auth.jwt_secret or auth.jwt_public_key_path",
                ));
            }
        }

        Ok(())
    }

    /// Resolved location of the RS256 public key.
    pub fn public_key_path(&self, config_dir: &Path) -> Option<PathBuf> {
        self.jwt_public_key_path.as_ref().map(|p| {
            let path = Path::new(p);
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                config_dir.join(path)
            }
        })
    }

    /// Read the RS256 public key, if one is configured.
    pub fn read_public_key(&self, config_dir: &Path) -> ConfigErrorResult<Option<String>> {
        let Some(path) = self.public_key_path(config_dir) else {
            return Ok(None);
        };

        std::fs::read_to_string(&path)
            .map(Some)
            .map_err(|source| ConfigError::Io { path, source })
    }

    /// Configured desktop user, or the built-in default when unset or blank.
    pub fn desktop_user_id(&self) -> Uuid {
        self.desktop_user_id
            .as_deref()
            .and_then(|id| Uuid::parse_str(id).ok())
            .or_else(|| Uuid::parse_str(DEFAULT_DESKTOP_USER_ID).ok())
            .unwrap_or(Uuid::from_u128(1))
    }
}
