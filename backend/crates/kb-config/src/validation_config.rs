use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Validation constraints
pub const MIN_NAME_LENGTH: usize = 1;
pub const MAX_NAME_LENGTH: usize = 500;
pub const DEFAULT_MAX_NAME_LENGTH: usize = 100;

pub const MIN_TITLE_LENGTH: usize = 1;
pub const MAX_TITLE_LENGTH: usize = 500;
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 200;

pub const MIN_DESCRIPTION_LENGTH: usize = 0;
pub const MAX_DESCRIPTION_LENGTH: usize = 100000;
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: usize = 10000;

pub const MIN_COMMENT_LENGTH: usize = 1;
pub const MAX_COMMENT_LENGTH: usize = 100000;
pub const DEFAULT_MAX_COMMENT_LENGTH: usize = 5000;

pub const MIN_PAGE_SIZE: u32 = 1;
pub const MAX_PAGE_SIZE: u32 = 1000;
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_MAX_PAGE_SIZE: u32 = 100;

/// Field limits applied to request bodies before they reach the store.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Board and column names
    pub max_name_length: usize,
    /// Task titles
    pub max_title_length: usize,
    pub max_description_length: usize,
    pub max_comment_length: usize,
    /// Page size when a task listing omits `limit`
    pub default_page_size: u32,
    pub max_page_size: u32,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
            max_comment_length: DEFAULT_MAX_COMMENT_LENGTH,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        check_range(
            "max_name_length",
            self.max_name_length,
            MIN_NAME_LENGTH,
            MAX_NAME_LENGTH,
        )?;
        check_range(
            "max_title_length",
            self.max_title_length,
            MIN_TITLE_LENGTH,
            MAX_TITLE_LENGTH,
        )?;
        check_range(
            "max_description_length",
            self.max_description_length,
            MIN_DESCRIPTION_LENGTH,
            MAX_DESCRIPTION_LENGTH,
        )?;
        check_range(
            "max_comment_length",
            self.max_comment_length,
            MIN_COMMENT_LENGTH,
            MAX_COMMENT_LENGTH,
        )?;
        check_range(
            "max_page_size",
            self.max_page_size,
            MIN_PAGE_SIZE,
            MAX_PAGE_SIZE,
        )?;
        check_range(
            "default_page_size",
            self.default_page_size,
            MIN_PAGE_SIZE,
            self.max_page_size,
        )?;

        Ok(())
    }
}

#[track_caller]
fn check_range<T>(field: &str, value: T, min: T, max: T) -> ConfigErrorResult<()>
where
    T: PartialOrd + std::fmt::Display,
{
    if value < min || value > max {
        return Err(ConfigError::config(format!(
            "validation.{field} must be {min}-{max}, got {value}"
        )));
    }
    Ok(())
}
