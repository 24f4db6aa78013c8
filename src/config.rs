use crate::constants::DEFAULT_API_BASE_URL;
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Application settings with all values filled in.
///
/// Every field has a default, so an empty TOML file is a valid settings file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Root URL of the program API
    pub api_base_url: String,
    /// Optional content catalog overriding the built-in advisory content
    pub catalog_path: Option<PathBuf>,
    /// Default tracing filter directive. `RUST_LOG` takes precedence when set.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            catalog_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Loads and validates settings from a TOML file.
    ///
    /// Rejects unknown keys so typos are not silently ignored.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML settings file
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the file cannot be read, and `InvalidInput` if the
    /// TOML is malformed, unknown keys are present, `api_base_url` is not an
    /// absolute URL or `log_level` is blank.
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&contents)
            .map_err(|e| AppError::InvalidInput(format!("Failed to parse settings: {e}")))?;

        if Url::parse(&settings.api_base_url).is_err() {
            return Err(AppError::InvalidInput(format!(
                "api_base_url must be an absolute URL, got '{}'",
                settings.api_base_url
            )));
        }
        if settings.log_level.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "log_level must not be empty".into(),
            ));
        }

        Ok(settings)
    }
}
