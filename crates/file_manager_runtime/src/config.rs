//! File manager configuration and its bundled TOML defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const BUNDLED_CONFIG_TOML: &str = include_str!("../file_manager.toml");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Tunables for storage keys, upload batching, pagination, and preview windows.
pub struct FileManagerConfig {
    /// Storage key holding the JSON array of file records.
    pub storage_key: String,
    /// Storage key holding list preferences.
    pub prefs_key: String,
    /// Files processed per chunk before yielding a frame.
    pub chunk_size: usize,
    /// Progress cadence within a chunk.
    pub progress_every: usize,
    /// Page size used when no preference is stored.
    pub default_page_size: u32,
    /// Page sizes offered to the user.
    pub page_size_options: Vec<u32>,
    /// Feature string for preview windows.
    pub viewer_window_features: String,
}

impl Default for FileManagerConfig {
    fn default() -> Self {
        Self {
            storage_key: "fileManagerFiles".to_string(),
            prefs_key: "fileManagerPrefs".to_string(),
            chunk_size: 20,
            progress_every: 5,
            default_page_size: 10,
            page_size_options: vec![5, 10, 20, 50],
            viewer_window_features: "width=800,height=600".to_string(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Invalid configuration.
pub enum ConfigError {
    /// The TOML text did not parse.
    #[error("config parse failed: {0}")]
    Parse(String),
    /// `chunk_size` was zero.
    #[error("chunk_size must be at least 1")]
    ZeroChunkSize,
    /// `progress_every` was zero.
    #[error("progress_every must be at least 1")]
    ZeroProgressCadence,
    /// A page size option was zero or the list was empty.
    #[error("page_size_options must be non-empty positive sizes")]
    InvalidPageSizeOptions,
    /// `default_page_size` is not one of `page_size_options`.
    #[error("default_page_size {0} is not among page_size_options")]
    DefaultPageSizeNotOffered(u32),
}

impl FileManagerConfig {
    /// Parses and validates a TOML document; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Returns the configuration bundled with the crate, or the built-in defaults if the bundled
    /// file is invalid.
    pub fn bundled() -> Self {
        match Self::from_toml_str(BUNDLED_CONFIG_TOML) {
            Ok(config) => config,
            Err(err) => {
                leptos::logging::warn!("bundled file manager config rejected: {err}");
                Self::default()
            }
        }
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        if self.progress_every == 0 {
            return Err(ConfigError::ZeroProgressCadence);
        }
        if self.page_size_options.is_empty() || self.page_size_options.contains(&0) {
            return Err(ConfigError::InvalidPageSizeOptions);
        }
        if !self.page_size_options.contains(&self.default_page_size) {
            return Err(ConfigError::DefaultPageSizeNotOffered(
                self.default_page_size,
            ));
        }
        Ok(())
    }

    /// Returns whether `page_size` is an offered option.
    pub fn offers_page_size(&self, page_size: u32) -> bool {
        self.page_size_options.contains(&page_size)
    }
}
