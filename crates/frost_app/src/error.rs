//! Error types for frost_app

use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug)]
pub enum FrostError {
    /// Configuration file could not be read
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML for [`crate::FrostConfig`]
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration parsed but holds unusable values
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for frost_app operations
pub type Result<T> = std::result::Result<T, FrostError>;
