//! Error types for facetkit.
//!
//! This module defines the centralized error type [`FacetError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. The filter
//! controller itself never fails; these errors come from the ambient layer
//! (configuration, themes, loading items for the demo binary).

use thiserror::Error;

/// The main error type for facetkit operations.
///
/// Most variants wrap underlying errors from external crates using `#[from]`
/// for automatic conversion.
///
/// # Examples
///
/// ```
/// use facetkit::FacetError;
///
/// fn validate_config() -> Result<(), FacetError> {
///     Err(FacetError::Config("page_size must be a number".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum FacetError {
    /// Configuration is invalid or missing.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A TOML document (configuration or theme) could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A JSON document (typically an item collection) could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Theme parsing or lookup failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A textual action could not be parsed.
    ///
    /// Produced by [`FilterAction::from_arg`](crate::app::FilterAction::from_arg).
    #[error("Invalid action '{input}': {reason}")]
    InvalidAction {
        /// The raw action text.
        input: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// A specialized `Result` type for facetkit operations.
pub type Result<T> = std::result::Result<T, FacetError>;
