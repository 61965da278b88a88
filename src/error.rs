//! Error types for client configuration.
//!
//! This module contains error types used for configuration and validation.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use ghost_api::{ConfigError, ContentApiKey};
//!
//! let result = ContentApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyContentKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Content API key cannot be empty.
    #[error("Content API key cannot be empty. Please provide a valid Ghost Content API key.")]
    EmptyContentKey,

    /// Admin API key is malformed.
    #[error("Invalid Admin API key: {reason}. Expected format: '<id>:<hex secret>'.")]
    InvalidAdminKey {
        /// Why the key was rejected.
        reason: String,
    },

    /// An admin-surface operation requires an Admin API key.
    #[error("No Admin API key is configured. Admin API operations require an Admin API key.")]
    MissingAdminKey,

    /// Site URL is invalid.
    #[error("Invalid site URL '{url}'. Please provide a URL with scheme (e.g., 'https://blog.example.com').")]
    InvalidSiteUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected 'v3', 'v4' or 'v5'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
