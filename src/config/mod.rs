//! Configuration types for the Ghost API client.
//!
//! This module provides the core configuration types used to initialize
//! the client for communication with a Ghost site.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`GhostConfig`]: The main configuration struct holding all client settings
//! - [`GhostConfigBuilder`]: A builder for constructing [`GhostConfig`] instances
//! - [`ContentApiKey`]: A validated Content API key newtype
//! - [`AdminApiKey`]: A validated Admin API key newtype with masked debug output
//! - [`SiteUrl`]: A validated Ghost site URL
//! - [`ApiVersion`]: The Ghost API version to use
//!
//! # Example
//!
//! ```rust
//! use ghost_api::{AdminApiKey, ApiVersion, ContentApiKey, GhostConfig, SiteUrl};
//!
//! let config = GhostConfig::builder()
//!     .url(SiteUrl::new("https://blog.example.com").unwrap())
//!     .content_key(ContentApiKey::new("22444f78447824223cefc48062").unwrap())
//!     .admin_key(AdminApiKey::new("64f1c8a9e3d5b2:0123456789abcdef").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{AdminApiKey, ContentApiKey, SiteUrl};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Configuration for the Ghost API client.
///
/// This struct holds all configuration needed for client operations, including
/// the site URL, API credentials, and API version settings.
///
/// # Thread Safety
///
/// `GhostConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Credentials
///
/// The `content_key` is required and authenticates read access through the
/// Content API. The `admin_key` is optional; without it the client can only
/// use the Content API, and any Admin API operation fails with a
/// configuration error before a request is made.
///
/// # Example
///
/// ```rust
/// use ghost_api::{ContentApiKey, GhostConfig, SiteUrl};
///
/// let config = GhostConfig::builder()
///     .url(SiteUrl::new("https://blog.example.com").unwrap())
///     .content_key(ContentApiKey::new("22444f78447824223cefc48062").unwrap())
///     .build()
///     .unwrap();
///
/// assert!(config.admin_key().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct GhostConfig {
    url: SiteUrl,
    content_key: ContentApiKey,
    admin_key: Option<AdminApiKey>,
    api_version: ApiVersion,
}

impl GhostConfig {
    /// Creates a new builder for constructing a `GhostConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ghost_api::{ContentApiKey, GhostConfig, SiteUrl};
    ///
    /// let config = GhostConfig::builder()
    ///     .url(SiteUrl::new("https://blog.example.com").unwrap())
    ///     .content_key(ContentApiKey::new("key").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> GhostConfigBuilder {
        GhostConfigBuilder::new()
    }

    /// Returns the site URL.
    #[must_use]
    pub const fn url(&self) -> &SiteUrl {
        &self.url
    }

    /// Returns the Content API key.
    #[must_use]
    pub const fn content_key(&self) -> &ContentApiKey {
        &self.content_key
    }

    /// Returns the Admin API key, if configured.
    #[must_use]
    pub const fn admin_key(&self) -> Option<&AdminApiKey> {
        self.admin_key.as_ref()
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }
}

// Verify GhostConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GhostConfig>();
};

/// Builder for constructing [`GhostConfig`] instances.
///
/// This builder provides a fluent API for configuring the client. Required
/// fields are `url` and `content_key`. All other fields have sensible defaults.
///
/// # Defaults
///
/// - `api_version`: Latest version
/// - `admin_key`: `None` (Content API only)
///
/// # Example
///
/// ```rust
/// use ghost_api::{AdminApiKey, ApiVersion, ContentApiKey, GhostConfig, SiteUrl};
///
/// let config = GhostConfig::builder()
///     .url(SiteUrl::new("https://blog.example.com").unwrap())
///     .content_key(ContentApiKey::new("content-key").unwrap())
///     .admin_key(AdminApiKey::new("id:deadbeef").unwrap())
///     .api_version(ApiVersion::V4)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct GhostConfigBuilder {
    url: Option<SiteUrl>,
    content_key: Option<ContentApiKey>,
    admin_key: Option<AdminApiKey>,
    api_version: Option<ApiVersion>,
}

impl GhostConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the site URL (required).
    #[must_use]
    pub fn url(mut self, url: SiteUrl) -> Self {
        self.url = Some(url);
        self
    }

    /// Sets the Content API key (required).
    #[must_use]
    pub fn content_key(mut self, key: ContentApiKey) -> Self {
        self.content_key = Some(key);
        self
    }

    /// Sets the Admin API key, enabling Admin API operations.
    #[must_use]
    pub fn admin_key(mut self, key: AdminApiKey) -> Self {
        self.admin_key = Some(key);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub const fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Builds the [`GhostConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `url` or
    /// `content_key` are not set.
    pub fn build(self) -> Result<GhostConfig, ConfigError> {
        let url = self
            .url
            .ok_or(ConfigError::MissingRequiredField { field: "url" })?;
        let content_key = self.content_key.ok_or(ConfigError::MissingRequiredField {
            field: "content_key",
        })?;

        Ok(GhostConfig {
            url,
            content_key,
            admin_key: self.admin_key,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_url() {
        let result = GhostConfigBuilder::new()
            .content_key(ContentApiKey::new("key").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "url" })
        ));
    }

    #[test]
    fn test_builder_requires_content_key() {
        let result = GhostConfigBuilder::new()
            .url(SiteUrl::new("https://blog.example.com").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "content_key"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = GhostConfig::builder()
            .url(SiteUrl::new("https://blog.example.com").unwrap())
            .content_key(ContentApiKey::new("key").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.api_version(), ApiVersion::latest());
        assert!(config.admin_key().is_none());
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GhostConfig>();
    }

    #[test]
    fn test_config_is_clone_and_debug() {
        let config = GhostConfig::builder()
            .url(SiteUrl::new("https://blog.example.com").unwrap())
            .content_key(ContentApiKey::new("key").unwrap())
            .admin_key(AdminApiKey::new("id:deadbeef").unwrap())
            .build()
            .unwrap();

        let cloned = config.clone();
        assert_eq!(cloned.content_key(), config.content_key());

        // Admin secret stays masked through the config's Debug output
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("GhostConfig"));
        assert!(!debug_str.contains("deadbeef"));
    }

    #[test]
    fn test_builder_with_all_fields() {
        let config = GhostConfig::builder()
            .url(SiteUrl::new("https://blog.example.com").unwrap())
            .content_key(ContentApiKey::new("content-key").unwrap())
            .admin_key(AdminApiKey::new("keyid:deadbeef").unwrap())
            .api_version(ApiVersion::V4)
            .build()
            .unwrap();

        assert_eq!(config.api_version(), ApiVersion::V4);
        assert_eq!(config.url().as_ref(), "https://blog.example.com");
        assert_eq!(config.admin_key().unwrap().id(), "keyid");
    }
}
