//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Ghost Content API key.
///
/// This newtype ensures the key is non-empty and provides type safety
/// to prevent accidental misuse of raw strings.
///
/// # Example
///
/// ```rust
/// use ghost_api::ContentApiKey;
///
/// let key = ContentApiKey::new("22444f78447824223cefc48062").unwrap();
/// assert_eq!(key.as_ref(), "22444f78447824223cefc48062");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentApiKey(String);

impl ContentApiKey {
    /// Creates a new validated Content API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyContentKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyContentKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ContentApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Ghost Admin API key.
///
/// Admin keys are issued by Ghost in the form `<id>:<secret>` where the
/// secret is hex-encoded. The secret is decoded on construction so token
/// signing never re-parses it, and the raw value is masked in debug output
/// to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the secret, displaying only the key id:
/// `AdminApiKey(64f1c8a9..:*****)`.
///
/// # Example
///
/// ```rust
/// use ghost_api::AdminApiKey;
///
/// let key = AdminApiKey::new("64f1c8a9e3d5b2:0123456789abcdef").unwrap();
/// assert_eq!(key.id(), "64f1c8a9e3d5b2");
/// assert_eq!(key.secret_bytes().len(), 8);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AdminApiKey {
    id: String,
    secret: Vec<u8>,
}

impl AdminApiKey {
    /// Creates a new validated Admin API key from the `id:secret` form.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAdminKey`] if the key is missing the
    /// `:` separator, if either part is empty, or if the secret is not
    /// valid hex.
    pub fn new(key: impl AsRef<str>) -> Result<Self, ConfigError> {
        let key = key.as_ref().trim();

        let (id, secret_hex) = key
            .split_once(':')
            .ok_or_else(|| ConfigError::InvalidAdminKey {
                reason: "missing ':' separator".to_string(),
            })?;

        if id.is_empty() {
            return Err(ConfigError::InvalidAdminKey {
                reason: "key id is empty".to_string(),
            });
        }
        if secret_hex.is_empty() {
            return Err(ConfigError::InvalidAdminKey {
                reason: "secret is empty".to_string(),
            });
        }

        let secret = decode_hex(secret_hex).ok_or_else(|| ConfigError::InvalidAdminKey {
            reason: "secret is not valid hex".to_string(),
        })?;

        Ok(Self {
            id: id.to_string(),
            secret,
        })
    }

    /// Returns the key id, used as the `kid` JWT header.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the hex-decoded secret used as the token signing key.
    #[must_use]
    pub fn secret_bytes(&self) -> &[u8] {
        &self.secret
    }
}

impl fmt::Debug for AdminApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AdminApiKey({}:*****)", self.id)
    }
}

// Internal hex decoding since we don't want to add another dependency
fn decode_hex(hex: &str) -> Option<Vec<u8>> {
    if hex.len() % 2 != 0 {
        return None;
    }

    let bytes = hex.as_bytes();
    let mut out = Vec::with_capacity(hex.len() / 2);
    for pair in bytes.chunks_exact(2) {
        let high = hex_value(pair[0])?;
        let low = hex_value(pair[1])?;
        out.push((high << 4) | low);
    }
    Some(out)
}

const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// A validated Ghost site URL.
///
/// This newtype validates that the URL has an `http` or `https` scheme and
/// a non-empty host, and normalizes away any trailing slash so endpoint
/// composition never produces `//`.
///
/// # Example
///
/// ```rust
/// use ghost_api::SiteUrl;
///
/// let url = SiteUrl::new("https://blog.example.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://blog.example.com");
/// assert_eq!(url.scheme(), "https");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteUrl {
    url: String,
    scheme_end: usize,
}

impl SiteUrl {
    /// Creates a new validated site URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSiteUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidSiteUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::InvalidSiteUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3; // Skip "://"
        if host_start >= url.len() {
            return Err(ConfigError::InvalidSiteUrl { url: url.clone() });
        }

        Ok(Self { url, scheme_end })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }
}

impl AsRef<str> for SiteUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_key_rejects_empty_string() {
        let result = ContentApiKey::new("");
        assert!(matches!(result, Err(ConfigError::EmptyContentKey)));
    }

    #[test]
    fn test_admin_key_splits_id_and_secret() {
        let key = AdminApiKey::new("64f1c8a9e3d5b2:0123456789abcdef").unwrap();
        assert_eq!(key.id(), "64f1c8a9e3d5b2");
        assert_eq!(
            key.secret_bytes(),
            &[0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef]
        );
    }

    #[test]
    fn test_admin_key_accepts_uppercase_hex() {
        let key = AdminApiKey::new("abc:DEADBEEF").unwrap();
        assert_eq!(key.secret_bytes(), &[0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_admin_key_rejects_malformed_input() {
        // No separator
        assert!(AdminApiKey::new("deadbeef").is_err());

        // Empty parts
        assert!(AdminApiKey::new(":deadbeef").is_err());
        assert!(AdminApiKey::new("id:").is_err());

        // Non-hex secret
        assert!(AdminApiKey::new("id:not-hex!").is_err());

        // Odd-length hex
        assert!(AdminApiKey::new("id:abc").is_err());
    }

    #[test]
    fn test_admin_key_masks_secret_in_debug() {
        let key = AdminApiKey::new("keyid:deadbeef").unwrap();
        let debug_output = format!("{:?}", key);
        assert_eq!(debug_output, "AdminApiKey(keyid:*****)");
        assert!(!debug_output.contains("deadbeef"));
    }

    #[test]
    fn test_site_url_trims_trailing_slash() {
        let url = SiteUrl::new("https://blog.example.com/").unwrap();
        assert_eq!(url.as_ref(), "https://blog.example.com");
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn test_site_url_accepts_http_with_port() {
        let url = SiteUrl::new("http://localhost:2368").unwrap();
        assert_eq!(url.as_ref(), "http://localhost:2368");
        assert_eq!(url.scheme(), "http");
    }

    #[test]
    fn test_site_url_rejects_invalid() {
        // No scheme
        assert!(SiteUrl::new("blog.example.com").is_err());

        // Empty host
        assert!(SiteUrl::new("https://").is_err());

        // Non-http scheme
        assert!(SiteUrl::new("ftp://blog.example.com").is_err());
    }
}
