//! Ghost API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for specifying which version
//! of the Ghost API to use.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Ghost API version.
///
/// Ghost ships major API versions alongside major releases of the platform.
/// Versions 3 and 4 carry a version segment in the endpoint path
/// (`/ghost/api/v4/...`); version 5 drops it (`/ghost/api/...`) and selects
/// the version server-side.
///
/// # Example
///
/// ```rust
/// use ghost_api::ApiVersion;
///
/// // Use the latest version
/// let version = ApiVersion::latest();
/// assert_eq!(version, ApiVersion::V5);
///
/// // Parse from string
/// let version: ApiVersion = "v4".parse().unwrap();
/// assert_eq!(version, ApiVersion::V4);
///
/// // Display as string
/// assert_eq!(format!("{}", ApiVersion::V4), "v4");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ApiVersion {
    /// API version 3 (Ghost 3.x)
    V3,
    /// API version 4 (Ghost 4.x)
    V4,
    /// API version 5 (Ghost 5.x and later)
    V5,
}

impl ApiVersion {
    /// Returns the latest API version.
    ///
    /// This should be updated when new major versions are released.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V5
    }

    /// Returns the endpoint path segment for this version.
    ///
    /// Version 5 endpoints are unversioned, so this returns `None` for
    /// [`ApiVersion::V5`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use ghost_api::ApiVersion;
    ///
    /// assert_eq!(ApiVersion::V4.path_segment(), Some("v4"));
    /// assert_eq!(ApiVersion::V5.path_segment(), None);
    /// ```
    #[must_use]
    pub const fn path_segment(self) -> Option<&'static str> {
        match self {
            Self::V3 => Some("v3"),
            Self::V4 => Some("v4"),
            Self::V5 => None,
        }
    }

    /// Returns the `aud` claim expected by the Admin API for this version.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ghost_api::ApiVersion;
    ///
    /// assert_eq!(ApiVersion::V4.admin_audience(), "/v4/admin/");
    /// assert_eq!(ApiVersion::V5.admin_audience(), "/admin/");
    /// ```
    #[must_use]
    pub const fn admin_audience(self) -> &'static str {
        match self {
            Self::V3 => "/v3/admin/",
            Self::V4 => "/v4/admin/",
            Self::V5 => "/admin/",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version_str = match self {
            Self::V3 => "v3",
            Self::V4 => "v4",
            Self::V5 => "v5",
        };
        f.write_str(version_str)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "v3" | "3" => Ok(Self::V3),
            "v4" | "4" => Ok(Self::V4),
            "v5" | "5" => Ok(Self::V5),
            _ => Err(ConfigError::InvalidApiVersion { version: s }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_version_parses_known_versions() {
        assert_eq!("v3".parse::<ApiVersion>().unwrap(), ApiVersion::V3);
        assert_eq!("v4".parse::<ApiVersion>().unwrap(), ApiVersion::V4);
        assert_eq!("v5".parse::<ApiVersion>().unwrap(), ApiVersion::V5);
        assert_eq!("4".parse::<ApiVersion>().unwrap(), ApiVersion::V4);
        assert_eq!(" V5 ".parse::<ApiVersion>().unwrap(), ApiVersion::V5);
    }

    #[test]
    fn test_api_version_rejects_invalid() {
        assert!("v2".parse::<ApiVersion>().is_err());
        assert!("v6".parse::<ApiVersion>().is_err());
        assert!("latest".parse::<ApiVersion>().is_err());
        assert!("".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn test_api_version_display() {
        assert_eq!(format!("{}", ApiVersion::V3), "v3");
        assert_eq!(format!("{}", ApiVersion::V4), "v4");
        assert_eq!(format!("{}", ApiVersion::V5), "v5");
    }

    #[test]
    fn test_api_version_latest() {
        assert_eq!(ApiVersion::latest(), ApiVersion::V5);
    }

    #[test]
    fn test_path_segment_omitted_for_v5() {
        assert_eq!(ApiVersion::V3.path_segment(), Some("v3"));
        assert_eq!(ApiVersion::V4.path_segment(), Some("v4"));
        assert_eq!(ApiVersion::V5.path_segment(), None);
    }

    #[test]
    fn test_admin_audience_per_version() {
        assert_eq!(ApiVersion::V3.admin_audience(), "/v3/admin/");
        assert_eq!(ApiVersion::V4.admin_audience(), "/v4/admin/");
        assert_eq!(ApiVersion::V5.admin_audience(), "/admin/");
    }

    #[test]
    fn test_version_ordering() {
        assert!(ApiVersion::V3 < ApiVersion::V4);
        assert!(ApiVersion::V4 < ApiVersion::V5);
    }
}
