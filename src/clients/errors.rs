//! HTTP-specific error types for the Ghost API client.
//!
//! This module contains error types for HTTP operations, including
//! platform-reported errors, malformed responses, and auth retry
//! exhaustion.
//!
//! # Error Handling
//!
//! The client uses specific error types for different failure scenarios:
//!
//! - [`PlatformError`]: Ghost reported a structured error (`errors` array)
//! - [`HttpError::UnknownShape`]: JSON error body without an `errors` key
//! - [`HttpError::Malformed`]: error body that is not JSON at all
//! - [`HttpError::TransportExhausted`]: repeated `401` responses after
//!   re-authentication attempts
//! - [`HttpError`]: unified error type encompassing all of the above
//!
//! # Example
//!
//! ```rust,ignore
//! use ghost_api::HttpError;
//!
//! match client.get("admin/posts/", &[], None).await {
//!     Ok(body) => println!("Success: {body}"),
//!     Err(HttpError::Platform(e)) => {
//!         println!("Ghost error {} ({}): {}", e.status_code, e.error_type, e.message);
//!     }
//!     Err(HttpError::TransportExhausted { attempts }) => {
//!         println!("Gave up after {attempts} auth failures");
//!     }
//!     Err(other) => println!("Other error: {other}"),
//! }
//! ```

use crate::auth::AuthError;
use crate::error::ConfigError;
use thiserror::Error;

/// A structured error reported by the Ghost API.
///
/// Ghost error responses carry an `errors` array; this type exposes the
/// first entry's `type` and `message` along with the full raw array for
/// callers that need every reported error.
///
/// # Example
///
/// ```rust
/// use ghost_api::clients::PlatformError;
///
/// let error = PlatformError {
///     status_code: 422,
///     error_type: "ValidationError".to_string(),
///     message: "Value in [posts.title] cannot be blank.".to_string(),
///     raw_errors: serde_json::json!([]),
/// };
///
/// println!("Status {}: {}", error.status_code, error.message);
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{error_type} ({status_code}): {message}")]
pub struct PlatformError {
    /// The HTTP status code of the response.
    pub status_code: u16,
    /// The `type` field of the first reported error.
    pub error_type: String,
    /// The `message` field of the first reported error.
    pub message: String,
    /// The full `errors` array as reported by Ghost.
    pub raw_errors: serde_json::Value,
}

/// Unified error type for all HTTP-related errors.
///
/// This enum provides a single error type for HTTP operations, making it
/// easier to handle errors at API boundaries. Use pattern matching to
/// handle specific error types.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Ghost reported a structured error.
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// The error body was JSON but did not carry an `errors` array.
    #[error("Unexpected response shape (status {status_code}): {body}")]
    UnknownShape {
        /// The HTTP status code of the response.
        status_code: u16,
        /// The parsed JSON body.
        body: serde_json::Value,
    },

    /// The response body could not be parsed as JSON.
    #[error("Malformed response body (status {status_code})")]
    Malformed {
        /// The HTTP status code of the response.
        status_code: u16,
        /// The raw body text.
        body: String,
    },

    /// Authentication kept failing with `401` after token regeneration.
    #[error("Authentication failed {attempts} times; giving up")]
    TransportExhausted {
        /// The number of `401` responses received.
        attempts: u32,
    },

    /// Client configuration error.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Admin token signing error.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_error_message_includes_type_and_status() {
        let error = PlatformError {
            status_code: 404,
            error_type: "NotFoundError".to_string(),
            message: "Resource not found error, cannot read post.".to_string(),
            raw_errors: serde_json::json!([{"type": "NotFoundError"}]),
        };
        let message = error.to_string();
        assert!(message.contains("NotFoundError"));
        assert!(message.contains("404"));
        assert!(message.contains("cannot read post"));
    }

    #[test]
    fn test_transport_exhausted_includes_attempt_count() {
        let error = HttpError::TransportExhausted { attempts: 3 };
        let message = error.to_string();
        assert!(message.contains("3 times"));
    }

    #[test]
    fn test_config_error_converts_into_http_error() {
        let error: HttpError = ConfigError::MissingAdminKey.into();
        assert!(matches!(
            error,
            HttpError::Config(ConfigError::MissingAdminKey)
        ));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let platform_error: &dyn std::error::Error = &PlatformError {
            status_code: 400,
            error_type: "BadRequestError".to_string(),
            message: "test".to_string(),
            raw_errors: serde_json::json!([]),
        };
        let _ = platform_error;

        let http_error: &dyn std::error::Error = &HttpError::TransportExhausted { attempts: 3 };
        let _ = http_error;
    }
}
