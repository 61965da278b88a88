//! Resource-level error types for REST operations.
//!
//! This module contains error types for resource operations, extending the
//! HTTP-level [`HttpError`](crate::clients::HttpError) with resource
//! semantics like `NotFound` and `WrongApiSurface`.
//!
//! # Error Handling
//!
//! Resource operations distinguish usage errors from API errors:
//!
//! - [`ResourceError::NotFound`]: the requested record does not exist
//! - [`ResourceError::WrongApiSurface`]: a mutation was attempted through
//!   the read-only Content API
//! - [`ResourceError::Http`]: any error from the HTTP layer, passed through
//!
//! # Example
//!
//! ```rust,ignore
//! use ghost_api::ResourceError;
//!
//! match ghost.posts().get("63f2a1...").await {
//!     Ok(post) => println!("Found: {}", post["title"]),
//!     Err(ResourceError::NotFound { resource, path }) => {
//!         println!("No {resource} at {path}");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Errors produced by resource-level operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The requested record does not exist.
    #[error("No {resource} found at '{path}'")]
    NotFound {
        /// The resource name, e.g. `posts`.
        resource: String,
        /// The endpoint path that was requested.
        path: String,
    },

    /// A mutation was attempted through the read-only Content API.
    #[error("The '{resource}' resource is read-only through the Content API; cannot {operation}")]
    WrongApiSurface {
        /// The resource name, e.g. `authors`.
        resource: String,
        /// The operation that was refused, e.g. `create`.
        operation: &'static str,
    },

    /// An update was requested without any fields to change.
    #[error("Update requires data; nothing to change")]
    MissingUpdateData,

    /// A batch create was requested with an empty batch.
    #[error("Create requires at least one item")]
    EmptyCreateBatch,

    /// Two result sets over different resources cannot be combined.
    #[error("Cannot combine result sets from different resources ('{left}' and '{right}')")]
    ResourceMismatch {
        /// Resource name of the left-hand set.
        left: String,
        /// Resource name of the right-hand set.
        right: String,
    },

    /// A record-level operation needs an `id` the record does not carry.
    #[error("Record has no 'id'; cannot {operation}")]
    MissingRecordId {
        /// The operation that was refused, e.g. `update`.
        operation: &'static str,
    },

    /// An error from the HTTP layer.
    #[error(transparent)]
    Http(#[from] HttpError),
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_resource_and_path() {
        let error = ResourceError::NotFound {
            resource: "posts".to_string(),
            path: "admin/posts/63f2a1".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("posts"));
        assert!(message.contains("admin/posts/63f2a1"));
    }

    #[test]
    fn test_wrong_api_surface_names_operation() {
        let error = ResourceError::WrongApiSurface {
            resource: "authors".to_string(),
            operation: "delete",
        };
        let message = error.to_string();
        assert!(message.contains("read-only"));
        assert!(message.contains("delete"));
    }

    #[test]
    fn test_http_error_converts_upward() {
        let error: ResourceError = HttpError::TransportExhausted { attempts: 3 }.into();
        assert!(matches!(
            error,
            ResourceError::Http(HttpError::TransportExhausted { attempts: 3 })
        ));
    }

    #[test]
    fn test_resource_mismatch_names_both_sides() {
        let error = ResourceError::ResourceMismatch {
            left: "posts".to_string(),
            right: "tags".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("posts"));
        assert!(message.contains("tags"));
    }
}
