//! Authentication for the Ghost Admin API.
//!
//! This module produces the short-lived JSON Web Tokens the Admin API
//! expects in its `Authorization: Ghost <token>` header. Content API
//! requests do not use tokens; they authenticate with the `key` query
//! parameter instead, handled by the HTTP client.
//!
//! # Token Lifecycle
//!
//! Admin tokens are self-signed with the hex-decoded secret half of the
//! Admin API key and are valid for five minutes. Tokens are not cached
//! here; the HTTP client regenerates them on demand and after `401`
//! responses.
//!
//! # Example
//!
//! ```rust
//! use ghost_api::auth::admin_token;
//! use ghost_api::{AdminApiKey, ApiVersion};
//!
//! let key = AdminApiKey::new("64f1c8a9e3d5b2:0123456789abcdef").unwrap();
//! let token = admin_token(&key, ApiVersion::V5).unwrap();
//! assert_eq!(token.split('.').count(), 3);
//! ```

mod token;

pub use token::{admin_token, AuthError};
