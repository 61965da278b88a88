//! Admin API token signing.
//!
//! Ghost's Admin API authenticates each request with a short-lived JWT
//! signed by the client itself using the secret half of the Admin API key.
//!
//! # Token Structure
//!
//! - Header: `{ alg: HS256, typ: JWT, kid: <key id> }`
//! - Claims: `{ iat: now, exp: now + 300, aud: "/<version>/admin/" }`
//!   (version 5 drops the version segment: `"/admin/"`)
//!
//! The signing key is the hex-decoded secret, not its ASCII form.

use crate::config::{AdminApiKey, ApiVersion};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;
use thiserror::Error;

/// Admin token validity window in seconds (5 minutes).
const TOKEN_TTL_SECS: i64 = 300;

/// Errors that can occur while signing an Admin API token.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Token signing failed.
    #[error("Failed to sign Admin API token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

/// Claims carried by a Ghost Admin API token.
#[derive(Debug, Serialize)]
struct AdminClaims<'a> {
    iat: i64,
    exp: i64,
    aud: &'a str,
}

/// Signs a fresh Admin API token for the given key and version.
///
/// The returned token is valid for five minutes from the moment of
/// signing. Callers are expected to generate a new token rather than
/// reuse one near expiry; tokens are cheap to produce.
///
/// # Errors
///
/// Returns [`AuthError::Signing`] if JWT encoding fails.
///
/// # Example
///
/// ```rust
/// use ghost_api::auth::admin_token;
/// use ghost_api::{AdminApiKey, ApiVersion};
///
/// let key = AdminApiKey::new("keyid:deadbeef").unwrap();
/// let token = admin_token(&key, ApiVersion::V4).unwrap();
/// assert!(!token.is_empty());
/// ```
pub fn admin_token(key: &AdminApiKey, version: ApiVersion) -> Result<String, AuthError> {
    let mut header = Header::new(Algorithm::HS256);
    header.kid = Some(key.id().to_string());

    let iat = chrono::Utc::now().timestamp();
    let claims = AdminClaims {
        iat,
        exp: iat + TOKEN_TTL_SECS,
        aud: version.admin_audience(),
    };

    let encoding_key = EncodingKey::from_secret(key.secret_bytes());
    Ok(encode(&header, &claims, &encoding_key)?)
}
