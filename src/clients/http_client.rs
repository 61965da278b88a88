//! HTTP client for Ghost API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to a Ghost site with automatic token regeneration on `401`.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use crate::auth::admin_token;
use crate::clients::errors::{HttpError, PlatformError};
use crate::clients::http_response::HttpResponse;
use crate::config::{ApiVersion, GhostConfig};
use crate::error::ConfigError;

/// Maximum number of `401` responses tolerated before giving up.
pub const MAX_ERROR_LIMIT: u32 = 3;

/// Wait time in seconds before the second re-authentication attempt.
const RETRY_WAIT_TIME: u64 = 5;

/// Supported HTTP methods.
///
/// Ghost's API only uses these four verbs, so unsupported methods are
/// unrepresentable rather than validated at request time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET.
    Get,
    /// HTTP POST.
    Post,
    /// HTTP PUT.
    Put,
    /// HTTP DELETE.
    Delete,
}

impl HttpMethod {
    /// Returns the method name in uppercase.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A file to send as a multipart upload.
///
/// Ghost's upload endpoints expect the file under the `file` form field.
#[derive(Clone, Debug)]
pub struct UploadFile {
    /// The file name reported to the server.
    pub filename: String,
    /// The file contents.
    pub bytes: Vec<u8>,
    /// The MIME type (e.g., `image/jpeg`, `application/zip`).
    pub mime: String,
}

impl UploadFile {
    /// Creates a new upload payload.
    #[must_use]
    pub fn new(
        filename: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
        mime: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
            mime: mime.into(),
        }
    }
}

/// HTTP client for making requests to the Ghost API.
///
/// The client handles:
/// - Endpoint URL composition, including the version path segment
/// - Admin token auth (`Authorization: Ghost <JWT>`) with a cached header
/// - Content API auth via the `key` query parameter
/// - Token regeneration and bounded retry on `401` responses
/// - Error body interpretation into [`HttpError`] variants
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use ghost_api::clients::HttpClient;
///
/// let client = HttpClient::new(config);
/// let body = client.get("admin/posts/", &[], None).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Client configuration (site URL, keys, version).
    config: GhostConfig,
    /// Cached `Authorization` header for the configured version.
    auth_header: Mutex<Option<String>>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: GhostConfig) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            config,
            auth_header: Mutex::new(None),
        }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &GhostConfig {
        &self.config
    }

    /// Composes the full URL for an endpoint under the given version.
    ///
    /// Versions 3 and 4 carry a path segment (`/ghost/api/v4/...`);
    /// version 5 endpoints are unversioned.
    fn endpoint_url(&self, endpoint: &str, version: ApiVersion) -> String {
        let mut url = format!("{}/ghost/api/", self.config.url().as_ref());
        if let Some(segment) = version.path_segment() {
            url.push_str(segment);
            url.push('/');
        }
        url.push_str(endpoint);
        url
    }

    /// Returns `true` if the endpoint authenticates with the content key.
    ///
    /// Content-surface endpoints always use the `key` query parameter, as
    /// does everything else when no admin key is configured.
    fn uses_content_key(&self, endpoint: &str) -> bool {
        self.config.admin_key().is_none() || endpoint.starts_with("content/")
    }

    fn build_auth_header(&self, version: ApiVersion) -> Result<String, HttpError> {
        let key = self
            .config
            .admin_key()
            .ok_or(ConfigError::MissingAdminKey)?;
        Ok(format!("Ghost {}", admin_token(key, version)?))
    }

    /// Returns the cached auth header, signing a token on first use.
    ///
    /// Headers for an overridden version are never cached; the cache only
    /// holds the header for the configured version.
    fn cached_auth_header(&self, version: ApiVersion) -> Result<String, HttpError> {
        if version != self.config.api_version() {
            return self.build_auth_header(version);
        }

        let mut cached = lock(&self.auth_header);
        if let Some(header) = cached.as_ref() {
            return Ok(header.clone());
        }
        let header = self.build_auth_header(version)?;
        *cached = Some(header.clone());
        Ok(header)
    }

    /// Regenerates the auth header, replacing any cached value.
    fn refresh_auth_header(&self, version: ApiVersion) -> Result<String, HttpError> {
        let header = self.build_auth_header(version)?;
        if version == self.config.api_version() {
            *lock(&self.auth_header) = Some(header.clone());
        }
        Ok(header)
    }

    /// Sends a request to the Ghost API.
    ///
    /// This is the single dispatch point all verb helpers go through. It
    /// composes the URL, attaches auth (token header or content key), and
    /// runs the `401` recovery protocol: the first `401` regenerates the
    /// token and retries immediately, the second waits five seconds first,
    /// and the third aborts with [`HttpError::TransportExhausted`]. All
    /// other responses are returned to the caller as-is.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if auth fails repeatedly, if no admin key is
    /// configured for an admin endpoint, or on network failure. Error
    /// bodies of non-`401` responses are not interpreted here; the verb
    /// helpers do that.
    pub async fn interact(
        &self,
        method: HttpMethod,
        endpoint: &str,
        params: &[(String, String)],
        json: Option<&serde_json::Value>,
        upload: Option<&UploadFile>,
        version_override: Option<ApiVersion>,
    ) -> Result<HttpResponse, HttpError> {
        let version = version_override.unwrap_or_else(|| self.config.api_version());
        let url = self.endpoint_url(endpoint, version);
        let uses_content_key = self.uses_content_key(endpoint);

        let mut params = params.to_vec();
        if uses_content_key {
            params.push((
                "key".to_string(),
                self.config.content_key().as_ref().to_string(),
            ));
        }

        let mut auth_header = if uses_content_key {
            None
        } else {
            Some(self.cached_auth_header(version)?)
        };

        let mut error_count: u32 = 0;
        loop {
            let mut builder = match method {
                HttpMethod::Get => self.client.get(&url),
                HttpMethod::Post => self.client.post(&url),
                HttpMethod::Put => self.client.put(&url),
                HttpMethod::Delete => self.client.delete(&url),
            };

            builder = builder.query(&params);
            if let Some(header) = &auth_header {
                builder = builder.header("Authorization", header);
            }
            if let Some(body) = json {
                builder = builder.json(body);
            }
            if let Some(file) = upload {
                // Multipart forms are single-use, so rebuild per attempt
                let part = reqwest::multipart::Part::bytes(file.bytes.clone())
                    .file_name(file.filename.clone())
                    .mime_str(&file.mime)?;
                builder = builder.multipart(reqwest::multipart::Form::new().part("file", part));
            }

            tracing::debug!(method = method.as_str(), endpoint, "dispatching request");
            let response = builder.send().await?;
            let code = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();

            if code == 401 {
                error_count += 1;
                if error_count >= MAX_ERROR_LIMIT {
                    return Err(HttpError::TransportExhausted {
                        attempts: error_count,
                    });
                }
                tracing::warn!(
                    endpoint,
                    attempt = error_count,
                    "received 401, regenerating auth token"
                );
                if error_count > 1 {
                    tokio::time::sleep(Duration::from_secs(RETRY_WAIT_TIME)).await;
                }
                if !uses_content_key {
                    auth_header = Some(self.refresh_auth_header(version)?);
                }
                continue;
            }

            return Ok(HttpResponse::new(code, body));
        }
    }

    /// Sends a GET request and returns the parsed JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure, auth exhaustion, or a
    /// non-2xx response.
    pub async fn get(
        &self,
        endpoint: &str,
        params: &[(String, String)],
        version_override: Option<ApiVersion>,
    ) -> Result<serde_json::Value, HttpError> {
        let response = self
            .interact(HttpMethod::Get, endpoint, params, None, None, version_override)
            .await?;
        Self::interpret(response)
    }

    /// Sends a POST request with a JSON body and returns the parsed JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure, auth exhaustion, or a
    /// non-2xx response.
    pub async fn post(
        &self,
        endpoint: &str,
        params: &[(String, String)],
        json: Option<&serde_json::Value>,
        version_override: Option<ApiVersion>,
    ) -> Result<serde_json::Value, HttpError> {
        let response = self
            .interact(
                HttpMethod::Post,
                endpoint,
                params,
                json,
                None,
                version_override,
            )
            .await?;
        Self::interpret(response)
    }

    /// Sends a PUT request with a JSON body and returns the parsed JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure, auth exhaustion, or a
    /// non-2xx response.
    pub async fn put(
        &self,
        endpoint: &str,
        params: &[(String, String)],
        json: Option<&serde_json::Value>,
        version_override: Option<ApiVersion>,
    ) -> Result<serde_json::Value, HttpError> {
        let response = self
            .interact(
                HttpMethod::Put,
                endpoint,
                params,
                json,
                None,
                version_override,
            )
            .await?;
        Self::interpret(response)
    }

    /// Sends a DELETE request.
    ///
    /// Ghost answers successful deletes with `204 No Content`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure, auth exhaustion, or a
    /// non-2xx response.
    pub async fn delete(
        &self,
        endpoint: &str,
        params: &[(String, String)],
        version_override: Option<ApiVersion>,
    ) -> Result<(), HttpError> {
        let response = self
            .interact(
                HttpMethod::Delete,
                endpoint,
                params,
                None,
                None,
                version_override,
            )
            .await?;
        if response.is_ok() {
            Ok(())
        } else {
            Err(Self::interpret_error(&response))
        }
    }

    /// Sends a POST request with a multipart file upload.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure, auth exhaustion, or a
    /// non-2xx response.
    pub async fn upload(
        &self,
        endpoint: &str,
        params: &[(String, String)],
        file: &UploadFile,
        version_override: Option<ApiVersion>,
    ) -> Result<serde_json::Value, HttpError> {
        let response = self
            .interact(
                HttpMethod::Post,
                endpoint,
                params,
                None,
                Some(file),
                version_override,
            )
            .await?;
        Self::interpret(response)
    }

    /// Interprets a response into a JSON body or an error.
    fn interpret(response: HttpResponse) -> Result<serde_json::Value, HttpError> {
        if response.is_ok() {
            let code = response.code;
            response.json().map_err(|_| HttpError::Malformed {
                status_code: code,
                body: response.body,
            })
        } else {
            Err(Self::interpret_error(&response))
        }
    }

    /// Classifies an error response body.
    ///
    /// A JSON body with an `errors` array becomes [`HttpError::Platform`],
    /// JSON of any other shape becomes [`HttpError::UnknownShape`], and a
    /// non-JSON body becomes [`HttpError::Malformed`].
    fn interpret_error(response: &HttpResponse) -> HttpError {
        let Ok(body) = response.json() else {
            return HttpError::Malformed {
                status_code: response.code,
                body: response.body.clone(),
            };
        };

        let first = body
            .get("errors")
            .and_then(serde_json::Value::as_array)
            .and_then(|errors| errors.first());

        first.map_or_else(
            || HttpError::UnknownShape {
                status_code: response.code,
                body: body.clone(),
            },
            |first| {
                HttpError::Platform(PlatformError {
                    status_code: response.code,
                    error_type: first
                        .get("type")
                        .and_then(serde_json::Value::as_str)
                        .unwrap_or("UnknownError")
                        .to_string(),
                    message: first
                        .get("message")
                        .and_then(serde_json::Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                    raw_errors: body.get("errors").cloned().unwrap_or(serde_json::Value::Null),
                })
            },
        )
    }
}

fn lock(mutex: &Mutex<Option<String>>) -> std::sync::MutexGuard<'_, Option<String>> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AdminApiKey, ContentApiKey, SiteUrl};

    fn config_with_admin(version: ApiVersion) -> GhostConfig {
        GhostConfig::builder()
            .url(SiteUrl::new("https://blog.example.com").unwrap())
            .content_key(ContentApiKey::new("content-key").unwrap())
            .admin_key(AdminApiKey::new("keyid:deadbeef").unwrap())
            .api_version(version)
            .build()
            .unwrap()
    }

    fn content_only_config() -> GhostConfig {
        GhostConfig::builder()
            .url(SiteUrl::new("https://blog.example.com").unwrap())
            .content_key(ContentApiKey::new("content-key").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_endpoint_url_includes_version_segment_for_v4() {
        let client = HttpClient::new(config_with_admin(ApiVersion::V4));
        assert_eq!(
            client.endpoint_url("admin/posts/", ApiVersion::V4),
            "https://blog.example.com/ghost/api/v4/admin/posts/"
        );
    }

    #[test]
    fn test_endpoint_url_omits_version_segment_for_v5() {
        let client = HttpClient::new(config_with_admin(ApiVersion::V5));
        assert_eq!(
            client.endpoint_url("admin/posts/", ApiVersion::V5),
            "https://blog.example.com/ghost/api/admin/posts/"
        );
    }

    #[test]
    fn test_content_endpoints_use_content_key() {
        let client = HttpClient::new(config_with_admin(ApiVersion::V5));
        assert!(client.uses_content_key("content/posts/"));
        assert!(!client.uses_content_key("admin/posts/"));
    }

    #[test]
    fn test_everything_uses_content_key_without_admin_key() {
        let client = HttpClient::new(content_only_config());
        assert!(client.uses_content_key("content/posts/"));
        assert!(client.uses_content_key("admin/posts/"));
    }

    #[test]
    fn test_auth_header_fails_without_admin_key() {
        let client = HttpClient::new(content_only_config());
        let result = client.build_auth_header(ApiVersion::V5);
        assert!(matches!(
            result,
            Err(HttpError::Config(ConfigError::MissingAdminKey))
        ));
    }

    #[test]
    fn test_cached_auth_header_is_reused() {
        let client = HttpClient::new(config_with_admin(ApiVersion::V5));
        let first = client.cached_auth_header(ApiVersion::V5).unwrap();
        let second = client.cached_auth_header(ApiVersion::V5).unwrap();
        assert!(first.starts_with("Ghost "));
        assert_eq!(first, second);
    }

    #[test]
    fn test_interpret_error_classifies_platform_errors() {
        let response = HttpResponse::new(
            404,
            r#"{"errors":[{"type":"NotFoundError","message":"Resource not found."}]}"#.to_string(),
        );
        let error = HttpClient::interpret_error(&response);
        match error {
            HttpError::Platform(e) => {
                assert_eq!(e.status_code, 404);
                assert_eq!(e.error_type, "NotFoundError");
                assert_eq!(e.message, "Resource not found.");
            }
            other => panic!("expected Platform error, got {other:?}"),
        }
    }

    #[test]
    fn test_interpret_error_classifies_unknown_shape() {
        let response = HttpResponse::new(400, r#"{"message":"nope"}"#.to_string());
        let error = HttpClient::interpret_error(&response);
        assert!(matches!(
            error,
            HttpError::UnknownShape {
                status_code: 400,
                ..
            }
        ));
    }

    #[test]
    fn test_interpret_error_classifies_malformed_body() {
        let response = HttpResponse::new(502, "<html>Bad Gateway</html>".to_string());
        let error = HttpClient::interpret_error(&response);
        assert!(matches!(
            error,
            HttpError::Malformed {
                status_code: 502,
                ..
            }
        ));
    }

    #[test]
    fn test_http_method_as_str() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Post.as_str(), "POST");
        assert_eq!(HttpMethod::Put.as_str(), "PUT");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
