//! HTTP response types for the Ghost API client.
//!
//! This module provides the [`HttpResponse`] type for accessing raw
//! response data before it is interpreted into records or errors.

/// An HTTP response from the Ghost API.
///
/// Holds the status code and the raw body text. The body is kept as text
/// rather than parsed JSON because error interpretation needs to
/// distinguish non-JSON bodies from JSON bodies of an unexpected shape.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, body: String) -> Self {
        Self { code, body }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if the body is not valid JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ok_for_2xx_codes() {
        assert!(HttpResponse::new(200, String::new()).is_ok());
        assert!(HttpResponse::new(201, String::new()).is_ok());
        assert!(HttpResponse::new(204, String::new()).is_ok());
        assert!(!HttpResponse::new(301, String::new()).is_ok());
        assert!(!HttpResponse::new(404, String::new()).is_ok());
        assert!(!HttpResponse::new(500, String::new()).is_ok());
    }

    #[test]
    fn test_json_parses_valid_body() {
        let response = HttpResponse::new(200, r#"{"posts":[]}"#.to_string());
        let body = response.json().unwrap();
        assert!(body.get("posts").unwrap().as_array().unwrap().is_empty());
    }

    #[test]
    fn test_json_rejects_non_json_body() {
        let response = HttpResponse::new(502, "<html>Bad Gateway</html>".to_string());
        assert!(response.json().is_err());
    }
}
