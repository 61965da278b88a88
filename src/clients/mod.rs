//! HTTP client types for Ghost API communication.
//!
//! This module provides the foundational HTTP layer for making
//! authenticated requests to the Ghost Admin and Content APIs. It handles
//! URL composition, auth attachment, `401` recovery, and error body
//! interpretation.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpResponse`]: A raw response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`UploadFile`]: A multipart file upload payload
//! - [`HttpError`] / [`PlatformError`]: HTTP-level error types
//!
//! # Retry Behavior
//!
//! The client retries only `401` responses, regenerating the admin token
//! each time:
//!
//! - **First `401`**: regenerate the token and retry immediately
//! - **Second `401`**: wait five seconds, regenerate, and retry
//! - **Third `401`**: give up with [`HttpError::TransportExhausted`]
//!
//! All other error responses are returned to the caller without retry.

mod errors;
mod http_client;
mod http_response;

pub use errors::{HttpError, PlatformError};
pub use http_client::{HttpClient, HttpMethod, UploadFile, MAX_ERROR_LIMIT};
pub use http_response::HttpResponse;
