//! # Ghost API client
//!
//! An async Rust client for the [Ghost](https://ghost.org) publishing
//! platform, covering the Admin and Content HTTP APIs with type-safe
//! configuration, self-signed admin tokens, and lazily paginated results.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`GhostConfig`] and [`GhostConfigBuilder`]
//! - Validated newtypes for API keys and the site URL
//! - Self-signed Admin API tokens (JWT) with automatic regeneration on `401`
//! - Generic CRUD over any resource through [`Resource`]
//! - Typed filter expressions via [`Filters`] and [`ListQuery`]
//! - Lazy pagination via [`RecordSet::next`] and [`Paginator`]
//! - Image and theme uploads via [`ImageResource`] and [`ThemeResource`]
//!
//! ## Quick Start
//!
//! ```rust
//! use ghost_api::{ContentApiKey, Ghost, GhostConfig, SiteUrl};
//!
//! let config = GhostConfig::builder()
//!     .url(SiteUrl::new("https://blog.example.com").unwrap())
//!     .content_key(ContentApiKey::new("22444f78447824223cefc48062").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let ghost = Ghost::new(config);
//! let posts = ghost.posts();
//! ```
//!
//! ## Reading Content
//!
//! ```rust,ignore
//! use ghost_api::{Filters, ListQuery, PageLimit};
//!
//! // Fetch a post by slug
//! let post = ghost.posts().get_by_slug("welcome").await?;
//! println!("{}", post["title"]);
//!
//! // List published posts, 15 per page
//! let page = ghost
//!     .posts()
//!     .list_with(
//!         ListQuery::new()
//!             .limit(PageLimit::Count(15))
//!             .filters(Filters::new().with("status", "published")),
//!     )
//!     .await?;
//!
//! // Result sets fetch their successor on demand
//! let next = page.next().await?;
//!
//! // Or walk every match lazily
//! let mut all = ghost.posts().paginate(Filters::new(), 100);
//! while let Some(post) = all.try_next().await? {
//!     println!("{}", post["title"]);
//! }
//! ```
//!
//! ## Writing Through the Admin API
//!
//! Mutations need an admin key. The client signs a short-lived JWT per
//! request batch and regenerates it automatically when Ghost answers
//! `401`:
//!
//! ```rust,ignore
//! use ghost_api::{AdminApiKey, Filters};
//! use serde_json::json;
//!
//! let config = GhostConfig::builder()
//!     .url(SiteUrl::new("https://blog.example.com")?)
//!     .content_key(ContentApiKey::new("22444f78447824223cefc48062")?)
//!     .admin_key(AdminApiKey::new("64f1c8a9e3d5b2:0123456789abcdef")?)
//!     .build()?;
//! let ghost = Ghost::new(config);
//!
//! // Create
//! let post = ghost
//!     .posts()
//!     .create(json!({"title": "Hello", "html": "<p>Hi there.</p>"}))
//!     .await?;
//!
//! // Update; the collision check timestamp is handled automatically
//! let post = post.update(json!({"title": "Hello again"})).await?;
//!
//! // Bulk delete by filter
//! let deleted = ghost
//!     .posts()
//!     .delete_where(&Filters::new().with("status", "draft"))
//!     .await?;
//! ```
//!
//! ## Uploads
//!
//! ```rust,ignore
//! use ghost_api::{ImagePurpose, UploadFile};
//!
//! let file = UploadFile::new("photo.jpg", bytes, "image/jpeg");
//! let image = ghost
//!     .images()
//!     .upload(file, ImagePurpose::Image, Some("upload-1"))
//!     .await?;
//! println!("stored at {}", image.url);
//!
//! let theme = ghost
//!     .themes()
//!     .upload(UploadFile::new("casper.zip", archive, "application/zip"))
//!     .await?;
//! ghost.themes().activate("casper").await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Untyped records**: Ghost's field set varies with the requested
//!   fields and formats, so records expose raw JSON

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
mod ghost;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{
    AdminApiKey, ApiVersion, ContentApiKey, GhostConfig, GhostConfigBuilder, SiteUrl,
};
pub use error::ConfigError;
pub use ghost::Ghost;

// Re-export HTTP client types
pub use clients::{HttpClient, HttpError, HttpMethod, HttpResponse, PlatformError, UploadFile};

// Re-export resource layer types
pub use rest::{
    ApiSurface, FilterValue, Filters, ImagePurpose, ImageResource, ListQuery, ListStyle,
    PageLimit, Pagination, Paginator, Record, RecordSet, Resource, ResourceError, ThemeResource,
    UploadedImage,
};
