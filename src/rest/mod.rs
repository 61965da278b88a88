//! Generic resource access over the Ghost Admin and Content APIs.
//!
//! This module provides the resource layer on top of the HTTP client:
//!
//! - **[`Resource`]**: generic CRUD over one resource through one API surface
//! - **[`Record`] / [`RecordSet`]**: results, with lazy page-by-page fetching
//! - **[`Paginator`]**: a lazy iterator over every matching record
//! - **[`Filters`] / [`ListQuery`]**: typed filter and query construction
//! - **[`ImageResource`] / [`ThemeResource`]**: upload endpoints
//! - **[`ResourceError`]**: semantic error types for resource operations
//!
//! # Overview
//!
//! Resources are untyped by design: Ghost's field set varies with the
//! requested fields and formats, so records expose raw JSON instead of
//! per-resource structs. The same [`Resource`] type serves posts, pages,
//! tags, members, and any custom resource name.
//!
//! # Example
//!
//! ```rust,ignore
//! use ghost_api::{Filters, Ghost, GhostConfig, ListQuery, PageLimit};
//!
//! let ghost = Ghost::new(config);
//! let posts = ghost.posts();
//!
//! // One page of published posts
//! let page = posts
//!     .list_with(
//!         ListQuery::new()
//!             .limit(PageLimit::Count(15))
//!             .filters(Filters::new().with("status", "published")),
//!     )
//!     .await?;
//!
//! for post in &page {
//!     println!("{}", post["title"]);
//! }
//!
//! // The set knows how to fetch its successor
//! let next = page.next().await?;
//! ```

mod errors;
mod filter;
mod query;
mod resource;
mod result;
mod uploads;

pub use errors::ResourceError;
pub use filter::{FilterValue, Filters, ListStyle};
pub use query::{ListQuery, PageLimit};
pub use resource::{ApiSurface, Paginator, Resource};
pub use result::{Pagination, Record, RecordSet};
pub use uploads::{ImagePurpose, ImageResource, ThemeResource, UploadedImage};
