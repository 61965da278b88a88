//! The top-level client facade.
//!
//! [`Ghost`] owns the HTTP client and hands out [`Resource`] handles for
//! the well-known Ghost resources, plus upload handles and an ad-hoc
//! factory for anything else.

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::config::GhostConfig;
use crate::rest::{ApiSurface, ImageResource, Resource, ThemeResource};

/// Client for one Ghost site.
///
/// Resource handles returned by the accessors share one HTTP client, so
/// cloning them is cheap and the cached admin token is shared.
///
/// Posts, pages, and tags go through the Admin API when an admin key is
/// configured and fall back to the read-only Content API otherwise.
/// Members, users, and the site object only exist on the Admin API;
/// authors and settings only on the Content API.
///
/// # Example
///
/// ```rust,ignore
/// use ghost_api::{Ghost, GhostConfig, ContentApiKey, SiteUrl};
///
/// let config = GhostConfig::builder()
///     .url(SiteUrl::new("https://blog.example.com")?)
///     .content_key(ContentApiKey::new("22444f78447824223cefc48062")?)
///     .build()?;
/// let ghost = Ghost::new(config);
///
/// let post = ghost.posts().get_by_slug("welcome").await?;
/// println!("{}", post["title"]);
/// ```
#[derive(Debug)]
pub struct Ghost {
    client: Arc<HttpClient>,
}

impl Ghost {
    /// Creates a client for the configured site.
    #[must_use]
    pub fn new(config: GhostConfig) -> Self {
        Self {
            client: Arc::new(HttpClient::new(config)),
        }
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &GhostConfig {
        self.client.config()
    }

    /// The surface used for resources available on both APIs.
    fn preferred_surface(&self) -> ApiSurface {
        if self.client.config().admin_key().is_some() {
            ApiSurface::Admin
        } else {
            ApiSurface::Content
        }
    }

    /// Returns a handle on an arbitrary resource collection.
    ///
    /// For resources the accessors below do not cover, such as
    /// `newsletters` or `tiers`.
    #[must_use]
    pub fn resource(&self, name: impl Into<String>, surface: ApiSurface) -> Resource {
        Resource::new(Arc::clone(&self.client), name.into(), surface, false)
    }

    /// Returns a handle on an arbitrary single resource.
    #[must_use]
    pub fn single_resource(&self, name: impl Into<String>, surface: ApiSurface) -> Resource {
        Resource::new(Arc::clone(&self.client), name.into(), surface, true)
    }

    /// Posts, through the Admin API when an admin key is configured.
    #[must_use]
    pub fn posts(&self) -> Resource {
        self.resource("posts", self.preferred_surface())
    }

    /// Pages, through the Admin API when an admin key is configured.
    #[must_use]
    pub fn pages(&self) -> Resource {
        self.resource("pages", self.preferred_surface())
    }

    /// Tags, through the Admin API when an admin key is configured.
    #[must_use]
    pub fn tags(&self) -> Resource {
        self.resource("tags", self.preferred_surface())
    }

    /// Members. Admin API only.
    #[must_use]
    pub fn members(&self) -> Resource {
        self.resource("members", ApiSurface::Admin)
    }

    /// Staff users. Admin API only.
    #[must_use]
    pub fn users(&self) -> Resource {
        self.resource("users", ApiSurface::Admin)
    }

    /// Authors. Content API only; staff management goes through
    /// [`users`](Self::users).
    #[must_use]
    pub fn authors(&self) -> Resource {
        self.resource("authors", ApiSurface::Content)
    }

    /// Site settings. Content API only, read with
    /// [`Resource::read`].
    #[must_use]
    pub fn settings(&self) -> Resource {
        self.single_resource("settings", ApiSurface::Content)
    }

    /// The site object. Admin API only, read with
    /// [`Resource::read`].
    #[must_use]
    pub fn site(&self) -> Resource {
        self.single_resource("site", ApiSurface::Admin)
    }

    /// The image upload endpoint.
    #[must_use]
    pub fn images(&self) -> ImageResource {
        ImageResource::new(Arc::clone(&self.client))
    }

    /// The theme upload and activation endpoints.
    #[must_use]
    pub fn themes(&self) -> ThemeResource {
        ThemeResource::new(Arc::clone(&self.client))
    }
}
