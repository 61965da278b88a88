//! Generic CRUD operations over Ghost resources.
//!
//! This module defines [`Resource`], a handle on one Ghost resource
//! (posts, pages, tags, members, ...) through one API surface. A resource
//! knows how to compose its endpoint paths, gate mutations to the Admin
//! surface, and turn responses into [`Record`]s and [`RecordSet`]s.
//!
//! # Example
//!
//! ```rust,ignore
//! use ghost_api::{Filters, Ghost, ListQuery, PageLimit};
//!
//! let posts = ghost.posts();
//!
//! // Fetch one post
//! let post = posts.get("63f2a1d4e9b0c8").await?;
//!
//! // List with a filter
//! let published = posts
//!     .list_with(
//!         ListQuery::new()
//!             .limit(PageLimit::Count(15))
//!             .filters(Filters::new().with("status", "published")),
//!     )
//!     .await?;
//!
//! // Walk every matching record lazily
//! let mut pages = posts.paginate(Filters::new(), 100);
//! while let Some(post) = pages.try_next().await? {
//!     println!("{}", post["title"]);
//! }
//! ```

use std::collections::VecDeque;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::clients::{HttpClient, HttpError};
use crate::config::ApiVersion;
use crate::rest::errors::ResourceError;
use crate::rest::filter::Filters;
use crate::rest::query::{ListQuery, PageLimit};
use crate::rest::result::{Record, RecordSet, RequestState};

/// Which API a resource is accessed through.
///
/// The Admin API authenticates with a signed token and allows mutations;
/// the Content API authenticates with the content key and is read-only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiSurface {
    /// The Admin API (`/ghost/api/.../admin/`).
    Admin,
    /// The Content API (`/ghost/api/.../content/`).
    Content,
}

impl ApiSurface {
    /// Returns the endpoint path prefix for this surface.
    #[must_use]
    pub const fn path_prefix(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Content => "content",
        }
    }

    /// Returns `true` for the Admin surface.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// A handle on one Ghost resource through one API surface.
///
/// Handles are cheap to clone; they share the underlying HTTP client.
#[derive(Clone, Debug)]
pub struct Resource {
    client: Arc<HttpClient>,
    name: String,
    surface: ApiSurface,
    single: bool,
    version: Option<ApiVersion>,
}

impl Resource {
    pub(crate) const fn new(
        client: Arc<HttpClient>,
        name: String,
        surface: ApiSurface,
        single: bool,
    ) -> Self {
        Self {
            client,
            name,
            surface,
            single,
            version: None,
        }
    }

    /// Returns the resource name, e.g. `posts`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the API surface this handle goes through.
    #[must_use]
    pub const fn surface(&self) -> ApiSurface {
        self.surface
    }

    /// Returns `true` if this resource is a single object rather than a
    /// collection (e.g. `site`, `settings`).
    #[must_use]
    pub const fn is_single(&self) -> bool {
        self.single
    }

    /// Returns a handle whose requests use the given API version instead
    /// of the configured one.
    #[must_use]
    pub fn with_version(mut self, version: ApiVersion) -> Self {
        self.version = Some(version);
        self
    }

    /// Composes an endpoint path from the surface prefix, the resource
    /// name, and the given tail segments.
    ///
    /// An empty trailing segment produces the trailing slash list
    /// endpoints require: `endpoint(&[""])` gives `admin/posts/`.
    fn endpoint(&self, tail: &[&str]) -> String {
        let mut segments = vec![self.surface.path_prefix(), self.name.as_str()];
        segments.extend_from_slice(tail);
        segments.join("/")
    }

    /// Maps a `404` from the platform to [`ResourceError::NotFound`].
    fn map_http(&self, path: &str, error: HttpError) -> ResourceError {
        match error {
            HttpError::Platform(platform) if platform.status_code == 404 => {
                ResourceError::NotFound {
                    resource: self.name.clone(),
                    path: path.to_string(),
                }
            }
            other => ResourceError::Http(other),
        }
    }

    /// Refuses mutations through the read-only Content surface.
    fn ensure_admin(&self, operation: &'static str) -> Result<(), ResourceError> {
        if self.surface.is_admin() {
            Ok(())
        } else {
            Err(ResourceError::WrongApiSurface {
                resource: self.name.clone(),
                operation,
            })
        }
    }

    /// Prepares read parameters.
    ///
    /// A narrowed field list always gets `id` and `updated_at` added, so
    /// records stay updatable. Admin reads request both rendered and
    /// source content formats.
    fn prepare_read_query(&self, mut query: ListQuery) -> Vec<(String, String)> {
        let narrowed = query.fields_value().map(<[String]>::to_vec);
        if let Some(mut fields) = narrowed {
            for required in ["id", "updated_at"] {
                if !fields.iter().any(|field| field == required) {
                    fields.push(required.to_string());
                }
            }
            query.set_fields(fields);
        }
        let mut params = query.to_params();
        if self.surface.is_admin() {
            params.push(("formats".to_string(), "html,mobiledoc".to_string()));
        }
        params
    }

    async fn request_get(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<Value, ResourceError> {
        self.client
            .get(path, params, self.version)
            .await
            .map_err(|error| self.map_http(path, error))
    }

    /// Fetches a single record from the given path.
    ///
    /// Ghost answers single fetches with a one-element array under the
    /// resource key; single resources like `site` answer with a bare
    /// object. Both shapes are accepted.
    pub(crate) async fn fetch_one(
        &self,
        path: &str,
        params: Vec<(String, String)>,
    ) -> Result<Record, ResourceError> {
        let body = self.request_get(path, &params).await?;
        let not_found = || ResourceError::NotFound {
            resource: self.name.clone(),
            path: path.to_string(),
        };
        let object = match body.get(&self.name) {
            Some(Value::Array(items)) => items.first().and_then(Value::as_object),
            Some(Value::Object(object)) => Some(object),
            _ => None,
        }
        .ok_or_else(not_found)?;
        Ok(Record::new(object.clone(), self.clone()))
    }

    /// Fetches a page of records from the given path.
    ///
    /// The request is retained on the returned set so it can fetch the
    /// following page.
    pub(crate) async fn fetch_set(
        &self,
        path: &str,
        params: Vec<(String, String)>,
    ) -> Result<RecordSet, ResourceError> {
        let body = self.request_get(path, &params).await?;
        let records = body
            .get(&self.name)
            .and_then(Value::as_array)
            .ok_or_else(|| ResourceError::NotFound {
                resource: self.name.clone(),
                path: path.to_string(),
            })?;
        let items = records
            .iter()
            .filter_map(Value::as_object)
            .map(|object| Record::new(object.clone(), self.clone()))
            .collect();
        let meta = body
            .get("meta")
            .and_then(|meta| meta.get("pagination"))
            .and_then(|pagination| serde_json::from_value(pagination.clone()).ok());
        Ok(RecordSet::new(
            items,
            self.clone(),
            meta,
            Some(RequestState {
                path: path.to_string(),
                params,
            }),
        ))
    }

    /// Fetches a record by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no such record exists.
    pub async fn get(&self, id: &str) -> Result<Record, ResourceError> {
        self.get_with(id, ListQuery::new()).await
    }

    /// Fetches a record by id with query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no such record exists.
    pub async fn get_with(&self, id: &str, query: ListQuery) -> Result<Record, ResourceError> {
        let params = self.prepare_read_query(query);
        self.fetch_one(&self.endpoint(&[id]), params).await
    }

    /// Fetches a record by slug.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no such record exists.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Record, ResourceError> {
        self.get_by_slug_with(slug, ListQuery::new()).await
    }

    /// Fetches a record by slug with query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no such record exists.
    pub async fn get_by_slug_with(
        &self,
        slug: &str,
        query: ListQuery,
    ) -> Result<Record, ResourceError> {
        let params = self.prepare_read_query(query);
        self.fetch_one(&self.endpoint(&["slug", slug]), params).await
    }

    /// Fetches a single resource that has no per-record ids (`site`,
    /// `settings`).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource is absent or
    /// empty.
    pub async fn read(&self) -> Result<Record, ResourceError> {
        self.read_with(ListQuery::new()).await
    }

    /// Fetches a single resource with query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource is absent or
    /// empty.
    pub async fn read_with(&self, query: ListQuery) -> Result<Record, ResourceError> {
        let params = self.prepare_read_query(query);
        self.fetch_one(&self.endpoint(&[""]), params).await
    }

    /// Lists records.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on request failure.
    pub async fn list(&self) -> Result<RecordSet, ResourceError> {
        self.list_with(ListQuery::new()).await
    }

    /// Lists records with query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on request failure.
    pub async fn list_with(&self, query: ListQuery) -> Result<RecordSet, ResourceError> {
        let params = self.prepare_read_query(query);
        self.fetch_set(&self.endpoint(&[""]), params).await
    }

    /// Walks every record matching the filters, fetching pages lazily.
    #[must_use]
    pub fn paginate(&self, filters: Filters, per_page: u32) -> Paginator {
        Paginator::new(self.clone(), filters, per_page)
    }

    /// Creates a record.
    ///
    /// Items carrying an `html` field are posted with `source=html` so
    /// Ghost converts the markup instead of discarding it.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::WrongApiSurface`] on the Content surface,
    /// or any error from the request.
    pub async fn create(&self, item: Value) -> Result<Record, ResourceError> {
        self.ensure_admin("create")?;
        self.post_item(&item).await
    }

    /// Creates several records, one request per item.
    ///
    /// Ghost accepts only one item per create request, so the batch is
    /// posted sequentially. The first failure aborts the batch; records
    /// already created stay created.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EmptyCreateBatch`] for an empty batch,
    /// [`ResourceError::WrongApiSurface`] on the Content surface, or any
    /// error from the requests.
    pub async fn create_many(&self, items: Vec<Value>) -> Result<Vec<Record>, ResourceError> {
        self.ensure_admin("create")?;
        if items.is_empty() {
            return Err(ResourceError::EmptyCreateBatch);
        }
        let mut created = Vec::with_capacity(items.len());
        for item in &items {
            created.push(self.post_item(item).await?);
        }
        Ok(created)
    }

    async fn post_item(&self, item: &Value) -> Result<Record, ResourceError> {
        let mut params = Vec::new();
        if item.get("html").is_some() {
            params.push(("source".to_string(), "html".to_string()));
        }
        let path = self.endpoint(&[""]);
        let body = self.wrap_payload(item.clone());
        let response = self
            .client
            .post(&path, &params, Some(&body), self.version)
            .await
            .map_err(|error| self.map_http(&path, error))?;
        self.first_record(&path, &response)
    }

    /// Updates a record by id.
    ///
    /// Ghost rejects updates whose `updated_at` is older than the stored
    /// record. When the caller does not supply one, it is taken from
    /// `old`, or from a fresh fetch of the record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingUpdateData`] when `data` carries
    /// no fields, [`ResourceError::WrongApiSurface`] on the Content
    /// surface, or any error from the request.
    pub async fn update(
        &self,
        id: &str,
        data: Value,
        old: Option<&Record>,
    ) -> Result<Record, ResourceError> {
        self.ensure_admin("update")?;
        let Value::Object(mut data) = data else {
            return Err(ResourceError::MissingUpdateData);
        };
        if data.is_empty() {
            return Err(ResourceError::MissingUpdateData);
        }

        if !data.contains_key("updated_at") {
            let updated_at = match old {
                Some(record) => record.get("updated_at").cloned(),
                None => self.get(id).await?.get("updated_at").cloned(),
            };
            if let Some(updated_at) = updated_at {
                data.insert("updated_at".to_string(), updated_at);
            }
        }

        let path = self.endpoint(&[id]);
        let body = self.wrap_payload(Value::Object(data));
        let response = self
            .client
            .put(&path, &[], Some(&body), self.version)
            .await
            .map_err(|error| self.map_http(&path, error))?;
        self.first_record(&path, &response)
    }

    /// Updates every record matching the filters with the same fields.
    ///
    /// Matches are resolved first with pagination disabled; each record
    /// is then updated using its own `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::WrongApiSurface`] on the Content surface,
    /// or any error from the requests. No matches is not an error.
    pub async fn update_where(
        &self,
        filters: &Filters,
        data: &Value,
    ) -> Result<Vec<Record>, ResourceError> {
        self.ensure_admin("update")?;
        let matches = match self.resolve_matches(filters, &["id", "updated_at"]).await {
            Ok(matches) => matches,
            Err(ResourceError::NotFound { .. }) => return Ok(Vec::new()),
            Err(error) => return Err(error),
        };
        let mut updated = Vec::with_capacity(matches.len());
        for record in &matches {
            let id = record
                .id()
                .ok_or(ResourceError::MissingRecordId { operation: "update" })?
                .to_string();
            updated.push(self.update(&id, data.clone(), Some(record)).await?);
        }
        Ok(updated)
    }

    /// Deletes a record by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::WrongApiSurface`] on the Content surface,
    /// [`ResourceError::NotFound`] if no such record exists, or any error
    /// from the request.
    pub async fn delete(&self, id: &str) -> Result<(), ResourceError> {
        self.ensure_admin("delete")?;
        let path = self.endpoint(&[id]);
        self.client
            .delete(&path, &[], self.version)
            .await
            .map_err(|error| self.map_http(&path, error))
    }

    /// Deletes every record matching the filters, returning their ids.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::WrongApiSurface`] on the Content surface,
    /// or any error from the requests. No matches is not an error.
    pub async fn delete_where(&self, filters: &Filters) -> Result<Vec<String>, ResourceError> {
        self.ensure_admin("delete")?;
        let matches = match self.resolve_matches(filters, &["id"]).await {
            Ok(matches) => matches,
            Err(ResourceError::NotFound { .. }) => return Ok(Vec::new()),
            Err(error) => return Err(error),
        };
        let mut deleted = Vec::with_capacity(matches.len());
        for record in &matches {
            let id = record
                .id()
                .ok_or(ResourceError::MissingRecordId { operation: "delete" })?
                .to_string();
            self.delete(&id).await?;
            deleted.push(id);
        }
        Ok(deleted)
    }

    /// Resolves the records a bulk mutation applies to.
    ///
    /// Pagination is disabled and the response narrowed to the fields
    /// the mutation needs, so arbitrarily large matches resolve in one
    /// request.
    async fn resolve_matches(
        &self,
        filters: &Filters,
        fields: &[&str],
    ) -> Result<RecordSet, ResourceError> {
        let query = ListQuery::new()
            .limit(PageLimit::All)
            .fields(fields.iter().copied())
            .filters(filters.clone());
        self.fetch_set(&self.endpoint(&[""]), query.to_params())
            .await
    }

    /// Wraps an item in the envelope Ghost expects: `{<name>: [item]}`.
    fn wrap_payload(&self, item: Value) -> Value {
        let mut wrapper = Map::new();
        wrapper.insert(self.name.clone(), Value::Array(vec![item]));
        Value::Object(wrapper)
    }

    /// Extracts the first record from a mutation response.
    fn first_record(&self, path: &str, body: &Value) -> Result<Record, ResourceError> {
        body.get(&self.name)
            .and_then(Value::as_array)
            .and_then(|items| items.first())
            .and_then(Value::as_object)
            .map(|object| Record::new(object.clone(), self.clone()))
            .ok_or_else(|| ResourceError::NotFound {
                resource: self.name.clone(),
                path: path.to_string(),
            })
    }
}

/// A lazy iterator over every record matching a filter.
///
/// Pages are fetched on demand as records are consumed; pagination state
/// lives here, not on the server.
#[derive(Debug)]
pub struct Paginator {
    resource: Resource,
    filters: Filters,
    per_page: u32,
    page: u32,
    buffer: VecDeque<Record>,
    done: bool,
}

impl Paginator {
    fn new(resource: Resource, filters: Filters, per_page: u32) -> Self {
        Self {
            resource,
            filters,
            per_page,
            page: 1,
            buffer: VecDeque::new(),
            done: false,
        }
    }

    /// Returns the next record, fetching the next page when the buffer
    /// runs dry.
    ///
    /// Returns `Ok(None)` once every matching record has been yielded.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying page fetch.
    pub async fn try_next(&mut self) -> Result<Option<Record>, ResourceError> {
        if self.buffer.is_empty() && !self.done {
            self.fill_buffer().await?;
        }
        Ok(self.buffer.pop_front())
    }

    async fn fill_buffer(&mut self) -> Result<(), ResourceError> {
        let query = ListQuery::new()
            .limit(PageLimit::Count(self.per_page))
            .page(self.page)
            .filters(self.filters.clone());
        match self.resource.list_with(query).await {
            Ok(page) if page.is_empty() => self.done = true,
            Ok(page) => {
                self.buffer.extend(page);
                self.page += 1;
            }
            // Past the last page some versions answer 404 instead of an
            // empty set
            Err(ResourceError::NotFound { .. }) => self.done = true,
            Err(error) => return Err(error),
        }
        Ok(())
    }

    /// Rewinds to the first page, discarding buffered records.
    pub fn restart(&mut self) {
        self.page = 1;
        self.buffer.clear();
        self.done = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AdminApiKey, ContentApiKey, GhostConfig, SiteUrl};

    fn resource_on(surface: ApiSurface, name: &str) -> Resource {
        let config = GhostConfig::builder()
            .url(SiteUrl::new("https://blog.example.com").unwrap())
            .content_key(ContentApiKey::new("content-key").unwrap())
            .admin_key(AdminApiKey::new("keyid:deadbeef").unwrap())
            .build()
            .unwrap();
        Resource::new(
            Arc::new(HttpClient::new(config)),
            name.to_string(),
            surface,
            false,
        )
    }

    #[test]
    fn test_endpoint_composition() {
        let posts = resource_on(ApiSurface::Admin, "posts");
        assert_eq!(posts.endpoint(&[""]), "admin/posts/");
        assert_eq!(posts.endpoint(&["63f2a1"]), "admin/posts/63f2a1");
        assert_eq!(posts.endpoint(&["slug", "my-post"]), "admin/posts/slug/my-post");

        let authors = resource_on(ApiSurface::Content, "authors");
        assert_eq!(authors.endpoint(&[""]), "content/authors/");
    }

    #[test]
    fn test_content_surface_refuses_mutations() {
        let authors = resource_on(ApiSurface::Content, "authors");
        let error = authors.ensure_admin("create").unwrap_err();
        assert!(matches!(
            error,
            ResourceError::WrongApiSurface { operation: "create", .. }
        ));
        assert!(resource_on(ApiSurface::Admin, "posts")
            .ensure_admin("create")
            .is_ok());
    }

    #[test]
    fn test_narrowed_fields_keep_id_and_updated_at() {
        let posts = resource_on(ApiSurface::Content, "posts");
        let params = posts.prepare_read_query(ListQuery::new().fields(["title"]));
        assert!(params.contains(&("fields".to_string(), "title,id,updated_at".to_string())));
    }

    #[test]
    fn test_unnarrowed_query_adds_no_fields() {
        let posts = resource_on(ApiSurface::Content, "posts");
        let params = posts.prepare_read_query(ListQuery::new());
        assert!(params.iter().all(|(key, _)| key != "fields"));
    }

    #[test]
    fn test_admin_reads_request_both_formats() {
        let posts = resource_on(ApiSurface::Admin, "posts");
        let params = posts.prepare_read_query(ListQuery::new());
        assert!(params.contains(&("formats".to_string(), "html,mobiledoc".to_string())));

        let content = resource_on(ApiSurface::Content, "posts");
        let params = content.prepare_read_query(ListQuery::new());
        assert!(params.iter().all(|(key, _)| key != "formats"));
    }

    #[test]
    fn test_wrap_payload_envelopes_item() {
        let posts = resource_on(ApiSurface::Admin, "posts");
        let wrapped = posts.wrap_payload(serde_json::json!({"title": "Hi"}));
        assert_eq!(wrapped["posts"][0]["title"], "Hi");
    }

    #[test]
    fn test_map_http_translates_platform_404() {
        let posts = resource_on(ApiSurface::Admin, "posts");
        let error = posts.map_http(
            "admin/posts/abc",
            HttpError::Platform(crate::clients::PlatformError {
                status_code: 404,
                error_type: "NotFoundError".to_string(),
                message: "Resource not found.".to_string(),
                raw_errors: Value::Null,
            }),
        );
        assert!(matches!(error, ResourceError::NotFound { .. }));

        let error = posts.map_http(
            "admin/posts/abc",
            HttpError::TransportExhausted { attempts: 3 },
        );
        assert!(matches!(error, ResourceError::Http(_)));
    }
}
