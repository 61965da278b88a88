//! Records and lazily paginated result sets.
//!
//! List operations return a [`RecordSet`] holding one page of
//! [`Record`]s plus the pagination metadata Ghost reported. The set
//! retains the request that produced it, so [`RecordSet::next`] can
//! re-issue it for the following page without the caller rebuilding
//! parameters.

use std::ops::Index;
use std::slice;

use serde::Deserialize;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::rest::errors::ResourceError;
use crate::rest::query::PageLimit;
use crate::rest::resource::Resource;

static NULL: Value = Value::Null;

/// A single record returned by the API.
///
/// Records keep their fields as raw JSON rather than deserializing into
/// per-resource structs; Ghost's field set varies with the requested
/// `fields` and `formats`, and custom resources have no fixed shape.
///
/// A record remembers the resource it came from, so [`Record::update`]
/// and [`Record::delete`] work without repeating the resource name.
#[derive(Clone, Debug)]
pub struct Record {
    data: Map<String, Value>,
    resource: Resource,
}

impl Record {
    pub(crate) const fn new(data: Map<String, Value>, resource: Resource) -> Self {
        Self { data, resource }
    }

    /// Returns a field value, if present.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }

    /// Returns a field as a string slice, if present and a string.
    #[must_use]
    pub fn as_str(&self, field: &str) -> Option<&str> {
        self.data.get(field).and_then(Value::as_str)
    }

    /// Returns the record's `id` field.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.as_str("id")
    }

    /// Returns the name of the resource this record belongs to.
    #[must_use]
    pub fn resource_name(&self) -> &str {
        self.resource.name()
    }

    /// Returns the record's fields.
    #[must_use]
    pub const fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Consumes the record, returning its fields.
    #[must_use]
    pub fn into_data(self) -> Map<String, Value> {
        self.data
    }

    /// Updates this record with the given fields.
    ///
    /// The record's own `updated_at` satisfies Ghost's collision check,
    /// so no extra fetch is needed.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingRecordId`] if the record carries
    /// no `id`, or any error from the underlying update.
    pub async fn update(&self, data: Value) -> Result<Self, ResourceError> {
        let id = self
            .id()
            .ok_or(ResourceError::MissingRecordId { operation: "update" })?;
        self.resource.update(id, data, Some(self)).await
    }

    /// Deletes this record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingRecordId`] if the record carries
    /// no `id`, or any error from the underlying delete.
    pub async fn delete(&self) -> Result<(), ResourceError> {
        let id = self
            .id()
            .ok_or(ResourceError::MissingRecordId { operation: "delete" })?;
        self.resource.delete(id).await
    }

    /// Content digest over the record's fields.
    ///
    /// Fields are kept in a sorted map, so serialization is canonical
    /// and the digest is order-insensitive.
    fn digest(&self) -> [u8; 32] {
        let canonical = serde_json::to_vec(&self.data).unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(&canonical);
        hasher.finalize().into()
    }
}

/// Records compare by content, not identity.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.digest() == other.digest()
    }
}

impl Index<&str> for Record {
    type Output = Value;

    /// Returns the field value, or JSON `null` if absent.
    fn index(&self, field: &str) -> &Value {
        self.data.get(field).unwrap_or(&NULL)
    }
}

/// Pagination metadata as reported under `meta.pagination`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Pagination {
    /// The current page number.
    pub page: Option<u32>,
    /// The page size the server applied.
    pub limit: Option<PageLimit>,
    /// The total number of pages.
    pub pages: Option<u32>,
    /// The total number of matching records.
    pub total: Option<u64>,
    /// The next page number, if any.
    pub next: Option<u32>,
    /// The previous page number, if any.
    pub prev: Option<u32>,
}

/// The request that produced a result set, retained for [`RecordSet::next`].
#[derive(Clone, Debug)]
pub(crate) struct RequestState {
    pub(crate) path: String,
    pub(crate) params: Vec<(String, String)>,
}

/// One page of records plus the means to fetch the next.
#[derive(Clone, Debug)]
pub struct RecordSet {
    items: Vec<Record>,
    resource: Resource,
    meta: Option<Pagination>,
    request: Option<RequestState>,
}

impl RecordSet {
    pub(crate) const fn new(
        items: Vec<Record>,
        resource: Resource,
        meta: Option<Pagination>,
        request: Option<RequestState>,
    ) -> Self {
        Self {
            items,
            resource,
            meta,
            request,
        }
    }

    pub(crate) const fn empty(resource: Resource) -> Self {
        Self::new(Vec::new(), resource, None, None)
    }

    /// Returns the number of records in this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if this page holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the first record, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Record> {
        self.items.first()
    }

    /// Iterates over the records in this page.
    pub fn iter(&self) -> slice::Iter<'_, Record> {
        self.items.iter()
    }

    /// Returns the pagination metadata, if the response carried any.
    #[must_use]
    pub const fn meta(&self) -> Option<&Pagination> {
        self.meta.as_ref()
    }

    /// Returns the name of the resource this set was fetched from.
    #[must_use]
    pub fn resource_name(&self) -> &str {
        self.resource.name()
    }

    /// Fetches the next page.
    ///
    /// If the metadata reports no next page, an empty set is returned
    /// without a request. Otherwise the retained request is re-issued
    /// with the next page number, pinning the page size the server
    /// reported so the page boundaries stay aligned.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying fetch.
    pub async fn next(&self) -> Result<Self, ResourceError> {
        let Some(next_page) = self.meta.as_ref().and_then(|meta| meta.next) else {
            return Ok(Self::empty(self.resource.clone()));
        };
        let Some(request) = &self.request else {
            return Ok(Self::empty(self.resource.clone()));
        };

        let pinned_limit = self.meta.as_ref().and_then(|meta| meta.limit);
        let mut params: Vec<(String, String)> = request
            .params
            .iter()
            .filter(|(key, _)| key != "page" && (pinned_limit.is_none() || key != "limit"))
            .cloned()
            .collect();
        params.push(("page".to_string(), next_page.to_string()));
        if let Some(limit) = pinned_limit {
            params.push(("limit".to_string(), limit.to_string()));
        }

        self.resource.fetch_set(&request.path, params).await
    }

    /// Deletes every record in this page, returning the count deleted.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered; earlier deletes are not
    /// rolled back.
    pub async fn delete_all(&self) -> Result<usize, ResourceError> {
        for record in &self.items {
            record.delete().await?;
        }
        Ok(self.items.len())
    }

    /// Updates every record in this page with the same fields.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered; earlier updates are not
    /// rolled back.
    pub async fn update_all(&self, data: &Value) -> Result<Vec<Record>, ResourceError> {
        let mut updated = Vec::with_capacity(self.items.len());
        for record in &self.items {
            updated.push(record.update(data.clone()).await?);
        }
        Ok(updated)
    }

    /// Combines two result sets over the same resource.
    ///
    /// The right set's records are appended after the left's. Records in
    /// both sets appear twice; the left set's metadata and retained
    /// request win.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ResourceMismatch`] if the sets cover
    /// different resources.
    pub fn union(self, other: Self) -> Result<Self, ResourceError> {
        if self.resource.name() != other.resource.name() {
            return Err(ResourceError::ResourceMismatch {
                left: self.resource.name().to_string(),
                right: other.resource.name().to_string(),
            });
        }
        let mut items = self.items;
        items.extend(other.items);
        Ok(Self {
            items,
            resource: self.resource,
            meta: self.meta,
            request: self.request,
        })
    }
}

impl Index<usize> for RecordSet {
    type Output = Record;

    fn index(&self, index: usize) -> &Record {
        &self.items[index]
    }
}

impl IntoIterator for RecordSet {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
