//! List query parameters for browse-style requests.
//!
//! This module builds the query string parameters Ghost accepts on list
//! endpoints (`limit`, `page`, `order`, `fields`, `filter`) from typed
//! values.

use crate::rest::filter::{Filters, ListStyle};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A page size: a count, or `all` to disable pagination.
///
/// Ghost reports the limit back in pagination metadata using the same
/// two shapes, so this type serializes as either a number or the string
/// `"all"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageLimit {
    /// Fetch at most this many records per page.
    Count(u32),
    /// Fetch every record in one response.
    All,
}

impl fmt::Display for PageLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(count) => write!(f, "{count}"),
            Self::All => write!(f, "all"),
        }
    }
}

impl From<u32> for PageLimit {
    fn from(count: u32) -> Self {
        Self::Count(count)
    }
}

impl Serialize for PageLimit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Count(count) => serializer.serialize_u32(*count),
            Self::All => serializer.serialize_str("all"),
        }
    }
}

impl<'de> Deserialize<'de> for PageLimit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LimitVisitor;

        impl Visitor<'_> for LimitVisitor {
            type Value = PageLimit;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a page count or the string \"all\"")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<PageLimit, E> {
                u32::try_from(value)
                    .map(PageLimit::Count)
                    .map_err(|_| E::custom("page limit out of range"))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<PageLimit, E> {
                u32::try_from(value)
                    .map(PageLimit::Count)
                    .map_err(|_| E::custom("page limit out of range"))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<PageLimit, E> {
                if value == "all" {
                    Ok(PageLimit::All)
                } else {
                    value
                        .parse()
                        .map(PageLimit::Count)
                        .map_err(|_| E::custom(format!("invalid page limit '{value}'")))
                }
            }
        }

        deserializer.deserialize_any(LimitVisitor)
    }
}

/// Typed parameters for a list request.
///
/// # Example
///
/// ```rust
/// use ghost_api::rest::{Filters, ListQuery, PageLimit};
///
/// let query = ListQuery::new()
///     .limit(PageLimit::Count(15))
///     .order("published_at desc")
///     .filters(Filters::new().with("status", "published"));
///
/// let params = query.to_params();
/// assert!(params.contains(&("limit".to_string(), "15".to_string())));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListQuery {
    limit: Option<PageLimit>,
    page: Option<u32>,
    order: Option<String>,
    fields: Option<Vec<String>>,
    filters: Option<Filters>,
}

impl ListQuery {
    /// Creates an empty query.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            limit: None,
            page: None,
            order: None,
            fields: None,
            filters: None,
        }
    }

    /// Sets the page size.
    #[must_use]
    pub const fn limit(mut self, limit: PageLimit) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the page number (1-based).
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the sort order, e.g. `published_at desc`.
    #[must_use]
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// Narrows the response to the named fields.
    #[must_use]
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the filter expression.
    #[must_use]
    pub fn filters(mut self, filters: Filters) -> Self {
        self.filters = Some(filters);
        self
    }

    pub(crate) fn fields_value(&self) -> Option<&[String]> {
        self.fields.as_deref()
    }

    pub(crate) fn set_fields(&mut self, fields: Vec<String>) {
        self.fields = Some(fields);
    }

    /// Renders the query as request parameters.
    ///
    /// Field lists join bare (`fields=id,title`); filter lists wrap in
    /// square brackets (`filter=tag:[news,tech]`).
    #[must_use]
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page".to_string(), page.to_string()));
        }
        if let Some(order) = &self.order {
            params.push(("order".to_string(), order.clone()));
        }
        if let Some(fields) = &self.fields {
            params.push(("fields".to_string(), ListStyle::None.join(fields)));
        }
        if let Some(filters) = &self.filters {
            if !filters.is_empty() {
                params.push(("filter".to_string(), filters.translate(ListStyle::Square)));
            }
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_limit_displays_count_and_all() {
        assert_eq!(PageLimit::Count(15).to_string(), "15");
        assert_eq!(PageLimit::All.to_string(), "all");
    }

    #[test]
    fn test_page_limit_deserializes_number_and_string() {
        let count: PageLimit = serde_json::from_str("15").unwrap();
        assert_eq!(count, PageLimit::Count(15));

        let all: PageLimit = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(all, PageLimit::All);

        let numeric_string: PageLimit = serde_json::from_str("\"25\"").unwrap();
        assert_eq!(numeric_string, PageLimit::Count(25));
    }

    #[test]
    fn test_page_limit_serializes_round_trip() {
        assert_eq!(serde_json::to_string(&PageLimit::Count(5)).unwrap(), "5");
        assert_eq!(serde_json::to_string(&PageLimit::All).unwrap(), "\"all\"");
    }

    #[test]
    fn test_to_params_includes_set_values_only() {
        let query = ListQuery::new()
            .limit(PageLimit::All)
            .order("published_at desc");
        let params = query.to_params();
        assert_eq!(
            params,
            vec![
                ("limit".to_string(), "all".to_string()),
                ("order".to_string(), "published_at desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_fields_join_without_brackets() {
        let query = ListQuery::new().fields(["id", "title"]);
        let params = query.to_params();
        assert!(params.contains(&("fields".to_string(), "id,title".to_string())));
    }

    #[test]
    fn test_filters_render_into_filter_param() {
        let query = ListQuery::new().filters(
            crate::rest::Filters::new()
                .with("status", "published")
                .with("tag", vec!["news", "tech"]),
        );
        let params = query.to_params();
        assert!(params.contains(&(
            "filter".to_string(),
            "status:published+tag:[news,tech]".to_string()
        )));
    }

    #[test]
    fn test_empty_filters_are_omitted() {
        let query = ListQuery::new().filters(crate::rest::Filters::new());
        assert!(query.to_params().is_empty());
    }
}
