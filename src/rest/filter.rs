//! Filter expression translation for Ghost's query language.
//!
//! Ghost filters list requests with NQL-style expressions like
//! `status:published+tag:[news,tech]`. This module builds those
//! expressions from structured values so callers never concatenate
//! filter strings by hand.
//!
//! # Example
//!
//! ```rust
//! use ghost_api::rest::{Filters, FilterValue, ListStyle};
//!
//! let filters = Filters::new()
//!     .with("status", "published")
//!     .with("tag", vec!["news", "tech"]);
//!
//! assert_eq!(filters.translate(ListStyle::Square), "status:published+tag:[news,tech]");
//! ```

/// How list values are wrapped when rendered into a parameter.
///
/// Filter values wrap lists in square brackets; `fields` and `formats`
/// parameters join values bare.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListStyle {
    /// Comma-join with no wrapping: `a,b,c`.
    None,
    /// Comma-join wrapped in square brackets: `[a,b,c]`.
    #[default]
    Square,
    /// Comma-join wrapped in parentheses: `(a,b,c)`.
    Round,
}

impl ListStyle {
    /// Joins values with commas and applies this style's wrapping.
    #[must_use]
    pub fn join(self, values: &[String]) -> String {
        let joined = values.join(",");
        match self {
            Self::None => joined,
            Self::Square => format!("[{joined}]"),
            Self::Round => format!("({joined})"),
        }
    }
}

/// A single filter value: a scalar, a list of alternatives, or a group
/// of filters on a related resource.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterValue {
    /// A single value, rendered as `key:value`.
    Scalar(String),
    /// A list of alternatives, rendered as `key:[a,b]`.
    List(Vec<String>),
    /// Filters on a related resource, rendered with dotted keys
    /// (`authors.slug:joe`).
    Group(Filters),
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<Vec<&str>> for FilterValue {
    fn from(values: Vec<&str>) -> Self {
        Self::List(values.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl From<Filters> for FilterValue {
    fn from(filters: Filters) -> Self {
        Self::Group(filters)
    }
}

/// An ordered collection of filter fragments.
///
/// Insertion order is preserved so translated expressions are
/// reproducible.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filters(Vec<(String, FilterValue)>);

impl Filters {
    /// Creates an empty filter collection.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds a filter fragment, builder style.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds a filter fragment in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FilterValue>) {
        self.0.push((key.into(), value.into()));
    }

    /// Returns the value for a key, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Returns `true` if no fragments have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders the filters into a Ghost filter expression.
    ///
    /// Fragments are joined with `+` (logical AND). Group values flatten
    /// into dotted keys on the parent resource.
    #[must_use]
    pub fn translate(&self, style: ListStyle) -> String {
        let mut fragments = Vec::new();
        self.collect_fragments(None, style, &mut fragments);
        fragments.join("+")
    }

    fn collect_fragments(&self, prefix: Option<&str>, style: ListStyle, out: &mut Vec<String>) {
        for (key, value) in &self.0 {
            let full_key = match prefix {
                Some(prefix) => format!("{prefix}.{key}"),
                None => key.clone(),
            };
            match value {
                FilterValue::Scalar(scalar) => out.push(format!("{full_key}:{scalar}")),
                FilterValue::List(list) => out.push(format!("{full_key}:{}", style.join(list))),
                FilterValue::Group(group) => group.collect_fragments(Some(&full_key), style, out),
            }
        }
    }
}
