//! # Collection Envelopes
//!
//! [`wrap`] turns an ordered list of item documents into a list-level HAL
//! document:
//!
//! ```json
//! {
//!   "_links": {
//!     "self": { "href": "/users?page=2" },
//!     "next": { "href": "/users?page=3" },
//!     "previous": { "href": "/users" },
//!     "page": { "href": "/users{?page}", "templated": true }
//!   },
//!   "_embedded": { "items": [ ... ] },
//!   "count": 50,
//!   "page_size": 10
//! }
//! ```
//!
//! Absent cursors omit their key; a null href is never emitted. Cursor
//! pagination has neither a stable page index nor a total, so it never gets a
//! `page` link or counters.

use crate::config::HalConfig;
use crate::document::{Document, EmbeddedEntry};
use crate::link::{LinkEntry, LinkObject};
use crate::query::template_query_param;
use serde_json::Value;
use tracing::debug;

/// Link key of the next window.
pub const NEXT_LINK: &str = "next";
/// Link key of the previous window.
pub const PREVIOUS_LINK: &str = "previous";
/// Link key of the templated page link.
pub const PAGE_LINK: &str = "page";

/// How a collection was windowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginationStrategy {
    /// `?page=n`; `page_query_param` is templated in the `page` link.
    PageNumber { page_query_param: String },
    /// `?limit=n&offset=m`; `offset_query_param` is templated in the `page` link.
    LimitOffset { offset_query_param: String },
    /// Opaque cursors.
    Cursor,
}

impl PaginationStrategy {
    /// The query parameter a client substitutes to jump to another window.
    pub fn templated_param(&self) -> Option<&str> {
        match self {
            PaginationStrategy::PageNumber { page_query_param } => Some(page_query_param),
            PaginationStrategy::LimitOffset { offset_query_param } => Some(offset_query_param),
            PaginationStrategy::Cursor => None,
        }
    }
}

/// Pagination metadata for one window of a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    pub strategy: PaginationStrategy,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub count: Option<u64>,
    pub page_size: Option<u64>,
}

impl PaginationInfo {
    pub fn new(strategy: PaginationStrategy) -> Self {
        Self {
            strategy,
            next: None,
            previous: None,
            count: None,
            page_size: None,
        }
    }

    pub fn page_number(page_query_param: impl Into<String>) -> Self {
        Self::new(PaginationStrategy::PageNumber {
            page_query_param: page_query_param.into(),
        })
    }

    pub fn limit_offset(offset_query_param: impl Into<String>) -> Self {
        Self::new(PaginationStrategy::LimitOffset {
            offset_query_param: offset_query_param.into(),
        })
    }

    pub fn cursor() -> Self {
        Self::new(PaginationStrategy::Cursor)
    }

    pub fn with_next(mut self, next: Option<String>) -> Self {
        self.next = next;
        self
    }

    pub fn with_previous(mut self, previous: Option<String>) -> Self {
        self.previous = previous;
        self
    }

    pub fn with_count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

/// Wraps `items` using the default configuration.
///
/// ```rust
/// use hal_framework::{wrap, Document, PaginationInfo};
///
/// let items = vec![Document::with_self("/users/1")];
/// let info = PaginationInfo::cursor().with_next(Some("/users?cursor=abc".into()));
/// let envelope = wrap(items, "/users", Some(&info));
///
/// assert_eq!(envelope.href_of("next"), Some("/users?cursor=abc"));
/// assert!(envelope.link("previous").is_none());
/// assert!(envelope.attribute("count").is_none());
/// ```
pub fn wrap(items: Vec<Document>, self_url: &str, pagination: Option<&PaginationInfo>) -> Document {
    wrap_with(&HalConfig::default(), items, self_url, pagination)
}

/// Wraps `items` into a collection envelope.
pub fn wrap_with(
    config: &HalConfig,
    items: Vec<Document>,
    self_url: &str,
    pagination: Option<&PaginationInfo>,
) -> Document {
    let mut envelope = Document::new();
    envelope.links.insert(
        config.url_field_name.clone(),
        LinkEntry::Object(LinkObject::new(self_url)),
    );

    if let Some(info) = pagination {
        if let Some(next) = &info.next {
            envelope
                .links
                .insert(NEXT_LINK.to_string(), LinkEntry::Object(LinkObject::new(next)));
        }
        if let Some(previous) = &info.previous {
            envelope.links.insert(
                PREVIOUS_LINK.to_string(),
                LinkEntry::Object(LinkObject::new(previous)),
            );
        }
        if let Some(param) = info.strategy.templated_param() {
            let href = template_query_param(self_url, param);
            envelope.links.insert(
                PAGE_LINK.to_string(),
                LinkEntry::Object(LinkObject::new(href).with_templated(true)),
            );
        }
        if info.strategy != PaginationStrategy::Cursor {
            if let Some(count) = info.count {
                envelope.attributes.insert("count".to_string(), Value::from(count));
            }
            if let Some(page_size) = info.page_size {
                envelope
                    .attributes
                    .insert("page_size".to_string(), Value::from(page_size));
            }
        }
    }

    debug!(
        self_url,
        items = items.len(),
        paginated = pagination.is_some(),
        "Wrapped collection"
    );
    envelope
        .embedded
        .insert(config.items_field_name.clone(), EmbeddedEntry::Many(items));
    envelope
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpaginated_envelope_has_only_self_and_items() {
        let envelope = wrap(vec![], "/things", None);

        assert_eq!(envelope.self_href(), Some("/things"));
        assert_eq!(envelope.links.len(), 1);
        assert!(envelope.attributes.is_empty());
        assert_eq!(
            envelope.embedded("items").and_then(EmbeddedEntry::as_documents),
            Some(&[][..])
        );
    }

    #[test]
    fn test_cursor_ignores_counters_even_when_given() {
        let info = PaginationInfo::cursor().with_count(3).with_page_size(1);
        let envelope = wrap(vec![], "/things", Some(&info));
        assert!(envelope.attributes.is_empty());
        assert!(envelope.link(PAGE_LINK).is_none());
    }

    #[test]
    fn test_limit_offset_templates_the_offset() {
        let info = PaginationInfo::limit_offset("offset").with_count(30);
        let envelope = wrap(vec![], "/things?limit=10&offset=10", Some(&info));

        let page = envelope.link(PAGE_LINK).and_then(LinkEntry::as_object).unwrap();
        assert_eq!(page.href(), "/things?limit=10{&offset}");
        assert!(page.is_templated());
        assert_eq!(envelope.attribute("count"), Some(&Value::from(30)));
        assert!(envelope.attribute("page_size").is_none());
    }

    #[test]
    fn test_configured_key_names_are_used() {
        let config = HalConfig {
            url_field_name: "canonical".into(),
            items_field_name: "results".into(),
            ..HalConfig::default()
        };
        let envelope = wrap_with(&config, vec![Document::new()], "/r", None);
        assert_eq!(envelope.href_of("canonical"), Some("/r"));
        assert!(envelope.embedded("results").is_some());
    }

    #[test]
    fn test_items_keep_their_order() {
        let items = vec![
            Document::with_self("/b"),
            Document::with_self("/a"),
            Document::with_self("/c"),
        ];
        let envelope = wrap(items, "/x", None);
        let hrefs: Vec<_> = envelope
            .embedded("items")
            .and_then(EmbeddedEntry::as_documents)
            .unwrap()
            .iter()
            .map(|item| item.self_href().unwrap())
            .collect();
        assert_eq!(hrefs, vec!["/b", "/a", "/c"]);
    }
}
