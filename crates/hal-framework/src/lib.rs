//! # HAL Framework
//!
//! This crate renders application resources as **HAL** (Hypertext Application
//! Language, `application/hal+json`) documents. A HAL document is a JSON object
//! with two reserved keys next to the resource's own attributes:
//!
//! - `_links`: link name → link object (`{"href": ...}`) or list of link objects
//! - `_embedded`: relation name → nested HAL document or list of documents
//!
//! ```json
//! {
//!   "_links": {
//!     "self": { "href": "http://api.example.com/orders/7" },
//!     "customer": { "href": "http://api.example.com/users/1", "title": "Alice" },
//!     "product": "http://api.example.com/products/3"
//!   },
//!   "_embedded": {
//!     "product": { "_links": { "self": { "href": "http://api.example.com/products/3" } }, "name": "Widget" }
//!   },
//!   "quantity": 2
//! }
//! ```
//!
//! **Further Reading**:
//! - [JSON Hypertext Application Language](https://datatracker.ietf.org/doc/html/draft-kelly-json-hal) - The HAL draft
//! - [RFC 6570](https://www.rfc-editor.org/rfc/rfc6570) - URI templates used by templated links
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Manifest Layer** ([`FieldDescriptor`], [`ResourceType`]) - What each field of a
//!    resource is: a link, an embedded resource, a contribution to a link, or a plain attribute
//! 2. **Resolution Layer** ([`Resource`], [`RawValue`]) - Your models, exposed as one raw
//!    value per declared field
//! 3. **Rendering Layer** ([`Renderer`], [`wrap`], the paginators) - Builds the HAL shape
//!
//! You declare a resource type **once** at startup. The framework validates it,
//! classifies its fields, and every render call after that only reads the result.
//!
//! ## Core Abstractions
//!
//! ### [`ResourceType`] - The Manifest
//!
//! ```rust
//! use hal_framework::{FieldDescriptor, LinkSource, ResourceType};
//!
//! let order = ResourceType::builder("Order")
//!     .field(FieldDescriptor::identity("self"))
//!     .field(FieldDescriptor::link("customer", LinkSource::Reference))
//!     // Copies the customer's name into `_links.customer.title`
//!     .field(FieldDescriptor::contribution("customer_name", "customer"))
//!     .field(FieldDescriptor::embedded("product"))
//!     .field(FieldDescriptor::plain("quantity"))
//!     .build()
//!     .unwrap();
//!
//! assert!(order.classification().is_link("customer"));
//! assert!(order.classification().is_embedded("product"));
//! ```
//!
//! Misconfigurations (a contribution pointing at a missing or non-link field,
//! a field named `_links`, a name declared twice) are [`ConfigError`]s raised
//! here, never during rendering.
//!
//! ### [`Resource`] - The Attribute Resolver
//!
//! ```rust
//! use hal_framework::{render, FieldDescriptor, RawValue, Resource, ResourceType};
//!
//! struct Tag {
//!     id: u32,
//!     label: String,
//! }
//!
//! struct TagView<'a> {
//!     ty: &'a ResourceType,
//!     tag: &'a Tag,
//! }
//!
//! impl Resource for TagView<'_> {
//!     fn resource_type(&self) -> &ResourceType {
//!         self.ty
//!     }
//!
//!     fn resolve(&self, field: &str) -> RawValue<'_> {
//!         match field {
//!             "self" => format!("/tags/{}", self.tag.id).into(),
//!             "label" => self.tag.label.as_str().into(),
//!             _ => RawValue::Null,
//!         }
//!     }
//! }
//!
//! let ty = ResourceType::new(
//!     "Tag",
//!     [FieldDescriptor::identity("self"), FieldDescriptor::plain("label")],
//! )
//! .unwrap();
//! let tag = Tag { id: 4, label: "rust".into() };
//!
//! let document = render(&TagView { ty: &ty, tag: &tag });
//! assert_eq!(
//!     document.to_value(),
//!     serde_json::json!({
//!         "_links": { "self": { "href": "/tags/4" } },
//!         "_embedded": {},
//!         "label": "rust"
//!     })
//! );
//! ```
//!
//! ### Collections
//!
//! A list endpoint renders each item, then [`wrap`]s them with pagination links
//! produced by [`PageNumberPagination`], [`LimitOffsetPagination`] or
//! [`CursorPagination`].
//!
//! ## Rendering Guarantees
//!
//! - **Always-present sections**: `_links` and `_embedded` are emitted even when empty,
//!   and precede the attributes in the serialized output
//! - **Declaration order**: keys inside each section follow field declaration order
//! - **Null suppression**: a null link is omitted, as is a null contribution
//! - **Idempotent links**: an already-built link object passes through link building unchanged
//! - **Bounded recursion**: nesting deeper than [`HalConfig::max_depth`] degrades to a link
//!
//! ## Concurrency Model
//!
//! - A [`ResourceType`] is immutable after registration and can be shared across threads
//! - A render call owns only the document it builds
//! - Independent resources may be rendered in parallel with no coordination
//!
//! ## Testing
//!
//! The framework provides a **MockResource** type that implements [`Resource`] over an
//! in-memory field map and records which fields the renderer asked for. It lets you test
//! resource types and renderer behavior without writing model views. See the [`mock`]
//! module for the full API.

pub mod classify;
pub mod config;
pub mod document;
pub mod envelope;
pub mod error;
pub mod field;
pub mod link;
pub mod merge;
pub mod mock;
pub mod pagination;
pub mod query;
pub mod render;
pub mod resource;
pub mod tracing;

// Re-export core types for convenience
pub use classify::{classify, Classification, Contribution};
pub use config::{HalConfig, PaginationConfig};
pub use document::{
    Document, EmbeddedEntry, EMBEDDED_FIELD_NAME, HAL_MEDIA_TYPE, LINKS_FIELD_NAME,
    URL_FIELD_NAME,
};
pub use envelope::{wrap, wrap_with, PaginationInfo, PaginationStrategy};
pub use error::{ConfigError, PaginationError};
pub use field::{FieldDescriptor, FieldKind, LinkSource};
pub use link::{build_link, LinkEntry, LinkObject};
pub use pagination::{CursorPagination, LimitOffsetPagination, Page, PageNumberPagination};
pub use render::{render, Renderer};
pub use resource::{Attributes, RawValue, Resource, ResourceType, ResourceTypeBuilder};
