//! # Service Lifecycle
//!
//! [`CatalogApi`] wires the sample together: it registers the resource types
//! once, owns the in-memory store, and answers requests with HAL documents.
//!
//! ## Startup
//!
//! 1. **Registration** - [`Registry::new`](crate::registry::Registry::new) validates every
//!    resource type. A mistake fails startup with [`ApiError::Config`](crate::error::ApiError::Config)
//! 2. **Sharing** - The registry, the renderer and the URL producer are frozen behind an `Arc`
//! 3. **Serving** - Each request takes a short read lock on the store, copies what it needs,
//!    and renders without holding the lock
//!
//! ## Collections
//!
//! List endpoints render their items in parallel, one `spawn_blocking` task per item,
//! then wrap them into an envelope:
//!
//! | Endpoint | Paginator |
//! |----------|-----------|
//! | [`list_users`](CatalogApi::list_users) | page number |
//! | [`list_orders`](CatalogApi::list_orders) | limit / offset |
//! | [`list_products`](CatalogApi::list_products) | cursor |
//!
//! ## Observability
//!
//! Mutating calls and list endpoints carry an `#[instrument]` span. Run the demo with
//! `RUST_LOG=debug` to see one `Rendered` event per resource inside those spans.

pub mod api;

pub use api::*;
