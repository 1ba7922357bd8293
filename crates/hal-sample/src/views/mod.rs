//! # Resource Views
//!
//! Thin [`Resource`](hal_framework::Resource) implementations over the
//! [`model`](crate::model) types. A view borrows its model, the registered
//! [`ResourceType`](hal_framework::ResourceType) and the [`Urls`](crate::urls::Urls)
//! producer, and answers one field at a time.
//!
//! Related resources that should be embedded are owned by the parent view and
//! handed to the renderer as [`RawValue::Nested`](hal_framework::RawValue::Nested),
//! so nesting depth stays under the renderer's control.

pub mod order;
pub mod product;
pub mod user;

pub use order::OrderView;
pub use product::ProductView;
pub use user::UserView;
