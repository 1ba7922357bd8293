//! Plain data structures for the sample catalog. Nothing here knows about HAL;
//! the [`views`](crate::views) module exposes these models as resources.

pub mod order;
pub mod product;
pub mod user;

pub use order::*;
pub use product::*;
pub use user::*;
