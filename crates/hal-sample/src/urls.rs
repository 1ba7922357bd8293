//! # URL Producer
//!
//! Every href in the sample's documents comes from [`Urls`]. The renderer
//! never builds URLs itself; it only copies what the views hand over.

use crate::model::{OrderId, ProductId, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Urls {
    base: String,
}

impl Urls {
    /// `base` is the absolute API root, with or without a trailing slash.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn users(&self) -> String {
        format!("{}/users", self.base)
    }

    pub fn user(&self, id: UserId) -> String {
        format!("{}/users/{}", self.base, id)
    }

    pub fn products(&self) -> String {
        format!("{}/products", self.base)
    }

    pub fn product(&self, id: ProductId) -> String {
        format!("{}/products/{}", self.base, id)
    }

    pub fn product_image(&self, file_name: &str) -> String {
        format!("{}/media/products/{}", self.base, file_name)
    }

    pub fn orders(&self) -> String {
        format!("{}/orders", self.base)
    }

    pub fn order(&self, id: OrderId) -> String {
        format!("{}/orders/{}", self.base, id)
    }

    pub fn invoice(&self, id: OrderId) -> String {
        format!("{}/orders/{}/invoice.pdf", self.base, id)
    }
}

impl Default for Urls {
    fn default() -> Self {
        Self::new("http://localhost:8000/api")
    }
}
