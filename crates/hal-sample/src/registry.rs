//! # Resource Type Registry
//!
//! All resource types of the sample API are declared here, once, at startup.
//! A declaration mistake surfaces as a [`ConfigError`] from [`Registry::new`]
//! before a single request is served.

use hal_framework::{ConfigError, FieldDescriptor, LinkSource, ResourceType};

pub const USER: &str = "User";
pub const PRODUCT: &str = "Product";
pub const ORDER: &str = "Order";

/// The registered resource types. Immutable once built.
#[derive(Debug, Clone)]
pub struct Registry {
    pub user: ResourceType,
    pub product: ResourceType,
    pub order: ResourceType,
}

impl Registry {
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            user: user_type()?,
            product: product_type()?,
            order: order_type()?,
        })
    }
}

fn user_type() -> Result<ResourceType, ConfigError> {
    ResourceType::builder(USER)
        .field(FieldDescriptor::identity("self"))
        .field(FieldDescriptor::plain("name"))
        .field(FieldDescriptor::plain("email"))
        .field(FieldDescriptor::link("orders", LinkSource::ManyReference))
        .build()
}

fn product_type() -> Result<ResourceType, ConfigError> {
    ResourceType::builder(PRODUCT)
        .field(FieldDescriptor::identity("self"))
        .field(FieldDescriptor::link("image", LinkSource::Image))
        .field(FieldDescriptor::plain("name"))
        .field(FieldDescriptor::plain("price"))
        .field(FieldDescriptor::plain("availability"))
        .build()
}

fn order_type() -> Result<ResourceType, ConfigError> {
    ResourceType::builder(ORDER)
        .field(FieldDescriptor::identity("self"))
        .field(FieldDescriptor::link("customer", LinkSource::Reference))
        .field(FieldDescriptor::contribution("customer_name", "customer"))
        .field(FieldDescriptor::link("invoice", LinkSource::File))
        .field(FieldDescriptor::embedded("product"))
        .field(FieldDescriptor::plain("quantity"))
        .field(FieldDescriptor::plain("total"))
        .field(FieldDescriptor::plain("status"))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_builds() {
        let registry = Registry::new().unwrap();
        assert_eq!(registry.order.identity_field(), Some("self"));
        assert!(registry.order.classification().is_embedded("product"));
        assert_eq!(
            registry
                .order
                .classification()
                .contributions_to("customer")
                .map(|c| c.property_name.as_str())
                .collect::<Vec<_>>(),
            vec!["title"]
        );
    }
}
