//! # Mock Resources & Testing Guide
//!
//! [`MockResource`] is an in-memory attribute resolver. It implements
//! [`Resource`] over a plain field → value map, so renderer behavior can be
//! tested without any model types or URL producers.
//!
//! ## When to use Mocks vs Real Views
//!
//! | Feature | MockResource | Application view |
//! |---------|--------------|------------------|
//! | **Setup** | One line per field | Model + URL producer |
//! | **Determinism** | Values are fixed | Depends on the model |
//! | **Tracking** | Records every resolved field | None |
//! | **Use Case** | Renderer and descriptor tests | End-to-end output tests |
//!
//! ## Example
//!
//! ```rust
//! use hal_framework::mock::MockResource;
//! use hal_framework::{render, FieldDescriptor, ResourceType};
//!
//! let author = ResourceType::new(
//!     "Author",
//!     [FieldDescriptor::identity("self"), FieldDescriptor::plain("name")],
//! )
//! .unwrap();
//! let book = ResourceType::new(
//!     "Book",
//!     [FieldDescriptor::identity("self"), FieldDescriptor::embedded("author")],
//! )
//! .unwrap();
//!
//! let tolkien = MockResource::new(&author)
//!     .with("self", "/authors/1")
//!     .with("name", "J. R. R. Tolkien");
//! let hobbit = MockResource::new(&book)
//!     .with("self", "/books/1")
//!     .with_nested("author", &tolkien);
//!
//! let document = render(&hobbit);
//! assert_eq!(document.link("author").unwrap().href(), Some("/authors/1"));
//!
//! // Every supplied value was asked for.
//! hobbit.verify();
//! tolkien.verify();
//! ```

use crate::resource::{RawValue, Resource, ResourceType};
use indexmap::IndexMap;
use std::sync::Mutex;

/// An in-memory [`Resource`] with resolution tracking.
pub struct MockResource<'t> {
    resource_type: &'t ResourceType,
    values: IndexMap<String, RawValue<'t>>,
    resolved: Mutex<Vec<String>>,
}

impl<'t> MockResource<'t> {
    pub fn new(resource_type: &'t ResourceType) -> Self {
        Self {
            resource_type,
            values: IndexMap::new(),
            resolved: Mutex::new(Vec::new()),
        }
    }

    /// Supplies the raw value of `field`. Fields never supplied resolve to null.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<RawValue<'t>>) -> Self {
        self.values.insert(field.into(), value.into());
        self
    }

    /// Supplies a child resource the renderer should render itself.
    pub fn with_nested(self, field: impl Into<String>, child: &'t dyn Resource) -> Self {
        self.with(field, RawValue::Nested(child))
    }

    pub fn with_nested_many(
        self,
        field: impl Into<String>,
        children: impl IntoIterator<Item = &'t dyn Resource>,
    ) -> Self {
        self.with(field, RawValue::nested_many(children))
    }

    /// Field names resolved so far, in call order.
    pub fn resolved_fields(&self) -> Vec<String> {
        self.resolved
            .lock()
            .map(|resolved| resolved.clone())
            .unwrap_or_default()
    }

    /// Panics unless every supplied value has been resolved at least once.
    pub fn verify(&self) {
        let resolved = self.resolved_fields();
        let unused: Vec<&str> = self
            .values
            .keys()
            .filter(|field| !resolved.contains(field))
            .map(String::as_str)
            .collect();
        assert!(
            unused.is_empty(),
            "{}: supplied values never resolved: {:?}",
            self.resource_type.name(),
            unused
        );
    }
}

impl Resource for MockResource<'_> {
    fn resource_type(&self) -> &ResourceType {
        self.resource_type
    }

    fn resolve(&self, field: &str) -> RawValue<'_> {
        if let Ok(mut resolved) = self.resolved.lock() {
            resolved.push(field.to_string());
        }
        self.values.get(field).cloned().unwrap_or(RawValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldDescriptor;

    #[test]
    fn test_unsupplied_fields_resolve_to_null() {
        let ty = ResourceType::new("T", [FieldDescriptor::plain("a")]).unwrap();
        let mock = MockResource::new(&ty);
        assert!(mock.resolve("a").is_null());
        assert_eq!(mock.resolved_fields(), vec!["a"]);
    }

    #[test]
    #[should_panic(expected = "never resolved")]
    fn test_verify_reports_unused_values() {
        let ty = ResourceType::new("T", [FieldDescriptor::plain("a")]).unwrap();
        let mock = MockResource::new(&ty).with("undeclared", 1);
        mock.verify();
    }
}
