//! # Resources & Resource Types
//!
//! A [`ResourceType`] is the registered, validated manifest of one kind of
//! resource: its name, its [`FieldDescriptor`]s and their precomputed
//! [`Classification`]. It is built once at startup and shared by reference into
//! every render call; it is never mutated afterwards.
//!
//! A [`Resource`] is one instance of a resource type. It is the boundary to the
//! attribute resolver: the renderer asks it for one [`RawValue`] per declared
//! field and never looks at the underlying model itself.
//!
//! # Registration
//!
//! Every configuration error is caught by [`ResourceTypeBuilder::build`]:
//!
//! ```rust
//! use hal_framework::{ConfigError, FieldDescriptor, ResourceType};
//!
//! let result = ResourceType::builder("Order")
//!     .field(FieldDescriptor::plain("status"))
//!     .field(FieldDescriptor::contribution("status_title", "customer"))
//!     .build();
//!
//! assert!(matches!(result, Err(ConfigError::UnknownContributionTarget { .. })));
//! ```

use crate::classify::{classify, Classification};
use crate::document::{Document, EMBEDDED_FIELD_NAME, LINKS_FIELD_NAME};
use crate::error::ConfigError;
use crate::field::{FieldDescriptor, FieldKind, LinkSource};
use crate::link::{LinkObject, HREF};
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::{debug, warn};

/// The registered manifest of a resource type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceType {
    name: String,
    fields: Vec<FieldDescriptor>,
    classification: Classification,
}

impl ResourceType {
    pub fn builder(name: impl Into<String>) -> ResourceTypeBuilder {
        ResourceTypeBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Validates `fields` and registers them under `name`.
    pub fn new(
        name: impl Into<String>,
        fields: impl IntoIterator<Item = FieldDescriptor>,
    ) -> Result<Self, ConfigError> {
        Self::builder(name).fields(fields).build()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared fields, in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    /// The first field declared as the resource's own URL.
    pub fn identity_field(&self) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.kind == FieldKind::Link(LinkSource::Identity))
            .map(|field| field.name.as_str())
    }
}

/// Collects field descriptors for a [`ResourceType`].
#[derive(Debug, Clone)]
pub struct ResourceTypeBuilder {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl ResourceTypeBuilder {
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = FieldDescriptor>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Validates the descriptors and computes the classification.
    pub fn build(self) -> Result<ResourceType, ConfigError> {
        match validate(&self.name, &self.fields) {
            Ok(()) => {
                let classification = classify(&self.fields);
                debug!(
                    resource = %self.name,
                    fields = self.fields.len(),
                    links = classification.link_fields.len(),
                    embedded = classification.embedded_fields.len(),
                    "Resource type registered"
                );
                Ok(ResourceType {
                    name: self.name,
                    fields: self.fields,
                    classification,
                })
            }
            Err(e) => {
                warn!(resource = %self.name, error = %e, "Resource type rejected");
                Err(e)
            }
        }
    }
}

fn validate(resource: &str, fields: &[FieldDescriptor]) -> Result<(), ConfigError> {
    let mut kinds: HashMap<&str, &FieldKind> = HashMap::with_capacity(fields.len());

    for field in fields {
        let name = field.name.as_str();
        if name.is_empty() {
            return Err(ConfigError::EmptyFieldName {
                resource: resource.to_string(),
            });
        }
        if name == LINKS_FIELD_NAME || name == EMBEDDED_FIELD_NAME {
            return Err(ConfigError::ReservedFieldName {
                resource: resource.to_string(),
                field: name.to_string(),
            });
        }
        if let Some(previous) = kinds.insert(name, &field.kind) {
            let conflicting = (previous.is_link() && field.kind.is_embedded())
                || (previous.is_embedded() && field.kind.is_link());
            return Err(if conflicting {
                ConfigError::ConflictingKinds {
                    resource: resource.to_string(),
                    field: name.to_string(),
                }
            } else {
                ConfigError::DuplicateField {
                    resource: resource.to_string(),
                    field: name.to_string(),
                }
            });
        }
    }

    let mut contributed: HashSet<(&str, &str)> = HashSet::new();
    for field in fields {
        let FieldKind::Contribution {
            target_field,
            property_name,
        } = &field.kind
        else {
            continue;
        };

        match kinds.get(target_field.as_str()) {
            None => {
                return Err(ConfigError::UnknownContributionTarget {
                    resource: resource.to_string(),
                    field: field.name.clone(),
                    target: target_field.clone(),
                })
            }
            Some(kind) if !kind.is_link() => {
                return Err(ConfigError::ContributionTargetNotLink {
                    resource: resource.to_string(),
                    field: field.name.clone(),
                    target: target_field.clone(),
                })
            }
            Some(_) => {}
        }

        if property_name == HREF {
            return Err(ConfigError::ReservedLinkProperty {
                resource: resource.to_string(),
                field: field.name.clone(),
                target: target_field.clone(),
            });
        }

        if !contributed.insert((target_field.as_str(), property_name.as_str())) {
            return Err(ConfigError::DuplicateContribution {
                resource: resource.to_string(),
                target: target_field.clone(),
                property: property_name.clone(),
            });
        }
    }

    Ok(())
}

/// An instance of a registered resource type.
///
/// Implementations are thin views over a model: they know their
/// [`ResourceType`] and hand out one raw value per field name. Related
/// resources may be returned as [`RawValue::Nested`] so the renderer drives the
/// recursion (and its depth limit), or as pre-rendered [`Document`]s.
pub trait Resource {
    fn resource_type(&self) -> &ResourceType;

    /// Returns the raw value of `field`. Unknown fields should yield
    /// [`RawValue::Null`].
    fn resolve(&self, field: &str) -> RawValue<'_>;
}

/// A pre-resolved, flat attribute map.
pub type Attributes<'a> = IndexMap<String, RawValue<'a>>;

/// The value an attribute resolver produced for one field.
#[derive(Clone)]
pub enum RawValue<'a> {
    Null,
    /// A plain JSON value: a scalar, an array, or an object.
    Value(Value),
    /// An already-built link object.
    Link(LinkObject),
    List(Vec<RawValue<'a>>),
    /// A child rendered ahead of time by the caller.
    Document(Document),
    Documents(Vec<Document>),
    /// A child the renderer should render itself.
    Nested(&'a dyn Resource),
    NestedMany(Vec<&'a dyn Resource>),
}

impl<'a> RawValue<'a> {
    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null | RawValue::Value(Value::Null))
    }

    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<RawValue<'a>>,
    {
        RawValue::List(items.into_iter().map(Into::into).collect())
    }

    pub fn nested_many<I>(resources: I) -> Self
    where
        I: IntoIterator<Item = &'a dyn Resource>,
    {
        RawValue::NestedMany(resources.into_iter().collect())
    }
}

impl fmt::Debug for RawValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Null => f.write_str("Null"),
            RawValue::Value(value) => f.debug_tuple("Value").field(value).finish(),
            RawValue::Link(link) => f.debug_tuple("Link").field(link).finish(),
            RawValue::List(items) => f.debug_tuple("List").field(items).finish(),
            RawValue::Document(document) => f.debug_tuple("Document").field(document).finish(),
            RawValue::Documents(documents) => {
                f.debug_tuple("Documents").field(documents).finish()
            }
            RawValue::Nested(resource) => f
                .debug_tuple("Nested")
                .field(&resource.resource_type().name())
                .finish(),
            RawValue::NestedMany(resources) => f
                .debug_tuple("NestedMany")
                .field(&resources.len())
                .finish(),
        }
    }
}

impl From<Value> for RawValue<'_> {
    fn from(value: Value) -> Self {
        RawValue::Value(value)
    }
}

impl From<&str> for RawValue<'_> {
    fn from(value: &str) -> Self {
        RawValue::Value(Value::String(value.to_string()))
    }
}

impl From<String> for RawValue<'_> {
    fn from(value: String) -> Self {
        RawValue::Value(Value::String(value))
    }
}

impl From<bool> for RawValue<'_> {
    fn from(value: bool) -> Self {
        RawValue::Value(Value::Bool(value))
    }
}

macro_rules! raw_value_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RawValue<'_> {
                fn from(value: $ty) -> Self {
                    RawValue::Value(Value::from(value))
                }
            }
        )*
    };
}

raw_value_from_number!(i32, i64, u32, u64, usize, f64);

impl From<LinkObject> for RawValue<'_> {
    fn from(link: LinkObject) -> Self {
        RawValue::Link(link)
    }
}

impl From<Document> for RawValue<'_> {
    fn from(document: Document) -> Self {
        RawValue::Document(document)
    }
}

impl From<Vec<Document>> for RawValue<'_> {
    fn from(documents: Vec<Document>) -> Self {
        RawValue::Documents(documents)
    }
}

impl<'a, T: Into<RawValue<'a>>> From<Option<T>> for RawValue<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(fields: Vec<FieldDescriptor>) -> Result<ResourceType, ConfigError> {
        ResourceType::new("Test", fields)
    }

    #[test]
    fn test_valid_registration_precomputes_classification() {
        let ty = register(vec![
            FieldDescriptor::identity("self"),
            FieldDescriptor::contribution("name", "self"),
            FieldDescriptor::plain("id"),
        ])
        .unwrap();

        assert_eq!(ty.name(), "Test");
        assert_eq!(ty.identity_field(), Some("self"));
        assert_eq!(ty.classification().link_fields, vec!["self"]);
        assert_eq!(ty.classification().contributions.len(), 1);
    }

    #[test]
    fn test_duplicate_field_is_rejected() {
        let result = register(vec![FieldDescriptor::plain("id"), FieldDescriptor::plain("id")]);
        assert!(matches!(result, Err(ConfigError::DuplicateField { field, .. }) if field == "id"));
    }

    #[test]
    fn test_link_and_embedded_on_one_name_conflict() {
        let result = register(vec![
            FieldDescriptor::embedded("owner"),
            FieldDescriptor::link("owner", LinkSource::Reference),
        ]);
        assert!(matches!(result, Err(ConfigError::ConflictingKinds { .. })));
    }

    #[test]
    fn test_reserved_names_are_rejected() {
        for reserved in [LINKS_FIELD_NAME, EMBEDDED_FIELD_NAME] {
            let result = register(vec![FieldDescriptor::plain(reserved)]);
            assert!(matches!(result, Err(ConfigError::ReservedFieldName { .. })));
        }
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let result = register(vec![FieldDescriptor::plain("")]);
        assert!(matches!(result, Err(ConfigError::EmptyFieldName { .. })));
    }

    #[test]
    fn test_contribution_must_target_a_link() {
        let result = register(vec![
            FieldDescriptor::embedded("child"),
            FieldDescriptor::contribution("child_title", "child"),
        ]);
        assert!(matches!(result, Err(ConfigError::ContributionTargetNotLink { .. })));
    }

    #[test]
    fn test_contribution_target_must_exist() {
        let result = register(vec![FieldDescriptor::contribution("title", "self")]);
        assert!(matches!(result, Err(ConfigError::UnknownContributionTarget { .. })));
    }

    #[test]
    fn test_same_property_contributed_twice_is_rejected() {
        let result = register(vec![
            FieldDescriptor::link("file", LinkSource::File),
            FieldDescriptor::contribution("a", "file"),
            FieldDescriptor::contribution("b", "file"),
        ]);
        assert!(matches!(
            result,
            Err(ConfigError::DuplicateContribution { target, property, .. })
                if target == "file" && property == "title"
        ));
    }

    #[test]
    fn test_different_properties_on_one_target_are_fine() {
        let result = register(vec![
            FieldDescriptor::link("file", LinkSource::File),
            FieldDescriptor::contribution("a", "file"),
            FieldDescriptor::contribution("b", "file").with_property("type"),
        ]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_contributing_href_is_rejected() {
        let result = register(vec![
            FieldDescriptor::identity("self"),
            FieldDescriptor::contribution("url", "self").with_property("href"),
        ]);
        assert!(matches!(result, Err(ConfigError::ReservedLinkProperty { .. })));
    }

    #[test]
    fn test_raw_value_from_option() {
        assert!(RawValue::from(None::<&str>).is_null());
        assert!(!RawValue::from(Some("x")).is_null());
    }
}
