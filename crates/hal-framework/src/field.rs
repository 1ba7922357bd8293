//! # Field Descriptors
//!
//! Every resource type declares its fields once, up front, as a list of
//! [`FieldDescriptor`]s. The [`FieldKind`] tag on each descriptor decides where
//! the field's value ends up in the rendered document:
//!
//! - [`FieldKind::Link`] - under `_links`, normalized to a link object
//! - [`FieldKind::Embedded`] - under `_embedded`, with its self link promoted into `_links`
//! - [`FieldKind::Contribution`] - nowhere under its own name; its value becomes a
//!   property on another field's link object
//! - [`FieldKind::Plain`] - copied verbatim into the top-level attributes
//!
//! The tag is explicit. Nothing is inferred from the runtime shape of a value.

/// Property name used by [`FieldDescriptor::contribution`] when none is given.
pub const DEFAULT_CONTRIBUTED_PROPERTY: &str = "title";

/// Where the href of a link field comes from.
///
/// All sources classify the same way; the tag records what the field *is* so
/// that registries and documentation can tell a self link from a file link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkSource {
    /// A single related resource.
    Reference,
    /// A to-many relation, rendered as a list of link objects.
    ManyReference,
    /// The resource's own URL (conventionally the `self` field).
    Identity,
    /// A property whose value already is a URL.
    Property,
    /// A hyperlink computed by the resource itself.
    Method,
    /// An uploaded file exposed by URL instead of inline.
    File,
    /// An uploaded image exposed by URL instead of inline.
    Image,
}

/// The classification tag of a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Link(LinkSource),
    Embedded,
    Contribution {
        target_field: String,
        property_name: String,
    },
    Plain,
}

impl FieldKind {
    pub fn is_link(&self) -> bool {
        matches!(self, FieldKind::Link(_))
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self, FieldKind::Embedded)
    }
}

/// One declared field of a resource type.
///
/// ```rust
/// use hal_framework::{FieldDescriptor, FieldKind, LinkSource};
///
/// let fields = [
///     FieldDescriptor::identity("self"),
///     FieldDescriptor::link("customer", LinkSource::Reference),
///     FieldDescriptor::contribution("customer_name", "customer"),
///     FieldDescriptor::embedded("product"),
///     FieldDescriptor::plain("quantity"),
/// ];
///
/// assert!(fields[0].kind.is_link());
/// assert_eq!(
///     fields[2].kind,
///     FieldKind::Contribution {
///         target_field: "customer".into(),
///         property_name: "title".into(),
///     }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    pub name: String,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn link(name: impl Into<String>, source: LinkSource) -> Self {
        Self::new(name, FieldKind::Link(source))
    }

    /// The resource's own URL.
    pub fn identity(name: impl Into<String>) -> Self {
        Self::link(name, LinkSource::Identity)
    }

    pub fn embedded(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Embedded)
    }

    /// A field that contributes a `title` to the link built for `target_field`.
    ///
    /// Use [`FieldDescriptor::with_property`] to contribute another property.
    pub fn contribution(name: impl Into<String>, target_field: impl Into<String>) -> Self {
        Self::new(
            name,
            FieldKind::Contribution {
                target_field: target_field.into(),
                property_name: DEFAULT_CONTRIBUTED_PROPERTY.to_string(),
            },
        )
    }

    pub fn plain(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Plain)
    }

    /// Changes the contributed property name. No-op for other kinds.
    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        if let FieldKind::Contribution { property_name, .. } = &mut self.kind {
            *property_name = property.into();
        }
        self
    }
}
