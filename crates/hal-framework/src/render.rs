//! # Document Assembler
//!
//! The [`Renderer`] turns one resource into a [`Document`]. Per call it:
//!
//! 1. resolves the raw value of every declared field, in declaration order
//! 2. builds a link for every link field whose value is not null
//! 3. renders every embedded field, promoting the child's self href into `_links`
//! 4. copies plain fields into the attributes, skipping nulls
//! 5. merges contributions onto the links built in step 2
//!
//! A render call owns nothing but the document it is building, so independent
//! renders may run in parallel over a shared [`ResourceType`] and [`Renderer`].
//!
//! # Recursion
//!
//! A child supplied as [`RawValue::Nested`] is rendered by the same renderer one
//! level deeper. Once [`HalConfig::max_depth`] is reached the child is no longer
//! embedded: the parent gets a link to it instead. The link has the same shape
//! as a promoted self href: a bare string for a single child, a list of strings
//! for many, so a field keeps one JSON shape at any depth. An empty list of
//! children is still embedded as `[]`. Children supplied as
//! [`RawValue::Document`] were rendered by the caller and are embedded as-is.

use crate::config::HalConfig;
use crate::document::{Document, EmbeddedEntry};
use crate::field::FieldKind;
use crate::link::{build_link, LinkEntry};
use crate::merge::{merge_contributions, ContributedValue};
use crate::resource::{Attributes, RawValue, Resource, ResourceType};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, debug_span, warn};

/// Renders resources into HAL documents.
///
/// ```rust
/// use hal_framework::mock::MockResource;
/// use hal_framework::{FieldDescriptor, Renderer, ResourceType};
///
/// let ty = ResourceType::new(
///     "Note",
///     [FieldDescriptor::identity("self"), FieldDescriptor::plain("text")],
/// )
/// .unwrap();
/// let note = MockResource::new(&ty)
///     .with("self", "http://x/notes/1")
///     .with("text", "hello");
///
/// let document = Renderer::default().render(&note);
/// assert_eq!(document.self_href(), Some("http://x/notes/1"));
/// assert_eq!(document.attribute("text").unwrap(), "hello");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: HalConfig,
}

impl Renderer {
    pub fn new(config: HalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HalConfig {
        &self.config
    }

    pub fn render(&self, resource: &dyn Resource) -> Document {
        self.render_at(resource, 0)
    }

    /// Renders each resource independently, keeping their order.
    pub fn render_many<'r, I>(&self, resources: I) -> Vec<Document>
    where
        I: IntoIterator<Item = &'r dyn Resource>,
    {
        resources
            .into_iter()
            .map(|resource| self.render(resource))
            .collect()
    }

    /// Renders a pre-resolved attribute map. Declared fields missing from the
    /// map are treated as null; undeclared entries are ignored.
    pub fn render_attributes(
        &self,
        resource_type: &ResourceType,
        mut attributes: Attributes<'_>,
    ) -> Document {
        let _span = debug_span!("render", resource = resource_type.name(), depth = 0).entered();
        self.assemble(
            resource_type,
            |field| attributes.shift_remove(field).unwrap_or(RawValue::Null),
            0,
        )
    }

    fn render_at(&self, resource: &dyn Resource, depth: usize) -> Document {
        let resource_type = resource.resource_type();
        let _span = debug_span!("render", resource = resource_type.name(), depth).entered();
        self.assemble(resource_type, |field| resource.resolve(field), depth)
    }

    fn assemble<'a>(
        &self,
        resource_type: &ResourceType,
        mut resolve: impl FnMut(&str) -> RawValue<'a>,
        depth: usize,
    ) -> Document {
        let mut document = Document::new();
        let mut contributed: HashMap<&str, Option<Value>> = HashMap::new();

        for field in resource_type.fields() {
            let raw = resolve(&field.name);
            match &field.kind {
                FieldKind::Link(_) => {
                    if let Some(entry) = build_link(raw) {
                        document.links.insert(field.name.clone(), entry);
                    }
                }
                FieldKind::Embedded => self.embed(&mut document, &field.name, raw, depth),
                FieldKind::Contribution { .. } => {
                    contributed.insert(field.name.as_str(), self.to_json(raw, depth));
                }
                FieldKind::Plain => {
                    if let Some(value) = self.to_json(raw, depth) {
                        document.attributes.insert(field.name.clone(), value);
                    }
                }
            }
        }

        let contributions = resource_type
            .classification()
            .contributions
            .iter()
            .map(|contribution| ContributedValue {
                target_field: &contribution.target_field,
                property_name: &contribution.property_name,
                value: contributed
                    .remove(contribution.source_field.as_str())
                    .flatten(),
            });
        merge_contributions(&mut document.links, contributions);

        debug!(
            resource = resource_type.name(),
            depth,
            links = document.links.len(),
            embedded = document.embedded.len(),
            attributes = document.attributes.len(),
            "Rendered"
        );
        document
    }

    fn embed<'r>(&self, document: &mut Document, name: &str, raw: RawValue<'r>, depth: usize) {
        let at_limit = depth >= self.config.max_depth;
        let mut linked_only: Vec<&'r dyn Resource> = Vec::new();
        let entry = match raw {
            RawValue::Null | RawValue::Value(Value::Null) => EmbeddedEntry::Null,
            RawValue::Document(child) => EmbeddedEntry::One(Box::new(child)),
            RawValue::Documents(children) => EmbeddedEntry::Many(children),
            RawValue::Nested(child) if at_limit => {
                self.link_instead(document, name, &[child], false);
                return;
            }
            RawValue::Nested(child) => EmbeddedEntry::One(Box::new(self.render_at(child, depth + 1))),
            RawValue::NestedMany(children) if at_limit && !children.is_empty() => {
                self.link_instead(document, name, &children, true);
                return;
            }
            RawValue::NestedMany(children) => EmbeddedEntry::Many(
                children
                    .into_iter()
                    .map(|child| self.render_at(child, depth + 1))
                    .collect(),
            ),
            RawValue::List(items) => {
                let documents = self.documents_from(name, items, depth, &mut linked_only);
                if documents.is_empty() && !linked_only.is_empty() {
                    self.link_instead(document, name, &linked_only, true);
                    return;
                }
                EmbeddedEntry::Many(documents)
            }
            RawValue::Value(_) | RawValue::Link(_) => {
                warn!(field = name, "Embedded field resolved to a non-resource value");
                EmbeddedEntry::Null
            }
        };

        let mut promoted = self.promoted_self(&entry);
        if !linked_only.is_empty() {
            let mut hrefs = match promoted.take() {
                Some(LinkEntry::Hrefs(hrefs)) => hrefs,
                _ => Vec::new(),
            };
            hrefs.extend(linked_only.iter().filter_map(|child| self.self_href(*child)));
            debug!(field = name, linked = linked_only.len(), "Depth limit reached; linking part of the list");
            promoted = (!hrefs.is_empty()).then_some(LinkEntry::Hrefs(hrefs));
        }
        if let Some(promoted) = promoted {
            document.links.insert(name.to_string(), promoted);
        }
        document.embedded.insert(name.to_string(), entry);
    }

    /// Renders the resource elements of a list. Nested children past the depth
    /// limit are collected into `linked_only` instead.
    fn documents_from<'r>(
        &self,
        name: &str,
        items: Vec<RawValue<'r>>,
        depth: usize,
        linked_only: &mut Vec<&'r dyn Resource>,
    ) -> Vec<Document> {
        let at_limit = depth >= self.config.max_depth;
        let mut documents = Vec::with_capacity(items.len());
        for item in items {
            match item {
                RawValue::Document(child) => documents.push(child),
                RawValue::Documents(children) => documents.extend(children),
                RawValue::Nested(child) if at_limit => linked_only.push(child),
                RawValue::NestedMany(children) if at_limit => linked_only.extend(children),
                RawValue::Nested(child) => documents.push(self.render_at(child, depth + 1)),
                RawValue::NestedMany(children) => documents.extend(
                    children
                        .into_iter()
                        .map(|child| self.render_at(child, depth + 1)),
                ),
                RawValue::Null | RawValue::Value(Value::Null) => {}
                other => warn!(field = name, value = ?other, "Skipping non-resource list element"),
            }
        }
        documents
    }

    fn promoted_self(&self, entry: &EmbeddedEntry) -> Option<LinkEntry> {
        let url_field = self.config.url_field_name.as_str();
        match entry {
            EmbeddedEntry::Null => None,
            EmbeddedEntry::One(child) => child
                .href_of(url_field)
                .map(|href| LinkEntry::Href(href.to_string())),
            EmbeddedEntry::Many(children) => {
                let hrefs: Vec<String> = children
                    .iter()
                    .filter_map(|child| child.href_of(url_field))
                    .map(str::to_string)
                    .collect();
                (!hrefs.is_empty()).then_some(LinkEntry::Hrefs(hrefs))
            }
        }
    }

    /// Depth limit reached: link to the children instead of embedding them,
    /// in the same bare-href shape an embedded child's promoted self link has.
    fn link_instead(
        &self,
        document: &mut Document,
        name: &str,
        children: &[&dyn Resource],
        many: bool,
    ) {
        let mut hrefs: Vec<String> = children
            .iter()
            .filter_map(|child| self.self_href(*child))
            .collect();
        debug!(field = name, children = children.len(), "Depth limit reached; linking");

        let entry = if many {
            if hrefs.is_empty() {
                return;
            }
            LinkEntry::Hrefs(hrefs)
        } else {
            match hrefs.pop() {
                Some(href) => LinkEntry::Href(href),
                None => return,
            }
        };
        document.links.insert(name.to_string(), entry);
    }

    /// The href of the resource's own link, read through its identity field.
    fn self_href(&self, resource: &dyn Resource) -> Option<String> {
        let resource_type = resource.resource_type();
        let field = resource_type
            .identity_field()
            .unwrap_or(self.config.url_field_name.as_str());
        match build_link(resource.resolve(field))? {
            LinkEntry::Object(link) => Some(link.href().to_string()),
            _ => None,
        }
    }

    fn to_json(&self, raw: RawValue<'_>, depth: usize) -> Option<Value> {
        match raw {
            RawValue::Null | RawValue::Value(Value::Null) => None,
            RawValue::Value(value) => Some(value),
            RawValue::Link(link) => Some(link.to_value()),
            RawValue::List(items) => Some(Value::Array(
                items
                    .into_iter()
                    .map(|item| self.to_json(item, depth).unwrap_or(Value::Null))
                    .collect(),
            )),
            RawValue::Document(document) => Some(document.to_value()),
            RawValue::Documents(documents) => {
                Some(Value::Array(documents.iter().map(Document::to_value).collect()))
            }
            RawValue::Nested(child) => self.nested_json(child, depth),
            RawValue::NestedMany(children) => Some(Value::Array(
                children
                    .into_iter()
                    .map(|child| self.nested_json(child, depth).unwrap_or(Value::Null))
                    .collect(),
            )),
        }
    }

    fn nested_json(&self, child: &dyn Resource, depth: usize) -> Option<Value> {
        if depth >= self.config.max_depth {
            return self.self_href(child).map(Value::String);
        }
        Some(self.render_at(child, depth + 1).to_value())
    }
}

/// Renders `resource` with the default configuration.
pub fn render(resource: &dyn Resource) -> Document {
    Renderer::default().render(resource)
}
