//! # Link Objects
//!
//! A HAL link object is a JSON object with at least an `href`. This module holds
//! the [`LinkObject`] type, the [`LinkEntry`] stored under each `_links` key, and
//! [`build_link`], which normalizes whatever an attribute resolver produced for a
//! link field into one of those shapes.
//!
//! Normalization rules:
//!
//! | Raw value | Result |
//! |-----------|--------|
//! | null | `None` (the key is omitted) |
//! | list | element-wise build, order kept; `[]` stays `[]` |
//! | link-shaped (non-empty string `href`) | returned unchanged |
//! | scalar | `{"href": <scalar>}` |
//!
//! The builder never fabricates a URL. Whatever string the caller handed over
//! becomes the `href`.

use crate::resource::RawValue;
use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::Value;
use tracing::{debug, warn};

/// Key of the mandatory target URL of a link object.
pub const HREF: &str = "href";

/// A single HAL link object.
///
/// `href` is always present. Every other property is optional and kept in the
/// order it was first set, so the serialized object is stable.
///
/// ```rust
/// use hal_framework::LinkObject;
///
/// let link = LinkObject::new("/orders/{id}")
///     .with_title("Order")
///     .with_templated(true);
///
/// assert_eq!(link.href(), "/orders/{id}");
/// assert_eq!(link.title(), Some("Order"));
/// assert!(link.is_templated());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinkObject {
    href: String,
    properties: IndexMap<String, Value>,
}

impl LinkObject {
    /// Creates a link object pointing at `href`.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            properties: IndexMap::new(),
        }
    }

    /// Reads a link object out of a JSON object.
    ///
    /// Returns `None` unless `value` is an object with a truthy `href`: a
    /// non-empty string, a non-zero number or `true`. Scalars are stringified
    /// the way [`build_link`] stringifies them. All other keys are kept as
    /// properties, in order.
    pub fn from_json(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let href = match object.get(HREF)? {
            Value::String(href) if !href.is_empty() => href.clone(),
            Value::Number(number) if number.as_f64() != Some(0.0) => number.to_string(),
            Value::Bool(true) => true.to_string(),
            _ => return None,
        };
        let properties = object
            .iter()
            .filter(|(key, _)| key.as_str() != HREF)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Some(Self { href, properties })
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    /// Looks up a property other than `href`.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Iterates over the properties other than `href`, in insertion order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Sets a property. `href` cannot be replaced through this method.
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        if name == HREF {
            debug!(href = %self.href, "Ignoring attempt to overwrite href");
            return;
        }
        self.properties.insert(name, value.into());
    }

    /// Builder form of [`LinkObject::set_property`].
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_property(name, value);
        self
    }

    pub fn with_title(self, title: impl Into<String>) -> Self {
        self.with_property("title", title.into())
    }

    /// Sets the media type hint (`type`).
    pub fn with_type(self, media_type: impl Into<String>) -> Self {
        self.with_property("type", media_type.into())
    }

    pub fn with_templated(self, templated: bool) -> Self {
        self.with_property("templated", templated)
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        self.with_property("name", name.into())
    }

    pub fn with_deprecation(self, deprecation: impl Into<String>) -> Self {
        self.with_property("deprecation", deprecation.into())
    }

    pub fn with_profile(self, profile: impl Into<String>) -> Self {
        self.with_property("profile", profile.into())
    }

    pub fn with_hreflang(self, hreflang: impl Into<String>) -> Self {
        self.with_property("hreflang", hreflang.into())
    }

    pub fn title(&self) -> Option<&str> {
        self.property("title").and_then(Value::as_str)
    }

    pub fn media_type(&self) -> Option<&str> {
        self.property("type").and_then(Value::as_str)
    }

    /// `true` only when the link carries `templated: true`.
    pub fn is_templated(&self) -> bool {
        self.property("templated").and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn name(&self) -> Option<&str> {
        self.property("name").and_then(Value::as_str)
    }

    pub fn deprecation(&self) -> Option<&str> {
        self.property("deprecation").and_then(Value::as_str)
    }

    pub fn to_value(&self) -> Value {
        let mut object = serde_json::Map::with_capacity(self.properties.len() + 1);
        object.insert(HREF.to_string(), Value::String(self.href.clone()));
        for (key, value) in &self.properties {
            object.insert(key.clone(), value.clone());
        }
        Value::Object(object)
    }
}

impl Serialize for LinkObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.properties.len() + 1))?;
        map.serialize_entry(HREF, &self.href)?;
        for (key, value) in &self.properties {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// The value stored under one key of a document's `_links` section.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkEntry {
    /// A single link object.
    Object(LinkObject),
    /// A many-relation: a list of link objects, possibly empty.
    List(Vec<LinkObject>),
    /// The self-href promoted from a single embedded document.
    Href(String),
    /// The self-hrefs promoted from a list of embedded documents.
    Hrefs(Vec<String>),
}

impl LinkEntry {
    pub fn as_object(&self) -> Option<&LinkObject> {
        match self {
            LinkEntry::Object(link) => Some(link),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[LinkObject]> {
        match self {
            LinkEntry::List(links) => Some(links),
            _ => None,
        }
    }

    /// The first href carried by this entry, if any.
    pub fn href(&self) -> Option<&str> {
        match self {
            LinkEntry::Object(link) => Some(link.href()),
            LinkEntry::List(links) => links.first().map(LinkObject::href),
            LinkEntry::Href(href) => Some(href),
            LinkEntry::Hrefs(hrefs) => hrefs.first().map(String::as_str),
        }
    }

    /// Sets `name` on the link object, or on every element of a list.
    ///
    /// Promoted hrefs are bare strings and carry no properties, so they are
    /// left untouched.
    pub fn set_property(&mut self, name: &str, value: &Value) {
        match self {
            LinkEntry::Object(link) => link.set_property(name, value.clone()),
            LinkEntry::List(links) => {
                for link in links {
                    link.set_property(name, value.clone());
                }
            }
            LinkEntry::Href(_) | LinkEntry::Hrefs(_) => {}
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            LinkEntry::Object(link) => link.to_value(),
            LinkEntry::List(links) => Value::Array(links.iter().map(LinkObject::to_value).collect()),
            LinkEntry::Href(href) => Value::String(href.clone()),
            LinkEntry::Hrefs(hrefs) => {
                Value::Array(hrefs.iter().cloned().map(Value::String).collect())
            }
        }
    }
}

impl From<LinkObject> for LinkEntry {
    fn from(link: LinkObject) -> Self {
        LinkEntry::Object(link)
    }
}

impl From<Vec<LinkObject>> for LinkEntry {
    fn from(links: Vec<LinkObject>) -> Self {
        LinkEntry::List(links)
    }
}

impl Serialize for LinkEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LinkEntry::Object(link) => link.serialize(serializer),
            LinkEntry::List(links) => {
                let mut seq = serializer.serialize_seq(Some(links.len()))?;
                for link in links {
                    seq.serialize_element(link)?;
                }
                seq.end()
            }
            LinkEntry::Href(href) => serializer.serialize_str(href),
            LinkEntry::Hrefs(hrefs) => hrefs.serialize(serializer),
        }
    }
}

/// Normalizes the raw value of a link field.
///
/// ```rust
/// use hal_framework::{build_link, LinkEntry, LinkObject, RawValue};
///
/// let built = build_link(RawValue::from("http://x/1"));
/// assert_eq!(built, Some(LinkEntry::Object(LinkObject::new("http://x/1"))));
///
/// assert_eq!(build_link(RawValue::Null), None);
/// ```
pub fn build_link(raw: RawValue<'_>) -> Option<LinkEntry> {
    match raw {
        RawValue::Null => None,
        RawValue::Link(link) => Some(LinkEntry::Object(link)),
        RawValue::List(items) => Some(LinkEntry::List(build_list(items))),
        RawValue::Value(value) => build_from_json(value),
        RawValue::Document(_)
        | RawValue::Documents(_)
        | RawValue::Nested(_)
        | RawValue::NestedMany(_) => {
            warn!("Nested resource supplied for a link field; omitting link");
            None
        }
    }
}

fn build_list(items: Vec<RawValue<'_>>) -> Vec<LinkObject> {
    let mut links = Vec::with_capacity(items.len());
    for item in items {
        match build_link(item) {
            Some(LinkEntry::Object(link)) => links.push(link),
            Some(LinkEntry::List(nested)) => links.extend(nested),
            Some(LinkEntry::Href(href)) => links.push(LinkObject::new(href)),
            Some(LinkEntry::Hrefs(hrefs)) => links.extend(hrefs.into_iter().map(LinkObject::new)),
            None => {}
        }
    }
    links
}

fn build_from_json(value: Value) -> Option<LinkEntry> {
    match value {
        Value::Null => None,
        Value::String(href) => Some(LinkEntry::Object(LinkObject::new(href))),
        Value::Number(number) => Some(LinkEntry::Object(LinkObject::new(number.to_string()))),
        Value::Bool(flag) => Some(LinkEntry::Object(LinkObject::new(flag.to_string()))),
        Value::Array(items) => Some(LinkEntry::List(build_list(
            items.into_iter().map(RawValue::Value).collect(),
        ))),
        object @ Value::Object(_) => match LinkObject::from_json(&object) {
            Some(link) => Some(LinkEntry::Object(link)),
            None => {
                warn!(value = %object, "Object without a usable href; omitting link");
                None
            }
        },
    }
}
