//! # HAL Documents
//!
//! The output tree of a render call. A [`Document`] has three ordered sections:
//! `links`, `embedded` and `attributes`. It encodes to JSON with the two
//! reserved keys first and the plain attributes after them:
//!
//! ```json
//! {
//!   "_links": { "self": { "href": "/orders/1" } },
//!   "_embedded": {},
//!   "quantity": 3
//! }
//! ```
//!
//! `_links` and `_embedded` are always present, even when empty.

use crate::link::{LinkEntry, LinkObject};
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Reserved key holding the links of a document.
pub const LINKS_FIELD_NAME: &str = "_links";
/// Reserved key holding the embedded resources of a document.
pub const EMBEDDED_FIELD_NAME: &str = "_embedded";
/// Conventional name of a resource's own link.
pub const URL_FIELD_NAME: &str = "self";
/// Media type of the encoded documents.
pub const HAL_MEDIA_TYPE: &str = "application/hal+json";

/// The value stored under one key of a document's `_embedded` section.
#[derive(Debug, Clone, PartialEq)]
pub enum EmbeddedEntry {
    /// The embedded field's raw value was null.
    Null,
    One(Box<Document>),
    Many(Vec<Document>),
}

impl EmbeddedEntry {
    pub fn as_document(&self) -> Option<&Document> {
        match self {
            EmbeddedEntry::One(document) => Some(document),
            _ => None,
        }
    }

    pub fn as_documents(&self) -> Option<&[Document]> {
        match self {
            EmbeddedEntry::Many(documents) => Some(documents),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, EmbeddedEntry::Null)
    }
}

impl From<Document> for EmbeddedEntry {
    fn from(document: Document) -> Self {
        EmbeddedEntry::One(Box::new(document))
    }
}

impl From<Vec<Document>> for EmbeddedEntry {
    fn from(documents: Vec<Document>) -> Self {
        EmbeddedEntry::Many(documents)
    }
}

impl Serialize for EmbeddedEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            EmbeddedEntry::Null => serializer.serialize_unit(),
            EmbeddedEntry::One(document) => document.serialize(serializer),
            EmbeddedEntry::Many(documents) => documents.serialize(serializer),
        }
    }
}

/// A rendered HAL document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub links: IndexMap<String, LinkEntry>,
    pub embedded: IndexMap<String, EmbeddedEntry>,
    pub attributes: IndexMap<String, Value>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// A document whose only content is a self link.
    pub fn with_self(href: impl Into<String>) -> Self {
        let mut document = Self::new();
        document.links.insert(
            URL_FIELD_NAME.to_string(),
            LinkEntry::Object(LinkObject::new(href)),
        );
        document
    }

    pub fn link(&self, name: &str) -> Option<&LinkEntry> {
        self.links.get(name)
    }

    pub fn embedded(&self, name: &str) -> Option<&EmbeddedEntry> {
        self.embedded.get(name)
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// The href of the `self` link object, if there is one.
    pub fn self_href(&self) -> Option<&str> {
        self.href_of(URL_FIELD_NAME)
    }

    /// The href of the link object stored under `name`.
    ///
    /// Lists and promoted hrefs do not count: only a single link object
    /// identifies a resource.
    pub fn href_of(&self, name: &str) -> Option<&str> {
        self.links
            .get(name)
            .and_then(LinkEntry::as_object)
            .map(LinkObject::href)
    }

    pub fn to_value(&self) -> Value {
        let mut object = serde_json::Map::with_capacity(self.attributes.len() + 2);
        let links = self
            .links
            .iter()
            .map(|(key, entry)| (key.clone(), entry.to_value()))
            .collect();
        object.insert(LINKS_FIELD_NAME.to_string(), Value::Object(links));
        let embedded = self
            .embedded
            .iter()
            .map(|(key, entry)| {
                let value = match entry {
                    EmbeddedEntry::Null => Value::Null,
                    EmbeddedEntry::One(document) => document.to_value(),
                    EmbeddedEntry::Many(documents) => {
                        Value::Array(documents.iter().map(Document::to_value).collect())
                    }
                };
                (key.clone(), value)
            })
            .collect();
        object.insert(EMBEDDED_FIELD_NAME.to_string(), Value::Object(embedded));
        for (key, value) in &self.attributes {
            object.insert(key.clone(), value.clone());
        }
        Value::Object(object)
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.attributes.len() + 2))?;
        map.serialize_entry(LINKS_FIELD_NAME, &self.links)?;
        map.serialize_entry(EMBEDDED_FIELD_NAME, &self.embedded)?;
        for (key, value) in &self.attributes {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_document_keeps_reserved_sections() {
        assert_eq!(
            Document::new().to_json_string().unwrap(),
            r#"{"_links":{},"_embedded":{}}"#
        );
    }

    #[test]
    fn test_reserved_sections_come_before_attributes() {
        let mut document = Document::with_self("/a/1");
        document.attributes.insert("zeta".into(), json!(1));
        document.attributes.insert("alpha".into(), json!(2));

        let text = document.to_json_string().unwrap();
        assert_eq!(
            text,
            r#"{"_links":{"self":{"href":"/a/1"}},"_embedded":{},"zeta":1,"alpha":2}"#
        );
    }

    #[test]
    fn test_to_value_matches_serialize() {
        let mut child = Document::with_self("/c/1");
        child.attributes.insert("n".into(), json!("child"));

        let mut document = Document::with_self("/p/1");
        document.links.insert("child".into(), LinkEntry::Href("/c/1".into()));
        document.embedded.insert("child".into(), child.into());
        document.embedded.insert("missing".into(), EmbeddedEntry::Null);

        let via_serde = serde_json::to_value(&document).unwrap();
        assert_eq!(via_serde, document.to_value());
        assert_eq!(via_serde["_embedded"]["missing"], Value::Null);
        assert_eq!(via_serde["_links"]["child"], json!("/c/1"));
    }

    #[test]
    fn test_self_href_ignores_lists() {
        let mut document = Document::new();
        document.links.insert(
            URL_FIELD_NAME.into(),
            LinkEntry::List(vec![LinkObject::new("/x")]),
        );
        assert_eq!(document.self_href(), None);
    }
}
