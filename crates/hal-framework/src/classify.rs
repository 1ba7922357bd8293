//! # Field Classifier
//!
//! Buckets a descriptor set into link, embedded, contribution and plain fields.
//! The classifier is a pure match over [`FieldKind`]: the same descriptors always
//! yield the same buckets, each in declaration order.

use crate::field::{FieldDescriptor, FieldKind};

/// A contribution resolved from its descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contribution {
    /// The link field that receives the property.
    pub target_field: String,
    /// The property set on the target link object.
    pub property_name: String,
    /// The field whose raw value supplies the property value.
    pub source_field: String,
}

/// The result of classifying one resource type's fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub link_fields: Vec<String>,
    pub embedded_fields: Vec<String>,
    pub contributions: Vec<Contribution>,
    pub plain_fields: Vec<String>,
}

impl Classification {
    pub fn is_link(&self, name: &str) -> bool {
        self.link_fields.iter().any(|field| field == name)
    }

    pub fn is_embedded(&self, name: &str) -> bool {
        self.embedded_fields.iter().any(|field| field == name)
    }

    /// Contributions aimed at `target`, in declaration order.
    pub fn contributions_to<'a>(&'a self, target: &'a str) -> impl Iterator<Item = &'a Contribution> {
        self.contributions
            .iter()
            .filter(move |contribution| contribution.target_field == target)
    }
}

/// Classifies `descriptors`.
///
/// ```rust
/// use hal_framework::{classify, FieldDescriptor};
///
/// let classification = classify(&[
///     FieldDescriptor::identity("self"),
///     FieldDescriptor::contribution("name", "self"),
///     FieldDescriptor::plain("id"),
/// ]);
///
/// assert_eq!(classification.link_fields, vec!["self"]);
/// assert_eq!(classification.contributions[0].source_field, "name");
/// assert_eq!(classification.plain_fields, vec!["id"]);
/// ```
pub fn classify(descriptors: &[FieldDescriptor]) -> Classification {
    let mut classification = Classification::default();
    for descriptor in descriptors {
        let name = descriptor.name.clone();
        match &descriptor.kind {
            FieldKind::Link(_) => classification.link_fields.push(name),
            FieldKind::Embedded => classification.embedded_fields.push(name),
            FieldKind::Contribution {
                target_field,
                property_name,
            } => classification.contributions.push(Contribution {
                target_field: target_field.clone(),
                property_name: property_name.clone(),
                source_field: name,
            }),
            FieldKind::Plain => classification.plain_fields.push(name),
        }
    }
    classification
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::LinkSource;

    #[test]
    fn test_every_link_source_is_a_link() {
        let sources = [
            LinkSource::Reference,
            LinkSource::ManyReference,
            LinkSource::Identity,
            LinkSource::Property,
            LinkSource::Method,
            LinkSource::File,
            LinkSource::Image,
        ];
        let descriptors: Vec<_> = sources
            .iter()
            .enumerate()
            .map(|(i, source)| FieldDescriptor::link(format!("f{}", i), *source))
            .collect();

        let classification = classify(&descriptors);
        assert_eq!(classification.link_fields.len(), sources.len());
        assert!(classification.embedded_fields.is_empty());
        assert!(classification.plain_fields.is_empty());
    }

    #[test]
    fn test_buckets_keep_declaration_order() {
        let descriptors = [
            FieldDescriptor::plain("b"),
            FieldDescriptor::embedded("z"),
            FieldDescriptor::plain("a"),
            FieldDescriptor::embedded("y"),
        ];
        let classification = classify(&descriptors);
        assert_eq!(classification.plain_fields, vec!["b", "a"]);
        assert_eq!(classification.embedded_fields, vec!["z", "y"]);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let descriptors = [
            FieldDescriptor::identity("self"),
            FieldDescriptor::contribution("t", "self").with_property("type"),
            FieldDescriptor::plain("id"),
        ];
        assert_eq!(classify(&descriptors), classify(&descriptors));
    }

    #[test]
    fn test_contributions_to_filters_by_target() {
        let classification = classify(&[
            FieldDescriptor::identity("self"),
            FieldDescriptor::link("file", LinkSource::File),
            FieldDescriptor::contribution("file_title", "file"),
            FieldDescriptor::contribution("self_title", "self"),
            FieldDescriptor::contribution("file_type", "file").with_property("type"),
        ]);

        let to_file: Vec<_> = classification
            .contributions_to("file")
            .map(|c| c.property_name.as_str())
            .collect();
        assert_eq!(to_file, vec!["title", "type"]);
    }
}
