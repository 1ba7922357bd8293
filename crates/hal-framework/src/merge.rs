//! # Contribution Merger
//!
//! Applies contributed properties (`title`, `type`, `templated`, ...) onto link
//! objects that were already built for their target fields.
//!
//! Policy:
//! - a null value never creates a property, and never removes one either
//! - a contribution whose target link was omitted (its raw value was null) is dropped
//! - a list target receives the property on every element, because a contributed
//!   property describes the relation as a whole, not one member of it

use crate::link::LinkEntry;
use indexmap::IndexMap;
use serde_json::Value;
use tracing::trace;

/// One contribution with its resolved value.
#[derive(Debug, Clone, PartialEq)]
pub struct ContributedValue<'a> {
    pub target_field: &'a str,
    pub property_name: &'a str,
    pub value: Option<Value>,
}

/// Merges `contributions` into `links`, in order.
///
/// ```rust
/// use hal_framework::merge::{merge_contributions, ContributedValue};
/// use hal_framework::{LinkEntry, LinkObject};
/// use indexmap::IndexMap;
/// use serde_json::json;
///
/// let mut links = IndexMap::new();
/// links.insert("self".to_string(), LinkEntry::Object(LinkObject::new("/a/1")));
///
/// merge_contributions(
///     &mut links,
///     vec![ContributedValue {
///         target_field: "self",
///         property_name: "title",
///         value: Some(json!("First")),
///     }],
/// );
///
/// assert_eq!(links["self"].as_object().unwrap().title(), Some("First"));
/// ```
pub fn merge_contributions<'a>(
    links: &mut IndexMap<String, LinkEntry>,
    contributions: impl IntoIterator<Item = ContributedValue<'a>>,
) {
    for contribution in contributions {
        let value = match contribution.value {
            Some(Value::Null) | None => {
                trace!(
                    target_field = contribution.target_field,
                    property = contribution.property_name,
                    "Null contribution suppressed"
                );
                continue;
            }
            Some(value) => value,
        };

        match links.get_mut(contribution.target_field) {
            Some(entry) => entry.set_property(contribution.property_name, &value),
            None => trace!(
                target_field = contribution.target_field,
                property = contribution.property_name,
                "Contribution target has no link; value dropped"
            ),
        }
    }
}
