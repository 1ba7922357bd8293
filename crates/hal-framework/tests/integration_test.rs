use hal_framework::mock::MockResource;
use hal_framework::{
    render, Attributes, ConfigError, Document, EmbeddedEntry, FieldDescriptor, HalConfig,
    LinkEntry, LinkObject, LinkSource, RawValue, Renderer, Resource, ResourceType,
};
use serde_json::{json, Value};

// --- Test Resource Types ---

fn author_type() -> ResourceType {
    ResourceType::new(
        "Author",
        [
            FieldDescriptor::identity("self"),
            FieldDescriptor::plain("name"),
        ],
    )
    .unwrap()
}

fn book_type() -> ResourceType {
    ResourceType::builder("Book")
        .field(FieldDescriptor::identity("self"))
        .field(FieldDescriptor::plain("title"))
        .field(FieldDescriptor::link("publisher", LinkSource::Reference))
        .field(FieldDescriptor::contribution("publisher_name", "publisher"))
        .field(FieldDescriptor::link("editions", LinkSource::ManyReference))
        .field(FieldDescriptor::contribution("edition_label", "editions").with_property("name"))
        .field(FieldDescriptor::embedded("author"))
        .field(FieldDescriptor::embedded("reviewers"))
        .field(FieldDescriptor::plain("pages"))
        .build()
        .unwrap()
}

// --- End-to-end scenarios ---

#[test]
fn test_scalar_link_becomes_link_object() {
    let ty = ResourceType::new(
        "Thing",
        [FieldDescriptor::link("field", LinkSource::Reference)],
    )
    .unwrap();
    let thing = MockResource::new(&ty).with("field", "http://x/1");

    let document = render(&thing);

    assert_eq!(
        document.link("field"),
        Some(&LinkEntry::Object(LinkObject::new("http://x/1")))
    );
    thing.verify();
}

#[test]
fn test_null_contribution_leaves_many_link_untouched() {
    let ty = ResourceType::new(
        "Thing",
        [
            FieldDescriptor::link("field", LinkSource::ManyReference),
            FieldDescriptor::contribution("field_title", "field"),
        ],
    )
    .unwrap();
    let thing = MockResource::new(&ty)
        .with("field", json!(["http://x/1", "http://x/2"]))
        .with("field_title", Value::Null);

    let document = render(&thing);

    assert_eq!(
        document.to_value()["_links"]["field"],
        json!([{ "href": "http://x/1" }, { "href": "http://x/2" }])
    );
}

#[test]
fn test_embedded_child_self_is_promoted_to_links() {
    let ty = ResourceType::new("Thing", [FieldDescriptor::embedded("field")]).unwrap();
    let mut child = Document::with_self("http://x/9");
    child.attributes.insert("name".into(), json!("nine"));
    let thing = MockResource::new(&ty).with("field", child.clone());

    let document = render(&thing);

    assert_eq!(document.link("field"), Some(&LinkEntry::Href("http://x/9".into())));
    assert_eq!(document.embedded("field").and_then(EmbeddedEntry::as_document), Some(&child));
    assert_eq!(document.to_value()["_links"]["field"], json!("http://x/9"));
}

#[test]
fn test_empty_embedded_list_has_no_link() {
    let ty = ResourceType::new("Thing", [FieldDescriptor::embedded("field")]).unwrap();
    let thing = MockResource::new(&ty).with("field", Vec::<Document>::new());

    let document = render(&thing);

    assert_eq!(document.to_value()["_embedded"]["field"], json!([]));
    assert!(document.link("field").is_none());
}

// --- Full documents ---

#[test]
fn test_full_book_document() {
    let author_ty = author_type();
    let book_ty = book_type();

    let tolkien = MockResource::new(&author_ty)
        .with("self", "http://x/authors/1")
        .with("name", "J. R. R. Tolkien");
    let lewis = MockResource::new(&author_ty)
        .with("self", "http://x/authors/2")
        .with("name", "C. S. Lewis");
    let book = MockResource::new(&book_ty)
        .with("self", "http://x/books/1")
        .with("title", "The Hobbit")
        .with("publisher", "http://x/publishers/3")
        .with("publisher_name", "Allen & Unwin")
        .with("editions", json!(["http://x/editions/1", "http://x/editions/2"]))
        .with("edition_label", "first")
        .with_nested("author", &tolkien)
        .with_nested_many("reviewers", [&lewis as &dyn Resource])
        .with("pages", 310);

    let document = render(&book);

    assert_eq!(
        document.to_value(),
        json!({
            "_links": {
                "self": { "href": "http://x/books/1" },
                "publisher": { "href": "http://x/publishers/3", "title": "Allen & Unwin" },
                "editions": [
                    { "href": "http://x/editions/1", "name": "first" },
                    { "href": "http://x/editions/2", "name": "first" }
                ],
                "author": "http://x/authors/1",
                "reviewers": ["http://x/authors/2"]
            },
            "_embedded": {
                "author": {
                    "_links": { "self": { "href": "http://x/authors/1" } },
                    "_embedded": {},
                    "name": "J. R. R. Tolkien"
                },
                "reviewers": [{
                    "_links": { "self": { "href": "http://x/authors/2" } },
                    "_embedded": {},
                    "name": "C. S. Lewis"
                }]
            },
            "title": "The Hobbit",
            "pages": 310
        })
    );
    book.verify();
    tolkien.verify();
    lewis.verify();
}

#[test]
fn test_serialized_keys_follow_declaration_order() {
    let ty = ResourceType::new(
        "Thing",
        [
            FieldDescriptor::plain("zeta"),
            FieldDescriptor::link("b_link", LinkSource::Reference),
            FieldDescriptor::plain("alpha"),
            FieldDescriptor::embedded("child"),
            FieldDescriptor::link("a_link", LinkSource::Reference),
        ],
    )
    .unwrap();
    let thing = MockResource::new(&ty)
        .with("zeta", 1)
        .with("b_link", "/b")
        .with("alpha", 2)
        .with("child", Document::new())
        .with("a_link", "/a");

    let json = render(&thing).to_json_string().unwrap();

    assert_eq!(
        json,
        r#"{"_links":{"b_link":{"href":"/b"},"a_link":{"href":"/a"}},"_embedded":{"child":{"_links":{},"_embedded":{}}},"zeta":1,"alpha":2}"#
    );
}

#[test]
fn test_empty_resource_still_has_reserved_sections() {
    let ty = ResourceType::new("Thing", [FieldDescriptor::plain("a")]).unwrap();
    let thing = MockResource::new(&ty);

    assert_eq!(
        render(&thing).to_value(),
        json!({ "_links": {}, "_embedded": {} })
    );
}

// --- Links ---

#[test]
fn test_null_link_is_omitted() {
    let ty = ResourceType::new(
        "Thing",
        [FieldDescriptor::link("owner", LinkSource::Reference)],
    )
    .unwrap();
    let thing = MockResource::new(&ty).with("owner", Value::Null);

    assert!(render(&thing).link("owner").is_none());
}

#[test]
fn test_prebuilt_link_object_is_kept() {
    let ty = ResourceType::new(
        "Thing",
        [FieldDescriptor::link("download", LinkSource::File)],
    )
    .unwrap();
    let link = LinkObject::new("/files/report.pdf").with_type("application/pdf");
    let thing = MockResource::new(&ty).with("download", link.clone());

    assert_eq!(
        render(&thing).link("download"),
        Some(&LinkEntry::Object(link))
    );
}

#[test]
fn test_rendered_link_is_stable_when_fed_back() {
    let ty = ResourceType::new(
        "Thing",
        [FieldDescriptor::link("field", LinkSource::Property)],
    )
    .unwrap();
    let first = render(&MockResource::new(&ty).with("field", "http://x/1"));
    let link_json = first.to_value()["_links"]["field"].clone();

    let second = render(&MockResource::new(&ty).with("field", link_json));

    assert_eq!(first, second);
}

#[test]
fn test_empty_many_link_is_an_empty_list() {
    let ty = ResourceType::new(
        "Thing",
        [FieldDescriptor::link("tags", LinkSource::ManyReference)],
    )
    .unwrap();
    let thing = MockResource::new(&ty).with("tags", RawValue::List(vec![]));

    assert_eq!(render(&thing).to_value()["_links"]["tags"], json!([]));
}

#[test]
fn test_contribution_to_missing_link_is_dropped() {
    let ty = ResourceType::new(
        "Thing",
        [
            FieldDescriptor::link("owner", LinkSource::Reference),
            FieldDescriptor::contribution("owner_name", "owner"),
        ],
    )
    .unwrap();
    let thing = MockResource::new(&ty).with("owner_name", "Alice");

    let document = render(&thing);

    assert!(document.links.is_empty());
    assert!(document.attribute("owner_name").is_none());
}

#[test]
fn test_contribution_is_not_an_attribute() {
    let ty = ResourceType::new(
        "Thing",
        [
            FieldDescriptor::link("owner", LinkSource::Reference),
            FieldDescriptor::contribution("owner_name", "owner"),
        ],
    )
    .unwrap();
    let thing = MockResource::new(&ty)
        .with("owner", "/users/1")
        .with("owner_name", "Alice");

    let document = render(&thing);

    assert_eq!(document.attributes.len(), 0);
    assert_eq!(
        document.link("owner").and_then(LinkEntry::as_object).and_then(LinkObject::title),
        Some("Alice")
    );
}

// --- Null embedded values ---

#[test]
fn test_null_embedded_is_kept_as_null() {
    let ty = ResourceType::new(
        "Thing",
        [FieldDescriptor::identity("self"), FieldDescriptor::embedded("child")],
    )
    .unwrap();
    let thing = MockResource::new(&ty)
        .with("self", "/things/1")
        .with("child", RawValue::Null);

    let document = render(&thing);
    let value = document.to_value();

    assert!(document.link("child").is_none());
    assert!(value["_links"].get("child").is_none());
    assert_eq!(value["_embedded"].get("child"), Some(&Value::Null));
}

// --- Depth limit ---

#[test]
fn test_nesting_past_max_depth_degrades_to_link() {
    let ty = ResourceType::new(
        "Node",
        [
            FieldDescriptor::identity("self"),
            FieldDescriptor::embedded("child"),
        ],
    )
    .unwrap();
    let leaf = MockResource::new(&ty).with("self", "/nodes/3");
    let middle = MockResource::new(&ty)
        .with("self", "/nodes/2")
        .with_nested("child", &leaf);
    let root = MockResource::new(&ty)
        .with("self", "/nodes/1")
        .with_nested("child", &middle);

    let renderer = Renderer::new(HalConfig {
        max_depth: 1,
        ..HalConfig::default()
    });
    let document = renderer.render(&root);

    let embedded_middle = document
        .embedded("child")
        .and_then(EmbeddedEntry::as_document)
        .unwrap();
    assert_eq!(embedded_middle.self_href(), Some("/nodes/2"));
    assert!(embedded_middle.embedded("child").is_none());
    assert_eq!(
        embedded_middle.link("child"),
        Some(&LinkEntry::Href("/nodes/3".into()))
    );
}

#[test]
fn test_depth_zero_links_every_nested_resource() {
    let author_ty = author_type();
    let ty = ResourceType::new(
        "Shelf",
        [FieldDescriptor::embedded("authors")],
    )
    .unwrap();
    let a = MockResource::new(&author_ty).with("self", "/authors/1");
    let b = MockResource::new(&author_ty).with("self", "/authors/2");
    let shelf = MockResource::new(&ty)
        .with_nested_many("authors", [&a as &dyn Resource, &b]);

    let document = Renderer::new(HalConfig {
        max_depth: 0,
        ..HalConfig::default()
    })
    .render(&shelf);

    assert!(document.embedded.is_empty());
    assert_eq!(
        document.to_value()["_links"]["authors"],
        json!(["/authors/1", "/authors/2"])
    );
}

#[test]
fn test_depth_zero_keeps_empty_nested_list_embedded() {
    let ty = ResourceType::new("Shelf", [FieldDescriptor::embedded("authors")]).unwrap();
    let shelf = MockResource::new(&ty).with_nested_many("authors", Vec::<&dyn Resource>::new());

    let document = Renderer::new(HalConfig {
        max_depth: 0,
        ..HalConfig::default()
    })
    .render(&shelf);

    assert!(document.link("authors").is_none());
    assert_eq!(document.to_value()["_embedded"]["authors"], json!([]));
}

#[test]
fn test_depth_zero_links_nested_list_elements() {
    let author_ty = author_type();
    let ty = ResourceType::new("Shelf", [FieldDescriptor::embedded("authors")]).unwrap();
    let a = MockResource::new(&author_ty).with("self", "/a/1");
    let b = MockResource::new(&author_ty).with("self", "/a/2");
    let shelf = MockResource::new(&ty).with(
        "authors",
        RawValue::List(vec![RawValue::Nested(&a), RawValue::Nested(&b)]),
    );

    let document = Renderer::new(HalConfig {
        max_depth: 0,
        ..HalConfig::default()
    })
    .render(&shelf);

    assert!(document.embedded("authors").is_none());
    assert_eq!(
        document.to_value()["_links"]["authors"],
        json!(["/a/1", "/a/2"])
    );
}

#[test]
fn test_list_mixing_documents_and_nested_at_depth_zero() {
    let author_ty = author_type();
    let ty = ResourceType::new("Shelf", [FieldDescriptor::embedded("authors")]).unwrap();
    let linked = MockResource::new(&author_ty).with("self", "/a/2");
    let shelf = MockResource::new(&ty).with(
        "authors",
        RawValue::List(vec![
            RawValue::Document(Document::with_self("/a/1")),
            RawValue::Nested(&linked),
        ]),
    );

    let document = Renderer::new(HalConfig {
        max_depth: 0,
        ..HalConfig::default()
    })
    .render(&shelf);
    let value = document.to_value();

    assert_eq!(value["_links"]["authors"], json!(["/a/1", "/a/2"]));
    assert_eq!(value["_embedded"]["authors"].as_array().map(Vec::len), Some(1));
}

// --- Configuration ---

#[test]
fn test_custom_url_field_name_drives_promotion() {
    let ty = ResourceType::new("Thing", [FieldDescriptor::embedded("child")]).unwrap();
    let mut child = Document::new();
    child
        .links
        .insert("canonical".into(), LinkEntry::Object(LinkObject::new("/c/1")));
    let thing = MockResource::new(&ty).with("child", child);

    let config = HalConfig::from_json_str(r#"{"url_field_name": "canonical"}"#).unwrap();
    let renderer = Renderer::new(config);

    assert_eq!(
        renderer.render(&thing).link("child"),
        Some(&LinkEntry::Href("/c/1".into()))
    );
}

#[test]
fn test_registration_rejects_non_link_contribution_target() {
    let result = ResourceType::new(
        "Thing",
        [
            FieldDescriptor::plain("status"),
            FieldDescriptor::contribution("status_title", "status"),
        ],
    );

    assert!(matches!(
        result,
        Err(ConfigError::ContributionTargetNotLink { .. })
    ));
}

#[test]
fn test_registration_rejects_reserved_names() {
    let result = ResourceType::new("Thing", [FieldDescriptor::plain("_links")]);
    assert!(matches!(result, Err(ConfigError::ReservedFieldName { .. })));
}

// --- Pre-resolved attributes ---

#[test]
fn test_render_attributes_treats_missing_as_null() {
    let ty = book_type();
    let mut attributes = Attributes::new();
    attributes.insert("self".into(), "/books/2".into());
    attributes.insert("title".into(), "Silmarillion".into());
    attributes.insert("undeclared".into(), "ignored".into());

    let document = Renderer::default().render_attributes(&ty, attributes);

    assert_eq!(document.self_href(), Some("/books/2"));
    assert_eq!(document.attribute("title"), Some(&json!("Silmarillion")));
    assert!(document.attribute("undeclared").is_none());
    assert!(document.attribute("pages").is_none());
    assert!(document.link("publisher").is_none());
    assert!(document.embedded("author").and_then(|e| e.as_document()).is_none());
}

#[test]
fn test_render_many_keeps_order() {
    let ty = author_type();
    let a = MockResource::new(&ty).with("self", "/authors/2");
    let b = MockResource::new(&ty).with("self", "/authors/1");

    let documents = Renderer::default().render_many([&a as &dyn Resource, &b]);

    let hrefs: Vec<_> = documents.iter().filter_map(Document::self_href).collect();
    assert_eq!(hrefs, vec!["/authors/2", "/authors/1"]);
}
