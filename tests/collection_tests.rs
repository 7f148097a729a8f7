//! Collection document tests

use collection_json::models::{
    Array, Collection, Data, Entity, Error, Item, Link, Member, ModelError, Query, Template,
};
use serde_json::json;

fn full_collection() -> Collection {
    let link = Link::new("href", "rel")
        .with_name("name")
        .with_render("render")
        .with_prompt("prompt");
    let data = Data::new("name").with_value("value").with_prompt("prompt");
    let item = Item::new()
        .with_href("href")
        .with_data(vec![data.clone()])
        .unwrap()
        .with_links(vec![link.clone()])
        .unwrap();
    let query = Query::new("href", "rel")
        .with_name("name")
        .with_prompt("prompt")
        .with_data(vec![data.clone()])
        .unwrap();
    Collection::new("http://example.com")
        .with_links(vec![link])
        .unwrap()
        .with_items(vec![item])
        .unwrap()
        .with_queries(vec![query])
        .unwrap()
        .with_template(Template::with_data(vec![data]).unwrap())
        .with_error(
            Error::new()
                .with_code("code")
                .with_message("message")
                .with_title("title"),
        )
}

mod parse_tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let collection = Collection::parse(r#"{"collection":{"href":"http://example.org"}}"#).unwrap();
        assert_eq!(collection.version, "1.0");
        assert_eq!(collection.href, "http://example.org");
        assert!(collection.links().is_empty());
        assert!(collection.items().is_empty());
        assert!(collection.queries().is_empty());
        assert_eq!(collection.template(), None);
        assert_eq!(collection.error(), None);
    }

    #[test]
    fn test_parse_invalid_documents() {
        for text in ["", "not json", "{}", r#"{"collection": {}}"#, r#"{"other": {"href": "h"}}"#] {
            assert!(
                matches!(Collection::parse(text), Err(ModelError::InvalidDocument(_))),
                "expected invalid document for {:?}",
                text
            );
        }
    }

    #[test]
    fn test_parse_without_href() {
        let result = Collection::parse(r#"{"collection": {"version": "1.0"}}"#);
        assert_eq!(
            result,
            Err(ModelError::MissingField {
                entity: "Collection",
                field: "href".to_string()
            })
        );
    }

    #[test]
    fn test_parse_error_block() {
        let collection = Collection::parse(
            &json!({
                "collection": {
                    "version": "1.0",
                    "href": "http://example.org",
                    "error": {"code": "code", "message": "message", "title": "title"}
                }
            })
            .to_string(),
        )
        .unwrap();
        assert_eq!(
            collection.error(),
            Some(
                &Error::new()
                    .with_code("code")
                    .with_message("message")
                    .with_title("title")
            )
        );
    }

    #[test]
    fn test_parse_template() {
        let collection = Collection::parse(
            &json!({
                "collection": {
                    "href": "http://example.com",
                    "template": {"data": [{"name": "name", "value": "value", "prompt": "prompt"}]}
                }
            })
            .to_string(),
        )
        .unwrap();
        let expected =
            Template::with_data(vec![Data::new("name").with_value("value").with_prompt("prompt")])
                .unwrap();
        assert_eq!(collection.template(), Some(&expected));
    }

    #[test]
    fn test_parse_items() {
        let collection = Collection::parse(
            &json!({
                "collection": {
                    "href": "http://example.com",
                    "items": [{
                        "href": "href",
                        "data": [{"name": "name"}],
                        "links": [{"href": "href", "rel": "rel"}]
                    }]
                }
            })
            .to_string(),
        )
        .unwrap();
        let item = Item::new()
            .with_href("href")
            .with_data(vec![Data::new("name")])
            .unwrap()
            .with_links(vec![Link::new("href", "rel")])
            .unwrap();
        assert_eq!(collection.items(), &Array::<Item>::new("items", vec![item]).unwrap());
    }

    #[test]
    fn test_parse_rejects_scalar_items() {
        let result = Collection::parse(r#"{"collection": {"href": "h", "items": [1, 2]}}"#);
        assert!(matches!(
            result,
            Err(ModelError::InvalidElement { expected: "Item", .. })
        ));
    }

    #[test]
    fn test_parse_rejects_wrong_template_type() {
        let result = Collection::parse(r#"{"collection": {"href": "h", "template": "x"}}"#);
        assert!(matches!(
            result,
            Err(ModelError::TypeMismatch { expected: "Template", .. })
        ));
    }
}

mod serialize_tests {
    use super::*;

    #[test]
    fn test_to_document_with_links() {
        let collection = Collection::new("http://example.com")
            .with_links(vec![Link::new("href", "rel")])
            .unwrap();
        assert_eq!(
            collection.to_document(),
            json!({
                "collection": {
                    "version": "1.0",
                    "href": "http://example.com",
                    "links": [{"href": "href", "rel": "rel"}]
                }
            })
        );
    }

    #[test]
    fn test_to_document_with_items() {
        let collection = Collection::new("http://example.com")
            .with_items(vec![Item::new().with_href("href")])
            .unwrap();
        assert_eq!(
            collection.to_document(),
            json!({
                "collection": {
                    "version": "1.0",
                    "href": "http://example.com",
                    "items": [{"href": "href"}]
                }
            })
        );
    }

    #[test]
    fn test_to_document_full() {
        let expected = json!({
            "collection": {
                "version": "1.0",
                "href": "http://example.com",
                "links": [{
                    "href": "href", "rel": "rel", "name": "name",
                    "render": "render", "prompt": "prompt"
                }],
                "items": [{
                    "href": "href",
                    "data": [{"name": "name", "value": "value", "prompt": "prompt"}],
                    "links": [{
                        "href": "href", "rel": "rel", "name": "name",
                        "render": "render", "prompt": "prompt"
                    }]
                }],
                "queries": [{
                    "href": "href", "rel": "rel", "name": "name", "prompt": "prompt",
                    "data": [{"name": "name", "value": "value", "prompt": "prompt"}]
                }],
                "template": {
                    "data": [{"name": "name", "value": "value", "prompt": "prompt"}]
                },
                "error": {"code": "code", "message": "message", "title": "title"}
            }
        });
        assert_eq!(full_collection().to_document(), expected);
    }

    #[test]
    fn test_empty_template_keeps_data() {
        let collection = Collection::new("h").with_template(Template::new());
        assert_eq!(
            collection.to_document()["collection"]["template"],
            json!({"data": []})
        );
        assert_eq!(Template::new().to_document(), json!({"template": {"data": []}}));
    }

    #[test]
    fn test_empty_error_keeps_wrapper() {
        assert_eq!(Error::new().to_document(), json!({"error": {}}));
        let collection = Collection::new("h").with_error(Error::new());
        assert_eq!(collection.to_document()["collection"]["error"], json!({}));
    }

    #[test]
    fn test_round_trip_full() {
        let collection = full_collection();
        let text = collection.to_json().unwrap();
        assert_eq!(Collection::parse(&text).unwrap(), collection);
        assert_eq!(text, collection.to_string());
    }

    #[test]
    fn test_round_trip_keeps_empty_strings() {
        let item = Item::new()
            .with_href("")
            .with_data(vec![Data::new("note").with_value("")])
            .unwrap();
        let collection = Collection::new("h")
            .with_items(vec![item])
            .unwrap()
            .with_error(Error::new().with_code("").with_message("").with_title(""));
        let text = collection.to_json().unwrap();
        assert_eq!(Collection::parse(&text).unwrap(), collection);
        assert_eq!(
            collection.to_document()["collection"]["error"],
            json!({"code": "", "message": "", "title": ""})
        );
        assert_eq!(collection.to_document()["collection"]["items"][0]["href"], json!(""));
    }

    #[test]
    fn test_round_trip_keeps_explicit_null_value() {
        let template =
            Template::with_data(vec![Data::new("cleared").with_value(serde_json::Value::Null)])
                .unwrap();
        let collection = Collection::new("h").with_template(template);
        let text = collection.to_json().unwrap();
        assert!(text.contains(r#""value":null"#));
        let back = Collection::parse(&text).unwrap();
        assert_eq!(back, collection);
        let cleared = back.template().unwrap().lookup("cleared").unwrap();
        assert_eq!(
            cleared.one().and_then(|d| d.value.clone()),
            Some(serde_json::Value::Null)
        );
    }

    #[test]
    fn test_serde_integration() {
        let collection = full_collection();
        let value = serde_json::to_value(&collection).unwrap();
        assert_eq!(value, collection.to_value());
        let back: Collection = serde_json::from_value(value).unwrap();
        assert_eq!(back, collection);
    }
}

mod search_tests {
    use super::*;

    #[test]
    fn test_dual_key_find() {
        let links = Array::<Link>::new(
            "links",
            vec![
                Member::Raw(json!({"href": "a", "rel": "foo", "name": "bar"})),
                Member::Raw(json!({"href": "b", "rel": "bar"})),
            ],
        )
        .unwrap();

        let found = links.find(Some("bar"), Some("foo"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].href, "a");
        assert!(links.find(Some("foo"), Some("bar")).is_empty());
    }

    #[test]
    fn test_cardinality_sensitive_lookup() {
        let template = Template::with_data(vec![
            Data::new("foo").with_value(1),
            Data::new("foo").with_value(2),
            Data::new("bar"),
        ])
        .unwrap();

        assert_eq!(template.lookup("bar").unwrap().one(), Some(&Data::new("bar")));

        let foo = template.lookup("foo").unwrap();
        assert!(foo.one().is_none());
        assert_eq!(foo.into_vec().len(), 2);

        assert_eq!(
            template.lookup("baz"),
            Err(ModelError::AttributeNotFound {
                key: "baz".to_string()
            })
        );
    }

    #[test]
    fn test_queries_by_rel() {
        let collection = full_collection();
        let query = collection.queries().get(Some("name"), Some("rel")).unwrap();
        assert_eq!(query.properties(), vec!["name"]);
        assert!(collection.queries().get(None, Some("missing")).is_err());
    }

    #[test]
    fn test_mutation_through_containers() {
        let mut collection = Collection::new("h");
        collection.links_mut().push(Link::new("a", "next"));
        collection.items_mut().push(Item::new().with_href("i"));
        assert_eq!(collection.links().len(), 1);
        assert_eq!(collection.items()[0].href.as_deref(), Some("i"));
    }
}

mod template_document_tests {
    use super::*;

    #[test]
    fn test_parse_template_document() {
        let template = Template::parse(r#"{"template": {"data": [{"name": "email"}]}}"#).unwrap();
        assert_eq!(template.properties(), vec!["email"]);
        assert_eq!(
            template.to_json().unwrap(),
            r#"{"template":{"data":[{"name":"email"}]}}"#
        );
    }

    #[test]
    fn test_parse_template_rejects_wrapped_document() {
        let result = Template::parse(r#"{"collection": {"template": {"data": []}}}"#);
        assert_eq!(result, Err(ModelError::InvalidDocument("template")));
    }

    #[test]
    fn test_parse_template_rejects_collection_sibling() {
        let result = Template::parse(r#"{"collection":{"href":"h"},"template":{"data":[]}}"#);
        assert_eq!(result, Err(ModelError::InvalidDocument("template")));
    }
}
