use crate::flatten::flatten;
use crate::flatten::FlattenError;
use crate::flatten::FlattenOptions;
use crate::operation::FieldSelection;
use crate::operation::FragmentRegistry;
use crate::operation::SelectionSet;
use crate::tests::test_utils::flatten_document;
use crate::tests::test_utils::variables;
use crate::ResolveInfo;
use crate::Value;
use crate::ValueKind;
use serde_json::json;

fn decoding() -> FlattenOptions {
    FlattenOptions::new().with_decode_arguments(true)
}

#[test]
fn decodes_literal_arguments_in_order() {
    let query = r#"
        query Query($tag: String!) {
            person {
                name
                hobbies(first: 2, active: true, tag: $tag) {
                    name
                }
            }
        }
    "#;

    assert_eq!(
        flatten_document(query, &["person"], json!({ "tag": "outdoor" }), &decoding()),
        json!({
            "name": {},
            "hobbies": {
                "name": {},
                "__arguments": [
                    { "first": { "kind": "IntValue", "value": 2 } },
                    { "active": { "kind": "BooleanValue", "value": true } },
                    { "tag": { "kind": "Variable", "value": "outdoor" } },
                ],
            },
        }),
    );
}

#[test]
fn decodes_scalar_literal_arguments() {
    let query = r#"{ root { users(first: 25, active: true, tag: "x") { id } } }"#;

    assert_eq!(
        flatten_document(query, &["root"], json!({}), &decoding()),
        json!({
            "users": {
                "id": {},
                "__arguments": [
                    { "first": { "kind": "IntValue", "value": 25 } },
                    { "active": { "kind": "BooleanValue", "value": true } },
                    { "tag": { "kind": "StringValue", "value": "x" } },
                ],
            },
        }),
    );
}

#[test]
fn decodes_lists_containing_variables() {
    let query = r#"query Q($v: String) { root { things(ids: ["a", $v]) { id } } }"#;

    assert_eq!(
        flatten_document(query, &["root"], json!({ "v": "b" }), &decoding()),
        json!({
            "things": {
                "id": {},
                "__arguments": [
                    { "ids": { "kind": "ListValue", "value": ["a", "b"] } },
                ],
            },
        }),
    );
}

#[test]
fn decodes_every_literal_kind() {
    let query = r#"
        {
          root {
            leaf(
              ratio: 1.5,
              label: "x",
              order: DESC,
              nothing: null,
              filter: { min: 1, tags: [RED, "blue"], nested: { on: false } },
            )
          }
        }
    "#;

    assert_eq!(
        flatten_document(query, &["root"], json!({}), &decoding()),
        json!({
            "leaf": {
                "__arguments": [
                    { "ratio": { "kind": "FloatValue", "value": 1.5 } },
                    { "label": { "kind": "StringValue", "value": "x" } },
                    { "order": { "kind": "EnumValue", "value": "DESC" } },
                    { "nothing": { "kind": "NullValue", "value": null } },
                    {
                        "filter": {
                            "kind": "ObjectValue",
                            "value": {
                                "min": 1,
                                "nested": { "on": false },
                                "tags": ["RED", "blue"],
                            },
                        },
                    },
                ],
            },
        }),
    );
}

#[test]
fn undefined_variables_decode_to_null() {
    let query = "query Q($missing: Int) { root { page(size: $missing) } }";

    assert_eq!(
        flatten_document(query, &["root"], json!({}), &decoding()),
        json!({
            "page": {
                "__arguments": [
                    { "size": { "kind": "Variable", "value": null } },
                ],
            },
        }),
    );
}

#[test]
fn structured_variable_values_are_copied_verbatim() {
    let query = "query Q($input: Filter) { root { search(input: $input) } }";

    assert_eq!(
        flatten_document(
            query,
            &["root"],
            json!({ "input": { "q": "rust", "limit": 10 } }),
            &decoding(),
        ),
        json!({
            "search": {
                "__arguments": [
                    {
                        "input": {
                            "kind": "Variable",
                            "value": { "q": "rust", "limit": 10 },
                        },
                    },
                ],
            },
        }),
    );
}

#[test]
fn arguments_are_ignored_unless_decoding_is_enabled() {
    let query = "{ root { hobbies(first: 2) { name } } }";

    assert_eq!(
        flatten_document(query, &["root"], json!({}), &FlattenOptions::default()),
        json!({ "hobbies": { "name": {} } }),
    );
}

#[test]
fn fields_without_arguments_get_no_arguments_entry() {
    let query = "{ root { a { b } } }";

    let field_map = crate::tests::test_utils::try_flatten_document(
        query,
        &["root"],
        json!({}),
        &decoding(),
    ).unwrap();

    assert!(field_map.get("a").unwrap().arguments().is_none());
    assert_eq!(field_map.to_json(), json!({ "a": { "b": {} } }));
}

#[test]
fn last_occurrence_with_arguments_wins() {
    let query = r#"
        {
          root {
            posts(first: 1) { id }
            posts(last: 5, after: "c") { title }
            posts { body }
          }
        }
    "#;

    assert_eq!(
        flatten_document(query, &["root"], json!({}), &decoding()),
        json!({
            "posts": {
                "id": {},
                "title": {},
                "body": {},
                "__arguments": [
                    { "last": { "kind": "IntValue", "value": 5 } },
                    { "after": { "kind": "StringValue", "value": "c" } },
                ],
            },
        }),
    );
}

#[test]
fn arguments_on_fields_inside_fragments_are_decoded() {
    let query = r#"
        query Q($n: Int) { root { ...F } }
        fragment F on Root { items(limit: $n) { id } }
    "#;

    assert_eq!(
        flatten_document(query, &["root"], json!({ "n": 3 }), &decoding()),
        json!({
            "items": {
                "id": {},
                "__arguments": [
                    { "limit": { "kind": "Variable", "value": 3 } },
                ],
            },
        }),
    );
}

#[test]
fn malformed_numeric_literals_are_errors() {
    let variable_values = variables(json!({}));
    let info = ResolveInfo::new(FragmentRegistry::empty(), &variable_values);
    let root_with = |value: Value| {
        vec![
            FieldSelection::new("root")
                .with_selection_set(SelectionSet::new(vec![
                    FieldSelection::new("leaf").with_argument("n", value).into(),
                ]))
                .into(),
        ]
    };

    let int_result = flatten(
        &root_with(Value::Int("12abc".to_string())),
        &info,
        None,
        &decoding(),
    );
    assert!(matches!(
        int_result,
        Err(FlattenError::InvalidIntLiteral { literal, .. }) if literal == "12abc"
    ));

    let float_result = flatten(
        &root_with(Value::Float("1.2.3".to_string())),
        &info,
        None,
        &decoding(),
    );
    assert!(matches!(
        float_result,
        Err(FlattenError::InvalidFloatLiteral { literal, .. }) if literal == "1.2.3"
    ));

    let non_finite_result = flatten(
        &root_with(Value::Float("inf".to_string())),
        &info,
        None,
        &decoding(),
    );
    assert_eq!(
        non_finite_result,
        Err(FlattenError::NonFiniteFloatLiteral { literal: "inf".to_string() }),
    );
}

#[test]
fn decoded_argument_kinds_match_the_literal() {
    let query = "query Q($v: Int) { root { f(a: 1, b: $v, c: [1]) } }";
    let field_map = crate::tests::test_utils::try_flatten_document(
        query,
        &["root"],
        json!({ "v": 1 }),
        &decoding(),
    ).unwrap();

    let kinds: Vec<ValueKind> = field_map.get("f").unwrap()
        .arguments()
        .unwrap()
        .iter()
        .flat_map(|entry| entry.values().map(|decoded| decoded.kind))
        .collect();
    assert_eq!(
        kinds,
        vec![ValueKind::IntValue, ValueKind::Variable, ValueKind::ListValue],
    );
}
