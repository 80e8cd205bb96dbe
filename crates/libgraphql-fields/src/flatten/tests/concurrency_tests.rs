use crate::flatten::flatten;
use crate::flatten::FlattenOptions;
use crate::operation::ExecutableDocument;
use crate::tests::test_utils::variables;
use crate::ResolveInfo;
use rayon::prelude::*;
use serde_json::json;

#[test]
fn one_registry_serves_many_concurrent_flattens() {
    let doc = ExecutableDocument::from_str(r#"
        query Q($withEmail: Boolean!, $first: Int) {
          viewer {
            id
            ...Contact
            friends(first: $first) { ...Contact }
          }
        }
        fragment Contact on User { name email @include(if: $withEmail) }
    "#, None).unwrap();
    let field_nodes = doc.field_nodes(Some("Q"), &["viewer"]).unwrap();
    let options = FlattenOptions::new().with_decode_arguments(true);

    let results: Vec<(i64, bool, serde_json::Value)> = (0..64i64)
        .into_par_iter()
        .map(|i| {
            let with_email = i % 2 == 0;
            let variable_values = variables(json!({ "withEmail": with_email, "first": i }));
            let info = ResolveInfo::new(doc.fragment_registry(), &variable_values);
            let field_map = flatten(&field_nodes, &info, None, &options).unwrap();
            (i, with_email, field_map.to_json())
        })
        .collect();

    for (i, with_email, field_map) in results {
        let contact = if with_email {
            json!({ "name": {}, "email": {} })
        } else {
            json!({ "name": {} })
        };
        let mut friends = contact.clone();
        friends["__arguments"] = json!([
            { "first": { "kind": "Variable", "value": i } },
        ]);
        let mut expected = contact;
        expected["id"] = json!({});
        expected["friends"] = friends;

        assert_eq!(field_map, expected);
    }
}
