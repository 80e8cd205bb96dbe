use clap::Parser;
use crate::commands::CommandEnum;
use crate::commands::flatten::FlattenCmd;
use crate::Cli;
use serde_json::json;
use std::path::PathBuf;

const DOCUMENT: &str = r#"
    query UserProfile($withFriends: Boolean!) {
      viewer {
        __typename
        pic: picture(size: 64)
        ...Profile
        friends(first: 10) @include(if: $withFriends) { name }
      }
    }
    fragment Profile on User { name }
"#;

/// Writes `content` to a file unique to the calling test.
fn write_fixture(test_name: &str, file_name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join(format!("graphql-fields-{}-{test_name}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(file_name);
    std::fs::write(&path, content).unwrap();
    path
}

fn parse_flatten_cmd(args: &[&str]) -> FlattenCmd {
    let cli = Cli::try_parse_from(
        ["graphql-fields", "flatten"].into_iter().chain(args.iter().copied()),
    ).unwrap();
    match cli.cmd {
        Some(CommandEnum::Flatten(cmd)) => *cmd,
        None => panic!("Expected the flatten subcommand"),
    }
}

#[test]
fn path_and_exclusions_are_split_on_delimiters() {
    let cmd = parse_flatten_cmd(&[
        "doc.graphql",
        "--path", "viewer.friends",
        "--exclude", "__typename,cursor",
    ]);

    assert_eq!(cmd.path, vec!["viewer".to_string(), "friends".to_string()]);
    assert_eq!(cmd.exclude, vec!["__typename".to_string(), "cursor".to_string()]);
    assert_eq!(cmd.decode_arguments, None);
    assert_eq!(cmd.use_alias_as_key, None);
    assert!(!cmd.pretty);
}

#[test]
fn path_is_required() {
    let result = Cli::try_parse_from(["graphql-fields", "flatten", "doc.graphql"]);
    assert!(result.is_err());
}

#[test]
fn boolean_flags_take_an_optional_value() {
    let cmd = parse_flatten_cmd(&[
        "doc.graphql",
        "--path", "viewer",
        "--decode-arguments",
        "--use-alias-as-key=false",
    ]);
    assert_eq!(cmd.decode_arguments, Some(true));
    assert_eq!(cmd.use_alias_as_key, Some(false));
}

#[test]
fn flags_override_the_options_file_in_both_directions() {
    let options_path = write_fixture(
        "options_layering",
        "options.json",
        r#"{ "decodeArguments": true, "excludedFieldNames": ["__typename"] }"#,
    );
    let options_path = options_path.to_str().unwrap();

    let from_file = parse_flatten_cmd(&[
        "doc.graphql",
        "--path", "viewer",
        "--options", options_path,
    ]).flatten_options().unwrap();
    assert!(from_file.decode_arguments);
    assert!(!from_file.use_alias_as_key);

    let overridden = parse_flatten_cmd(&[
        "doc.graphql",
        "--path", "viewer",
        "--options", options_path,
        "--decode-arguments=false",
        "--use-alias-as-key",
        "--exclude", "cursor",
    ]).flatten_options().unwrap();
    assert!(!overridden.decode_arguments);
    assert!(overridden.use_alias_as_key);
    assert_eq!(
        overridden.excluded_field_names.iter().collect::<Vec<_>>(),
        vec!["__typename", "cursor"],
    );
}

#[test]
fn flattens_the_field_at_the_given_path() {
    let document_path = write_fixture("flatten_path", "doc.graphql", DOCUMENT);
    let variables_path = write_fixture(
        "flatten_path",
        "variables.json",
        r#"{ "withFriends": true }"#,
    );
    let cmd = parse_flatten_cmd(&[
        document_path.to_str().unwrap(),
        "--path", "viewer",
        "--variables", variables_path.to_str().unwrap(),
        "--use-alias-as-key",
        "--exclude", "__typename",
        "--decode-arguments",
    ]);

    assert_eq!(
        cmd.flatten_to_json().unwrap(),
        json!({
            "pic:picture": {
                "__arguments": [
                    { "size": { "kind": "IntValue", "value": 64 } },
                ],
            },
            "name": {},
            "friends": {
                "name": {},
                "__arguments": [
                    { "first": { "kind": "IntValue", "value": 10 } },
                ],
            },
        }),
    );
}

#[test]
fn missing_variables_file_is_reported() {
    let document_path = write_fixture("missing_variables", "doc.graphql", DOCUMENT);
    let cmd = parse_flatten_cmd(&[
        document_path.to_str().unwrap(),
        "--path", "viewer",
        "--variables", "/this/path/does/not/exist.json",
    ]);

    let err = cmd.flatten_to_json().unwrap_err();
    assert!(format!("{err:#}").contains("Error loading variable values"));
}

#[tokio::test]
async fn run_prints_json_or_an_error() {
    let document_path = write_fixture("run", "doc.graphql", DOCUMENT);
    let document_path = document_path.to_str().unwrap();

    let cli = Cli::try_parse_from(["graphql-fields"]).unwrap();

    let ok = parse_flatten_cmd(&[document_path, "--path", "viewer"])
        .run(&cli)
        .await;
    assert!(ok.stderr.is_none());
    assert_eq!(
        ok.stdout.as_deref(),
        Some(r#"{"__typename":{},"picture":{},"name":{}}"#),
    );

    let unknown_path = parse_flatten_cmd(&[document_path, "--path", "viewer.nope"])
        .run(&cli)
        .await;
    assert!(unknown_path.stdout.is_none());
    assert!(unknown_path.stderr.unwrap().contains("viewer.nope"));
}

#[test]
fn pretty_output_keeps_first_seen_order() {
    let document_path = write_fixture("pretty", "doc.graphql", DOCUMENT);
    let cmd = parse_flatten_cmd(&[
        document_path.to_str().unwrap(),
        "--path", "viewer",
        "--pretty",
    ]);

    assert_eq!(
        cmd.render().unwrap(),
        "{\n  \"__typename\": {},\n  \"picture\": {},\n  \"name\": {}\n}",
    );
}
