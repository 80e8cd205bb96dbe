use anyhow::Context;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_fields::flatten::flatten;
use libgraphql_fields::flatten::FlattenOptions;
use libgraphql_fields::operation::ExecutableDocument;
use libgraphql_fields::ResolveInfo;
use libgraphql_fields::VariableValues;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct FlattenCmd {
    #[arg(
        help="Path to a GraphQL executable document (operations and \
             fragments).",
        name="DOCUMENT",
    )]
    pub(super) document_path: PathBuf,

    #[arg(
        help="Response path of the field whose sub-selections should be \
             flattened, e.g. `viewer.users`. Segments are response keys \
             (aliases where given).",
        long,
        required=true,
        value_delimiter='.',
    )]
    pub(super) path: Vec<String>,

    #[arg(
        help="Name of the operation to use when the document defines more \
             than one.",
        long,
    )]
    pub(super) operation: Option<String>,

    #[arg(
        help="Path to a JSON file holding an object of variable values.",
        long,
    )]
    pub(super) variables: Option<PathBuf>,

    #[arg(
        help="Path to a JSON file of flatten options (`decodeArguments`, \
             `excludedFieldNames`, `useAliasAsKey`). Boolean flags given on \
             the command line override the file; `--exclude` names are \
             added to the file's.",
        long,
    )]
    pub(super) options: Option<PathBuf>,

    #[arg(
        default_missing_value="true",
        help="Decode each field's arguments under `__arguments`.",
        long,
        num_args=0..=1,
        require_equals=true,
        value_name="BOOL",
    )]
    pub(super) decode_arguments: Option<bool>,

    #[arg(
        default_missing_value="true",
        help="Key aliased fields as `alias:name`.",
        long,
        num_args=0..=1,
        require_equals=true,
        value_name="BOOL",
    )]
    pub(super) use_alias_as_key: Option<bool>,

    #[arg(
        help="Field names (output keys) to leave out, along with everything \
             beneath them.",
        long,
        value_delimiter=',',
    )]
    pub(super) exclude: Vec<String>,

    #[arg(
        help="Pretty-print the resulting JSON.",
        long,
    )]
    pub(super) pretty: bool,
}
impl FlattenCmd {
    pub(super) fn flatten_options(&self) -> anyhow::Result<FlattenOptions> {
        let mut options = match &self.options {
            Some(options_path) => read_json_file::<FlattenOptions>(options_path)
                .context("Error loading flatten options")?,
            None => FlattenOptions::default(),
        };

        if let Some(decode_arguments) = self.decode_arguments {
            options.decode_arguments = decode_arguments;
        }
        if let Some(use_alias_as_key) = self.use_alias_as_key {
            options.use_alias_as_key = use_alias_as_key;
        }
        Ok(options.with_excluded_field_names(self.exclude.iter().cloned()))
    }

    pub(super) fn flatten_to_json(&self) -> anyhow::Result<serde_json::Value> {
        let options = self.flatten_options()?;
        let variable_values = match &self.variables {
            Some(variables_path) => read_json_file::<VariableValues>(variables_path)
                .context("Error loading variable values")?,
            None => VariableValues::new(),
        };

        log::debug!("Loading executable document from {:#?}.", self.document_path);
        let doc = ExecutableDocument::from_file(&self.document_path)?;

        let response_path: Vec<&str> = self.path.iter().map(String::as_str).collect();
        let field_nodes = doc.field_nodes(self.operation.as_deref(), &response_path)?;
        log::debug!(
            "Found {} field node(s) at `{}`.",
            field_nodes.len(),
            self.path.join("."),
        );

        let info = ResolveInfo::new(doc.fragment_registry(), &variable_values);
        let field_map = flatten(&field_nodes, &info, None, &options)?;
        Ok(field_map.to_json())
    }

    pub(super) fn render(&self) -> anyhow::Result<String> {
        let json = self.flatten_to_json()?;
        let rendered =
            if self.pretty {
                serde_json::to_string_pretty(&json)
            } else {
                serde_json::to_string(&json)
            };
        rendered.context("Error serializing result")
    }
}

#[inherent::inherent]
impl RunnableCommand for FlattenCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        self.render().into()
    }
}

fn read_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Unable to read {path:#?}"))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in {path:#?}"))
}
