use crate::flatten::flatten;
use crate::flatten::FlattenError;
use crate::flatten::FlattenOptions;
use crate::operation::ExecutableDocument;
use crate::FieldMap;
use crate::ResolveInfo;
use crate::VariableValues;

pub(crate) fn variables(json: serde_json::Value) -> VariableValues {
    serde_json::from_value(json).unwrap()
}

/// Parses `document`, collects the field nodes at `response_path` of its only
/// operation, and flattens them.
pub(crate) fn try_flatten_document(
    document: &str,
    response_path: &[&str],
    variable_values: serde_json::Value,
    options: &FlattenOptions,
) -> Result<FieldMap, FlattenError> {
    let doc = ExecutableDocument::from_str(document, None).unwrap();
    let field_nodes = doc.field_nodes(None, response_path).unwrap();
    let variable_values = variables(variable_values);
    let info = ResolveInfo::new(doc.fragment_registry(), &variable_values);
    flatten(&field_nodes, &info, None, options)
}

pub(crate) fn flatten_document(
    document: &str,
    response_path: &[&str],
    variable_values: serde_json::Value,
    options: &FlattenOptions,
) -> serde_json::Value {
    try_flatten_document(document, response_path, variable_values, options)
        .unwrap()
        .to_json()
}
