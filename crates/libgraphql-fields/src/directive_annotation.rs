use crate::ast;
use crate::loc;
use crate::Value;
use indexmap::IndexMap;
use std::path::Path;

/// Represents a
/// [directive annotation](https://spec.graphql.org/October2021/#sec-Language.Directives)
/// placed on a field, fragment spread, or inline fragment.
///
/// No directive definitions are consulted: an annotation is just a name paired
/// with a set of named arguments ([`Value`]s). Only `@include` and `@skip`
/// mean anything while flattening; every other annotation is carried along
/// untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub(crate) arguments: IndexMap<String, Value>,
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) name: String,
}
impl DirectiveAnnotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            arguments: IndexMap::new(),
            def_location: loc::SourceLocation::Unspecified,
            name: name.into(),
        }
    }

    /// Shorthand for `@include(if: <condition>)`.
    pub fn include(condition: Value) -> Self {
        Self::new("include").with_argument("if", condition)
    }

    /// Shorthand for `@skip(if: <condition>)`.
    pub fn skip(condition: Value) -> Self {
        Self::new("skip").with_argument("if", condition)
    }

    pub fn with_argument(mut self, name: impl Into<String>, value: Value) -> Self {
        self.arguments.insert(name.into(), value);
        self
    }

    /// A map from ArgumentName -> [`Value`] for all arguments passed to this
    /// [`DirectiveAnnotation`].
    ///
    /// This returns an [`IndexMap`] to guarantee that map entries retain the
    /// same ordering as the order of arguments passed to this annotation.
    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// The name of the directive this annotation refers to (without the
    /// leading `@`).
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        ast_annots: &[ast::operation::Directive],
    ) -> Vec<Self> {
        ast_annots.iter().map(|ast_annot| {
            let mut arguments = IndexMap::new();
            for (arg_name, ast_arg) in ast_annot.arguments.iter() {
                arguments.insert(arg_name.to_string(), Value::from_ast(ast_arg));
            }
            DirectiveAnnotation {
                arguments,
                def_location: loc::SourceLocation::from_execdoc_ast_position(
                    file_path,
                    &ast_annot.position,
                ),
                name: ast_annot.name.to_string(),
            }
        }).collect()
    }
}
