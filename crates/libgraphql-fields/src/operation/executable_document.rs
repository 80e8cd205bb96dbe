use crate::ast;
use crate::DirectiveAnnotation;
use crate::file_reader;
use crate::loc;
use crate::operation::FieldSelection;
use crate::operation::FragmentRegistry;
use crate::operation::FragmentRegistryBuilder;
use crate::operation::FragmentRegistryBuildError;
use crate::operation::Operation;
use crate::operation::OperationKind;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, ExecutableDocumentBuildError>;

/// The operations and fragments of one parsed executable document.
///
/// This is a convenience for hosts (and tests) that start from query text: it
/// produces the same selection nodes a GraphQL execution engine would hand to
/// a resolver, so they can be passed straight to
/// [`flatten()`](crate::flatten::flatten).
///
/// ```
/// use libgraphql_fields::operation::ExecutableDocument;
///
/// let doc = ExecutableDocument::from_str(
///     "query Q { viewer { users { id } } }",
///     None,
/// ).unwrap();
///
/// let field_nodes = doc.field_nodes(Some("Q"), &["viewer", "users"]).unwrap();
/// assert_eq!(field_nodes.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ExecutableDocument {
    fragment_registry: FragmentRegistry,
    operations: Vec<Operation>,
}

impl ExecutableDocument {
    pub fn from_ast(
        ast_doc: &ast::operation::Document,
        file_path: Option<&Path>,
    ) -> Result<Self> {
        let mut fragments = FragmentRegistryBuilder::new();
        fragments.add_from_document_ast(ast_doc, file_path)
            .map_err(ExecutableDocumentBuildError::FragmentRegistry)?;
        let fragment_registry = fragments.build();

        let mut operations = vec![];
        for def in &ast_doc.definitions {
            use ast::operation::Definition as Def;
            use ast::operation::OperationDefinition as OpDef;
            let (kind, name, position, directives, selection_set) = match def {
                Def::Fragment(_) => continue,

                Def::Operation(OpDef::SelectionSet(sel_set)) => (
                    OperationKind::Query,
                    None,
                    &sel_set.span.0,
                    &[][..],
                    sel_set,
                ),

                Def::Operation(OpDef::Query(query)) => (
                    OperationKind::Query,
                    query.name.clone(),
                    &query.position,
                    &query.directives[..],
                    &query.selection_set,
                ),

                Def::Operation(OpDef::Mutation(mutation)) => (
                    OperationKind::Mutation,
                    mutation.name.clone(),
                    &mutation.position,
                    &mutation.directives[..],
                    &mutation.selection_set,
                ),

                Def::Operation(OpDef::Subscription(subscription)) => (
                    OperationKind::Subscription,
                    subscription.name.clone(),
                    &subscription.position,
                    &subscription.directives[..],
                    &subscription.selection_set,
                ),
            };

            operations.push(Operation {
                def_location: loc::SourceLocation::from_execdoc_ast_position(
                    file_path,
                    position,
                ),
                directives: DirectiveAnnotation::from_ast(file_path, directives),
                kind,
                name,
                selection_set: SelectionSet::from_ast(selection_set, file_path),
            });
        }

        Ok(Self {
            fragment_registry,
            operations,
        })
    }

    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_content(file_path)
            .map_err(|err| ExecutableDocumentBuildError::FileReadError(Arc::new(err)))?;
        Self::from_str(content, Some(file_path))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(
        content: impl AsRef<str>,
        file_path: Option<&Path>,
    ) -> Result<Self> {
        let ast_doc = ast::operation::parse(content.as_ref())
            .map_err(|err| ExecutableDocumentBuildError::ParseError(Arc::new(err)))?;
        Self::from_ast(&ast_doc, file_path)
    }

    pub fn fragment_registry(&self) -> &FragmentRegistry {
        &self.fragment_registry
    }

    /// Looks up an operation by name.
    ///
    /// Passing `None` selects the document's only operation; this fails if
    /// the document contains more than one.
    pub fn operation(&self, operation_name: Option<&str>) -> Result<&Operation> {
        match operation_name {
            Some(name) =>
                self.operations.iter()
                    .find(|op| op.name() == Some(name))
                    .ok_or_else(|| ExecutableDocumentBuildError::UnknownOperation {
                        operation_name: Some(name.to_string()),
                    }),

            None => match self.operations.as_slice() {
                [op] => Ok(op),
                [] => Err(ExecutableDocumentBuildError::UnknownOperation {
                    operation_name: None,
                }),
                ops => Err(ExecutableDocumentBuildError::AmbiguousOperation {
                    num_operations: ops.len(),
                }),
            },
        }
    }

    pub fn operations(&self) -> &Vec<Operation> {
        &self.operations
    }

    /// Returns the field selections for the field at `response_path` within
    /// an operation: the "field nodes" an execution engine passes to the
    /// resolver of that field.
    ///
    /// Each path segment is a response key (the alias if one was given,
    /// otherwise the field name). Every field with that response key is
    /// collected, looking through fragment spreads and inline fragments, and
    /// the next segment is matched against the union of their sub-selections.
    /// Directives are not evaluated here; that happens during flattening.
    pub fn field_nodes(
        &self,
        operation_name: Option<&str>,
        response_path: &[&str],
    ) -> Result<Vec<Selection>> {
        let operation = self.operation(operation_name)?;
        let mut selection_sets = vec![operation.selection_set()];
        let mut field_nodes: Vec<&FieldSelection> = vec![];

        for (depth, response_key) in response_path.iter().enumerate() {
            field_nodes.clear();
            for selection_set in selection_sets.iter().copied() {
                self.collect_fields_by_response_key(
                    selection_set,
                    response_key,
                    &mut HashSet::new(),
                    &mut field_nodes,
                );
            }

            if field_nodes.is_empty() {
                return Err(ExecutableDocumentBuildError::UnknownResponsePath {
                    response_path: response_path[..=depth]
                        .iter()
                        .map(|segment| segment.to_string())
                        .collect(),
                });
            }

            selection_sets = field_nodes.iter()
                .copied()
                .filter_map(FieldSelection::selection_set)
                .collect();
        }

        Ok(field_nodes.into_iter()
            .cloned()
            .map(Selection::Field)
            .collect())
    }

    fn collect_fields_by_response_key<'a>(
        &'a self,
        selection_set: &'a SelectionSet,
        response_key: &str,
        visited_fragments: &mut HashSet<&'a str>,
        fields: &mut Vec<&'a FieldSelection>,
    ) {
        for selection in selection_set.selections() {
            match selection {
                Selection::Field(field) => {
                    if field.selected_name() == response_key {
                        fields.push(field);
                    }
                },

                Selection::FragmentSpread(spread) => {
                    let fragment_name = spread.fragment_name();
                    if !visited_fragments.insert(fragment_name) {
                        continue;
                    }
                    // Unknown fragments are reported by flatten().
                    if let Some(fragment) = self.fragment_registry.get(fragment_name) {
                        self.collect_fields_by_response_key(
                            fragment.selection_set(),
                            response_key,
                            visited_fragments,
                            fields,
                        );
                    }
                },

                Selection::InlineFragment(inline) => {
                    self.collect_fields_by_response_key(
                        inline.selection_set(),
                        response_key,
                        visited_fragments,
                        fields,
                    );
                },
            }
        }
    }
}

#[derive(Clone, Debug, Error)]
pub enum ExecutableDocumentBuildError {
    #[error("Document contains {num_operations} operations; an operation name is required")]
    AmbiguousOperation {
        num_operations: usize,
    },

    #[error("Error reading executable document: {0}")]
    FileReadError(Arc<file_reader::ReadContentError>),

    #[error("Invalid fragment definitions: {0:?}")]
    FragmentRegistry(Vec<FragmentRegistryBuildError>),

    #[error("Error parsing executable document: {0}")]
    ParseError(Arc<ast::operation::ParseError>),

    #[error("No operation named {operation_name:?} in document")]
    UnknownOperation {
        operation_name: Option<String>,
    },

    #[error("No field selected at response path `{}`", response_path.join("."))]
    UnknownResponsePath {
        response_path: Vec<String>,
    },
}
