use crate::ast;
use crate::DirectiveAnnotation;
use crate::loc;
use crate::operation::FieldSelection;
use crate::operation::FragmentSpread;
use crate::operation::InlineFragment;
use crate::operation::Selection;
use crate::Value;
use indexmap::IndexMap;
use std::path::Path;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionSet {
    pub(super) selections: Vec<Selection>,
}
impl SelectionSet {
    pub fn new(selections: Vec<Selection>) -> Self {
        Self { selections }
    }

    /// Converts a `graphql_parser` selection set into a [`SelectionSet`].
    ///
    /// No schema is consulted, so this never fails: field names, fragment
    /// names, and type conditions are carried over as written.
    pub fn from_ast(
        ast_sel_set: &ast::operation::SelectionSet,
        file_path: Option<&Path>,
    ) -> SelectionSet {
        let selections = ast_sel_set.items.iter().map(|ast_selection| {
            match ast_selection {
                ast::operation::Selection::Field(
                    ast::operation::Field {
                        alias,
                        arguments: ast_arguments,
                        directives: ast_directives,
                        name: field_name,
                        position: ast_field_position,
                        selection_set: ast_sub_selection_set,
                    }
                ) => {
                    let mut arguments = IndexMap::new();
                    for (arg_name, ast_arg_value) in ast_arguments {
                        arguments.insert(
                            arg_name.to_string(),
                            Value::from_ast(ast_arg_value),
                        );
                    }

                    // graphql_parser represents a leaf field as an empty
                    // selection set.
                    let selection_set =
                        if ast_sub_selection_set.items.is_empty() {
                            None
                        } else {
                            Some(SelectionSet::from_ast(
                                ast_sub_selection_set,
                                file_path,
                            ))
                        };

                    Selection::Field(FieldSelection {
                        alias: alias.clone(),
                        arguments,
                        def_location: loc::SourceLocation::from_execdoc_ast_position(
                            file_path,
                            ast_field_position,
                        ),
                        directives: DirectiveAnnotation::from_ast(
                            file_path,
                            ast_directives,
                        ),
                        name: field_name.to_string(),
                        selection_set,
                    })
                },

                ast::operation::Selection::FragmentSpread(
                    ast::operation::FragmentSpread {
                        directives: ast_directives,
                        fragment_name,
                        position: ast_fragspread_position,
                    }
                ) => Selection::FragmentSpread(FragmentSpread {
                    def_location: loc::SourceLocation::from_execdoc_ast_position(
                        file_path,
                        ast_fragspread_position,
                    ),
                    directives: DirectiveAnnotation::from_ast(
                        file_path,
                        ast_directives,
                    ),
                    fragment_name: fragment_name.to_string(),
                }),

                ast::operation::Selection::InlineFragment(
                    ast::operation::InlineFragment {
                        directives: ast_directives,
                        position: ast_inlinespread_position,
                        selection_set: ast_sub_selection_set,
                        type_condition: ast_type_condition,
                    }
                ) => Selection::InlineFragment(InlineFragment {
                    def_location: loc::SourceLocation::from_execdoc_ast_position(
                        file_path,
                        ast_inlinespread_position,
                    ),
                    directives: DirectiveAnnotation::from_ast(
                        file_path,
                        ast_directives,
                    ),
                    selection_set: SelectionSet::from_ast(
                        ast_sub_selection_set,
                        file_path,
                    ),
                    type_condition: ast_type_condition.as_ref().map(
                        |ast_type_cond| match ast_type_cond {
                            ast::operation::TypeCondition::On(type_name) =>
                                type_name.to_string(),
                        }
                    ),
                }),
            }
        }).collect();

        SelectionSet {
            selections,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn selections(&self) -> &Vec<Selection> {
        &self.selections
    }
}
impl FromIterator<Selection> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = Selection>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
