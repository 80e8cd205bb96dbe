use crate::ast;
use crate::DirectiveAnnotation;
use crate::loc;
use crate::operation::SelectionSet;
use std::path::Path;

/// A named fragment definition (`fragment Name on Type { ... }`).
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    pub(super) def_location: loc::SourceLocation,
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) name: String,
    pub(super) selection_set: SelectionSet,
    pub(super) type_condition: String,
}

impl Fragment {
    pub fn new(
        name: impl Into<String>,
        type_condition: impl Into<String>,
        selection_set: SelectionSet,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::Unspecified,
            directives: vec![],
            name: name.into(),
            selection_set,
            type_condition: type_condition.into(),
        }
    }

    pub fn from_ast(
        frag_def: &ast::operation::FragmentDefinition,
        file_path: Option<&Path>,
    ) -> Self {
        let ast::operation::TypeCondition::On(type_name) =
            &frag_def.type_condition;

        Self {
            def_location: loc::SourceLocation::from_execdoc_ast_position(
                file_path,
                &frag_def.position,
            ),
            directives: DirectiveAnnotation::from_ast(
                file_path,
                &frag_def.directives,
            ),
            name: frag_def.name.to_string(),
            selection_set: SelectionSet::from_ast(
                &frag_def.selection_set,
                file_path,
            ),
            type_condition: type_name.to_string(),
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn type_condition_name(&self) -> &str {
        self.type_condition.as_str()
    }
}
