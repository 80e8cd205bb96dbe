use crate::DirectiveAnnotation;
use crate::loc;
use crate::operation::SelectionSet;

#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub(super) def_location: loc::SourceLocation,
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) selection_set: SelectionSet,
    pub(super) type_condition: Option<String>,
}
impl InlineFragment {
    pub fn new(selection_set: SelectionSet) -> Self {
        Self {
            def_location: loc::SourceLocation::Unspecified,
            directives: vec![],
            selection_set,
            type_condition: None,
        }
    }

    pub fn with_directive(mut self, directive: DirectiveAnnotation) -> Self {
        self.directives.push(directive);
        self
    }

    pub fn with_type_condition(mut self, type_name: impl Into<String>) -> Self {
        self.type_condition = Some(type_name.into());
        self
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    /// The name of the type in the `... on TypeName` condition, if any.
    ///
    /// Informational only. No schema is available while flattening, so inline
    /// fragments are always inlined regardless of their type condition.
    pub fn type_condition_name(&self) -> Option<&str> {
        self.type_condition.as_deref()
    }
}
