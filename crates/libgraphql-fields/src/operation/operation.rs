use crate::DirectiveAnnotation;
use crate::loc;
use crate::operation::OperationKind;
use crate::operation::SelectionSet;

/// A query, mutation, or subscription from an executable document.
///
/// Variable definitions are intentionally not modelled: resolving variable
/// values is the job of the host engine, which hands the resolved values to
/// the flattener directly.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    pub(super) def_location: loc::SourceLocation,
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) kind: OperationKind,
    pub(super) name: Option<String>,
    pub(super) selection_set: SelectionSet,
}
impl Operation {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }
}
