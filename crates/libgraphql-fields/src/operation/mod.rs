mod executable_document;
mod field_selection;
mod fragment;
mod fragment_registry;
mod fragment_registry_builder;
mod fragment_spread;
mod inline_fragment;
mod operation;
mod operation_kind;
mod selection;
mod selection_set;

pub use executable_document::ExecutableDocument;
pub use executable_document::ExecutableDocumentBuildError;
pub use field_selection::FieldSelection;
pub use fragment::Fragment;
pub use fragment_registry::FragmentRegistry;
pub use fragment_registry_builder::FragmentRegistryBuilder;
pub use fragment_registry_builder::FragmentRegistryBuildError;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use operation::Operation;
pub use operation_kind::OperationKind;
pub use selection::Selection;
pub use selection_set::SelectionSet;
