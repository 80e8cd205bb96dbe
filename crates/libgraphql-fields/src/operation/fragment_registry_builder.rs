use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::operation::Fragment;
use crate::operation::FragmentRegistry;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, Vec<FragmentRegistryBuildError>>;

/// Collects fragment definitions into a [`FragmentRegistry`].
///
/// Only name uniqueness is checked here. Spreads are resolved lazily while
/// flattening, which is also where spread cycles and spreads of unknown
/// fragments are reported.
///
/// ```
/// use libgraphql_fields::operation::FragmentRegistryBuilder;
///
/// let mut builder = FragmentRegistryBuilder::new();
/// builder.add_from_document_str(
///     "fragment UserFields on User { id name } fragment PostFields on Post { title }",
///     None,
/// ).unwrap();
///
/// let registry = builder.build();
/// assert!(registry.get("PostFields").is_some());
/// ```
#[derive(Debug, Default)]
pub struct FragmentRegistryBuilder {
    fragments: HashMap<String, Fragment>,
}

impl FragmentRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_fragment(
        &mut self,
        fragment: Fragment,
    ) -> std::result::Result<(), FragmentRegistryBuildError> {
        if let Some(existing) = self.fragments.get(fragment.name()) {
            return Err(FragmentRegistryBuildError::DuplicateFragmentDefinition {
                fragment_name: fragment.name,
                first_def_location: existing.def_location.clone(),
                second_def_location: fragment.def_location,
            });
        }

        self.fragments.insert(fragment.name.clone(), fragment);
        Ok(())
    }

    /// Adds every fragment definition in `ast_doc`; operations are ignored.
    ///
    /// Every duplicate in the document is reported, not just the first.
    /// Non-duplicate fragments are still added.
    pub fn add_from_document_ast(
        &mut self,
        ast_doc: &ast::operation::Document,
        file_path: Option<&Path>,
    ) -> Result<()> {
        let errors: Vec<_> = ast_doc.definitions.iter()
            .filter_map(|def| match def {
                ast::operation::Definition::Fragment(frag_def) =>
                    self.add_fragment(Fragment::from_ast(frag_def, file_path)).err(),
                ast::operation::Definition::Operation(_) => None,
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn add_from_document_file(&mut self, file_path: impl AsRef<Path>) -> Result<()> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_content(file_path)
            .map_err(|err| vec![FragmentRegistryBuildError::FileReadError(Arc::new(err))])?;
        self.add_from_document_str(content, Some(file_path))
    }

    pub fn add_from_document_str(
        &mut self,
        content: impl AsRef<str>,
        file_path: Option<&Path>,
    ) -> Result<()> {
        let ast_doc = ast::operation::parse(content.as_ref())
            .map_err(|err| vec![FragmentRegistryBuildError::ParseError(Arc::new(err))])?;
        self.add_from_document_ast(&ast_doc, file_path)
    }

    pub fn build(self) -> FragmentRegistry {
        log::debug!("Built a registry of {} fragment(s).", self.fragments.len());
        FragmentRegistry {
            fragments: self.fragments,
        }
    }
}

#[derive(Clone, Debug, Error)]
pub enum FragmentRegistryBuildError {
    #[error(
        "Fragment `{fragment_name}` is defined twice (at {first_def_location} \
        and {second_def_location})"
    )]
    DuplicateFragmentDefinition {
        fragment_name: String,
        first_def_location: loc::SourceLocation,
        second_def_location: loc::SourceLocation,
    },

    #[error("Error reading fragment document: {0}")]
    FileReadError(Arc<file_reader::ReadContentError>),

    #[error("Error parsing fragment document: {0}")]
    ParseError(Arc<ast::operation::ParseError>),
}
