use crate::ast;
use std::path::Path;
use std::path::PathBuf;

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// includes an optional PathBuf to the file the position points into.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FilePosition {
    pub col: usize,
    pub file: Option<PathBuf>,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_pos(
        file: Option<&Path>,
        pos: ast::AstPos,
    ) -> Self {
        Self {
            col: pos.column,
            file: file.map(|f| f.to_path_buf()),
            line: pos.line,
        }
    }
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file.display(), self.line, self.col),
            None => write!(f, "{}:{}", self.line, self.col),
        }
    }
}

/// Where a selection node came from.
///
/// Nodes converted from a parsed document carry the position of their AST
/// node. Nodes assembled by hand (e.g. by a host engine that has its own AST)
/// are [`SourceLocation::Unspecified`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SourceLocation {
    ExecutableDocument(FilePosition),
    #[default]
    Unspecified,
}
impl SourceLocation {
    pub(crate) fn from_execdoc_ast_position(
        file_path: Option<&Path>,
        ast_position: &ast::AstPos,
    ) -> Self {
        Self::ExecutableDocument(FilePosition::from_pos(file_path, *ast_position))
    }
}
impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExecutableDocument(pos) => write!(f, "{pos}"),
            Self::Unspecified => write!(f, "<unspecified location>"),
        }
    }
}
