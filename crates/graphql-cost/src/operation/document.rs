use crate::ast;
use crate::file_reader;
use crate::operation::FragmentDefinition;
use crate::operation::OperationDefinition;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, DocumentBuildError>;

#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Fragment(FragmentDefinition),
    Operation(OperationDefinition),
}

/// An executable GraphQL document: an ordered sequence of operation and
/// fragment definitions.
///
/// A [`Document`] is deliberately not checked against any
/// [`Schema`](crate::schema::Schema) when it is built. References to
/// unknown fields, types or fragments are reported by the cost estimator
/// when (and only if) it reaches them.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub(crate) definitions: Vec<Definition>,
}
impl Document {
    pub fn definitions(&self) -> &[Definition] {
        self.definitions.as_slice()
    }

    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Fragment(frag_def) => Some(frag_def),
            Definition::Operation(_) => None,
        })
    }

    pub fn from_ast(
        ast_doc: &ast::query::Document,
        file_path: Option<&Path>,
    ) -> Self {
        Self {
            definitions: ast_doc.definitions.iter().map(|def| match def {
                ast::query::Definition::Fragment(ast_frag) =>
                    Definition::Fragment(FragmentDefinition::from_ast(file_path, ast_frag)),
                ast::query::Definition::Operation(ast_op) =>
                    Definition::Operation(OperationDefinition::from_ast(file_path, ast_op)),
            }).collect(),
        }
    }

    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_content(file_path)
            .map_err(|err| DocumentBuildError::DocumentFileReadError(Box::new(err)))?;
        Self::from_str(content.as_str(), Some(file_path))
    }

    pub fn from_str(content: &str, file_path: Option<&Path>) -> Result<Self> {
        let ast_doc = ast::query::parse(content)
            .map_err(|err| DocumentBuildError::ParseError {
                file: file_path.map(|p| p.to_path_buf()),
                err: err.to_string(),
            })?;
        Ok(Self::from_ast(&ast_doc, file_path))
    }

    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Fragment(_) => None,
            Definition::Operation(op_def) => Some(op_def),
        })
    }
}

#[derive(Debug, Error)]
pub enum DocumentBuildError {
    #[error("Failure while trying to read a document file from disk: {0}")]
    DocumentFileReadError(Box<file_reader::ReadContentError>),

    #[error("Error parsing document{}: {err}", file.as_ref().map(|f| format!(" file {f:?}")).unwrap_or_default())]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },
}
