use crate::ast;
use crate::loc;
use crate::Value;
use indexmap::IndexMap;
use std::path::Path;

/// A directive applied within an executable document, e.g.
/// `@include(if: $withFriends)`.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub(crate) arguments: IndexMap<String, Value>,
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) name: String,
}
impl DirectiveAnnotation {
    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        directives: &[ast::query::Directive],
    ) -> Vec<Self> {
        directives.iter().map(|ast_annot| Self {
            arguments: ast_annot.arguments.iter().map(|(arg_name, ast_arg)| (
                arg_name.to_string(),
                Value::from_ast(ast_arg),
            )).collect(),
            def_location: loc::SourceLocation::from_pos(file_path, ast_annot.position),
            name: ast_annot.name.to_string(),
        }).collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
