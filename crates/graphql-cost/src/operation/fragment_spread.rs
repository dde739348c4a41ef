use crate::ast;
use crate::loc;
use crate::operation::DirectiveAnnotation;
use std::path::Path;

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) fragment_name: String,
}
impl FragmentSpread {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        self.directives.as_slice()
    }

    pub fn fragment_name(&self) -> &str {
        self.fragment_name.as_str()
    }

    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        ast_spread: &ast::query::FragmentSpread,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::from_pos(file_path, ast_spread.position),
            directives: DirectiveAnnotation::from_ast(file_path, &ast_spread.directives),
            fragment_name: ast_spread.fragment_name.to_string(),
        }
    }
}
