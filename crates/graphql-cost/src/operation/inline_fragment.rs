use crate::ast;
use crate::loc;
use crate::operation::DirectiveAnnotation;
use crate::operation::SelectionSet;
use std::path::Path;

#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) selection_set: SelectionSet,
    pub(crate) type_condition: Option<String>,
}
impl InlineFragment {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        self.directives.as_slice()
    }

    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        ast_inline_frag: &ast::query::InlineFragment,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::from_pos(file_path, ast_inline_frag.position),
            directives: DirectiveAnnotation::from_ast(file_path, &ast_inline_frag.directives),
            selection_set: SelectionSet::from_ast(file_path, &ast_inline_frag.selection_set),
            type_condition: ast_inline_frag.type_condition.as_ref().map(
                |ast::query::TypeCondition::On(type_name)| type_name.to_string(),
            ),
        }
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    /// The name of the type this fragment is restricted to, if any. A bare
    /// `... { }` fragment has no type condition.
    pub fn type_condition(&self) -> Option<&str> {
        self.type_condition.as_deref()
    }
}
