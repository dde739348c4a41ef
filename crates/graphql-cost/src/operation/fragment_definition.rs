use crate::ast;
use crate::loc;
use crate::operation::DirectiveAnnotation;
use crate::operation::SelectionSet;
use std::path::Path;

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) selection_set: SelectionSet,
    pub(crate) type_condition: String,
}
impl FragmentDefinition {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        self.directives.as_slice()
    }

    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        ast_frag: &ast::query::FragmentDefinition,
    ) -> Self {
        let ast::query::TypeCondition::On(type_condition) = &ast_frag.type_condition;
        Self {
            def_location: loc::SourceLocation::from_pos(file_path, ast_frag.position),
            directives: DirectiveAnnotation::from_ast(file_path, &ast_frag.directives),
            name: ast_frag.name.to_string(),
            selection_set: SelectionSet::from_ast(file_path, &ast_frag.selection_set),
            type_condition: type_condition.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}
