use crate::ast;
use crate::loc;
use crate::operation::DirectiveAnnotation;
use crate::operation::SelectionSet;
use crate::Value;
use indexmap::IndexMap;
use std::path::Path;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelection {
    pub(crate) alias: Option<String>,
    pub(crate) arguments: IndexMap<String, Value>,
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) selection_set: Option<SelectionSet>,
}
impl FieldSelection {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// The literal arguments written on this selection. Values may still
    /// contain [`Value::VarRef`]s.
    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        self.directives.as_slice()
    }

    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        ast_field: &ast::query::Field,
    ) -> Self {
        let selection_set =
            if ast_field.selection_set.items.is_empty() {
                None
            } else {
                Some(SelectionSet::from_ast(file_path, &ast_field.selection_set))
            };

        Self {
            alias: ast_field.alias.clone(),
            arguments: ast_field.arguments.iter().map(|(arg_name, ast_arg)| (
                arg_name.to_string(),
                Value::from_ast(ast_arg),
            )).collect(),
            def_location: loc::SourceLocation::from_pos(file_path, ast_field.position),
            directives: DirectiveAnnotation::from_ast(file_path, &ast_field.directives),
            name: ast_field.name.to_string(),
            selection_set,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// If an alias was specified for this selection, return the alias.
    /// Otherwise return the name of the field.
    pub fn response_key(&self) -> &str {
        self.alias().unwrap_or(self.name.as_str())
    }

    pub fn selection_set(&self) -> Option<&SelectionSet> {
        self.selection_set.as_ref()
    }
}
