use crate::ast;
use crate::loc;
use crate::types::TypeAnnotation;
use crate::Value;
use std::path::Path;

/// A variable declared by an operation, e.g. `$size: Int = 10`.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) default_value: Option<Value>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl VariableDefinition {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        ast_var_def: &ast::query::VariableDefinition,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::from_pos(file_path, ast_var_def.position),
            default_value: ast_var_def.default_value.as_ref().map(Value::from_ast),
            name: ast_var_def.name.to_string(),
            type_annotation: TypeAnnotation::from_ast_type(&ast_var_def.var_type),
        }
    }

    /// The variable's name, without the leading `$`.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
