use crate::cost::CostError;
use crate::operation::VariableDefinition;
use crate::Value;
use indexmap::IndexMap;

/// The value bound to one declared variable.
#[derive(Clone, Debug, PartialEq)]
pub enum VariableBinding {
    /// The variable was neither provided nor declared with a default. This
    /// is distinct from an explicit `null`: an argument bound to an absent
    /// variable is treated as if it were not written at all.
    Absent,
    Value(Value),
}

/// Declared variables of an operation, keyed by name (without the `$`).
pub type Variables = IndexMap<String, VariableBinding>;

/// Coerce the caller's variable values against an operation's variable
/// declarations.
///
/// Provided values win over declared defaults. A non-null variable that is
/// neither provided nor defaulted (or that is explicitly provided as
/// `null`) is a [`CostError::MissingRequiredVariable`]. Provided values for
/// undeclared variables are ignored.
pub(crate) fn bind(
    variable_definitions: &[VariableDefinition],
    provided_values: &IndexMap<String, Value>,
) -> Result<Variables, CostError> {
    let mut variables = Variables::new();
    for var_def in variable_definitions {
        let nullable = var_def.type_annotation().nullable();
        let binding = match (provided_values.get(var_def.name()), var_def.default_value()) {
            (Some(value), _) if value.is_null() && !nullable =>
                return Err(missing_required_variable(var_def)),
            (Some(value), _) => VariableBinding::Value(value.clone()),
            (None, Some(default_value)) => VariableBinding::Value(default_value.clone()),
            (None, None) if !nullable =>
                return Err(missing_required_variable(var_def)),
            (None, None) => VariableBinding::Absent,
        };
        variables.insert(var_def.name().to_string(), binding);
    }
    Ok(variables)
}

fn missing_required_variable(var_def: &VariableDefinition) -> CostError {
    CostError::MissingRequiredVariable {
        variable_name: var_def.name().to_string(),
        type_annotation: var_def.type_annotation().to_string(),
    }
}
