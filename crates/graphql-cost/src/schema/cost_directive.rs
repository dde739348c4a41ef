use crate::ast;

pub(super) const COST_DIRECTIVE_NAME: &str = "cost";
const WEIGHT_ARGUMENT_NAME: &str = "weight";

/// The `@cost(weight: ...)` annotation on a field definition.
///
/// The weight may be written as an Int, a Float, or a String holding a
/// number (the form used by the IBM cost specification). It must be finite.
#[derive(Clone, Debug, PartialEq)]
pub(super) struct CostDirective {
    pub(super) weight: f64,
}

impl CostDirective {
    /// Returns `Ok(None)` when no `@cost` annotation is present and an error
    /// message describing the problem when one is present but malformed.
    pub(super) fn from_directives(
        directives: &[ast::schema::Directive],
    ) -> Result<Option<Self>, String> {
        let Some(directive) = directives.iter().find(|d| d.name == COST_DIRECTIVE_NAME) else {
            return Ok(None);
        };

        let weight = directive.arguments
            .iter()
            .find(|(name, _)| name == WEIGHT_ARGUMENT_NAME)
            .map(|(_, value)| value);

        use ast::schema::Value;
        let weight = match weight {
            Some(Value::Int(number)) => number.as_i64()
                .map(|weight| weight as f64)
                .ok_or_else(|| "Argument `weight` does not fit in a 64-bit integer".to_string())?,
            Some(Value::Float(weight)) => *weight,
            Some(Value::String(weight)) => weight.trim().parse::<f64>()
                .map_err(|_| format!("Argument `weight` (\"{weight}\") cannot be parsed as a number"))?,
            Some(other) => return Err(format!(
                "Argument `weight` must be an Int, Float, or numeric String; found `{other:?}`",
            )),
            None => return Err("Missing required argument `weight`".to_string()),
        };

        if !weight.is_finite() {
            return Err(format!("Argument `weight` must be a finite number; found `{weight}`"));
        }

        Ok(Some(Self { weight }))
    }
}
