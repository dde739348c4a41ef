use crate::ast;
use crate::cost::VariableBinding;
use crate::cost::Variables;
use indexmap::IndexMap;

/// Resolved arguments for a single field, keyed by argument name in the
/// order they were declared on the field's schema definition.
pub type Arguments = IndexMap<String, Value>;

/// A GraphQL input value.
///
/// Values parsed out of a document may contain [`Value::VarRef`]s; values
/// handed to cost functions have already had every variable reference
/// substituted (see [`Value::resolve()`]).
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    Object(IndexMap<String, Value>),
    String(String),
    VarRef(String),
}
impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Bool(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    /// Numeric view of this value. Both `Int` and `Float` values convert.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Int(value) => Some(*value as f64),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        if let Self::Int(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) | Self::Enum(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub(crate) fn from_ast(ast_value: &ast::query::Value) -> Self {
        use ast::query::Value as AstValue;
        match ast_value {
            AstValue::Variable(var_name) =>
                Value::VarRef(var_name.clone()),

            AstValue::Int(number) =>
                number.as_i64().map(Value::Int).unwrap_or(Value::Null),

            AstValue::Float(value) =>
                Value::Float(*value),

            AstValue::String(value) =>
                Value::String(value.clone()),

            AstValue::Boolean(value) =>
                Value::Bool(*value),

            AstValue::Null =>
                Value::Null,

            AstValue::Enum(value) =>
                Value::Enum(value.clone()),

            AstValue::List(values) =>
                Value::List(values.iter().map(Value::from_ast).collect()),

            AstValue::Object(entries) =>
                Value::Object(entries.iter().map(|(key, ast_value)|
                    (key.clone(), Value::from_ast(ast_value))
                ).collect()),
        }
    }

    /// Substitute every [`Value::VarRef`] within this value using the bound
    /// `variables`.
    ///
    /// Returns `None` when this value is itself a reference to a variable
    /// that is unbound or bound to [`VariableBinding::Absent`]; the caller
    /// then treats the argument as not provided at all. An absent variable
    /// nested in a list becomes `null`, and one nested in an object drops
    /// that entry.
    pub fn resolve(&self, variables: &Variables) -> Option<Value> {
        match self {
            Self::VarRef(var_name) => match variables.get(var_name) {
                Some(VariableBinding::Value(value)) => Some(value.clone()),
                Some(VariableBinding::Absent) | None => None,
            },

            Self::List(items) => Some(Self::List(
                items.iter()
                    .map(|item| item.resolve(variables).unwrap_or(Value::Null))
                    .collect(),
            )),

            Self::Object(entries) => Some(Self::Object(
                entries.iter()
                    .filter_map(|(key, value)| {
                        value.resolve(variables).map(|value| (key.clone(), value))
                    })
                    .collect(),
            )),

            _ => Some(self.clone()),
        }
    }
}
impl std::convert::From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(value) => Value::Bool(value),
            serde_json::Value::Number(number) => match number.as_i64() {
                Some(int) => Value::Int(int),
                None => number.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            serde_json::Value::String(value) => Value::String(value),
            serde_json::Value::Array(items) =>
                Value::List(items.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(entries) =>
                Value::Object(entries.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect()),
        }
    }
}
impl std::convert::From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}
impl std::convert::From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}
impl std::convert::From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}
impl std::convert::From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Enum(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            },
            Self::Null => write!(f, "null"),
            Self::Object(entries) => {
                write!(f, "{{")?;
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
            Self::String(value) => write!(f, "{value:?}"),
            Self::VarRef(name) => write!(f, "${name}"),
        }
    }
}
