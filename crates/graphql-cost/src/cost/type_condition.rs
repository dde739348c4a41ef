use crate::cost::CostError;
use crate::cost::ResponsePath;
use crate::schema::Schema;
use crate::types::GraphQLType;

/// Decides whether a fragment's type condition applies to the composite
/// type currently being selected against.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TypeConditionMatcher<'schema> {
    schema: &'schema Schema,
}
impl<'schema> TypeConditionMatcher<'schema> {
    pub fn applies(
        &self,
        type_condition: Option<&str>,
        current_type: &'schema GraphQLType,
        path: &ResponsePath,
    ) -> Result<bool, CostError> {
        Ok(self.narrow(type_condition, current_type, path)?.is_some())
    }

    /// Like [`TypeConditionMatcher::applies()`], but returns the type that
    /// the fragment's fields should be looked up on when it applies.
    ///
    /// When `current_type` is an object type, that is always `current_type`
    /// itself. When it is abstract, the fragment narrows the selection to
    /// its type condition.
    pub fn narrow(
        &self,
        type_condition: Option<&str>,
        current_type: &'schema GraphQLType,
        path: &ResponsePath,
    ) -> Result<Option<&'schema GraphQLType>, CostError> {
        let Some(type_condition) = type_condition else {
            return Ok(Some(current_type));
        };

        let condition_type = self.schema.lookup_type(type_condition)
            .ok_or_else(|| CostError::UnknownType {
                type_name: type_condition.to_string(),
                path: path.clone(),
            })?;

        if condition_type.name() == current_type.name() {
            return Ok(Some(current_type));
        }

        let current_possible_types = current_type.possible_type_names(self.schema);
        let overlaps = condition_type.possible_type_names(self.schema)
            .iter()
            .any(|type_name| current_possible_types.contains(type_name));

        if !overlaps {
            return Ok(None);
        }

        Ok(Some(match current_type {
            GraphQLType::Object(_) => current_type,
            _ => condition_type,
        }))
    }

    pub fn new(schema: &'schema Schema) -> Self {
        Self { schema }
    }
}
