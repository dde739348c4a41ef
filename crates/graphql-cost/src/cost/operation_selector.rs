use crate::cost::CostError;
use crate::operation::Document;
use crate::operation::OperationDefinition;

/// Pick the operation to estimate: the one named `operation_name` when a
/// name is given, otherwise the document's only operation.
pub(crate) fn select<'doc>(
    document: &'doc Document,
    operation_name: Option<&str>,
) -> Result<&'doc OperationDefinition, CostError> {
    if let Some(operation_name) = operation_name {
        return document.operations()
            .find(|op| op.name() == Some(operation_name))
            .ok_or_else(|| CostError::UnknownOperation {
                operation_name: operation_name.to_string(),
            });
    }

    let mut operations = document.operations();
    match (operations.next(), operations.next()) {
        (Some(op), None) => Ok(op),
        (None, _) => Err(CostError::NoOperation),
        (Some(_), Some(_)) => Err(CostError::AmbiguousOperation {
            operation_count: document.operations().count(),
        }),
    }
}
