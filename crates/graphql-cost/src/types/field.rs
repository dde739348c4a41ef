use crate::loc;
use crate::types::CostDescriptor;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// A field defined on an [`ObjectType`](crate::types::ObjectType) or
/// [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug)]
pub struct Field {
    pub(crate) cost: Option<CostDescriptor>,
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    /// The cost metadata attached to this field, either via a
    /// `@cost(weight: ...)` annotation in the schema or programmatically via
    /// [`SchemaBuilder::with_field_cost()`](crate::schema::SchemaBuilder::with_field_cost).
    pub fn cost(&self) -> Option<&CostDescriptor> {
        self.cost.as_ref()
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The argument definitions declared on this field, in declaration
    /// order.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
