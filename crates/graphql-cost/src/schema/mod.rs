mod cost_directive;
#[allow(clippy::module_inception)]
mod schema;
pub(crate) mod schema_builder;
mod type_validation_error;
mod types_map_builder;

pub use schema::Schema;
pub use schema_builder::NamedTypeDefLocation;
pub use schema_builder::SchemaBuilder;
pub use schema_builder::SchemaBuildError;
pub use type_validation_error::TypeValidationError;
pub(crate) use types_map_builder::TypesMapBuilder;

#[cfg(test)]
mod tests;
