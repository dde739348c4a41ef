use crate::operation::OperationKind;
use crate::schema::SchemaBuilder;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use std::collections::BTreeSet;
use std::collections::HashMap;

/// Represents a fully typechecked and immutable GraphQL schema whose fields
/// may carry [`CostDescriptor`](crate::types::CostDescriptor)s.
///
/// A [`Schema`] is only ever read during cost estimation, so a single
/// instance can be shared freely across concurrent estimations.
#[derive(Clone, Debug)]
pub struct Schema {
    /// Object types implementing each interface, computed once at build.
    pub(crate) interface_implementors: HashMap<String, BTreeSet<String>>,
    pub(crate) query_type: NamedGraphQLTypeRef,
    pub(crate) mutation_type: Option<NamedGraphQLTypeRef>,
    pub(crate) subscription_type: Option<NamedGraphQLTypeRef>,
    pub(crate) types: HashMap<String, GraphQLType>,
}
impl Schema {
    /// Returns a [`HashMap<String, GraphQLType>`] containing all types defined
    /// within this [`Schema`].
    ///
    /// [^note] This map includes both types defined while building this
    /// [`Schema`] as well as implicitly-defined, built-in types like
    /// [`GraphQLType::Bool`].
    pub fn all_types(&self) -> &HashMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn lookup_type(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    pub fn mutation_type(&self) -> Option<&GraphQLType> {
        self.mutation_type.as_ref().and_then(|named_ref| named_ref.deref(self).ok())
    }

    /// Returns this [`Schema`]'s Query root operation type.
    ///
    /// GraphQL [defines an object type named "Query" as the _default_ Query
    /// type](https://spec.graphql.org/October2021/#sec-Root-Operation-Types.Default-Root-Operation-Type-Names),
    /// but a `schema { query: ... }` block may name a different type.
    /// [`Schema::query_type()`] factors in any such override.
    pub fn query_type(&self) -> &GraphQLType {
        self.query_type.deref(self)
            .expect("query type is verified to be present when the schema is built")
    }

    /// Returns the root type that operations of the given kind select
    /// against, if this [`Schema`] defines one.
    pub fn root_operation_type(&self, kind: &OperationKind) -> Option<&GraphQLType> {
        match kind {
            OperationKind::Mutation => self.mutation_type(),
            OperationKind::Query => Some(self.query_type()),
            OperationKind::Subscription => self.subscription_type(),
        }
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one
    /// was defined).
    pub fn subscription_type(&self) -> Option<&GraphQLType> {
        self.subscription_type.as_ref().and_then(|named_ref| named_ref.deref(self).ok())
    }
}
