use crate::loc;
use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::named_ref::NamedRef;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use std::collections::BTreeSet;

pub type NamedGraphQLTypeRef = NamedRef<Schema, GraphQLType>;

/// Represents a defined GraphQL type.
#[derive(Clone, Debug)]
pub enum GraphQLType {
    Bool,
    Enum(EnumType),
    Float,
    ID,
    InputObject(InputObjectType),
    Int,
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    String,
    Union(UnionType),
}
impl GraphQLType {
    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn def_location(&self) -> loc::SourceLocation {
        match self {
            GraphQLType::Bool
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::String =>
                loc::SourceLocation::builtin(),
            GraphQLType::Enum(t) => t.def_location.clone(),
            GraphQLType::InputObject(t) => t.def_location.clone(),
            GraphQLType::Interface(t) => t.0.def_location.clone(),
            GraphQLType::Object(t) => t.0.def_location.clone(),
            GraphQLType::Scalar(t) => t.def_location.clone(),
            GraphQLType::Union(t) => t.def_location.clone(),
        }
    }

    /// Look up a field selectable on this type.
    ///
    /// Only object and interface types define fields; every other kind of
    /// type returns `None`.
    pub fn field(&self, field_name: &str) -> Option<&Field> {
        match self {
            GraphQLType::Interface(t) => t.field(field_name),
            GraphQLType::Object(t) => t.field(field_name),
            _ => None,
        }
    }

    /// Composite types are the ones which accept a sub-selection.
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            GraphQLType::Interface(_) | GraphQLType::Object(_) | GraphQLType::Union(_),
        )
    }

    pub fn name(&self) -> &str {
        match self {
            GraphQLType::Bool => "Boolean",
            GraphQLType::Float => "Float",
            GraphQLType::ID => "ID",
            GraphQLType::Int => "Int",
            GraphQLType::String => "String",
            GraphQLType::Enum(t) => t.name.as_str(),
            GraphQLType::InputObject(t) => t.name.as_str(),
            GraphQLType::Interface(t) => t.0.name.as_str(),
            GraphQLType::Object(t) => t.0.name.as_str(),
            GraphQLType::Scalar(t) => t.name.as_str(),
            GraphQLType::Union(t) => t.name.as_str(),
        }
    }

    /// The names of every object type a value of this type could be at
    /// runtime.
    ///
    /// An object type's only possible type is itself. An interface's possible
    /// types are all object types that (transitively) implement it, and a
    /// union's are its members.
    pub fn possible_type_names<'schema>(
        &'schema self,
        schema: &'schema Schema,
    ) -> BTreeSet<&'schema str> {
        match self {
            GraphQLType::Object(obj_type) => BTreeSet::from([obj_type.name()]),

            GraphQLType::Interface(iface_type) => schema.interface_implementors
                .get(iface_type.name())
                .map(|object_names| object_names.iter().map(String::as_str).collect())
                .unwrap_or_default(),

            GraphQLType::Union(union_type) => union_type.members.keys()
                .map(|name| name.as_str())
                .collect(),

            _ => BTreeSet::new(),
        }
    }
}
impl DerefByName for GraphQLType {
    type Source = Schema;

    fn deref_name<'a>(
        schema: &'a Schema,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> {
        schema.types.get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string()),
        )
    }
}
impl std::fmt::Display for GraphQLType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
