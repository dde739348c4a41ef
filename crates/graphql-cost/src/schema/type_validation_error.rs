use crate::loc;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "The `{type_name}` type declares that it implements `{interface_name}`, \
        which is not an interface type"
    )]
    ImplementsNonInterfaceType {
        type_name: String,
        interface_name: String,
        location: loc::SourceLocation,
    },

    #[error(
        "The `{interface_name}` interface (transitively) implements itself: {}",
        cycle.join(" → "),
    )]
    InterfaceImplementationCycle {
        interface_name: String,
        cycle: Vec<String>,
        location: loc::SourceLocation,
    },

    #[error(
        "The `{union_name}` union declares `{member_name}` as a member, but \
        union members must be object types"
    )]
    NonObjectUnionMember {
        union_name: String,
        member_name: String,
        location: loc::SourceLocation,
    },

    #[error(
        "`{parent_name}` refers to the type `{undefined_type_name}`, which is \
        not defined in the schema"
    )]
    UndefinedTypeName {
        parent_name: String,
        undefined_type_name: String,
        location: loc::SourceLocation,
    },
}
