use crate::loc;
use crate::schema::TypeValidationError;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::TypeAnnotation;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct TypesMapBuilder {
    types: HashMap<String, GraphQLType>,
}
impl TypesMapBuilder {
    pub fn new() -> Self {
        Self {
            types: HashMap::from([
                ("Boolean".to_string(), GraphQLType::Bool),
                ("Float".to_string(), GraphQLType::Float),
                ("ID".to_string(), GraphQLType::ID),
                ("Int".to_string(), GraphQLType::Int),
                ("String".to_string(), GraphQLType::String),
            ]),
        }
    }

    pub fn add_new_type(
        &mut self,
        def_location: loc::SourceLocation,
        type_name: &str,
        type_: GraphQLType,
    ) -> Result<()> {
        if let Some(conflicting_type) = self.types.get(type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                def1: conflicting_type.def_location(),
                def2: def_location,
            });
        }

        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    pub fn get_type_mut(
        &mut self,
        type_name: &str,
    ) -> Option<&mut GraphQLType> {
        self.types.get_mut(type_name)
    }

    /// Run the final validation of all types together, then hand back the
    /// complete types map.
    pub fn into_types_map(self) -> Result<HashMap<String, GraphQLType>> {
        let mut errors = vec![];
        for type_ in self.types.values() {
            match type_ {
                GraphQLType::Bool
                | GraphQLType::Enum(_)
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String
                    => (),

                GraphQLType::InputObject(type_) => {
                    for param in type_.fields.values() {
                        self.validate_type_annotation(
                            type_.name.as_str(),
                            &param.type_annotation,
                            &param.def_location,
                            &mut errors,
                        );
                    }
                },

                GraphQLType::Interface(type_) => {
                    self.validate_object_or_interface(&type_.0, &mut errors);
                    self.validate_no_implementation_cycle(&type_.0, &mut errors);
                },

                GraphQLType::Object(type_) =>
                    self.validate_object_or_interface(&type_.0, &mut errors),

                GraphQLType::Union(type_) => {
                    for member_name in type_.members.keys() {
                        match self.types.get(member_name) {
                            Some(GraphQLType::Object(_)) => (),
                            Some(_) => errors.push(TypeValidationError::NonObjectUnionMember {
                                union_name: type_.name.to_string(),
                                member_name: member_name.to_string(),
                                location: type_.def_location.clone(),
                            }),
                            None => errors.push(TypeValidationError::UndefinedTypeName {
                                parent_name: type_.name.to_string(),
                                undefined_type_name: member_name.to_string(),
                                location: type_.def_location.clone(),
                            }),
                        }
                    }
                },
            }
        }

        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        Ok(self.types)
    }

    fn validate_object_or_interface(
        &self,
        type_data: &ObjectOrInterfaceTypeData,
        errors: &mut Vec<TypeValidationError>,
    ) {
        for iface_name in type_data.interface_names() {
            match self.types.get(iface_name) {
                Some(GraphQLType::Interface(_)) => (),
                Some(_) => errors.push(TypeValidationError::ImplementsNonInterfaceType {
                    type_name: type_data.name.to_string(),
                    interface_name: iface_name.to_string(),
                    location: type_data.def_location.clone(),
                }),
                None => errors.push(TypeValidationError::UndefinedTypeName {
                    parent_name: type_data.name.to_string(),
                    undefined_type_name: iface_name.to_string(),
                    location: type_data.def_location.clone(),
                }),
            }
        }

        for field in type_data.fields.values() {
            let field_path = format!("{}.{}", type_data.name, field.name);
            self.validate_type_annotation(
                field_path.as_str(),
                &field.type_annotation,
                &field.def_location,
                errors,
            );
            for param in field.parameters.values() {
                self.validate_type_annotation(
                    format!("{field_path}({}:)", param.name).as_str(),
                    &param.type_annotation,
                    &param.def_location,
                    errors,
                );
            }
        }
    }

    fn validate_no_implementation_cycle(
        &self,
        iface_data: &ObjectOrInterfaceTypeData,
        errors: &mut Vec<TypeValidationError>,
    ) {
        let mut path = vec![iface_data.name.to_string()];
        if self.implementation_path_returns_to(
            iface_data.name.as_str(),
            iface_data,
            &mut path,
        ) {
            errors.push(TypeValidationError::InterfaceImplementationCycle {
                interface_name: iface_data.name.to_string(),
                cycle: path,
                location: iface_data.def_location.clone(),
            });
        }
    }

    fn implementation_path_returns_to(
        &self,
        origin_name: &str,
        iface_data: &ObjectOrInterfaceTypeData,
        path: &mut Vec<String>,
    ) -> bool {
        for iface_name in iface_data.interface_names() {
            if iface_name == origin_name {
                path.push(iface_name.to_string());
                return true;
            }
            if path.iter().any(|visited| visited == iface_name) {
                // A cycle that doesn't pass through `origin_name` gets
                // reported when that cycle's own members are validated.
                continue;
            }
            let Some(GraphQLType::Interface(next)) = self.types.get(iface_name) else {
                continue;
            };
            path.push(iface_name.to_string());
            if self.implementation_path_returns_to(origin_name, &next.0, path) {
                return true;
            }
            path.pop();
        }
        false
    }

    fn validate_type_annotation(
        &self,
        parent_name: &str,
        type_annotation: &TypeAnnotation,
        location: &loc::SourceLocation,
        errors: &mut Vec<TypeValidationError>,
    ) {
        let type_name = type_annotation.innermost_named_type_annotation().graphql_type_name();
        if !self.types.contains_key(type_name) {
            errors.push(TypeValidationError::UndefinedTypeName {
                parent_name: parent_name.to_string(),
                undefined_type_name: type_name.to_string(),
                location: location.clone(),
            });
        }
    }
}
