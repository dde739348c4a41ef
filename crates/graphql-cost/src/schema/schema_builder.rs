use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::operation::OperationKind;
use crate::schema::cost_directive::CostDirective;
use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::schema::TypesMapBuilder;
use crate::types::CostDescriptor;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
struct FieldCostOverride {
    descriptor: CostDescriptor,
    field_name: String,
    type_name: String,
}

/// Utility for building a [`Schema`].
///
/// SDL may be loaded from any number of strings or files. Field cost
/// metadata comes either from `@cost(weight: ...)` annotations in the SDL or
/// from [`SchemaBuilder::with_field_cost()`], which is the only way to attach
/// a [`CostDescriptor::Computed`] function.
///
/// ```
/// use graphql_cost::schema::SchemaBuilder;
/// use graphql_cost::types::CostDescriptor;
///
/// let schema = SchemaBuilder::from_str(None, r#"
///     type Query {
///         search(first: Int = 10): [String]
///         me: String @cost(weight: 1)
///     }
/// "#)
///     .unwrap()
///     .with_field_cost("Query", "search", CostDescriptor::from_fn(|_, args| {
///         Ok(args.get("first").and_then(|v| v.as_f64()).unwrap_or(0.0))
///     }))
///     .build()
///     .unwrap();
///
/// assert!(schema.query_type().field("search").unwrap().cost().is_some());
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    field_cost_overrides: Vec<FieldCostOverride>,
    mutation_type: Option<NamedTypeDefLocation>,
    pending_extensions: Vec<(Option<PathBuf>, ast::schema::TypeExtension)>,
    query_type: Option<NamedTypeDefLocation>,
    subscription_type: Option<NamedTypeDefLocation>,
    types_map_builder: TypesMapBuilder,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        for (file_path, ext) in std::mem::take(&mut self.pending_extensions) {
            self.merge_type_extension(file_path.as_deref(), ext)?;
        }

        for cost_override in std::mem::take(&mut self.field_cost_overrides) {
            self.apply_field_cost_override(cost_override)?;
        }

        let types = self.types_map_builder.into_types_map()?;

        let query_type = Self::resolve_root_type(
            &types,
            OperationKind::Query,
            self.query_type.take(),
        )?.ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;

        let mutation_type = Self::resolve_root_type(
            &types,
            OperationKind::Mutation,
            self.mutation_type.take(),
        )?;

        let subscription_type = Self::resolve_root_type(
            &types,
            OperationKind::Subscription,
            self.subscription_type.take(),
        )?;

        // As per spec:
        //
        // > The query, mutation, and subscription root types must all be
        // > different types if provided.
        //
        // https://spec.graphql.org/October2021/#sel-FAHTRLCAACG0B57a
        let roots = [
            (OperationKind::Query, Some(&query_type)),
            (OperationKind::Mutation, mutation_type.as_ref()),
            (OperationKind::Subscription, subscription_type.as_ref()),
        ];
        for (idx, (operation1, root1)) in roots.iter().enumerate() {
            for (operation2, root2) in roots.iter().skip(idx + 1) {
                let (Some(root1), Some(root2)) = (root1, root2) else {
                    continue;
                };
                if root1.type_name == root2.type_name {
                    return Err(SchemaBuildError::NonUniqueOperationTypes {
                        reused_type_name: root1.type_name.to_string(),
                        operation1: *operation1,
                        operation2: *operation2,
                    });
                }
            }
        }

        let mut schema = Schema {
            interface_implementors: HashMap::new(),
            query_type: NamedGraphQLTypeRef::new(query_type.type_name),
            mutation_type: mutation_type.map(|t| NamedGraphQLTypeRef::new(t.type_name)),
            subscription_type: subscription_type.map(|t| NamedGraphQLTypeRef::new(t.type_name)),
            types,
        };
        schema.interface_implementors = Self::interface_implementors(&schema);
        Ok(schema)
    }

    /// Map each interface name to the object types that (transitively)
    /// implement it.
    fn interface_implementors(schema: &Schema) -> HashMap<String, BTreeSet<String>> {
        let mut implementors: HashMap<String, BTreeSet<String>> = HashMap::new();
        let interface_names = schema.types.values()
            .filter_map(|type_| type_.as_interface())
            .map(|iface_type| iface_type.name());
        for iface_name in interface_names {
            let object_names = schema.types.values()
                .filter_map(|type_| type_.as_object())
                .filter(|obj_type| obj_type.implements_interface(schema, iface_name))
                .map(|obj_type| obj_type.name().to_string())
                .collect();
            implementors.insert(iface_name.to_string(), object_names);
        }
        implementors
    }

    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        Self::new().load_file(file_path)
    }

    pub fn from_str(
        file_path: Option<&Path>,
        content: impl AsRef<str>,
    ) -> Result<Self> {
        Self::new().load_str(file_path, content.as_ref())
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(mut self, file_paths: Vec<impl AsRef<Path>>) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(Some(file_path), file_content.as_str())?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<&Path>,
        content: &str,
    ) -> Result<Self> {
        let ast_doc = ast::schema::parse(content)
            .map_err(|err| SchemaBuildError::ParseError {
                file: file_path.map(|p| p.to_path_buf()),
                err: err.to_string(),
            })?;

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path, def)?;
        }

        Ok(self)
    }

    pub fn new() -> Self {
        Self {
            field_cost_overrides: vec![],
            mutation_type: None,
            pending_extensions: vec![],
            query_type: None,
            subscription_type: None,
            types_map_builder: TypesMapBuilder::new(),
        }
    }

    /// Attach a [`CostDescriptor`] to the field `type_name.field_name`,
    /// replacing any `@cost` annotation declared for it in SDL.
    ///
    /// The target is checked when [`SchemaBuilder::build()`] runs, so
    /// overrides may be registered before the SDL that defines the field is
    /// loaded.
    pub fn with_field_cost(
        mut self,
        type_name: impl AsRef<str>,
        field_name: impl AsRef<str>,
        descriptor: impl Into<CostDescriptor>,
    ) -> Self {
        self.field_cost_overrides.push(FieldCostOverride {
            descriptor: descriptor.into(),
            field_name: field_name.as_ref().to_string(),
            type_name: type_name.as_ref().to_string(),
        });
        self
    }

    fn apply_field_cost_override(&mut self, cost_override: FieldCostOverride) -> Result<()> {
        if let Some(weight) = cost_override.descriptor.as_constant()
            && !weight.is_finite() {
            return Err(SchemaBuildError::NonFiniteFieldCost {
                type_name: cost_override.type_name,
                field_name: cost_override.field_name,
                weight,
            });
        }

        let field = match self.types_map_builder.get_type_mut(cost_override.type_name.as_str()) {
            Some(GraphQLType::Object(obj_type)) =>
                obj_type.0.fields.get_mut(cost_override.field_name.as_str()),
            Some(GraphQLType::Interface(iface_type)) =>
                iface_type.0.fields.get_mut(cost_override.field_name.as_str()),
            _ => None,
        };

        match field {
            Some(field) => {
                field.cost = Some(cost_override.descriptor);
                Ok(())
            },
            None => Err(SchemaBuildError::UnknownCostTarget {
                type_name: cost_override.type_name,
                field_name: cost_override.field_name,
            }),
        }
    }

    fn enum_values_from_ast(
        file_path: Option<&Path>,
        enum_name: &str,
        ast_values: &[ast::schema::EnumValue],
        values: &mut IndexSet<String>,
    ) -> Result<()> {
        for value in ast_values {
            if !values.insert(value.name.to_string()) {
                return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                    enum_name: enum_name.to_string(),
                    value_name: value.name.to_string(),
                    location: loc::SourceLocation::from_pos(file_path, value.position),
                });
            }
        }
        Ok(())
    }

    fn fields_from_ast(
        file_path: Option<&Path>,
        type_name: &str,
        ast_fields: &[ast::schema::Field],
        fields: &mut IndexMap<String, Field>,
    ) -> Result<()> {
        for ast_field in ast_fields {
            let def_location = loc::SourceLocation::from_pos(file_path, ast_field.position);

            if let Some(existing_field) = fields.get(ast_field.name.as_str()) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: type_name.to_string(),
                    field_name: ast_field.name.to_string(),
                    field_def1: existing_field.def_location.clone(),
                    field_def2: def_location,
                });
            }

            let cost = CostDirective::from_directives(&ast_field.directives)
                .map_err(|message| SchemaBuildError::InvalidCostDirective {
                    type_name: type_name.to_string(),
                    field_name: ast_field.name.to_string(),
                    message,
                    location: def_location.clone(),
                })?
                .map(|directive| CostDescriptor::Constant(directive.weight));

            fields.insert(ast_field.name.to_string(), Field {
                cost,
                def_location,
                name: ast_field.name.to_string(),
                parameters: ast_field.arguments.iter().map(|input_val| (
                    input_val.name.to_string(),
                    Parameter::from_ast(file_path, input_val),
                )).collect(),
                type_annotation: TypeAnnotation::from_ast_type(&ast_field.field_type),
            });
        }
        Ok(())
    }

    fn input_fields_from_ast(
        file_path: Option<&Path>,
        type_name: &str,
        ast_fields: &[ast::schema::InputValue],
        fields: &mut IndexMap<String, Parameter>,
    ) -> Result<()> {
        for input_val in ast_fields {
            let param = Parameter::from_ast(file_path, input_val);
            if let Some(existing_field) = fields.get(input_val.name.as_str()) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: type_name.to_string(),
                    field_name: input_val.name.to_string(),
                    field_def1: existing_field.def_location.clone(),
                    field_def2: param.def_location,
                });
            }
            fields.insert(input_val.name.to_string(), param);
        }
        Ok(())
    }

    fn interfaces_from_ast(
        file_path: Option<&Path>,
        pos: ast::Pos,
        type_name: &str,
        ast_interfaces: &[String],
        interfaces: &mut Vec<NamedGraphQLTypeRef>,
    ) -> Result<()> {
        for iface_name in ast_interfaces {
            if interfaces.iter().any(|iface_ref| iface_ref.name() == iface_name) {
                return Err(SchemaBuildError::DuplicateInterfaceImplementsDeclaration {
                    def_location: loc::SourceLocation::from_pos(file_path, pos),
                    duplicated_interface_name: iface_name.to_string(),
                    type_name: type_name.to_string(),
                });
            }
            interfaces.push(NamedGraphQLTypeRef::new(iface_name));
        }
        Ok(())
    }

    fn merge_type_extension(
        &mut self,
        file_path: Option<&Path>,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;
        let (type_name, pos) = match &ext {
            TypeExtension::Enum(ext) => (ext.name.to_string(), ext.position),
            TypeExtension::InputObject(ext) => (ext.name.to_string(), ext.position),
            TypeExtension::Interface(ext) => (ext.name.to_string(), ext.position),
            TypeExtension::Object(ext) => (ext.name.to_string(), ext.position),
            TypeExtension::Scalar(ext) => (ext.name.to_string(), ext.position),
            TypeExtension::Union(ext) => (ext.name.to_string(), ext.position),
        };
        let extension_loc = loc::SourceLocation::from_pos(file_path, pos);

        let Some(existing_type) = self.types_map_builder.get_type_mut(type_name.as_str()) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name,
                extension_type_loc: extension_loc,
            });
        };

        match (existing_type, ext) {
            (GraphQLType::Enum(enum_type), TypeExtension::Enum(ext)) =>
                Self::enum_values_from_ast(
                    file_path,
                    type_name.as_str(),
                    &ext.values,
                    &mut enum_type.values,
                ),

            (GraphQLType::InputObject(inputobj_type), TypeExtension::InputObject(ext)) =>
                Self::input_fields_from_ast(
                    file_path,
                    type_name.as_str(),
                    &ext.fields,
                    &mut inputobj_type.fields,
                ),

            (GraphQLType::Interface(iface_type), TypeExtension::Interface(ext)) => {
                Self::interfaces_from_ast(
                    file_path,
                    ext.position,
                    type_name.as_str(),
                    &ext.implements_interfaces,
                    &mut iface_type.0.interfaces,
                )?;
                Self::fields_from_ast(
                    file_path,
                    type_name.as_str(),
                    &ext.fields,
                    &mut iface_type.0.fields,
                )
            },

            (GraphQLType::Object(obj_type), TypeExtension::Object(ext)) => {
                Self::interfaces_from_ast(
                    file_path,
                    ext.position,
                    type_name.as_str(),
                    &ext.implements_interfaces,
                    &mut obj_type.0.interfaces,
                )?;
                Self::fields_from_ast(
                    file_path,
                    type_name.as_str(),
                    &ext.fields,
                    &mut obj_type.0.fields,
                )
            },

            // Scalar extensions only ever add directives, none of which
            // affect cost.
            (GraphQLType::Scalar(_), TypeExtension::Scalar(_)) => Ok(()),

            (GraphQLType::Union(union_type), TypeExtension::Union(ext)) => {
                for member_name in &ext.types {
                    if union_type.members.contains_key(member_name) {
                        return Err(SchemaBuildError::DuplicatedUnionMember {
                            type_name,
                            member_name: member_name.to_string(),
                            location: extension_loc,
                        });
                    }
                    union_type.members.insert(
                        member_name.to_string(),
                        NamedGraphQLTypeRef::new(member_name),
                    );
                }
                Ok(())
            },

            (_, _) => Err(SchemaBuildError::InvalidExtensionType {
                type_name,
                extension_loc,
            }),
        }
    }

    fn resolve_root_type(
        types: &HashMap<String, GraphQLType>,
        operation: OperationKind,
        explicit_def: Option<NamedTypeDefLocation>,
    ) -> Result<Option<NamedTypeDefLocation>> {
        match explicit_def {
            Some(def) => match types.get(def.type_name.as_str()) {
                Some(GraphQLType::Object(_)) => Ok(Some(def)),
                Some(_) => Err(SchemaBuildError::RootOperationTypeNotObject {
                    operation,
                    type_name: def.type_name,
                    location: def.def_location,
                }),
                None => Err(SchemaBuildError::UndefinedRootOperationType {
                    operation,
                    type_name: def.type_name,
                    location: def.def_location,
                }),
            },

            None => match types.get(operation.default_root_type_name()) {
                Some(GraphQLType::Object(obj_type)) => Ok(Some(NamedTypeDefLocation {
                    def_location: obj_type.def_location().clone(),
                    type_name: obj_type.name().to_string(),
                })),
                _ => Ok(None),
            },
        }
    }

    fn visit_ast_def(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) => {
                // Extensions may precede the type they extend, so they're
                // merged once all definitions have been loaded.
                self.pending_extensions.push((file_path.map(|p| p.to_path_buf()), type_ext));
                Ok(())
            },
            // Directive definitions declare nothing that affects cost; the
            // `@cost` annotation is recognized by name alone.
            Definition::DirectiveDefinition(_) => Ok(()),
        }
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: Option<&Path>,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let root_defs = [
            (OperationKind::Query, schema_def.query),
            (OperationKind::Mutation, schema_def.mutation),
            (OperationKind::Subscription, schema_def.subscription),
        ];

        for (operation, type_name) in root_defs {
            let Some(type_name) = type_name else {
                continue;
            };
            let typedef_loc = NamedTypeDefLocation {
                def_location: loc::SourceLocation::from_pos(file_path, schema_def.position),
                type_name,
            };
            let slot = match operation {
                OperationKind::Query => &mut self.query_type,
                OperationKind::Mutation => &mut self.mutation_type,
                OperationKind::Subscription => &mut self.subscription_type,
            };
            if let Some(existing_typedef_loc) = slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation,
                    location1: existing_typedef_loc.clone(),
                    location2: typedef_loc,
                });
            }
            *slot = Some(typedef_loc);
        }

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: Option<&Path>,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;
        match type_def {
            TypeDefinition::Enum(enum_def) => {
                let def_location = loc::SourceLocation::from_pos(file_path, enum_def.position);
                let mut values = IndexSet::new();
                Self::enum_values_from_ast(
                    file_path,
                    enum_def.name.as_str(),
                    &enum_def.values,
                    &mut values,
                )?;
                self.types_map_builder.add_new_type(
                    def_location.clone(),
                    enum_def.name.as_str(),
                    GraphQLType::Enum(EnumType {
                        def_location,
                        name: enum_def.name.to_string(),
                        values,
                    }),
                )
            },

            TypeDefinition::InputObject(inputobj_def) => {
                let def_location = loc::SourceLocation::from_pos(file_path, inputobj_def.position);
                let mut fields = IndexMap::new();
                Self::input_fields_from_ast(
                    file_path,
                    inputobj_def.name.as_str(),
                    &inputobj_def.fields,
                    &mut fields,
                )?;
                self.types_map_builder.add_new_type(
                    def_location.clone(),
                    inputobj_def.name.as_str(),
                    GraphQLType::InputObject(InputObjectType {
                        def_location,
                        fields,
                        name: inputobj_def.name.to_string(),
                    }),
                )
            },

            TypeDefinition::Interface(iface_def) => {
                let type_data = Self::object_or_interface_data_from_ast(
                    file_path,
                    iface_def.position,
                    iface_def.name.as_str(),
                    &iface_def.implements_interfaces,
                    &iface_def.fields,
                )?;
                self.types_map_builder.add_new_type(
                    type_data.def_location.clone(),
                    iface_def.name.as_str(),
                    GraphQLType::Interface(InterfaceType(type_data)),
                )
            },

            TypeDefinition::Object(obj_def) => {
                let type_data = Self::object_or_interface_data_from_ast(
                    file_path,
                    obj_def.position,
                    obj_def.name.as_str(),
                    &obj_def.implements_interfaces,
                    &obj_def.fields,
                )?;
                self.types_map_builder.add_new_type(
                    type_data.def_location.clone(),
                    obj_def.name.as_str(),
                    GraphQLType::Object(ObjectType(type_data)),
                )
            },

            TypeDefinition::Scalar(scalar_def) => {
                let def_location = loc::SourceLocation::from_pos(file_path, scalar_def.position);
                self.types_map_builder.add_new_type(
                    def_location.clone(),
                    scalar_def.name.as_str(),
                    GraphQLType::Scalar(ScalarType {
                        def_location,
                        name: scalar_def.name.to_string(),
                    }),
                )
            },

            TypeDefinition::Union(union_def) => {
                let def_location = loc::SourceLocation::from_pos(file_path, union_def.position);
                let mut members = IndexMap::new();
                for member_name in &union_def.types {
                    if members.contains_key(member_name) {
                        return Err(SchemaBuildError::DuplicatedUnionMember {
                            type_name: union_def.name.to_string(),
                            member_name: member_name.to_string(),
                            location: def_location,
                        });
                    }
                    members.insert(member_name.to_string(), NamedGraphQLTypeRef::new(member_name));
                }
                self.types_map_builder.add_new_type(
                    def_location.clone(),
                    union_def.name.as_str(),
                    GraphQLType::Union(UnionType {
                        def_location,
                        members,
                        name: union_def.name.to_string(),
                    }),
                )
            },
        }
    }

    fn object_or_interface_data_from_ast(
        file_path: Option<&Path>,
        pos: ast::Pos,
        type_name: &str,
        ast_interfaces: &[String],
        ast_fields: &[ast::schema::Field],
    ) -> Result<ObjectOrInterfaceTypeData> {
        let mut interfaces = vec![];
        Self::interfaces_from_ast(file_path, pos, type_name, ast_interfaces, &mut interfaces)?;

        let mut fields = IndexMap::new();
        Self::fields_from_ast(file_path, type_name, ast_fields, &mut fields)?;

        Ok(ObjectOrInterfaceTypeData {
            def_location: loc::SourceLocation::from_pos(file_path, pos),
            fields,
            interfaces,
            name: type_name.to_string(),
        })
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error)]
pub enum SchemaBuildError {
    #[error("The `{enum_name}` enum defines the value `{value_name}` more than once")]
    DuplicateEnumValueDefinition {
        enum_name: String,
        value_name: String,
        location: loc::SourceLocation,
    },

    #[error("The `{type_name}` type defines the field `{field_name}` more than once")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::SourceLocation,
        field_def2: loc::SourceLocation,
    },

    #[error(
        "The `{type_name}` type declares that it implements the \
        `{duplicated_interface_name}` interface more than once"
    )]
    DuplicateInterfaceImplementsDeclaration {
        def_location: loc::SourceLocation,
        duplicated_interface_name: String,
        type_name: String,
    },

    #[error("Multiple {operation} root operation types were defined")]
    DuplicateOperationDefinition {
        operation: OperationKind,
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error("The `{type_name}` union lists `{member_name}` as a member more than once")]
    DuplicatedUnionMember {
        type_name: String,
        member_name: String,
        location: loc::SourceLocation,
    },

    #[error("Attempted to extend `{type_name}`, which is not defined")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_type_loc: loc::SourceLocation,
    },

    #[error("Invalid `@cost` annotation on `{type_name}.{field_name}`: {message}")]
    InvalidCostDirective {
        type_name: String,
        field_name: String,
        message: String,
        location: loc::SourceLocation,
    },

    #[error(
        "Attempted to extend `{type_name}` using an extension for a different \
        kind of type"
    )]
    InvalidExtensionType {
        type_name: String,
        extension_loc: loc::SourceLocation,
    },

    #[error("Attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error("The constant cost of `{type_name}.{field_name}` must be finite; found `{weight}`")]
    NonFiniteFieldCost {
        type_name: String,
        field_name: String,
        weight: f64,
    },

    #[error(
        "The {operation1} and {operation2} root operations are both defined \
        with the `{reused_type_name}` type, but all root operations must be \
        defined with different types"
    )]
    NonUniqueOperationTypes {
        reused_type_name: String,
        operation1: OperationKind,
        operation2: OperationKind,
    },

    #[error("Error parsing schema{}: {err}", file.as_ref().map(|f| format!(" file {f:?}")).unwrap_or_default())]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error("The {operation} root operation type `{type_name}` is not an object type")]
    RootOperationTypeNotObject {
        operation: OperationKind,
        type_name: String,
        location: loc::SourceLocation,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),

    #[error(
        "Encountered the following type-validation errors while building the \
        schema:\n\n{}",
        errors.iter()
            .map(|s| format!("  * {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },

    #[error("The {operation} root operation type `{type_name}` is not defined")]
    UndefinedRootOperationType {
        operation: OperationKind,
        type_name: String,
        location: loc::SourceLocation,
    },

    #[error(
        "A cost was attached to `{type_name}.{field_name}`, but no such field \
        is defined on an object or interface type"
    )]
    UnknownCostTarget {
        type_name: String,
        field_name: String,
    },
}

/// Represents the file location of a given type's definition in the schema.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::SourceLocation,
    pub type_name: String,
}
