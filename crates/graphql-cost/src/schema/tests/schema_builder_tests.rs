use crate::loc;
use crate::operation::OperationKind;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::schema::TypeValidationError;
use crate::types::CostDescriptor;
use crate::types::GraphQLType;
use crate::Value;
use std::collections::BTreeSet;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

mod basics {
    use super::*;

    #[test]
    fn build_without_load() -> Result<()> {
        let schema = SchemaBuilder::new().build();

        assert!(matches!(
            schema.unwrap_err(),
            SchemaBuildError::NoQueryOperationTypeDefined,
        ));

        Ok(())
    }

    #[test]
    fn default_root_operation_types() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "type Mutation { b: Int }\n",
        ))?.build()?;

        assert_eq!(schema.query_type().name(), "Query");
        assert_eq!(schema.mutation_type().map(|t| t.name()), Some("Mutation"));
        assert!(schema.subscription_type().is_none());
        assert!(schema.root_operation_type(&OperationKind::Subscription).is_none());

        Ok(())
    }

    #[test]
    fn schema_block_overrides_root_names() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "schema { query: Root }\n",
            "type Root { a: Int }\n",
            "type Query { b: Int }\n",
        ))?.build()?;

        assert_eq!(schema.query_type().name(), "Root");
        assert_eq!(
            schema.root_operation_type(&OperationKind::Query).map(|t| t.name()),
            Some("Root"),
        );

        Ok(())
    }

    #[test]
    fn schema_block_naming_undefined_type() {
        let result = SchemaBuilder::from_str(None, concat!(
            "schema { query: Root }\n",
            "type Query { a: Int }\n",
        )).and_then(|builder| builder.build());

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::UndefinedRootOperationType {
                operation: OperationKind::Query,
                type_name,
                ..
            } if type_name == "Root",
        ));
    }

    #[test]
    fn duplicate_schema_block_entries() {
        let result = SchemaBuilder::from_str(None, concat!(
            "schema { query: Query }\n",
            "schema { query: Query }\n",
            "type Query { a: Int }\n",
        ));

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateOperationDefinition {
                operation: OperationKind::Query,
                ..
            },
        ));
    }

    #[test]
    fn root_types_must_be_distinct() {
        let result = SchemaBuilder::from_str(None, concat!(
            "schema { query: Query mutation: Query }\n",
            "type Query { a: Int }\n",
        )).and_then(|builder| builder.build());

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::NonUniqueOperationTypes {
                reused_type_name,
                operation1: OperationKind::Query,
                operation2: OperationKind::Mutation,
            } if reused_type_name == "Query",
        ));
    }

    #[test]
    fn root_types_must_be_objects() {
        let result = SchemaBuilder::from_str(None, concat!(
            "schema { query: Thing }\n",
            "union Thing = A\n",
            "type A { a: Int }\n",
        )).and_then(|builder| builder.build());

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::RootOperationTypeNotObject {
                operation: OperationKind::Query,
                ..
            },
        ));
    }

    #[test]
    fn parse_error_names_file() {
        let result = SchemaBuilder::from_str(
            Some(Path::new("broken.graphql")),
            "type Query {",
        );

        let err = result.unwrap_err();
        assert!(matches!(
            &err,
            SchemaBuildError::ParseError { file: Some(file), .. }
                if file == Path::new("broken.graphql"),
        ));
        assert!(err.to_string().contains("broken.graphql"));
    }

    #[test]
    fn load_across_multiple_strs() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query { me: User }")?
            .load_str(None, "type User { name: String }")?
            .build()?;

        assert!(schema.lookup_type("User").and_then(|t| t.as_object()).is_some());

        Ok(())
    }

    #[test]
    fn load_file_records_location() -> Result<()> {
        let file_path = std::env::temp_dir().join(format!(
            "graphql-cost-schema-builder-{}.graphql",
            std::process::id(),
        ));
        std::fs::write(&file_path, "\n  type Query { a: Int }\n").unwrap();

        let schema = SchemaBuilder::from_file(&file_path)?.build();
        std::fs::remove_file(&file_path).unwrap();
        let schema = schema?;

        assert_eq!(schema.query_type().def_location(), loc::SourceLocation {
            col: 3,
            file: Some(file_path),
            line: 2,
        });

        Ok(())
    }

    #[test]
    fn load_missing_file() {
        let result = SchemaBuilder::from_file("/definitely/not/a/schema.graphql");

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::SchemaFileReadError(_),
        ));
    }

    #[test]
    fn builtin_scalars_are_predefined() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, "type Query { a: Int }")?.build()?;

        for name in ["Boolean", "Float", "ID", "Int", "String"] {
            assert_eq!(schema.lookup_type(name).map(|t| t.name()), Some(name));
        }

        Ok(())
    }

    #[test]
    fn field_parameters_keep_defaults() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "type Query {\n",
            "  search(first: Int = 10, term: String!): [String]\n",
            "}\n",
        ))?.build()?;

        let search = schema.query_type().field("search").unwrap();
        let params = search.parameters();
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["first", "term"]);
        assert_eq!(params["first"].default_value(), Some(&Value::Int(10)));
        assert_eq!(params["term"].default_value(), None);
        assert!(!params["term"].type_annotation().nullable());
        assert!(search.type_annotation().is_list());

        Ok(())
    }
}

mod validation {
    use super::*;

    #[test]
    fn duplicate_type_definition() {
        let result = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "type Query { b: Int }\n",
        ));

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateTypeDefinition { type_name, .. }
                if type_name == "Query",
        ));
    }

    #[test]
    fn redefining_builtin_scalar() {
        let result = SchemaBuilder::from_str(None, "scalar Int");

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateTypeDefinition { type_name, .. }
                if type_name == "Int",
        ));
    }

    #[test]
    fn duplicate_field_definition() {
        let result = SchemaBuilder::from_str(None, "type Query { a: Int a: String }");

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateFieldNameDefinition { type_name, field_name, .. }
                if type_name == "Query" && field_name == "a",
        ));
    }

    #[test]
    fn undefined_field_type() {
        let result = SchemaBuilder::from_str(None, "type Query { me: User }")
            .and_then(|builder| builder.build());

        let Err(SchemaBuildError::TypeValidationErrors { errors }) = result else {
            panic!("expected type validation errors");
        };
        assert!(matches!(
            errors.as_slice(),
            [TypeValidationError::UndefinedTypeName { parent_name, undefined_type_name, .. }]
                if parent_name == "Query.me" && undefined_type_name == "User",
        ));
    }

    #[test]
    fn undefined_parameter_type() {
        let result = SchemaBuilder::from_str(None, "type Query { a(filter: Filter): Int }")
            .and_then(|builder| builder.build());

        let Err(SchemaBuildError::TypeValidationErrors { errors }) = result else {
            panic!("expected type validation errors");
        };
        assert!(matches!(
            errors.as_slice(),
            [TypeValidationError::UndefinedTypeName { undefined_type_name, .. }]
                if undefined_type_name == "Filter",
        ));
    }

    #[test]
    fn implements_non_interface() {
        let result = SchemaBuilder::from_str(None, concat!(
            "type Query implements Other { a: Int }\n",
            "type Other { a: Int }\n",
        )).and_then(|builder| builder.build());

        let Err(SchemaBuildError::TypeValidationErrors { errors }) = result else {
            panic!("expected type validation errors");
        };
        assert!(matches!(
            errors.as_slice(),
            [TypeValidationError::ImplementsNonInterfaceType { interface_name, .. }]
                if interface_name == "Other",
        ));
    }

    #[test]
    fn duplicate_implements_declaration() {
        let result = SchemaBuilder::from_str(None, concat!(
            "type Query implements Node & Node { id: ID }\n",
            "interface Node { id: ID }\n",
        ));

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateInterfaceImplementsDeclaration {
                duplicated_interface_name,
                ..
            } if duplicated_interface_name == "Node",
        ));
    }

    #[test]
    fn interface_implementation_cycle() {
        let result = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "interface A implements B { a: Int }\n",
            "interface B implements A { a: Int }\n",
        )).and_then(|builder| builder.build());

        let Err(SchemaBuildError::TypeValidationErrors { errors }) = result else {
            panic!("expected type validation errors");
        };
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|err| matches!(
            err,
            TypeValidationError::InterfaceImplementationCycle { cycle, .. }
                if cycle.len() == 3,
        )));
    }

    #[test]
    fn non_object_union_member() {
        let result = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "interface Node { id: ID }\n",
            "union Thing = Query | Node\n",
        )).and_then(|builder| builder.build());

        let Err(SchemaBuildError::TypeValidationErrors { errors }) = result else {
            panic!("expected type validation errors");
        };
        assert!(matches!(
            errors.as_slice(),
            [TypeValidationError::NonObjectUnionMember { union_name, member_name, .. }]
                if union_name == "Thing" && member_name == "Node",
        ));
    }

    #[test]
    fn duplicated_union_member() {
        let result = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "union Thing = Query | Query\n",
        ));

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::DuplicatedUnionMember { member_name, .. }
                if member_name == "Query",
        ));
    }

    #[test]
    fn duplicate_enum_value() {
        let result = SchemaBuilder::from_str(None, "enum Size { SMALL SMALL }");

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateEnumValueDefinition { value_name, .. }
                if value_name == "SMALL",
        ));
    }
}

mod extensions {
    use super::*;

    #[test]
    fn extension_may_precede_definition() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "extend type Query { b: Int @cost(weight: 2) }")?
            .load_str(None, "type Query { a: Int }")?
            .build()?;

        let query_type = schema.query_type();
        assert!(query_type.field("a").is_some());
        assert_eq!(
            query_type.field("b").and_then(|f| f.cost()).and_then(|c| c.as_constant()),
            Some(2.0),
        );

        Ok(())
    }

    #[test]
    fn extension_adds_interfaces() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "interface Node { id: ID }\n",
            "extend type Query implements Node { id: ID }\n",
        ))?.build()?;

        let query_type = schema.query_type().as_object().unwrap();
        assert!(query_type.implements_interface(&schema, "Node"));

        Ok(())
    }

    #[test]
    fn extension_duplicating_field() {
        let result = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "extend type Query { a: Int }\n",
        )).and_then(|builder| builder.build());

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateFieldNameDefinition { field_name, .. }
                if field_name == "a",
        ));
    }

    #[test]
    fn extension_of_undefined_type() {
        let result = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "extend type Missing { a: Int }\n",
        )).and_then(|builder| builder.build());

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::ExtensionOfUndefinedType { type_name, .. }
                if type_name == "Missing",
        ));
    }

    #[test]
    fn extension_of_different_kind() {
        let result = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "union Thing = Query\n",
            "extend type Thing { a: Int }\n",
        )).and_then(|builder| builder.build());

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::InvalidExtensionType { type_name, .. }
                if type_name == "Thing",
        ));
    }

    #[test]
    fn union_enum_and_input_extensions() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "type Other { b: Int }\n",
            "union Thing = Query\n",
            "extend union Thing = Other\n",
            "enum Size { SMALL }\n",
            "extend enum Size { LARGE }\n",
            "input Filter { term: String }\n",
            "extend input Filter { limit: Int }\n",
            "scalar Date\n",
            "extend scalar Date @deprecated\n",
        ))?.build()?;

        let GraphQLType::Union(thing) = schema.lookup_type("Thing").unwrap() else {
            panic!("expected a union");
        };
        assert_eq!(thing.member_type_names(), vec!["Query", "Other"]);

        let GraphQLType::Enum(size) = schema.lookup_type("Size").unwrap() else {
            panic!("expected an enum");
        };
        assert_eq!(size.values().iter().collect::<Vec<_>>(), vec!["SMALL", "LARGE"]);

        let GraphQLType::InputObject(filter) = schema.lookup_type("Filter").unwrap() else {
            panic!("expected an input object");
        };
        assert_eq!(filter.fields().keys().collect::<Vec<_>>(), vec!["term", "limit"]);

        Ok(())
    }
}

mod cost_metadata {
    use super::*;

    #[test]
    fn cost_directive_weights() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "type Query {\n",
            "  int: Int @cost(weight: 3)\n",
            "  float: Int @cost(weight: 1.5)\n",
            "  string: Int @cost(weight: \"7\")\n",
            "  free: Int\n",
            "}\n",
        ))?.build()?;

        let weight = |name: &str| schema.query_type()
            .field(name)
            .and_then(|f| f.cost())
            .and_then(|c| c.as_constant());
        assert_eq!(weight("int"), Some(3.0));
        assert_eq!(weight("float"), Some(1.5));
        assert_eq!(weight("string"), Some(7.0));
        assert!(schema.query_type().field("free").unwrap().cost().is_none());

        Ok(())
    }

    #[test]
    fn invalid_cost_directive() {
        let result = SchemaBuilder::from_str(None, concat!(
            "type Query {\n",
            "  a: Int @cost(weight: [1])\n",
            "}\n",
        ));

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::InvalidCostDirective { type_name, field_name, location, .. }
                if type_name == "Query" && field_name == "a" && location.line == 2,
        ));
    }

    #[test]
    fn non_finite_cost_directive() {
        let result = SchemaBuilder::from_str(None, concat!(
            "type Query {\n",
            "  a: Int\n",
            "  b: Int @cost(weight: \"NaN\")\n",
            "}\n",
        ));

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::InvalidCostDirective { type_name, field_name, location, .. }
                if type_name == "Query" && field_name == "b" && location.line == 3,
        ));
    }

    #[test]
    fn non_finite_field_cost() {
        let result = SchemaBuilder::from_str(None, "type Query { a: Int }")
            .map(|builder| builder.with_field_cost("Query", "a", CostDescriptor::constant(f64::INFINITY)))
            .and_then(|builder| builder.build());

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::NonFiniteFieldCost { type_name, field_name, weight }
                if type_name == "Query" && field_name == "a" && weight == f64::INFINITY,
        ));
    }

    #[test]
    fn cost_directive_definition_is_accepted() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "directive @cost(weight: String!) on FIELD_DEFINITION\n",
            "type Query { a: Int @cost(weight: \"4\") }\n",
        ))?.build()?;

        assert_eq!(
            schema.query_type().field("a").and_then(|f| f.cost()).and_then(|c| c.as_constant()),
            Some(4.0),
        );

        Ok(())
    }

    #[test]
    fn field_cost_overrides_directive() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, "type Query { a: Int @cost(weight: 3) }")?
            .with_field_cost("Query", "a", 11.0)
            .build()?;

        assert_eq!(
            schema.query_type().field("a").and_then(|f| f.cost()).and_then(|c| c.as_constant()),
            Some(11.0),
        );

        Ok(())
    }

    #[test]
    fn field_cost_registered_before_load() -> Result<()> {
        let schema = SchemaBuilder::new()
            .with_field_cost("User", "friends", CostDescriptor::from_fn(|_, _| Ok(1.0)))
            .load_str(None, "type Query { me: User } type User { friends: [User] }")?
            .build()?;

        let friends = schema.lookup_type("User").unwrap().field("friends").unwrap();
        assert!(matches!(friends.cost(), Some(CostDescriptor::Computed(_))));

        Ok(())
    }

    #[test]
    fn field_cost_on_interface_field() -> Result<()> {
        let schema = SchemaBuilder::from_str(None, concat!(
            "type Query { node: Node }\n",
            "interface Node { id: ID }\n",
        ))?
            .with_field_cost("Node", "id", CostDescriptor::constant(2.0))
            .build()?;

        assert_eq!(
            schema.lookup_type("Node")
                .and_then(|t| t.field("id"))
                .and_then(|f| f.cost())
                .and_then(|c| c.as_constant()),
            Some(2.0),
        );

        Ok(())
    }

    #[test]
    fn field_cost_unknown_target() {
        let schema_builder = || SchemaBuilder::from_str(None, "type Query { a: Int }");

        let unknown_field = schema_builder()
            .map(|builder| builder.with_field_cost("Query", "b", 1.0))
            .and_then(|builder| builder.build());
        assert!(matches!(
            unknown_field.unwrap_err(),
            SchemaBuildError::UnknownCostTarget { type_name, field_name }
                if type_name == "Query" && field_name == "b",
        ));

        let unknown_type = schema_builder()
            .map(|builder| builder.with_field_cost("Nope", "a", 1.0))
            .and_then(|builder| builder.build());
        assert!(matches!(
            unknown_type.unwrap_err(),
            SchemaBuildError::UnknownCostTarget { .. },
        ));

        let scalar_type = schema_builder()
            .map(|builder| builder.with_field_cost("Int", "a", 1.0))
            .and_then(|builder| builder.build());
        assert!(matches!(
            scalar_type.unwrap_err(),
            SchemaBuildError::UnknownCostTarget { .. },
        ));
    }
}

mod type_relationships {
    use super::*;

    fn setup_schema() -> crate::schema::Schema {
        SchemaBuilder::from_str(None, concat!(
            "type Query { node: Node }\n",
            "interface Node { id: ID }\n",
            "interface Media implements Node { id: ID url: String }\n",
            "type Photo implements Media & Node { id: ID url: String }\n",
            "type Video implements Media & Node { id: ID url: String }\n",
            "type User implements Node { id: ID }\n",
            "type Tag { label: String }\n",
            "union SearchResult = User | Photo | Tag\n",
        ))
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn possible_types_of_object() {
        let schema = setup_schema();
        let user = schema.lookup_type("User").unwrap();
        assert_eq!(user.possible_type_names(&schema), BTreeSet::from(["User"]));
    }

    #[test]
    fn possible_types_of_interface() {
        let schema = setup_schema();

        let node = schema.lookup_type("Node").unwrap();
        assert_eq!(
            node.possible_type_names(&schema),
            BTreeSet::from(["Photo", "User", "Video"]),
        );

        let media = schema.lookup_type("Media").unwrap();
        assert_eq!(media.possible_type_names(&schema), BTreeSet::from(["Photo", "Video"]));
    }

    #[test]
    fn possible_types_of_union() {
        let schema = setup_schema();
        let search_result = schema.lookup_type("SearchResult").unwrap();
        assert_eq!(
            search_result.possible_type_names(&schema),
            BTreeSet::from(["Photo", "Tag", "User"]),
        );
    }

    #[test]
    fn possible_types_of_scalar() {
        let schema = setup_schema();
        let string = schema.lookup_type("String").unwrap();
        assert!(string.possible_type_names(&schema).is_empty());
    }

    #[test]
    fn interface_implementors_are_indexed_at_build() {
        let schema = setup_schema();

        assert_eq!(
            schema.interface_implementors.get("Node"),
            Some(&BTreeSet::from([
                "Photo".to_string(),
                "User".to_string(),
                "Video".to_string(),
            ])),
        );
        assert_eq!(
            schema.interface_implementors.get("Media").map(|names| names.len()),
            Some(2),
        );
        assert!(!schema.interface_implementors.contains_key("User"));
    }

    #[test]
    fn interface_without_implementors() {
        let schema = SchemaBuilder::from_str(None, concat!(
            "type Query { a: Int }\n",
            "interface Lonely { id: ID }\n",
        ))
            .unwrap()
            .build()
            .unwrap();
        let lonely = schema.lookup_type("Lonely").unwrap();

        assert_eq!(schema.interface_implementors.get("Lonely"), Some(&BTreeSet::new()));
        assert!(lonely.possible_type_names(&schema).is_empty());
    }

    #[test]
    fn transitive_interface_implementation() {
        let schema = setup_schema();
        let media = schema.lookup_type("Media").and_then(|t| t.as_interface()).unwrap();
        assert!(media.implements_interface(&schema, "Node"));
        assert_eq!(media.interface_names(), vec!["Node"]);
        assert_eq!(
            media.interfaces(&schema).iter().map(|iface| iface.name()).collect::<Vec<_>>(),
            vec!["Node"],
        );
    }
}
