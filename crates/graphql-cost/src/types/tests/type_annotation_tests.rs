use crate::ast;
use crate::schema::SchemaBuilder;
use crate::types::TypeAnnotation;
use crate::DerefByNameError;

fn parse_annotation(type_str: &str) -> TypeAnnotation {
    let doc = ast::query::parse(format!("query($v: {type_str}) {{ a }}").as_str())
        .expect("valid document");
    let Some(ast::query::Definition::Operation(
        graphql_parser::query::OperationDefinition::Query(query),
    )) = doc.definitions.first() else {
        panic!("expected a query");
    };
    TypeAnnotation::from_ast_type(&query.variable_definitions[0].var_type)
}

#[test]
fn named_nullable() {
    let annot = parse_annotation("User");
    assert!(annot.nullable());
    assert!(!annot.is_list());
    assert_eq!(annot.innermost_named_type_annotation().graphql_type_name(), "User");
    assert_eq!(annot.to_string(), "User");
}

#[test]
fn named_non_null() {
    let annot = parse_annotation("User!");
    assert!(!annot.nullable());
    assert!(annot.as_named_annotation().is_some());
    assert_eq!(annot.to_string(), "User!");
}

#[test]
fn list_of_non_null() {
    let annot = parse_annotation("[User!]!");
    assert!(!annot.nullable());
    assert!(annot.is_list());

    let list_annot = annot.as_list_annotation().unwrap();
    assert!(!list_annot.inner_type_annotation().nullable());
    assert_eq!(annot.innermost_named_type_annotation().graphql_type_name(), "User");
    assert_eq!(annot.to_string(), "[User!]!");
}

#[test]
fn nested_lists() {
    let annot = parse_annotation("[[Int]]");
    assert!(annot.nullable());
    assert!(annot.is_list());
    assert!(annot.as_list_annotation().unwrap().inner_type_annotation().is_list());
    assert_eq!(annot.to_string(), "[[Int]]");
}

#[test]
fn innermost_type_lookup() {
    let schema = SchemaBuilder::from_str(None, "type Query { a: Int } type User { b: Int }")
        .unwrap()
        .build()
        .unwrap();

    let annot = parse_annotation("[User!]");
    assert_eq!(annot.innermost_type(&schema).map(|t| t.name()), Ok("User"));

    let dangling = parse_annotation("[Missing]");
    assert_eq!(
        dangling.innermost_type(&schema).map(|t| t.name()),
        Err(DerefByNameError::DanglingReference("Missing".to_string())),
    );
}
