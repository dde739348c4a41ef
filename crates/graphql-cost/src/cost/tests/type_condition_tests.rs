use crate::cost::tests::test_utils::schema_from_str;
use crate::cost::TypeConditionMatcher;
use crate::schema::Schema;
use crate::CostError;
use crate::ResponsePath;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

const SDL: &str = concat!(
    "type Query { node: Node }\n",
    "interface Node { id: ID }\n",
    "interface Named { name: String }\n",
    "type User implements Node & Named { id: ID name: String }\n",
    "type Post implements Node { id: ID }\n",
    "type Tag implements Named { name: String }\n",
    "type Orphan { id: ID }\n",
    "union Media = Post | Tag\n",
);

fn schema() -> Schema {
    schema_from_str(SDL)
}

fn narrowed(schema: &Schema, condition: Option<&str>, current: &str) -> Result<Option<String>> {
    let matcher = TypeConditionMatcher::new(schema);
    let current_type = schema.lookup_type(current).expect("current type exists");
    Ok(matcher.narrow(condition, current_type, &ResponsePath::root())?
        .map(|narrowed_type| narrowed_type.name().to_string()))
}

#[test]
fn missing_condition_always_applies() -> Result<()> {
    let schema = schema();
    assert_eq!(narrowed(&schema, None, "Node")?, Some("Node".to_string()));
    assert_eq!(narrowed(&schema, None, "User")?, Some("User".to_string()));
    Ok(())
}

#[test]
fn same_type_applies() -> Result<()> {
    let schema = schema();
    assert_eq!(narrowed(&schema, Some("Orphan"), "Orphan")?, Some("Orphan".to_string()));
    assert_eq!(narrowed(&schema, Some("Media"), "Media")?, Some("Media".to_string()));
    Ok(())
}

#[test]
fn object_condition_within_abstract_type_narrows() -> Result<()> {
    let schema = schema();
    assert_eq!(narrowed(&schema, Some("User"), "Node")?, Some("User".to_string()));
    assert_eq!(narrowed(&schema, Some("Tag"), "Media")?, Some("Tag".to_string()));
    Ok(())
}

#[test]
fn abstract_condition_within_object_keeps_object() -> Result<()> {
    let schema = schema();
    assert_eq!(narrowed(&schema, Some("Node"), "User")?, Some("User".to_string()));
    assert_eq!(narrowed(&schema, Some("Media"), "Post")?, Some("Post".to_string()));
    Ok(())
}

#[test]
fn overlapping_abstract_types_apply() -> Result<()> {
    let schema = schema();
    assert_eq!(narrowed(&schema, Some("Named"), "Node")?, Some("Named".to_string()));
    assert_eq!(narrowed(&schema, Some("Node"), "Media")?, Some("Node".to_string()));
    Ok(())
}

#[test]
fn disjoint_types_do_not_apply() -> Result<()> {
    let schema = schema();
    let matcher = TypeConditionMatcher::new(&schema);
    let node = schema.lookup_type("Node").expect("Node exists");

    assert!(!matcher.applies(Some("Orphan"), node, &ResponsePath::root())?);
    assert!(!matcher.applies(Some("Tag"), node, &ResponsePath::root())?);
    assert_eq!(narrowed(&schema, Some("User"), "Post")?, None);
    Ok(())
}

#[test]
fn unknown_condition_type() {
    let schema = schema();
    let matcher = TypeConditionMatcher::new(&schema);
    let node = schema.lookup_type("Node").expect("Node exists");
    let path = ResponsePath::from(["node"].as_slice());

    let err = matcher.narrow(Some("Ghost"), node, &path).expect_err("unknown type");
    assert_eq!(err, CostError::UnknownType {
        type_name: "Ghost".to_string(),
        path,
    });
}
