use crate::cost::FragmentTable;
use crate::operation::Document;
use crate::CostError;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[test]
fn indexes_every_fragment_by_name() -> Result<()> {
    let document = Document::from_str(concat!(
        "{ ...A }\n",
        "fragment A on Query { a }\n",
        "fragment B on Query { b }\n",
    ), None)?;

    let fragments = FragmentTable::index(&document)?;

    assert_eq!(fragments.len(), 2);
    assert_eq!(fragments.get("A").map(|frag| frag.type_condition()), Some("Query"));
    assert_eq!(fragments.get("B").map(|frag| frag.name()), Some("B"));
    assert!(fragments.get("C").is_none());
    Ok(())
}

#[test]
fn document_without_fragments() -> Result<()> {
    let document = Document::from_str("{ a }", None)?;
    let fragments = FragmentTable::index(&document)?;
    assert_eq!(fragments.len(), 0);
    Ok(())
}

#[test]
fn duplicate_names_are_rejected_even_when_unused() -> Result<()> {
    let document = Document::from_str(concat!(
        "{ a }\n",
        "fragment Dup on Query { a }\n",
        "fragment Dup on Query { b }\n",
    ), None)?;

    let err = FragmentTable::index(&document).expect_err("duplicate fragment");
    assert!(matches!(
        err,
        CostError::DuplicateFragmentName { ref fragment_name, ref def1, ref def2 }
            if fragment_name == "Dup" && def1.line == 2 && def2.line == 3,
    ));
    Ok(())
}
