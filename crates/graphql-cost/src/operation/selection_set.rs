use crate::ast;
use crate::operation::Selection;
use std::path::Path;

#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub(crate) selections: Vec<Selection>,
}
impl SelectionSet {
    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        ast_selection_set: &ast::query::SelectionSet,
    ) -> Self {
        Self {
            selections: ast_selection_set.items
                .iter()
                .map(|ast_selection| Selection::from_ast(file_path, ast_selection))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn selections(&self) -> &[Selection] {
        self.selections.as_slice()
    }
}
