use crate::ast;
use crate::operation::DirectiveAnnotation;
use crate::operation::FieldSelection;
use crate::operation::FragmentSpread;
use crate::operation::InlineFragment;
use std::path::Path;

#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(FieldSelection),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}
impl Selection {
    pub fn directives(&self) -> &[DirectiveAnnotation] {
        match self {
            Self::Field(field) => field.directives(),
            Self::FragmentSpread(spread) => spread.directives(),
            Self::InlineFragment(inline_frag) => inline_frag.directives(),
        }
    }

    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        ast_selection: &ast::query::Selection,
    ) -> Self {
        use ast::query::Selection as AstSelection;
        match ast_selection {
            AstSelection::Field(ast_field) =>
                Self::Field(FieldSelection::from_ast(file_path, ast_field)),
            AstSelection::FragmentSpread(ast_spread) =>
                Self::FragmentSpread(FragmentSpread::from_ast(file_path, ast_spread)),
            AstSelection::InlineFragment(ast_inline_frag) =>
                Self::InlineFragment(InlineFragment::from_ast(file_path, ast_inline_frag)),
        }
    }
}
