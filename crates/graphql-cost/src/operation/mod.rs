mod directive_annotation;
mod document;
mod field_selection;
mod fragment_definition;
mod fragment_spread;
mod inline_fragment;
mod operation_definition;
mod operation_kind;
mod selection;
mod selection_set;
mod variable_definition;

pub use directive_annotation::DirectiveAnnotation;
pub use document::Definition;
pub use document::Document;
pub use document::DocumentBuildError;
pub use field_selection::FieldSelection;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use operation_definition::OperationDefinition;
pub use operation_kind::OperationKind;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use variable_definition::VariableDefinition;
