use crate::ast;
use crate::loc;
use crate::operation::DirectiveAnnotation;
use crate::operation::OperationKind;
use crate::operation::SelectionSet;
use crate::operation::VariableDefinition;
use std::path::Path;

/// A named or anonymous top-level query, mutation or subscription.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) kind: OperationKind,
    pub(crate) name: Option<String>,
    pub(crate) selection_set: SelectionSet,
    pub(crate) variable_definitions: Vec<VariableDefinition>,
}
impl OperationDefinition {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        self.directives.as_slice()
    }

    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        ast_op: &ast::query::OperationDefinition,
    ) -> Self {
        use graphql_parser::query::OperationDefinition as AstOp;
        let (kind, position, name, variable_definitions, directives, selection_set) = match ast_op {
            // Query shorthand: `{ ... }`
            AstOp::SelectionSet(selection_set) => return Self {
                def_location: loc::SourceLocation::from_pos(file_path, selection_set.span.0),
                directives: vec![],
                kind: OperationKind::Query,
                name: None,
                selection_set: SelectionSet::from_ast(file_path, selection_set),
                variable_definitions: vec![],
            },
            AstOp::Query(query) => (
                OperationKind::Query,
                query.position,
                query.name.as_ref(),
                query.variable_definitions.as_slice(),
                query.directives.as_slice(),
                &query.selection_set,
            ),
            AstOp::Mutation(mutation) => (
                OperationKind::Mutation,
                mutation.position,
                mutation.name.as_ref(),
                mutation.variable_definitions.as_slice(),
                mutation.directives.as_slice(),
                &mutation.selection_set,
            ),
            AstOp::Subscription(subscription) => (
                OperationKind::Subscription,
                subscription.position,
                subscription.name.as_ref(),
                subscription.variable_definitions.as_slice(),
                subscription.directives.as_slice(),
                &subscription.selection_set,
            ),
        };

        Self {
            def_location: loc::SourceLocation::from_pos(file_path, position),
            directives: DirectiveAnnotation::from_ast(file_path, directives),
            kind,
            name: name.map(|name| name.to_string()),
            selection_set: SelectionSet::from_ast(file_path, selection_set),
            variable_definitions: variable_definitions
                .iter()
                .map(|ast_var_def| VariableDefinition::from_ast(file_path, ast_var_def))
                .collect(),
        }
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn variable_definitions(&self) -> &[VariableDefinition] {
        self.variable_definitions.as_slice()
    }
}
