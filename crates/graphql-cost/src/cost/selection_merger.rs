use crate::cost::CostError;
use crate::cost::FragmentTable;
use crate::cost::ResponsePath;
use crate::cost::TypeConditionMatcher;
use crate::cost::Variables;
use crate::operation::DirectiveAnnotation;
use crate::operation::FieldSelection;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::types::GraphQLType;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, CostError>;

/// A selection set waiting to be expanded, together with the names of the
/// fragments that were being expanded (at any ancestor level) when it was
/// reached.
#[derive(Clone, Debug)]
pub(crate) struct PendingSelectionSet<'doc> {
    pub fragment_stack: Vec<&'doc str>,
    pub selection_set: &'doc SelectionSet,
}
impl<'doc> PendingSelectionSet<'doc> {
    pub fn root(selection_set: &'doc SelectionSet) -> Self {
        Self {
            fragment_stack: vec![],
            selection_set,
        }
    }
}

/// All selections of one response key at one level, merged into a single
/// logical field.
#[derive(Debug)]
pub(crate) struct MergedField<'a> {
    /// The first selection seen for this response key. Its name and
    /// arguments are the ones that get costed.
    pub field: &'a FieldSelection,

    /// The type `field` is looked up on.
    pub owner_type: &'a GraphQLType,

    pub response_key: &'a str,

    /// Sub-selections of every merged selection, in document order.
    pub selection_sets: Vec<PendingSelectionSet<'a>>,
}

/// Collects the effective fields of a selection set the way an executor's
/// field collection does: `@skip`/`@include` are honoured, applicable
/// fragments are spliced in place and fields sharing a response key are
/// merged.
pub(crate) struct SelectionMerger<'a> {
    fragments: &'a FragmentTable<'a>,
    type_conditions: TypeConditionMatcher<'a>,
    variables: &'a Variables,
}
impl<'a> SelectionMerger<'a> {
    /// Expand and merge `selection_sets` (all selected against
    /// `current_type`) into an ordered list of distinct response keys.
    pub fn merge(
        &self,
        current_type: &'a GraphQLType,
        selection_sets: &[PendingSelectionSet<'a>],
        path: &ResponsePath,
    ) -> Result<Vec<MergedField<'a>>> {
        let mut merged = IndexMap::new();
        for pending in selection_sets {
            let mut fragment_stack = pending.fragment_stack.clone();
            self.collect(
                current_type,
                pending.selection_set,
                &mut fragment_stack,
                path,
                &mut merged,
            )?;
        }
        Ok(merged.into_values().collect())
    }

    pub fn new(
        type_conditions: TypeConditionMatcher<'a>,
        fragments: &'a FragmentTable<'a>,
        variables: &'a Variables,
    ) -> Self {
        Self {
            fragments,
            type_conditions,
            variables,
        }
    }

    fn collect(
        &self,
        current_type: &'a GraphQLType,
        selection_set: &'a SelectionSet,
        fragment_stack: &mut Vec<&'a str>,
        path: &ResponsePath,
        merged: &mut IndexMap<&'a str, MergedField<'a>>,
    ) -> Result<()> {
        for selection in selection_set.selections() {
            if !self.should_include(selection.directives()) {
                continue;
            }

            match selection {
                Selection::Field(field) => {
                    let merged_field = merged.entry(field.response_key())
                        .or_insert_with(|| MergedField {
                            field,
                            owner_type: current_type,
                            response_key: field.response_key(),
                            selection_sets: vec![],
                        });
                    if let Some(sub_selection_set) = field.selection_set() {
                        merged_field.selection_sets.push(PendingSelectionSet {
                            fragment_stack: fragment_stack.clone(),
                            selection_set: sub_selection_set,
                        });
                    }
                },

                Selection::InlineFragment(inline_frag) => {
                    let narrowed_type = self.type_conditions.narrow(
                        inline_frag.type_condition(),
                        current_type,
                        path,
                    )?;
                    let Some(narrowed_type) = narrowed_type else {
                        tracing::trace!(
                            path = %path,
                            type_condition = inline_frag.type_condition(),
                            "Skipping inline fragment that does not apply to `{}`",
                            current_type.name(),
                        );
                        continue;
                    };
                    self.collect(
                        narrowed_type,
                        inline_frag.selection_set(),
                        fragment_stack,
                        path,
                        merged,
                    )?;
                },

                Selection::FragmentSpread(spread) => {
                    let fragment_name = spread.fragment_name();
                    if fragment_stack.contains(&fragment_name) {
                        let mut cycle: Vec<String> = fragment_stack.iter()
                            .skip_while(|name| **name != fragment_name)
                            .map(|name| name.to_string())
                            .collect();
                        cycle.push(fragment_name.to_string());
                        return Err(CostError::CyclicFragment {
                            fragment_name: fragment_name.to_string(),
                            cycle,
                            path: path.clone(),
                        });
                    }

                    let frag_def = self.fragments.get(fragment_name)
                        .ok_or_else(|| CostError::UnknownFragment {
                            fragment_name: fragment_name.to_string(),
                            path: path.clone(),
                        })?;

                    let narrowed_type = self.type_conditions.narrow(
                        Some(frag_def.type_condition()),
                        current_type,
                        path,
                    )?;
                    let Some(narrowed_type) = narrowed_type else {
                        tracing::trace!(
                            path = %path,
                            "Skipping fragment `{fragment_name}` on `{}`, which does not \
                            apply to `{}`",
                            frag_def.type_condition(),
                            current_type.name(),
                        );
                        continue;
                    };

                    tracing::trace!(path = %path, "Expanding fragment `{fragment_name}`");
                    fragment_stack.push(fragment_name);
                    let result = self.collect(
                        narrowed_type,
                        frag_def.selection_set(),
                        fragment_stack,
                        path,
                        merged,
                    );
                    fragment_stack.pop();
                    result?;
                },
            }
        }
        Ok(())
    }

    fn directive_condition(
        &self,
        directives: &[DirectiveAnnotation],
        directive_name: &str,
    ) -> Option<bool> {
        directives.iter()
            .find(|annot| annot.name() == directive_name)
            .and_then(|annot| annot.arguments().get("if"))
            .and_then(|condition| condition.resolve(self.variables))
            .and_then(|condition| condition.as_bool())
    }

    fn should_include(&self, directives: &[DirectiveAnnotation]) -> bool {
        let skipped = self.directive_condition(directives, "skip") == Some(true);
        let excluded = self.directive_condition(directives, "include") == Some(false);
        !skipped && !excluded
    }
}

