use crate::cost::CostContext;
use crate::cost::CostError;
use crate::cost::CostFunctionFailurePolicy;
use crate::cost::CostOptions;
use crate::cost::FragmentTable;
use crate::cost::MergedField;
use crate::cost::NegativeCostPolicy;
use crate::cost::PendingSelectionSet;
use crate::cost::ResponsePath;
use crate::cost::SelectionMerger;
use crate::cost::SiblingEvaluation;
use crate::cost::TypeConditionMatcher;
use crate::cost::Variables;
use crate::operation::FieldSelection;
use crate::schema::Schema;
use crate::types::CostDescriptor;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::Arguments;
use crate::Value;
use futures::future::BoxFuture;
use futures::FutureExt;
use tokio_util::sync::CancellationToken;

type Result<T> = std::result::Result<T, CostError>;

const META_FIELD_NAMES: [&str; 3] = ["__schema", "__type", "__typename"];

/// No resolver runs during estimation, so every field below the root sees a
/// `null` parent.
static NULL_PARENT_VALUE: Value = Value::Null;

/// A field's own weight, or the non-fatal error that stands in for it.
enum OwnWeight {
    Weight(f64),
    Unavailable(CostError),
}

/// Walks one operation, costing each merged field and recursing into its
/// sub-selections.
pub(crate) struct CostEvaluator<'a> {
    pub cancellation: &'a CancellationToken,
    pub fragments: &'a FragmentTable<'a>,
    pub options: &'a CostOptions,
    pub root_value: &'a Value,
    pub schema: &'a Schema,
    pub variables: &'a Variables,
}
impl<'a> CostEvaluator<'a> {
    /// Cost the merged fields of `selection_sets` (all selected against
    /// `current_type`) and sum them in response-key order.
    pub fn evaluate_selection_sets(
        &'a self,
        current_type: &'a GraphQLType,
        selection_sets: Vec<PendingSelectionSet<'a>>,
        path: ResponsePath,
    ) -> BoxFuture<'a, Result<CostContext>> {
        async move {
            let merger = SelectionMerger::new(
                TypeConditionMatcher::new(self.schema),
                self.fragments,
                self.variables,
            );
            let merged_fields = merger.merge(current_type, &selection_sets, &path)?;

            let mut ctx = CostContext::default();
            match self.options.sibling_evaluation {
                SiblingEvaluation::Sequential => {
                    for merged_field in merged_fields {
                        ctx.absorb(self.evaluate_field(merged_field, &path).await?);
                    }
                },

                SiblingEvaluation::Concurrent => {
                    // The first fatal error drops every sibling still in
                    // flight.
                    let field_costs = futures::future::try_join_all(
                        merged_fields.into_iter().map(|merged_field| {
                            self.evaluate_field(merged_field, &path)
                        }),
                    ).await?;
                    for field_cost in field_costs {
                        ctx.absorb(field_cost);
                    }
                },
            }
            Ok(ctx)
        }.boxed()
    }

    fn check_cancelled(&self) -> Result<()> {
        if self.cancellation.is_cancelled() {
            return Err(CostError::Cancelled);
        }
        Ok(())
    }

    fn evaluate_field(
        &'a self,
        merged_field: MergedField<'a>,
        parent_path: &ResponsePath,
    ) -> BoxFuture<'a, Result<CostContext>> {
        let path = parent_path.child(merged_field.response_key);
        async move {
            self.check_cancelled()?;

            let mut ctx = CostContext::default();
            let field_name = merged_field.field.name();
            if META_FIELD_NAMES.contains(&field_name) {
                return Ok(ctx);
            }

            let owner_type = merged_field.owner_type;
            let field_def = owner_type.field(field_name)
                .ok_or_else(|| CostError::UnknownField {
                    type_name: owner_type.name().to_string(),
                    field_name: field_name.to_string(),
                    path: path.clone(),
                })?;

            let arguments = self.resolve_arguments(field_def, merged_field.field);
            let own_weight = match self.own_weight(owner_type, field_def, &arguments, &path).await? {
                OwnWeight::Weight(own_weight) => own_weight,
                OwnWeight::Unavailable(err) => {
                    ctx.record(err);
                    return Ok(ctx);
                },
            };

            let type_annot = field_def.type_annotation();
            let return_type = type_annot.innermost_type(self.schema)
                .map_err(|_| CostError::UnknownType {
                    type_name: type_annot.innermost_named_type_annotation()
                        .graphql_type_name()
                        .to_string(),
                    path: path.clone(),
                })?;

            if !return_type.is_composite() || merged_field.selection_sets.is_empty() {
                tracing::debug!(
                    "Field {path} cost breakdown: (own weight) {own_weight}",
                );
                ctx.add_cost(own_weight);
                return Ok(ctx);
            }

            let children = self.evaluate_selection_sets(
                return_type,
                merged_field.selection_sets,
                path.clone(),
            ).await?;
            let children_cost = children.total();

            let cost =
                if type_annot.is_list() {
                    tracing::debug!(
                        "Field {path} cost breakdown: (own weight) {own_weight} * \
                        (children) {children_cost} = {}",
                        own_weight * children_cost,
                    );
                    own_weight * children_cost
                } else {
                    tracing::debug!(
                        "Field {path} cost breakdown: (own weight) {own_weight} + \
                        (children) {children_cost} = {}",
                        own_weight + children_cost,
                    );
                    own_weight + children_cost
                };

            ctx.add_cost(cost);
            ctx.absorb_errors(children);
            Ok(ctx)
        }.boxed()
    }

    async fn own_weight(
        &self,
        owner_type: &GraphQLType,
        field_def: &Field,
        arguments: &Arguments,
        path: &ResponsePath,
    ) -> Result<OwnWeight> {
        let weight = match field_def.cost() {
            None => 0.0,

            Some(CostDescriptor::Constant(weight)) => *weight,

            Some(CostDescriptor::Computed(cost_fn)) => {
                let parent_value =
                    if path.keys().len() == 1 {
                        self.root_value
                    } else {
                        &NULL_PARENT_VALUE
                    };

                let result = tokio::select! {
                    biased;
                    _ = self.cancellation.cancelled() => return Err(CostError::Cancelled),
                    result = cost_fn(parent_value, arguments) => result,
                };

                let result = result.and_then(|weight| {
                    anyhow::ensure!(
                        weight.is_finite(),
                        "cost function returned a non-finite weight ({weight})"
                    );
                    Ok(weight)
                });

                match result {
                    Ok(weight) => weight,
                    Err(err) => {
                        let err = CostError::CostFunctionFailed {
                            type_name: owner_type.name().to_string(),
                            field_name: field_def.name().to_string(),
                            message: format!("{err:#}"),
                            path: path.clone(),
                        };
                        return match self.options.cost_function_failure {
                            CostFunctionFailurePolicy::Abort => Err(err),
                            CostFunctionFailurePolicy::Continue => Ok(OwnWeight::Unavailable(err)),
                        };
                    },
                }
            },
        };

        if weight >= 0.0 {
            return Ok(OwnWeight::Weight(weight));
        }

        Ok(match self.options.negative_cost {
            NegativeCostPolicy::PassThrough => OwnWeight::Weight(weight),
            NegativeCostPolicy::Clamp => {
                tracing::debug!("Clamping negative weight {weight} of field {path} to 0");
                OwnWeight::Weight(0.0)
            },
            NegativeCostPolicy::Reject => OwnWeight::Unavailable(CostError::NegativeCost {
                type_name: owner_type.name().to_string(),
                field_name: field_def.name().to_string(),
                cost: weight,
                path: path.clone(),
            }),
        })
    }

    /// Substitute variables into the selection's arguments and fill in the
    /// schema-declared defaults of arguments that were omitted (or bound to
    /// an absent variable).
    fn resolve_arguments(
        &self,
        field_def: &Field,
        field_selection: &FieldSelection,
    ) -> Arguments {
        let mut arguments = Arguments::new();
        for (param_name, param) in field_def.parameters() {
            let value = field_selection.arguments()
                .get(param_name)
                .and_then(|value| value.resolve(self.variables))
                .or_else(|| param.default_value().cloned());
            if let Some(value) = value {
                arguments.insert(param_name.to_string(), value);
            }
        }

        // Arguments the field doesn't declare would fail validation; they
        // are passed through as written rather than dropped.
        for (arg_name, value) in field_selection.arguments() {
            if field_def.parameters().contains_key(arg_name) {
                continue;
            }
            if let Some(value) = value.resolve(self.variables) {
                arguments.insert(arg_name.to_string(), value);
            }
        }

        arguments
    }
}
