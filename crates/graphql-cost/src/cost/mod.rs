//! The cost estimator.
//!
//! Estimation walks the selected operation the way an executor would
//! (operation selection, variable coercion, fragment expansion, type
//! condition matching and response-key field merging) but, rather than
//! resolving values, it asks each field's
//! [`CostDescriptor`](crate::types::CostDescriptor) for a weight and folds
//! those weights into a single number.

mod compute_cost;
mod cost_context;
mod cost_error;
mod cost_evaluator;
mod cost_options;
mod fragment_table;
mod operation_selector;
mod selection_merger;
mod type_condition;
mod variable_binder;

pub use compute_cost::compute_cost;
pub use compute_cost::CostEstimate;
pub use compute_cost::CostEstimator;
pub(crate) use cost_context::CostContext;
pub use cost_error::CostError;
pub use cost_error::ResponsePath;
pub(crate) use cost_evaluator::CostEvaluator;
pub use cost_options::CostFunctionFailurePolicy;
pub use cost_options::CostOptions;
pub use cost_options::NegativeCostPolicy;
pub use cost_options::SiblingEvaluation;
pub(crate) use fragment_table::FragmentTable;
pub(crate) use selection_merger::MergedField;
pub(crate) use selection_merger::PendingSelectionSet;
pub(crate) use selection_merger::SelectionMerger;
pub(crate) use type_condition::TypeConditionMatcher;
pub use variable_binder::VariableBinding;
pub use variable_binder::Variables;

#[cfg(test)]
mod tests;
