use serde::Deserialize;
use std::time::Duration;

/// Knobs controlling how [`CostEstimator`](crate::CostEstimator) treats
/// misbehaving cost functions and schedules its work.
///
/// Every option has a default, so an empty configuration block is valid:
///
/// ```
/// use graphql_cost::CostOptions;
/// use graphql_cost::cost::NegativeCostPolicy;
///
/// let options: CostOptions = serde_json::from_str(r#"{
///     "negative_cost": "clamp",
///     "timeout": "250ms"
/// }"#).unwrap();
/// assert_eq!(options.negative_cost, NegativeCostPolicy::Clamp);
/// assert_eq!(options.timeout, Some(std::time::Duration::from_millis(250)));
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CostOptions {
    pub cost_function_failure: CostFunctionFailurePolicy,
    pub negative_cost: NegativeCostPolicy,
    pub sibling_evaluation: SiblingEvaluation,

    /// Upper bound on the wall-clock time of a single estimation. An
    /// estimation that runs out of time yields
    /// [`CostError::Cancelled`](crate::CostError::Cancelled).
    #[serde(deserialize_with = "humantime_serde::deserialize")]
    pub timeout: Option<Duration>,
}
impl CostOptions {
    pub fn with_cost_function_failure(mut self, policy: CostFunctionFailurePolicy) -> Self {
        self.cost_function_failure = policy;
        self
    }

    pub fn with_negative_cost(mut self, policy: NegativeCostPolicy) -> Self {
        self.negative_cost = policy;
        self
    }

    pub fn with_sibling_evaluation(mut self, sibling_evaluation: SiblingEvaluation) -> Self {
        self.sibling_evaluation = sibling_evaluation;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// What to do when a computed cost function returns an error.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum CostFunctionFailurePolicy {
    /// Record a [`CostError::CostFunctionFailed`](crate::CostError::CostFunctionFailed)
    /// and count the field (and everything beneath it) as zero.
    #[default]
    Continue,

    /// Abort the whole estimation with the failure.
    Abort,
}

/// What to do with a field whose own weight comes out negative.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum NegativeCostPolicy {
    /// Use the negative weight unchanged.
    #[default]
    PassThrough,

    /// Treat the weight as zero.
    Clamp,

    /// Record a [`CostError::NegativeCost`](crate::CostError::NegativeCost)
    /// and count the field (and everything beneath it) as zero.
    Reject,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SiblingEvaluation {
    /// Estimate sibling fields one after another.
    #[default]
    Sequential,

    /// Estimate sibling fields concurrently, then sum their costs in
    /// response-key order.
    Concurrent,
}
