use crate::cost::operation_selector;
use crate::cost::variable_binder;
use crate::cost::CostError;
use crate::cost::CostEvaluator;
use crate::cost::CostOptions;
use crate::cost::FragmentTable;
use crate::cost::PendingSelectionSet;
use crate::cost::ResponsePath;
use crate::operation::Document;
use crate::schema::Schema;
use crate::Value;
use indexmap::IndexMap;
use tokio_util::sync::CancellationToken;

/// The outcome of an estimation that hit no fatal errors.
#[derive(Clone, Debug, PartialEq)]
pub struct CostEstimate {
    cost: f64,
    errors: Vec<CostError>,
}
impl CostEstimate {
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Non-fatal errors recorded along the way. When this is non-empty,
    /// [`CostEstimate::cost()`] is a best-effort figure which counts each
    /// failed field as zero.
    pub fn errors(&self) -> &[CostError] {
        self.errors.as_slice()
    }

    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Estimates operation costs against one [`Schema`].
///
/// ```
/// use graphql_cost::cost::SiblingEvaluation;
/// use graphql_cost::CostEstimator;
/// use graphql_cost::CostOptions;
/// use graphql_cost::operation::Document;
/// use graphql_cost::schema::SchemaBuilder;
/// use graphql_cost::Value;
/// use indexmap::IndexMap;
/// use tokio_util::sync::CancellationToken;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let schema = SchemaBuilder::from_str(None, "type Query { a: Int @cost(weight: 3) }")?
///     .build()?;
/// let document = Document::from_str("query Q { a }", None)?;
///
/// let cancellation = CancellationToken::new();
/// let estimator = CostEstimator::new(&schema)
///     .with_options(
///         CostOptions::default()
///             .with_sibling_evaluation(SiblingEvaluation::Concurrent),
///     )
///     .with_cancellation(cancellation.clone());
///
/// let estimate = estimator.estimate(
///     &document,
///     &Value::Null,
///     &Value::Null,
///     &IndexMap::new(),
///     Some("Q"),
/// ).await.expect("no fatal errors");
/// assert_eq!(estimate.cost(), 3.0);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct CostEstimator<'schema> {
    cancellation: CancellationToken,
    options: CostOptions,
    schema: &'schema Schema,
}
impl<'schema> CostEstimator<'schema> {
    /// Estimate the cost of one operation of `document`.
    ///
    /// `root_value` is handed to the cost functions of root fields as their
    /// parent value; every deeper field sees `null` since no resolver runs.
    /// `context_value` mirrors the executor's signature and is not consulted.
    ///
    /// Fatal errors are returned as the sole result. Non-fatal errors are
    /// returned inside the [`CostEstimate`] next to a best-effort cost.
    pub async fn estimate(
        &self,
        document: &Document,
        root_value: &Value,
        _context_value: &Value,
        variable_values: &IndexMap<String, Value>,
        operation_name: Option<&str>,
    ) -> Result<CostEstimate, Vec<CostError>> {
        let estimation = self.estimate_impl(
            document,
            root_value,
            variable_values,
            operation_name,
        );

        let result = match self.options.timeout {
            Some(timeout) => match tokio::time::timeout(timeout, estimation).await {
                Ok(result) => result,
                Err(_) => {
                    tracing::warn!("Cost estimation timed out after {timeout:?}");
                    Err(CostError::Cancelled)
                },
            },
            None => estimation.await,
        };

        result.map_err(|err| vec![err])
    }

    pub fn new(schema: &'schema Schema) -> Self {
        Self {
            cancellation: CancellationToken::new(),
            options: CostOptions::default(),
            schema,
        }
    }

    pub fn options(&self) -> &CostOptions {
        &self.options
    }

    /// Cancelling `cancellation` makes any in-flight estimation stop at the
    /// next field (or interrupt the cost function it is awaiting) and fail
    /// with [`CostError::Cancelled`].
    pub fn with_cancellation(mut self, cancellation: CancellationToken) -> Self {
        self.cancellation = cancellation;
        self
    }

    pub fn with_options(mut self, options: CostOptions) -> Self {
        self.options = options;
        self
    }

    async fn estimate_impl(
        &self,
        document: &Document,
        root_value: &Value,
        variable_values: &IndexMap<String, Value>,
        operation_name: Option<&str>,
    ) -> Result<CostEstimate, CostError> {
        let operation = operation_selector::select(document, operation_name)?;
        let variables = variable_binder::bind(
            operation.variable_definitions(),
            variable_values,
        )?;
        let fragments = FragmentTable::index(document)?;
        let root_type = self.schema.root_operation_type(&operation.kind())
            .ok_or(CostError::UnsupportedOperation {
                kind: operation.kind(),
            })?;

        tracing::debug!(
            "Estimating {} `{}` ({} variables, {} fragments)",
            operation.kind(),
            operation.name().unwrap_or("<anonymous>"),
            variables.len(),
            fragments.len(),
        );

        let evaluator = CostEvaluator {
            cancellation: &self.cancellation,
            fragments: &fragments,
            options: &self.options,
            root_value,
            schema: self.schema,
            variables: &variables,
        };
        let ctx = evaluator.evaluate_selection_sets(
            root_type,
            vec![PendingSelectionSet::root(operation.selection_set())],
            ResponsePath::root(),
        ).await?;

        let (cost, errors) = ctx.into_parts();
        tracing::debug!("Estimated cost: {cost} ({} non-fatal errors)", errors.len());
        Ok(CostEstimate { cost, errors })
    }
}

/// Estimate the cost of one operation of `document` with default
/// [`CostOptions`]. See [`CostEstimator::estimate()`].
pub async fn compute_cost(
    schema: &Schema,
    document: &Document,
    root_value: &Value,
    context_value: &Value,
    variable_values: &IndexMap<String, Value>,
    operation_name: Option<&str>,
) -> Result<CostEstimate, Vec<CostError>> {
    CostEstimator::new(schema).estimate(
        document,
        root_value,
        context_value,
        variable_values,
        operation_name,
    ).await
}
