use crate::graphql_files;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use graphql_cost::cost::CostFunctionFailurePolicy;
use graphql_cost::cost::SiblingEvaluation;
use graphql_cost::operation::Document;
use graphql_cost::schema::Schema;
use graphql_cost::schema::SchemaBuilder;
use graphql_cost::CostError;
use graphql_cost::CostEstimate;
use graphql_cost::CostEstimator;
use graphql_cost::CostOptions;
use graphql_cost::ResponsePath;
use graphql_cost::Value;
use indexmap::IndexMap;
use serde::Serialize;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, clap::Args)]
pub(crate) struct EstimateCmd {
    #[arg(
        help="Abort estimation (instead of counting the field as zero) when a \
             cost function fails.",
        long,
    )]
    abort_on_cost_function_error: bool,

    #[arg(
        help="Estimate sibling fields concurrently.",
        long,
    )]
    concurrent: bool,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for schema \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Exit with a failure code when the estimated cost is greater \
             than this.",
        long,
    )]
    max_cost: Option<f64>,

    #[arg(
        help="Name of the operation to estimate. Required when the query \
             document contains more than one operation.",
        long,
    )]
    operation: Option<String>,

    #[arg(
        help="Path to the GraphQL document holding the operation.",
        long,
    )]
    query: PathBuf,

    #[arg(
        help="Schema files, or directories containing schema files.",
        long,
        num_args=1..,
        required=true,
    )]
    schema: Vec<PathBuf>,

    #[arg(
        help="Give up (and fail) when estimation takes longer than this many \
             milliseconds.",
        long,
    )]
    timeout_ms: Option<u64>,

    #[arg(
        help="Path to a JSON file holding an object of variable values.",
        long,
    )]
    variables: Option<PathBuf>,
}
impl EstimateCmd {
    fn cost_options(&self) -> CostOptions {
        let mut options = CostOptions::default();
        if self.abort_on_cost_function_error {
            options = options.with_cost_function_failure(CostFunctionFailurePolicy::Abort);
        }
        if self.concurrent {
            options = options.with_sibling_evaluation(SiblingEvaluation::Concurrent);
        }
        if let Some(timeout_ms) = self.timeout_ms {
            options = options.with_timeout(Duration::from_millis(timeout_ms));
        }
        options
    }

    fn load_schema(&self) -> anyhow::Result<Schema> {
        let file_exts = graphql_files::normalize_exts(&self.graphql_file_exts);
        let schema_files = graphql_files::collect(&self.schema, &file_exts)
            .context("Failed to scan schema paths")?;
        anyhow::ensure!(!schema_files.is_empty(), "No schema files found");

        let schema = SchemaBuilder::new()
            .load_files(schema_files)?
            .build()?;
        Ok(schema)
    }
}

#[inherent::inherent]
impl RunnableCommand for EstimateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let schema = match self.load_schema() {
            Ok(schema) => schema,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Errors loading schema: {err:#}",
                output_utils::RED_X,
            )),
        };

        let document = match Document::from_file(&self.query) {
            Ok(document) => document,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Errors loading query document: {err:#}",
                output_utils::RED_X,
            )),
        };

        let variable_values = match self.variables.as_deref().map(read_variables).transpose() {
            Ok(variable_values) => variable_values.unwrap_or_default(),
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Errors loading variables: {err:#}",
                output_utils::RED_X,
            )),
        };

        let result = CostEstimator::new(&schema)
            .with_options(self.cost_options())
            .estimate(
                &document,
                &Value::Null,
                &Value::Null,
                &variable_values,
                self.operation.as_deref(),
            )
            .await;

        let report = EstimateReport::from_result(&result);
        let report_json = match serde_json::to_string_pretty(&report) {
            Ok(report_json) => report_json,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Failed to serialize the report: {err}",
                output_utils::RED_X,
            )),
        };
        let output = CommandResult::stdout(format_args!("{report_json}"));

        match (&result, self.max_cost) {
            (Err(_), _) => output.failed(format_args!(
                "{} Cost estimation failed.",
                output_utils::RED_X,
            )),

            (Ok(estimate), Some(max_cost)) if estimate.cost() > max_cost =>
                output.failed(format_args!(
                    "{} Estimated cost {} exceeds the maximum of {max_cost}.",
                    output_utils::RED_X,
                    estimate.cost(),
                )),

            (Ok(estimate), _) => {
                log::info!("{} Estimated cost: {}", output_utils::GREEN_CHECK, estimate.cost());
                output
            },
        }
    }
}

/// Parse a JSON object of variable values.
pub(super) fn parse_variables(json: &str) -> anyhow::Result<IndexMap<String, Value>> {
    let serde_json::Value::Object(entries) = serde_json::from_str(json)? else {
        anyhow::bail!("Variables must be a JSON object");
    };
    Ok(entries.into_iter()
        .map(|(name, value)| (name, Value::from(value)))
        .collect())
}

fn read_variables(path: &Path) -> anyhow::Result<IndexMap<String, Value>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_variables(&json)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

#[derive(Debug, PartialEq, Serialize)]
pub(super) struct EstimateReport {
    /// `None` when a fatal error stopped estimation.
    pub cost: Option<f64>,
    pub errors: Vec<ErrorReport>,
}
impl EstimateReport {
    pub fn from_result(result: &Result<CostEstimate, Vec<CostError>>) -> Self {
        match result {
            Ok(estimate) => Self {
                cost: Some(estimate.cost()),
                errors: estimate.errors().iter().map(ErrorReport::from).collect(),
            },
            Err(errors) => Self {
                cost: None,
                errors: errors.iter().map(ErrorReport::from).collect(),
            },
        }
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub(super) struct ErrorReport {
    pub kind: &'static str,
    pub message: String,
    pub path: Option<ResponsePath>,
}
impl std::convert::From<&CostError> for ErrorReport {
    fn from(err: &CostError) -> Self {
        Self {
            kind: err.code(),
            message: err.to_string(),
            path: err.path().cloned(),
        }
    }
}
