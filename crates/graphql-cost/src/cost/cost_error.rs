use crate::loc;
use crate::operation::OperationKind;
use serde::Serialize;
use thiserror::Error;

/// The sequence of response keys leading from the operation's root to a
/// field. Displays as the keys joined with `.` (e.g. `deep.deeper.a`).
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResponsePath(Vec<String>);
impl ResponsePath {
    pub(crate) fn child(&self, response_key: &str) -> Self {
        let mut keys = self.0.clone();
        keys.push(response_key.to_string());
        Self(keys)
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> &[String] {
        self.0.as_slice()
    }

    pub fn root() -> Self {
        Self(vec![])
    }
}
impl std::fmt::Display for ResponsePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.join(".").as_str())
    }
}
impl<S: AsRef<str>> std::convert::From<&[S]> for ResponsePath {
    fn from(keys: &[S]) -> Self {
        Self(keys.iter().map(|key| key.as_ref().to_string()).collect())
    }
}

/// An error raised while estimating the cost of an operation.
///
/// Most errors are fatal: they abort estimation and are returned as the sole
/// result. Cost function failures and rejected negative costs are recorded
/// next to a best-effort cost instead (see [`CostError::is_fatal()`]),
/// unless [`CostOptions`](crate::CostOptions) escalate them.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CostError {
    #[error(
        "The document contains {operation_count} operations, so an \
        operation name must be provided"
    )]
    AmbiguousOperation {
        operation_count: usize,
    },

    #[error("Cost estimation was cancelled")]
    Cancelled,

    #[error("The cost function for `{type_name}.{field_name}` failed at `{path}`: {message}")]
    CostFunctionFailed {
        type_name: String,
        field_name: String,
        message: String,
        path: ResponsePath,
    },

    #[error("Fragment `{fragment_name}` spreads itself: {}", cycle.join(" -> "))]
    CyclicFragment {
        fragment_name: String,
        cycle: Vec<String>,
        path: ResponsePath,
    },

    #[error("Multiple fragments named `{fragment_name}` were defined")]
    DuplicateFragmentName {
        fragment_name: String,
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error("Variable `${variable_name}` of non-null type `{type_annotation}` was not provided")]
    MissingRequiredVariable {
        variable_name: String,
        type_annotation: String,
    },

    #[error("The cost of `{type_name}.{field_name}` at `{path}` is negative ({cost})")]
    NegativeCost {
        type_name: String,
        field_name: String,
        cost: f64,
        path: ResponsePath,
    },

    #[error("The document does not contain any operations")]
    NoOperation,

    #[error("The `{type_name}` type does not define a field named `{field_name}` (at `{path}`)")]
    UnknownField {
        type_name: String,
        field_name: String,
        path: ResponsePath,
    },

    #[error("Unknown fragment `{fragment_name}`")]
    UnknownFragment {
        fragment_name: String,
        path: ResponsePath,
    },

    #[error("Unknown operation named `{operation_name}`")]
    UnknownOperation {
        operation_name: String,
    },

    #[error("Unknown type `{type_name}`")]
    UnknownType {
        type_name: String,
        path: ResponsePath,
    },

    #[error("The schema does not define a {kind} root operation type")]
    UnsupportedOperation {
        kind: OperationKind,
    },
}
impl CostError {
    /// A stable identifier for this kind of error, suitable for the `code`
    /// extension of a GraphQL error response.
    pub fn code(&self) -> &'static str {
        match self {
            Self::AmbiguousOperation { .. } => "AMBIGUOUS_OPERATION",
            Self::Cancelled => "COST_ESTIMATION_CANCELLED",
            Self::CostFunctionFailed { .. } => "COST_FUNCTION_FAILED",
            Self::CyclicFragment { .. } => "CYCLIC_FRAGMENT",
            Self::DuplicateFragmentName { .. } => "DUPLICATE_FRAGMENT_NAME",
            Self::MissingRequiredVariable { .. } => "MISSING_REQUIRED_VARIABLE",
            Self::NegativeCost { .. } => "NEGATIVE_COST",
            Self::NoOperation => "NO_OPERATION",
            Self::UnknownField { .. } => "UNKNOWN_FIELD",
            Self::UnknownFragment { .. } => "UNKNOWN_FRAGMENT",
            Self::UnknownOperation { .. } => "UNKNOWN_OPERATION",
            Self::UnknownType { .. } => "UNKNOWN_TYPE",
            Self::UnsupportedOperation { .. } => "UNSUPPORTED_OPERATION",
        }
    }

    /// Whether this kind of error aborts estimation under the default
    /// [`CostOptions`](crate::CostOptions).
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Self::CostFunctionFailed { .. } | Self::NegativeCost { .. },
        )
    }

    /// The response path of the field being estimated when this error was
    /// raised, if the error is tied to one.
    pub fn path(&self) -> Option<&ResponsePath> {
        match self {
            Self::CostFunctionFailed { path, .. }
            | Self::CyclicFragment { path, .. }
            | Self::NegativeCost { path, .. }
            | Self::UnknownField { path, .. }
            | Self::UnknownFragment { path, .. }
            | Self::UnknownType { path, .. }
                => Some(path),

            Self::AmbiguousOperation { .. }
            | Self::Cancelled
            | Self::DuplicateFragmentName { .. }
            | Self::MissingRequiredVariable { .. }
            | Self::NoOperation
            | Self::UnknownOperation { .. }
            | Self::UnsupportedOperation { .. }
                => None,
        }
    }
}
