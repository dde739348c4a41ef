//! Static cost estimation for GraphQL operations.
//!
//! Given a [`Schema`](crate::schema::Schema) whose fields carry
//! [`CostDescriptor`](crate::types::CostDescriptor)s, a parsed
//! [`Document`](crate::operation::Document) and the caller's variable
//! values, [`compute_cost()`] produces a single scalar cost for the selected
//! operation without running any resolvers. Hosts use the number for
//! admission control: rejecting or throttling operations that would be
//! disproportionately expensive to execute.
//!
//! ```
//! use graphql_cost::compute_cost;
//! use graphql_cost::operation::Document;
//! use graphql_cost::schema::SchemaBuilder;
//! use graphql_cost::Value;
//! use indexmap::IndexMap;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = SchemaBuilder::from_str(None, r#"
//!     type Query {
//!         users: [User] @cost(weight: 10)
//!     }
//!     type User {
//!         name: String @cost(weight: 2)
//!     }
//! "#)?.build()?;
//! let document = Document::from_str("{ users { name } }", None)?;
//!
//! let estimate = compute_cost(
//!     &schema,
//!     &document,
//!     &Value::Null,
//!     &Value::Null,
//!     &IndexMap::new(),
//!     None,
//! ).await.expect("no fatal errors");
//! assert_eq!(estimate.cost(), 20.0);
//! # Ok(())
//! # }
//! ```

pub mod ast;
pub mod cost;
mod file_reader;
pub mod loc;
mod named_ref;
pub mod operation;
pub mod schema;
pub mod types;
mod value;

pub use cost::compute_cost;
pub use cost::CostError;
pub use cost::CostEstimate;
pub use cost::CostEstimator;
pub use cost::CostOptions;
pub use cost::ResponsePath;
pub use file_reader::ReadContentError;
pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
pub use value::Arguments;
pub use value::Value;
