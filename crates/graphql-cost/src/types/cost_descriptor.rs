use crate::Arguments;
use crate::Value;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::future::Future;
use std::sync::Arc;

/// Signature shared by every computed cost function: given the placeholder
/// parent value and the field's resolved arguments, (eventually) produce the
/// field's own weight.
pub type CostFn = Arc<
    dyn Fn(&Value, &Arguments) -> BoxFuture<'static, anyhow::Result<f64>>
        + Send
        + Sync
>;

/// Cost metadata attached to a [`Field`](crate::types::Field) definition.
///
/// A field without a descriptor weighs zero.
#[derive(Clone)]
pub enum CostDescriptor {
    /// A fixed weight, typically declared in SDL via `@cost(weight: N)`.
    Constant(f64),

    /// A weight computed from the field's arguments. The function may
    /// suspend (e.g. to consult a remote quota service) before producing its
    /// result.
    Computed(CostFn),
}
impl CostDescriptor {
    /// Build a [`CostDescriptor::Computed`] from an asynchronous function.
    ///
    /// ```
    /// use graphql_cost::types::CostDescriptor;
    ///
    /// let descriptor = CostDescriptor::computed(|_parent, args| {
    ///     let first = args.get("first").and_then(|v| v.as_f64()).unwrap_or(10.0);
    ///     async move { anyhow::Ok(first) }
    /// });
    /// ```
    pub fn computed<F, Fut>(func: F) -> Self
    where
        F: Fn(&Value, &Arguments) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<f64>> + Send + 'static,
    {
        Self::Computed(Arc::new(move |parent: &Value, args: &Arguments| {
            func(parent, args).boxed()
        }))
    }

    pub fn constant(weight: f64) -> Self {
        Self::Constant(weight)
    }

    /// Build a [`CostDescriptor::Computed`] from a synchronous function.
    pub fn from_fn<F>(func: F) -> Self
    where
        F: Fn(&Value, &Arguments) -> anyhow::Result<f64> + Send + Sync + 'static,
    {
        Self::Computed(Arc::new(move |parent: &Value, args: &Arguments| {
            futures::future::ready(func(parent, args)).boxed()
        }))
    }

    /// The constant weight of this descriptor, if it has one.
    pub fn as_constant(&self) -> Option<f64> {
        if let Self::Constant(weight) = self {
            Some(*weight)
        } else {
            None
        }
    }
}
impl std::fmt::Debug for CostDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constant(weight) => f.debug_tuple("Constant").field(weight).finish(),
            Self::Computed(_) => f.write_str("Computed(<fn>)"),
        }
    }
}
impl std::convert::From<f64> for CostDescriptor {
    fn from(weight: f64) -> Self {
        Self::Constant(weight)
    }
}
