use crate::cost::CostError;

/// Running total and non-fatal errors for one subtree of the walk.
///
/// Each field evaluation owns its own [`CostContext`]; parents
/// [`absorb`](CostContext::absorb) their children's contexts in
/// response-key order, so the final total and error order never depend on
/// the order in which concurrently evaluated siblings finished.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct CostContext {
    errors: Vec<CostError>,
    total: f64,
}
impl CostContext {
    pub fn absorb(&mut self, other: CostContext) {
        self.total += other.total;
        self.errors.extend(other.errors);
    }

    /// Take only the errors of `other`, for parents whose cost replaces
    /// (rather than adds to) their children's total.
    pub fn absorb_errors(&mut self, other: CostContext) {
        self.errors.extend(other.errors);
    }

    pub fn add_cost(&mut self, cost: f64) {
        self.total += cost;
    }

    pub fn into_parts(self) -> (f64, Vec<CostError>) {
        (self.total, self.errors)
    }

    pub fn record(&mut self, error: CostError) {
        tracing::warn!(code = error.code(), "{error}");
        self.errors.push(error);
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}
