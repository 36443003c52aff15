/// A one-step recurrence that scales the current iterate by a factor.
///
/// For a linear problem with fixed step size the factor is the same on every
/// call, so the driver computes `y_{k+1} = y_k * factor()`.
pub trait SingleStep {
    /// Returns the multiplicative factor for the next iteration.
    fn factor(&self) -> f64;
}

/// A two-step recurrence computing the next iterate from the two before it.
pub trait TwoStep {
    /// Returns `y_{k+1}` given `prev2 = y_{k-1}` and `prev1 = y_k`.
    fn next(&self, prev2: f64, prev1: f64) -> f64;
}

impl<F> SingleStep for F
where
    F: Fn() -> f64,
{
    fn factor(&self) -> f64 {
        self()
    }
}

impl<F> TwoStep for F
where
    F: Fn(f64, f64) -> f64,
{
    fn next(&self, prev2: f64, prev1: f64) -> f64 {
        self(prev2, prev1)
    }
}
