use thiserror::Error;

/// Largest exponent `n` for which `10^n` fits in a `u64` iteration count.
pub const MAX_EXPONENT: u32 = 19;

/// Errors that can occur when validating a decay problem.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ProblemError {
    #[error("decay rate must be finite, got {0}")]
    Rate(f64),

    #[error("exponent must be at most {max}, got {0}", max = MAX_EXPONENT)]
    Exponent(u32),
}

/// The linear decay problem `y' = -A·y`, `y(0) = 1`, integrated to `t = 1`.
///
/// The exponent `n` fixes both the step size `h = 10^-n` and the number of
/// iterations `10^n`, so every run ends at `t = 1` where the exact solution
/// is `e^-A`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayProblem {
    rate: f64,
    exponent: u32,
}

impl DecayProblem {
    /// Creates a validated problem.
    ///
    /// # Errors
    ///
    /// Returns an error if `rate` is not finite or `exponent` exceeds
    /// [`MAX_EXPONENT`].
    ///
    /// The bound only guarantees that `10^exponent` fits in a `u64`. Every
    /// iteration is executed, so exponents much above 9 take impractically
    /// long to run.
    pub fn new(rate: f64, exponent: u32) -> Result<Self, ProblemError> {
        if !rate.is_finite() {
            return Err(ProblemError::Rate(rate));
        }
        if exponent > MAX_EXPONENT {
            return Err(ProblemError::Exponent(exponent));
        }

        Ok(Self { rate, exponent })
    }

    /// Returns the decay rate `A`.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the decimal exponent `n`.
    #[must_use]
    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// Returns the step size `h = 10^-n`.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        10.0_f64.powf(-f64::from(self.exponent))
    }

    /// Returns the iteration count `10^n`.
    #[must_use]
    pub fn iterations(&self) -> u64 {
        // `new` bounds the exponent so the power cannot overflow.
        10_u64.pow(self.exponent)
    }

    /// Returns the initial value `y(0)`.
    #[must_use]
    pub fn initial(&self) -> f64 {
        1.0
    }

    /// Returns the product `A·h` that governs stability.
    #[must_use]
    pub fn product(&self) -> f64 {
        self.rate * self.step_size()
    }

    /// Returns the exact solution `y(1) = e^-A`.
    #[must_use]
    pub fn exact(&self) -> f64 {
        (-self.rate).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn derives_step_and_iterations_from_exponent() {
        let problem = DecayProblem::new(1.0, 3).unwrap();

        assert_relative_eq!(problem.step_size(), 1e-3, epsilon = 1e-18);
        assert_eq!(problem.iterations(), 1000);
        assert_relative_eq!(problem.product(), 1e-3, epsilon = 1e-18);
    }

    #[test]
    fn zero_exponent_is_a_single_unit_step() {
        let problem = DecayProblem::new(2.0, 0).unwrap();

        assert_eq!(problem.step_size(), 1.0);
        assert_eq!(problem.iterations(), 1);
    }

    #[test]
    fn largest_exponent_fits() {
        let problem = DecayProblem::new(1.0, MAX_EXPONENT).unwrap();
        assert_eq!(problem.iterations(), 10_000_000_000_000_000_000);
    }

    #[test]
    fn rejects_overflowing_exponent() {
        assert_eq!(
            DecayProblem::new(1.0, MAX_EXPONENT + 1),
            Err(ProblemError::Exponent(MAX_EXPONENT + 1))
        );
    }

    #[test]
    fn rejects_non_finite_rate() {
        assert!(matches!(
            DecayProblem::new(f64::NAN, 1),
            Err(ProblemError::Rate(_))
        ));
        assert_eq!(
            DecayProblem::new(f64::INFINITY, 1),
            Err(ProblemError::Rate(f64::INFINITY))
        );
    }

    #[test]
    fn exact_solution_at_unit_time() {
        let problem = DecayProblem::new(1.0, 1).unwrap();
        assert_relative_eq!(problem.exact(), 0.367_879_441_171_442_3, epsilon = 1e-15);
    }
}
