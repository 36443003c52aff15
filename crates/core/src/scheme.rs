//! The six finite-difference schemes for `y' = -A·y`.
//!
//! Each scheme is either a one-step rule, producing a constant per-iteration
//! factor, or a two-step rule, producing the next iterate from the previous
//! two. Rules are small value types holding the decay rate `A` and step size
//! `h`, so the update is inspectable without running a driver.
//!
//! | Index | Scheme | Update |
//! |---|---|---|
//! | 1 | Explicit Euler | `y * (1 - A·h)` |
//! | 2 | Implicit Euler | `y / (1 + A·h)` |
//! | 3 | Crank–Nicolson | `y * (1 - A·h/2) / (1 + A·h/2)` |
//! | 4 | Leapfrog | `y0 - 2·h·A·y1` |
//! | 5 | BDF2 | `(2·y1 - 0.5·y0) / (1.5 + A·h)` |
//! | 6 | BDF2, alternate form | `(2·y1 + (A·h - 1.5)·y0) / 0.5` |

use std::fmt;

use thiserror::Error;

use crate::{SingleStep, TwoStep};

/// A scheme index outside `1..=6`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("unknown scheme index {0}, expected 1 to 6")]
pub struct UnknownScheme(pub u64);

/// Single-step schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OneStepMethod {
    /// Forward Euler, first order, stable only for `A·h <= 2`.
    ExplicitEuler,

    /// Backward Euler, first order, unconditionally stable.
    ImplicitEuler,

    /// Trapezoidal rule, second order, unconditionally stable.
    CrankNicolson,
}

/// Two-step schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TwoStepMethod {
    /// Explicit midpoint rule.
    Leapfrog,

    /// Second-order backward differentiation.
    Bdf2,

    /// BDF2 stencil rearranged to solve for `y_{k+1}` explicitly.
    ///
    /// Consistent, but its parasitic root is near 3 so it diverges.
    Bdf2Alternate,
}

/// One of the six supported schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    OneStep(OneStepMethod),
    TwoStep(TwoStepMethod),
}

impl Scheme {
    /// All schemes in index order.
    pub const ALL: [Scheme; 6] = [
        Scheme::OneStep(OneStepMethod::ExplicitEuler),
        Scheme::OneStep(OneStepMethod::ImplicitEuler),
        Scheme::OneStep(OneStepMethod::CrankNicolson),
        Scheme::TwoStep(TwoStepMethod::Leapfrog),
        Scheme::TwoStep(TwoStepMethod::Bdf2),
        Scheme::TwoStep(TwoStepMethod::Bdf2Alternate),
    ];

    /// Maps a one-based command-line index to a scheme.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownScheme`] if `index` is not in `1..=6`.
    pub fn from_index(index: u64) -> Result<Self, UnknownScheme> {
        let position = index.checked_sub(1).ok_or(UnknownScheme(index))?;
        usize::try_from(position)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(UnknownScheme(index))
    }

    /// Returns the one-based index of this scheme.
    #[must_use]
    pub fn index(self) -> u64 {
        match self {
            Scheme::OneStep(OneStepMethod::ExplicitEuler) => 1,
            Scheme::OneStep(OneStepMethod::ImplicitEuler) => 2,
            Scheme::OneStep(OneStepMethod::CrankNicolson) => 3,
            Scheme::TwoStep(TwoStepMethod::Leapfrog) => 4,
            Scheme::TwoStep(TwoStepMethod::Bdf2) => 5,
            Scheme::TwoStep(TwoStepMethod::Bdf2Alternate) => 6,
        }
    }

    /// Returns a human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Scheme::OneStep(OneStepMethod::ExplicitEuler) => "explicit Euler",
            Scheme::OneStep(OneStepMethod::ImplicitEuler) => "implicit Euler",
            Scheme::OneStep(OneStepMethod::CrankNicolson) => "Crank-Nicolson",
            Scheme::TwoStep(TwoStepMethod::Leapfrog) => "leapfrog",
            Scheme::TwoStep(TwoStepMethod::Bdf2) => "BDF2",
            Scheme::TwoStep(TwoStepMethod::Bdf2Alternate) => "BDF2 (alternate form)",
        }
    }

    /// Returns the formal order of accuracy.
    #[must_use]
    pub fn order(self) -> u32 {
        match self {
            Scheme::OneStep(OneStepMethod::ExplicitEuler | OneStepMethod::ImplicitEuler) => 1,
            Scheme::OneStep(OneStepMethod::CrankNicolson) | Scheme::TwoStep(_) => 2,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.index())
    }
}

impl TryFrom<u64> for Scheme {
    type Error = UnknownScheme;

    fn try_from(index: u64) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

/// A one-step scheme bound to a decay rate and step size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OneStepRule {
    /// The update formula.
    pub method: OneStepMethod,

    /// Decay rate `A`.
    pub rate: f64,

    /// Step size `h`.
    pub step: f64,
}

impl OneStepRule {
    /// Binds `method` to a decay rate and step size.
    #[must_use]
    pub fn new(method: OneStepMethod, rate: f64, step: f64) -> Self {
        Self { method, rate, step }
    }

    /// Returns `true` if repeated application cannot grow the iterate.
    #[must_use]
    pub fn is_stable(&self) -> bool {
        self.factor().abs() <= 1.0
    }
}

impl SingleStep for OneStepRule {
    fn factor(&self) -> f64 {
        let ah = self.rate * self.step;
        match self.method {
            OneStepMethod::ExplicitEuler => 1.0 - ah,
            OneStepMethod::ImplicitEuler => 1.0 / (ah + 1.0),
            OneStepMethod::CrankNicolson => (1.0 - ah / 2.0) / (1.0 + ah / 2.0),
        }
    }
}

/// A two-step scheme bound to a decay rate and step size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoStepRule {
    /// The update formula.
    pub method: TwoStepMethod,

    /// Decay rate `A`.
    pub rate: f64,

    /// Step size `h`.
    pub step: f64,
}

impl TwoStepRule {
    /// Binds `method` to a decay rate and step size.
    #[must_use]
    pub fn new(method: TwoStepMethod, rate: f64, step: f64) -> Self {
        Self { method, rate, step }
    }
}

impl TwoStep for TwoStepRule {
    fn next(&self, prev2: f64, prev1: f64) -> f64 {
        let ah = self.rate * self.step;
        match self.method {
            TwoStepMethod::Leapfrog => prev2 - 2.0 * self.step * self.rate * prev1,
            TwoStepMethod::Bdf2 => (2.0 * prev1 - 0.5 * prev2) / (1.5 + ah),
            TwoStepMethod::Bdf2Alternate => (2.0 * prev1 + (ah - 1.5) * prev2) / 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn index_mapping_is_total_and_ordered() {
        for (i, scheme) in Scheme::ALL.iter().enumerate() {
            let index = i as u64 + 1;
            assert_eq!(scheme.index(), index);
            assert_eq!(Scheme::from_index(index), Ok(*scheme));
        }
    }

    #[test]
    fn out_of_range_index_is_reported() {
        assert_eq!(Scheme::from_index(0), Err(UnknownScheme(0)));
        assert_eq!(Scheme::try_from(7), Err(UnknownScheme(7)));
        assert_eq!(Scheme::from_index(u64::MAX), Err(UnknownScheme(u64::MAX)));
    }

    #[test]
    fn one_step_factors() {
        let factor = |method| OneStepRule::new(method, 1.0, 0.1).factor();

        assert_relative_eq!(factor(OneStepMethod::ExplicitEuler), 0.9, epsilon = 1e-15);
        assert_relative_eq!(factor(OneStepMethod::ImplicitEuler), 1.0 / 1.1, epsilon = 1e-15);
        assert_relative_eq!(
            factor(OneStepMethod::CrankNicolson),
            0.95 / 1.05,
            epsilon = 1e-15
        );
    }

    #[test]
    fn explicit_euler_loses_stability_past_two() {
        let stable = OneStepRule::new(OneStepMethod::ExplicitEuler, 19.0, 0.1);
        let unstable = OneStepRule::new(OneStepMethod::ExplicitEuler, 21.0, 0.1);

        assert!(stable.is_stable());
        assert!(!unstable.is_stable());
    }

    #[test]
    fn implicit_schemes_are_stable_for_stiff_rates() {
        for method in [OneStepMethod::ImplicitEuler, OneStepMethod::CrankNicolson] {
            assert!(OneStepRule::new(method, 1.0e6, 0.1).is_stable());
        }
    }

    #[test]
    fn two_step_updates() {
        let next = |method| TwoStepRule::new(method, 1.0, 0.1).next(1.0, 0.9);

        assert_relative_eq!(next(TwoStepMethod::Leapfrog), 0.82, epsilon = 1e-12);
        assert_relative_eq!(next(TwoStepMethod::Bdf2), 1.3 / 1.6, epsilon = 1e-12);
        assert_relative_eq!(next(TwoStepMethod::Bdf2Alternate), 0.8, epsilon = 1e-12);
    }

    #[test]
    fn display_includes_name_and_index() {
        let scheme = Scheme::from_index(3).unwrap();
        assert_eq!(scheme.to_string(), "Crank-Nicolson (3)");
        assert_eq!(scheme.order(), 2);
    }
}
