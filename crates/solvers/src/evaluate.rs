use decay_core::{DecayProblem, Observer, OneStepRule, Scheme, TwoStepRule};

use crate::{Action, Event, Solution, ZeroCollapse, single_step, two_step};

/// The outcome of running one scheme on a decay problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// The scheme that was run.
    pub scheme: Scheme,

    /// Driver result, including the computed value at `t = 1`.
    pub solution: Solution,

    /// Exact solution `e^-A`.
    pub exact: f64,

    /// Absolute error `|computed - exact|`.
    pub error: f64,
}

impl Evaluation {
    /// Returns the value the scheme computed.
    #[must_use]
    pub fn computed(&self) -> f64 {
        self.solution.value
    }
}

/// Runs `scheme` on `problem` and compares the result with the exact solution.
///
/// Single-step schemes start from `y0 = 1` and run `10^n` iterations.
/// Two-step schemes are seeded with `y0 = 1` and one explicit Euler step
/// `y1 = 1 - A·h`, then run the remaining `10^n - 1` iterations.
#[must_use]
pub fn evaluate(problem: &DecayProblem, scheme: Scheme, policy: ZeroCollapse) -> Evaluation {
    evaluate_observed(problem, scheme, policy, ())
}

/// Like [`evaluate`], with an observer attached to the selected driver.
pub fn evaluate_observed<Obs>(
    problem: &DecayProblem,
    scheme: Scheme,
    policy: ZeroCollapse,
    observer: Obs,
) -> Evaluation
where
    Obs: Observer<Event, Action>,
{
    let rate = problem.rate();
    let h = problem.step_size();
    let y0 = problem.initial();

    let solution = match scheme {
        Scheme::OneStep(method) => {
            let rule = OneStepRule::new(method, rate, h);
            single_step::solve(y0, &rule, problem.iterations(), policy, observer)
        }
        Scheme::TwoStep(method) => {
            let rule = TwoStepRule::new(method, rate, h);
            let y1 = y0 * (1.0 - rate * h);
            two_step::solve(y0, y1, &rule, problem.iterations() - 1, observer)
        }
    };

    let exact = problem.exact();

    Evaluation {
        scheme,
        solution,
        exact,
        error: (solution.value - exact).abs(),
    }
}
