//! Command-line stability calculator for `y' = -A·y`.
//!
//! Invoked as `decay <scheme> <n> <A>`, it runs the selected scheme with step
//! size `h = 10^-n` for `10^n` iterations and prints the absolute error
//! against `e^-A` in scientific notation.

pub mod args;
pub mod logging;
pub mod report;

use decay_core::{DecayProblem, Scheme, UnknownScheme};
use decay_solvers::{Evaluation, Event, ZeroCollapse, evaluate, evaluate_observed};
use log::{Level, debug, log_enabled, trace};

pub use args::{Args, ArgsError};

/// What a run produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// The scheme ran and was compared with the exact solution.
    Evaluated(Evaluation),

    /// The scheme index did not name a scheme; nothing was computed.
    UnknownScheme(UnknownScheme),
}

/// Parses command-line arguments (without the program name) and runs them.
///
/// # Errors
///
/// Returns an error if the argument count is wrong, an argument does not
/// parse, or the decay problem is invalid.
pub fn run<I>(raw: I) -> Result<Outcome, ArgsError>
where
    I: IntoIterator<Item = String>,
{
    let args = args::parse(raw)?;

    // An unknown index never reads the rate or exponent.
    let scheme = match Scheme::from_index(args.scheme) {
        Ok(scheme) => scheme,
        Err(unknown) => return Ok(Outcome::UnknownScheme(unknown)),
    };

    let problem = DecayProblem::new(args.rate, args.exponent)?;

    debug!(
        "running {scheme} with A={}, h={:e}, {} iterations",
        problem.rate(),
        problem.step_size(),
        problem.iterations()
    );

    let policy = ZeroCollapse::default();
    let evaluation = if log_enabled!(Level::Trace) {
        evaluate_observed(&problem, scheme, policy, |event: &Event| {
            trace!("iteration {}: y = {:e}", event.iteration, event.value);
            None
        })
    } else {
        evaluate(&problem, scheme, policy)
    };

    debug!(
        "computed {:e}, exact {:e}",
        evaluation.computed(),
        evaluation.exact
    );

    Ok(Outcome::Evaluated(evaluation))
}
