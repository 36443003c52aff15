//! Single-parameter driver.
//!
//! Repeatedly scales one iterate by the factor a [`SingleStep`] recurrence
//! produces:
//!
//! ```text
//! y_{k+1} = y_k * factor
//! ```
//!
//! Before each multiplication the current iterate is checked against the
//! [`ZeroCollapse`] policy. A collapsed iterate becomes exactly `0.0`, and an
//! exact zero stays exact for the rest of the run.
//!
//! # Example
//!
//! ```
//! use decay_solvers::{ZeroCollapse, single_step};
//!
//! let solution = single_step::solve_unobserved(1.0, &|| 0.9, 10, ZeroCollapse::Magnitude);
//! assert!((solution.value - 0.9_f64.powi(10)).abs() < 1e-15);
//! ```

mod collapse;

pub use collapse::ZeroCollapse;

use decay_core::{Observer, SingleStep};
use log::debug;

use crate::{Action, Event, Solution, Status};

/// Applies a single-step recurrence `iterations` times starting from `initial`.
///
/// The observer receives an [`Event`] after each iteration and may return
/// [`Action::StopEarly`] to end the run with the iterate reached so far.
pub fn solve<S, Obs>(
    initial: f64,
    step: &S,
    iterations: u64,
    policy: ZeroCollapse,
    mut observer: Obs,
) -> Solution
where
    S: SingleStep + ?Sized,
    Obs: Observer<Event, Action>,
{
    debug!("single-step run: y0={initial}, iterations={iterations}, policy={policy:?}");

    let mut value = initial;

    for iteration in 1..=iterations {
        value = if policy.collapses(value) {
            0.0
        } else {
            value * step.factor()
        };

        let event = Event { iteration, value };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!("single-step run stopped by observer after {iteration} iterations");
            return Solution {
                status: Status::StoppedByObserver,
                value,
                iterations: iteration,
            };
        }
    }

    debug!("single-step run complete: y={value}");

    Solution {
        status: Status::Complete,
        value,
        iterations,
    }
}

/// Applies a single-step recurrence without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
pub fn solve_unobserved<S>(
    initial: f64,
    step: &S,
    iterations: u64,
    policy: ZeroCollapse,
) -> Solution
where
    S: SingleStep + ?Sized,
{
    solve(initial, step, iterations, policy, ())
}
