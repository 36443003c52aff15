//! Double-parameter driver.
//!
//! Carries the two most recent iterates through a [`TwoStep`] recurrence:
//!
//! ```text
//! y_{k+1} = step(y_{k-1}, y_k)
//! ```
//!
//! Each iteration shifts the window by one, so after the update the old
//! newest iterate becomes the older one.

use decay_core::{Observer, TwoStep};
use log::debug;

use crate::{Action, Event, Solution, Status};

/// Applies a two-step recurrence `iterations` times from the seeds
/// `prev2 = y_{k-1}` and `prev1 = y_k`, returning the newest iterate.
///
/// With zero iterations the result is `prev1`.
///
/// The observer receives an [`Event`] carrying the newest iterate after each
/// iteration and may return [`Action::StopEarly`].
pub fn solve<S, Obs>(
    prev2: f64,
    prev1: f64,
    step: &S,
    iterations: u64,
    mut observer: Obs,
) -> Solution
where
    S: TwoStep + ?Sized,
    Obs: Observer<Event, Action>,
{
    debug!("two-step run: y0={prev2}, y1={prev1}, iterations={iterations}");

    let mut older = prev2;
    let mut newer = prev1;

    for iteration in 1..=iterations {
        let next = step.next(older, newer);
        older = newer;
        newer = next;

        let event = Event {
            iteration,
            value: newer,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!("two-step run stopped by observer after {iteration} iterations");
            return Solution {
                status: Status::StoppedByObserver,
                value: newer,
                iterations: iteration,
            };
        }
    }

    debug!("two-step run complete: y={newer}");

    Solution {
        status: Status::Complete,
        value: newer,
        iterations,
    }
}

/// Applies a two-step recurrence without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
pub fn solve_unobserved<S>(prev2: f64, prev1: f64, step: &S, iterations: u64) -> Solution
where
    S: TwoStep + ?Sized,
{
    solve(prev2, prev1, step, iterations, ())
}
