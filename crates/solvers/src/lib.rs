//! Iteration drivers for finite-difference schemes on `y' = -A·y`.
//!
//! The drivers are scheme-agnostic: they apply a caller-supplied recurrence a
//! fixed number of times and never judge numerical correctness. Stability is
//! decided entirely by the recurrence and the size of `A·h`.
//!
//! - [`single_step`] — folds `y ← y * factor` with an optional zero collapse
//! - [`two_step`] — slides a two-value window through a two-step recurrence
//! - [`evaluate`] — picks and seeds the driver for a [`Scheme`] and compares
//!   the result with the exact solution
//!
//! [`Scheme`]: decay_core::Scheme

mod action;
mod evaluate;
mod event;
mod solution;

pub mod single_step;
pub mod two_step;

pub use action::Action;
pub use evaluate::{Evaluation, evaluate, evaluate_observed};
pub use event::Event;
pub use single_step::ZeroCollapse;
pub use solution::{Solution, Status};
