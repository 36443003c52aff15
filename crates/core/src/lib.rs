//! Core traits and types for finite-difference schemes on `y' = -A·y`.
//!
//! This crate defines the shared abstractions the iteration drivers and the
//! command-line calculator build on:
//!
//! - [`SingleStep`], [`TwoStep`] — recurrence relations applied by the drivers
//! - [`Scheme`] — the six supported schemes and their recurrence rules
//! - [`DecayProblem`] — a validated decay rate and step-size exponent
//! - [`Observer`] — receives driver events and optionally returns control actions

mod observer;
mod problem;
mod scheme;
mod step;

pub use observer::Observer;
pub use problem::{DecayProblem, MAX_EXPONENT, ProblemError};
pub use scheme::{OneStepMethod, OneStepRule, Scheme, TwoStepMethod, TwoStepRule, UnknownScheme};
pub use step::{SingleStep, TwoStep};
