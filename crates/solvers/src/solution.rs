/// Indicates how a driver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested iterations.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of running a driver.
///
/// Only the final iterate is kept; attach an observer to record a history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// How the driver terminated.
    pub status: Status,

    /// The final iterate.
    pub value: f64,

    /// Number of iterations completed.
    pub iterations: u64,
}
