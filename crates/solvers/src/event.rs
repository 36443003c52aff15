/// Event emitted by a driver after each iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The iteration just completed, counted from 1.
    pub iteration: u64,

    /// The newest iterate.
    pub value: f64,
}
