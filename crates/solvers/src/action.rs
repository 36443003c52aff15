/// Control actions supported by the drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop iterating and return the iterate reached so far.
    StopEarly,
}
