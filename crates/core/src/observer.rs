/// Receives events from a driver and optionally returns a control action.
///
/// Implemented for `()` (ignores every event) and for any
/// `FnMut(&E) -> Option<A>` closure.
pub trait Observer<E, A> {
    /// Inspects an event, returning `Some(action)` to steer the driver.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}
