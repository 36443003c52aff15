/// How the single-step driver treats iterates near zero.
///
/// Before each multiplication the driver checks the current iterate; if the
/// policy collapses it, the iterate becomes exactly `0.0` and stays there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ZeroCollapse {
    /// Collapse when `|y| <= f64::EPSILON`.
    #[default]
    Magnitude,

    /// Collapse when `y <= f64::EPSILON`.
    ///
    /// Matches the `abs(y <= eps)` form of the check, where the comparison
    /// result itself is the condition.
    /// Every negative iterate collapses, so oscillating unstable runs are
    /// silenced after their first sign change.
    Signed,

    /// Never collapse.
    Never,
}

impl ZeroCollapse {
    /// Returns `true` if `value` should be replaced by exactly zero.
    #[must_use]
    pub fn collapses(self, value: f64) -> bool {
        match self {
            ZeroCollapse::Magnitude => value.abs() <= f64::EPSILON,
            ZeroCollapse::Signed => value <= f64::EPSILON,
            ZeroCollapse::Never => false,
        }
    }
}
