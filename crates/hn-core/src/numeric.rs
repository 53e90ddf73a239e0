//! Float comparison for diagram coordinates.

/// Floating point type used for diagram coordinates.
pub type Real = f64;

/// Absolute and relative slack allowed when comparing two coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Tolerances {
    /// Slack for node placements: far below anything a diagram can show.
    pub const PLACEMENT: Self = Self::new(1e-9, 1e-12);

    pub const fn new(abs: Real, rel: Real) -> Self {
        Self { abs, rel }
    }

    /// `a` and `b` are within `abs` of each other, or within `rel` of the
    /// larger magnitude. NaN is never accepted.
    pub fn accepts(self, a: Real, b: Real) -> bool {
        let diff = (a - b).abs();
        diff <= self.abs || diff <= self.rel * a.abs().max(b.abs())
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::PLACEMENT
    }
}
