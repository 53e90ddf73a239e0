//! Diagram-space geometry.

use core::fmt;

use crate::numeric::{Real, Tolerances};

/// A position on the network diagram.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: Real,
    pub y: Real,
}

impl Point {
    pub const fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }

    /// Coordinate on one axis.
    pub fn get(self, axis: Axis) -> Real {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Copy of `self` with the coordinate on `axis` replaced.
    pub fn with(self, axis: Axis, value: Real) -> Self {
        match axis {
            Axis::X => Self { x: value, ..self },
            Axis::Y => Self { y: value, ..self },
        }
    }

    /// Linear interpolation towards `other` at fraction `t`.
    pub fn lerp(self, other: Point, t: Real) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Both coordinates agree within `tol`.
    pub fn nearly_equal(self, other: Point, tol: Tolerances) -> bool {
        tol.accepts(self.x, other.x) && tol.accepts(self.y, other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Diagram axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_accessors() {
        let p = Point::new(1.0, 2.0);
        assert_eq!(p.get(Axis::X), 1.0);
        assert_eq!(p.get(Axis::Y), 2.0);
        assert_eq!(p.with(Axis::X, 5.0), Point::new(5.0, 2.0));
        assert_eq!(p.with(Axis::Y, 5.0), Point::new(1.0, 5.0));
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(9.0, -3.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert!(
            a.lerp(b, 1.0 / 3.0)
                .nearly_equal(Point::new(3.0, -1.0), Tolerances::default())
        );
    }

    #[test]
    fn non_finite_detected() {
        assert!(Point::new(1.0, 2.0).is_finite());
        assert!(!Point::new(f64::INFINITY, 2.0).is_finite());
        assert!(!Point::new(1.0, f64::NAN).is_finite());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn with_only_touches_one_axis(x in -1e6_f64..1e6, y in -1e6_f64..1e6, v in -1e6_f64..1e6) {
            let p = Point::new(x, y);
            let px = p.with(Axis::X, v);
            let py = p.with(Axis::Y, v);
            prop_assert_eq!(px.y, y);
            prop_assert_eq!(px.x, v);
            prop_assert_eq!(py.x, x);
            prop_assert_eq!(py.y, v);
        }
    }
}
