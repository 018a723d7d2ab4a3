//! Fixed-tolerance scalar and componentwise comparisons.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};

/// Tests if a scalar is within the default tolerance of zero.
#[inline]
pub fn is_zero_approx(value: Real) -> bool {
    value.abs() < DEFAULT_EPSILON
}

/// Tests if two scalars are approximately equal.
///
/// Exact equality (which covers the infinities) short-circuits. Otherwise the
/// tolerance scales with the magnitude of the first operand, floored at the
/// smallest positive normal value so comparisons near zero keep a non-empty
/// acceptance range.
#[inline]
pub fn is_equal_approx(a: Real, b: Real) -> bool {
    if a == b {
        return true;
    }

    let tolerance = (DEFAULT_EPSILON * a.abs()).max(Real::MIN_POSITIVE);
    (a - b).abs() < tolerance
}

/// Componentwise approximate comparisons.
///
/// Exact comparison of points and vectors is plain `==`; these methods are the
/// explicitly-named tolerant variants for values carrying floating-point noise.
pub trait ApproxCmp {
    /// Tests if every component is within the default tolerance of zero.
    fn is_zero_approx(&self) -> bool;

    /// Tests if every component is approximately equal to the matching
    /// component of `other`.
    fn is_equal_approx(&self, other: &Self) -> bool;
}

impl ApproxCmp for Vector<Real> {
    #[inline]
    fn is_zero_approx(&self) -> bool {
        is_zero_approx(self.x) && is_zero_approx(self.y) && is_zero_approx(self.z)
    }

    #[inline]
    fn is_equal_approx(&self, other: &Self) -> bool {
        is_equal_approx(self.x, other.x)
            && is_equal_approx(self.y, other.y)
            && is_equal_approx(self.z, other.z)
    }
}

impl ApproxCmp for Point<Real> {
    #[inline]
    fn is_zero_approx(&self) -> bool {
        self.coords.is_zero_approx()
    }

    #[inline]
    fn is_equal_approx(&self, other: &Self) -> bool {
        self.coords.is_equal_approx(&other.coords)
    }
}
