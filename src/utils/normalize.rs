use crate::math::{Real, Vector};

/// Normalizes `v`, returning the zero vector when its length is zero.
///
/// The zero vector acts as an "undefined direction" sentinel: no error is
/// signaled and callers must handle it explicitly.
#[inline]
pub fn normalized_or_zero(v: &Vector<Real>) -> Vector<Real> {
    v.try_normalize(0.0).unwrap_or_else(Vector::zeros)
}
