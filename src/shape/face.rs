//! Definition of the stand-alone triangle used for slicing.

use crate::math::{Point, Real, Vector};
use crate::shape::Plane;
use crate::utils;

/// A triangle defined by three positions.
///
/// `Face3` is an ephemeral value used as the plane-slicing primitive. It holds
/// plain positions and never references a mesh.
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Face3 {
    /// The triangle's first point.
    pub a: Point<Real>,
    /// The triangle's second point.
    pub b: Point<Real>,
    /// The triangle's third point.
    pub c: Point<Real>,
}

impl Face3 {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Face3 {
        Face3 { a, b, c }
    }

    /// An array containing the three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// A vector normal of this triangle.
    ///
    /// The vector is collinear to `AB × AC` and not normalized.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// Tests if this triangle spans a (near) zero area, i.e. its points are
    /// coincident or collinear.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        utils::is_zero_approx(self.scaled_normal().norm_squared())
    }

    /// The plane containing this triangle.
    ///
    /// The plane of a degenerate triangle carries a zero normal; callers must
    /// check [`Face3::is_degenerate`] first.
    #[inline]
    pub fn plane(&self) -> Plane {
        Plane::from_points(&self.a, &self.b, &self.c)
    }
}
