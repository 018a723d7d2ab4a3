use crate::shape::Face3;
use arrayvec::ArrayVec;

/// The triangles produced by splitting a face along a plane.
///
/// Splitting a triangle with a single plane leaves a triangle or a convex
/// quadrilateral on each side; quadrilaterals are fan-triangulated, so each
/// side holds at most two triangles.
#[derive(Clone, Debug, Default)]
pub struct FaceSplit {
    /// The triangles lying on the positive side of the plane.
    pub above: ArrayVec<Face3, 2>,
    /// The triangles lying on the negative side of the plane.
    pub below: ArrayVec<Face3, 2>,
}

impl FaceSplit {
    /// The total number of triangles produced, on both sides.
    #[inline]
    pub fn len(&self) -> usize {
        self.above.len() + self.below.len()
    }

    /// Tests if the split produced no triangles at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.above.is_empty() && self.below.is_empty()
    }

    /// Iterates over every produced triangle, positive side first.
    pub fn iter(&self) -> impl Iterator<Item = &Face3> {
        self.above.iter().chain(self.below.iter())
    }
}
