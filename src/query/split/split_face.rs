use crate::math::{Point, Real};
use crate::query::FaceSplit;
use crate::shape::{Face3, Plane, PlaneSide};
use arrayvec::ArrayVec;

impl Face3 {
    /// Splits this triangle with a plane, producing the triangles lying on
    /// each side.
    ///
    /// Every vertex is classified with the dead-zone sign test: a vertex
    /// within one tolerance of the plane belongs to both sides, and a crossed
    /// edge contributes its interpolated intersection point to both sides.
    /// Each side then holds three or four points, triangulated as a fan from
    /// the first point.
    ///
    /// A degenerate triangle produces no output at all.
    pub fn split(&self, plane: &Plane) -> FaceSplit {
        let mut result = FaceSplit::default();

        if self.is_degenerate() {
            return result;
        }

        let vertices = self.vertices();
        let mut above: ArrayVec<Point<Real>, 4> = ArrayVec::new();
        let mut below: ArrayVec<Point<Real>, 4> = ArrayVec::new();

        for i in 0..3 {
            let vertex = vertices[i];
            let distance = plane.distance_to(&vertex);
            let side = PlaneSide::from_distance(distance);

            // An on-plane vertex belongs to both sides, and its outgoing edge
            // cannot produce a distinct crossing point.
            if side == PlaneSide::On {
                above.push(vertex);
                below.push(vertex);
                continue;
            }

            if side == PlaneSide::Positive {
                above.push(vertex);
            } else {
                below.push(vertex);
            }

            let next = vertices[(i + 1) % 3];
            let next_distance = plane.distance_to(&next);

            if PlaneSide::from_distance(next_distance) != side {
                let t = distance / (distance - next_distance);
                let crossing = vertex + (next - vertex) * t;
                above.push(crossing);
                below.push(crossing);
            }
        }

        push_fan(&mut result.above, &above);
        push_fan(&mut result.below, &below);
        result
    }
}

/// Fan-triangulates a list of three or four points from its first point.
fn push_fan(out: &mut ArrayVec<Face3, 2>, points: &[Point<Real>]) {
    if points.len() >= 3 {
        out.push(Face3::new(points[0], points[1], points[2]));
    }

    if points.len() == 4 {
        out.push(Face3::new(points[2], points[3], points[0]));
    }
}

#[cfg(test)]
mod test {
    use crate::math::{Point, Vector};
    use crate::shape::{Face3, Plane};

    fn fixture() -> Face3 {
        Face3::new(
            Point::new(0.0, 0.0, 0.0),
            Point::new(0.0, 2.0, 0.0),
            Point::new(0.0, 2.0, 2.0),
        )
    }

    #[test]
    fn test_split_nothing_when_degenerate() {
        let degenerate = Face3::new(
            Point::new(0.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(0.0, 2.0, 0.0),
        );
        let plane = Plane::new(Vector::new(0.0, 1.0, 0.0), 1.0);
        assert!(degenerate.split(&plane).is_empty());
    }

    #[test]
    fn test_split_fully_above() {
        let face = fixture();
        let plane = Plane::new(Vector::new(0.0, 1.0, 0.0), -1.0);
        let split = face.split(&plane);

        assert_eq!(split.above.len(), 1);
        assert_eq!(split.below.len(), 0);
        assert_eq!(split.above[0], face);
    }

    #[test]
    fn test_split_fully_below() {
        let face = fixture();
        let plane = Plane::new(Vector::new(0.0, 1.0, 0.0), 3.0);
        let split = face.split(&plane);

        assert_eq!(split.above.len(), 0);
        assert_eq!(split.below.len(), 1);
        assert_eq!(split.below[0], face);
    }

    #[test]
    fn test_split_one_vertex_separated() {
        // One vertex below y = 1, two above: a triangle below, a quad above.
        let face = fixture();
        let plane = Plane::new(Vector::new(0.0, 1.0, 0.0), 1.0);
        let split = face.split(&plane);

        assert_eq!(split.above.len(), 2);
        assert_eq!(split.below.len(), 1);
        assert_eq!(split.len(), 3);

        assert_eq!(
            split.below[0],
            Face3::new(
                Point::new(0.0, 0.0, 0.0),
                Point::new(0.0, 1.0, 0.0),
                Point::new(0.0, 1.0, 1.0),
            )
        );
    }

    #[test]
    fn test_split_coplanar_face_lands_on_both_sides() {
        let face = Face3::new(
            Point::new(0.0, 1.0, 0.0),
            Point::new(1.0, 1.0, 0.0),
            Point::new(0.0, 1.0, 1.0),
        );
        let plane = Plane::new(Vector::new(0.0, 1.0, 0.0), 1.0);
        let split = face.split(&plane);

        assert_eq!(split.above.len(), 1);
        assert_eq!(split.below.len(), 1);
        assert_eq!(split.above[0], face);
        assert_eq!(split.below[0], face);
    }

    #[test]
    fn test_split_emits_positive_side_first() {
        let face = fixture();
        let plane = Plane::new(Vector::new(0.0, 1.0, 0.0), 1.0);
        let split = face.split(&plane);

        let ordered: Vec<_> = split.iter().copied().collect();
        assert_eq!(&ordered[..2], split.above.as_slice());
        assert_eq!(&ordered[2..], split.below.as_slice());
    }
}
