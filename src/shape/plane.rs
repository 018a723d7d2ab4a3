//! Oriented planes and point classification.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::utils::{self, ApproxCmp};

/// An oriented plane, defined by a normal and a signed distance from the origin.
///
/// A point `p` lies on the plane when `normal · p = distance`. The constructor
/// deriving the normal from three points normalizes it; [`Plane::new`] and
/// [`Plane::from_point`] store the given normal verbatim and leave
/// normalization to the caller.
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Plane {
    /// The plane's normal, expected to be of unit length.
    pub normal: Vector<Real>,
    /// The signed distance from the origin along the normal.
    pub distance: Real,
}

/// The classification of a point against a plane.
///
/// Classification applies a dead-zone of one tolerance around the plane, so
/// numeric noise cannot flip a point lying on the plane to either side.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaneSide {
    /// The point lies in the negative half-space.
    Negative,
    /// The point lies within one tolerance of the plane.
    On,
    /// The point lies in the positive half-space.
    Positive,
}

impl PlaneSide {
    /// Classifies a signed distance, mapping the ±tolerance dead-zone to `On`.
    #[inline]
    pub fn from_distance(distance: Real) -> Self {
        if distance < -DEFAULT_EPSILON {
            PlaneSide::Negative
        } else if distance > DEFAULT_EPSILON {
            PlaneSide::Positive
        } else {
            PlaneSide::On
        }
    }
}

/// Three-way sign without a tolerance dead-zone.
#[inline]
fn strict_sign(value: Real) -> i8 {
    if value < 0.0 {
        -1
    } else if value > 0.0 {
        1
    } else {
        0
    }
}

impl Plane {
    /// Creates a plane from its normal and its signed distance from the origin.
    #[inline]
    pub fn new(normal: Vector<Real>, distance: Real) -> Self {
        Plane { normal, distance }
    }

    /// Creates a plane from its normal and any point lying on the plane.
    #[inline]
    pub fn from_point(normal: Vector<Real>, point: &Point<Real>) -> Self {
        Plane {
            normal,
            distance: normal.dot(&point.coords),
        }
    }

    /// Creates the plane containing the three given points.
    ///
    /// The normal is `normalize((b − a) × (c − a))`. If the points are
    /// coincident or collinear the normal is the zero vector and the resulting
    /// plane is degenerate.
    pub fn from_points(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Self {
        let normal = utils::normalized_or_zero(&(b - a).cross(&(c - a)));
        Plane {
            normal,
            distance: normal.dot(&a.coords),
        }
    }

    /// The signed distance between this plane and `point`.
    #[inline]
    pub fn distance_to(&self, point: &Point<Real>) -> Real {
        self.normal.dot(&point.coords) - self.distance
    }

    /// Classifies which side of this plane `point` lies on.
    #[inline]
    pub fn side(&self, point: &Point<Real>) -> PlaneSide {
        PlaneSide::from_distance(self.distance_to(point))
    }

    /// Projects `point` onto this plane.
    #[inline]
    pub fn project(&self, point: &Point<Real>) -> Point<Real> {
        point - self.normal * self.distance_to(point)
    }

    /// Computes the intersection between this plane and a ray.
    ///
    /// Returns `None` when the ray is (nearly) parallel to the plane, or when
    /// the intersection lies behind, or within one tolerance of, the origin.
    pub fn intersect_ray(
        &self,
        origin: &Point<Real>,
        direction: &Vector<Real>,
    ) -> Option<Point<Real>> {
        let denominator = self.normal.dot(direction);
        if utils::is_zero_approx(denominator) {
            return None;
        }

        let t = (self.distance - self.normal.dot(&origin.coords)) / denominator;
        if t < DEFAULT_EPSILON {
            return None;
        }

        Some(origin + direction * t)
    }

    /// Computes the intersection between this plane and the segment `[a, b]`.
    ///
    /// Returns `None` when both endpoints lie strictly on the same side of the
    /// plane. An endpoint with a signed distance of exactly zero counts as a
    /// crossing; the dead-zone classification is deliberately not used here,
    /// since it would report crossings outside the segment for endpoints
    /// sitting inside the tolerance band.
    pub fn intersect_segment(&self, a: &Point<Real>, b: &Point<Real>) -> Option<Point<Real>> {
        let d1 = self.distance_to(a);
        let d2 = self.distance_to(b);

        if strict_sign(d1) == strict_sign(d2) {
            return None;
        }

        let t = d1 / (d1 - d2);
        Some(a + (b - a) * t)
    }

    /// Tests if this plane is approximately equal to `other`, componentwise.
    pub fn is_equal_approx(&self, other: &Plane) -> bool {
        self.normal.is_equal_approx(&other.normal)
            && utils::is_equal_approx(self.distance, other.distance)
    }
}
