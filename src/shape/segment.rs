//! Definition of the segment shape.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::SupportMap;
use crate::utils::PluckerLine;
use na::Unit;

/// A segment shape given by its two world-space endpoints.
///
/// This is also the edge primitive handed out by polytope face queries.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    #[inline]
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The length of this segment.
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// The unit direction of this segment.
    ///
    /// Returns `None` if both points are equal.
    pub fn direction(&self) -> Option<Unit<Vector<Real>>> {
        Unit::try_new(self.scaled_direction(), DEFAULT_EPSILON)
    }

    /// The Plücker line supporting this segment.
    #[inline]
    pub fn pluecker(&self) -> PluckerLine {
        PluckerLine::new(&self.a, &self.scaled_direction())
    }

    /// The parameter `t` such that `point = a + t * (b - a)`, assuming
    /// `point` lies on the supporting line.
    ///
    /// The parameter is recovered along the dominant axis of the segment
    /// direction (the component with the largest magnitude), avoiding a
    /// division by a near-zero component.
    pub fn param(&self, point: &Point<Real>) -> Real {
        let dir = self.scaled_direction();
        let d = point - self.a;
        let i = dir.iamax();
        d[i] / dir[i]
    }

    /// Tests whether `point` lies on this finite segment.
    ///
    /// The point must be within `tolerance` of the supporting line and its
    /// parameter must fall inside `[0, 1]`.
    pub fn contains_point(&self, point: &Point<Real>, tolerance: Real) -> bool {
        if !(self.pluecker().distance_to_point(point) < tolerance) {
            return false;
        }
        let t = self.param(point);
        0.0 <= t && t <= 1.0
    }
}

impl SupportMap for Segment {
    #[inline]
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        if self.a.coords.dot(dir) > self.b.coords.dot(dir) {
            self.a
        } else {
            self.b
        }
    }
}
