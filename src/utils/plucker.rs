//! Plücker coordinates for points, lines and planes.
//!
//! These homogeneous representations turn incidence and distance tests
//! between lines and planes into algebraic identities, avoiding parametric
//! geometry entirely. See Lengyel, *Foundations of Game Engine Development,
//! Vol. 1: Mathematics*, 2016.

use crate::math::{Point, Real, Vector};

/// A point in homogeneous 4D coordinates `(p | w)`.
///
/// The Euclidean point is `p / w`. A vanishing weight denotes a point at
/// infinity (e.g. the meet of a plane with a parallel line).
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct PluckerPoint {
    /// The homogeneous coordinates of the point.
    pub coords: Vector<Real>,
    /// The homogeneous weight.
    pub weight: Real,
}

impl PluckerPoint {
    /// The homogeneous form of a Euclidean point (weight 1).
    #[inline]
    pub fn new(point: &Point<Real>) -> Self {
        PluckerPoint {
            coords: point.coords,
            weight: 1.0,
        }
    }

    /// The Euclidean point `coords / weight`.
    ///
    /// The caller must reject near-zero weights first; dividing by a
    /// vanishing weight yields a point at infinity.
    #[inline]
    pub fn euclidean(&self) -> Point<Real> {
        Point::from(self.coords / self.weight)
    }
}

/// A line in 6D Plücker coordinates `{ direction | moment }`.
///
/// The moment is `p0 × p1` for two points `p0`, `p1` on the line.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct PluckerLine {
    /// The direction vector of the line. Not necessarily normalized.
    pub dir: Vector<Real>,
    /// The moment of the line.
    pub moment: Vector<Real>,
}

impl PluckerLine {
    /// The Plücker line through `origin` with direction `dir`.
    #[inline]
    pub fn new(origin: &Point<Real>, dir: &Vector<Real>) -> Self {
        PluckerLine {
            dir: *dir,
            moment: origin.coords.cross(&(origin.coords + dir)),
        }
    }

    /// The reciprocal product of two lines.
    ///
    /// Vanishes exactly when the lines are coplanar, i.e. meet or are
    /// parallel.
    #[inline]
    pub fn reciprocal(&self, other: &Self) -> Real {
        self.dir.dot(&other.moment) + other.dir.dot(&self.moment)
    }

    /// The distance between two lines.
    ///
    /// Returns an infinite or NaN value for parallel lines (the cross
    /// product of the directions vanishes); tolerance comparisons written
    /// as `distance < tol` reject these configurations.
    #[inline]
    pub fn distance_to_line(&self, other: &Self) -> Real {
        self.reciprocal(other).abs() / self.dir.cross(&other.dir).norm()
    }

    /// The distance between this line and a point.
    #[inline]
    pub fn distance_to_point(&self, point: &Point<Real>) -> Real {
        (self.dir.cross(&point.coords) + self.moment).norm() / self.dir.norm()
    }
}

/// A plane in 4D coordinates `[normal | d]` with `d = -dot(normal, q)` for
/// any point `q` on the plane.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct PluckerPlane {
    /// The normal of the plane. Not necessarily normalized.
    pub normal: Vector<Real>,
    /// The plane offset.
    pub d: Real,
}

impl PluckerPlane {
    /// The plane with the given normal passing through `point`.
    #[inline]
    pub fn new(normal: &Vector<Real>, point: &Point<Real>) -> Self {
        PluckerPlane {
            normal: *normal,
            d: -normal.dot(&point.coords),
        }
    }

    /// The distance between this plane and a point.
    #[inline]
    pub fn distance_to_point(&self, point: &Point<Real>) -> Real {
        (self.normal.dot(&point.coords) + self.d).abs() / self.normal.norm()
    }

    /// The meet of this plane with a line, as a homogeneous point.
    ///
    /// The weight is `-dot(normal, dir)`; it vanishes when the line is
    /// parallel to the plane, in which case there is no finite meet.
    #[inline]
    pub fn meet(&self, line: &PluckerLine) -> PluckerPoint {
        PluckerPoint {
            coords: line.moment.cross(&self.normal) + self.d * line.dir,
            weight: -self.normal.dot(&line.dir),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::{Point, Vector};
    use approx::assert_relative_eq;

    #[test]
    fn reciprocal_vanishes_for_meeting_lines() {
        let l1 = PluckerLine::new(&Point::origin(), &Vector::new(1.0, 0.0, 0.0));
        let l2 = PluckerLine::new(&Point::new(0.5, -1.0, 0.0), &Vector::new(0.0, 2.0, 0.0));
        assert_relative_eq!(l1.reciprocal(&l2), 0.0);
        assert_relative_eq!(l1.distance_to_line(&l2), 0.0);
    }

    #[test]
    fn distance_between_skew_lines() {
        let l1 = PluckerLine::new(&Point::origin(), &Vector::new(1.0, 0.0, 0.0));
        let l2 = PluckerLine::new(&Point::new(0.0, 1.0, -1.0), &Vector::new(0.0, 0.0, 2.0));
        assert_relative_eq!(l1.distance_to_line(&l2), 1.0, epsilon = 1.0e-5);
    }

    #[test]
    fn parallel_lines_have_no_finite_distance() {
        let l1 = PluckerLine::new(&Point::origin(), &Vector::new(1.0, 0.0, 0.0));
        let l2 = PluckerLine::new(&Point::new(0.0, 1.0, 0.0), &Vector::new(2.0, 0.0, 0.0));
        // The comparison used by the contact generator must reject this pair.
        assert!(!(l1.distance_to_line(&l2) < 1.0e-6));
    }

    #[test]
    fn plane_line_meet() {
        // The segment (0.5,-1,0)-(0.5,1,0) crosses the plane y = 0 at (0.5,0,0).
        let plane = PluckerPlane::new(&Vector::new(0.0, 1.0, 0.0), &Point::origin());
        let line = PluckerLine::new(&Point::new(0.5, -1.0, 0.0), &Vector::new(0.0, 2.0, 0.0));
        let meet = plane.meet(&line);
        assert!(meet.weight.abs() > 1.0e-6);
        assert_relative_eq!(meet.euclidean(), Point::new(0.5, 0.0, 0.0), epsilon = 1.0e-5);
    }

    #[test]
    fn meet_of_parallel_line_is_at_infinity() {
        let plane = PluckerPlane::new(&Vector::new(0.0, 1.0, 0.0), &Point::origin());
        let line = PluckerLine::new(&Point::new(0.0, 1.0, 0.0), &Vector::new(1.0, 0.0, 0.0));
        assert_relative_eq!(plane.meet(&line).weight, 0.0);
    }

    #[test]
    fn point_distances() {
        let plane = PluckerPlane::new(&Vector::new(0.0, 2.0, 0.0), &Point::new(0.0, 1.0, 0.0));
        assert_relative_eq!(
            plane.distance_to_point(&Point::new(5.0, 3.0, -2.0)),
            2.0,
            epsilon = 1.0e-5
        );

        let line = PluckerLine::new(&Point::origin(), &Vector::new(0.0, 0.0, 3.0));
        assert_relative_eq!(
            line.distance_to_point(&Point::new(1.0, 0.0, 7.0)),
            1.0,
            epsilon = 1.0e-5
        );
    }
}
