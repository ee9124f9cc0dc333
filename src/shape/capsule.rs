//! Support mapping based Capsule shape.

use crate::math::{Matrix, Point, Real, Vector, DEFAULT_EPSILON, DEFAULT_TOLERANCE};
use crate::shape::{Pose, SupportMap};
use na::Unit;

/// A capsule with its principal axis aligned with the local `y` axis.
///
/// Rotate it through the pose matrix.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Capsule {
    /// The pose of the capsule.
    pub pose: Pose,
    /// The radius of the capsule.
    pub radius: Real,
    /// The local height of the base hemisphere center.
    pub y_base: Real,
    /// The local height of the cap hemisphere center.
    pub y_cap: Real,
}

impl Capsule {
    /// Creates a new capsule.
    pub fn new(pose: Pose, radius: Real, y_base: Real, y_cap: Real) -> Capsule {
        assert!(radius.is_sign_positive() && y_base <= y_cap);
        Capsule {
            pose,
            radius,
            y_base,
            y_cap,
        }
    }

    /// A line segment usable with GJK-style support queries: a capsule of
    /// tolerance radius whose pose maps the local unit `y` axis onto the
    /// world segment from `start` to `end`.
    pub fn segment(start: Point<Real>, end: Point<Real>) -> Capsule {
        let vector = end - start;
        let length = vector.norm();
        let dir = Unit::try_new(vector, DEFAULT_EPSILON)
            .map(|d| d.into_inner())
            .unwrap_or_else(Vector::y);

        // An orthonormal frame whose y axis follows the segment.
        let mut up = Vector::y();
        let mut naxis = up.cross(&dir);
        if naxis.norm_squared() < DEFAULT_EPSILON {
            up = Vector::x();
            naxis = up.cross(&dir);
        }
        let naxis = naxis.normalize();
        let xaxis = dir.cross(&naxis);
        let zaxis = xaxis.cross(&dir);

        // The y column carries the segment length so the local heights
        // ±0.5 land on the endpoints.
        let matrix =
            Matrix::from_columns(&[xaxis, dir * length.max(DEFAULT_TOLERANCE), zaxis]);

        Capsule {
            pose: Pose::new(na::center(&start, &end), matrix),
            radius: DEFAULT_TOLERANCE,
            y_base: -0.5,
            y_cap: 0.5,
        }
    }
}

impl SupportMap for Capsule {
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = self.pose.inverse_transform_vector(dir);
        let unit_dir = Unit::try_new(local_dir, 0.0).unwrap_or(Vector::y_axis());

        let mut res = *unit_dir * self.radius;
        res.y += if local_dir.y > 0.0 {
            self.y_cap
        } else {
            self.y_base
        };

        self.pose.transform_point(&Point::from(res))
    }
}
