//! Support mapping based Cylinder shape.

use crate::math::{Point, Real, Vector};
use crate::shape::{Pose, SupportMap};
use num_traits::Zero;

/// A cylinder with its principal axis aligned with the local `y` axis.
///
/// Rotate it through the pose matrix.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cylinder {
    /// The pose of the cylinder.
    pub pose: Pose,
    /// The radius of the cylinder.
    pub radius: Real,
    /// The local height of the base disc.
    pub y_base: Real,
    /// The local height of the cap disc.
    pub y_cap: Real,
}

impl Cylinder {
    /// Creates a new cylinder.
    pub fn new(pose: Pose, radius: Real, y_base: Real, y_cap: Real) -> Cylinder {
        assert!(radius.is_sign_positive() && y_base <= y_cap);
        Cylinder {
            pose,
            radius,
            y_base,
            y_cap,
        }
    }
}

impl SupportMap for Cylinder {
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = self.pose.inverse_transform_vector(dir);

        // Radial part: the direction projected on the local xz plane. A
        // purely axial direction has no radial preference.
        let mut res = Vector::new(local_dir.x, 0.0, local_dir.z);
        if res.normalize_mut().is_zero() {
            res = na::zero();
        } else {
            res *= self.radius;
        }

        res.y = if local_dir.y > 0.0 {
            self.y_cap
        } else {
            self.y_base
        };

        self.pose.transform_point(&Point::from(res))
    }
}
