//! Support mapping based Cuboid shape.

use crate::math::{Point, Real, Vector, DIM};
use crate::shape::{Pose, SupportMap};

/// A rectangular box given by its axis-aligned local corners and a pose.
///
/// Orientation and scale come from the pose matrix; `mins` and `maxs` are
/// always axis-aligned in local space.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    /// The pose of the cuboid.
    pub pose: Pose,
    /// The smallest local corner.
    pub mins: Vector<Real>,
    /// The greatest local corner.
    pub maxs: Vector<Real>,
}

impl Cuboid {
    /// Creates a new cuboid from its local corners and a pose.
    pub fn new(pose: Pose, mins: Vector<Real>, maxs: Vector<Real>) -> Cuboid {
        assert!(mins.x <= maxs.x && mins.y <= maxs.y && mins.z <= maxs.z);
        Cuboid { pose, mins, maxs }
    }
}

impl SupportMap for Cuboid {
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = self.pose.inverse_transform_vector(dir);

        let mut res = self.mins;
        for i in 0..DIM {
            if local_dir[i] > 0.0 {
                res[i] = self.maxs[i];
            }
        }

        self.pose.transform_point(&Point::from(res))
    }
}
