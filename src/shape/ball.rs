use crate::math::{Point, Real, Vector, DEFAULT_TOLERANCE};
use crate::shape::SupportMap;
use na::Unit;

/// A ball shape.
///
/// The ball does not carry a rotation/scale matrix: scale the radius
/// directly instead.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ball {
    /// The center of the ball in world space.
    pub center: Point<Real>,
    /// The radius of the ball.
    pub radius: Real,
}

impl Ball {
    /// Creates a new ball with the given center and radius.
    #[inline]
    pub fn new(center: Point<Real>, radius: Real) -> Ball {
        assert!(radius.is_sign_positive());
        Ball { center, radius }
    }

    /// A point usable with GJK-style support queries: a ball of tolerance
    /// radius, so support directions stay well-defined.
    #[inline]
    pub fn point(center: Point<Real>) -> Ball {
        Ball {
            center,
            radius: DEFAULT_TOLERANCE,
        }
    }
}

impl SupportMap for Ball {
    #[inline]
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let dir = Unit::try_new(*dir, 0.0).unwrap_or(Vector::y_axis());
        self.center + *dir * self.radius
    }
}
