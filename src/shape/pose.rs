//! World placement of a shape: origin plus rotation/scale matrix.

use crate::math::{Matrix, Point, Real, Vector};

/// The world placement of a shape: an origin and a rotation/scale matrix
/// together with the cached inverse of that matrix.
///
/// The inverse is recomputed whenever the matrix changes, so it is never
/// stale; support queries pull directions back into local space through it
/// on every call. Serialization carries only the origin and the matrix;
/// deserialization rebuilds the inverse (and panics on a singular matrix,
/// same contract as [`Pose::new`]).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-serialize", serde(from = "RawPose", into = "RawPose"))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Pose {
    origin: Point<Real>,
    matrix: Matrix<Real>,
    inv_matrix: Matrix<Real>,
}

#[cfg(feature = "serde-serialize")]
#[derive(Serialize, Deserialize)]
struct RawPose {
    origin: Point<Real>,
    matrix: Matrix<Real>,
}

#[cfg(feature = "serde-serialize")]
impl From<RawPose> for Pose {
    fn from(raw: RawPose) -> Self {
        Pose::new(raw.origin, raw.matrix)
    }
}

#[cfg(feature = "serde-serialize")]
impl From<Pose> for RawPose {
    fn from(pose: Pose) -> Self {
        RawPose {
            origin: pose.origin,
            matrix: pose.matrix,
        }
    }
}

impl Pose {
    /// Creates a new pose from an origin and a rotation/scale matrix.
    ///
    /// Panics if `matrix` is not invertible; a singular placement matrix is
    /// a caller contract violation.
    pub fn new(origin: Point<Real>, matrix: Matrix<Real>) -> Pose {
        let inv_matrix = matrix
            .try_inverse()
            .expect("the rotation/scale matrix of a pose must be invertible");
        Pose {
            origin,
            matrix,
            inv_matrix,
        }
    }

    /// The identity pose: origin at zero, identity matrix.
    pub fn identity() -> Pose {
        Pose {
            origin: Point::origin(),
            matrix: Matrix::identity(),
            inv_matrix: Matrix::identity(),
        }
    }

    /// A pure translation.
    pub fn translation(x: Real, y: Real, z: Real) -> Pose {
        Pose {
            origin: Point::new(x, y, z),
            matrix: Matrix::identity(),
            inv_matrix: Matrix::identity(),
        }
    }

    /// The world-space origin.
    #[inline]
    pub fn origin(&self) -> &Point<Real> {
        &self.origin
    }

    /// The rotation/scale matrix.
    #[inline]
    pub fn matrix(&self) -> &Matrix<Real> {
        &self.matrix
    }

    /// The cached inverse of the rotation/scale matrix.
    #[inline]
    pub fn inv_matrix(&self) -> &Matrix<Real> {
        &self.inv_matrix
    }

    /// Moves the origin of this pose.
    #[inline]
    pub fn set_origin(&mut self, origin: Point<Real>) {
        self.origin = origin;
    }

    /// Replaces the rotation/scale matrix, refreshing the cached inverse.
    ///
    /// Panics if `matrix` is not invertible.
    pub fn set_matrix(&mut self, matrix: Matrix<Real>) {
        self.inv_matrix = matrix
            .try_inverse()
            .expect("the rotation/scale matrix of a pose must be invertible");
        self.matrix = matrix;
    }

    /// Maps a local-space point to world space.
    #[inline]
    pub fn transform_point(&self, point: &Point<Real>) -> Point<Real> {
        self.origin + self.matrix * point.coords
    }

    /// Maps a local-space vector to world space. Translation does not apply.
    #[inline]
    pub fn transform_vector(&self, v: &Vector<Real>) -> Vector<Real> {
        self.matrix * v
    }

    /// Pulls a world-space vector back into local space.
    #[inline]
    pub fn inverse_transform_vector(&self, v: &Vector<Real>) -> Vector<Real> {
        self.inv_matrix * v
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}
