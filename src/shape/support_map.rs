//! Trait for support mapping based shapes.

use crate::math::{Point, Real, Vector};

/// Trait of convex shapes representable by a support mapping function.
///
/// A support function associates a direction with the shape point that
/// maximizes their dot product. It is the primitive operation GJK/EPA-style
/// algorithms and separating-axis tests are built on.
pub trait SupportMap {
    /// Evaluates the support function of this shape.
    ///
    /// Returns the point of the shape, in world space, farthest along `dir`.
    /// The result is unspecified for a zero `dir`; callers must guard, though
    /// the provided shapes substitute a fixed axis rather than produce NaN.
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real>;
}

/// A single point is trivially convex: it is its own support point in every
/// direction.
impl SupportMap for Point<Real> {
    #[inline]
    fn support_point(&self, _: &Vector<Real>) -> Point<Real> {
        *self
    }
}
