//! Separating-axis tests over support-mapped operands.

use crate::math::{Real, UnitVector, Vector, DEFAULT_EPSILON, DEFAULT_TOLERANCE};
use crate::shape::SupportMap;
use na::Unit;

/// The separation oracle consumed by the contact generator.
///
/// Operands are anything with a support mapping: whole bodies, faces,
/// edges, or single vertices. Implementations are assumed correct; the
/// generator calls them as black boxes.
pub trait SeparationTest {
    /// Tests whether `first` and `second` touch or overlap when projected
    /// onto `axis`.
    fn overlap(&self, first: &dyn SupportMap, second: &dyn SupportMap, axis: &Vector<Real>)
        -> bool;
}

/// The built-in separation test: projects both operands onto the axis with
/// two support calls each and reports whether the projection intervals are
/// within `tolerance` of each other.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IntervalSeparation {
    /// The largest projection gap still treated as touching.
    pub tolerance: Real,
}

impl IntervalSeparation {
    /// Creates an interval separation test with the given tolerance.
    pub fn new(tolerance: Real) -> Self {
        IntervalSeparation { tolerance }
    }

    fn project(shape: &dyn SupportMap, axis: &UnitVector<Real>) -> (Real, Real) {
        let max = shape.support_point(axis).coords.dot(axis);
        let min = shape.support_point(&-axis.into_inner()).coords.dot(axis);
        (min, max)
    }
}

impl Default for IntervalSeparation {
    fn default() -> Self {
        IntervalSeparation::new(DEFAULT_TOLERANCE)
    }
}

impl SeparationTest for IntervalSeparation {
    fn overlap(
        &self,
        first: &dyn SupportMap,
        second: &dyn SupportMap,
        axis: &Vector<Real>,
    ) -> bool {
        let axis = Unit::try_new(*axis, DEFAULT_EPSILON).unwrap_or(Vector::y_axis());
        let (min1, max1) = Self::project(first, &axis);
        let (min2, max2) = Self::project(second, &axis);
        min2 - max1 <= self.tolerance && min1 - max2 <= self.tolerance
    }
}
