use crate::math::{Point, Real, Vector};
use ordered_float::OrderedFloat;

/// Computes the index of the point of a cloud farthest along `dir`.
///
/// This is the brute-force baseline used by polytopes lacking adjacency
/// information. The slice must not be empty; ties pick any maximizer.
#[inline]
pub fn point_cloud_support_point_id(dir: &Vector<Real>, points: &[Point<Real>]) -> usize {
    points
        .iter()
        .enumerate()
        .max_by_key(|(_, p)| OrderedFloat(p.coords.dot(dir)))
        .map(|(id, _)| id)
        .unwrap_or(0)
}

/// Computes the point of a cloud farthest along `dir`.
#[inline]
pub fn point_cloud_support_point(dir: &Vector<Real>, points: &[Point<Real>]) -> Point<Real> {
    points[point_cloud_support_point_id(dir, points)]
}
