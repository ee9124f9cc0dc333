/*!
touche
======

**touche** is a narrow-phase collision geometry library: convex shapes
described by support mappings, polytopes with static vertex/face adjacency,
and a contact-manifold generator turning two overlapping convex bodies into
a deduplicated set of contact points with normals.

The crate consumes two convex shape descriptions plus a contact direction
supplied by an external penetration oracle (GJK/EPA or SAT), and produces a
[`query::ContactSet`] for a physics response layer to act on. Integration,
constraint solving, and broad-phase culling are out of scope.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Matrix3, Point3, UnitVector3, Vector3};

    /// The default tolerance used for pure floating-point conditioning guards.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The default geometric tolerance used to accept or reject contact candidates.
    ///
    /// This value is expressed in the units of the scene. Scenes at a very
    /// different scale should thread their own tolerance through
    /// [`crate::query::ContactConfig`] instead of relying on this default.
    pub const DEFAULT_TOLERANCE: Real = 1.0e-6;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub type Point<N> = Point3<N>;

    /// The vector type.
    pub type Vector<N> = Vector3<N>;

    /// The unit vector type.
    pub type UnitVector<N> = UnitVector3<N>;

    /// The matrix type.
    pub type Matrix<N> = Matrix3<N>;
}
