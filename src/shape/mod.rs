//! Support-mapped convex shapes and the polytope adjacency model.

pub use self::ball::Ball;
pub use self::capsule::Capsule;
pub use self::cuboid::Cuboid;
pub use self::cylinder::Cylinder;
pub use self::polytope::{FaceRef, Polytope, PolytopeError, VertexRef};
pub use self::pose::Pose;
pub use self::segment::Segment;
pub use self::support_map::SupportMap;
pub use self::topology::{FaceData, Topology, VertexData, CUBE_TOPOLOGY, TETRAHEDRON_TOPOLOGY};

mod ball;
mod capsule;
mod cuboid;
mod cylinder;
mod polytope;
mod pose;
mod segment;
mod support_map;
mod topology;
