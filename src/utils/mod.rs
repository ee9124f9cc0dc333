//! Geometric value types and helpers shared across queries.

pub use self::plucker::{PluckerLine, PluckerPlane, PluckerPoint};
pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id,
};

mod plucker;
mod point_cloud_support_point;
