//! Geometry helpers shared by the motion modules:
//! - [`AxisAngle`] / [`rotation_between`]: rotation taking one direction to another
//! - [`Sphere`] + [`segment_outside_sphere`]: planning heuristics
//! - [`BoundingBox`]: scene extents and derived bounding spheres

pub mod axis_angle;
pub mod bounds;
pub mod sphere;

pub use axis_angle::{AxisAngle, perpendicular_near_up, rotation_between};
pub use bounds::BoundingBox;
pub use sphere::{Sphere, segment_outside_sphere};
