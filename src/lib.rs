#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod errors;
pub mod math;
pub mod motion;
pub mod scene;

pub use errors::SlewError;
pub use math::{AxisAngle, BoundingBox, Sphere};
pub use motion::{
    LinearMotion, MotionDriver, MotionTrack, OrbitMotion, Segment, SpeedProfile, plan_transition,
    plan_transition_between,
};
pub use scene::{Node, NodeHandle, Pose, SceneGraph, Transform};
