//! The motion engine.
//!
//! A transition is a [`MotionTrack`]: an ordered list of segments sharing
//! one elapsed-time clock, each segment claiming a slice of the timeline
//! proportional to its own duration. Two segment kinds exist:
//!
//! - [`LinearMotion`]: straight-line position lerp with slerped orientation
//! - [`OrbitMotion`]: great-circle arc on a sphere, always facing its center
//!
//! [`plan_transition`] picks the path topology (direct line, orbit on an
//! intermediate sphere, or rise/orbit/descend around the bounding sphere)
//! from the endpoints and a bounding sphere. [`MotionDriver`] holds the
//! at-most-one running track per target.

pub mod driver;
pub mod linear;
pub mod orbit;
pub mod planner;
pub mod track;

pub use driver::MotionDriver;
pub use linear::LinearMotion;
pub use orbit::OrbitMotion;
pub use planner::{bounding_sphere_track, plan_transition, plan_transition_between};
pub use track::MotionTrack;

use crate::errors::{Result, SlewError};
use crate::scene::{NodeHandle, Pose, SceneGraph};

/// Linear and angular velocity of a motion, in world units/second and
/// radians/second. Both are validated strictly positive at construction so
/// duration math never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedProfile {
    pub velocity: f32,
    pub angular_velocity: f32,
}

/// Seconds a transition should take to traverse the whole scene extent.
const SECONDS_TO_TRAVERSE_EXTENT: f32 = 2.0;

/// Default turn rate: 45 degrees per second.
const DEFAULT_ANGULAR_VELOCITY: f32 = std::f32::consts::FRAC_PI_4;

impl SpeedProfile {
    pub fn new(velocity: f32, angular_velocity: f32) -> Result<Self> {
        for value in [velocity, angular_velocity] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SlewError::InvalidSpeed { value });
            }
        }
        Ok(Self {
            velocity,
            angular_velocity,
        })
    }

    /// Speeds adapted to the size of the scene, e.g. from the diagonal of
    /// its bounding box.
    #[must_use]
    pub fn for_scene_extent(extent: f32) -> Self {
        let extent = extent.max(1e-6);
        Self {
            velocity: extent / SECONDS_TO_TRAVERSE_EXTENT,
            angular_velocity: DEFAULT_ANGULAR_VELOCITY,
        }
    }

    /// Both speeds multiplied by `factor`.
    #[must_use]
    pub(crate) fn scaled(self, factor: f32) -> Self {
        Self {
            velocity: self.velocity * factor,
            angular_velocity: self.angular_velocity * factor,
        }
    }
}

impl Default for SpeedProfile {
    fn default() -> Self {
        Self {
            velocity: 1.0,
            angular_velocity: 1.0,
        }
    }
}

/// A single motion segment. [`MotionTrack`] depends only on this dispatch
/// surface, never on the concrete variant.
#[derive(Debug, Clone)]
pub enum Segment {
    Linear(LinearMotion),
    Orbit(OrbitMotion),
}

impl Segment {
    /// Interpolates the segment at `t` in `[0, 1]` and writes the result
    /// onto the segment's target node. `t = 0` and `t = 1` land on the
    /// endpoint positions exactly; orientation at the endpoints follows the
    /// segment kind (orbits face the sphere center regardless of the
    /// endpoint orientations).
    pub fn interpolate(&self, t: f32, scene: &mut SceneGraph) {
        match self {
            Segment::Linear(motion) => motion.interpolate(t, scene),
            Segment::Orbit(motion) => motion.interpolate(t, scene),
        }
    }

    /// Estimated time in seconds to play this segment at its own speeds.
    #[must_use]
    pub fn duration(&self) -> f32 {
        match self {
            Segment::Linear(motion) => motion.duration(),
            Segment::Orbit(motion) => motion.duration(),
        }
    }

    /// The node this segment mutates.
    #[must_use]
    pub fn target(&self) -> NodeHandle {
        match self {
            Segment::Linear(motion) => motion.target,
            Segment::Orbit(motion) => motion.target,
        }
    }
}

impl From<LinearMotion> for Segment {
    fn from(motion: LinearMotion) -> Self {
        Segment::Linear(motion)
    }
}

impl From<OrbitMotion> for Segment {
    fn from(motion: OrbitMotion) -> Self {
        Segment::Orbit(motion)
    }
}

/// Writes an interpolated world pose onto the target. A stale target is a
/// caller ordering bug; it is reported loudly and skipped rather than
/// aborting the track.
pub(crate) fn apply_world_pose(scene: &mut SceneGraph, target: NodeHandle, pose: &Pose) {
    if let Err(err) = scene.set_world_pose(target, pose) {
        log::warn!("motion target vanished mid-track: {err}");
    }
}
