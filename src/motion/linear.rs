use crate::errors::Result;
use crate::motion::{SpeedProfile, apply_world_pose};
use crate::scene::{NodeHandle, Pose, SceneGraph};

/// A straight-line motion between two world poses.
///
/// Position is linearly interpolated and orientation is slerped, both in
/// world space; each frame the result is written onto `target` in its
/// parent's coordinate system. The endpoint poses are snapshots taken at
/// construction and do not follow later movement of their source nodes.
#[derive(Debug, Clone)]
pub struct LinearMotion {
    pub src: Pose,
    pub dest: Pose,
    pub target: NodeHandle,
    pub speeds: SpeedProfile,
}

impl LinearMotion {
    #[must_use]
    pub fn new(src: Pose, dest: Pose, target: NodeHandle, speeds: SpeedProfile) -> Self {
        Self {
            src,
            dest,
            target,
            speeds,
        }
    }

    /// Captures the current world poses of two scene nodes as the endpoints.
    pub fn between(
        scene: &mut SceneGraph,
        src: NodeHandle,
        dest: NodeHandle,
        target: NodeHandle,
        speeds: SpeedProfile,
    ) -> Result<Self> {
        let src = scene.world_pose(src)?;
        let dest = scene.world_pose(dest)?;
        Ok(Self::new(src, dest, target, speeds))
    }

    /// Interpolates at `t` in `[0, 1]` and positions the target.
    pub fn interpolate(&self, t: f32, scene: &mut SceneGraph) {
        let position = self.src.position.lerp(self.dest.position, t);
        let rotation = self.src.rotation.slerp(self.dest.rotation, t);
        apply_world_pose(scene, self.target, &Pose::new(position, rotation));
    }

    /// Travel time plus turn time at the configured speeds. Zero when the
    /// endpoints coincide.
    #[must_use]
    pub fn duration(&self) -> f32 {
        let distance = self.src.position.distance(self.dest.position);
        let angle = self.src.rotation.angle_between(self.dest.rotation);
        distance / self.speeds.velocity + angle / self.speeds.angular_velocity
    }
}
