use glam::{Quat, Vec3};

use crate::math::{AxisAngle, Sphere, rotation_between};
use crate::motion::{SpeedProfile, apply_world_pose};
use crate::scene::{NodeHandle, Pose, SceneGraph};

/// A motion along the great-circle arc of a sphere.
///
/// Endpoints are expected on (or near) the sphere surface; the path stays at
/// the source's distance from the center throughout. Unlike
/// [`LinearMotion`](crate::motion::LinearMotion) the endpoint orientations
/// are ignored entirely: the target faces the sphere center for the whole
/// arc, up biased toward world-up.
#[derive(Debug, Clone)]
pub struct OrbitMotion {
    pub src: Pose,
    pub dest: Pose,
    pub target: NodeHandle,
    pub speeds: SpeedProfile,

    pub sphere: Sphere,
    /// Unit rotation axis of the great circle.
    pub axis: Vec3,
    /// Arc angle in `[0, PI]`.
    pub angle: f32,

    src_relative: Vec3,
}

impl OrbitMotion {
    #[must_use]
    pub fn new(
        sphere: Sphere,
        src: Pose,
        dest: Pose,
        target: NodeHandle,
        speeds: SpeedProfile,
    ) -> Self {
        let src_relative = src.position - sphere.center;
        let dest_relative = dest.position - sphere.center;
        let AxisAngle { axis, angle } = rotation_between(src_relative, dest_relative);

        log::debug!(
            "orbit motion: axis {axis}, angle {angle}, src relative {src_relative}, dest relative {dest_relative}"
        );

        Self {
            src,
            dest,
            target,
            speeds,
            sphere,
            axis,
            angle,
            src_relative,
        }
    }

    /// Interpolates at `t` in `[0, 1]`: rotates the source's center-relative
    /// position along the arc and orients the target at the sphere center.
    pub fn interpolate(&self, t: f32, scene: &mut SceneGraph) {
        let rotated = Quat::from_axis_angle(self.axis, t * self.angle) * self.src_relative;
        let position = self.sphere.center + rotated;
        let pose = Pose::looking_at(position, self.sphere.center, Vec3::Y);
        apply_world_pose(scene, self.target, &pose);
    }

    /// Arc length over velocity, plus the same angular term as a linear
    /// motion: a tiny-radius orbit may still turn half the sky and must take
    /// time for it.
    #[must_use]
    pub fn duration(&self) -> f32 {
        let distance = self.sphere.radius * self.angle;
        distance / self.speeds.velocity + self.angle / self.speeds.angular_velocity
    }
}
