use glam::Vec3;

use crate::errors::Result;
use crate::math::{Sphere, segment_outside_sphere};
use crate::motion::{LinearMotion, MotionTrack, OrbitMotion, Segment, SpeedProfile};
use crate::scene::{NodeHandle, Pose, SceneGraph};

/// Speed multiplier for the orbit leg of a composite track. At uniform
/// speed the orbit, usually the longest leg, dominates the perceived
/// duration and makes the rise and descent look rushed.
const ORBIT_SPEED_BIAS: f32 = 4.0;

/// Hops shorter than this fraction of the bounding radius read naturally as
/// straight lines.
const SHORT_MOTION_RADII: f32 = 0.5;

/// Plans a transition between two world poses and assembles it into a
/// ready-to-start track. The topology is chosen heuristically:
///
/// 1. The segment misses the bounding sphere and is short (under half a
///    radius): a single direct [`LinearMotion`].
/// 2. The segment misses the sphere but is long: a rise/orbit/descend
///    composite on an *intermediate* sphere whose radius is the mean of the
///    endpoint distances from the center — long straight moves with
///    simultaneously interpolated rotation drift off-subject.
/// 3. The segment would cross the bounding volume: the composite on the
///    bounding sphere itself, so the path visibly arcs around the scene's
///    contents.
pub fn plan_transition(
    sphere: &Sphere,
    src: &Pose,
    dest: &Pose,
    target: NodeHandle,
    speeds: SpeedProfile,
) -> Result<MotionTrack> {
    let wont_hit_sphere = segment_outside_sphere(sphere, src.position, dest.position);
    // in radii of the bounding sphere
    let linear_distance = src.position.distance(dest.position) / sphere.radius;
    let short_motion = linear_distance < SHORT_MOTION_RADII;

    log::debug!(
        "motion heuristics: linear distance {linear_distance} radii, segment outside sphere: {wont_hit_sphere}"
    );

    if wont_hit_sphere && short_motion {
        log::debug!("using direct motion");
        let motion = LinearMotion::new(*src, *dest, target, speeds);
        return MotionTrack::new([Segment::Linear(motion)]);
    }

    if wont_hit_sphere {
        let src_distance = (src.position - sphere.center).length();
        let dest_distance = (dest.position - sphere.center).length();
        let avg_radius = (src_distance + dest_distance) / 2.0;
        let motion_sphere = Sphere::new(sphere.center, avg_radius);
        log::debug!("using orbit on intermediate sphere, radius {avg_radius}");
        return bounding_sphere_track(&motion_sphere, src, dest, target, speeds);
    }

    log::debug!("using orbit on the bounding sphere");
    bounding_sphere_track(sphere, src, dest, target, speeds)
}

/// Like [`plan_transition`] with the endpoints captured from scene nodes.
pub fn plan_transition_between(
    scene: &mut SceneGraph,
    sphere: &Sphere,
    src: NodeHandle,
    dest: NodeHandle,
    target: NodeHandle,
    speeds: SpeedProfile,
) -> Result<MotionTrack> {
    let src_pose = scene.world_pose(src)?;
    let dest_pose = scene.world_pose(dest)?;
    plan_transition(sphere, &src_pose, &dest_pose, target, speeds)
}

/// The three-phase composite: rise from `src` to the point radially above it
/// on `sphere`, orbit the great circle to the point above `dest`, then
/// descend. The orbit leg runs at [`ORBIT_SPEED_BIAS`] times both speeds;
/// the rise and descent keep the caller's speeds so the ends of the
/// transition feel uniform.
pub fn bounding_sphere_track(
    sphere: &Sphere,
    src: &Pose,
    dest: &Pose,
    target: NodeHandle,
    speeds: SpeedProfile,
) -> Result<MotionTrack> {
    let src_above = raised_pose(src.position, sphere);
    let dest_above = raised_pose(dest.position, sphere);

    let rise = LinearMotion::new(*src, src_above, target, speeds);
    let orbit = OrbitMotion::new(
        *sphere,
        src_above,
        dest_above,
        target,
        speeds.scaled(ORBIT_SPEED_BIAS),
    );
    let descend = LinearMotion::new(dest_above, *dest, target, speeds);

    MotionTrack::new([rise.into(), orbit.into(), descend.into()])
}

/// Pose on the sphere radially above `point`, oriented at the sphere center.
///
/// The raised pose looks at the center along its own radial axis; orienting
/// it at anything else flips the rise leg's final orientation when the
/// raised point passes overhead. A point at the exact center has no radial
/// direction and raises along world-up.
fn raised_pose(point: Vec3, sphere: &Sphere) -> Pose {
    let offset = point - sphere.center;
    let radial = if offset.length_squared() > 1e-12 {
        offset.normalize()
    } else {
        Vec3::Y
    };
    let position = sphere.center + radial * sphere.radius;
    Pose::looking_at(position, sphere.center, Vec3::Y)
}
