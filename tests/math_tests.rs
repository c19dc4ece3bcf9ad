//! Geometry helper tests
//!
//! Tests for:
//! - rotation_between axis/angle computation, including both degenerate
//!   tie-breaks (antiparallel near world-up, antiparallel of world-up)
//! - perpendicular_near_up subspace pick
//! - segment/sphere classification
//! - BoundingBox extents and derived bounding spheres

use glam::Vec3;
use slew::math::{
    BoundingBox, Sphere, perpendicular_near_up, rotation_between, segment_outside_sphere,
};
use std::f32::consts::PI;

const EPSILON: f32 = 1e-5;

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < EPSILON
}

// ============================================================================
// rotation_between
// ============================================================================

#[test]
fn axis_angle_x_to_y() {
    let r = rotation_between(Vec3::X, Vec3::Y);
    assert!(vec3_approx(r.axis, Vec3::Z));
    assert!((r.angle - PI / 2.0).abs() < EPSILON);
}

#[test]
fn axis_angle_spatial() {
    let r = rotation_between(Vec3::new(0.0, 1.0, 1.0), Vec3::new(1.0, 0.0, 1.0));
    assert!(vec3_approx(r.axis, Vec3::new(1.0, 1.0, -1.0).normalize()));
    assert!((r.angle - PI / 3.0).abs() < EPSILON);
}

#[test]
fn axis_angle_antiparallel_picks_up() {
    // Degenerate: the cross product vanishes, the axis closest to +Y wins
    let r = rotation_between(Vec3::X, -Vec3::X);
    assert!(vec3_approx(r.axis, Vec3::Y));
    assert!((r.angle - PI).abs() < EPSILON);
}

#[test]
fn axis_angle_antiparallel_of_up_picks_right() {
    // Even more degenerate: +Y itself flips, so the up projection vanishes
    // and the axis falls back toward +X
    let r = rotation_between(Vec3::Y, -Vec3::Y);
    assert!(vec3_approx(r.axis, Vec3::X));
    assert!((r.angle - PI).abs() < EPSILON);
}

#[test]
fn axis_angle_parallel_is_zero_and_finite() {
    let u = Vec3::new(0.3, -0.2, 0.9);
    let r = rotation_between(u, u * 2.0);
    assert!(r.angle.abs() < EPSILON);
    assert!(r.axis.is_finite());
    assert!((r.axis.length() - 1.0).abs() < EPSILON);
    assert!(r.axis.dot(u).abs() < 1e-4);
}

#[test]
fn axis_is_orthogonal_to_inputs() {
    let u = Vec3::new(1.0, 2.0, -0.5);
    let v = Vec3::new(-0.3, 0.7, 2.0);
    let r = rotation_between(u, v);
    assert!(r.axis.dot(u).abs() < 1e-4);
    assert!(r.axis.dot(v).abs() < 1e-4);
}

// ============================================================================
// perpendicular_near_up
// ============================================================================

#[test]
fn subspace_pick_projects_up() {
    let axis = perpendicular_near_up(Vec3::new(1.0, 1.0, 0.0));
    assert!(vec3_approx(axis, Vec3::new(-1.0, 1.0, 0.0).normalize()));
}

#[test]
fn subspace_pick_of_up_is_right() {
    let axis = perpendicular_near_up(Vec3::Y);
    assert!(vec3_approx(axis, Vec3::X));
}

// ============================================================================
// segment_outside_sphere
// ============================================================================

#[test]
fn segment_classification() {
    let ball = Sphere::new(Vec3::new(2.0, 0.0, 1.0), 1.0);
    let src = Vec3::new(1.5, 0.0, 4.0); // outside the sphere

    // dest is in the ball
    assert!(!segment_outside_sphere(&ball, src, Vec3::new(2.0, 0.0, 0.5)));
    // dest is outside and the segment does not intersect
    assert!(segment_outside_sphere(&ball, src, Vec3::new(1.5, 0.0, 2.0)));
    // dest is outside but the segment passes through the ball
    assert!(!segment_outside_sphere(
        &ball,
        src,
        Vec3::new(1.5, 0.0, -2.0)
    ));
}

#[test]
fn segment_wholly_inside_is_not_outside() {
    let ball = Sphere::new(Vec3::ZERO, 3.0);
    assert!(!segment_outside_sphere(
        &ball,
        Vec3::new(-1.0, 0.0, 0.0),
        Vec3::new(1.0, 0.5, 0.0)
    ));
}

// ============================================================================
// BoundingBox
// ============================================================================

#[test]
fn bbox_center_size_diagonal() {
    let bbox = BoundingBox::new(Vec3::new(-1.0, -2.0, -3.0), Vec3::new(1.0, 2.0, 3.0));
    assert!(vec3_approx(bbox.center(), Vec3::ZERO));
    assert!(vec3_approx(bbox.size(), Vec3::new(2.0, 4.0, 6.0)));
    assert!((bbox.diagonal() - Vec3::new(2.0, 4.0, 6.0).length()).abs() < EPSILON);
}

#[test]
fn bbox_bounding_sphere_encloses_box() {
    let bbox = BoundingBox::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 2.0, 2.0));
    let sphere = bbox.bounding_sphere();
    assert!(vec3_approx(sphere.center, Vec3::ONE));
    assert!((sphere.radius - 3.0_f32.sqrt()).abs() < EPSILON);
    assert!(sphere.contains(bbox.min));
    assert!(sphere.contains(bbox.max));
}
