use glam::Vec3;

/// Tolerance below which a squared length counts as zero.
const DEGENERATE_EPS: f32 = 1e-12;

/// A rotation expressed as a unit axis and an angle in `[0, PI]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAngle {
    pub axis: Vec3,
    pub angle: f32,
}

/// Computes the rotation taking the direction of `u` to the direction of `v`.
///
/// The regular case uses the normalized cross product as the axis. The two
/// degenerate cases are resolved so the result is total and never NaN:
///
/// - `u` and `v` antiparallel (angle = PI): the cross product vanishes and
///   every axis perpendicular to `u` is valid. The axis closest to world-up
///   is chosen via [`perpendicular_near_up`].
/// - `u` and `v` parallel (angle = 0) or either input is zero-length: the
///   axis is irrelevant, but a finite perpendicular one is still returned.
#[must_use]
pub fn rotation_between(u: Vec3, v: Vec3) -> AxisAngle {
    if u.length_squared() < DEGENERATE_EPS || v.length_squared() < DEGENERATE_EPS {
        return AxisAngle {
            axis: perpendicular_near_up(u),
            angle: 0.0,
        };
    }

    let angle = u.angle_between(v);
    let cross = u.cross(v);

    let axis = if cross.length_squared() > DEGENERATE_EPS {
        cross.normalize()
    } else {
        // Parallel or antiparallel. The subspace pick only matters for the
        // antiparallel case; for angle 0 any finite axis will do.
        perpendicular_near_up(u)
    };

    AxisAngle { axis, angle }
}

/// Picks the unit vector perpendicular to `dir` that lies closest to
/// world-up, by projecting `+Y` into the perpendicular subspace of `dir`.
///
/// When `dir` itself is aligned with world-up the projection vanishes and
/// world-right `(1, 0, 0)` is projected instead. A unit `dir` cannot be
/// parallel to both axes, so no further fallback exists. A zero-length `dir`
/// yields `+Y`.
#[must_use]
pub fn perpendicular_near_up(dir: Vec3) -> Vec3 {
    if dir.length_squared() < DEGENERATE_EPS {
        return Vec3::Y;
    }
    let n = dir.normalize();

    let up = Vec3::Y - n * Vec3::Y.dot(n);
    if up.length_squared() > DEGENERATE_EPS {
        return up.normalize();
    }

    let right = Vec3::X - n * Vec3::X.dot(n);
    debug_assert!(
        right.length_squared() > DEGENERATE_EPS,
        "dir cannot be parallel to both +Y and +X"
    );
    right.normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn vec3_approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-6
    }

    #[test]
    fn x_to_y_rotates_about_z() {
        let r = rotation_between(Vec3::X, Vec3::Y);
        assert!(vec3_approx(r.axis, Vec3::Z));
        assert!((r.angle - PI / 2.0).abs() < 1e-6);
    }

    #[test]
    fn antiparallel_prefers_up() {
        let r = rotation_between(Vec3::X, -Vec3::X);
        assert!(vec3_approx(r.axis, Vec3::Y));
        assert!((r.angle - PI).abs() < 1e-6);
    }

    #[test]
    fn antiparallel_up_falls_back_to_right() {
        let r = rotation_between(Vec3::Y, -Vec3::Y);
        assert!(vec3_approx(r.axis, Vec3::X));
        assert!((r.angle - PI).abs() < 1e-6);
    }

    #[test]
    fn zero_input_is_finite() {
        let r = rotation_between(Vec3::ZERO, Vec3::X);
        assert!(r.axis.is_finite());
        assert_eq!(r.angle, 0.0);
    }
}
