use glam::{Affine3A, Mat3, Quat, Vec3};

const DEGENERATE_EPS: f32 = 1e-12;

/// A world-space position + orientation pair.
///
/// Poses are detached snapshots: capturing one from a node does not track
/// later movement of that node. Scale is deliberately absent; targets carry
/// their own scale and motion never touches it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    #[must_use]
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Extracts the pose of a world matrix, discarding scale.
    #[must_use]
    pub fn from_matrix(matrix: &Affine3A) -> Self {
        let (_scale, rotation, position) = matrix.to_scale_rotation_translation();
        Self { position, rotation }
    }

    /// Pose at `eye` oriented so the local `-Z` axis points at `target`,
    /// with the local up axis biased toward `up`.
    ///
    /// Total for all inputs: when the view direction is collinear with `up`
    /// the view axis is nudged by a small fixed amount before the basis is
    /// built, so the result stays within ~1e-4 of the surrounding
    /// orientations instead of flipping; `eye == target` falls back to a
    /// `+Z` view axis.
    #[must_use]
    pub fn looking_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let mut zaxis = eye - target;
        if zaxis.length_squared() < DEGENERATE_EPS {
            zaxis = Vec3::Z;
        }
        let mut zaxis = zaxis.normalize();

        let mut xaxis = up.cross(zaxis);
        if xaxis.length_squared() < DEGENERATE_EPS {
            if up.z.abs() > 1.0 - 1e-6 {
                zaxis.x += 1e-4;
            } else {
                zaxis.z += 1e-4;
            }
            zaxis = zaxis.normalize();
            xaxis = up.cross(zaxis);
        }
        let xaxis = xaxis.normalize();
        let yaxis = zaxis.cross(xaxis);

        let rotation = Quat::from_mat3(&Mat3::from_cols(xaxis, yaxis, zaxis)).normalize();
        Self {
            position: eye,
            rotation,
        }
    }

    /// The view direction of this pose (`-Z` rotated into world space).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }
}
