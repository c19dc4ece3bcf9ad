use glam::Vec3;

/// A sphere described by center and radius.
///
/// Used both as a scene bounding volume and as the geometric support for
/// orbital motion paths.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    #[must_use]
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// True if the point lies inside or on the sphere (closed ball).
    #[must_use]
    pub fn contains(&self, point: Vec3) -> bool {
        (point - self.center).length_squared() <= self.radius * self.radius
    }
}

/// True iff the segment from `a` to `b` stays strictly outside the closed
/// ball of `sphere`.
///
/// A segment wholly inside the ball is *not* outside; a segment whose
/// endpoints are outside but which passes through the ball is not outside
/// either. This is a planning heuristic, tangency counts as a hit.
#[must_use]
pub fn segment_outside_sphere(sphere: &Sphere, a: Vec3, b: Vec3) -> bool {
    let ab = b - a;
    let len_sq = ab.length_squared();

    let t = if len_sq > 0.0 {
        ((sphere.center - a).dot(ab) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let closest = a + ab * t;

    (closest - sphere.center).length_squared() > sphere.radius * sphere.radius
}
