use glam::Vec3;

const PARALLEL_EPSILON: f32 = 1e-6;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Returns `None` for a zero-length direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        direction
            .try_normalize()
            .map(|direction| Self { origin, direction })
    }

    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Intersect with the horizontal plane `y = height`.
    ///
    /// Misses when the ray runs parallel to the plane or the plane lies behind
    /// the origin.
    pub fn intersect_ground(&self, height: f32) -> Option<Vec3> {
        let denom = self.direction.y;
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (height - self.origin.y) / denom;
        if t < 0.0 || !t.is_finite() {
            return None;
        }

        let mut hit = self.point_at(t);
        // Exact, so callers can compare against the plane height
        hit.y = height;
        Some(hit)
    }
}
