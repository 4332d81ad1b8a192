use glam::Vec3;

/// Axis-aligned box stored as center + half extents.
///
/// Overlap queries work on the XZ footprint only; the ground plane is the
/// only surface anything moves on, so height never participates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AABB {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl AABB {
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents: half_extents.abs(),
        }
    }

    /// Box built from a full size, the way obstacle lists describe them.
    pub fn from_size(center: Vec3, size: Vec3) -> Self {
        Self::new(center, size * 0.5)
    }

    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents
    }

    /// Closed-interval footprint overlap: touching faces count as overlapping.
    pub fn overlaps_xz(&self, other: &AABB) -> bool {
        (self.center.x - other.center.x).abs() <= self.half_extents.x + other.half_extents.x
            && (self.center.z - other.center.z).abs() <= self.half_extents.z + other.half_extents.z
    }

    /// True if `other`'s footprint lies entirely inside this one (boundary inclusive).
    pub fn contains_xz(&self, other: &AABB) -> bool {
        (self.center.x - other.center.x).abs() + other.half_extents.x <= self.half_extents.x
            && (self.center.z - other.center.z).abs() + other.half_extents.z <= self.half_extents.z
    }

    /// True if the point's XZ projection lies inside the footprint (boundary inclusive).
    pub fn contains_point_xz(&self, point: Vec3) -> bool {
        (self.center.x - point.x).abs() <= self.half_extents.x
            && (self.center.z - point.z).abs() <= self.half_extents.z
    }
}
