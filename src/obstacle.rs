//! Static obstacles and the ground bounds the agent collides against.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::math::{parse_hex_color, AABB};

const FALLBACK_COLOR: [f32; 3] = [0.5, 0.5, 0.5];

/// Obstacle as supplied at scene construction: full size, not half extents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSpec {
    pub position: [f32; 3],
    pub size: [f32; 3],
    pub color: String,
}

impl ObstacleSpec {
    pub fn new(position: [f32; 3], size: [f32; 3], color: &str) -> Self {
        Self {
            position,
            size,
            color: color.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub bounds: AABB,
    pub color: String,
}

impl Obstacle {
    pub fn center(&self) -> Vec3 {
        self.bounds.center
    }

    pub fn half_extents(&self) -> Vec3 {
        self.bounds.half_extents
    }

    /// Linear RGB for rendering; unparseable tags render grey.
    pub fn rgb(&self) -> [f32; 3] {
        parse_hex_color(&self.color).unwrap_or(FALLBACK_COLOR)
    }
}

impl From<&ObstacleSpec> for Obstacle {
    fn from(spec: &ObstacleSpec) -> Self {
        Self {
            bounds: AABB::from_size(Vec3::from_array(spec.position), Vec3::from_array(spec.size)),
            color: spec.color.clone(),
        }
    }
}

/// Immutable obstacle list plus optional ground bounds.
#[derive(Debug, Clone, Default)]
pub struct ObstacleRegistry {
    obstacles: Vec<Obstacle>,
    ground: Option<AABB>,
}

impl ObstacleRegistry {
    pub fn new(obstacles: Vec<Obstacle>) -> Self {
        Self {
            obstacles,
            ground: None,
        }
    }

    pub fn from_specs(specs: &[ObstacleSpec]) -> Self {
        Self::new(specs.iter().map(Obstacle::from).collect())
    }

    /// Restrict movement to a square ground of side `2 * half_extent` around the origin.
    pub fn with_ground(mut self, half_extent: f32) -> Self {
        self.ground = Some(AABB::new(Vec3::ZERO, Vec3::new(half_extent, 0.0, half_extent)));
        self
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn ground(&self) -> Option<&AABB> {
        self.ground.as_ref()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Does an agent cube of half-size `half_size` centered at `(x, z)` collide?
    ///
    /// Touching an obstacle face counts as a collision. Leaving the ground does too.
    pub fn collides(&self, x: f32, z: f32, half_size: f32) -> bool {
        let agent = AABB::new(Vec3::new(x, 0.0, z), Vec3::splat(half_size));

        if let Some(ground) = &self.ground {
            if !ground.contains_xz(&agent) {
                return true;
            }
        }

        self.obstacles.iter().any(|o| o.bounds.overlaps_xz(&agent))
    }

    /// Is the point on the ground surface? Always true without ground bounds.
    pub fn on_ground(&self, point: Vec3) -> bool {
        self.ground.map_or(true, |g| g.contains_point_xz(point))
    }
}
