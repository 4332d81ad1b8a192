//! Scene construction parameters.
//!
//! Everything the simulation needs is an in-memory value; the binary can
//! overlay a partial JSON file on top of the defaults.

use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::obstacle::ObstacleSpec;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Units per second
    pub speed: f32,
    /// Half-size of the agent's collision cube; also its resting height
    pub half_size: f32,
    /// Planar distance at which goal seeking snaps to the goal
    pub stop_distance: f32,
    pub spawn: [f32; 2],
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            speed: 6.0,
            half_size: 0.5,
            stop_distance: 0.1,
            spawn: [0.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    pub initial_yaw: f32,
    pub initial_tilt: f32,
    pub initial_radius: f32,
    pub tilt_min: f32,
    pub tilt_max: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    /// Radians of yaw per pixel of horizontal drag
    pub rotation_sensitivity: f32,
    /// Radians of tilt per pixel of vertical drag
    pub tilt_sensitivity: f32,
    /// Radius units per wheel delta unit (pixels)
    pub zoom_sensitivity: f32,
    /// Exponential decay rate for position/look-at smoothing, per second
    pub smoothing: f32,
    pub initial_position: [f32; 3],
    pub fov_y_degrees: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            initial_yaw: std::f32::consts::FRAC_PI_4,
            initial_tilt: std::f32::consts::FRAC_PI_4,
            initial_radius: 10.0,
            tilt_min: 25f32.to_radians(),
            tilt_max: 70f32.to_radians(),
            radius_min: 6.0,
            radius_max: 18.0,
            rotation_sensitivity: 0.008,
            tilt_sensitivity: 0.006,
            zoom_sensitivity: 0.01,
            // 0.08 per frame at 60 Hz
            smoothing: 5.0,
            initial_position: [10.0, 10.0, 10.0],
            fov_y_degrees: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundConfig {
    /// Ground is a square of side `2 * half_extent` centered on the origin
    pub half_extent: f32,
    pub color: String,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            half_extent: 25.0,
            color: "#1f2937".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub agent: AgentConfig,
    pub orbit: OrbitConfig,
    pub ground: GroundConfig,
    pub obstacles: Vec<ObstacleSpec>,
}

impl SceneConfig {
    pub fn with_obstacles(mut self, obstacles: Vec<ObstacleSpec>) -> Self {
        self.obstacles = obstacles;
        self
    }

    /// Overlay a JSON document on the defaults. Missing fields keep their default.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SceneConfig = serde_json::from_str(json).context("Invalid scene config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene config: {}", path.display()))?;
        let config = Self::from_json(&json)
            .with_context(|| format!("Failed to load scene config: {}", path.display()))?;
        log::info!("Loaded scene config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let agent = &self.agent;
        ensure!(agent.speed.is_finite() && agent.speed > 0.0, "agent.speed must be positive");
        ensure!(
            agent.half_size.is_finite() && agent.half_size > 0.0,
            "agent.half_size must be positive"
        );
        ensure!(
            agent.stop_distance.is_finite() && agent.stop_distance >= 0.0,
            "agent.stop_distance must be non-negative"
        );

        let orbit = &self.orbit;
        ensure!(
            orbit.tilt_min <= orbit.tilt_max,
            "orbit.tilt_min ({}) exceeds orbit.tilt_max ({})",
            orbit.tilt_min,
            orbit.tilt_max
        );
        ensure!(
            orbit.radius_min > 0.0 && orbit.radius_min <= orbit.radius_max,
            "orbit radius range [{}, {}] is invalid",
            orbit.radius_min,
            orbit.radius_max
        );
        ensure!(
            orbit.smoothing.is_finite() && orbit.smoothing >= 0.0,
            "orbit.smoothing must be non-negative"
        );
        ensure!(
            orbit.fov_y_degrees > 0.0 && orbit.fov_y_degrees < 180.0,
            "orbit.fov_y_degrees must be in (0, 180)"
        );

        ensure!(
            self.ground.half_extent.is_finite() && self.ground.half_extent > agent.half_size,
            "ground.half_extent must exceed agent.half_size"
        );

        for (i, obstacle) in self.obstacles.iter().enumerate() {
            ensure!(
                obstacle.position.iter().chain(obstacle.size.iter()).all(|v| v.is_finite()),
                "obstacle {} has non-finite geometry",
                i
            );
        }

        Ok(())
    }
}
