//! Agent movement: goal seeking and held-direction driving with
//! axis-separated collision sliding.

use glam::{Vec2, Vec3};

use crate::config::AgentConfig;
use crate::obstacle::ObstacleRegistry;
use crate::traits::MoveListener;

/// What the agent is currently trying to do.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Intent {
    #[default]
    None,
    /// Walk to a point on the ground
    Goal(Vec3),
    /// Walk along a unit (x, z) direction for as long as it is held
    Direction(Vec2),
}

impl Intent {
    /// Direction intent from a raw (x, z) vector. Zero length means no intent.
    pub fn direction(raw: Vec2) -> Self {
        match raw.try_normalize() {
            Some(dir) => Intent::Direction(dir),
            None => Intent::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionState {
    Idle,
    Seeking,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Agent {
    pub position: Vec3,
    /// Yaw in radians, `atan2(dir.x, dir.z)` of the last movement direction
    pub facing_angle: f32,
    pub intent: Intent,
}

/// Last published agent position, read by the camera.
///
/// Unset until the movement controller announces the agent for the first time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrackedPosition(Option<Vec3>);

impl TrackedPosition {
    pub fn get(&self) -> Option<Vec3> {
        self.0
    }

    pub fn set(&mut self, position: Vec3) {
        self.0 = Some(position);
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }
}

#[derive(Debug, Clone)]
pub struct MovementController {
    agent: Agent,
    config: AgentConfig,
    state: MotionState,
}

impl MovementController {
    pub fn new(config: AgentConfig) -> Self {
        let position = Vec3::new(config.spawn[0], config.half_size, config.spawn[1]);
        Self {
            agent: Agent {
                position,
                facing_angle: 0.0,
                intent: Intent::None,
            },
            config,
            state: MotionState::Idle,
        }
    }

    /// Snapshot of the agent's position.
    pub fn position(&self) -> Vec3 {
        self.agent.position
    }

    pub fn facing_angle(&self) -> f32 {
        self.agent.facing_angle
    }

    pub fn intent(&self) -> Intent {
        self.agent.intent
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    pub fn agent(&self) -> Agent {
        self.agent
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Replace the current intent. Goals are pinned to the agent's resting height.
    pub fn set_intent(&mut self, intent: Intent) {
        let intent = match intent {
            Intent::Goal(goal) => Intent::Goal(Vec3::new(goal.x, self.config.half_size, goal.z)),
            Intent::Direction(dir) => Intent::direction(dir),
            Intent::None => Intent::None,
        };

        if intent == self.agent.intent {
            return;
        }

        log::debug!("Agent intent {:?} -> {:?}", self.agent.intent, intent);
        self.agent.intent = intent;
        self.state = match intent {
            Intent::None => MotionState::Idle,
            _ => MotionState::Seeking,
        };
    }

    /// Publish the current position unconditionally. Used once at scene start.
    pub fn announce(&self, tracked: &mut TrackedPosition, listener: &mut impl MoveListener) {
        tracked.set(self.agent.position);
        listener.on_move(self.agent.position);
    }

    /// Advance one frame. Returns true if the agent moved, in which case the
    /// tracked position and the listener have both been notified.
    pub fn update(
        &mut self,
        delta_time: f32,
        obstacles: &ObstacleRegistry,
        tracked: &mut TrackedPosition,
        listener: &mut impl MoveListener,
    ) -> bool {
        let previous = self.agent.position;
        let delta_time = delta_time.max(0.0);

        match self.agent.intent {
            Intent::None => self.state = MotionState::Idle,
            Intent::Goal(goal) => self.seek(goal, delta_time, obstacles),
            Intent::Direction(dir) => self.drive(dir, delta_time, obstacles),
        }

        let position = self.agent.position;
        let moved = position.x != previous.x || position.z != previous.z;
        if moved {
            tracked.set(position);
            listener.on_move(position);
        }
        moved
    }

    fn seek(&mut self, goal: Vec3, delta_time: f32, obstacles: &ObstacleRegistry) {
        let position = self.agent.position;
        let to_goal = Vec2::new(goal.x - position.x, goal.z - position.z);
        let distance = to_goal.length();

        if distance <= self.config.stop_distance {
            if distance > 0.0 {
                // Land exactly on the goal rather than accumulating a residue
                self.slide_to(goal.x, goal.z, obstacles);
            }
            if self.state == MotionState::Seeking {
                log::debug!("Agent reached goal ({:.2}, {:.2})", goal.x, goal.z);
            }
            self.state = MotionState::Idle;
            return;
        }

        let dir = to_goal / distance;
        self.agent.facing_angle = dir.x.atan2(dir.y);

        let step = (self.config.speed * delta_time).min(distance);
        self.slide_to(position.x + dir.x * step, position.z + dir.y * step, obstacles);
        self.state = MotionState::Seeking;
    }

    fn drive(&mut self, dir: Vec2, delta_time: f32, obstacles: &ObstacleRegistry) {
        let position = self.agent.position;
        self.agent.facing_angle = dir.x.atan2(dir.y);

        let step = self.config.speed * delta_time;
        self.slide_to(position.x + dir.x * step, position.z + dir.y * step, obstacles);
        self.state = MotionState::Seeking;
    }

    /// Axis-separated resolution: try X alone, then Z using the resolved X.
    /// A blocked axis keeps its old coordinate so the other can slide along the face.
    fn slide_to(&mut self, next_x: f32, next_z: f32, obstacles: &ObstacleRegistry) {
        let half = self.config.half_size;
        let Vec3 { x, z, .. } = self.agent.position;

        let x = if obstacles.collides(next_x, z, half) { x } else { next_x };
        let z = if obstacles.collides(x, next_z, half) { z } else { next_z };

        self.agent.position = Vec3::new(x, half, z);
    }
}
