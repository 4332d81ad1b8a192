//! Scene wiring: owns every per-frame component and drives them in order.

use anyhow::Result;
use glam::{Vec2, Vec3};

use crate::camera::OrbitCamera;
use crate::config::SceneConfig;
use crate::input::{InputEvent, InputMapper};
use crate::movement::{MovementController, TrackedPosition};
use crate::obstacle::ObstacleRegistry;
use crate::traits::{CameraController, InputSink, MoveListener};

/// One running scene.
///
/// Construction validates the config and announces the spawn position.
/// [`Scene::update`] advances the agent first and the camera second so the
/// camera always reads this frame's position. Input is recorded between
/// frames through [`InputSink`].
pub struct Scene<L: MoveListener> {
    config: SceneConfig,
    obstacles: ObstacleRegistry,
    movement: MovementController,
    camera: OrbitCamera,
    input: InputMapper,
    tracked: TrackedPosition,
    listener: L,
    viewport: Vec2,
}

impl<L: MoveListener> Scene<L> {
    pub fn new(config: SceneConfig, mut listener: L) -> Result<Self> {
        config.validate()?;

        let obstacles =
            ObstacleRegistry::from_specs(&config.obstacles).with_ground(config.ground.half_extent);
        let movement = MovementController::new(config.agent.clone());
        let camera = OrbitCamera::new(&config.orbit, movement.position());
        let input = InputMapper::new(&config.orbit, config.agent.half_size);

        let spawn = movement.position();
        if obstacles.collides(spawn.x, spawn.z, config.agent.half_size) {
            log::warn!(
                "Agent spawns in contact at ({:.2}, {:.2}); blocked axes stay put",
                spawn.x,
                spawn.z
            );
        }

        let mut tracked = TrackedPosition::default();
        movement.announce(&mut tracked, &mut listener);

        log::info!(
            "Scene ready: {} obstacles, ground {}x{}",
            obstacles.len(),
            config.ground.half_extent * 2.0,
            config.ground.half_extent * 2.0
        );

        Ok(Self {
            config,
            obstacles,
            movement,
            camera,
            input,
            tracked,
            listener,
            viewport: Vec2::ONE,
        })
    }

    /// Advance one frame by `delta_time` seconds.
    pub fn update(&mut self, delta_time: f32) {
        self.movement.set_intent(self.input.intent());
        self.movement
            .update(delta_time, &self.obstacles, &mut self.tracked, &mut self.listener);
        self.camera.update(delta_time, &self.tracked);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.viewport = Vec2::new(width, height);
            self.camera.set_viewport(width, height);
        }
    }

    /// Stop listening for input and hand back the listener.
    pub fn teardown(mut self) -> L {
        self.input.release_all();
        log::info!("Scene torn down at {:?}", self.movement.position());
        self.listener
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn obstacles(&self) -> &ObstacleRegistry {
        &self.obstacles
    }

    pub fn movement(&self) -> &MovementController {
        &self.movement
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn input(&self) -> &InputMapper {
        &self.input
    }

    pub fn tracked(&self) -> TrackedPosition {
        self.tracked
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn agent_position(&self) -> Vec3 {
        self.movement.position()
    }
}

impl<L: MoveListener> InputSink for Scene<L> {
    fn handle(&mut self, event: &InputEvent) -> bool {
        self.input
            .handle(event, &mut self.camera, &self.obstacles, self.viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hud::HudReadout;

    fn default_scene() -> Scene<HudReadout> {
        Scene::new(SceneConfig::default(), HudReadout::new()).unwrap()
    }

    #[test]
    fn test_spawn_is_announced() {
        let scene = default_scene();
        assert_eq!(scene.listener().updates(), 1);
        assert_eq!(scene.listener().text(), "X: 0.00 | Z: 0.00");
        assert_eq!(scene.tracked().get(), Some(Vec3::new(0.0, 0.5, 0.0)));
    }

    #[test]
    fn test_idle_frames_do_not_notify() {
        let mut scene = default_scene();
        for _ in 0..10 {
            scene.update(1.0 / 60.0);
        }
        assert_eq!(scene.listener().updates(), 1);
    }

    #[test]
    fn test_resize_ignores_zero() {
        let mut scene = default_scene();
        scene.resize(800.0, 600.0);
        scene.resize(0.0, 600.0);
        assert_eq!(scene.viewport(), Vec2::new(800.0, 600.0));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = SceneConfig::default();
        config.orbit.tilt_min = 1.5;
        config.orbit.tilt_max = 0.2;
        let err = Scene::new(config, HudReadout::new()).err().unwrap();
        assert!(err.to_string().contains("tilt_min"), "unexpected error: {}", err);
    }

    #[test]
    fn test_teardown_returns_listener() {
        let scene = default_scene();
        let hud = scene.teardown();
        assert_eq!(hud.updates(), 1);
    }
}
