//! Pointer and keyboard events to movement intents and orbit adjustments.

use std::collections::HashSet;

use glam::{Vec2, Vec3};

use crate::camera::OrbitCamera;
use crate::config::OrbitConfig;
use crate::core::Button;
use crate::movement::Intent;
use crate::obstacle::ObstacleRegistry;

/// Platform-neutral input event. Positions are window pixels, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { button: Button, position: Vec2 },
    PointerUp { button: Button },
    PointerMove { position: Vec2 },
    PointerLeave,
    /// Positive `delta_y` scrolls toward the user (zoom out)
    Wheel { delta_y: f32 },
    Key { button: Button, pressed: bool },
}

impl InputEvent {
    /// Releases that close an interaction begun inside the scene. These must
    /// reach the scene even when an overlay captured the pointer or keyboard.
    pub fn ends_session(&self) -> bool {
        matches!(
            self,
            InputEvent::PointerUp { .. }
                | InputEvent::PointerLeave
                | InputEvent::Key { pressed: false, .. }
        )
    }
}

/// State captured when an orbit drag begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub start_pointer: Vec2,
    pub start_yaw: f32,
    pub start_tilt: f32,
}

#[derive(Debug, Clone)]
pub struct InputMapper {
    pressed_keys: HashSet<Button>,
    drag: Option<DragSession>,
    pointer: Option<Vec2>,
    goal: Option<Vec3>,
    rotation_sensitivity: f32,
    tilt_sensitivity: f32,
    zoom_sensitivity: f32,
    agent_height: f32,
}

impl InputMapper {
    pub fn new(orbit: &OrbitConfig, agent_height: f32) -> Self {
        Self {
            pressed_keys: HashSet::new(),
            drag: None,
            pointer: None,
            goal: None,
            rotation_sensitivity: orbit.rotation_sensitivity,
            tilt_sensitivity: orbit.tilt_sensitivity,
            zoom_sensitivity: orbit.zoom_sensitivity,
            agent_height,
        }
    }

    /// Apply one event. Orbit changes are written straight into `camera`;
    /// movement is only recorded as intent.
    pub fn handle(
        &mut self,
        event: &InputEvent,
        camera: &mut OrbitCamera,
        ground: &ObstacleRegistry,
        viewport: Vec2,
    ) -> bool {
        match *event {
            InputEvent::PointerDown { button: Button::MouseLeft, position } => {
                self.pointer = Some(position);
                self.pick_destination(position, camera, ground, viewport)
            }
            InputEvent::PointerDown { button: Button::MouseRight, position } => {
                self.pointer = Some(position);
                self.begin_drag(position, camera);
                true
            }
            InputEvent::PointerDown { .. } => false,
            // Any release ends a drag, wherever it happens
            InputEvent::PointerUp { .. } => self.end_drag(),
            InputEvent::PointerMove { position } => {
                self.pointer = Some(position);
                self.drag_to(position, camera)
            }
            InputEvent::PointerLeave => {
                self.pointer = None;
                self.end_drag()
            }
            InputEvent::Wheel { delta_y } => {
                camera.zoom_by(delta_y * self.zoom_sensitivity);
                true
            }
            InputEvent::Key { button, pressed } => self.set_key(button, pressed),
        }
    }

    /// Current movement intent. A held direction overrides any pointer goal.
    pub fn intent(&self) -> Intent {
        match Intent::direction(self.direction()) {
            Intent::None => self.goal.map_or(Intent::None, Intent::Goal),
            direction => direction,
        }
    }

    /// Sum of held direction keys as raw (x, z); not normalized.
    pub fn direction(&self) -> Vec2 {
        self.pressed_keys
            .iter()
            .filter_map(|b| Self::key_axis(*b))
            .fold(Vec2::ZERO, |acc, axis| acc + axis)
    }

    pub fn goal(&self) -> Option<Vec3> {
        self.goal
    }

    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Drop every held key and any active drag.
    pub fn release_all(&mut self) {
        self.pressed_keys.clear();
        self.drag = None;
        self.pointer = None;
    }

    /// W/S run along -Z/+Z, A/D along -X/+X.
    fn key_axis(button: Button) -> Option<Vec2> {
        match button {
            Button::KeyW => Some(Vec2::new(0.0, -1.0)),
            Button::KeyS => Some(Vec2::new(0.0, 1.0)),
            Button::KeyA => Some(Vec2::new(-1.0, 0.0)),
            Button::KeyD => Some(Vec2::new(1.0, 0.0)),
            _ => None,
        }
    }

    fn set_key(&mut self, button: Button, pressed: bool) -> bool {
        if Self::key_axis(button).is_none() {
            return false;
        }

        if pressed {
            if self.pressed_keys.insert(button) && self.goal.take().is_some() {
                log::debug!("Direction key {:?} cancels pointer goal", button);
            }
        } else {
            self.pressed_keys.remove(&button);
        }
        true
    }

    fn pick_destination(
        &mut self,
        position: Vec2,
        camera: &OrbitCamera,
        ground: &ObstacleRegistry,
        viewport: Vec2,
    ) -> bool {
        // No goal may be stored while direction keys are held
        if !self.pressed_keys.is_empty() {
            log::debug!("Pointer destination ignored while direction keys are held");
            return false;
        }

        let hit = camera
            .screen_ray(position, viewport)
            .and_then(|ray| ray.intersect_ground(0.0))
            .filter(|hit| ground.on_ground(*hit));

        match hit {
            Some(hit) => {
                let goal = Vec3::new(hit.x, self.agent_height, hit.z);
                log::debug!("New destination ({:.2}, {:.2})", goal.x, goal.z);
                self.goal = Some(goal);
                true
            }
            None => {
                log::debug!("Pointer at ({:.0}, {:.0}) missed the ground", position.x, position.y);
                false
            }
        }
    }

    fn begin_drag(&mut self, position: Vec2, camera: &OrbitCamera) {
        self.drag = Some(DragSession {
            start_pointer: position,
            start_yaw: camera.yaw(),
            start_tilt: camera.tilt(),
        });
    }

    fn drag_to(&mut self, position: Vec2, camera: &mut OrbitCamera) -> bool {
        let Some(session) = self.drag else {
            return false;
        };

        let delta = position - session.start_pointer;
        camera.set_yaw(session.start_yaw + delta.x * self.rotation_sensitivity);
        camera.set_tilt(session.start_tilt + delta.y * self.tilt_sensitivity);
        true
    }

    fn end_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (InputMapper, OrbitCamera, ObstacleRegistry) {
        let config = OrbitConfig::default();
        let mut camera = OrbitCamera::new(&config, Vec3::new(0.0, 0.5, 0.0));
        camera.set_viewport(800.0, 600.0);
        (InputMapper::new(&config, 0.5), camera, ObstacleRegistry::default().with_ground(25.0))
    }

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    fn key(button: Button, pressed: bool) -> InputEvent {
        InputEvent::Key { button, pressed }
    }

    #[test]
    fn test_no_input_no_intent() {
        let (input, _, _) = setup();
        assert_eq!(input.intent(), Intent::None);
        assert!(input.drag().is_none());
    }

    #[test]
    fn test_keys_sum_and_normalize() {
        let (mut input, mut cam, ground) = setup();
        input.handle(&key(Button::KeyW, true), &mut cam, &ground, VIEWPORT);
        input.handle(&key(Button::KeyD, true), &mut cam, &ground, VIEWPORT);
        assert_eq!(input.direction(), Vec2::new(1.0, -1.0));
        match input.intent() {
            Intent::Direction(dir) => assert!((dir.length() - 1.0).abs() < 1e-6),
            other => panic!("expected direction, got {:?}", other),
        }
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let (mut input, mut cam, ground) = setup();
        input.handle(&key(Button::KeyA, true), &mut cam, &ground, VIEWPORT);
        input.handle(&key(Button::KeyD, true), &mut cam, &ground, VIEWPORT);
        assert_eq!(input.intent(), Intent::None);
    }

    #[test]
    fn test_key_state_is_level_triggered() {
        let (mut input, mut cam, ground) = setup();
        input.handle(&key(Button::KeyS, true), &mut cam, &ground, VIEWPORT);
        // Auto-repeat delivers more presses; the key is still just held
        input.handle(&key(Button::KeyS, true), &mut cam, &ground, VIEWPORT);
        assert_eq!(input.direction(), Vec2::new(0.0, 1.0));
        input.handle(&key(Button::KeyS, false), &mut cam, &ground, VIEWPORT);
        assert_eq!(input.direction(), Vec2::ZERO);
        assert_eq!(input.intent(), Intent::None);
    }

    #[test]
    fn test_non_movement_key_ignored() {
        let (mut input, mut cam, ground) = setup();
        assert!(!input.handle(&key(Button::Escape, true), &mut cam, &ground, VIEWPORT));
        assert_eq!(input.direction(), Vec2::ZERO);
        assert_eq!(input.intent(), Intent::None);
    }

    #[test]
    fn test_left_click_center_picks_agent_spot() {
        let (mut input, mut cam, ground) = setup();
        let down = InputEvent::PointerDown {
            button: Button::MouseLeft,
            position: Vec2::new(400.0, 300.0),
        };
        assert!(input.handle(&down, &mut cam, &ground, VIEWPORT));
        let goal = input.goal().unwrap();
        assert_eq!(goal.y, 0.5);
        // Center ray aims at (0, 0.5, 0); the y = 0 plane sits slightly beyond it
        assert!(goal.x.abs() < 1.0 && goal.z.abs() < 1.0, "goal {:?}", goal);
        assert_eq!(input.intent(), Intent::Goal(goal));
    }

    #[test]
    fn test_click_above_horizon_misses() {
        let (mut input, mut cam, ground) = setup();
        let down = InputEvent::PointerDown {
            button: Button::MouseLeft,
            position: Vec2::new(400.0, 0.0),
        };
        // Top edge of a 50 degree frustum at 45 degree tilt still looks down,
        // but lands far outside the 25-unit ground
        assert!(!input.handle(&down, &mut cam, &ground, VIEWPORT));
        assert!(input.goal().is_none());
    }

    #[test]
    fn test_direction_key_cancels_goal() {
        let (mut input, mut cam, ground) = setup();
        let down = InputEvent::PointerDown {
            button: Button::MouseLeft,
            position: Vec2::new(400.0, 300.0),
        };
        input.handle(&down, &mut cam, &ground, VIEWPORT);
        assert!(input.goal().is_some());
        input.handle(&key(Button::KeyW, true), &mut cam, &ground, VIEWPORT);
        assert!(input.goal().is_none());
        input.handle(&key(Button::KeyW, false), &mut cam, &ground, VIEWPORT);
        assert_eq!(input.intent(), Intent::None);
    }

    #[test]
    fn test_click_while_key_held_is_ignored() {
        let (mut input, mut cam, ground) = setup();
        let down = InputEvent::PointerDown {
            button: Button::MouseLeft,
            position: Vec2::new(400.0, 300.0),
        };
        input.handle(&key(Button::KeyW, true), &mut cam, &ground, VIEWPORT);
        assert!(!input.handle(&down, &mut cam, &ground, VIEWPORT));
        assert!(input.goal().is_none());
        input.handle(&key(Button::KeyW, false), &mut cam, &ground, VIEWPORT);
        assert_eq!(input.intent(), Intent::None, "no stale goal after release");
    }

    #[test]
    fn test_session_ending_events() {
        assert!(InputEvent::PointerUp { button: Button::MouseRight }.ends_session());
        assert!(InputEvent::PointerLeave.ends_session());
        assert!(key(Button::KeyW, false).ends_session());
        assert!(!key(Button::KeyW, true).ends_session());
        assert!(!InputEvent::Wheel { delta_y: 1.0 }.ends_session());
        assert!(!InputEvent::PointerMove { position: Vec2::ZERO }.ends_session());
        let down = InputEvent::PointerDown { button: Button::MouseLeft, position: Vec2::ZERO };
        assert!(!down.ends_session());
    }

    #[test]
    fn test_drag_measures_from_start() {
        let (mut input, mut cam, ground) = setup();
        let start_yaw = cam.yaw();
        let down = InputEvent::PointerDown {
            button: Button::MouseRight,
            position: Vec2::new(100.0, 100.0),
        };
        input.handle(&down, &mut cam, &ground, VIEWPORT);
        for x in [150.0, 200.0] {
            let event = InputEvent::PointerMove { position: Vec2::new(x, 100.0) };
            input.handle(&event, &mut cam, &ground, VIEWPORT);
        }
        assert!((cam.yaw() - (start_yaw + 0.8)).abs() < 1e-5);
    }

    #[test]
    fn test_move_without_drag_changes_nothing() {
        let (mut input, mut cam, ground) = setup();
        let yaw = cam.yaw();
        let event = InputEvent::PointerMove { position: Vec2::new(500.0, 500.0) };
        assert!(!input.handle(&event, &mut cam, &ground, VIEWPORT));
        assert_eq!(cam.yaw(), yaw);
        assert_eq!(input.pointer(), Some(Vec2::new(500.0, 500.0)));
    }

    #[test]
    fn test_leave_ends_drag() {
        let (mut input, mut cam, ground) = setup();
        input.handle(
            &InputEvent::PointerDown { button: Button::MouseRight, position: Vec2::ZERO },
            &mut cam,
            &ground,
            VIEWPORT,
        );
        assert!(input.drag().is_some());
        assert!(input.handle(&InputEvent::PointerLeave, &mut cam, &ground, VIEWPORT));
        assert!(input.drag().is_none());
        assert!(input.pointer().is_none());
    }

    #[test]
    fn test_wheel_zooms_with_clamp() {
        let (mut input, mut cam, ground) = setup();
        input.handle(&InputEvent::Wheel { delta_y: 100.0 }, &mut cam, &ground, VIEWPORT);
        assert!((cam.radius() - 11.0).abs() < 1e-5);
        input.handle(&InputEvent::Wheel { delta_y: 10_000.0 }, &mut cam, &ground, VIEWPORT);
        assert_eq!(cam.radius(), 18.0);
    }

    #[test]
    fn test_release_all() {
        let (mut input, mut cam, ground) = setup();
        input.handle(&key(Button::KeyA, true), &mut cam, &ground, VIEWPORT);
        input.handle(
            &InputEvent::PointerDown { button: Button::MouseRight, position: Vec2::ZERO },
            &mut cam,
            &ground,
            VIEWPORT,
        );
        input.release_all();
        assert_eq!(input.direction(), Vec2::ZERO);
        assert!(input.drag().is_none());
        assert_eq!(input.intent(), Intent::None);
    }
}
