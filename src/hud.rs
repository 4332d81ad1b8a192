//! On-screen readouts: agent coordinates and frame rate.

use glam::Vec3;

use crate::traits::MoveListener;

const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Coordinates panel fed by agent move notifications.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HudReadout {
    x: f32,
    z: f32,
    updates: u64,
}

impl HudReadout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn z(&self) -> f32 {
        self.z
    }

    /// Number of move notifications received, including the spawn announcement.
    pub fn updates(&self) -> u64 {
        self.updates
    }

    pub fn text(&self) -> String {
        format!("X: {:.2} | Z: {:.2}", self.x, self.z)
    }
}

impl MoveListener for HudReadout {
    fn on_move(&mut self, position: Vec3) {
        self.x = position.x;
        self.z = position.z;
        self.updates += 1;
    }
}

/// Frames per second averaged over one-second windows.
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    frame_count: u32,
    elapsed: f32,
    fps: f32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a frame. Returns the new reading when a window closes.
    pub fn tick(&mut self, delta: f32) -> Option<f32> {
        self.frame_count += 1;
        self.elapsed += delta.max(0.0);

        if self.elapsed < FPS_UPDATE_INTERVAL {
            return None;
        }

        self.fps = self.frame_count as f32 / self.elapsed;
        log::trace!("FPS: {:.1}", self.fps);
        self.frame_count = 0;
        self.elapsed = 0.0;
        Some(self.fps)
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}
