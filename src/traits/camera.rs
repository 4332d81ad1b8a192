use glam::{Mat4, Vec3};

use crate::movement::TrackedPosition;

/// Camera movement and control abstraction
pub trait CameraController {
    /// Advance the camera toward the tracked target. Skips the frame while
    /// the target has not been published yet.
    fn update(&mut self, delta_time: f32, target: &TrackedPosition);

    /// Get the view matrix for rendering
    fn view_matrix(&self) -> Mat4;

    /// Get the camera position in world space
    fn position(&self) -> Vec3;

    /// Get the camera forward direction
    fn forward(&self) -> Vec3;
}
