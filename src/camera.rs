use glam::{Mat4, Vec2, Vec3};

use crate::config::OrbitConfig;
use crate::math::Ray;
use crate::movement::TrackedPosition;
use crate::traits::CameraController;

pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 1000.0;

/// Orbit camera following a target on the ground.
///
/// `yaw`, `tilt` and `radius` are the operator-controlled orbit parameters and
/// change instantly. `position` and `look_target` chase the orbit pose with
/// frame-rate independent exponential smoothing.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    yaw: f32,
    tilt: f32,
    radius: f32,
    position: Vec3,
    look_target: Vec3,
    tilt_range: (f32, f32),
    radius_range: (f32, f32),
    smoothing: f32,
    fov_y: f32,
    aspect: f32,
}

impl OrbitCamera {
    pub fn new(config: &OrbitConfig, look_target: Vec3) -> Self {
        let mut camera = Self {
            yaw: config.initial_yaw,
            tilt: config.initial_tilt,
            radius: config.initial_radius,
            position: Vec3::from_array(config.initial_position),
            look_target,
            tilt_range: ordered(config.tilt_min, config.tilt_max),
            radius_range: ordered(config.radius_min, config.radius_max),
            smoothing: config.smoothing,
            fov_y: config.fov_y_degrees.to_radians(),
            aspect: 1.0,
        };
        camera.set_tilt(config.initial_tilt);
        camera.set_radius(config.initial_radius);
        camera
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn tilt(&self) -> f32 {
        self.tilt
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn look_target(&self) -> Vec3 {
        self.look_target
    }

    pub fn tilt_range(&self) -> (f32, f32) {
        self.tilt_range
    }

    pub fn radius_range(&self) -> (f32, f32) {
        self.radius_range
    }

    /// Yaw is unbounded; only its sine and cosine are ever used.
    pub fn set_yaw(&mut self, yaw: f32) {
        if yaw.is_finite() {
            self.yaw = yaw;
        }
    }

    pub fn set_tilt(&mut self, tilt: f32) {
        if tilt.is_finite() {
            self.tilt = tilt.max(self.tilt_range.0).min(self.tilt_range.1);
        }
    }

    pub fn set_radius(&mut self, radius: f32) {
        if radius.is_finite() {
            self.radius = radius.max(self.radius_range.0).min(self.radius_range.1);
        }
    }

    pub fn zoom_by(&mut self, delta: f32) {
        self.set_radius(self.radius + delta);
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Orbit offset from the target for the current yaw/tilt/radius.
    pub fn orbit_offset(&self) -> Vec3 {
        let planar = self.radius * self.tilt.cos();
        let height = self.radius * self.tilt.sin();
        Vec3::new(planar * self.yaw.cos(), height, planar * self.yaw.sin())
    }

    pub fn desired_position(&self, target: Vec3) -> Vec3 {
        target + self.orbit_offset()
    }

    /// Fraction of the remaining gap closed in `delta_time` seconds.
    pub fn smoothing_factor(&self, delta_time: f32) -> f32 {
        1.0 - (-self.smoothing * delta_time.max(0.0)).exp()
    }

    /// Move position and look-at target toward the orbit pose around `target`.
    pub fn follow(&mut self, delta_time: f32, target: Vec3) {
        let t = self.smoothing_factor(delta_time);
        let desired = self.desired_position(target);
        self.position = self.position.lerp(desired, t);
        self.look_target = self.look_target.lerp(target, t);
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, NEAR_PLANE, FAR_PLANE)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Ray from the eye through a window position given in pixels, origin top-left.
    pub fn screen_ray(&self, cursor: Vec2, viewport: Vec2) -> Option<Ray> {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return None;
        }

        let ndc_x = cursor.x / viewport.x * 2.0 - 1.0;
        let ndc_y = 1.0 - cursor.y / viewport.y * 2.0;

        let inverse = self.view_projection().inverse();
        let near = inverse.project_point3(Vec3::new(ndc_x, ndc_y, 0.0));
        let far = inverse.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));
        if !near.is_finite() || !far.is_finite() {
            return None;
        }

        Ray::new(near, far - near)
    }

    fn aim(&self) -> (Vec3, Vec3) {
        let to_target = self.look_target - self.position;
        let forward = to_target
            .try_normalize()
            .unwrap_or_else(|| -self.orbit_offset().normalize_or(Vec3::Y));
        let up = if forward.cross(Vec3::Y).length_squared() < 1e-8 {
            Vec3::NEG_Z
        } else {
            Vec3::Y
        };
        (forward, up)
    }
}

impl CameraController for OrbitCamera {
    fn update(&mut self, delta_time: f32, target: &TrackedPosition) {
        if let Some(target) = target.get() {
            self.follow(delta_time, target);
        }
    }

    fn view_matrix(&self) -> Mat4 {
        let (forward, up) = self.aim();
        Mat4::look_to_rh(self.position, forward, up)
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn forward(&self) -> Vec3 {
        self.aim().0
    }
}

/// `(low, high)` regardless of argument order.
fn ordered(a: f32, b: f32) -> (f32, f32) {
    (a.min(b), a.max(b))
}
