use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

const BETA_LIMIT: f32 = 0.01;
const MIN_RADIUS: f32 = 0.1;

/// Camera orbiting a target point.
///
/// `alpha` is the longitudinal angle around the Y axis, `beta` the
/// latitudinal angle measured from +Y. `beta` stays inside
/// `[0.01, PI - 0.01]` so the view never lines up with the up vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcRotateCamera {
    pub alpha: f32,
    pub beta: f32,
    pub radius: f32,
    pub target: Vec3,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub sensitivity: f32,
    pub zoom_speed: f32,
}

impl Default for ArcRotateCamera {
    fn default() -> Self {
        Self::new(0.0, 0.0, 10.0, Vec3::ZERO)
    }
}

impl ArcRotateCamera {
    pub fn new(alpha: f32, beta: f32, radius: f32, target: Vec3) -> Self {
        Self {
            alpha,
            beta: clamp_beta(beta),
            radius: radius.max(MIN_RADIUS),
            target,
            fov: 0.8,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
            sensitivity: 0.005,
            zoom_speed: 0.5,
        }
    }

    /// Camera position in world space.
    pub fn position(&self) -> Vec3 {
        let (sin_a, cos_a) = self.alpha.sin_cos();
        let (sin_b, cos_b) = self.beta.sin_cos();
        self.target + self.radius * Vec3::new(cos_a * sin_b, cos_b, sin_a * sin_b)
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Orbit by a pointer delta in pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.alpha += dx * self.sensitivity;
        self.beta = clamp_beta(self.beta - dy * self.sensitivity);
    }

    /// Move toward (positive) or away from (negative) the target.
    pub fn zoom(&mut self, delta: f32) {
        self.radius = (self.radius - delta * self.zoom_speed).max(MIN_RADIUS);
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

fn clamp_beta(beta: f32) -> f32 {
    beta.clamp(BETA_LIMIT, PI - BETA_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_camera_looks_down_from_above() {
        let cam = ArcRotateCamera::default();
        assert_eq!(cam.beta, BETA_LIMIT);
        let pos = cam.position();
        assert!(pos.y > 9.9);
        assert_relative_eq!(pos.distance(cam.target), 10.0, epsilon = 1e-4);
        let vp = cam.view_projection();
        assert!(!vp.col(0).x.is_nan());
    }

    #[test]
    fn side_view_position() {
        let cam = ArcRotateCamera::new(0.0, PI / 2.0, 4.0, Vec3::new(1.0, 0.0, 0.0));
        let pos = cam.position();
        assert_relative_eq!(pos.x, 5.0, epsilon = 1e-5);
        assert_relative_eq!(pos.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(pos.z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn rotate_clamps_beta() {
        let mut cam = ArcRotateCamera::default();
        cam.rotate(0.0, 1.0e6);
        assert_eq!(cam.beta, BETA_LIMIT);
        cam.rotate(0.0, -1.0e6);
        assert_eq!(cam.beta, PI - BETA_LIMIT);
    }

    #[test]
    fn rotate_changes_alpha() {
        let mut cam = ArcRotateCamera::default();
        cam.rotate(100.0, 0.0);
        assert_relative_eq!(cam.alpha, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn zoom_keeps_positive_radius() {
        let mut cam = ArcRotateCamera::default();
        cam.zoom(2.0);
        assert_relative_eq!(cam.radius, 9.0);
        cam.zoom(1000.0);
        assert_eq!(cam.radius, MIN_RADIUS);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut cam = ArcRotateCamera::default();
        cam.resize(800, 400);
        assert_eq!(cam.aspect, 2.0);
        cam.resize(800, 0);
        assert_eq!(cam.aspect, 800.0);
    }
}
