use glam::{Mat4, Vec3};

use crate::camera::OrbitCamera;

/// Symmetric perspective parameters. Fixed per session apart from the
/// aspect ratio, which follows the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    pub fn new(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        debug_assert!(near > 0.0 && far > near);
        Self {
            fov_y_degrees,
            aspect,
            near,
            far,
        }
    }

    /// Track a window resize. A zero-height frame keeps the old aspect.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// GL-convention perspective matrix: depth maps to [-1, 1] and
    /// `[3][2] = -1` feeds -z into the w divide.
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_degrees.to_radians(), self.aspect, self.near, self.far)
    }
}

/// Model transform: rotation about +Y by the spin angle.
pub fn model_matrix(rotation_angle: f32) -> Mat4 {
    Mat4::from_rotation_y(rotation_angle)
}

/// View transform for an orbit camera `distance` units from the origin.
/// The orbit rotation is inverted into view space, yaw wrapping pitch;
/// this exact composition order is load-bearing for the drag feel and is
/// intentionally not a look-at.
pub fn view_matrix(yaw: f32, pitch: f32, distance: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.0, -distance))
        * Mat4::from_rotation_y(-yaw)
        * Mat4::from_rotation_x(-pitch)
}

/// Fold the per-frame matrices into `Projection * View * Model`, the single
/// uniform each draw call consumes. Pure in the camera and projection state.
pub fn mvp_matrix(camera: &OrbitCamera, projection: &Projection) -> Mat4 {
    projection.matrix()
        * view_matrix(camera.yaw, camera.pitch, camera.distance())
        * model_matrix(camera.rotation_angle)
}
