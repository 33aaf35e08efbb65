/// Camera - pose, lens and projection state.
///
/// The camera stores its pose and lens and derives the view matrix and the
/// default projection from them. An explicit projection may be set on top
/// (the mirror solver sets an oblique one each frame); it stays in effect
/// until `reset_projection_matrix()`.
///
/// The engine does NOT store or manage cameras. They are owned and driven
/// by the caller, usually behind a `CameraHandle`.

use glam::{Mat4, Quat, Vec3};
use super::camera_uniform::CameraUniform;
use super::frustum::Frustum;
use super::host_camera::HostCamera;
use super::lens::Lens;
use crate::scene::Pose;

/// Concrete camera implementing `HostCamera`.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    rotation: Quat,
    lens: Lens,
    aspect_ratio: f32,
    custom_projection: Option<Mat4>,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Pose::default(), Lens::default(), 16.0 / 9.0)
    }
}

impl Camera {
    /// Create a new camera with the given pose, lens and aspect ratio.
    ///
    /// The projection starts as the default one derived from the lens.
    pub fn new(pose: Pose, lens: Lens, aspect_ratio: f32) -> Self {
        Self {
            position: pose.position,
            rotation: pose.rotation,
            lens,
            aspect_ratio,
            custom_projection: None,
        }
    }

    // ===== GETTERS =====

    /// Current pose
    pub fn pose(&self) -> Pose {
        Pose::new(self.position, self.rotation)
    }

    /// Viewport width / height
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Local-to-world matrix
    pub fn world_matrix(&self) -> Mat4 {
        self.pose().matrix()
    }

    /// Projection derived from the lens, ignoring any explicit projection.
    pub fn default_projection_matrix(&self) -> Mat4 {
        self.lens.projection_matrix(self.aspect_ratio)
    }

    /// Whether an explicit projection is in effect
    pub fn has_custom_projection(&self) -> bool {
        self.custom_projection.is_some()
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space frustum of the projection in effect.
    pub fn frustum(&self) -> Frustum {
        Frustum::from_view_projection(&self.view_projection_matrix())
    }

    /// GPU-ready block of the current matrices.
    pub fn uniform(&self) -> CameraUniform {
        CameraUniform::new(
            self.view_matrix(),
            self.projection_matrix(),
            self.position,
            self.lens.near_clip,
            self.lens.far_clip,
        )
    }

    // ===== SETTERS =====

    /// Set the viewport aspect ratio (width / height).
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }
}

impl HostCamera for Camera {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }

    fn lens(&self) -> Lens {
        self.lens
    }

    fn set_lens(&mut self, lens: Lens) {
        self.lens = lens;
    }

    /// Inverse of the world matrix.
    fn view_matrix(&self) -> Mat4 {
        self.world_matrix().inverse()
    }

    fn projection_matrix(&self) -> Mat4 {
        self.custom_projection
            .unwrap_or_else(|| self.default_projection_matrix())
    }

    fn set_projection_matrix(&mut self, projection: Mat4) {
        self.custom_projection = Some(projection);
    }

    fn reset_projection_matrix(&mut self) {
        self.custom_projection = None;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
