/// MirrorView - what a render pass needs from the mirror camera.
///
/// Snapshot of the mirror camera taken when the pass begins. Ephemeral:
/// lives for one pass. No Arc, no Mutex, so a draw callback that panics
/// cannot poison the camera handle.

use glam::{Mat4, Vec3};
use crate::camera::{CameraUniform, Frustum, HostCamera, Lens};

#[derive(Debug, Clone, Copy)]
pub struct MirrorView {
    view_matrix: Mat4,
    projection_matrix: Mat4,
    position: Vec3,
    lens: Lens,
    inverts_culling: bool,
}

impl MirrorView {
    pub(crate) fn capture(camera: &dyn HostCamera, inverts_culling: bool) -> Self {
        Self {
            view_matrix: camera.view_matrix(),
            projection_matrix: camera.projection_matrix(),
            position: camera.position(),
            lens: camera.lens(),
            inverts_culling,
        }
    }

    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Oblique projection computed by the last frame update
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn lens(&self) -> &Lens {
        &self.lens
    }

    /// Whether front-face winding is inverted during this pass
    pub fn inverts_culling(&self) -> bool {
        self.inverts_culling
    }

    /// Culling frustum; its near plane lies on the mirror.
    pub fn frustum(&self) -> Frustum {
        Frustum::from_view_projection(&self.view_projection_matrix())
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform::new(
            self.view_matrix,
            self.projection_matrix,
            self.position,
            self.lens.near_clip,
            self.lens.far_clip,
        )
    }
}
