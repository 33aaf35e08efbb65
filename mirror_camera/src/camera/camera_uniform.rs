/// Camera uniform block for GPU upload.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};

/// Per-camera uniform data, laid out for a std140 uniform buffer.
///
/// For the mirror camera, `projection` is the oblique matrix computed by
/// the solver this frame.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    pub view: Mat4,
    pub projection: Mat4,
    pub view_projection: Mat4,
    /// World position, w = 1
    pub position: Vec4,
    /// x = near, y = far, zw unused
    pub near_far: Vec4,
}

impl CameraUniform {
    pub fn new(view: Mat4, projection: Mat4, position: Vec3, near: f32, far: f32) -> Self {
        Self {
            view,
            projection,
            view_projection: projection * view,
            position: position.extend(1.0),
            near_far: Vec4::new(near, far, 0.0, 0.0),
        }
    }

    /// Raw bytes, ready for a buffer write
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
