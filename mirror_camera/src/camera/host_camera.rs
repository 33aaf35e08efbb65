/// HostCamera - the camera abstraction the solver drives.
///
/// The host engine implements this for its own camera type (or uses
/// `Camera`). The solver reads the player camera through it and writes the
/// mirror camera through it; it never needs anything else from the host.

use std::sync::{Arc, Mutex};
use glam::{Mat4, Quat, Vec3, Vec4};
use crate::reflection::oblique_projection;
use super::lens::Lens;

/// Shared handle to a host camera
pub type CameraHandle = Arc<Mutex<dyn HostCamera>>;

/// Camera accessors and mutators required by the mirror solver.
///
/// Conventions: right-handed, forward is local -Z, projection depth range
/// is [0, 1].
pub trait HostCamera: Send {
    /// World-space position
    fn position(&self) -> Vec3;

    fn set_position(&mut self, position: Vec3);

    /// World-space orientation
    fn rotation(&self) -> Quat;

    fn set_rotation(&mut self, rotation: Quat);

    /// Lens parameters (fov, near/far, orthographic mode and size)
    fn lens(&self) -> Lens;

    /// Replace the lens. Affects the default projection only; an explicit
    /// projection set with `set_projection_matrix` stays in effect.
    fn set_lens(&mut self, lens: Lens);

    /// World-to-camera matrix for the current pose
    fn view_matrix(&self) -> Mat4;

    /// Projection in effect (explicit if set, default otherwise)
    fn projection_matrix(&self) -> Mat4;

    /// Use an explicit projection until `reset_projection_matrix` is called
    fn set_projection_matrix(&mut self, projection: Mat4);

    /// Go back to the default projection derived from the lens
    fn reset_projection_matrix(&mut self);

    /// World-space forward axis
    fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    /// World-space up axis
    fn up(&self) -> Vec3 {
        self.rotation() * Vec3::Y
    }

    /// Set position and rotation together
    fn set_pose(&mut self, position: Vec3, rotation: Quat) {
        self.set_position(position);
        self.set_rotation(rotation);
    }

    /// Current projection with its near plane replaced by `clip_plane`
    /// (camera space). Does not modify the camera.
    fn calculate_oblique_matrix(&self, clip_plane: Vec4) -> Mat4 {
        oblique_projection(&self.projection_matrix(), clip_plane)
    }
}
