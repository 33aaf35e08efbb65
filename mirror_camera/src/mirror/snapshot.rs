/// Restore point of the mirror camera.

use glam::Mat4;
use crate::camera::HostCamera;
use crate::scene::Pose;

/// Pose and projection captured when the solver activates.
///
/// Written once per activation and applied once on deactivation; never
/// modified in between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestoreSnapshot {
    pose: Pose,
    projection: Mat4,
}

impl RestoreSnapshot {
    /// Capture the camera's current pose and projection in effect.
    pub fn capture(camera: &dyn HostCamera) -> Self {
        Self {
            pose: Pose::new(camera.position(), camera.rotation()),
            projection: camera.projection_matrix(),
        }
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// Write the captured state back. The projection is set explicitly, so
    /// it is restored bit-for-bit even if the lens changed meanwhile.
    pub fn apply_to(&self, camera: &mut dyn HostCamera) {
        camera.set_pose(self.pose.position, self.pose.rotation);
        camera.set_projection_matrix(self.projection);
    }
}
