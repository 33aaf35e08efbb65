//! Poses and transforms
//!
//! Right-handed convention: local forward is -Z, local up is +Y and local
//! right is +X, matching `Mat4::look_at_rh` and `Mat4::perspective_rh`.

use glam::{Mat3, Mat4, Quat, Vec3};

/// World up axis. Substituted for the reflected up vector when roll
/// following is disabled.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Below this squared length a direction is treated as zero.
const DIRECTION_EPSILON_SQ: f32 = 1e-12;

/// World-space access to something with a position and an orientation.
///
/// This is the transform abstraction the host supplies for the mirror plane:
/// only the position and the forward axis are read.
pub trait WorldTransform: Send {
    /// World-space position
    fn world_position(&self) -> Vec3;

    /// World-space forward axis (not necessarily unit length)
    fn world_forward(&self) -> Vec3;
}

/// Position and orientation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Pose {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Pose at `position` looking along `forward` with the given up hint
    pub fn looking(position: Vec3, forward: Vec3, up: Vec3) -> Self {
        Self {
            position,
            rotation: look_rotation(forward, up),
        }
    }

    /// Get forward direction (local -Z in world space)
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Get up direction (local +Y in world space)
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Get right direction (local +X in world space)
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Local-to-world matrix
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }
}

/// Transform for positioning objects in 3D space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }

    /// Transform at `position` whose forward axis is `forward`.
    ///
    /// Handy for mirror planes: the forward axis is the outward normal.
    pub fn facing(position: Vec3, forward: Vec3) -> Self {
        Self::from_position_rotation(position, look_rotation(forward, WORLD_UP))
    }

    /// Get the model matrix for this transform
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Position and rotation, scale dropped
    pub fn pose(&self) -> Pose {
        Pose::new(self.position, self.rotation)
    }

    /// Rotate around an axis
    pub fn rotate_axis(&mut self, axis: Vec3, angle: f32) {
        let delta = Quat::from_axis_angle(axis, angle);
        self.rotation = (delta * self.rotation).normalize();
    }
}

impl WorldTransform for Transform {
    fn world_position(&self) -> Vec3 {
        self.position
    }

    fn world_forward(&self) -> Vec3 {
        self.forward()
    }
}

/// Orientation whose forward axis (-Z) is `forward` and whose up axis (+Y)
/// is as close to `up` as possible.
///
/// The basis is re-orthonormalized, so neither input needs to be unit
/// length or exactly perpendicular. When `up` is parallel to `forward` an
/// arbitrary perpendicular up is used. A zero `forward` yields identity.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    if forward.length_squared() < DIRECTION_EPSILON_SQ {
        return Quat::IDENTITY;
    }
    let forward = forward.normalize();

    let mut right = forward.cross(up);
    if right.length_squared() < DIRECTION_EPSILON_SQ {
        right = forward.cross(forward.any_orthonormal_vector());
    }
    let right = right.normalize();
    let up = right.cross(forward);

    Quat::from_mat3(&Mat3::from_cols(right, up, -forward)).normalize()
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
