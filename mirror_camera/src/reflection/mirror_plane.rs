/// MirrorPlane - the reflective surface as an infinite plane.
///
/// Defined by a reference point and a unit normal. The normal must point
/// into the room the mirror camera renders (away from the mirror backing).
/// Orientation is not validated: a plane facing the wrong way produces a
/// camera that looks the wrong way.

use glam::{Vec3, Vec4};
use crate::error::{Error, Result};
use crate::scene::WorldTransform;
use super::reflect::{reflect_point, reflect_vector};

/// Normals shorter than this are rejected.
pub const MIN_NORMAL_LENGTH: f32 = 1e-6;

/// Infinite mirror plane with a unit outward normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MirrorPlane {
    point: Vec3,
    normal: Vec3,
}

impl MirrorPlane {
    /// Create a plane from a point and a normal of any non-zero length.
    ///
    /// # Errors
    ///
    /// `Error::DegeneratePlane` when the normal is not finite or shorter
    /// than `MIN_NORMAL_LENGTH`, or when the point is not finite.
    pub fn new(point: Vec3, normal: Vec3) -> Result<Self> {
        if !point.is_finite() {
            return Err(Error::DegeneratePlane(format!("point {} is not finite", point)));
        }
        if !normal.is_finite() {
            return Err(Error::DegeneratePlane(format!("normal {} is not finite", normal)));
        }
        let length = normal.length();
        if length < MIN_NORMAL_LENGTH {
            return Err(Error::DegeneratePlane(format!("normal length {} is too small", length)));
        }

        Ok(Self {
            point,
            normal: normal / length,
        })
    }

    /// Plane through the transform's position, facing its forward axis.
    pub fn from_transform(transform: &dyn WorldTransform) -> Result<Self> {
        Self::new(transform.world_position(), transform.world_forward())
    }

    /// Reference point on the plane
    pub fn point(&self) -> Vec3 {
        self.point
    }

    /// Unit outward normal
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Signed distance from the plane; positive on the room side.
    pub fn signed_distance(&self, p: Vec3) -> f32 {
        self.normal.dot(p - self.point)
    }

    pub fn reflect_point(&self, p: Vec3) -> Vec3 {
        reflect_point(p, self.point, self.normal)
    }

    pub fn reflect_vector(&self, v: Vec3) -> Vec3 {
        reflect_vector(v, self.normal)
    }

    /// World-space clip plane `(n, -dot(n, p0) - offset)`.
    ///
    /// A point `p` is kept when `dot(plane, (p, 1)) >= 0`. `offset` shifts
    /// the plane along the normal to keep the surface itself out of the
    /// near plane and avoid z-fighting with the mirror quad.
    pub fn clip_plane(&self, offset: f32) -> Vec4 {
        self.normal.extend(-self.normal.dot(self.point) - offset)
    }
}

#[cfg(test)]
#[path = "mirror_plane_tests.rs"]
mod tests;
