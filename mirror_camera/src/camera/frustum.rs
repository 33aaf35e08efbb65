/// Frustum - six clipping planes extracted from a view-projection matrix.
///
/// Each plane is represented as a Vec4 (A, B, C, D) where:
/// - (A, B, C) is the inward-pointing unit normal
/// - D is the signed distance
/// - A point P is inside the frustum if dot(plane, P_homogeneous) >= 0 for all planes
///
/// Assumes the [0, 1] depth range produced by `perspective_rh` and
/// `orthographic_rh`. For a mirror camera with an oblique projection, the
/// near plane is the mirror clip plane in world space, so host culling
/// automatically rejects everything behind the mirror.

use glam::{Mat4, Vec3, Vec4};

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Six frustum planes for culling.
///
/// Each plane is (A, B, C, D) where Ax + By + Cz + D = 0.
/// Normal (A, B, C) points inward (toward the visible volume).
/// Works with perspective, orthographic and oblique projections.
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [Vec4; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Gribb & Hartmann, [0, 1] depth variant: the near plane is row 2
    /// alone instead of row 3 + row 2.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let r0 = vp.row(0);
        let r1 = vp.row(1);
        let r2 = vp.row(2);
        let r3 = vp.row(3);

        let mut planes = [
            r3 + r0, // Left
            r3 - r0, // Right
            r3 + r1, // Bottom
            r3 - r1, // Top
            r2,      // Near
            r3 - r2, // Far
        ];

        // Normalize each plane so that (A, B, C) is a unit vector
        for plane in &mut planes {
            let normal_len = plane.truncate().length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        Self { planes }
    }

    /// Near plane (the mirror plane for an oblique projection)
    pub fn near_plane(&self) -> Vec4 {
        self.planes[PLANE_NEAR]
    }

    /// Signed distance from each plane is non-negative.
    pub fn contains_point(&self, point: Vec3) -> bool {
        let p = point.extend(1.0);
        self.planes.iter().all(|plane| plane.dot(p) >= 0.0)
    }

    /// Conservative sphere test: false only when the sphere is fully
    /// outside one plane.
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        let c = center.extend(1.0);
        self.planes.iter().all(|plane| plane.dot(c) >= -radius)
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
