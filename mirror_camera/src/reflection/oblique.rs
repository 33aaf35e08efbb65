/// Oblique near-plane clipping.
///
/// Rewrites the third row of a projection matrix so that the near clipping
/// plane coincides with an arbitrary camera-space plane (the mirror), after
/// E. Lengyel, "Modifying the Projection Matrix to Perform Oblique Near-Plane
/// Clipping". Adapted to the [0, 1] depth range used by `perspective_rh` and
/// `orthographic_rh`: the near plane is `row2 >= 0`, the far plane is
/// `row3 - row2 >= 0`.

use glam::{Mat4, Vec4};

/// Below this magnitude `dot(c, q)` is treated as zero and the projection
/// is returned unchanged.
const MIN_PLANE_DOT: f32 = 1e-8;

/// Express a world-space plane in the space of `view`.
///
/// Planes transform with the inverse transpose: `transpose(inverse(view)) * plane`.
pub fn plane_to_camera_space(plane_world: Vec4, view: &Mat4) -> Vec4 {
    view.inverse().transpose() * plane_world
}

/// Projection whose near plane is `clip_plane` (camera space).
///
/// `clip_plane` keeps points with `dot(clip_plane, (p, 1)) >= 0`; the camera
/// must lie on the other side (`clip_plane.w < 0`). The far plane is tilted
/// to pass through the original far corner opposite the clip plane, so the
/// depth range of the original frustum is preserved as well as possible.
///
/// A plane seen exactly edge-on from that corner leaves the projection
/// unchanged.
pub fn oblique_projection(projection: &Mat4, clip_plane: Vec4) -> Mat4 {
    // Far corner of the frustum opposite the clip plane, in camera space
    let corner = Vec4::new(clip_plane.x.signum(), clip_plane.y.signum(), 1.0, 1.0);
    let q = projection.inverse() * corner;

    let denominator = clip_plane.dot(q);
    if denominator.abs() < MIN_PLANE_DOT || !denominator.is_finite() {
        return *projection;
    }

    let scale = projection.row(3).dot(q) / denominator;
    let row2 = clip_plane * scale;

    let mut oblique = *projection;
    oblique.x_axis.z = row2.x;
    oblique.y_axis.z = row2.y;
    oblique.z_axis.z = row2.z;
    oblique.w_axis.z = row2.w;
    oblique
}

#[cfg(test)]
#[path = "oblique_tests.rs"]
mod tests;
