use glam::{Mat4, Vec3, Vec4};
use super::*;

const EPS: f32 = 1e-4;

fn perspective() -> Mat4 {
    Mat4::perspective_rh(60f32.to_radians(), 16.0 / 9.0, 0.3, 1000.0)
}

fn ndc_depth(projection: &Mat4, p: Vec3) -> f32 {
    let clip = *projection * p.extend(1.0);
    clip.z / clip.w
}

// ============================================================================
// plane_to_camera_space
// ============================================================================

#[test]
fn test_plane_to_camera_space_translation() {
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
    let plane = plane_to_camera_space(Vec4::new(0.0, 0.0, 1.0, 0.0), &view);
    assert!(plane.abs_diff_eq(Vec4::new(0.0, 0.0, 1.0, 5.0), EPS));
}

#[test]
fn test_plane_to_camera_space_preserves_point_tests() {
    let view = Mat4::look_at_rh(Vec3::new(3.0, 2.0, -4.0), Vec3::new(0.5, 0.0, 1.0), Vec3::Y);
    let plane_world = Vec4::new(0.6, 0.0, 0.8, -1.5);
    let plane_cam = plane_to_camera_space(plane_world, &view);

    for p in [Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0), Vec3::new(-5.0, 0.5, 8.0)] {
        let world_side = plane_world.dot(p.extend(1.0));
        let camera_side = plane_cam.dot(view.transform_point3(p).extend(1.0));
        assert!((world_side - camera_side).abs() < EPS);
    }
}

// ============================================================================
// oblique_projection - perspective
// ============================================================================

#[test]
fn test_oblique_keeps_other_rows() {
    let projection = perspective();
    let oblique = oblique_projection(&projection, Vec4::new(0.0, 0.0, -1.0, -5.0));

    assert_eq!(oblique.row(0), projection.row(0));
    assert_eq!(oblique.row(1), projection.row(1));
    assert_eq!(oblique.row(3), projection.row(3));
}

#[test]
fn test_oblique_parallel_plane_moves_near_plane() {
    let oblique = oblique_projection(&perspective(), Vec4::new(0.0, 0.0, -1.0, -5.0));

    // Between the camera and the plane: clipped
    assert!(ndc_depth(&oblique, Vec3::new(0.0, 0.0, -3.0)) < 0.0);
    // On the plane: new near plane
    assert!(ndc_depth(&oblique, Vec3::new(0.0, 0.0, -5.0)).abs() < EPS);
    // Beyond the plane: visible depth range
    let depth = ndc_depth(&oblique, Vec3::new(0.0, 0.0, -10.0));
    assert!(depth > 0.0 && depth < 1.0);
}

#[test]
fn test_oblique_tilted_plane_sign_agreement() {
    let clip_plane = Vec4::new(0.0, 0.5, -1.0, -4.0);
    let oblique = oblique_projection(&perspective(), clip_plane);

    let samples = [
        Vec3::new(0.0, 0.0, -2.0),
        Vec3::new(0.0, 0.0, -6.0),
        Vec3::new(1.0, -3.0, -5.0),
        Vec3::new(-2.0, 4.0, -9.0),
        Vec3::new(0.5, 1.0, -30.0),
    ];
    for p in samples {
        let kept = clip_plane.dot(p.extend(1.0)) >= 0.0;
        let depth = ndc_depth(&oblique, p);
        assert_eq!(kept, depth >= 0.0, "point {p}: plane says kept={kept}, depth={depth}");
    }
}

#[test]
fn test_oblique_far_corner_stays_at_far_depth() {
    let projection = perspective();
    let clip_plane = Vec4::new(0.2, -0.3, -1.0, -2.0);
    let oblique = oblique_projection(&projection, clip_plane);

    let corner = Vec4::new(clip_plane.x.signum(), clip_plane.y.signum(), 1.0, 1.0);
    let q = projection.inverse() * corner;
    let clip = oblique * q;
    assert!((clip.z / clip.w - 1.0).abs() < 1e-3);
}

// ============================================================================
// oblique_projection - orthographic
// ============================================================================

#[test]
fn test_oblique_orthographic() {
    let projection = Mat4::orthographic_rh(-5.0, 5.0, -5.0, 5.0, 0.1, 100.0);
    let oblique = oblique_projection(&projection, Vec4::new(0.0, 0.0, -1.0, -2.0));

    assert!(ndc_depth(&oblique, Vec3::new(0.0, 0.0, -1.0)) < 0.0);
    assert!(ndc_depth(&oblique, Vec3::new(0.0, 0.0, -2.0)).abs() < EPS);
    assert!((ndc_depth(&oblique, Vec3::new(0.0, 0.0, -50.0)) - 48.0 / 98.0).abs() < EPS);
}

// ============================================================================
// Degenerate input
// ============================================================================

#[test]
fn test_oblique_zero_plane_returns_projection() {
    let projection = perspective();
    assert_eq!(oblique_projection(&projection, Vec4::ZERO), projection);
}
