//! Integration tests for Engine lifecycle and the host-termination path
//!
//! These tests verify that a mirror camera gets its original pose and
//! projection back when the host process terminates.
//!
//! Run with: cargo test --test engine_integration_tests

use mirror_camera::glam::{Quat, Vec3};
use mirror_camera::mirror3d::{
    Camera, Engine, HostCamera, HostLoop, Lens, Lifecycle, MirrorCameraSolver, Pose, Transform,
};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST HELPERS
// ============================================================================

fn setup() {
    Engine::initialize().unwrap();
    Engine::shutdown();
}

fn camera_at(position: Vec3) -> Arc<Mutex<Camera>> {
    Arc::new(Mutex::new(Camera::new(Pose::new(position, Quat::IDENTITY), Lens::default(), 16.0 / 9.0)))
}

// ============================================================================
// ENGINE LIFECYCLE TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_engine_full_lifecycle() {
    setup();

    let player = camera_at(Vec3::new(2.0, 1.0, 5.0));
    let mirror = camera_at(Vec3::new(0.0, 4.0, 0.0));
    let plane = Arc::new(Mutex::new(Transform::facing(Vec3::ZERO, Vec3::Z)));
    let original = mirror.lock().unwrap().clone();

    let solver = Arc::new(Mutex::new(
        MirrorCameraSolver::new(mirror.clone())
            .with_player_camera(player.clone())
            .with_mirror_plane(plane),
    ));
    let component: Arc<Mutex<dyn Lifecycle>> = solver.clone();
    Engine::register_component(&component).unwrap();
    assert_eq!(Engine::component_count(), 1);

    // Host enables and ticks without ever disabling
    {
        let mut solver = solver.lock().unwrap();
        solver.activate();
        for step in 0..5 {
            player.lock().unwrap().set_position(Vec3::new(step as f32, 1.0, 5.0));
            solver.update_frame().unwrap();
        }
    }
    assert_ne!(mirror.lock().unwrap().position(), original.position());

    Engine::shutdown();

    let restored = mirror.lock().unwrap();
    assert_eq!(restored.pose(), original.pose());
    assert_eq!(restored.projection_matrix(), original.projection_matrix());
    assert!(!solver.lock().unwrap().is_active());
    assert_eq!(Engine::component_count(), 0);
}

#[test]
#[serial]
fn test_integration_shutdown_after_host_loop() {
    setup();

    let mirror = camera_at(Vec3::new(0.0, 4.0, 0.0));
    let original_pose = mirror.lock().unwrap().pose();

    let mut host = HostLoop::new();
    host.set_main_camera(Some(camera_at(Vec3::new(-1.0, 1.5, 3.0))));
    let solver = Arc::new(Mutex::new(
        MirrorCameraSolver::new(mirror.clone())
            .with_mirror_plane(Arc::new(Mutex::new(Transform::facing(Vec3::ZERO, Vec3::Z)))),
    ));
    host.add_component(solver).unwrap();
    host.tick();
    host.tick();

    Engine::shutdown();

    assert_eq!(mirror.lock().unwrap().pose(), original_pose);
}

#[test]
#[serial]
fn test_integration_shutdown_skips_dropped_components() {
    setup();

    {
        let solver: Arc<Mutex<dyn Lifecycle>> =
            Arc::new(Mutex::new(MirrorCameraSolver::new(camera_at(Vec3::ZERO))));
        Engine::register_component(&solver).unwrap();
    }

    assert_eq!(Engine::component_count(), 0);
    Engine::shutdown();
}
