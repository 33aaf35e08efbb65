//! Headless mirror demo
//!
//! A player walks along a corridor with a mirror at the far end. Each frame
//! the host loop ticks the mirror solver, then the mirror view is "rendered"
//! by culling a handful of objects against the oblique frustum.

use std::sync::{Arc, Mutex};
use mirror_camera::engine_info;
use mirror_camera::glam::{Quat, Vec3};
use mirror_camera::mirror3d::{
    invert_culling, Camera, Engine, HostCamera, HostLoop, Lens, MirrorCameraSolver, Pose, Result,
    Transform,
};

const SOURCE: &str = "mirror_camera_demo";
const FRAMES: u64 = 8;

/// Objects in the scene: name and world position
const OBJECTS: [(&str, Vec3); 4] = [
    ("lamp", Vec3::new(0.0, 2.5, 2.0)),
    ("chair", Vec3::new(-1.0, 0.5, 5.0)),
    ("statue behind mirror", Vec3::new(0.0, 1.0, -2.0)),
    ("painting", Vec3::new(1.5, 1.8, 8.0)),
];

fn main() -> Result<()> {
    Engine::initialize()?;

    let player = Arc::new(Mutex::new(Camera::new(
        Pose::new(Vec3::new(0.0, 1.7, 10.0), Quat::IDENTITY),
        Lens::perspective(70.0, 0.1, 100.0),
        16.0 / 9.0,
    )));
    let mirror_camera = Arc::new(Mutex::new(Camera::default()));
    let mirror_plane = Arc::new(Mutex::new(Transform::facing(Vec3::ZERO, Vec3::Z)));

    let mut host = HostLoop::new();
    host.set_main_camera(Some(player.clone()));

    let solver = Arc::new(Mutex::new(
        MirrorCameraSolver::new(mirror_camera.clone()).with_mirror_plane(mirror_plane),
    ));
    let key = host.add_component(solver.clone())?;

    for frame in 0..FRAMES {
        // Walk toward the mirror while turning slightly
        if let Ok(mut player) = player.lock() {
            let position = Vec3::new(0.4 * frame as f32, 1.7, 10.0 - frame as f32);
            player.set_position(position);
            player.set_rotation(Quat::from_rotation_y(0.05 * frame as f32));
        }

        host.tick();

        let (visible, inverted) = match solver.lock() {
            Ok(solver) => solver.render(|view| {
                let frustum = view.frustum();
                let visible = OBJECTS.iter()
                    .filter(|(_, position)| frustum.contains_point(*position))
                    .map(|(name, _)| *name)
                    .collect::<Vec<_>>();
                (visible, invert_culling())
            })?,
            Err(_) => (Vec::new(), false),
        };

        engine_info!(
            SOURCE,
            "frame {}: inverted winding = {}, visible in mirror = {:?}",
            host.frame_index(),
            inverted,
            visible,
        );
    }

    if let Ok(camera) = mirror_camera.lock() {
        engine_info!(SOURCE, "mirror camera at {} before removal", camera.position());
    }

    host.remove_component(key)?;

    if let Ok(camera) = mirror_camera.lock() {
        engine_info!(SOURCE, "mirror camera restored to {}", camera.position());
    }

    Engine::shutdown();
    Ok(())
}
