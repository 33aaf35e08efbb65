//! Camera module - lens, camera, host camera abstraction and frustum.
//!
//! `HostCamera` is the seam between the solver and the host engine;
//! `Camera` is the crate's own implementation of it.

mod camera;
mod camera_uniform;
mod frustum;
mod host_camera;
mod lens;

pub use camera::Camera;
pub use camera_uniform::CameraUniform;
pub use frustum::{
    Frustum,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use host_camera::{CameraHandle, HostCamera};
pub use lens::Lens;
