//! Scene module - poses, transforms and the look-rotation helper.
//!
//! These are value types: the host owns its scene graph and only exposes
//! world-space positions and axes through `WorldTransform`.

mod transform;

pub use transform::{look_rotation, Pose, Transform, WorldTransform, WORLD_UP};
