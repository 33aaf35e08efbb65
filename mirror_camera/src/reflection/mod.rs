//! Reflection module - planar reflection and oblique clipping math.
//!
//! Pure functions and value types; nothing here touches a camera handle.

mod mirror_plane;
mod oblique;
mod reflect;

pub use mirror_plane::{MirrorPlane, MIN_NORMAL_LENGTH};
pub use oblique::{oblique_projection, plane_to_camera_space};
pub use reflect::{reflect_point, reflect_vector};
