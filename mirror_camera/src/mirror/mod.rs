//! Mirror module - the mirror camera solver and its host-facing pieces.
//!
//! `MirrorCameraSolver` reflects a player camera across a mirror plane every
//! frame and clips the mirror camera obliquely at the mirror surface.

mod config;
mod lifecycle;
mod render_view;
mod snapshot;
mod solver;

pub use config::{MirrorConfig, DEFAULT_CLIP_PLANE_OFFSET};
pub use lifecycle::Lifecycle;
pub use render_view::MirrorView;
pub use snapshot::RestoreSnapshot;
pub use solver::{FrameOutcome, MirrorCameraSolver, RenderPass, SkipReason, TransformHandle};
