/*!
# Mirror Camera

Planar mirror rendering support: a solver that keeps a secondary camera
positioned as the reflection of a player camera across a mirror plane, and
gives it an oblique projection whose near plane lies on the mirror surface.

The crate does not render anything itself. The host engine supplies its
cameras and the mirror transform through traits and draws the scene with the
matrices the solver produces.

## Architecture

- **MirrorCameraSolver**: Per-frame pose reflection and oblique clipping
- **HostCamera**: Camera abstraction the solver reads and writes
- **WorldTransform**: Source of the mirror plane (position + forward axis)
- **Lifecycle**: Enable / disable / frame / terminate notifications
- **Engine**: Process-wide logger and host-termination path
- **HostLoop**: Minimal host delivering lifecycle notifications

All math uses glam, right-handed, forward -Z, depth range [0, 1].
*/

// Internal modules
mod error;
mod engine;
mod render_state;
pub mod log;
pub mod scene;
pub mod camera;
pub mod reflection;
pub mod mirror;
pub mod host;

// Main mirror3d namespace module
pub mod mirror3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton
    pub use crate::engine::{ComponentKey, Engine};

    // Solver and lifecycle
    pub use crate::mirror::{
        FrameOutcome, Lifecycle, MirrorCameraSolver, MirrorConfig, MirrorView,
        RenderPass, RestoreSnapshot, SkipReason, TransformHandle,
        DEFAULT_CLIP_PLANE_OFFSET,
    };

    // Host glue
    pub use crate::host::{HostContext, HostLoop};

    // Cameras, transforms and planes
    pub use crate::camera::{Camera, CameraHandle, CameraUniform, Frustum, HostCamera, Lens};
    pub use crate::reflection::MirrorPlane;
    pub use crate::scene::{Pose, Transform, WorldTransform};

    // Front-face winding state
    pub use crate::render_state::{invert_culling, InvertCullingGuard};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: engine_* macros are exported at the crate root
    }

    // Reflection math sub-module
    pub mod reflection {
        pub use crate::reflection::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
