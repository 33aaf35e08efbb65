/// Process-wide render state shared with the host rasterizer.
///
/// Rendering through a mirror flips the handedness of every triangle, so the
/// host must swap which winding counts as front-facing while the mirror
/// camera draws. The flag lives here, outside any component, because the
/// rasterizer reads it globally.
///
/// Writing is only possible through `InvertCullingGuard`: the flag is set
/// when the guard is created and cleared when it is dropped, including
/// during unwinding. There is no public setter.

use std::sync::atomic::{AtomicBool, Ordering};

static INVERT_CULLING: AtomicBool = AtomicBool::new(false);

/// Whether front-face winding is currently inverted.
///
/// Backends read this when recording draw calls.
pub fn invert_culling() -> bool {
    INVERT_CULLING.load(Ordering::Acquire)
}

/// Force the flag back to its default (off).
///
/// Used by the solver's restore path and by `Engine::shutdown()`.
pub(crate) fn reset_invert_culling() {
    INVERT_CULLING.store(false, Ordering::Release);
}

/// Scoped front-face winding inversion.
///
/// ```no_run
/// use mirror_camera::mirror3d::{InvertCullingGuard, invert_culling};
///
/// {
///     let _guard = InvertCullingGuard::new();
///     assert!(invert_culling());
///     // draw the mirrored view...
/// }
/// assert!(!invert_culling());
/// ```
#[must_use = "the winding inversion ends as soon as the guard is dropped"]
#[derive(Debug)]
pub struct InvertCullingGuard {
    _private: (),
}

impl InvertCullingGuard {
    /// Invert front-face winding until the returned guard is dropped.
    pub fn new() -> Self {
        INVERT_CULLING.store(true, Ordering::Release);
        Self { _private: () }
    }
}

impl Default for InvertCullingGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InvertCullingGuard {
    fn drop(&mut self) {
        reset_invert_culling();
    }
}

#[cfg(test)]
#[path = "render_state_tests.rs"]
mod tests;
