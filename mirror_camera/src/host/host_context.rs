/// Host state visible to lifecycle components.

use crate::camera::CameraHandle;

/// Context passed with `on_enable` and `on_frame`.
#[derive(Clone, Default)]
pub struct HostContext {
    main_camera: Option<CameraHandle>,
    frame_index: u64,
}

impl HostContext {
    pub fn new(main_camera: Option<CameraHandle>, frame_index: u64) -> Self {
        Self { main_camera, frame_index }
    }

    /// Host's main camera, used as the player camera when none was injected
    pub fn main_camera(&self) -> Option<&CameraHandle> {
        self.main_camera.as_ref()
    }

    /// Frames ticked so far (0 before the first tick)
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }
}
