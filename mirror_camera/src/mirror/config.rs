/// Mirror solver configuration.
///
/// Plain data the host may change before or between frames, typically
/// from an inspector panel.

use crate::error::{Error, Result};

/// Default push of the clip plane along the mirror normal, in world units.
pub const DEFAULT_CLIP_PLANE_OFFSET: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MirrorConfig {
    /// Keep the mirror camera's Y equal to the player's Y.
    pub keep_same_height: bool,

    /// Copy fov, near/far and orthographic settings from the player camera.
    pub match_lens: bool,

    /// Reflect the player's up vector (mirror follows roll). When off, the
    /// world up axis is used.
    pub reflect_up_vector: bool,

    /// Shift of the oblique clip plane along the mirror normal.
    pub clip_plane_offset: f32,

    /// Invert front-face winding while the mirror camera renders.
    pub invert_culling: bool,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            keep_same_height: true,
            match_lens: true,
            reflect_up_vector: true,
            clip_plane_offset: DEFAULT_CLIP_PLANE_OFFSET,
            invert_culling: true,
        }
    }
}

impl MirrorConfig {
    pub fn with_keep_same_height(mut self, enabled: bool) -> Self {
        self.keep_same_height = enabled;
        self
    }

    pub fn with_match_lens(mut self, enabled: bool) -> Self {
        self.match_lens = enabled;
        self
    }

    pub fn with_reflect_up_vector(mut self, enabled: bool) -> Self {
        self.reflect_up_vector = enabled;
        self
    }

    pub fn with_clip_plane_offset(mut self, offset: f32) -> Self {
        self.clip_plane_offset = offset;
        self
    }

    pub fn with_invert_culling(mut self, enabled: bool) -> Self {
        self.invert_culling = enabled;
        self
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfig` if `clip_plane_offset` is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if !self.clip_plane_offset.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "clip_plane_offset must be finite, got {}",
                self.clip_plane_offset
            )));
        }
        if self.clip_plane_offset < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "clip_plane_offset must not be negative, got {}",
                self.clip_plane_offset
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
