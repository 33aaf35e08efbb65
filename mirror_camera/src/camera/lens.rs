/// Lens - the pose-independent part of a camera's projection.

use glam::Mat4;

/// Lens parameters.
///
/// `field_of_view` is the vertical angle in degrees. `orthographic_size`
/// is half of the vertical extent of an orthographic view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lens {
    pub field_of_view: f32,
    pub near_clip: f32,
    pub far_clip: f32,
    pub orthographic: bool,
    pub orthographic_size: f32,
}

impl Default for Lens {
    fn default() -> Self {
        Self {
            field_of_view: 60.0,
            near_clip: 0.3,
            far_clip: 1000.0,
            orthographic: false,
            orthographic_size: 5.0,
        }
    }
}

impl Lens {
    /// Perspective lens
    pub fn perspective(field_of_view: f32, near_clip: f32, far_clip: f32) -> Self {
        Self {
            field_of_view,
            near_clip,
            far_clip,
            ..Default::default()
        }
    }

    /// Orthographic lens
    pub fn orthographic(orthographic_size: f32, near_clip: f32, far_clip: f32) -> Self {
        Self {
            near_clip,
            far_clip,
            orthographic: true,
            orthographic_size,
            ..Default::default()
        }
    }

    /// Symmetric projection for this lens, depth range [0, 1].
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        if self.orthographic {
            let half_height = self.orthographic_size;
            let half_width = half_height * aspect_ratio;
            Mat4::orthographic_rh(
                -half_width,
                half_width,
                -half_height,
                half_height,
                self.near_clip,
                self.far_clip,
            )
        } else {
            Mat4::perspective_rh(
                self.field_of_view.to_radians(),
                aspect_ratio,
                self.near_clip,
                self.far_clip,
            )
        }
    }
}

#[cfg(test)]
#[path = "lens_tests.rs"]
mod tests;
