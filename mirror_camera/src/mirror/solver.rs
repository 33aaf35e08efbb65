/// MirrorCameraSolver - drives a mirror camera from a player camera and a
/// mirror plane.
///
/// Each frame the player pose is reflected across the mirror plane, the
/// result is applied to the mirror camera, and the mirror camera's
/// projection is replaced by an oblique one whose near plane lies on the
/// mirror, so nothing between the mirror camera and the mirror is drawn.
///
/// The solver holds no per-frame state. The only thing it remembers is the
/// mirror camera's original pose and projection, captured on activation and
/// written back on deactivation.

use std::sync::{Arc, Mutex, MutexGuard};
use glam::Mat4;
use crate::camera::CameraHandle;
use crate::error::Result;
use crate::host::HostContext;
use crate::reflection::{plane_to_camera_space, MirrorPlane};
use crate::render_state::{self, InvertCullingGuard};
use crate::scene::{look_rotation, Pose, WorldTransform, WORLD_UP};
use super::config::MirrorConfig;
use super::lifecycle::Lifecycle;
use super::render_view::MirrorView;
use super::snapshot::RestoreSnapshot;

/// Shared handle to the mirror plane transform
pub type TransformHandle = Arc<Mutex<dyn WorldTransform>>;

/// Why a frame left the mirror camera untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No restore snapshot: `activate()` not called yet, or already deactivated
    Inactive,
    /// `clip_plane_offset` set through `config_mut()` failed validation
    InvalidConfig,
    /// No player camera yet
    MissingPlayerCamera,
    /// No mirror plane yet
    MissingMirrorPlane,
    /// Mirror plane forward axis has (near) zero length
    DegeneratePlane,
}

/// Result of one `update_frame()` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// Mirror camera pose and projection were written
    Updated { pose: Pose, projection: Mat4 },
    /// Previous pose and projection remain in effect
    Skipped(SkipReason),
}

/// Scope of one mirror camera render pass.
///
/// While it lives, front-face winding is inverted if the solver's
/// `invert_culling` option was on when the pass began.
#[must_use = "the render pass ends as soon as it is dropped"]
#[derive(Debug)]
pub struct RenderPass {
    guard: Option<InvertCullingGuard>,
}

impl RenderPass {
    /// Whether this pass inverted front-face winding
    pub fn inverts_culling(&self) -> bool {
        self.guard.is_some()
    }

    /// End the pass explicitly (same as dropping it)
    pub fn end(self) {}
}

/// Mirror camera solver.
///
/// # Example
///
/// ```no_run
/// use std::sync::{Arc, Mutex};
/// use mirror_camera::mirror3d::{Camera, MirrorCameraSolver, Transform};
/// use mirror_camera::glam::Vec3;
///
/// let player = Arc::new(Mutex::new(Camera::default()));
/// let mirror = Arc::new(Mutex::new(Camera::default()));
/// let plane = Arc::new(Mutex::new(Transform::facing(Vec3::ZERO, Vec3::Z)));
///
/// let mut solver = MirrorCameraSolver::new(mirror)
///     .with_player_camera(player)
///     .with_mirror_plane(plane);
///
/// solver.activate();
/// solver.update_frame()?;
/// solver.render(|view| {
///     // draw the scene with view.view_matrix() / view.projection_matrix()
/// })?;
/// solver.deactivate();
/// # Ok::<(), mirror_camera::mirror3d::Error>(())
/// ```
pub struct MirrorCameraSolver {
    mirror_camera: CameraHandle,
    player_camera: Option<CameraHandle>,
    mirror_plane: Option<TransformHandle>,
    config: MirrorConfig,
    snapshot: Option<RestoreSnapshot>,
}

impl MirrorCameraSolver {
    const SOURCE: &'static str = "mirror3d::MirrorCameraSolver";

    /// Create an inactive solver controlling `mirror_camera`.
    pub fn new(mirror_camera: CameraHandle) -> Self {
        Self {
            mirror_camera,
            player_camera: None,
            mirror_plane: None,
            config: MirrorConfig::default(),
            snapshot: None,
        }
    }

    pub fn with_player_camera(mut self, player_camera: CameraHandle) -> Self {
        self.player_camera = Some(player_camera);
        self
    }

    pub fn with_mirror_plane(mut self, mirror_plane: TransformHandle) -> Self {
        self.mirror_plane = Some(mirror_plane);
        self
    }

    /// Replace the configuration without validation (builder use).
    pub fn with_config(mut self, config: MirrorConfig) -> Self {
        self.config = config;
        self
    }

    // ===== REFERENCES =====

    pub fn mirror_camera(&self) -> &CameraHandle {
        &self.mirror_camera
    }

    pub fn player_camera(&self) -> Option<&CameraHandle> {
        self.player_camera.as_ref()
    }

    pub fn set_player_camera(&mut self, player_camera: Option<CameraHandle>) {
        self.player_camera = player_camera;
    }

    pub fn mirror_plane(&self) -> Option<&TransformHandle> {
        self.mirror_plane.as_ref()
    }

    pub fn set_mirror_plane(&mut self, mirror_plane: Option<TransformHandle>) {
        self.mirror_plane = mirror_plane;
    }

    // ===== CONFIGURATION =====

    pub fn config(&self) -> &MirrorConfig {
        &self.config
    }

    /// Unchecked access. An invalid value makes `update_frame` skip frames
    /// until it is corrected.
    pub fn config_mut(&mut self) -> &mut MirrorConfig {
        &mut self.config
    }

    /// Replace the configuration after validating it.
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfig`; the previous configuration is kept.
    pub fn set_config(&mut self, config: MirrorConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    // ===== LIFECYCLE =====

    /// Whether a restore snapshot is held
    pub fn is_active(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn snapshot(&self) -> Option<&RestoreSnapshot> {
        self.snapshot.as_ref()
    }

    /// Capture the mirror camera's pose and projection.
    ///
    /// Must run before the first frame update; until then `update_frame`
    /// skips. A second call while active keeps the first snapshot.
    pub fn activate(&mut self) {
        if self.snapshot.is_some() {
            crate::engine_debug!(Self::SOURCE, "Already active, snapshot kept");
            return;
        }

        let camera = lock_or_recover(&self.mirror_camera);
        let snapshot = RestoreSnapshot::capture(&*camera);
        crate::engine_debug!(Self::SOURCE, "Activated, snapshot at {}", snapshot.pose().position);
        self.snapshot = Some(snapshot);
    }

    /// Restore the mirror camera and reset the winding inversion flag.
    ///
    /// Returns whether a snapshot was restored; without one this is a no-op.
    /// Shared by the disable path and the host-termination path.
    pub fn deactivate(&mut self) -> bool {
        let Some(snapshot) = self.snapshot.take() else {
            crate::engine_debug!(Self::SOURCE, "Deactivate without snapshot ignored");
            return false;
        };

        let mut camera = lock_or_recover(&self.mirror_camera);
        snapshot.apply_to(&mut *camera);
        render_state::reset_invert_culling();

        crate::engine_debug!(Self::SOURCE, "Deactivated, camera restored to {}", snapshot.pose().position);
        true
    }

    // ===== FRAME UPDATE =====

    /// Mirror pose for a player pose: reflected position (with optional
    /// height lock) and orientation rebuilt from the reflected axes.
    pub fn solve_pose(config: &MirrorConfig, player: &Pose, plane: &MirrorPlane) -> Pose {
        let mut position = plane.reflect_point(player.position);
        if config.keep_same_height {
            position.y = player.position.y;
        }

        let forward = plane.reflect_vector(player.forward());
        let up = if config.reflect_up_vector {
            plane.reflect_vector(player.up())
        } else {
            WORLD_UP
        };

        Pose::new(position, look_rotation(forward, up))
    }

    /// Recompute the mirror camera's pose and projection.
    ///
    /// An inactive solver, an invalid configuration, missing references or
    /// a degenerate plane skip the frame and leave the camera as it was.
    /// The camera is only written between `activate()` and `deactivate()`.
    ///
    /// # Errors
    ///
    /// `Error::LockPoisoned` if a handle was poisoned.
    pub fn update_frame(&self) -> Result<FrameOutcome> {
        if self.snapshot.is_none() {
            crate::engine_trace!(Self::SOURCE, "Frame skipped: not active");
            return Ok(FrameOutcome::Skipped(SkipReason::Inactive));
        }
        if let Err(err) = self.config.validate() {
            crate::engine_warn!(Self::SOURCE, "Frame skipped: {}", err);
            return Ok(FrameOutcome::Skipped(SkipReason::InvalidConfig));
        }
        let Some(player_handle) = self.player_camera.as_ref() else {
            crate::engine_trace!(Self::SOURCE, "Frame skipped: no player camera");
            return Ok(FrameOutcome::Skipped(SkipReason::MissingPlayerCamera));
        };
        let Some(plane_handle) = self.mirror_plane.as_ref() else {
            crate::engine_trace!(Self::SOURCE, "Frame skipped: no mirror plane");
            return Ok(FrameOutcome::Skipped(SkipReason::MissingMirrorPlane));
        };

        // One lock at a time: the same object may back several handles
        let (player_pose, player_lens) = {
            let player = lock(player_handle, "Player camera")?;
            (Pose::new(player.position(), player.rotation()), player.lens())
        };

        let plane = {
            let transform = lock(plane_handle, "Mirror plane")?;
            MirrorPlane::from_transform(&*transform)
        };
        let plane = match plane {
            Ok(plane) => plane,
            Err(err) => {
                crate::engine_warn!(Self::SOURCE, "Frame skipped: {}", err);
                return Ok(FrameOutcome::Skipped(SkipReason::DegeneratePlane));
            }
        };

        let pose = Self::solve_pose(&self.config, &player_pose, &plane);

        let mut mirror = lock(&self.mirror_camera, "Mirror camera")?;
        mirror.set_pose(pose.position, pose.rotation);
        if self.config.match_lens {
            mirror.set_lens(player_lens);
        }

        // View matrix must reflect the pose just applied
        let clip_plane = plane_to_camera_space(
            plane.clip_plane(self.config.clip_plane_offset),
            &mirror.view_matrix(),
        );

        mirror.reset_projection_matrix();
        let projection = mirror.calculate_oblique_matrix(clip_plane);
        mirror.set_projection_matrix(projection);

        crate::engine_trace!(Self::SOURCE, "Mirror camera at {}", pose.position);
        Ok(FrameOutcome::Updated { pose, projection })
    }

    // ===== RENDERING =====

    /// Start a mirror camera render pass.
    ///
    /// Front-face winding stays inverted until the returned pass is dropped
    /// (when `invert_culling` is on).
    pub fn begin_render_pass(&self) -> RenderPass {
        RenderPass {
            guard: self.config.invert_culling.then(InvertCullingGuard::new),
        }
    }

    /// Run `draw` inside a render pass.
    ///
    /// `draw` receives a snapshot of the mirror camera; the handle is not
    /// held while drawing. The winding flag is cleared when `draw` returns
    /// or panics.
    ///
    /// # Errors
    ///
    /// `Error::LockPoisoned` if the mirror camera handle was poisoned.
    pub fn render<R>(&self, draw: impl FnOnce(&MirrorView) -> R) -> Result<R> {
        let pass = self.begin_render_pass();
        let view = {
            let camera = lock(&self.mirror_camera, "Mirror camera")?;
            MirrorView::capture(&*camera, pass.inverts_culling())
        };
        let result = draw(&view);
        pass.end();
        Ok(result)
    }
}

impl Lifecycle for MirrorCameraSolver {
    /// Resolves the player camera from the host when none was injected,
    /// then activates.
    fn on_enable(&mut self, ctx: &HostContext) {
        if self.player_camera.is_none() {
            self.player_camera = ctx.main_camera().cloned();
        }
        self.activate();
    }

    fn on_disable(&mut self) {
        self.deactivate();
    }

    fn on_frame(&mut self, _ctx: &HostContext) {
        // Errors are logged where they are raised
        let _ = self.update_frame();
    }
}

fn lock<'a, T: ?Sized>(handle: &'a Mutex<T>, what: &str) -> Result<MutexGuard<'a, T>> {
    handle.lock()
        .map_err(|_| crate::engine_err!(LockPoisoned, MirrorCameraSolver::SOURCE, "{} lock poisoned", what))
}

/// Restoring must happen even if another holder panicked.
fn lock_or_recover<T: ?Sized>(handle: &Mutex<T>) -> MutexGuard<'_, T> {
    handle.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
#[path = "solver_tests.rs"]
mod tests;
