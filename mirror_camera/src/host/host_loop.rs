/// HostLoop - minimal host driving lifecycle components.
///
/// Delivers the notifications a game engine would: enable when a component
/// is added, one frame tick per `tick()`, disable on removal. Every added
/// component is also registered with `Engine` so `Engine::shutdown()` can
/// restore it if the loop is never torn down.

use std::sync::{Arc, Mutex};
use slotmap::SecondaryMap;
use crate::camera::CameraHandle;
use crate::engine::{ComponentKey, Engine};
use crate::error::{Error, Result};
use crate::mirror::Lifecycle;
use super::host_context::HostContext;

/// Component owned by the loop
struct HostEntry {
    component: Arc<Mutex<dyn Lifecycle>>,
    enabled: bool,
}

pub struct HostLoop {
    main_camera: Option<CameraHandle>,
    entries: SecondaryMap<ComponentKey, HostEntry>,
    /// Insertion order, for deterministic ticks
    order: Vec<ComponentKey>,
    frame_index: u64,
}

impl Default for HostLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl HostLoop {
    const SOURCE: &'static str = "mirror3d::HostLoop";

    pub fn new() -> Self {
        Self {
            main_camera: None,
            entries: SecondaryMap::new(),
            order: Vec::new(),
            frame_index: 0,
        }
    }

    // ===== MAIN CAMERA =====

    /// Set the camera offered to components as `HostContext::main_camera`
    pub fn set_main_camera(&mut self, main_camera: Option<CameraHandle>) {
        self.main_camera = main_camera;
    }

    pub fn main_camera(&self) -> Option<&CameraHandle> {
        self.main_camera.as_ref()
    }

    /// Context for the current frame
    pub fn context(&self) -> HostContext {
        HostContext::new(self.main_camera.clone(), self.frame_index)
    }

    // ===== COMPONENTS =====

    /// Add an enabled component.
    ///
    /// Registers it with `Engine` for the termination path, then calls
    /// `on_enable`.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is not initialized or the component
    /// mutex is poisoned.
    pub fn add_component(&mut self, component: Arc<Mutex<dyn Lifecycle>>) -> Result<ComponentKey> {
        let key = Engine::register_component(&component)?;

        let ctx = self.context();
        match component.lock() {
            Ok(mut guard) => guard.on_enable(&ctx),
            Err(_) => {
                let _ = Engine::unregister_component(key);
                return Err(crate::engine_err!(LockPoisoned, Self::SOURCE, "Component lock poisoned on add"));
            }
        }

        self.entries.insert(key, HostEntry { component, enabled: true });
        self.order.push(key);
        crate::engine_debug!(Self::SOURCE, "Component added ({} total)", self.order.len());

        Ok(key)
    }

    /// Enable or disable a component. Notifies only on transitions.
    ///
    /// # Errors
    ///
    /// `Error::ComponentNotFound` for an unknown key.
    pub fn set_enabled(&mut self, key: ComponentKey, enabled: bool) -> Result<()> {
        let ctx = self.context();
        let entry = self.entries.get_mut(key).ok_or(Error::ComponentNotFound)?;
        if entry.enabled == enabled {
            return Ok(());
        }

        entry.enabled = enabled;
        let mut component = entry.component.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if enabled {
            component.on_enable(&ctx);
        } else {
            component.on_disable();
        }
        Ok(())
    }

    /// Whether the component is enabled, `None` for an unknown key
    pub fn is_enabled(&self, key: ComponentKey) -> Option<bool> {
        self.entries.get(key).map(|entry| entry.enabled)
    }

    /// Remove a component, disabling it first if it is enabled.
    ///
    /// # Errors
    ///
    /// `Error::ComponentNotFound` for an unknown key.
    pub fn remove_component(&mut self, key: ComponentKey) -> Result<()> {
        let entry = self.entries.remove(key).ok_or(Error::ComponentNotFound)?;
        self.order.retain(|k| *k != key);

        if entry.enabled {
            entry.component.lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .on_disable();
        }

        // Already gone if Engine::shutdown() ran in between
        match Engine::unregister_component(key) {
            Ok(()) | Err(Error::ComponentNotFound) => {}
            Err(err) => return Err(err),
        }

        crate::engine_debug!(Self::SOURCE, "Component removed ({} left)", self.order.len());
        Ok(())
    }

    pub fn component_count(&self) -> usize {
        self.order.len()
    }

    // ===== FRAME =====

    /// Advance one frame and call `on_frame` on enabled components in
    /// insertion order. Returns the number of components ticked.
    ///
    /// A component whose mutex is poisoned is skipped with a warning.
    pub fn tick(&mut self) -> usize {
        self.frame_index += 1;
        let ctx = self.context();

        let mut ticked = 0;
        for key in &self.order {
            let Some(entry) = self.entries.get(*key) else { continue };
            if !entry.enabled {
                continue;
            }
            match entry.component.lock() {
                Ok(mut component) => {
                    component.on_frame(&ctx);
                    ticked += 1;
                }
                Err(_) => {
                    crate::engine_warn!(Self::SOURCE, "Frame {}: poisoned component skipped", self.frame_index);
                }
            }
        }
        ticked
    }

    /// Frames ticked so far
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }
}

#[cfg(test)]
#[path = "host_loop_tests.rs"]
mod tests;
