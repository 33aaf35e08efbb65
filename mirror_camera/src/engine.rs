/// Mirror camera engine - singleton for process-wide state
///
/// This module provides the global logger and the registry of lifecycle
/// components that must be restored when the host process terminates.
/// It uses thread-safe static storage with RwLock for safe concurrent access.

use std::sync::{Arc, Mutex, OnceLock, RwLock, Weak};
use std::time::SystemTime;
use slotmap::{new_key_type, SlotMap};
use crate::error::{Error, Result};
use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
use crate::mirror::Lifecycle;
use crate::render_state;

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for a lifecycle component registered with the engine.
    ///
    /// Keys remain valid after other components are removed.
    pub struct ComponentKey;
}

// ===== INTERNAL STATE =====

/// Global engine state storage
static ENGINE_STATE: OnceLock<EngineState> = OnceLock::new();

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Internal state structure holding the engine registries
struct EngineState {
    /// Components notified on host termination. Weak: the host owns them.
    components: RwLock<SlotMap<ComponentKey, Weak<Mutex<dyn Lifecycle>>>>,
}

impl EngineState {
    fn new() -> Self {
        Self {
            components: RwLock::new(SlotMap::with_key()),
        }
    }
}

// ===== PUBLIC API =====

/// Main engine singleton manager
///
/// Owns the process-wide pieces of the mirror camera crate: the logger and
/// the host-termination path. Every component registered here receives
/// `Lifecycle::on_host_terminating` exactly once when `Engine::shutdown()`
/// runs, which is how a mirror camera gets its original pose back even when
/// the host never disabled it.
///
/// # Example
///
/// ```no_run
/// use std::sync::{Arc, Mutex};
/// use mirror_camera::mirror3d::{Engine, Camera, MirrorCameraSolver, Lifecycle};
///
/// Engine::initialize()?;
///
/// let mirror_camera = Arc::new(Mutex::new(Camera::default()));
/// let solver: Arc<Mutex<dyn Lifecycle>> =
///     Arc::new(Mutex::new(MirrorCameraSolver::new(mirror_camera)));
/// let key = Engine::register_component(&solver)?;
///
/// // ... run frames ...
///
/// // Process is terminating: every registered solver restores its camera
/// Engine::shutdown();
/// # Ok::<(), mirror_camera::mirror3d::Error>(())
/// ```
pub struct Engine;

impl Engine {
    const SOURCE: &'static str = "mirror3d::Engine";

    /// Initialize the engine
    ///
    /// Must be called once at application startup before registering
    /// components. Calling it again is harmless.
    ///
    /// # Errors
    ///
    /// Currently always succeeds, but returns Result for future extensibility.
    pub fn initialize() -> Result<()> {
        ENGINE_STATE.get_or_init(EngineState::new);
        Ok(())
    }

    /// Host termination path
    ///
    /// Notifies every live registered component with
    /// `on_host_terminating()`, clears the registry and resets the global
    /// winding inversion flag. Components are collected before being
    /// notified, so a component may call back into the engine.
    ///
    /// A component whose mutex was poisoned is still notified: restoring the
    /// camera matters more than the panic that poisoned it.
    pub fn shutdown() {
        let mut live = Vec::new();
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut components) = state.components.write() {
                live.extend(components.drain().filter_map(|(_, weak)| weak.upgrade()));
            }
        }

        for component in &live {
            let mut guard = component.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            guard.on_host_terminating();
        }

        render_state::reset_invert_culling();

        crate::engine_info!(Self::SOURCE, "Shutdown complete, {} component(s) restored", live.len());
    }

    /// Register a component for the host-termination path
    ///
    /// The engine keeps a weak reference only; dropping the last strong
    /// reference silently removes the component from shutdown processing.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is not initialized or the registry
    /// lock is poisoned.
    pub fn register_component(component: &Arc<Mutex<dyn Lifecycle>>) -> Result<ComponentKey> {
        let state = Self::state()?;

        let mut components = state.components.write()
            .map_err(|_| crate::engine_err!(LockPoisoned, Self::SOURCE, "Component registry lock poisoned"))?;

        let key = components.insert(Arc::downgrade(component));
        crate::engine_debug!(Self::SOURCE, "Component registered ({} total)", components.len());

        Ok(key)
    }

    /// Remove a component from the host-termination path
    ///
    /// # Errors
    ///
    /// Returns `Error::ComponentNotFound` if the key is unknown (already
    /// removed, or drained by `shutdown()`).
    pub fn unregister_component(key: ComponentKey) -> Result<()> {
        let state = Self::state()?;

        let mut components = state.components.write()
            .map_err(|_| crate::engine_err!(LockPoisoned, Self::SOURCE, "Component registry lock poisoned"))?;

        components.remove(key).map(|_| ()).ok_or(Error::ComponentNotFound)
    }

    /// Number of registered components whose owner is still alive
    pub fn component_count() -> usize {
        ENGINE_STATE.get()
            .and_then(|state| state.components.read().ok())
            .map(|components| components.values().filter(|weak| weak.strong_count() > 0).count())
            .unwrap_or(0)
    }

    fn state() -> Result<&'static EngineState> {
        ENGINE_STATE.get()
            .ok_or_else(|| crate::engine_err!(Self::SOURCE, "Engine not initialized. Call Engine::initialize() first."))
    }

    // ===== LOGGING API =====

    /// Set a custom logger
    ///
    /// Replace the default logger with a custom implementation (editor
    /// console, file logger, test capture...).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mirror_camera::mirror3d::{Engine, log::{Logger, LogEntry}};
    ///
    /// struct Silent;
    /// impl Logger for Silent {
    ///     fn log(&self, _entry: &LogEntry) {}
    /// }
    ///
    /// Engine::set_logger(Silent);
    /// ```
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = Self::logger().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        if let Ok(mut lock) = Self::logger().write() {
            *lock = Box::new(DefaultLogger::default());
        }
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by macros like engine_info!, engine_warn!, etc.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if let Ok(lock) = Self::logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Internal logging method with file:line information (for ERROR logs)
    ///
    /// Used by engine_error! and engine_err! to include source location.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if let Ok(lock) = Self::logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }

    fn logger() -> &'static RwLock<Box<dyn Logger>> {
        LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger::default())))
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
