//! Unit tests for Engine singleton manager
//!
//! Tests initialization, the component registry, the host-termination path
//! and the logging API.
//!
//! IMPORTANT: ENGINE_STATE and LOGGER are global OnceLocks shared across all
//! tests. All tests are marked with #[serial] to run sequentially.

use crate::mirror3d::{Engine, Error, HostContext, Lifecycle};
use crate::mirror3d::log::{Logger, LogEntry, LogSeverity};
use crate::render_state::{self, InvertCullingGuard};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST HELPERS
// ============================================================================

/// Lifecycle component counting its notifications
#[derive(Default)]
struct CountingComponent {
    enabled: usize,
    disabled: usize,
    frames: usize,
    terminated: usize,
}

impl Lifecycle for CountingComponent {
    fn on_enable(&mut self, _ctx: &HostContext) {
        self.enabled += 1;
    }

    fn on_disable(&mut self) {
        self.disabled += 1;
    }

    fn on_frame(&mut self, _ctx: &HostContext) {
        self.frames += 1;
    }

    fn on_host_terminating(&mut self) {
        self.terminated += 1;
    }
}

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        // Unserialized tests log concurrently; keep this test's source only
        if entry.source != "mirror3d::Test" {
            return;
        }
        let mut entries = self.entries.lock().unwrap();
        entries.push(format!("{:?}: {}", entry.severity, entry.message));
    }
}

/// Setup: initialize and drain any component left by a previous test
fn setup() {
    let _ = Engine::initialize();
    Engine::shutdown();
}

// ============================================================================
// INITIALIZATION
// ============================================================================

#[test]
#[serial]
fn test_engine_initialize_is_idempotent() {
    setup();
    assert!(Engine::initialize().is_ok());
    assert!(Engine::initialize().is_ok());
}

// ============================================================================
// COMPONENT REGISTRY
// ============================================================================

#[test]
#[serial]
fn test_register_and_unregister_component() {
    setup();

    let component: Arc<Mutex<dyn Lifecycle>> = Arc::new(Mutex::new(CountingComponent::default()));
    let key = Engine::register_component(&component).unwrap();
    assert_eq!(Engine::component_count(), 1);

    Engine::unregister_component(key).unwrap();
    assert_eq!(Engine::component_count(), 0);

    assert_eq!(Engine::unregister_component(key), Err(Error::ComponentNotFound));
}

#[test]
#[serial]
fn test_dropped_component_is_not_counted() {
    setup();

    let component: Arc<Mutex<dyn Lifecycle>> = Arc::new(Mutex::new(CountingComponent::default()));
    Engine::register_component(&component).unwrap();
    assert_eq!(Engine::component_count(), 1);

    drop(component);
    assert_eq!(Engine::component_count(), 0);
}

// ============================================================================
// HOST TERMINATION
// ============================================================================

#[test]
#[serial]
fn test_shutdown_notifies_each_component_once() {
    setup();

    let first = Arc::new(Mutex::new(CountingComponent::default()));
    let second = Arc::new(Mutex::new(CountingComponent::default()));
    let first_dyn: Arc<Mutex<dyn Lifecycle>> = first.clone();
    let second_dyn: Arc<Mutex<dyn Lifecycle>> = second.clone();
    Engine::register_component(&first_dyn).unwrap();
    Engine::register_component(&second_dyn).unwrap();

    Engine::shutdown();
    Engine::shutdown();

    assert_eq!(first.lock().unwrap().terminated, 1);
    assert_eq!(second.lock().unwrap().terminated, 1);
    assert_eq!(first.lock().unwrap().disabled, 0);
    assert_eq!(Engine::component_count(), 0);
}

#[test]
#[serial]
fn test_shutdown_resets_invert_culling() {
    setup();

    let guard = InvertCullingGuard::new();
    assert!(render_state::invert_culling());

    Engine::shutdown();
    assert!(!render_state::invert_culling());

    drop(guard);
    assert!(!render_state::invert_culling());
}

#[test]
#[serial]
fn test_shutdown_notifies_poisoned_component() {
    setup();

    let component = Arc::new(Mutex::new(CountingComponent::default()));
    let component_dyn: Arc<Mutex<dyn Lifecycle>> = component.clone();
    Engine::register_component(&component_dyn).unwrap();

    let poisoner = component.clone();
    let _ = std::thread::spawn(move || {
        let _guard = poisoner.lock().unwrap();
        panic!("poison the component");
    })
    .join();
    assert!(component.is_poisoned());

    Engine::shutdown();

    let terminated = component.lock().unwrap_or_else(|p| p.into_inner()).terminated;
    assert_eq!(terminated, 1);
}

// ============================================================================
// LOGGING
// ============================================================================

#[test]
#[serial]
fn test_set_logger_and_reset() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Engine::set_logger(TestLogger { entries: entries.clone() });

    Engine::log(LogSeverity::Info, "mirror3d::Test", "hello".to_string());
    crate::engine_warn!("mirror3d::Test", "value {}", 3);
    crate::engine_error!("mirror3d::Test", "boom");

    Engine::reset_logger();
    Engine::log(LogSeverity::Info, "mirror3d::Test", "not captured".to_string());

    let entries = entries.lock().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0], "Info: hello");
    assert_eq!(entries[1], "Warn: value 3");
    assert_eq!(entries[2], "Error: boom");
}
