//! Integration tests for Engine logging system
//!
//! These tests verify the logging system and the log output of the solver.
//!
//! Run with: cargo test --test logging_integration_tests

use mirror_camera::glam::Vec3;
use mirror_camera::mirror3d::{Camera, Engine, FrameOutcome, MirrorCameraSolver, SkipReason, WorldTransform};
use mirror_camera::mirror3d::log::{Logger, LogEntry, LogSeverity};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

/// Mirror plane whose forward axis collapsed to zero
struct FlatPlane;

impl WorldTransform for FlatPlane {
    fn world_position(&self) -> Vec3 {
        Vec3::ZERO
    }

    fn world_forward(&self) -> Vec3 {
        Vec3::ZERO
    }
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_logger() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    Engine::log(LogSeverity::Info, "host::editor", "Scene loaded".to_string());
    Engine::log(LogSeverity::Warn, "host::editor", "Mirror texture resized".to_string());
    Engine::log(LogSeverity::Error, "host::editor", "Mirror camera missing".to_string());

    let captured_entries = entries.lock().unwrap();
    assert_eq!(captured_entries.len(), 3);

    assert_eq!(captured_entries[0].severity, LogSeverity::Info);
    assert_eq!(captured_entries[0].source, "host::editor");
    assert_eq!(captured_entries[0].message, "Scene loaded");

    assert_eq!(captured_entries[1].severity, LogSeverity::Warn);
    assert_eq!(captured_entries[2].severity, LogSeverity::Error);
    assert!(captured_entries[2].file.is_none());

    drop(captured_entries);
    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_detailed_log_location() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    Engine::log_detailed(LogSeverity::Error, "host::editor", "With location".to_string(), "src/lib.rs", 42);

    let captured_entries = entries.lock().unwrap();
    assert_eq!(captured_entries.len(), 1);
    assert_eq!(captured_entries[0].file, Some("src/lib.rs"));
    assert_eq!(captured_entries[0].line, Some(42));

    drop(captured_entries);
    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_degenerate_plane_warns() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    let mut solver = MirrorCameraSolver::new(Arc::new(Mutex::new(Camera::default())))
        .with_player_camera(Arc::new(Mutex::new(Camera::default())))
        .with_mirror_plane(Arc::new(Mutex::new(FlatPlane)));
    solver.activate();

    let outcome = solver.update_frame().unwrap();
    assert_eq!(outcome, FrameOutcome::Skipped(SkipReason::DegeneratePlane));

    let captured_entries = entries.lock().unwrap();
    let warning = captured_entries.iter()
        .find(|entry| entry.severity == LogSeverity::Warn)
        .expect("degenerate plane should log a warning");
    assert_eq!(warning.source, "mirror3d::MirrorCameraSolver");
    assert!(warning.message.contains("Degenerate mirror plane"));

    drop(captured_entries);
    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_shutdown_logs_info() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);
    Engine::initialize().unwrap();

    Engine::shutdown();

    let captured_entries = entries.lock().unwrap();
    assert!(captured_entries.iter().any(|entry| {
        entry.severity == LogSeverity::Info && entry.source == "mirror3d::Engine"
    }));

    drop(captured_entries);
    Engine::reset_logger();
}
