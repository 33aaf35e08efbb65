//! Error types for the mirror camera crate
//!
//! This module defines the error types used by the solver, the host adapter
//! and the engine singleton. Normal per-frame operation never fails: missing
//! references are reported through `FrameOutcome`, not through `Error`.

use std::fmt;

/// Result type for mirror camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Mirror camera errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Initialization failed (engine singleton, host adapter)
    InitializationFailed(String),

    /// A camera or transform handle was poisoned by a panic in another holder
    LockPoisoned(String),

    /// Mirror plane normal is zero, near-zero or not finite
    DegeneratePlane(String),

    /// Configuration value out of range
    InvalidConfig(String),

    /// Component key does not belong to this host
    ComponentNotFound,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::LockPoisoned(msg) => write!(f, "Lock poisoned: {}", msg),
            Error::DegeneratePlane(msg) => write!(f, "Degenerate mirror plane: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::ComponentNotFound => write!(f, "Component not found"),
        }
    }
}

impl std::error::Error for Error {}

/// Log an error with file:line information and build an `Error` value.
///
/// The first form produces `Error::InitializationFailed`; the second lets the
/// caller pick the variant.
///
/// # Example
///
/// ```ignore
/// let plane = maybe_plane
///     .ok_or_else(|| engine_err!("mirror3d::Solver", "No plane"))?;
///
/// let guard = handle.lock()
///     .map_err(|_| engine_err!(LockPoisoned, "mirror3d::Solver", "Camera lock poisoned"))?;
/// ```
#[macro_export]
macro_rules! engine_err {
    ($variant:ident, $source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::mirror3d::Error::$variant(message)
    }};
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::mirror3d::Error::InitializationFailed(message)
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
