//! Host module - the glue a host engine provides around the solver.
//!
//! `HostContext` is what the host hands to components each notification;
//! `HostLoop` is a minimal host that owns components and drives them.

mod host_context;
mod host_loop;

pub use host_context::HostContext;
pub use host_loop::HostLoop;
