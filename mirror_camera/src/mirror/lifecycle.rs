/// Lifecycle - the notifications a host engine delivers to a component.

use crate::host::HostContext;

/// Host lifecycle hooks.
///
/// The host adapter (`HostLoop`) calls `on_enable` when the component
/// becomes active, `on_frame` once per render frame while it is active and
/// `on_disable` when it is deactivated. `Engine::shutdown()` calls
/// `on_host_terminating` on every registered component.
pub trait Lifecycle: Send {
    /// Component activated
    fn on_enable(&mut self, ctx: &HostContext);

    /// Component deactivated
    fn on_disable(&mut self);

    /// Per-frame tick, after the host updated its own cameras
    fn on_frame(&mut self, ctx: &HostContext);

    /// Host process is terminating. Defaults to `on_disable`.
    fn on_host_terminating(&mut self) {
        self.on_disable();
    }
}
