// Logging capability
//
// The session logs through an injected capability rather than a global. Every
// level has a default implementation, so an implementor overrides only the
// levels it wants to redirect.

use tracing::{debug, error, info, trace, warn};

/// Leveled logging consumed by [`Session`](crate::Session).
///
/// Defaults emit through `tracing` under the `chauffeur` target. `verbose` is
/// the per-operation level: every session method announces itself there before
/// delegating to the client.
pub trait DriverLog: Send + Sync {
    fn debug(&self, message: &str) {
        debug!(target: "chauffeur", "{message}");
    }

    fn log(&self, message: &str) {
        info!(target: "chauffeur", "{message}");
    }

    fn warn(&self, message: &str) {
        warn!(target: "chauffeur", "{message}");
    }

    fn error(&self, message: &str) {
        error!(target: "chauffeur", "{message}");
    }

    /// Per-operation chatter; `trace` level by default.
    fn verbose(&self, message: &str) {
        trace!(target: "chauffeur", "{message}");
    }
}

/// The all-defaults [`DriverLog`]: every level goes to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl DriverLog for TracingLog {}
