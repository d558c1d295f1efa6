//! Outcome reporting for the watch session.

use tracing::{error, info};

/// Receives human readable notices about regeneration passes.
///
/// Used for observability only; the session never branches on it.
pub trait Reporter {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards notices to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn info(&self, message: &str) {
        info!(target: "theme", "{}", message);
    }

    fn error(&self, message: &str) {
        error!(target: "theme", "{}", message);
    }
}
