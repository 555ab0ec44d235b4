//! Logging capability handed to summary statistics.

use std::sync::Arc;

/// Sink for informational messages emitted by statistics.
pub trait Logger: Send + Sync {
    fn info(&self, msg: &str);
}

/// Forwards messages to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct FacadeLogger;

impl Logger for FacadeLogger {
    fn info(&self, msg: &str) {
        log::info!("{msg}");
    }
}

pub fn facade_logger() -> Arc<dyn Logger> {
    Arc::new(FacadeLogger)
}
