use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Interrupt flag shared between the receive loop and whoever stops it
/// (the Ctrl-C watcher in the CLI, a test thread).
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    stopped: Arc<AtomicBool>,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    pub fn is_triggered(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}
