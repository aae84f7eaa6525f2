//! Application state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use webpilot_engine::DecisionEngine;

/// State shared across handlers.
///
/// Everything here is read-only or atomic; there is no per-request mutable
/// state to coordinate.
pub struct AppState {
    pub engine: DecisionEngine,
    start_time: Instant,
    request_count: AtomicU64,
}

impl AppState {
    pub fn new(engine: DecisionEngine) -> Self {
        Self {
            engine,
            start_time: Instant::now(),
            request_count: AtomicU64::new(0),
        }
    }

    /// Model identifier served by this process.
    pub fn model(&self) -> &str {
        self.engine.model()
    }

    /// Get uptime.
    pub fn uptime(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }

    /// Get request count.
    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }

    /// Increment request count.
    pub fn increment_requests(&self) {
        self.request_count.fetch_add(1, Ordering::Relaxed);
    }
}
