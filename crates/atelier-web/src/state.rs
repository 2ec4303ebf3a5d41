use std::sync::Arc;
use std::time::{Duration, Instant};

use atelier_core::DeskSource;

/// Shared router state. Cloned per request.
#[derive(Clone)]
pub struct AppState {
    desk: Arc<dyn DeskSource>,
    started_at: Instant,
}

impl AppState {
    pub fn new(desk: Arc<dyn DeskSource>) -> Self {
        Self {
            desk,
            started_at: Instant::now(),
        }
    }

    pub fn desk(&self) -> &dyn DeskSource {
        self.desk.as_ref()
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
