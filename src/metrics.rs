use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Atomic counters shared by every clone of the app state.
#[derive(Clone, Default, Debug)]
pub struct Metrics {
    /// Cycles computed by the generator (cache hits excluded)
    pub cycles_generated: Arc<AtomicU64>,
    pub cache_hit_count: Arc<AtomicU64>,
    pub cache_miss_count: Arc<AtomicU64>,
    pub sessions_recorded: Arc<AtomicU64>,
    /// Saves that failed while the in-memory state was kept
    pub persistence_errors: Arc<AtomicU64>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_cycle_generated(&self) {
        self.cycles_generated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_hit(&self) {
        self.cache_hit_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_miss(&self) {
        self.cache_miss_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_session(&self) {
        self.sessions_recorded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_persistence_error(&self) {
        self.persistence_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            cycles_generated: self.cycles_generated.load(Ordering::Relaxed),
            cache_hit_count: self.cache_hit_count.load(Ordering::Relaxed),
            cache_miss_count: self.cache_miss_count.load(Ordering::Relaxed),
            sessions_recorded: self.sessions_recorded.load(Ordering::Relaxed),
            persistence_errors: self.persistence_errors.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub cycles_generated: u64,
    pub cache_hit_count: u64,
    pub cache_miss_count: u64,
    pub sessions_recorded: u64,
    pub persistence_errors: u64,
}
