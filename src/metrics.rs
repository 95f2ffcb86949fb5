use serde::Serialize;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Operational counters for monitoring
#[derive(Clone)]
pub struct Metrics {
    pub localities_created: Arc<AtomicUsize>,
    pub locality_conflicts: Arc<AtomicUsize>,
    pub reports_served: Arc<AtomicU64>,
    pub start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            localities_created: Arc::new(AtomicUsize::new(0)),
            locality_conflicts: Arc::new(AtomicUsize::new(0)),
            reports_served: Arc::new(AtomicU64::new(0)),
            start_time: Instant::now(),
        }
    }

    pub fn inc_localities_created(&self) {
        self.localities_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_locality_conflicts(&self) {
        self.locality_conflicts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_reports_served(&self) {
        self.reports_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            localities_created: self.localities_created.load(Ordering::Relaxed),
            locality_conflicts: self.locality_conflicts.load(Ordering::Relaxed),
            reports_served: self.reports_served.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
pub struct MetricsSnapshot {
    pub localities_created: usize,
    pub locality_conflicts: usize,
    pub reports_served: u64,
    pub uptime_seconds: u64,
}
