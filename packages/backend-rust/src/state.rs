use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Instant, SystemTime};

/// Process-wide counters surfaced by the metrics endpoint.
#[derive(Debug, Default)]
pub struct AnalysisCounters {
    analyses_total: AtomicU64,
}

impl AnalysisCounters {
    pub fn record_analysis(&self) {
        self.analyses_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn analyses_total(&self) -> u64 {
        self.analyses_total.load(Ordering::Relaxed)
    }
}

#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    started_at_system: SystemTime,
    counters: Arc<AnalysisCounters>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            started_at_system: SystemTime::now(),
            counters: Arc::new(AnalysisCounters::default()),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn started_at_system(&self) -> SystemTime {
        self.started_at_system
    }

    pub fn counters(&self) -> Arc<AnalysisCounters> {
        Arc::clone(&self.counters)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
