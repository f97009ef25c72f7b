use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

#[derive(Debug, Default)]
pub struct AppMetrics {
    turns_total: AtomicU64,
    domain_replies_total: AtomicU64,
    fallback_total: AtomicU64,
    history_failures_total: AtomicU64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub turns_total: u64,
    pub domain_replies_total: u64,
    pub fallback_total: u64,
    pub history_failures_total: u64,
}

impl AppMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_turn(&self) {
        self.turns_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_domain_reply(&self) {
        self.domain_replies_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_fallback(&self) {
        self.fallback_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_history_failure(&self) {
        self.history_failures_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            turns_total: self.turns_total.load(Ordering::Relaxed),
            domain_replies_total: self.domain_replies_total.load(Ordering::Relaxed),
            fallback_total: self.fallback_total.load(Ordering::Relaxed),
            history_failures_total: self.history_failures_total.load(Ordering::Relaxed),
        }
    }
}

/// JSON events on stderr. Defaults to `warn` so the chat console stays
/// readable; `RUST_LOG` overrides.
pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}=warn,campus_agents=warn", service_name))
        });

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .with_span_list(true)
            .init();
    });
}
