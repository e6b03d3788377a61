//! Analytics Sink Registry
//!
//! Maps sink names (e.g. "event_log") to asynchronous closures that persist a
//! `SearchEvent`. The dispatcher fans every event out to all registered sinks.

use super::types::SearchEvent;

use anyhow::Result;
use dashmap::DashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type alias for a thread-safe, asynchronous sink function.
pub type SinkFn =
    Arc<dyn Fn(SearchEvent) -> Pin<Box<dyn Future<Output = Result<()>> + Send>> + Send + Sync>;

pub struct SinkRegistry {
    sinks: DashMap<String, SinkFn>,
}

impl SinkRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Registers a sink under `name`, replacing any sink with the same name.
    pub fn register<F, Fut>(&self, name: &str, sink: F)
    where
        F: Fn(SearchEvent) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        // Box::pin erases the concrete future type so different sinks share one map.
        let sink_fn: SinkFn = Arc::new(move |event: SearchEvent| {
            Box::pin(sink(event)) as Pin<Box<dyn Future<Output = Result<()>> + Send>>
        });

        self.sinks.insert(name.to_string(), sink_fn);
        tracing::info!("Registered analytics sink: {}", name);
    }

    /// Delivers `event` to every sink. Returns how many sinks failed; failures are logged
    /// and never propagated.
    pub async fn deliver(&self, event: &SearchEvent) -> usize {
        // Clone the handles out so no map guard is held across an await.
        let sinks: Vec<(String, SinkFn)> = self
            .sinks
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();

        let mut failures = 0;
        for (name, sink) in sinks {
            if let Err(e) = sink(event.clone()).await {
                failures += 1;
                tracing::warn!("Analytics sink '{}' failed for event {}: {}", name, event.id, e);
            }
        }
        failures
    }

    pub fn list_sinks(&self) -> Vec<String> {
        self.sinks.iter().map(|entry| entry.key().clone()).collect()
    }

    pub fn has_sink(&self, name: &str) -> bool {
        self.sinks.contains_key(name)
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for SinkRegistry {
    fn default() -> Self {
        Self {
            sinks: DashMap::new(),
        }
    }
}
