use super::registry::SinkRegistry;
use super::types::SearchEvent;

use anyhow::Context;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::io::AsyncWriteExt;

/// Events kept by `EventLog::new`.
pub const DEFAULT_EVENT_LOG_CAPACITY: usize = 1024;

/// In-memory record of the most recent delivered search events.
///
/// Holds at most `capacity` events and evicts the oldest first. `recorded` keeps counting
/// past evictions.
pub struct EventLog {
    recent: Mutex<VecDeque<SearchEvent>>,
    capacity: usize,
    recorded: AtomicU64,
}

impl EventLog {
    pub fn new() -> Arc<Self> {
        Self::with_capacity(DEFAULT_EVENT_LOG_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Arc<Self> {
        let capacity = capacity.max(1);
        Arc::new(Self {
            recent: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
            recorded: AtomicU64::new(0),
        })
    }

    pub fn push(&self, event: SearchEvent) {
        let mut recent = self.lock();
        if recent.len() == self.capacity {
            recent.pop_front();
        }
        recent.push_back(event);
        self.recorded.fetch_add(1, Ordering::Relaxed);
    }

    /// Events currently retained.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Events delivered since startup, including evicted ones.
    pub fn recorded(&self) -> u64 {
        self.recorded.load(Ordering::Relaxed)
    }

    /// Retained events, oldest first.
    pub fn snapshot(&self) -> Vec<SearchEvent> {
        let mut events: Vec<SearchEvent> = self.lock().iter().cloned().collect();
        events.sort_by_key(|event| event.recorded_at);
        events
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<SearchEvent>> {
        // A panic while holding the lock cannot leave the deque half-updated.
        self.recent.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub fn register_event_log(registry: &SinkRegistry, log: Arc<EventLog>) {
    registry.register("event_log", move |event| {
        let log = log.clone();
        async move {
            log.push(event);
            Ok(())
        }
    });
}

/// Appends each event as one JSON line to `path`.
pub fn register_json_lines(registry: &SinkRegistry, path: PathBuf) {
    let path = Arc::new(path);
    registry.register("json_lines", move |event| {
        let path = path.clone();
        async move {
            let mut line = serde_json::to_vec(&event)?;
            line.push(b'\n');
            let mut file = tokio::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path.as_path())
                .await
                .with_context(|| format!("failed to open {}", path.display()))?;
            file.write_all(&line).await?;
            file.flush().await?;
            Ok::<(), anyhow::Error>(())
        }
    });
}
