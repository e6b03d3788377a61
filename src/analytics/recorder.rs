//! Fire-and-forget Event Recording
//!
//! The search pipeline hands events to an `AnalyticsRecorder`, which pushes them onto a
//! bounded channel without waiting. A background worker drains the channel and delivers
//! each event to the `SinkRegistry`.
//!
//! ## Guarantees
//! - `record` never blocks and never returns an error.
//! - A full or closed channel drops the event with a warning.
//! - Sink failures are logged by the worker and do not stop it.

use super::registry::SinkRegistry;
use super::types::SearchEvent;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;

#[derive(Clone)]
pub struct AnalyticsRecorder {
    tx: mpsc::Sender<SearchEvent>,
    dropped: Arc<AtomicU64>,
}

impl AnalyticsRecorder {
    /// A recorder and the receiving end of its channel, for callers that drain events
    /// themselves.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<SearchEvent>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (
            Self {
                tx,
                dropped: Arc::new(AtomicU64::new(0)),
            },
            rx,
        )
    }

    /// Spawns the delivery worker on the current tokio runtime.
    pub fn start(sinks: Arc<SinkRegistry>, capacity: usize) -> (Self, JoinHandle<()>) {
        let (recorder, rx) = Self::channel(capacity);
        let handle = tokio::spawn(run_worker(rx, sinks));
        tracing::info!("Analytics worker started (buffer {})", capacity);
        (recorder, handle)
    }

    pub fn record(&self, event: SearchEvent) {
        match self.tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                tracing::warn!("Analytics buffer full, dropping event {}", event.id);
            }
            Err(TrySendError::Closed(event)) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                tracing::warn!("Analytics worker stopped, dropping event {}", event.id);
            }
        }
    }

    pub fn dropped_events(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}

/// Delivers events until every recorder has been dropped.
pub async fn run_worker(mut rx: mpsc::Receiver<SearchEvent>, sinks: Arc<SinkRegistry>) {
    while let Some(event) = rx.recv().await {
        let failures = sinks.deliver(&event).await;
        if failures == 0 {
            tracing::trace!("Delivered analytics event {}", event.id);
        }
    }
    tracing::info!("Analytics worker stopped");
}
