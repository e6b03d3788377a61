//! Search Analytics Module
//!
//! Best-effort recording of search events. Nothing in this module can fail or slow down a
//! search: the pipeline only enqueues, and delivery happens on a background worker.
//!
//! ## Submodules
//! - **`types`**: `SearchEvent` and the truncation rules (200-character query, 2 samples).
//! - **`recorder`**: Bounded channel front-end and the delivery worker.
//! - **`registry`**: Named asynchronous sinks.
//! - **`sinks`**: In-memory event log and JSON-lines file sink.

pub mod recorder;
pub mod registry;
pub mod sinks;
pub mod types;
