//! Course Search Service Library
//!
//! This library crate defines the modules behind the `course-search` binary (`main.rs`).
//!
//! ## Architecture Modules
//! - **`catalog`**: Schools, terms, courses, sections and students, held in a concurrent
//!   in-memory store and loaded from a JSON document at startup.
//! - **`search`**: The query pipeline. Ranking-strategy dispatch (vectorized ranker or
//!   baseline matcher), facet filtering, pagination, projections and HTTP handlers.
//! - **`context`**: Per-request admission: tenant (subdomain) validation and optional
//!   student session lookup.
//! - **`analytics`**: Fire-and-forget search events, delivered to pluggable sinks by a
//!   background worker.
//! - **`config`**: Command-line and environment configuration.
//! - **`error`**: The error taxonomy and its mapping to HTTP status codes.

pub mod analytics;
pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod search;
