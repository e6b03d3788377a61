//! Service Configuration
//!
//! Command-line flags with environment-variable fallbacks.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "course-search", version, about = "Course search service")]
pub struct Config {
    /// Address the HTTP server binds to.
    #[arg(long, env = "COURSE_SEARCH_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// JSON catalog loaded at startup.
    #[arg(long, env = "COURSE_SEARCH_CATALOG")]
    pub catalog: PathBuf,

    /// School used when the request host has no subdomain (e.g. `localhost`).
    #[arg(long, env = "COURSE_SEARCH_DEFAULT_SCHOOL")]
    pub default_school: Option<String>,

    /// Skip building the vectorized ranker and serve every query with the baseline matcher.
    #[arg(long, env = "COURSE_SEARCH_BASELINE_ONLY")]
    pub baseline_only: bool,

    /// Capacity of the analytics event buffer.
    #[arg(long, default_value_t = 1024)]
    pub analytics_buffer: usize,

    /// Number of recent analytics events kept in memory.
    #[arg(long, default_value_t = 1024)]
    pub event_log_capacity: usize,

    /// Also append analytics events to this JSON-lines file.
    #[arg(long, env = "COURSE_SEARCH_ANALYTICS_LOG")]
    pub analytics_log: Option<PathBuf>,

    #[arg(long, env = "COURSE_SEARCH_LOG_LEVEL", default_value = "info")]
    pub log_level: tracing::Level,
}
