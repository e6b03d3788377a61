use axum::{
    Router,
    extract::Extension,
    routing::get,
};
use clap::Parser;
use course_search::analytics::recorder::AnalyticsRecorder;
use course_search::analytics::registry::SinkRegistry;
use course_search::analytics::sinks::{EventLog, register_event_log, register_json_lines};
use course_search::catalog::loader::load_catalog_file;
use course_search::catalog::store::CatalogStore;
use course_search::config::Config;
use course_search::context::RequestGate;
use course_search::context::session::BearerSessionResolver;
use course_search::context::tenant::CatalogTenantValidator;
use course_search::search::engine::SearchService;
use course_search::search::handlers::{
    ENDPOINT_HEALTH, ENDPOINT_SEARCH, handle_advanced_search, handle_basic_search, handle_health,
};
use course_search::search::projection::CourseProjector;
use course_search::search::retriever::{CandidateRetriever, RankingStrategy};
use course_search::search::vectorized::{RankerError, VectorizedRanker};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    tracing::info!("Starting course search on {}", config.bind);

    // 1. Catalog:
    let store = CatalogStore::new();
    let summary = load_catalog_file(&config.catalog, &store).await?;
    let sessions = BearerSessionResolver::new(store.clone());
    for (token, student) in &summary.sessions {
        sessions.register(token, *student);
    }
    tracing::info!("Registered {} student sessions", sessions.session_count());

    // 2. Ranking strategy, fixed for the process lifetime:
    let ranker = if config.baseline_only {
        Err(RankerError::Disabled)
    } else {
        VectorizedRanker::build(&store)
    };
    let strategy = RankingStrategy::select(ranker);

    // 3. Analytics:
    let sinks = SinkRegistry::new();
    let events = EventLog::with_capacity(config.event_log_capacity);
    register_event_log(&sinks, events.clone());
    if let Some(path) = config.analytics_log.clone() {
        tracing::info!("Appending analytics events to {}", path.display());
        register_json_lines(&sinks, path);
    }
    let (analytics, _worker) = AnalyticsRecorder::start(sinks, config.analytics_buffer);

    // 4. Search pipeline:
    let service = Arc::new(SearchService::new(
        store.clone(),
        CandidateRetriever::new(store.clone(), strategy),
        Arc::new(CourseProjector),
        analytics,
    ));
    let gate = RequestGate::new(
        Arc::new(CatalogTenantValidator::new(store.clone())),
        sessions,
        config.default_school.clone(),
    );

    // 5. HTTP Router:
    let app = Router::new()
        .route(
            ENDPOINT_SEARCH,
            get(handle_basic_search).post(handle_advanced_search),
        )
        .route(ENDPOINT_HEALTH, get(handle_health))
        .layer(Extension(service))
        .layer(Extension(gate))
        .layer(Extension(store))
        .layer(Extension(events));

    // 6. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
