use super::engine::{SearchRequest, SearchService};
use super::facets::FacetSpec;
use super::paginator::parse_page;
use super::types::{
    AdvancedSearchRequest, BasicCourse, DetailedCourse, HealthResponse, PageParams, SearchPath,
};
use crate::analytics::sinks::EventLog;
use crate::catalog::store::CatalogStore;
use crate::context::RequestGate;
use crate::error::{ErrorReply, SearchError};
use axum::body::Bytes;
use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::{Extension, Json};
use std::sync::Arc;

pub const ENDPOINT_SEARCH: &str = "/search/:term_name/:year/:query";
pub const ENDPOINT_HEALTH: &str = "/health";

fn parse_year(raw: &str) -> Result<i32, SearchError> {
    raw.trim()
        .parse()
        .map_err(|_| SearchError::InvalidYear(raw.to_string()))
}

/// Optional JSON body of an advanced search; an empty body means no filters.
fn parse_filters(body: &[u8]) -> Result<FacetSpec, SearchError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(FacetSpec::default());
    }
    let request: AdvancedSearchRequest = serde_json::from_slice(body)
        .map_err(|e| SearchError::MalformedBody(e.to_string()))?;
    FacetSpec::try_from(request.filters.unwrap_or_default())
}

pub async fn handle_basic_search(
    Path(path): Path<SearchPath>,
    headers: HeaderMap,
    Extension(gate): Extension<Arc<RequestGate>>,
    Extension(service): Extension<Arc<SearchService>>,
) -> Result<(StatusCode, Json<Vec<BasicCourse>>), ErrorReply> {
    let run = || -> Result<Vec<BasicCourse>, SearchError> {
        let (school, viewer) = gate.admit(&headers)?;
        let year = parse_year(&path.year)?;
        service.basic_search(&SearchRequest {
            school: &school,
            query: &path.query,
            term_name: &path.term_name,
            year,
            viewer: viewer.as_deref(),
        })
    };

    match run() {
        Ok(courses) => Ok((StatusCode::OK, Json(courses))),
        Err(e) => Err(e.into_reply()),
    }
}

pub async fn handle_advanced_search(
    Path(path): Path<SearchPath>,
    Query(params): Query<PageParams>,
    headers: HeaderMap,
    Extension(gate): Extension<Arc<RequestGate>>,
    Extension(service): Extension<Arc<SearchService>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Vec<DetailedCourse>>), ErrorReply> {
    let run = || -> Result<Vec<DetailedCourse>, SearchError> {
        let (school, viewer) = gate.admit(&headers)?;
        let year = parse_year(&path.year)?;
        let page = parse_page(params.page.as_deref())?;
        let facets = parse_filters(&body)?;
        service.advanced_search(
            &SearchRequest {
                school: &school,
                query: &path.query,
                term_name: &path.term_name,
                year,
                viewer: viewer.as_deref(),
            },
            page,
            &facets,
        )
    };

    match run() {
        Ok(courses) => Ok((StatusCode::OK, Json(courses))),
        Err(e) => Err(e.into_reply()),
    }
}

pub async fn handle_health(
    Extension(service): Extension<Arc<SearchService>>,
    Extension(store): Extension<Arc<CatalogStore>>,
    Extension(events): Extension<Arc<EventLog>>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        strategy: service.strategy_name().to_string(),
        courses: store.course_count(),
        recorded_searches: events.recorded(),
    })
}
