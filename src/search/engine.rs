use super::facets::FacetSpec;
use super::paginator::{ADVANCED_PAGE_SIZE, paginate};
use super::projection::ProjectionRenderer;
use super::retriever::CandidateRetriever;
use super::types::{BasicCourse, DetailedCourse};
use crate::analytics::recorder::AnalyticsRecorder;
use crate::analytics::types::SearchEvent;
use crate::catalog::store::TermStore;
use crate::catalog::types::{School, Student};
use crate::error::SearchError;

use std::sync::Arc;

/// Maximum number of results returned by basic search.
pub const BASIC_RESULT_LIMIT: usize = 4;

/// Inputs common to both search modes.
#[derive(Debug, Clone, Copy)]
pub struct SearchRequest<'a> {
    pub school: &'a School,
    pub query: &'a str,
    pub term_name: &'a str,
    pub year: i32,
    pub viewer: Option<&'a Student>,
}

/// The search pipeline: term resolution, retrieval, facets, pagination and shaping.
pub struct SearchService {
    terms: Arc<dyn TermStore>,
    retriever: CandidateRetriever,
    renderer: Arc<dyn ProjectionRenderer>,
    analytics: AnalyticsRecorder,
}

impl SearchService {
    pub fn new(
        terms: Arc<dyn TermStore>,
        retriever: CandidateRetriever,
        renderer: Arc<dyn ProjectionRenderer>,
        analytics: AnalyticsRecorder,
    ) -> Self {
        Self {
            terms,
            retriever,
            renderer,
            analytics,
        }
    }

    pub fn strategy_name(&self) -> &'static str {
        self.retriever.strategy().name()
    }

    /// Up to four basic projections, unfiltered and unpaginated.
    pub fn basic_search(&self, request: &SearchRequest<'_>) -> Result<Vec<BasicCourse>, SearchError> {
        let term = self.terms.get_or_create(request.term_name, request.year)?;
        let matches = self
            .retriever
            .retrieve(&request.school.code, request.query, &term)?
            .distinct()
            .take(BASIC_RESULT_LIMIT);

        self.analytics.record(SearchEvent::new(
            request.query,
            &matches,
            &term,
            &request.school.code,
            request.viewer,
            false,
        ));

        tracing::debug!(
            "Basic search '{}' in {} {} {} returned {} courses",
            request.query,
            request.school.code,
            term.name,
            term.year,
            matches.len()
        );
        Ok(matches
            .iter()
            .map(|course| self.renderer.basic(course, &term))
            .collect())
    }

    /// One page of detailed projections after facet filtering.
    ///
    /// Pages outside the result range produce an empty list and record no event.
    pub fn advanced_search(
        &self,
        request: &SearchRequest<'_>,
        page_number: i64,
        facets: &FacetSpec,
    ) -> Result<Vec<DetailedCourse>, SearchError> {
        let term = self.terms.get_or_create(request.term_name, request.year)?;
        let candidates = self
            .retriever
            .retrieve(&request.school.code, request.query, &term)?;
        let filtered = facets.apply(candidates, &term);

        let Some(page) = paginate(filtered, page_number, ADVANCED_PAGE_SIZE) else {
            tracing::debug!(
                "Advanced search '{}' page {} is out of range",
                request.query,
                page_number
            );
            return Ok(Vec::new());
        };

        self.analytics.record(SearchEvent::new(
            request.query,
            &page.items,
            &term,
            &request.school.code,
            request.viewer,
            true,
        ));

        tracing::debug!(
            "Advanced search '{}' page {}/{} ({} total) in {}",
            request.query,
            page.number,
            page.total_pages,
            page.total_count,
            request.school.code
        );
        Ok(page
            .items
            .iter()
            .map(|course| {
                self.renderer
                    .detailed(request.school, course, &term, request.viewer)
            })
            .collect())
    }
}
