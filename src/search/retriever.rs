use super::baseline::baseline_search;
use super::candidates::CandidateSet;
use super::vectorized::{RankerError, VectorizedRanker};
use crate::catalog::store::CourseStore;
use crate::catalog::types::Term;
use crate::error::StorageError;

use std::sync::Arc;

/// The retrieval strategy for the lifetime of the process.
///
/// Chosen once at startup and shared read-only with every request.
#[derive(Clone)]
pub enum RankingStrategy {
    Vectorized(Arc<VectorizedRanker>),
    Baseline,
}

impl RankingStrategy {
    /// Uses the vectorized ranker if it initialized, otherwise falls back to the baseline
    /// matcher for good.
    pub fn select(ranker: Result<VectorizedRanker, RankerError>) -> Self {
        match ranker {
            Ok(ranker) => {
                tracing::info!("Using vectorized ranking strategy");
                RankingStrategy::Vectorized(Arc::new(ranker))
            }
            Err(e) => {
                tracing::warn!("Vectorized ranker unavailable ({}), using baseline matcher", e);
                RankingStrategy::Baseline
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RankingStrategy::Vectorized(_) => "vectorized",
            RankingStrategy::Baseline => "baseline",
        }
    }
}

/// Produces the candidate set for a query, independent of which strategy is in use.
pub struct CandidateRetriever {
    courses: Arc<dyn CourseStore>,
    strategy: RankingStrategy,
}

impl CandidateRetriever {
    pub fn new(courses: Arc<dyn CourseStore>, strategy: RankingStrategy) -> Self {
        Self { courses, strategy }
    }

    pub fn strategy(&self) -> &RankingStrategy {
        &self.strategy
    }

    pub fn retrieve(&self, school: &str, query: &str, term: &Term) -> Result<CandidateSet, StorageError> {
        match &self.strategy {
            RankingStrategy::Vectorized(ranker) => Ok(ranker.rank(school, query, term)),
            RankingStrategy::Baseline => {
                let courses = self.courses.courses_for(school)?;
                Ok(baseline_search(&courses, query, term))
            }
        }
    }
}
