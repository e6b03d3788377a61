//! Vectorized Relevance Ranker
//!
//! TF-IDF vectors over each course's code, name and description, built once at startup
//! per school. A query is vectorized with the same vocabulary and courses are ranked by
//! cosine similarity. The index is immutable after construction.

use super::baseline::baseline_search;
use super::candidates::CandidateSet;
use super::tokenizer::term_frequencies;
use crate::catalog::store::{CatalogStore, CourseStore};
use crate::catalog::types::{Course, Term};

use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum RankerError {
    #[error("vectorized ranking disabled by configuration")]
    Disabled,

    #[error("no indexable course text in the catalog")]
    EmptyCorpus,

    #[error("failed to read courses: {0}")]
    Storage(#[from] crate::error::StorageError),
}

struct IndexedCourse {
    course: Arc<Course>,
    weights: HashMap<String, f32>,
    norm: f32,
}

#[derive(Default)]
struct SchoolIndex {
    idf: HashMap<String, f32>,
    documents: Vec<IndexedCourse>,
}

pub struct VectorizedRanker {
    schools: HashMap<String, SchoolIndex>,
}

impl VectorizedRanker {
    /// Indexes every school registered in the catalog.
    pub fn build(store: &CatalogStore) -> Result<Self, RankerError> {
        let mut courses = Vec::new();
        for school in store.school_codes() {
            courses.extend(store.courses_for(&school)?);
        }
        Self::from_courses(courses)
    }

    pub fn from_courses(courses: impl IntoIterator<Item = Arc<Course>>) -> Result<Self, RankerError> {
        let mut by_school: HashMap<String, Vec<(Arc<Course>, HashMap<String, usize>)>> =
            HashMap::new();
        for course in courses {
            let tf = term_frequencies(&course.searchable_text());
            by_school
                .entry(course.school.clone())
                .or_default()
                .push((course, tf));
        }

        let mut schools = HashMap::new();
        let mut vocabulary = 0;
        for (school, docs) in by_school {
            let index = SchoolIndex::build(docs);
            vocabulary += index.idf.len();
            schools.insert(school, index);
        }

        if vocabulary == 0 {
            return Err(RankerError::EmptyCorpus);
        }

        tracing::info!(
            "Vectorized ranker indexed {} schools ({} terms)",
            schools.len(),
            vocabulary
        );
        Ok(Self { schools })
    }

    /// Courses of `school` offered in `term`, most relevant first.
    ///
    /// Only courses sharing at least one token with the query are returned. A query with
    /// no indexable tokens is handed to the baseline matcher, so an empty query returns
    /// every offered course in `(code, id)` order.
    pub fn rank(&self, school: &str, query: &str, term: &Term) -> CandidateSet {
        let Some(index) = self.schools.get(school) else {
            return CandidateSet::empty();
        };

        let query_tf = term_frequencies(query);
        if query_tf.is_empty() {
            // Nothing indexable ("", "C", "I"): match the way the baseline does.
            let courses: Vec<Arc<Course>> =
                index.documents.iter().map(|doc| doc.course.clone()).collect();
            return baseline_search(&courses, query, term);
        }

        let query_vector = index.vectorize(&query_tf);
        let query_norm = norm(&query_vector);
        if query_norm == 0.0 {
            return CandidateSet::empty();
        }

        let mut scored: Vec<(f32, Arc<Course>)> = index
            .documents
            .iter()
            .filter(|doc| doc.course.is_offered_in(term.id))
            .filter_map(|doc| {
                let score = doc.cosine(&query_vector, query_norm);
                (score > 0.0).then(|| (score, doc.course.clone()))
            })
            .collect();

        scored.sort_by(|(sa, a), (sb, b)| {
            sb.total_cmp(sa)
                .then_with(|| a.code.cmp(&b.code))
                .then_with(|| a.id.cmp(&b.id))
        });

        tracing::debug!("Vectorized ranker scored {} courses for '{}'", scored.len(), query);
        CandidateSet::from_ranked(scored.into_iter().map(|(_, course)| course).collect())
    }

    pub fn school_count(&self) -> usize {
        self.schools.len()
    }
}

impl SchoolIndex {
    fn build(docs: Vec<(Arc<Course>, HashMap<String, usize>)>) -> Self {
        let total = docs.len() as f32;
        let mut document_frequency: HashMap<&str, usize> = HashMap::new();
        for (_, tf) in &docs {
            for token in tf.keys() {
                *document_frequency.entry(token.as_str()).or_insert(0) += 1;
            }
        }

        // Smoothed idf: ln((1 + N) / (1 + df)) + 1.
        let idf: HashMap<String, f32> = document_frequency
            .into_iter()
            .map(|(token, df)| {
                let weight = ((1.0 + total) / (1.0 + df as f32)).ln() + 1.0;
                (token.to_string(), weight)
            })
            .collect();

        let mut index = SchoolIndex {
            idf,
            documents: Vec::with_capacity(docs.len()),
        };
        for (course, tf) in docs {
            let weights = index.vectorize(&tf);
            let norm = norm(&weights);
            index.documents.push(IndexedCourse {
                course,
                weights,
                norm,
            });
        }
        index
    }

    /// Sublinear tf-idf weights; tokens outside the vocabulary are dropped.
    fn vectorize(&self, tf: &HashMap<String, usize>) -> HashMap<String, f32> {
        tf.iter()
            .filter_map(|(token, count)| {
                let idf = self.idf.get(token)?;
                Some((token.clone(), (1.0 + (*count as f32).ln()) * idf))
            })
            .collect()
    }
}

impl IndexedCourse {
    fn cosine(&self, query: &HashMap<String, f32>, query_norm: f32) -> f32 {
        if self.norm == 0.0 {
            return 0.0;
        }
        let dot: f32 = query
            .iter()
            .filter_map(|(token, q)| self.weights.get(token).map(|d| q * d))
            .sum();
        dot / (self.norm * query_norm)
    }
}

fn norm(vector: &HashMap<String, f32>) -> f32 {
    vector.values().map(|w| w * w).sum::<f32>().sqrt()
}
