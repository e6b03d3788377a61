use super::candidates::CandidateSet;
use super::tokenizer::query_terms;
use crate::catalog::types::{Course, Term};

use std::sync::Arc;

/// Deterministic text match over a school's courses.
///
/// A course is a candidate when it is offered in `term` and every query token occurs in its
/// code, name or description. Names match `&` and `and` interchangeably. An empty query
/// matches every course offered in the term. Results are ordered by `(code, id)`.
pub fn baseline_search(courses: &[Arc<Course>], query: &str, term: &Term) -> CandidateSet {
    let tokens = query_terms(query);

    let mut matches: Vec<Arc<Course>> = courses
        .iter()
        .filter(|course| course.is_offered_in(term.id))
        .filter(|course| tokens.iter().all(|token| course_contains(course, token)))
        .cloned()
        .collect();

    matches.sort_by(|a, b| a.code.cmp(&b.code).then(a.id.cmp(&b.id)));
    tracing::debug!(
        "Baseline matched {} of {} courses for '{}'",
        matches.len(),
        courses.len(),
        query
    );
    CandidateSet::from_ranked(matches)
}

fn course_contains(course: &Course, token: &str) -> bool {
    let code = course.code.to_lowercase();
    let name = course.name.to_lowercase();
    let description = course.description.to_lowercase();

    code.contains(token)
        || description.contains(token)
        || name.contains(token)
        || name.contains(&token.replace('&', "and"))
        || name.contains(&token.replace("and", "&"))
}
