use crate::catalog::types::{Course, CourseId, Student, StudentId, Term, TermId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Longest query text kept in an event, in characters.
pub const MAX_QUERY_CHARS: usize = 200;
/// Number of matched courses sampled into an event.
pub const MAX_SAMPLE_MATCHES: usize = 2;

/// One search, as recorded for analytics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchEvent {
    pub id: Uuid,
    pub query: String,
    pub sample_courses: Vec<CourseId>,
    pub term: TermId,
    pub school: String,
    pub student: Option<StudentId>,
    pub advanced: bool,
    pub recorded_at: u64,
}

impl SearchEvent {
    pub fn new(
        query: &str,
        matches: &[Arc<Course>],
        term: &Term,
        school: &str,
        student: Option<&Student>,
        advanced: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            query: truncate_query(query),
            sample_courses: matches
                .iter()
                .take(MAX_SAMPLE_MATCHES)
                .map(|course| course.id)
                .collect(),
            term: term.id,
            school: school.to_string(),
            student: student.map(|s| s.id),
            advanced,
            recorded_at: now_ms(),
        }
    }
}

/// First `MAX_QUERY_CHARS` characters of `query`. Never splits a UTF-8 character.
pub fn truncate_query(query: &str) -> String {
    query.chars().take(MAX_QUERY_CHARS).collect()
}

/// Current system time in milliseconds.
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}
