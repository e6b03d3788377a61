use crate::catalog::store::CatalogStore;
use crate::catalog::types::{School, Student, StudentId};

use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use dashmap::DashMap;
use std::sync::Arc;

/// Looks up the authenticated student behind a request, if any.
pub trait SessionResolver: Send + Sync {
    /// Returns the student only when the session is valid *and* the student belongs to
    /// `school`. Anonymous or foreign sessions resolve to `None`, never to an error.
    fn resolve(&self, headers: &HeaderMap, school: &School) -> Option<Arc<Student>>;
}

/// Bearer-token sessions: `Authorization: Bearer <token>` mapped to a student id.
pub struct BearerSessionResolver {
    tokens: DashMap<String, StudentId>,
    store: Arc<CatalogStore>,
}

impl BearerSessionResolver {
    pub fn new(store: Arc<CatalogStore>) -> Arc<Self> {
        Arc::new(Self {
            tokens: DashMap::new(),
            store,
        })
    }

    pub fn register(&self, token: &str, student: StudentId) {
        self.tokens.insert(token.to_string(), student);
    }

    pub fn session_count(&self) -> usize {
        self.tokens.len()
    }
}

impl SessionResolver for BearerSessionResolver {
    fn resolve(&self, headers: &HeaderMap, school: &School) -> Option<Arc<Student>> {
        let token = bearer_token(headers)?;
        let Some(student_id) = self.tokens.get(token).map(|entry| *entry.value()) else {
            tracing::debug!("Unknown session token");
            return None;
        };

        let student = self.store.student(student_id)?;
        if student.school != school.code {
            tracing::warn!(
                "Student {:?} presented a session for foreign school {}",
                student_id,
                school.code
            );
            return None;
        }
        Some(student)
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then_some(token)
}
