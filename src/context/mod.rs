//! Request Context Module
//!
//! Resolves who a search request is for before it reaches the search pipeline.
//!
//! ## Responsibilities
//! - **Tenancy**: Maps the request `Host` subdomain to a registered school and rejects
//!   unknown institutions.
//! - **Sessions**: Resolves an optional authenticated student, scoped to that school.
//!
//! ## Submodules
//! - **`tenant`**: `TenantValidator` and subdomain extraction.
//! - **`session`**: `SessionResolver` and the bearer-token implementation.

pub mod session;
pub mod tenant;


use crate::catalog::types::{School, Student};
use crate::error::SearchError;
use axum::http::HeaderMap;
use session::SessionResolver;
use std::sync::Arc;
use tenant::TenantValidator;

/// Admission step shared by both search endpoints.
pub struct RequestGate {
    tenants: Arc<dyn TenantValidator>,
    sessions: Arc<dyn SessionResolver>,
    default_school: Option<String>,
}

impl RequestGate {
    pub fn new(
        tenants: Arc<dyn TenantValidator>,
        sessions: Arc<dyn SessionResolver>,
        default_school: Option<String>,
    ) -> Arc<Self> {
        Arc::new(Self {
            tenants,
            sessions,
            default_school,
        })
    }

    /// Validates the school and resolves the optional viewer.
    pub fn admit(&self, headers: &HeaderMap) -> Result<(School, Option<Arc<Student>>), SearchError> {
        let school =
            tenant::school_from_headers(headers, self.tenants.as_ref(), self.default_school.as_deref())?;
        let viewer = self.sessions.resolve(headers, &school);
        Ok((school, viewer))
    }
}
