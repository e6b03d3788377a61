use crate::catalog::store::{CatalogStore, school_key};
use crate::catalog::types::School;
use crate::error::SearchError;

use axum::http::HeaderMap;
use axum::http::header::HOST;
use std::sync::Arc;

/// Rejects requests whose institution context is not a known school.
pub trait TenantValidator: Send + Sync {
    fn validate(&self, subdomain: &str) -> Result<School, SearchError>;
}

/// Validates subdomains against the schools registered in the catalog.
pub struct CatalogTenantValidator {
    store: Arc<CatalogStore>,
}

impl CatalogTenantValidator {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }
}

impl TenantValidator for CatalogTenantValidator {
    fn validate(&self, subdomain: &str) -> Result<School, SearchError> {
        self.store
            .school(subdomain)
            .ok_or_else(|| SearchError::UnknownInstitution(school_key(subdomain)))
    }
}

/// Extracts the subdomain from a `Host` value: `jhu.semester.example:8000` → `jhu`.
///
/// Returns `None` for bare hosts (`localhost`, IP addresses) and for `www`.
pub fn subdomain_from_host(host: &str) -> Option<&str> {
    let host = host.rsplit_once(':').map_or(host, |(name, _port)| name);
    if host.parse::<std::net::Ipv4Addr>().is_ok() {
        return None;
    }
    let mut labels = host.split('.');
    let first = labels.next()?;
    if labels.next().is_none() || first.is_empty() || first.eq_ignore_ascii_case("www") {
        return None;
    }
    Some(first)
}

/// Resolves the school a request is addressed to, falling back to `default_school` when
/// the host carries no subdomain.
pub fn school_from_headers(
    headers: &HeaderMap,
    validator: &dyn TenantValidator,
    default_school: Option<&str>,
) -> Result<School, SearchError> {
    let host = headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    match subdomain_from_host(host).or(default_school) {
        Some(subdomain) => validator.validate(subdomain),
        None => Err(SearchError::UnknownInstitution(host.to_string())),
    }
}
