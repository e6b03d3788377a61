//! Course Catalog Module
//!
//! Holds the data the search pipeline reads: schools, terms, courses with their
//! sections and meetings, and students.
//!
//! ## Core Concepts
//! - **Tenancy**: Courses are stored per school; lookups never cross schools.
//! - **Terms**: `(name, year)` pairs are canonicalized by `TermStore::get_or_create`,
//!   which is atomic under concurrent first-time resolution.
//! - **Loading**: The catalog is read once at startup from a JSON document.

pub mod loader;
pub mod store;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

#[cfg(test)]
mod tests;
