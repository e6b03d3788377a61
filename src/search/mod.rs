//! Search Service Module
//!
//! The query-serving core: given a query, a term and a school, produce ranked course
//! projections.
//!
//! ## Pipeline
//! 1. **Term resolution**: `(name, year)` is canonicalized through the catalog.
//! 2. **Retrieval**: The process-wide `RankingStrategy` (vectorized ranker or baseline
//!    matcher) yields a lazily evaluated `CandidateSet`.
//! 3. **Facets** (advanced only): areas, departments, levels and meeting-time windows.
//! 4. **Pagination** (advanced only): deduplicated pages of 20.
//! 5. **Shaping**: Basic or detailed projections, plus a best-effort analytics event.
//!
//! ## Submodules
//! - **`engine`**: `SearchService`, the orchestration of the steps above.
//! - **`retriever`**, **`vectorized`**, **`baseline`**, **`candidates`**: Retrieval.
//! - **`facets`**, **`paginator`**: Result refinement.
//! - **`projection`**, **`types`**: Output shapes and request DTOs.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`tokenizer`**: Text processing shared by both strategies.

pub mod baseline;
pub mod candidates;
pub mod engine;
pub mod facets;
pub mod handlers;
pub mod paginator;
pub mod projection;
pub mod retriever;
pub mod tokenizer;
pub mod types;
pub mod vectorized;
