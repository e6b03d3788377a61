use super::candidates::CandidateSet;
use crate::catalog::types::Course;
use crate::error::SearchError;

use std::num::IntErrorKind;
use std::sync::Arc;

/// Results per page for advanced search.
pub const ADVANCED_PAGE_SIZE: usize = 20;

/// One page of a deduplicated candidate set.
#[derive(Debug, Clone)]
pub struct Page {
    pub number: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub items: Vec<Arc<Course>>,
}

/// Parses the `page` query parameter. Absent means page 1; anything that is not an
/// integer is rejected rather than coerced. Integers too large for `i64` saturate, so
/// they land out of range instead of failing.
pub fn parse_page(raw: Option<&str>) -> Result<i64, SearchError> {
    let Some(value) = raw else {
        return Ok(1);
    };
    match value.trim().parse::<i64>() {
        Ok(page) => Ok(page),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(SearchError::InvalidPage(value.to_string())),
        },
    }
}

/// Slices `candidates` into pages of `page_size` after deduplicating them.
///
/// Returns `None` when `page` is below 1 or past the last page. The first page always
/// exists, even when there are no candidates.
pub fn paginate(candidates: CandidateSet, page: i64, page_size: usize) -> Option<Page> {
    let page_size = page_size.max(1);
    let number = usize::try_from(page).ok().filter(|n| *n >= 1)?;

    let candidates = candidates.distinct();
    let total_count = candidates.count();
    let total_pages = total_count.div_ceil(page_size).max(1);
    if number > total_pages {
        return None;
    }

    let items = candidates
        .iter()
        .skip((number - 1) * page_size)
        .take(page_size)
        .cloned()
        .collect();

    Some(Page {
        number,
        total_pages,
        total_count,
        items,
    })
}
