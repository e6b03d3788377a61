//! Facet Filters
//!
//! Turns the optional `filters` object of an advanced search into typed constraints and
//! applies them to a `CandidateSet`.
//!
//! ## Semantics
//! - Values inside one category are OR'd (`department ∈ {CS, AMS}`).
//! - Categories are AND'd with each other.
//! - Time windows are OR'd; each window also requires a lecture section of the current term.
//! - A missing, `null` or empty category places no constraint.

use super::candidates::{CandidateSet, CourseFilter, SlotPredicate};
use crate::catalog::types::{ClockTime, Day, SectionType, Term};
use crate::error::SearchError;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Raw `filters` object as received on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterParams {
    #[serde(default)]
    pub areas: Option<Vec<String>>,
    #[serde(default)]
    pub departments: Option<Vec<String>>,
    #[serde(default)]
    pub levels: Option<Vec<u32>>,
    #[serde(default)]
    pub times: Option<Vec<TimeWindowParams>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeWindowParams {
    pub day: String,
    pub min: u32,
    pub max: u32,
}

/// A validated meeting-time window: `day` between `from:00` and `until:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub day: Day,
    pub from: ClockTime,
    pub until: ClockTime,
}

impl TryFrom<&TimeWindowParams> for TimeWindow {
    type Error = SearchError;

    fn try_from(params: &TimeWindowParams) -> Result<Self, Self::Error> {
        let day = Day::from_name(&params.day)
            .ok_or_else(|| SearchError::UnknownDay(params.day.clone()))?;
        let from = ClockTime::from_hour(params.min).ok_or_else(|| {
            SearchError::InvalidTimeWindow(format!("min hour {} is out of range", params.min))
        })?;
        let until = ClockTime::from_hour(params.max).ok_or_else(|| {
            SearchError::InvalidTimeWindow(format!("max hour {} is out of range", params.max))
        })?;
        if from > until {
            return Err(SearchError::InvalidTimeWindow(format!(
                "min hour {} is after max hour {}",
                params.min, params.max
            )));
        }
        Ok(TimeWindow { day, from, until })
    }
}

impl TimeWindow {
    pub fn predicate(&self, term: &Term) -> SlotPredicate {
        SlotPredicate::Window {
            day: self.day,
            not_before: self.from,
            not_after: self.until,
            term: term.id,
            section_type: SectionType::Lecture,
        }
    }
}

/// Validated facet constraints. Empty collections mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacetSpec {
    pub areas: BTreeSet<String>,
    pub departments: BTreeSet<String>,
    pub levels: BTreeSet<u32>,
    pub times: Vec<TimeWindow>,
}

impl TryFrom<FilterParams> for FacetSpec {
    type Error = SearchError;

    fn try_from(params: FilterParams) -> Result<Self, Self::Error> {
        let times = params
            .times
            .unwrap_or_default()
            .iter()
            .map(TimeWindow::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FacetSpec {
            areas: params.areas.unwrap_or_default().into_iter().collect(),
            departments: params.departments.unwrap_or_default().into_iter().collect(),
            levels: params.levels.unwrap_or_default().into_iter().collect(),
            times,
        })
    }
}

impl FacetSpec {
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
            && self.departments.is_empty()
            && self.levels.is_empty()
            && self.times.is_empty()
    }

    /// OR of all time windows. `None` when no windows were given.
    pub fn schedule_predicate(&self, term: &Term) -> Option<SlotPredicate> {
        self.times
            .iter()
            .map(|window| window.predicate(term))
            .reduce(SlotPredicate::or)
    }

    /// Adds one filter per present category and marks the result distinct.
    pub fn apply(&self, candidates: CandidateSet, term: &Term) -> CandidateSet {
        let mut candidates = candidates;
        if !self.areas.is_empty() {
            candidates = candidates.filter(CourseFilter::AreasIn(self.areas.clone()));
        }
        if !self.departments.is_empty() {
            candidates = candidates.filter(CourseFilter::DepartmentsIn(self.departments.clone()));
        }
        if !self.levels.is_empty() {
            candidates = candidates.filter(CourseFilter::LevelsIn(self.levels.clone()));
        }
        if let Some(predicate) = self.schedule_predicate(term) {
            candidates = candidates.filter(CourseFilter::Schedule(predicate));
        }
        candidates.distinct()
    }
}
