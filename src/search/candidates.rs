//! Candidate Collections
//!
//! `CandidateSet` is the common output of both ranking strategies. It keeps the ranked
//! courses and a list of pending filters; nothing is evaluated until the set is iterated,
//! so facets compose the same way whichever strategy produced the ranking.

use crate::catalog::types::{ClockTime, Course, Day, Meeting, Section, SectionType, TermId};

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

/// A boolean condition on one meeting of one section.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotPredicate {
    /// The meeting lies inside `[not_before, not_after]` on `day`, and its section is a
    /// `section_type` section of `term`.
    Window {
        day: Day,
        not_before: ClockTime,
        not_after: ClockTime,
        term: TermId,
        section_type: SectionType,
    },
    Or(Box<SlotPredicate>, Box<SlotPredicate>),
}

impl SlotPredicate {
    pub fn or(self, other: SlotPredicate) -> SlotPredicate {
        SlotPredicate::Or(Box::new(self), Box::new(other))
    }

    pub fn matches(&self, section: &Section, meeting: &Meeting) -> bool {
        match self {
            SlotPredicate::Window {
                day,
                not_before,
                not_after,
                term,
                section_type,
            } => {
                meeting.start >= *not_before
                    && meeting.end <= *not_after
                    && meeting.day == *day
                    && section.term == *term
                    && section.section_type == *section_type
            }
            SlotPredicate::Or(left, right) => {
                left.matches(section, meeting) || right.matches(section, meeting)
            }
        }
    }
}

/// A constraint on a whole course.
#[derive(Debug, Clone, PartialEq)]
pub enum CourseFilter {
    /// The course carries at least one of these area tags.
    AreasIn(BTreeSet<String>),
    DepartmentsIn(BTreeSet<String>),
    LevelsIn(BTreeSet<u32>),
    /// Some meeting of some section satisfies the predicate.
    Schedule(SlotPredicate),
}

impl CourseFilter {
    pub fn matches(&self, course: &Course) -> bool {
        match self {
            CourseFilter::AreasIn(areas) => course.areas.iter().any(|a| areas.contains(a)),
            CourseFilter::DepartmentsIn(departments) => departments.contains(&course.department),
            CourseFilter::LevelsIn(levels) => levels.contains(&course.level),
            CourseFilter::Schedule(predicate) => course.sections.iter().any(|section| {
                section
                    .meetings
                    .iter()
                    .any(|meeting| predicate.matches(section, meeting))
            }),
        }
    }
}

/// Ranked courses plus pending filters, evaluated on iteration.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    ranked: Arc<[Arc<Course>]>,
    filters: Vec<CourseFilter>,
    distinct: bool,
}

impl CandidateSet {
    /// Wraps an already ordered list of courses.
    pub fn from_ranked(ranked: Vec<Arc<Course>>) -> Self {
        Self {
            ranked: ranked.into(),
            filters: Vec::new(),
            distinct: false,
        }
    }

    pub fn empty() -> Self {
        Self::from_ranked(Vec::new())
    }

    pub fn filter(mut self, filter: CourseFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Keeps only the first occurrence of each course id.
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn filters(&self) -> &[CourseFilter] {
        &self.filters
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Course>> + '_ {
        let mut seen = HashSet::new();
        let distinct = self.distinct;
        self.ranked
            .iter()
            .filter(move |course| self.filters.iter().all(|f| f.matches(course)))
            .filter(move |course| !distinct || seen.insert(course.id))
    }

    pub fn take(&self, limit: usize) -> Vec<Arc<Course>> {
        self.iter().take(limit).cloned().collect()
    }

    pub fn to_vec(&self) -> Vec<Arc<Course>> {
        self.iter().cloned().collect()
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }
}
