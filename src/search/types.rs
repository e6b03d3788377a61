use super::facets::FilterParams;
use crate::catalog::types::{CourseId, Meeting, SectionType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Path parameters shared by basic and advanced search.
#[derive(Debug, Deserialize)]
pub struct SearchPath {
    pub term_name: String,
    pub year: String,
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

/// Body of an advanced search. Both the body and `filters` are optional.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AdvancedSearchRequest {
    #[serde(default)]
    pub filters: Option<FilterParams>,
}

/// Lightweight projection returned by basic search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BasicCourse {
    pub id: CourseId,
    pub code: String,
    pub name: String,
    pub description: String,
    pub department: String,
    pub level: u32,
    pub areas: BTreeSet<String>,
    pub num_credits: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionView {
    pub code: String,
    pub section_type: SectionType,
    pub instructors: String,
    pub size: u32,
    pub enrolment: u32,
    pub waitlist: u32,
    pub meetings: Vec<Meeting>,
}

/// Viewer-independent fields of a detailed projection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseDetails {
    pub id: CourseId,
    pub code: String,
    pub name: String,
    pub description: String,
    pub department: String,
    pub level: u32,
    pub areas: BTreeSet<String>,
    pub num_credits: f32,
    pub prerequisites: String,
    pub term: String,
    pub sections: Vec<SectionView>,
    pub is_waitlist_only: bool,
}

/// Fields only present when a recognized student is viewing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentFields {
    pub enrolled: bool,
    pub enrolled_sections: Vec<String>,
    pub in_major: bool,
}

/// Projection returned by advanced search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetailedCourse {
    #[serde(flatten)]
    pub course: CourseDetails,
    #[serde(flatten)]
    pub student: Option<StudentFields>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub strategy: String,
    pub courses: usize,
    pub recorded_searches: u64,
}
