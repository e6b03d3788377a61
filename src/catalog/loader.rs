//! Catalog Loader
//!
//! Reads a JSON catalog document at startup and stores it in the `CatalogStore`.
//! Section and enrollment terms are written as `{name, year}` pairs and resolved through
//! the same `TermStore` that searches use, so both sides agree on term ids.

use super::store::{CatalogStore, TermStore};
use super::types::{
    ClockTime, Course, CourseId, Day, Enrollment, Meeting, School, Section, SectionType, Student,
    StudentId,
};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    pub schools: Vec<School>,
    #[serde(default)]
    pub courses: Vec<RawCourse>,
    #[serde(default)]
    pub students: Vec<RawStudent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TermRef {
    pub name: String,
    pub year: i32,
}

#[derive(Debug, Deserialize)]
pub struct RawCourse {
    pub id: u64,
    pub school: String,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub department: String,
    pub level: u32,
    #[serde(default)]
    pub areas: BTreeSet<String>,
    #[serde(default)]
    pub num_credits: f32,
    #[serde(default)]
    pub prerequisites: String,
    #[serde(default)]
    pub sections: Vec<RawSection>,
}

#[derive(Debug, Deserialize)]
pub struct RawSection {
    pub code: String,
    pub term: TermRef,
    pub section_type: SectionType,
    #[serde(default)]
    pub instructors: String,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub enrolment: u32,
    #[serde(default)]
    pub waitlist: u32,
    #[serde(default)]
    pub meetings: Vec<RawMeeting>,
}

#[derive(Debug, Deserialize)]
pub struct RawMeeting {
    pub day: Day,
    pub start: ClockTime,
    pub end: ClockTime,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Deserialize)]
pub struct RawStudent {
    pub id: u64,
    pub school: String,
    pub name: String,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub session_token: Option<String>,
    #[serde(default)]
    pub enrollments: Vec<RawEnrollment>,
}

#[derive(Debug, Deserialize)]
pub struct RawEnrollment {
    pub course: u64,
    pub section: String,
    pub term: TermRef,
}

/// What a catalog load produced.
#[derive(Debug, Default)]
pub struct LoadSummary {
    pub schools: usize,
    pub courses: usize,
    pub sections: usize,
    pub students: usize,
    /// Session tokens declared in the file, for the session resolver to register.
    pub sessions: Vec<(String, StudentId)>,
}

pub async fn load_catalog_file(path: &Path, store: &CatalogStore) -> Result<LoadSummary> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let file: CatalogFile = serde_json::from_slice(&bytes)
        .with_context(|| format!("failed to parse catalog {}", path.display()))?;

    let summary = ingest_catalog(file, store)?;
    tracing::info!(
        "Loaded catalog {}: {} schools, {} courses, {} sections, {} students",
        path.display(),
        summary.schools,
        summary.courses,
        summary.sections,
        summary.students
    );
    Ok(summary)
}

/// Validates and stores a parsed catalog.
pub fn ingest_catalog(file: CatalogFile, store: &CatalogStore) -> Result<LoadSummary> {
    let mut summary = LoadSummary::default();

    for school in file.schools {
        store.register_school(school);
        summary.schools += 1;
    }

    for raw in file.courses {
        let course = build_course(raw, store)?;
        summary.sections += course.sections.len();
        store
            .insert_course(course)
            .context("failed to store course")?;
        summary.courses += 1;
    }

    for raw in file.students {
        if store.school(&raw.school).is_none() {
            bail!("student {} references unknown school {}", raw.id, raw.school);
        }

        let mut enrollments = Vec::with_capacity(raw.enrollments.len());
        for enrollment in raw.enrollments {
            let course = CourseId(enrollment.course);
            if store.course(&raw.school, course).is_none() {
                bail!(
                    "student {} is enrolled in unknown course {}",
                    raw.id,
                    enrollment.course
                );
            }
            let term = store.get_or_create(&enrollment.term.name, enrollment.term.year)?;
            enrollments.push(Enrollment {
                course,
                section: enrollment.section,
                term: term.id,
            });
        }

        let id = StudentId(raw.id);
        if let Some(token) = raw.session_token {
            summary.sessions.push((token, id));
        }
        store.insert_student(Student {
            id,
            school: raw.school,
            name: raw.name,
            major: raw.major,
            enrollments,
        });
        summary.students += 1;
    }

    Ok(summary)
}

fn build_course(raw: RawCourse, terms: &dyn TermStore) -> Result<Course> {
    let mut sections = Vec::with_capacity(raw.sections.len());
    for section in raw.sections {
        let term = terms.get_or_create(&section.term.name, section.term.year)?;
        let mut meetings = Vec::with_capacity(section.meetings.len());
        for meeting in section.meetings {
            if meeting.start >= meeting.end {
                bail!(
                    "course {} section {} has a meeting ending before it starts ({} - {})",
                    raw.code,
                    section.code,
                    meeting.start,
                    meeting.end
                );
            }
            meetings.push(Meeting {
                day: meeting.day,
                start: meeting.start,
                end: meeting.end,
                location: meeting.location,
            });
        }
        sections.push(Section {
            code: section.code,
            term: term.id,
            section_type: section.section_type,
            instructors: section.instructors,
            size: section.size,
            enrolment: section.enrolment,
            waitlist: section.waitlist,
            meetings,
        });
    }

    Ok(Course {
        id: CourseId(raw.id),
        school: raw.school,
        code: raw.code,
        name: raw.name,
        description: raw.description,
        department: raw.department,
        level: raw.level,
        areas: raw.areas,
        num_credits: raw.num_credits,
        prerequisites: raw.prerequisites,
        sections,
    })
}
