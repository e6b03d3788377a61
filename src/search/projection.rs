use super::types::{BasicCourse, CourseDetails, DetailedCourse, SectionView, StudentFields};
use crate::catalog::types::{Course, School, Student, Term};

/// Shapes course records into response projections.
pub trait ProjectionRenderer: Send + Sync {
    fn basic(&self, course: &Course, term: &Term) -> BasicCourse;

    /// Student-specific fields are attached only when `viewer` is present.
    fn detailed(
        &self,
        school: &School,
        course: &Course,
        term: &Term,
        viewer: Option<&Student>,
    ) -> DetailedCourse;
}

/// Default renderer used by the service.
#[derive(Debug, Default, Clone, Copy)]
pub struct CourseProjector;

impl ProjectionRenderer for CourseProjector {
    fn basic(&self, course: &Course, _term: &Term) -> BasicCourse {
        BasicCourse {
            id: course.id,
            code: course.code.clone(),
            name: course.name.clone(),
            description: course.description.clone(),
            department: course.department.clone(),
            level: course.level,
            areas: course.areas.clone(),
            num_credits: course.num_credits,
        }
    }

    fn detailed(
        &self,
        school: &School,
        course: &Course,
        term: &Term,
        viewer: Option<&Student>,
    ) -> DetailedCourse {
        let sections: Vec<SectionView> = course
            .sections_in(term.id)
            .map(|section| SectionView {
                code: section.code.clone(),
                section_type: section.section_type,
                instructors: section.instructors.clone(),
                size: section.size,
                enrolment: section.enrolment,
                waitlist: section.waitlist,
                meetings: section.meetings.clone(),
            })
            .collect();
        let is_waitlist_only = course.is_offered_in(term.id)
            && course.sections_in(term.id).all(|section| section.is_full());

        let student = viewer
            .filter(|student| student.school == school.code)
            .map(|student| {
                let enrolled_sections = student.sections_of(course.id, term.id);
                StudentFields {
                    enrolled: !enrolled_sections.is_empty(),
                    enrolled_sections,
                    in_major: student.major.as_deref() == Some(course.department.as_str()),
                }
            });

        DetailedCourse {
            course: CourseDetails {
                id: course.id,
                code: course.code.clone(),
                name: course.name.clone(),
                description: course.description.clone(),
                department: course.department.clone(),
                level: course.level,
                areas: course.areas.clone(),
                num_credits: course.num_credits,
                prerequisites: course.prerequisites.clone(),
                term: format!("{} {}", term.name, term.year),
                sections,
                is_waitlist_only,
            },
            student,
        }
    }
}
