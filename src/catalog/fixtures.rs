//! Shared test catalog.

use super::store::{CatalogStore, TermStore};
use super::types::{
    ClockTime, Course, CourseId, Day, Enrollment, Meeting, School, Section, SectionType, Student,
    StudentId, Term, TermId,
};
use std::collections::BTreeSet;
use std::sync::Arc;

pub(crate) struct SampleCatalog {
    pub store: Arc<CatalogStore>,
    pub fall: Term,
    pub spring: Term,
}

pub(crate) fn at(hhmm: &str) -> ClockTime {
    hhmm.parse().unwrap()
}

pub(crate) fn meeting(day: Day, start: &str, end: &str) -> Meeting {
    Meeting {
        day,
        start: at(start),
        end: at(end),
        location: String::new(),
    }
}

pub(crate) fn section(
    code: &str,
    term: TermId,
    section_type: SectionType,
    meetings: Vec<Meeting>,
) -> Section {
    Section {
        code: code.to_string(),
        term,
        section_type,
        instructors: "Staff".to_string(),
        size: 30,
        enrolment: 10,
        waitlist: 0,
        meetings,
    }
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn course(
    id: u64,
    school: &str,
    code: &str,
    name: &str,
    description: &str,
    department: &str,
    level: u32,
    areas: &[&str],
    sections: Vec<Section>,
) -> Course {
    Course {
        id: CourseId(id),
        school: school.to_string(),
        code: code.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        department: department.to_string(),
        level,
        areas: areas.iter().map(|a| a.to_string()).collect::<BTreeSet<_>>(),
        num_credits: 3.0,
        prerequisites: String::new(),
        sections,
    }
}

pub(crate) fn school(code: &str) -> School {
    School {
        code: code.to_string(),
        name: format!("{} University", code.to_uppercase()),
    }
}

/// Two schools, two terms, a handful of courses around "intro to algorithms", and one
/// student per school.
pub(crate) fn sample_catalog() -> SampleCatalog {
    use Day::*;
    use SectionType::*;

    let store = CatalogStore::new();
    store.register_school(school("jhu"));
    store.register_school(school("umd"));
    let fall = store.get_or_create("Fall", 2024).unwrap();
    let spring = store.get_or_create("Spring", 2025).unwrap();

    let courses = vec![
        course(
            1,
            "jhu",
            "EN.601.226",
            "Data Structures",
            "Introduction to data structures and algorithms",
            "CS",
            200,
            &["E", "Q"],
            vec![
                section(
                    "01",
                    fall.id,
                    Lecture,
                    vec![
                        meeting(Monday, "09:00", "10:15"),
                        meeting(Wednesday, "09:00", "10:15"),
                    ],
                ),
                section("L1", fall.id, Practical, vec![meeting(Monday, "13:30", "14:20")]),
            ],
        ),
        course(
            2,
            "jhu",
            "EN.601.433",
            "Intro to Algorithms",
            "Design and analysis of algorithms",
            "CS",
            400,
            &["E", "Q"],
            vec![
                section("01", fall.id, Lecture, vec![meeting(Monday, "10:30", "11:45")]),
                section("02", fall.id, Lecture, vec![meeting(Tuesday, "09:00", "10:15")]),
            ],
        ),
        course(
            3,
            "jhu",
            "AS.110.106",
            "Calculus I",
            "Differential calculus of one variable",
            "MATH",
            100,
            &["Q"],
            vec![section("01", fall.id, Lecture, vec![meeting(Monday, "09:00", "09:50")])],
        ),
        course(
            4,
            "jhu",
            "EN.553.171",
            "Discrete Mathematics",
            "Introduction to proofs, combinatorics and algorithms",
            "AMS",
            100,
            &["Q"],
            vec![section("01", fall.id, Lecture, vec![meeting(Monday, "09:00", "09:50")])],
        ),
        course(
            5,
            "jhu",
            "EN.601.220",
            "Intermediate Programming",
            "Intro to C and C++",
            "CS",
            200,
            &["E"],
            vec![section("01", fall.id, Lecture, vec![meeting(Friday, "12:00", "13:15")])],
        ),
        course(
            6,
            "jhu",
            "EN.601.231",
            "Automata and Computation Theory",
            "Introduction to algorithms for automata",
            "CS",
            200,
            &["E", "Q"],
            vec![section("01", spring.id, Lecture, vec![meeting(Monday, "09:00", "10:00")])],
        ),
        course(
            7,
            "jhu",
            "EN.601.464",
            "Artificial Intelligence",
            "Search algorithms and an intro to planning",
            "CS",
            400,
            &["E"],
            vec![
                section("T1", fall.id, Tutorial, vec![meeting(Monday, "09:00", "10:00")]),
                section("01", fall.id, Lecture, vec![meeting(Wednesday, "13:00", "14:15")]),
            ],
        ),
        course(
            1,
            "umd",
            "CMSC351",
            "Algorithms",
            "Intro to algorithms and their analysis",
            "CMSC",
            300,
            &[],
            vec![section("0101", fall.id, Lecture, vec![meeting(Monday, "09:00", "10:15")])],
        ),
    ];
    for c in courses {
        store.insert_course(c).unwrap();
    }

    store.insert_student(Student {
        id: StudentId(1),
        school: "jhu".to_string(),
        name: "Alice".to_string(),
        major: Some("CS".to_string()),
        enrollments: vec![Enrollment {
            course: CourseId(1),
            section: "01".to_string(),
            term: fall.id,
        }],
    });
    store.insert_student(Student {
        id: StudentId(2),
        school: "umd".to_string(),
        name: "Bob".to_string(),
        major: None,
        enrollments: vec![],
    });

    SampleCatalog {
        store,
        fall,
        spring,
    }
}

/// A single-school catalog of `count` CS courses that all match the query "topic". Every
/// course has two qualifying Monday lectures so facet joins can produce duplicates.
pub(crate) fn bulk_catalog(count: u64) -> SampleCatalog {
    let store = CatalogStore::new();
    store.register_school(school("jhu"));
    let fall = store.get_or_create("Fall", 2024).unwrap();
    let spring = store.get_or_create("Spring", 2025).unwrap();

    for id in 1..=count {
        let sections = vec![
            section(
                "01",
                fall.id,
                SectionType::Lecture,
                vec![meeting(Day::Monday, "09:00", "09:50")],
            ),
            section(
                "02",
                fall.id,
                SectionType::Lecture,
                vec![meeting(Day::Monday, "10:00", "10:50")],
            ),
        ];
        store
            .insert_course(course(
                id,
                "jhu",
                &format!("EN.600.{:03}", id),
                &format!("Topic {}", id),
                "Selected topic in computing",
                "CS",
                if id % 2 == 0 { 200 } else { 300 },
                &["E"],
                sections,
            ))
            .unwrap();
    }

    SampleCatalog {
        store,
        fall,
        spring,
    }
}
