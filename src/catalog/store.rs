use super::types::{Course, CourseId, School, Student, StudentId, Term, TermId};
use crate::error::StorageError;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Canonical term lookup.
///
/// Implementations must make `get_or_create` atomic per `(name, year)`: two concurrent
/// first-time calls return the same `TermId`.
pub trait TermStore: Send + Sync {
    fn get_or_create(&self, name: &str, year: i32) -> Result<Term, StorageError>;
}

/// Read access to a school's courses.
pub trait CourseStore: Send + Sync {
    /// Every course of `school`, ordered by id. Unknown schools yield an empty list.
    fn courses_for(&self, school: &str) -> Result<Vec<Arc<Course>>, StorageError>;
}

/// Canonical form of a school code. Codes are case-insensitive.
pub fn school_key(code: &str) -> String {
    code.trim().to_ascii_lowercase()
}

/// In-memory catalog: schools, terms, courses and students.
///
/// Courses are kept in one inner map per school so a query never touches another
/// tenant's data.
pub struct CatalogStore {
    schools: DashMap<String, School>,
    terms: DashMap<(String, i32), Term>,
    next_term_id: AtomicU64,
    courses: DashMap<String, DashMap<CourseId, Arc<Course>>>,
    students: DashMap<StudentId, Arc<Student>>,
}

impl CatalogStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Registers a school under its lower-cased code, the form subdomains are matched in.
    pub fn register_school(&self, mut school: School) {
        school.code = school_key(&school.code);
        tracing::debug!("Registered school {}", school.code);
        self.courses.entry(school.code.clone()).or_default();
        self.schools.insert(school.code.clone(), school);
    }

    pub fn school(&self, code: &str) -> Option<School> {
        self.schools
            .get(&school_key(code))
            .map(|entry| entry.value().clone())
    }

    pub fn school_codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.schools.iter().map(|e| e.key().clone()).collect();
        codes.sort();
        codes
    }

    /// Stores a course under its school. Course ids are unique per school.
    pub fn insert_course(&self, mut course: Course) -> Result<(), StorageError> {
        course.school = school_key(&course.school);
        if !self.schools.contains_key(&course.school) {
            return Err(StorageError::Conflict(format!(
                "course {} references unknown school {}",
                course.code, course.school
            )));
        }

        let school_map = self.courses.entry(course.school.clone()).or_default();
        match school_map.entry(course.id) {
            Entry::Occupied(_) => Err(StorageError::Conflict(format!(
                "duplicate course id {} in school {}",
                course.id.0, course.school
            ))),
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(course));
                Ok(())
            }
        }
    }

    pub fn course(&self, school: &str, id: CourseId) -> Option<Arc<Course>> {
        self.courses
            .get(&school_key(school))
            .and_then(|map| map.get(&id).map(|c| c.value().clone()))
    }

    pub fn course_count(&self) -> usize {
        self.courses.iter().map(|entry| entry.value().len()).sum()
    }

    pub fn insert_student(&self, mut student: Student) {
        student.school = school_key(&student.school);
        self.students.insert(student.id, Arc::new(student));
    }

    pub fn student(&self, id: StudentId) -> Option<Arc<Student>> {
        self.students.get(&id).map(|entry| entry.value().clone())
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self {
            schools: DashMap::new(),
            terms: DashMap::new(),
            next_term_id: AtomicU64::new(1),
            courses: DashMap::new(),
            students: DashMap::new(),
        }
    }
}

impl TermStore for CatalogStore {
    fn get_or_create(&self, name: &str, year: i32) -> Result<Term, StorageError> {
        // The entry guard holds the shard lock, so the id is allocated at most once per key.
        let term = self
            .terms
            .entry((name.to_string(), year))
            .or_insert_with(|| {
                let id = TermId(self.next_term_id.fetch_add(1, Ordering::SeqCst));
                tracing::info!("Created term {} {} ({:?})", name, year, id);
                Term {
                    id,
                    name: name.to_string(),
                    year,
                }
            })
            .value()
            .clone();
        Ok(term)
    }
}

impl CourseStore for CatalogStore {
    fn courses_for(&self, school: &str) -> Result<Vec<Arc<Course>>, StorageError> {
        let Some(school_map) = self.courses.get(&school_key(school)) else {
            return Ok(Vec::new());
        };
        let mut courses: Vec<Arc<Course>> =
            school_map.iter().map(|entry| entry.value().clone()).collect();
        courses.sort_by_key(|course| course.id);
        Ok(courses)
    }
}
