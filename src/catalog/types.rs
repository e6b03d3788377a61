//! Catalog Data Types
//!
//! Defines the records the search pipeline operates on: schools, terms, courses,
//! their sections and weekly meetings, and the students that may view them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseId(pub u64);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TermId(pub u64);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentId(pub u64);

/// An institution. Every course and student is scoped to exactly one school.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct School {
    pub code: String,
    pub name: String,
}

/// An academic period, canonical per `(name, year)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Term {
    pub id: TermId,
    pub name: String,
    pub year: i32,
}

/// Day of the week as stored on meetings (single-letter codes).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Day {
    #[serde(rename = "M")]
    Monday,
    #[serde(rename = "T")]
    Tuesday,
    #[serde(rename = "W")]
    Wednesday,
    #[serde(rename = "R")]
    Thursday,
    #[serde(rename = "F")]
    Friday,
    #[serde(rename = "S")]
    Saturday,
    #[serde(rename = "U")]
    Sunday,
}

impl Day {
    /// Maps a full English day name ("Monday") to its day. Names are matched exactly.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Monday" => Some(Self::Monday),
            "Tuesday" => Some(Self::Tuesday),
            "Wednesday" => Some(Self::Wednesday),
            "Thursday" => Some(Self::Thursday),
            "Friday" => Some(Self::Friday),
            "Saturday" => Some(Self::Saturday),
            "Sunday" => Some(Self::Sunday),
            _ => None,
        }
    }
}

/// Kind of a section. Only lectures take part in meeting-time facets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SectionType {
    #[serde(rename = "L")]
    Lecture,
    #[serde(rename = "T")]
    Tutorial,
    #[serde(rename = "P")]
    Practical,
}

/// Wall-clock time of day, stored as minutes since midnight.
///
/// Serialized as `"HH:MM"`. `24:00` is accepted so a window can close at midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    pub const MAX_MINUTES: u16 = 24 * 60;

    pub fn new(hour: u16, minute: u16) -> Option<Self> {
        if minute >= 60 {
            return None;
        }
        let minutes = hour.checked_mul(60)?.checked_add(minute)?;
        (minutes <= Self::MAX_MINUTES).then_some(Self(minutes))
    }

    /// The time at `hour:00`, used for facet window bounds.
    pub fn from_hour(hour: u32) -> Option<Self> {
        u16::try_from(hour).ok().and_then(|h| Self::new(h, 0))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl FromStr for ClockTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s
            .split_once(':')
            .ok_or_else(|| format!("expected HH:MM, got '{}'", s))?;
        let hour: u16 = hour
            .trim()
            .parse()
            .map_err(|_| format!("invalid hour in '{}'", s))?;
        let minute: u16 = minute
            .trim()
            .parse()
            .map_err(|_| format!("invalid minute in '{}'", s))?;
        Self::new(hour, minute).ok_or_else(|| format!("time out of range: '{}'", s))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

/// One weekly meeting of a section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meeting {
    pub day: Day,
    pub start: ClockTime,
    pub end: ClockTime,
    #[serde(default)]
    pub location: String,
}

/// A scheduled offering of a course in exactly one term.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    pub code: String,
    pub term: TermId,
    pub section_type: SectionType,
    pub instructors: String,
    pub size: u32,
    pub enrolment: u32,
    pub waitlist: u32,
    pub meetings: Vec<Meeting>,
}

impl Section {
    /// A section with no declared capacity is never considered full.
    pub fn is_full(&self) -> bool {
        self.size > 0 && self.enrolment >= self.size
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub id: CourseId,
    pub school: String,
    pub code: String,
    pub name: String,
    pub description: String,
    pub department: String,
    pub level: u32,
    pub areas: BTreeSet<String>,
    pub num_credits: f32,
    pub prerequisites: String,
    pub sections: Vec<Section>,
}

impl Course {
    pub fn sections_in(&self, term: TermId) -> impl Iterator<Item = &Section> + '_ {
        self.sections.iter().filter(move |s| s.term == term)
    }

    pub fn is_offered_in(&self, term: TermId) -> bool {
        self.sections_in(term).next().is_some()
    }

    /// Text indexed by the rankers: code, name and description.
    pub fn searchable_text(&self) -> String {
        format!("{} {} {}", self.code, self.name, self.description)
    }
}

/// A student's registration in one section of a course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Enrollment {
    pub course: CourseId,
    pub section: String,
    pub term: TermId,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Student {
    pub id: StudentId,
    pub school: String,
    pub name: String,
    pub major: Option<String>,
    pub enrollments: Vec<Enrollment>,
}

impl Student {
    pub fn sections_of(&self, course: CourseId, term: TermId) -> Vec<String> {
        self.enrollments
            .iter()
            .filter(|e| e.course == course && e.term == term)
            .map(|e| e.section.clone())
            .collect()
    }
}
