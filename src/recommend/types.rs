//! Input and output records for the recommendation filter.
//!
//! Everything here is transient: built per request from the catalog, read by
//! [`recommend`](super::recommend), and discarded once the response is produced.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::utils::normalize_course_number;

/// Instructor name used when no real instructor data is available.
pub const UNKNOWN_INSTRUCTOR: &str = "Unknown";

/// Prerequisite text shown on a recommendation whose course has none.
pub const NO_PREREQUISITES: &str = "None";

/// A course considered for recommendation, with its instructors already resolved.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CourseCandidate {
    /// Canonical `"<DEPT> <NUMBER>"`, e.g. `"CSC 340"`.
    pub course_number: String,
    pub course_title: String,
    #[serde(default)]
    pub description: String,
    /// Free-text prerequisites. `None`, empty, or `"null"` means there are none.
    #[serde(default, rename = "prerequisiteExpression")]
    pub prerequisites: Option<String>,
    #[serde(default)]
    pub instructors: Vec<InstructorCandidate>,
}

impl CourseCandidate {
    /// The prerequisite text, or `None` when the course has no prerequisites.
    pub fn prerequisite_text(&self) -> Option<&str> {
        let text = self.prerequisites.as_deref()?.trim();
        if text.is_empty() || text.eq_ignore_ascii_case("null") {
            None
        } else {
            Some(text)
        }
    }
}

/// One instructor who teaches (or stands in for) a course.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InstructorCandidate {
    pub id: Option<String>,
    pub name: Option<String>,
    /// Overall quality, 0-5.
    pub quality_score: Option<f64>,
    /// Share of students who would take the instructor again, 0-100.
    pub would_retake_percent: Option<f64>,
    /// Difficulty, 0-5.
    pub difficulty_score: Option<f64>,
    pub profile_link: Option<String>,
}

impl InstructorCandidate {
    /// Placeholder attached to a course when none of its instructors carry a rating.
    pub fn unknown() -> Self {
        Self {
            name: Some(UNKNOWN_INSTRUCTOR.to_owned()),
            ..Self::default()
        }
    }

    /// Whether this entry carries a real, rated instructor.
    pub fn is_rated(&self) -> bool {
        let named = self
            .name
            .as_deref()
            .is_some_and(|n| !n.trim().is_empty() && n != UNKNOWN_INSTRUCTOR);
        named && self.quality_score.is_some()
    }
}

/// A recommended course paired with its best-rated instructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Recommendation {
    pub course_number: String,
    pub course_title: String,
    pub description: String,
    /// Prerequisite text as written, or `"None"`.
    pub prerequisite_expression: String,
    pub instructor: String,
    pub instructor_id: Option<String>,
    pub profile_link: Option<String>,
    pub quality_score: Option<f64>,
    pub would_retake_percent: Option<f64>,
    pub difficulty_score: Option<f64>,
    pub justification: String,
}

/// The set of courses a student has already completed.
///
/// Entries are stored normalized (uppercase, single spaces) so lookups are
/// case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletedCourses(HashSet<String>);

impl CompletedCourses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, course: &str) -> bool {
        self.0.insert(normalize_course_number(course))
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, course: &str) -> bool {
        self.0.contains(&normalize_course_number(course))
    }

    /// Membership test for a key that is already normalized.
    pub(crate) fn contains_normalized(&self, course: &str) -> bool {
        self.0.contains(course)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for CompletedCourses {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for course in iter {
            set.insert(course.as_ref());
        }
        set
    }
}
