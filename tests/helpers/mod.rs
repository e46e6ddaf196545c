//! Shared builders for integration tests.
#![allow(dead_code)]

use std::path::PathBuf;

use advisor::recommend::{CompletedCourses, CourseCandidate, InstructorCandidate};

/// Build a course candidate with no instructors.
pub fn make_course(number: &str, prerequisites: Option<&str>) -> CourseCandidate {
    CourseCandidate {
        course_number: number.to_owned(),
        course_title: format!("Title of {number}"),
        description: format!("Description of {number}"),
        prerequisites: prerequisites.map(str::to_owned),
        instructors: Vec::new(),
    }
}

/// Attach instructors to a course.
pub fn with_instructors(
    mut course: CourseCandidate,
    instructors: Vec<InstructorCandidate>,
) -> CourseCandidate {
    course.instructors = instructors;
    course
}

/// A named instructor with the given quality score.
pub fn make_instructor(name: &str, quality: Option<f64>) -> InstructorCandidate {
    InstructorCandidate {
        id: Some(name.to_lowercase().replace([' ', '.'], "_")),
        name: Some(name.to_owned()),
        quality_score: quality,
        would_retake_percent: quality.map(|q| q * 20.0),
        difficulty_score: quality.map(|q| 5.0 - q),
        profile_link: None,
    }
}

pub fn completed(courses: &[&str]) -> CompletedCourses {
    courses.iter().collect()
}

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
