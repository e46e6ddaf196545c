//! Prerequisite-aware course recommendation.
//!
//! Pipeline: drop completed courses -> drop courses whose prerequisites are not
//! met -> stable sort by course level -> take `3 * count` -> attach the best
//! instructor and a justification.
//!
//! The filter is pure: it reads its arguments, allocates its output, and never
//! fails. An empty result means no course is eligible.

pub mod instructor;
pub mod justification;
pub mod prereq;
pub mod types;

use tracing::{debug, instrument};

use crate::utils::{course_level, normalize_course_number};

pub use instructor::select_instructor;
pub use justification::{LevelTier, justify};
pub use prereq::Prerequisite;
pub use types::{
    CompletedCourses, CourseCandidate, InstructorCandidate, NO_PREREQUISITES, Recommendation,
    UNKNOWN_INSTRUCTOR,
};

/// How many recommendations are produced per requested course, so the caller
/// can offer further batches without recomputing.
pub const BATCH_MULTIPLIER: usize = 3;

/// Whether `course` is open to a student who completed `completed`.
///
/// A course the student already took is never eligible.
pub fn is_eligible(course: &CourseCandidate, completed: &CompletedCourses) -> bool {
    if completed.contains_normalized(&normalize_course_number(&course.course_number)) {
        return false;
    }
    Prerequisite::parse(course.prerequisites.as_deref()).is_satisfied_by(completed)
}

/// Recommend up to `BATCH_MULTIPLIER * count` courses from `catalog`.
///
/// Results are ascending by course level; courses on the same level keep their
/// catalog order. `count` is not validated here.
#[instrument(skip_all, fields(catalog = catalog.len(), completed = completed.len(), count = count))]
pub fn recommend(
    catalog: &[CourseCandidate],
    completed: &CompletedCourses,
    count: usize,
) -> Vec<Recommendation> {
    let mut eligible: Vec<&CourseCandidate> = catalog
        .iter()
        .filter(|course| is_eligible(course, completed))
        .collect();

    debug!(eligible = eligible.len(), "prerequisite filter applied");

    // Courses without a numeric level sort last
    eligible.sort_by_key(|course| course_level(&course.course_number).unwrap_or(u32::MAX));

    let limit = count.saturating_mul(BATCH_MULTIPLIER);
    let mut seen = std::collections::HashSet::new();

    eligible
        .into_iter()
        .filter(|course| seen.insert(normalize_course_number(&course.course_number)))
        .take(limit)
        .map(build_recommendation)
        .collect()
}

fn build_recommendation(course: &CourseCandidate) -> Recommendation {
    let instructor = select_instructor(&course.instructors);
    let prerequisites = course.prerequisite_text();

    Recommendation {
        course_number: course.course_number.clone(),
        course_title: course.course_title.clone(),
        description: course.description.clone(),
        prerequisite_expression: prerequisites.unwrap_or(NO_PREREQUISITES).to_owned(),
        instructor: instructor.name.unwrap_or_else(|| UNKNOWN_INSTRUCTOR.to_owned()),
        instructor_id: instructor.id,
        profile_link: instructor.profile_link,
        quality_score: instructor.quality_score,
        would_retake_percent: instructor.would_retake_percent,
        difficulty_score: instructor.difficulty_score,
        justification: justify(&course.course_number, &course.course_title, prerequisites),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(number: &str, prereq: Option<&str>) -> CourseCandidate {
        CourseCandidate {
            course_number: number.to_owned(),
            course_title: format!("Course {number}"),
            description: String::new(),
            prerequisites: prereq.map(str::to_owned),
            instructors: vec![InstructorCandidate {
                id: Some("dr_a".to_owned()),
                name: Some("Dr. A".to_owned()),
                quality_score: Some(4.0),
                ..Default::default()
            }],
        }
    }

    #[test]
    fn test_completed_course_never_recommended() {
        let catalog = vec![course("CSC 101", None), course("CSC 110", None)];
        let completed: CompletedCourses = ["csc 101"].into_iter().collect();
        let recs = recommend(&catalog, &completed, 5);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].course_number, "CSC 110");
    }

    #[test]
    fn test_duplicate_course_numbers_collapsed() {
        let catalog = vec![course("CSC 101", None), course("csc 101", None)];
        let recs = recommend(&catalog, &CompletedCourses::new(), 5);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].course_number, "CSC 101");
    }

    #[test]
    fn test_missing_level_sorts_last() {
        let catalog = vec![course("CSC TBA", None), course("CSC 600", None)];
        let recs = recommend(&catalog, &CompletedCourses::new(), 1);
        assert_eq!(recs[0].course_number, "CSC 600");
        assert_eq!(recs[1].course_number, "CSC TBA");
    }

    #[test]
    fn test_prerequisite_expression_defaults_to_none() {
        let catalog = vec![course("CSC 101", Some("null"))];
        let recs = recommend(&catalog, &CompletedCourses::new(), 1);
        assert_eq!(recs[0].prerequisite_expression, NO_PREREQUISITES);
        assert!(!recs[0].justification.contains("prerequisites"));
    }

    #[test]
    fn test_zero_count_yields_nothing() {
        let catalog = vec![course("CSC 101", None)];
        assert!(recommend(&catalog, &CompletedCourses::new(), 0).is_empty());
    }

    #[test]
    fn test_recommendation_carries_instructor() {
        let catalog = vec![course("CSC 215", Some("CSC 101"))];
        let completed: CompletedCourses = ["CSC 101"].into_iter().collect();
        let recs = recommend(&catalog, &completed, 1);
        assert_eq!(recs[0].instructor, "Dr. A");
        assert_eq!(recs[0].instructor_id.as_deref(), Some("dr_a"));
        assert_eq!(recs[0].quality_score, Some(4.0));
        assert_eq!(recs[0].prerequisite_expression, "CSC 101");
    }
}
