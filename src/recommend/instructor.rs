//! Best-instructor selection for a recommended course.

use super::types::InstructorCandidate;

/// Pick the highest-rated instructor, or the `"Unknown"` placeholder.
///
/// Unnamed, `"Unknown"`, and unrated entries are ignored. Ties on quality go to
/// the instructor listed first.
pub fn select_instructor(instructors: &[InstructorCandidate]) -> InstructorCandidate {
    let mut best: Option<(&InstructorCandidate, f64)> = None;

    for instructor in instructors.iter().filter(|i| i.is_rated()) {
        let Some(quality) = instructor.quality_score else {
            continue;
        };
        match best {
            Some((_, best_quality)) if quality <= best_quality => {}
            _ => best = Some((instructor, quality)),
        }
    }

    best.map(|(instructor, _)| instructor.clone())
        .unwrap_or_else(InstructorCandidate::unknown)
}
