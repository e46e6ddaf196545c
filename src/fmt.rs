//! Human-readable terminal output for recommendations and catalog records.

use std::fmt::Write;

use yansi::Paint;

use crate::catalog::{CourseDetails, CourseRecord, ProfessorCourses, ProfessorRecord};
use crate::recommend::Recommendation;

/// Format an optional score, `"n/a"` when absent.
fn score(value: Option<f64>, scale: &str) -> String {
    match value {
        Some(v) => format!("{v:.1}{scale}"),
        None => "n/a".to_string(),
    }
}

/// Render one window of recommendations. `batch` is 0 for the initial set.
pub fn recommendations(window: &[Recommendation], batch: usize, total: usize) -> String {
    let mut out = String::new();
    let heading = if batch == 0 {
        format!("Recommended courses ({} of {total})", window.len())
    } else {
        format!("Recommended courses, set {} ({} of {total})", batch + 1, window.len())
    };
    let _ = writeln!(out, "{}", heading.bold());

    for rec in window {
        let _ = writeln!(
            out,
            "\n{} {}",
            rec.course_number.as_str().cyan().bold(),
            rec.course_title
        );
        let _ = writeln!(out, "  Prerequisites: {}", rec.prerequisite_expression);
        let _ = writeln!(
            out,
            "  Instructor:    {} (quality {}, would retake {}, difficulty {})",
            rec.instructor.as_str().green(),
            score(rec.quality_score, "/5"),
            score(rec.would_retake_percent, "%"),
            score(rec.difficulty_score, "/5"),
        );
        if let Some(link) = &rec.profile_link {
            let _ = writeln!(out, "  Profile:       {}", link.as_str().dim());
        }
        let _ = writeln!(out, "  {}", rec.justification.as_str().italic());
    }
    out
}

/// One line per course.
pub fn course_list(courses: &[CourseRecord]) -> String {
    let mut out = String::new();
    for course in courses {
        let _ = writeln!(
            out,
            "{:<10} {}",
            course.course_number.as_str().cyan(),
            course.course_title
        );
    }
    out
}

pub fn course_details(details: &CourseDetails) -> String {
    let course = &details.course;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}",
        course.course_number.as_str().cyan().bold(),
        course.course_title.as_str().bold()
    );
    let _ = writeln!(out, "Prerequisites: {}", course.prerequisites);
    if let Some(description) = course.description.as_deref().filter(|d| !d.is_empty()) {
        let _ = writeln!(out, "\n{description}");
    }
    if !details.professor_details.is_empty() {
        let _ = writeln!(out, "\nProfessors:");
        for prof in &details.professor_details {
            let _ = writeln!(out, "  {}", professor_line(prof));
        }
    }
    out
}

fn professor_line(prof: &ProfessorRecord) -> String {
    format!(
        "{} [{}] quality {}, would take again {}, difficulty {}",
        prof.name.as_str().green(),
        prof.id,
        score(prof.overall_quality, "/5"),
        score(prof.would_take_again, "%"),
        score(prof.difficulty, "/5"),
    )
}

pub fn professor_list(professors: &[ProfessorRecord]) -> String {
    let mut out = String::new();
    for prof in professors {
        let _ = writeln!(out, "{}", professor_line(prof));
    }
    out
}

pub fn professor(prof: &ProfessorRecord) -> String {
    let mut out = professor_line(prof);
    out.push('\n');
    if !prof.courses_offered.is_empty() {
        let _ = writeln!(out, "Courses offered: {}", prof.courses_offered.join(", "));
    }
    if let Some(link) = prof.rmp_link.as_deref().filter(|l| !l.is_empty()) {
        let _ = writeln!(out, "Profile: {}", link.dim());
    }
    out
}

pub fn professor_courses(result: &ProfessorCourses) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} [{}] teaches {} course(s):",
        result.professor.name.as_str().green().bold(),
        result.professor.id,
        result.courses.len()
    );
    out.push_str(&course_list(&result.courses));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec() -> Recommendation {
        Recommendation {
            course_number: "CSC 215".to_owned(),
            course_title: "Intermediate Programming".to_owned(),
            description: String::new(),
            prerequisite_expression: "CSC 101".to_owned(),
            instructor: "Dr. A".to_owned(),
            instructor_id: Some("dr_a".to_owned()),
            profile_link: Some("https://example.com/p/1".to_owned()),
            quality_score: Some(4.25),
            would_retake_percent: None,
            difficulty_score: Some(2.0),
            justification: "Because.".to_owned(),
        }
    }

    #[test]
    fn test_score_formatting() {
        assert_eq!(score(Some(4.26), "/5"), "4.3/5");
        assert_eq!(score(None, "%"), "n/a");
    }

    #[test]
    fn test_recommendations_render() {
        let text = recommendations(&[rec()], 0, 3);
        assert!(text.contains("1 of 3"));
        assert!(text.contains("Intermediate Programming"));
        assert!(text.contains("Prerequisites: CSC 101"));
        assert!(text.contains("would retake n/a"));
        assert!(text.contains("https://example.com/p/1"));
    }

    #[test]
    fn test_later_batch_heading() {
        let text = recommendations(&[rec()], 2, 3);
        assert!(text.contains("set 3"));
    }
}
