//! Prerequisite text classification and satisfaction.
//!
//! Prerequisites are free text such as `"CSC 101 and CSC 215"` or
//! `"CSC 101 or CSC 110"`. There is no grammar: the text is classified by the
//! first delimiter found (AND before OR), and course numbers are pulled out
//! with an ASCII-only `[A-Z]+ [0-9]+` pattern. Mixed AND/OR text is not parsed
//! as a boolean expression; it falls into the AND branch.
//!
//! Anything that yields no course number is treated as unsatisfiable, so
//! ambiguous text never makes a course eligible.

use std::sync::LazyLock;

use regex::Regex;

use super::types::CompletedCourses;

static AND_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+AND\s+").unwrap());
static OR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+OR\s+").unwrap());
static COURSE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([A-Z]+)\s+([0-9]+)").unwrap());

/// How a course's prerequisite text was interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prerequisite {
    /// No prerequisites at all.
    None,
    /// Every clause must be satisfied. A clause with no course number is `None`.
    All(Vec<Option<String>>),
    /// At least one clause must be satisfied.
    Any(Vec<Option<String>>),
    /// No delimiter; every course number found must be satisfied.
    Courses(Vec<String>),
    /// Text present but no course number could be extracted.
    Unparseable,
}

impl Prerequisite {
    /// Classify prerequisite text. `None`, empty, and `"null"` mean no prerequisites.
    pub fn parse(text: Option<&str>) -> Self {
        let Some(text) = text.map(str::trim) else {
            return Self::None;
        };
        if text.is_empty() || text.eq_ignore_ascii_case("null") {
            return Self::None;
        }

        let upper = text.to_uppercase();

        if AND_RE.is_match(&upper) {
            return Self::All(AND_RE.split(&upper).map(first_course).collect());
        }

        if OR_RE.is_match(&upper) {
            return Self::Any(OR_RE.split(&upper).map(first_course).collect());
        }

        let courses: Vec<String> = COURSE_RE
            .captures_iter(&upper)
            .map(|caps| format!("{} {}", &caps[1], &caps[2]))
            .collect();

        if courses.is_empty() {
            Self::Unparseable
        } else {
            Self::Courses(courses)
        }
    }

    /// Whether a student who completed `completed` may take the course.
    pub fn is_satisfied_by(&self, completed: &CompletedCourses) -> bool {
        let taken = |course: &Option<String>| {
            course
                .as_deref()
                .is_some_and(|c| completed.contains_normalized(c))
        };

        match self {
            Self::None => true,
            Self::All(clauses) => clauses.iter().all(taken),
            Self::Any(clauses) => clauses.iter().any(taken),
            Self::Courses(courses) => courses.iter().all(|c| completed.contains_normalized(c)),
            Self::Unparseable => false,
        }
    }
}

/// First course number in an (already uppercased) clause, single-spaced.
fn first_course(clause: &str) -> Option<String> {
    COURSE_RE
        .captures(clause)
        .map(|caps| format!("{} {}", &caps[1], &caps[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(courses: &[&str]) -> CompletedCourses {
        courses.iter().collect()
    }

    fn is_eligible(text: Option<&str>, completed: &CompletedCourses) -> bool {
        Prerequisite::parse(text).is_satisfied_by(completed)
    }

    #[test]
    fn test_parse_absent_markers() {
        assert_eq!(Prerequisite::parse(None), Prerequisite::None);
        assert_eq!(Prerequisite::parse(Some("")), Prerequisite::None);
        assert_eq!(Prerequisite::parse(Some("null")), Prerequisite::None);
    }

    #[test]
    fn test_parse_and() {
        assert_eq!(
            Prerequisite::parse(Some("CSC 101 and CSC 215")),
            Prerequisite::All(vec![Some("CSC 101".into()), Some("CSC 215".into())])
        );
    }

    #[test]
    fn test_parse_or() {
        assert_eq!(
            Prerequisite::parse(Some("csc 101 or  csc 110")),
            Prerequisite::Any(vec![Some("CSC 101".into()), Some("CSC 110".into())])
        );
    }

    #[test]
    fn test_parse_and_clause_without_course() {
        assert_eq!(
            Prerequisite::parse(Some("CSC 101 and consent of instructor")),
            Prerequisite::All(vec![Some("CSC 101".into()), None])
        );
    }

    #[test]
    fn test_parse_plain_list() {
        assert_eq!(
            Prerequisite::parse(Some("CSC 101, MATH 226")),
            Prerequisite::Courses(vec!["CSC 101".into(), "MATH 226".into()])
        );
        assert_eq!(
            Prerequisite::parse(Some("Completion of CSC 101")),
            Prerequisite::Courses(vec!["CSC 101".into()])
        );
    }

    #[test]
    fn test_parse_unparseable() {
        assert_eq!(
            Prerequisite::parse(Some("Permission of the department")),
            Prerequisite::Unparseable
        );
    }

    #[test]
    fn test_and_takes_priority_over_or() {
        // "A or B and C" splits on AND: clauses "A or B" (first course A) and "C"
        let prereq = Prerequisite::parse(Some("CSC 101 or CSC 110 and CSC 215"));
        assert_eq!(
            prereq,
            Prerequisite::All(vec![Some("CSC 101".into()), Some("CSC 215".into())])
        );
        assert!(!prereq.is_satisfied_by(&completed(&["CSC 110", "CSC 215"])));
        assert!(prereq.is_satisfied_by(&completed(&["CSC 101", "CSC 215"])));
    }

    #[test]
    fn test_and_requires_every_clause() {
        let text = Some("CSC 101 and CSC 215");
        assert!(!is_eligible(text, &completed(&[])));
        assert!(!is_eligible(text, &completed(&["CSC 101"])));
        assert!(is_eligible(text, &completed(&["CSC 101", "CSC 215"])));
    }

    #[test]
    fn test_and_clause_without_course_is_unsatisfied() {
        let text = Some("CSC 101 and consent of instructor");
        assert!(!is_eligible(text, &completed(&["CSC 101"])));
    }

    #[test]
    fn test_or_requires_one_clause() {
        let text = Some("CSC 101 or CSC 110");
        assert!(!is_eligible(text, &completed(&[])));
        assert!(is_eligible(text, &completed(&["CSC 110"])));
        assert!(is_eligible(text, &completed(&["csc 101"])));
    }

    #[test]
    fn test_unparseable_fails_closed() {
        let text = Some("Senior standing");
        assert!(!is_eligible(text, &completed(&["CSC 101", "CSC 215"])));
    }

    #[test]
    fn test_non_ascii_digits_fail_closed() {
        let text = Some("CSC \u{0661}\u{0660}\u{0661}");
        assert_eq!(Prerequisite::parse(text), Prerequisite::Unparseable);
        assert!(!is_eligible(text, &completed(&["CSC \u{0661}\u{0660}\u{0661}"])));
        assert!(!is_eligible(text, &completed(&["CSC 101"])));
    }

    #[test]
    fn test_none_always_eligible() {
        for text in [None, Some(""), Some("null")] {
            assert!(is_eligible(text, &completed(&[])));
            assert!(is_eligible(text, &completed(&["CSC 101"])));
        }
    }

    #[test]
    fn test_and_is_monotone() {
        let text = Some("CSC 101 and CSC 215 and MATH 226");
        let mut taken = CompletedCourses::new();
        let mut was_eligible = is_eligible(text, &taken);
        for course in ["CSC 101", "CSC 215", "MATH 226", "CSC 340"] {
            taken.insert(course);
            let now = is_eligible(text, &taken);
            assert!(!was_eligible || now, "adding {course} revoked eligibility");
            was_eligible = now;
        }
        assert!(was_eligible);
    }
}
