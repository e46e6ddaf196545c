//! Level-bucketed justification text attached to each recommendation.

use crate::utils::course_level;

/// Tone bucket chosen from a course's numeric level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelTier {
    /// Below 300.
    Foundational,
    /// 300 up to (not including) 500.
    Intermediate,
    /// 500 and above.
    Advanced,
}

impl LevelTier {
    pub fn from_level(level: u32) -> Self {
        match level {
            0..300 => Self::Foundational,
            300..500 => Self::Intermediate,
            _ => Self::Advanced,
        }
    }

    /// Tier for a course number. Numbers without digits are treated as advanced.
    pub fn for_course(course_number: &str) -> Self {
        course_level(course_number).map_or(Self::Advanced, Self::from_level)
    }
}

/// Build the justification for recommending `course_title`.
///
/// `prerequisites` is the verbatim prerequisite text, or `None` when the course
/// has none; the closing sentence only appears when it is `Some`.
pub fn justify(course_number: &str, course_title: &str, prerequisites: Option<&str>) -> String {
    let mut text = match LevelTier::for_course(course_number) {
        LevelTier::Foundational => format!(
            "This is a foundational course that builds on your previous coursework. \
             {course_title} provides essential knowledge for more advanced topics."
        ),
        LevelTier::Intermediate => format!(
            "Having completed your introductory courses, {course_title} offers more \
             specialized knowledge that expands your expertise."
        ),
        LevelTier::Advanced => format!(
            "This advanced course builds on your strong foundation and will provide \
             specialized knowledge in {course_title}."
        ),
    };

    if let Some(prereqs) = prerequisites {
        text.push_str(&format!(
            " You've completed the prerequisites ({prereqs}), making this a natural next step."
        ));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(LevelTier::from_level(101), LevelTier::Foundational);
        assert_eq!(LevelTier::from_level(299), LevelTier::Foundational);
        assert_eq!(LevelTier::from_level(300), LevelTier::Intermediate);
        assert_eq!(LevelTier::from_level(499), LevelTier::Intermediate);
        assert_eq!(LevelTier::from_level(500), LevelTier::Advanced);
        assert_eq!(LevelTier::from_level(899), LevelTier::Advanced);
    }

    #[test]
    fn test_tier_for_course_without_digits() {
        assert_eq!(LevelTier::for_course("CSC"), LevelTier::Advanced);
    }

    #[test]
    fn test_justify_tone_by_level() {
        assert!(justify("CSC 101", "Intro", None).contains("foundational"));
        assert!(justify("CSC 340", "Programming Methodology", None).contains("introductory"));
        assert!(justify("CSC 600", "Compilers", None).contains("advanced"));
    }

    #[test]
    fn test_prerequisite_clause_only_when_present() {
        let without = justify("CSC 215", "Intermediate Programming", None);
        assert!(!without.contains("prerequisites"));

        let with = justify("CSC 215", "Intermediate Programming", Some("CSC 101"));
        assert!(with.contains("(CSC 101)"));
        assert!(with.starts_with(&without));
    }

    #[test]
    fn test_justify_is_deterministic() {
        let a = justify("CSC 413", "Software Development", Some("CSC 340 and CSC 256"));
        let b = justify("CSC 413", "Software Development", Some("CSC 340 and CSC 256"));
        assert_eq!(a, b);
    }
}
