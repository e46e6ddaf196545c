use std::time::{Duration, Instant};

/// Format a `Duration` as a human-readable string with automatic unit scaling.
///
/// Produces output like `1.94ms`, `2.34s`, `150.00µs` using Rust's Debug format.
pub fn fmt_duration(d: Duration) -> String {
    format!("{d:.2?}")
}

/// Log a warning if the elapsed time since `start` exceeds `threshold`.
pub fn log_if_slow(start: Instant, threshold: Duration, label: &str) {
    let elapsed = start.elapsed();
    if elapsed > threshold {
        tracing::warn!(duration = fmt_duration(elapsed), "slow operation: {label}");
    }
}

/// Collapse runs of whitespace into single spaces and trim.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Canonical lookup key for a course number: uppercase, single-spaced.
///
/// `" csc   101"` -> `"CSC 101"`
pub fn normalize_course_number(s: &str) -> String {
    collapse_whitespace(s).to_uppercase()
}

/// Numeric level of a course number: the first run of digits.
///
/// `"CSC 101"` -> `Some(101)`, `"CSC"` -> `None`
pub fn course_level(course_number: &str) -> Option<u32> {
    let start = course_number.find(|c: char| c.is_ascii_digit())?;
    let digits = &course_number[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_course_number() {
        assert_eq!(normalize_course_number("csc 101"), "CSC 101");
        assert_eq!(normalize_course_number("  Csc\t 215 "), "CSC 215");
        assert_eq!(normalize_course_number(""), "");
    }

    #[test]
    fn test_course_level() {
        assert_eq!(course_level("CSC 101"), Some(101));
        assert_eq!(course_level("CSC 0340"), Some(340));
        assert_eq!(course_level("MATH 226L"), Some(226));
        assert_eq!(course_level("CSC"), None);
        assert_eq!(course_level(""), None);
    }

    #[test]
    fn test_fmt_duration() {
        assert_eq!(fmt_duration(Duration::from_millis(1500)), "1.50s");
    }
}
