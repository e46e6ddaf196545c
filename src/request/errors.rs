//! Error types for recommendation requests.

use super::{MAX_COURSES, MAX_REGENERATIONS, MIN_COURSES};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error(
        "numCourses must be between {min} and {max}, got {0}",
        min = MIN_COURSES,
        max = MAX_COURSES
    )]
    InvalidCount(i64),
    #[error("no courses found in the catalog")]
    EmptyCatalog,
    #[error("no eligible courses found that match your criteria")]
    NoEligibleCourses,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BatchError {
    #[error("maximum number of regenerations ({max}) reached", max = MAX_REGENERATIONS)]
    LimitReached,
    #[error("no more recommendations available")]
    Exhausted,
}
