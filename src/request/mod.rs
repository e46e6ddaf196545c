//! Request handling around the recommendation filter.
//!
//! The filter itself never fails and never validates; this layer checks the
//! caller's arguments, turns an empty result into [`RequestError::NoEligibleCourses`],
//! and windows the result for repeated "generate another set" requests.

mod batch;
pub mod errors;

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use ts_rs::TS;

use crate::recommend::{CompletedCourses, CourseCandidate, Recommendation, recommend};
use crate::utils::{fmt_duration, log_if_slow};

pub use batch::Batches;
pub use errors::{BatchError, RequestError};

pub const MIN_COURSES: i64 = 1;
pub const MAX_COURSES: i64 = 5;

/// Further windows a student may request after the first.
pub const MAX_REGENERATIONS: usize = 3;

/// A student's request for course recommendations.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RecommendationRequest {
    /// Courses per window, 1-5.
    pub num_courses: i64,
    /// Completed course numbers, any case.
    pub taken_courses: Vec<String>,
}

/// A request whose arguments have been checked.
#[derive(Debug, Clone)]
pub struct ValidatedRequest {
    pub count: usize,
    pub completed: CompletedCourses,
}

impl RecommendationRequest {
    pub fn validate(&self) -> Result<ValidatedRequest, RequestError> {
        if !(MIN_COURSES..=MAX_COURSES).contains(&self.num_courses) {
            return Err(RequestError::InvalidCount(self.num_courses));
        }
        Ok(ValidatedRequest {
            count: self.num_courses as usize,
            completed: self.taken_courses.iter().collect(),
        })
    }
}

/// Validate `request`, run the filter over `catalog`, and window the result.
#[instrument(
    skip_all,
    fields(num_courses = request.num_courses, taken = request.taken_courses.len())
)]
pub fn handle(
    catalog: &[CourseCandidate],
    request: &RecommendationRequest,
) -> Result<Batches, RequestError> {
    let validated = request.validate().inspect_err(|e| warn!(error = %e, "rejected request"))?;

    if catalog.is_empty() {
        return Err(RequestError::EmptyCatalog);
    }

    let start = Instant::now();
    let recommendations: Vec<Recommendation> =
        recommend(catalog, &validated.completed, validated.count);
    log_if_slow(start, Duration::from_millis(50), "recommendation filter");

    if recommendations.is_empty() {
        info!("no eligible courses");
        return Err(RequestError::NoEligibleCourses);
    }

    info!(
        recommendations = recommendations.len(),
        duration = fmt_duration(start.elapsed()),
        "recommendations generated"
    );
    Ok(Batches::new(recommendations, validated.count))
}
