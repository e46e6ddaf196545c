//! Stored course and professor documents.
//!
//! Field names follow the document store the catalog is exported from
//! (`snake_case`, professor key `_id`).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

fn default_prerequisites() -> String {
    "null".to_owned()
}

/// A course document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CourseRecord {
    /// e.g. `"CSC 101"`
    pub course_number: String,
    pub course_title: String,
    /// Free text such as `"CSC 101 and CSC 215"`, or `"null"`.
    #[serde(default = "default_prerequisites")]
    pub prerequisites: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Professor references: an `_id`, or a professor name for older imports.
    #[serde(default)]
    pub professors: Vec<String>,
}

/// A professor document with RateMyProfessors-style ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProfessorRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Course numbers this professor teaches, e.g. `["CSC 101", "CSC 256"]`.
    #[serde(default)]
    pub courses_offered: Vec<String>,
    #[serde(default)]
    pub overall_quality: Option<f64>,
    #[serde(default)]
    pub would_take_again: Option<f64>,
    #[serde(default)]
    pub difficulty: Option<f64>,
    #[serde(default)]
    pub rmp_link: Option<String>,
}

/// Treat a 0 rating as "no data", returning `None`. Preserves meaningful values.
///
/// Spreadsheet imports write `0` for empty cells, so a literal zero carries no
/// information.
pub fn sanitize_rating(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v != 0.0)
}

/// Treat an empty link as absent.
pub fn sanitize_link(link: Option<&str>) -> Option<String> {
    link.map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_owned)
}

/// A course together with its resolved professor documents.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct CourseDetails {
    #[serde(flatten)]
    pub course: CourseRecord,
    pub professor_details: Vec<ProfessorRecord>,
}

/// Courses taught by one professor.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct ProfessorCourses {
    pub professor: ProfessorSummary,
    pub courses: Vec<CourseRecord>,
}

/// Minimal professor identity; `name` is `"Unknown"` when the record is missing.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ProfessorSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}
