//! Course catalog: stored documents, read queries, and candidate assembly.

mod assemble;
pub mod errors;
pub mod json;
pub mod models;

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::recommend::UNKNOWN_INSTRUCTOR;
use crate::utils::normalize_course_number;

pub use assemble::{AssemblyOptions, DEFAULT_BACKUP_POOL_SIZE};
pub use errors::CatalogError;
pub use models::{
    CourseDetails, CourseRecord, ProfessorCourses, ProfessorRecord, ProfessorSummary,
};

/// Every course and professor document, as exported from the document store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    courses: Vec<CourseRecord>,
    #[serde(default)]
    professors: Vec<ProfessorRecord>,
}

impl Catalog {
    pub fn new(courses: Vec<CourseRecord>, professors: Vec<ProfessorRecord>) -> Self {
        Self {
            courses,
            professors,
        }
    }

    /// Load a catalog file (`{"courses": [...], "professors": [...]}`).
    #[instrument]
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let body = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&body)?;
        info!(
            courses = catalog.courses.len(),
            professors = catalog.professors.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_json(body: &str) -> Result<Self, CatalogError> {
        json::parse_json_with_context(body)
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// All course documents in stored order.
    pub fn courses(&self) -> &[CourseRecord] {
        &self.courses
    }

    /// All professor documents in stored order.
    pub fn professors(&self) -> &[ProfessorRecord] {
        &self.professors
    }

    pub fn professor(&self, id: &str) -> Option<&ProfessorRecord> {
        self.professors.iter().find(|p| p.id == id)
    }

    /// Resolve a course's professor reference: by `_id` first, then by exact name.
    pub(crate) fn resolve_professor<'a>(
        &'a self,
        by_id: &HashMap<&str, &'a ProfessorRecord>,
        reference: &str,
    ) -> Option<&'a ProfessorRecord> {
        by_id
            .get(reference)
            .copied()
            .or_else(|| self.professors.iter().find(|p| p.name == reference))
    }

    pub(crate) fn professors_by_id(&self) -> HashMap<&str, &ProfessorRecord> {
        self.professors.iter().map(|p| (p.id.as_str(), p)).collect()
    }

    /// Find a course by course number (case-insensitive) with its professors resolved.
    pub fn course(&self, identifier: &str) -> Option<CourseDetails> {
        let key = normalize_course_number(identifier);
        let course = self
            .courses
            .iter()
            .find(|c| normalize_course_number(&c.course_number) == key)?;

        let by_id = self.professors_by_id();
        let professor_details = course
            .professors
            .iter()
            .filter_map(|reference| self.resolve_professor(&by_id, reference))
            .cloned()
            .collect();

        Some(CourseDetails {
            course: course.clone(),
            professor_details,
        })
    }

    /// Courses listing `professor_id` among their professors.
    ///
    /// Returns `None` when no course references the professor. A missing professor
    /// document is reported as `"Unknown"`.
    pub fn professor_courses(&self, professor_id: &str) -> Option<ProfessorCourses> {
        let professor = self.professor(professor_id);

        let courses: Vec<CourseRecord> = self
            .courses
            .iter()
            .filter(|c| {
                c.professors.iter().any(|reference| {
                    reference == professor_id || professor.is_some_and(|p| *reference == p.name)
                })
            })
            .cloned()
            .collect();

        if courses.is_empty() {
            debug!(professor_id, "no courses reference professor");
            return None;
        }

        let professor = match professor {
            Some(p) => ProfessorSummary {
                id: p.id.clone(),
                name: p.name.clone(),
            },
            None => ProfessorSummary {
                id: professor_id.to_owned(),
                name: UNKNOWN_INSTRUCTOR.to_owned(),
            },
        };

        Some(ProfessorCourses { professor, courses })
    }
}
