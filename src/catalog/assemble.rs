//! Turning stored documents into [`CourseCandidate`]s for the filter.
//!
//! Each course's professor references are resolved; a course with none left
//! borrows a backup instructor picked at random from the best-rated
//! professors in the catalog. Courses that still have nobody are dropped.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, warn};

use super::Catalog;
use super::models::{ProfessorRecord, sanitize_link, sanitize_rating};
use crate::recommend::{CourseCandidate, InstructorCandidate};

/// Number of top-rated professors eligible to stand in for a course without one.
pub const DEFAULT_BACKUP_POOL_SIZE: usize = 5;

/// Knobs for [`Catalog::candidates`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblyOptions {
    pub backup_pool_size: usize,
    /// Fixed seed for the backup pick; `None` uses the thread RNG.
    pub seed: Option<u64>,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self {
            backup_pool_size: DEFAULT_BACKUP_POOL_SIZE,
            seed: None,
        }
    }
}

impl From<&ProfessorRecord> for InstructorCandidate {
    fn from(prof: &ProfessorRecord) -> Self {
        Self {
            id: Some(prof.id.clone()),
            name: Some(prof.name.clone()),
            quality_score: sanitize_rating(prof.overall_quality),
            would_retake_percent: prof.would_take_again.filter(|v| v.is_finite()),
            difficulty_score: sanitize_rating(prof.difficulty),
            profile_link: sanitize_link(prof.rmp_link.as_deref()),
        }
    }
}

impl Catalog {
    /// Build filter input from the stored documents.
    pub fn candidates(&self, options: AssemblyOptions) -> Vec<CourseCandidate> {
        match options.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                self.candidates_with_rng(options.backup_pool_size, &mut rng)
            }
            None => self.candidates_with_rng(options.backup_pool_size, &mut rand::rng()),
        }
    }

    /// Top `size` professors by quality, best first. Unrated professors never qualify.
    pub fn backup_pool(&self, size: usize) -> Vec<&ProfessorRecord> {
        let mut rated: Vec<(&ProfessorRecord, f64)> = self
            .professors
            .iter()
            .filter_map(|p| sanitize_rating(p.overall_quality).map(|q| (p, q)))
            .collect();
        rated.sort_by(|a, b| b.1.total_cmp(&a.1));
        rated.into_iter().take(size).map(|(p, _)| p).collect()
    }

    #[instrument(skip(self, rng), fields(courses = self.courses.len()))]
    pub fn candidates_with_rng<R: Rng>(
        &self,
        backup_pool_size: usize,
        rng: &mut R,
    ) -> Vec<CourseCandidate> {
        let by_id = self.professors_by_id();
        let backups = self.backup_pool(backup_pool_size);
        debug!(backups = backups.len(), "backup instructor pool built");

        let mut dropped = 0usize;
        let candidates: Vec<CourseCandidate> = self
            .courses
            .iter()
            .filter_map(|course| {
                let mut instructors: Vec<InstructorCandidate> = course
                    .professors
                    .iter()
                    .filter_map(|reference| {
                        let resolved = self.resolve_professor(&by_id, reference);
                        if resolved.is_none() {
                            warn!(
                                course = %course.course_number,
                                reference = %reference,
                                "professor reference not found"
                            );
                        }
                        resolved
                    })
                    .map(InstructorCandidate::from)
                    .collect();

                if instructors.is_empty() && !backups.is_empty() {
                    let backup = backups[rng.random_range(0..backups.len())];
                    debug!(
                        course = %course.course_number,
                        professor = %backup.name,
                        "attached backup instructor"
                    );
                    instructors.push(InstructorCandidate::from(backup));
                }

                if instructors.is_empty() {
                    dropped += 1;
                    return None;
                }

                Some(CourseCandidate {
                    course_number: course.course_number.trim().to_owned(),
                    course_title: course.course_title.trim().to_owned(),
                    description: course.description.clone().unwrap_or_default(),
                    prerequisites: Some(course.prerequisites.clone()),
                    instructors,
                })
            })
            .collect();

        info!(
            candidates = candidates.len(),
            dropped, "course candidates assembled"
        );
        candidates
    }
}
