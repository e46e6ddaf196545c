//! Windowing over a recommendation list for "generate another set".

use super::MAX_REGENERATIONS;
use super::errors::BatchError;
use crate::recommend::Recommendation;

/// Hands out successive `count`-sized windows of one recommendation list.
///
/// The first window is free; at most [`MAX_REGENERATIONS`] more may be taken.
#[derive(Debug, Clone)]
pub struct Batches {
    recommendations: Vec<Recommendation>,
    count: usize,
    next: usize,
    regenerations: usize,
}

impl Batches {
    pub fn new(recommendations: Vec<Recommendation>, count: usize) -> Self {
        Self {
            recommendations,
            count: count.max(1),
            next: 0,
            regenerations: 0,
        }
    }

    /// The first window; repeated calls return the same slice.
    pub fn initial(&self) -> &[Recommendation] {
        let end = self.count.min(self.recommendations.len());
        &self.recommendations[..end]
    }

    /// Advance to the next window.
    pub fn generate_another(&mut self) -> Result<&[Recommendation], BatchError> {
        if self.regenerations >= MAX_REGENERATIONS {
            return Err(BatchError::LimitReached);
        }

        let start = self.next.max(self.count);
        if start >= self.recommendations.len() {
            return Err(BatchError::Exhausted);
        }

        let end = (start + self.count).min(self.recommendations.len());
        self.next = end;
        self.regenerations += 1;
        Ok(&self.recommendations[start..end])
    }

    /// Window number `index` (0 = initial), without consuming regenerations.
    ///
    /// Fails the same way [`Batches::generate_another`] would after `index` calls.
    pub fn window(&self, index: usize) -> Result<&[Recommendation], BatchError> {
        if index > MAX_REGENERATIONS {
            return Err(BatchError::LimitReached);
        }
        let start = index.saturating_mul(self.count);
        if start >= self.recommendations.len() {
            return Err(BatchError::Exhausted);
        }
        let end = (start + self.count).min(self.recommendations.len());
        Ok(&self.recommendations[start..end])
    }

    pub fn all(&self) -> &[Recommendation] {
        &self.recommendations
    }
}
