//! Session Module
//!
//! One learner's scheduling state, owned by the caller rather than held in
//! process-wide globals:
//! - [`LeitnerSession`]: bucket assignment plus answer history
//! - [`SharedSession`]: the same behind a single mutex for concurrent callers

mod record;
mod shared;

pub use record::AnswerRecord;
pub use shared::SharedSession;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::card::{AnswerDifficulty, CardSet, Flashcard};
use crate::progress::{compute_progress_with, ProgressConfig, ProgressSummary};
use crate::scheduler::{
    get_bucket_range, practice, to_bucket_sets, update, BucketAssignment, BucketRange,
    BucketSequence, BucketTransition, Result, SchedulerError,
};

/// A learner's deck and the answers given so far
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeitnerSession {
    assignment: BucketAssignment,
    #[serde(default)]
    history: Vec<AnswerRecord>,
}

impl LeitnerSession {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume a session from an existing assignment, with no history
    pub fn from_assignment(assignment: BucketAssignment) -> Self {
        Self {
            assignment,
            history: Vec::new(),
        }
    }

    /// Start tracking `card` in bucket 0
    pub fn add_card(&mut self, card: Flashcard) -> Result<()> {
        if let Some(bucket) = self.assignment.bucket_of(&card) {
            return Err(SchedulerError::AlreadyTracked {
                front: card.front().to_string(),
                bucket,
            });
        }
        debug!(front = card.front(), "Card added");
        self.assignment.insert(0, card);
        Ok(())
    }

    /// Stop tracking `card`, returning the bucket it was in
    pub fn remove_card(&mut self, card: &Flashcard) -> Result<usize> {
        self.assignment
            .remove(card)
            .ok_or_else(|| SchedulerError::CardNotFound {
                front: card.front().to_string(),
            })
    }

    /// Dense view of the current buckets
    pub fn buckets(&self) -> BucketSequence {
        to_bucket_sets(&self.assignment)
    }

    /// Occupied bucket range, if any card is tracked
    pub fn range(&self) -> Option<BucketRange> {
        get_bucket_range(&self.buckets())
    }

    /// Cards due for review on `day`
    pub fn due(&self, day: i64) -> CardSet {
        practice(&self.buckets(), day)
    }

    /// Apply an answer for `card` given on `day` and record it
    pub fn answer(
        &mut self,
        card: &Flashcard,
        difficulty: AnswerDifficulty,
        day: i64,
    ) -> Result<BucketTransition> {
        let transition = update(&mut self.assignment, card, difficulty)?;
        self.history
            .push(AnswerRecord::new(card.clone(), difficulty, day, transition));
        Ok(transition)
    }

    /// Progress summary including history statistics
    pub fn progress(&self, config: &ProgressConfig) -> ProgressSummary {
        let summary = compute_progress_with(&self.assignment, &self.history, config);
        debug!(
            total_cards = summary.total_cards,
            mastered_cards = summary.mastered_cards,
            answered = self.history.len(),
            "Progress computed"
        );
        summary
    }

    /// The underlying assignment
    pub fn assignment(&self) -> &BucketAssignment {
        &self.assignment
    }

    /// Answers recorded so far, oldest first
    pub fn history(&self) -> &[AnswerRecord] {
        &self.history
    }

    /// Consume the session, keeping only the assignment
    pub fn into_assignment(self) -> BucketAssignment {
        self.assignment
    }
}
