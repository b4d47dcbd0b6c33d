//! Bucket Updater
//!
//! The per-answer state machine. States are bucket numbers; there is no
//! terminal state, so a card can cycle between buckets indefinitely.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::assignment::{BucketAssignment, MAX_BUCKET};
use super::error::{Result, SchedulerError};
use crate::card::{AnswerDifficulty, Flashcard};

/// A card's move from one bucket to another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketTransition {
    /// Bucket before the answer
    pub from: usize,
    /// Bucket after the answer
    pub to: usize,
}

impl BucketTransition {
    /// Card moved to a less frequently reviewed bucket
    pub fn is_promotion(&self) -> bool {
        self.to > self.from
    }

    /// Card moved to a more frequently reviewed bucket
    pub fn is_demotion(&self) -> bool {
        self.to < self.from
    }
}

/// Compute the bucket a card moves to after an answer.
///
/// - `Wrong` resets to bucket 0
/// - `Hard` demotes one bucket, never below 0
/// - `Easy` promotes one bucket, up to [`MAX_BUCKET`]
pub fn next_bucket(current: usize, difficulty: AnswerDifficulty) -> Result<usize> {
    match difficulty {
        AnswerDifficulty::Wrong => Ok(0),
        AnswerDifficulty::Hard => Ok(current.saturating_sub(1)),
        AnswerDifficulty::Easy => {
            let next = current.saturating_add(1);
            if next > MAX_BUCKET {
                return Err(SchedulerError::BucketOutOfRange(next));
            }
            Ok(next)
        }
    }
}

/// Move `card` to its next bucket based on `difficulty`.
///
/// The card must already be filed in the assignment; an untracked card is
/// reported as [`SchedulerError::CardNotFound`] and nothing changes.
pub fn update(
    assignment: &mut BucketAssignment,
    card: &Flashcard,
    difficulty: AnswerDifficulty,
) -> Result<BucketTransition> {
    let Some(from) = assignment.bucket_of(card) else {
        warn!(front = card.front(), %difficulty, "Rejected update for untracked card");
        return Err(SchedulerError::CardNotFound {
            front: card.front().to_string(),
        });
    };

    let to = next_bucket(from, difficulty)?;
    assignment.insert(to, card.clone());

    debug!(front = card.front(), %difficulty, from, to, "Card moved");

    Ok(BucketTransition { from, to })
}
