use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::card::{AnswerDifficulty, Flashcard};
use crate::scheduler::BucketTransition;

/// One answered card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    /// The card that was answered
    pub card: Flashcard,
    /// How the learner did
    pub difficulty: AnswerDifficulty,
    /// Practice day the answer belongs to
    pub day: i64,
    /// Bucket before the answer
    pub from_bucket: usize,
    /// Bucket after the answer
    pub to_bucket: usize,
    /// Wall-clock time the answer was recorded
    pub recorded_at: DateTime<Utc>,
}

impl AnswerRecord {
    /// Record an answer now
    pub fn new(
        card: Flashcard,
        difficulty: AnswerDifficulty,
        day: i64,
        transition: BucketTransition,
    ) -> Self {
        Self {
            card,
            difficulty,
            day,
            from_bucket: transition.from,
            to_bucket: transition.to,
            recorded_at: Utc::now(),
        }
    }

    /// The bucket move this answer caused
    pub fn transition(&self) -> BucketTransition {
        BucketTransition {
            from: self.from_bucket,
            to: self.to_bucket,
        }
    }
}
