//! Scheduler Errors

use super::assignment::MAX_BUCKET;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Scheduler error type
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchedulerError {
    /// The card is not filed in any bucket
    #[error("Card not found in any bucket: {front}")]
    CardNotFound {
        /// Front of the missing card
        front: String,
    },
    /// The card is already filed, so it cannot be added again
    #[error("Card already tracked in bucket {bucket}: {front}")]
    AlreadyTracked {
        /// Front of the card
        front: String,
        /// Bucket currently holding the card
        bucket: usize,
    },
    /// The same card was found in two buckets while building an assignment
    #[error("Card filed in both bucket {first} and bucket {second}: {front}")]
    DuplicateCard {
        /// Front of the card
        front: String,
        /// One bucket holding the card
        first: usize,
        /// The other bucket holding the card
        second: usize,
    },
    /// The card was created without a hint
    #[error("No hint stored for card: {front}")]
    NoHint {
        /// Front of the card
        front: String,
    },
    /// Bucket number above [`MAX_BUCKET`]
    #[error("Bucket {0} is out of range (highest bucket is {max})", max = MAX_BUCKET)]
    BucketOutOfRange(usize),
    /// A shared session lock was poisoned by a panicking holder
    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Scheduler result type
pub type Result<T> = std::result::Result<T, SchedulerError>;
