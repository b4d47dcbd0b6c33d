//! # Leitner Core
//!
//! Leitner-box spaced repetition for flashcards:
//!
//! - **Buckets**: every card lives in exactly one numbered bucket
//! - **Cadence**: bucket `i` is reviewed every `2^i` days (bucket 0 daily)
//! - **Transitions**: wrong answers reset to bucket 0, hard answers demote,
//!   easy answers promote without an upper cap
//! - **Progress**: per-bucket occupancy, mastery ratio and answer statistics
//!
//! ## Quick Start
//!
//! ```rust
//! use leitner_core::{practice, to_bucket_sets, update, AnswerDifficulty, BucketAssignment, Flashcard};
//!
//! let card = Flashcard::basic("der Hund", "the dog").with_hint("woof");
//!
//! let mut assignment = BucketAssignment::new();
//! assignment.insert(0, card.clone());
//!
//! // Day 1: bucket 0 is always due
//! let due = practice(&to_bucket_sets(&assignment), 1);
//! assert!(due.contains(&card));
//!
//! // Answered easily, so it moves up to bucket 1
//! let moved = update(&mut assignment, &card, AnswerDifficulty::Easy)?;
//! assert_eq!(moved.to, 1);
//!
//! // Bucket 1 is only due on even days
//! assert!(practice(&to_bucket_sets(&assignment), 3).is_empty());
//! # Ok::<(), leitner_core::SchedulerError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(rustdoc::missing_crate_level_docs)]

// ============================================================================
// MODULES
// ============================================================================

pub mod card;
pub mod primality;
pub mod progress;
pub mod scheduler;
pub mod session;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Card types
pub use card::{get_hint, AnswerDifficulty, CardSet, Flashcard};

// Scheduling core
pub use scheduler::{
    due_buckets,
    get_bucket_range,
    is_bucket_due,
    next_bucket,
    practice,
    // Core functions
    to_bucket_sets,
    update,
    BucketAssignment,
    BucketRange,
    BucketSequence,
    BucketTransition,
    Result,
    MAX_BUCKET,
    SchedulerError,
};

// Progress reporting
pub use progress::{
    compute_progress, compute_progress_with, HistoryStats, ProgressConfig, ProgressSummary,
};

// Sessions
pub use session::{AnswerRecord, LeitnerSession, SharedSession};

// Numeric helpers
pub use primality::{is_prime, is_prime_f64};

// ============================================================================
// VERSION INFO
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// PRELUDE
// ============================================================================

/// Convenient imports for common usage
pub mod prelude {
    pub use crate::{
        AnswerDifficulty, BucketAssignment, CardSet, Flashcard, LeitnerSession, ProgressConfig,
        Result, SchedulerError, SharedSession,
    };
}
