//! Leitner Scheduler Module
//!
//! The bucket-scheduling core. Cards live in numbered buckets; bucket `i` is
//! reviewed every `2^i` days, so well-known cards come up exponentially less
//! often.
//!
//! ## Pipeline:
//! - [`BucketAssignment`]: sparse bucket number -> card set, owned by the caller
//! - [`to_bucket_sets`]: explicit densification into a [`BucketSequence`]
//! - [`get_bucket_range`]: lowest and highest occupied bucket (1-based)
//! - [`practice`]: union of every bucket due on a given day
//! - [`update`]: move one card after an answer (reset, demote or promote)

mod assignment;
mod error;
mod indexer;
mod practice;
mod range;
mod update;

pub use assignment::{BucketAssignment, MAX_BUCKET};
pub use error::{Result, SchedulerError};
pub use indexer::{to_bucket_sets, BucketSequence};
pub use practice::{due_buckets, is_bucket_due, practice};
pub use range::{get_bucket_range, BucketRange};
pub use update::{next_bucket, update, BucketTransition};
