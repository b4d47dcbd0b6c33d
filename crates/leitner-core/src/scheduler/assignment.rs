//! Bucket Assignment
//!
//! Sparse mapping from bucket number to the cards filed there. Keys need not
//! be contiguous or start at 0. A card is filed in at most one bucket.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::error::{Result, SchedulerError};
use crate::card::{CardSet, Flashcard};

/// Highest bucket number an assignment accepts.
///
/// Bucket `i` is due every `2^i` days, so buckets past 62 are never due on a
/// positive day; the ceiling keeps dense views bounded.
pub const MAX_BUCKET: usize = 4096;

/// Which bucket each card currently lives in
///
/// Iteration order over buckets is unspecified. Use
/// [`to_bucket_sets`](super::to_bucket_sets) for an ordered, dense view.
///
/// Buckets that become empty after a card moves out are kept, so a
/// serialize/deserialize round trip reproduces the exact key set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "HashMap<usize, CardSet>",
    into = "HashMap<usize, CardSet>"
)]
pub struct BucketAssignment {
    buckets: HashMap<usize, CardSet>,
}

impl BucketAssignment {
    /// Create an empty assignment
    pub fn new() -> Self {
        Self::default()
    }

    /// File `card` in `bucket`, moving it out of whatever bucket held it.
    ///
    /// Returns the previous bucket, if the card was already tracked.
    ///
    /// # Panics
    ///
    /// Panics if `bucket` is greater than [`MAX_BUCKET`].
    pub fn insert(&mut self, bucket: usize, card: Flashcard) -> Option<usize> {
        assert!(
            bucket <= MAX_BUCKET,
            "bucket {bucket} exceeds MAX_BUCKET ({MAX_BUCKET})"
        );
        let previous = self.remove(&card);
        self.buckets.entry(bucket).or_default().insert(card);
        previous
    }

    /// Take `card` out of its bucket. The (possibly now empty) bucket stays.
    pub fn remove(&mut self, card: &Flashcard) -> Option<usize> {
        let bucket = self.bucket_of(card)?;
        if let Some(set) = self.buckets.get_mut(&bucket) {
            set.remove(card);
        }
        Some(bucket)
    }

    /// The bucket currently holding `card`
    pub fn bucket_of(&self, card: &Flashcard) -> Option<usize> {
        self.buckets
            .iter()
            .find(|(_, set)| set.contains(card))
            .map(|(bucket, _)| *bucket)
    }

    /// Check if `card` is filed anywhere
    pub fn contains(&self, card: &Flashcard) -> bool {
        self.bucket_of(card).is_some()
    }

    /// Cards stored under `bucket`, if the key exists
    pub fn cards_in(&self, bucket: usize) -> Option<&CardSet> {
        self.buckets.get(&bucket)
    }

    /// Highest bucket key present (empty buckets included)
    pub fn max_bucket(&self) -> Option<usize> {
        self.buckets.keys().copied().max()
    }

    /// Number of distinct cards tracked
    pub fn len(&self) -> usize {
        self.buckets.values().map(|set| set.len()).sum()
    }

    /// True when no card is tracked
    pub fn is_empty(&self) -> bool {
        self.buckets.values().all(|set| set.is_empty())
    }

    /// Number of bucket keys present
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Iterate `(bucket, cards)` pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &CardSet)> {
        self.buckets.iter().map(|(bucket, set)| (*bucket, set))
    }

    /// Iterate every tracked card with its bucket
    pub fn cards(&self) -> impl Iterator<Item = (usize, &Flashcard)> {
        self.iter()
            .flat_map(|(bucket, set)| set.iter().map(move |card| (bucket, card)))
    }
}

impl TryFrom<HashMap<usize, CardSet>> for BucketAssignment {
    type Error = SchedulerError;

    fn try_from(buckets: HashMap<usize, CardSet>) -> Result<Self> {
        if let Some(bucket) = buckets.keys().copied().find(|b| *b > MAX_BUCKET) {
            return Err(SchedulerError::BucketOutOfRange(bucket));
        }
        {
            let mut seen: HashMap<&Flashcard, usize> = HashMap::new();
            for (bucket, set) in &buckets {
                for card in set {
                    if let Some(first) = seen.insert(card, *bucket) {
                        return Err(SchedulerError::DuplicateCard {
                            front: card.front().to_string(),
                            first: first.min(*bucket),
                            second: first.max(*bucket),
                        });
                    }
                }
            }
        }
        Ok(Self { buckets })
    }
}

impl From<BucketAssignment> for HashMap<usize, CardSet> {
    fn from(assignment: BucketAssignment) -> Self {
        assignment.buckets
    }
}

// ============================================================================
// TESTS
// ============================================================================
