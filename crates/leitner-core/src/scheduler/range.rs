//! Range Analyzer

use serde::{Deserialize, Serialize};

use crate::card::CardSet;

/// Span of occupied buckets, as 1-based positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketRange {
    /// 1-based position of the lowest non-empty bucket
    pub min_bucket: usize,
    /// 1-based position of the highest non-empty bucket
    pub max_bucket: usize,
}

impl BucketRange {
    /// Number of positions covered, empty ones in between included
    pub fn span(&self) -> usize {
        self.max_bucket - self.min_bucket + 1
    }

    /// Check whether a 1-based position falls inside the range
    pub fn contains(&self, position: usize) -> bool {
        (self.min_bucket..=self.max_bucket).contains(&position)
    }
}

impl std::fmt::Display for BucketRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.min_bucket, self.max_bucket)
    }
}

/// Find the lowest and highest non-empty positions of a bucket sequence.
///
/// Positions are 1-based (index 0 is position 1). Returns `None` when the
/// sequence is empty or every set in it is empty.
pub fn get_bucket_range(sequence: &[CardSet]) -> Option<BucketRange> {
    let min = sequence.iter().position(|set| !set.is_empty())?;
    let max = sequence.iter().rposition(|set| !set.is_empty())?;

    Some(BucketRange {
        min_bucket: min + 1,
        max_bucket: max + 1,
    })
}
