//! Day Selector
//!
//! Classic Leitner cadence: bucket 0 every day, bucket 1 every 2nd day,
//! bucket `i` every `2^i`-th day. A day of zero or below reviews everything.

use tracing::{debug, trace};

use crate::card::CardSet;

/// Check whether the bucket at 0-based `index` is due on `day`.
///
/// Due when `day <= 0`, when `index == 0`, or when `day mod 2^index == 0`.
#[inline]
pub fn is_bucket_due(index: usize, day: i64) -> bool {
    if day <= 0 || index == 0 {
        return true;
    }
    // day > 0 here, so day mod 2^index == 0 exactly when the low `index` bits
    // are clear. Indices past the width of i64 are never due.
    (day.trailing_zeros() as usize) >= index
}

/// Indices of the buckets due on `day` among the first `len` positions
pub fn due_buckets(len: usize, day: i64) -> Vec<usize> {
    (0..len).filter(|&index| is_bucket_due(index, day)).collect()
}

/// Select every card due for review on `day`.
///
/// Returns the union of all due buckets. An empty sequence, or one with only
/// empty buckets, yields an empty set.
pub fn practice(sequence: &[CardSet], day: i64) -> CardSet {
    let mut due = CardSet::new();
    let mut due_count = 0usize;

    for (index, set) in sequence.iter().enumerate() {
        if is_bucket_due(index, day) {
            trace!(bucket = index, day, cards = set.len(), "Bucket due");
            due_count += 1;
            due.extend(set.iter().cloned());
        }
    }

    debug!(
        day,
        buckets = sequence.len(),
        due_buckets = due_count,
        cards = due.len(),
        "Selected practice set"
    );

    due
}
