//! Bucket Indexer
//!
//! Turns the sparse [`BucketAssignment`] into a dense, positionally indexed
//! sequence. Gaps must stay visible as empty sets so range and due-day logic
//! can reason about bucket positions.

use serde::{Deserialize, Serialize};
use std::ops::Deref;

use super::assignment::BucketAssignment;
use crate::card::CardSet;

/// Dense sequence of card sets; index `i` holds exactly the cards in bucket `i`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BucketSequence(Vec<CardSet>);

impl BucketSequence {
    /// Unwrap into the underlying vector
    pub fn into_inner(self) -> Vec<CardSet> {
        self.0
    }

    /// Total cards across every position
    pub fn total_cards(&self) -> usize {
        self.0.iter().map(|set| set.len()).sum()
    }
}

impl Deref for BucketSequence {
    type Target = [CardSet];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<CardSet>> for BucketSequence {
    fn from(sets: Vec<CardSet>) -> Self {
        Self(sets)
    }
}

impl FromIterator<CardSet> for BucketSequence {
    fn from_iter<I: IntoIterator<Item = CardSet>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a BucketSequence {
    type Item = &'a CardSet;
    type IntoIter = std::slice::Iter<'a, CardSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Densify an assignment into a [`BucketSequence`].
///
/// The result has length `max key + 1`, or 0 for an empty mapping. Every
/// missing key becomes a fresh empty set. Sets are copied out of the
/// assignment, so the sequence never aliases caller state.
pub fn to_bucket_sets(assignment: &BucketAssignment) -> BucketSequence {
    let Some(max_bucket) = assignment.max_bucket() else {
        return BucketSequence::default();
    };

    (0..=max_bucket)
        .map(|bucket| assignment.cards_in(bucket).cloned().unwrap_or_default())
        .collect()
}
