//! Deck file helpers
//!
//! A deck file is the JSON form of a [`BucketAssignment`]:
//! `{"0": [{"front": "...", "back": "..."}], "2": [...]}`.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use leitner_core::{BucketAssignment, CardSet, Flashcard};

/// Read and validate a deck file
pub fn load(path: &Path) -> anyhow::Result<BucketAssignment> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read deck file {}", path.display()))?;
    let assignment: BucketAssignment = serde_json::from_str(&content)
        .with_context(|| format!("Invalid deck file {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        cards = assignment.len(),
        buckets = assignment.bucket_count(),
        "Deck loaded"
    );
    Ok(assignment)
}

/// Write a deck file as pretty JSON
pub fn save(path: &Path, assignment: &BucketAssignment) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(assignment)?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write deck file {}", path.display()))?;
    tracing::debug!(path = %path.display(), "Deck saved");
    Ok(())
}

/// Find the single tracked card whose front matches `front`
pub fn find_card<'a>(assignment: &'a BucketAssignment, front: &str) -> anyhow::Result<&'a Flashcard> {
    let mut matches = assignment.cards().filter(|(_, card)| card.front() == front);

    let Some((_, card)) = matches.next() else {
        bail!("No card with front '{}' in the deck", front);
    };
    if matches.next().is_some() {
        bail!("More than one card has front '{}'", front);
    }
    Ok(card)
}

/// Cards of a set ordered by front, then back, for stable output
pub fn sorted(set: &CardSet) -> Vec<&Flashcard> {
    let mut cards: Vec<&Flashcard> = set.iter().collect();
    cards.sort();
    cards
}
