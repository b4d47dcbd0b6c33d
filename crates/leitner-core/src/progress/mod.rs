//! Progress Module
//!
//! Read-only projections of a [`BucketAssignment`] for reporting:
//! - Card counts per bucket and the occupied range
//! - A "mastered" proportion based on the top bucket
//! - Optional answer-history statistics

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::card::AnswerDifficulty;
use crate::scheduler::{get_bucket_range, to_bucket_sets, BucketAssignment, BucketRange};
use crate::session::AnswerRecord;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Configuration for progress reporting
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressConfig {
    /// Cards at or above this bucket count as mastered.
    ///
    /// `None` uses the highest occupied bucket. Bucket 0 is never mastered.
    pub mastery_bucket: Option<usize>,
}

// ============================================================================
// SUMMARY TYPES
// ============================================================================

/// Snapshot of a learner's progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    /// Distinct cards tracked
    pub total_cards: usize,
    /// Card count per bucket, index = bucket number
    pub cards_per_bucket: Vec<usize>,
    /// Occupied range (1-based), `None` for an empty deck
    pub bucket_range: Option<BucketRange>,
    /// Lowest bucket counted as mastered
    pub mastery_bucket: Option<usize>,
    /// Cards at or above the mastery bucket
    pub mastered_cards: usize,
    /// `mastered_cards / total_cards`, 0.0 for an empty deck
    pub mastery_ratio: f64,
    /// Mean bucket number over all cards, 0.0 for an empty deck
    pub average_bucket: f64,
    /// Answer statistics, when a history was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<HistoryStats>,
}

/// Aggregates over a sequence of answers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryStats {
    /// Answers recorded
    pub answered: usize,
    /// Answers marked wrong
    pub wrong: usize,
    /// Answers marked hard
    pub hard: usize,
    /// Answers marked easy
    pub easy: usize,
    /// Share of correct (hard or easy) answers, 0.0 when nothing was answered
    pub accuracy: f64,
    /// Answers that moved a card up
    pub promotions: usize,
    /// Hard answers that moved a card down
    pub demotions: usize,
    /// Wrong answers that sent a card back to bucket 0 from higher up
    pub resets: usize,
    /// Distinct days with at least one answer
    pub days_practiced: usize,
}

// ============================================================================
// COMPUTATION
// ============================================================================

/// Summarise bucket occupancy with default settings and no history
pub fn compute_progress(assignment: &BucketAssignment) -> ProgressSummary {
    summarize(assignment, &ProgressConfig::default())
}

/// Summarise bucket occupancy and fold an answer history into the result
pub fn compute_progress_with(
    assignment: &BucketAssignment,
    history: &[AnswerRecord],
    config: &ProgressConfig,
) -> ProgressSummary {
    ProgressSummary {
        history: Some(history_stats(history)),
        ..summarize(assignment, config)
    }
}

fn summarize(assignment: &BucketAssignment, config: &ProgressConfig) -> ProgressSummary {
    let sequence = to_bucket_sets(assignment);
    let cards_per_bucket: Vec<usize> = sequence.iter().map(|set| set.len()).collect();
    let total_cards: usize = cards_per_bucket.iter().sum();
    let bucket_range = get_bucket_range(&sequence);

    let mastery_bucket = match config.mastery_bucket {
        Some(bucket) => Some(bucket.max(1)),
        None => bucket_range
            .map(|range| range.max_bucket - 1)
            .filter(|&top| top > 0),
    };

    let mastered_cards = mastery_bucket
        .map(|floor| cards_per_bucket.iter().skip(floor).sum::<usize>())
        .unwrap_or(0);

    let weighted: usize = cards_per_bucket
        .iter()
        .enumerate()
        .map(|(bucket, count)| bucket * count)
        .sum();

    ProgressSummary {
        total_cards,
        cards_per_bucket,
        bucket_range,
        mastery_bucket,
        mastered_cards,
        mastery_ratio: ratio(mastered_cards, total_cards),
        average_bucket: ratio(weighted, total_cards),
        history: None,
    }
}

fn history_stats(history: &[AnswerRecord]) -> HistoryStats {
    let mut stats = HistoryStats {
        answered: history.len(),
        ..Default::default()
    };
    let mut days = HashSet::new();

    for record in history {
        match record.difficulty {
            AnswerDifficulty::Wrong => stats.wrong += 1,
            AnswerDifficulty::Hard => stats.hard += 1,
            AnswerDifficulty::Easy => stats.easy += 1,
        }
        let transition = record.transition();
        if transition.is_promotion() {
            stats.promotions += 1;
        } else if transition.is_demotion() {
            if record.difficulty == AnswerDifficulty::Wrong {
                stats.resets += 1;
            } else {
                stats.demotions += 1;
            }
        }
        days.insert(record.day);
    }

    stats.accuracy = ratio(stats.hard + stats.easy, stats.answered);
    stats.days_practiced = days.len();
    stats
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

// ============================================================================
// TESTS
// ============================================================================
