//! Property sweeps over the scheduling rules
//!
//! Deterministic grids rather than random inputs, so failures reproduce.

use leitner_core::{
    get_bucket_range, is_prime, is_prime_f64, next_bucket, practice, to_bucket_sets, update,
    AnswerDifficulty, BucketAssignment, CardSet,
};
use leitner_e2e_tests::{DeckConfig, DeckFactory};

/// Decks with every combination of occupied buckets among the first five
fn occupancy_patterns() -> Vec<BucketAssignment> {
    (0u32..32)
        .map(|mask| {
            let mut deck = BucketAssignment::new();
            for bucket in 0..5usize {
                if mask & (1 << bucket) != 0 {
                    deck.insert(bucket, DeckFactory::card(bucket));
                }
            }
            deck
        })
        .collect()
}

#[test]
fn test_sequence_length_property() {
    for deck in occupancy_patterns() {
        let sequence = to_bucket_sets(&deck);
        let expected = deck.max_bucket().map_or(0, |max| max + 1);
        assert_eq!(sequence.len(), expected);

        for (index, set) in sequence.iter().enumerate() {
            match deck.cards_in(index) {
                Some(stored) => assert_eq!(set, stored),
                None => assert!(set.is_empty()),
            }
        }
    }
}

#[test]
fn test_range_property() {
    for deck in occupancy_patterns() {
        let sequence = to_bucket_sets(&deck);
        let range = get_bucket_range(&sequence);

        if sequence.iter().all(|set| set.is_empty()) {
            assert_eq!(range, None);
            continue;
        }
        let range = range.unwrap();
        assert!(range.min_bucket <= range.max_bucket);
        assert!(!sequence[range.min_bucket - 1].is_empty());
        assert!(!sequence[range.max_bucket - 1].is_empty());
        assert!(sequence[..range.min_bucket - 1].iter().all(|s| s.is_empty()));
        assert!(sequence[range.max_bucket..].iter().all(|s| s.is_empty()));
    }
}

#[test]
fn test_practice_properties() {
    let deck = DeckFactory::create_deck(DeckConfig {
        count: 40,
        bucket_spread: 8,
        ..Default::default()
    });
    let sequence = to_bucket_sets(&deck);
    let everything: CardSet = sequence.iter().flatten().cloned().collect();

    for day in -3..=0 {
        assert_eq!(practice(&sequence, day), everything);
    }

    for day in 1..=300i64 {
        let due = practice(&sequence, day);
        for (index, set) in sequence.iter().enumerate() {
            let expected = index == 0 || day % (1i64 << index) == 0;
            for card in set {
                assert_eq!(due.contains(card), expected, "bucket {index}, day {day}");
            }
        }
    }
}

#[test]
fn test_update_properties() {
    for start in 0..20usize {
        for difficulty in AnswerDifficulty::ALL {
            let card = DeckFactory::card(start);
            let mut deck = BucketAssignment::new();
            deck.insert(start, card.clone());

            let transition = update(&mut deck, &card, difficulty).unwrap();
            let expected = match difficulty {
                AnswerDifficulty::Wrong => 0,
                AnswerDifficulty::Hard => start.saturating_sub(1),
                AnswerDifficulty::Easy => start + 1,
            };
            assert_eq!(transition.to, expected);
            assert_eq!(next_bucket(start, difficulty), Ok(expected));
            assert_eq!(deck.bucket_of(&card), Some(expected));
            assert_eq!(deck.len(), 1);
        }
    }
}

#[test]
fn test_primality_reference_values() {
    for n in [2u64, 3, 5, 7, 11, 13, 97, 7919] {
        assert!(is_prime(n), "{n} should be prime");
    }
    for n in [0u64, 1, 4, 8, 9, 15, 91, 7917] {
        assert!(!is_prime(n), "{n} should not be prime");
    }
    assert!(is_prime_f64(7.0));
    assert!(!is_prime_f64(8.0));
    assert!(!is_prime_f64(-7.0));
    assert!(!is_prime_f64(2.5));
    assert!(!is_prime_f64(f64::MAX));
}
