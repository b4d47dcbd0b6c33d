//! Journey: several threads drive one learner's session

use std::sync::Arc;
use std::thread;

use leitner_core::{AnswerDifficulty, ProgressConfig, SharedSession};
use leitner_e2e_tests::DeckFactory;

#[test]
fn test_parallel_reviewers_on_disjoint_cards() {
    let shared = Arc::new(SharedSession::new(DeckFactory::create_session(40)));

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for i in (worker..40).step_by(4) {
                    let card = DeckFactory::card(i);
                    let difficulty = if i % 2 == 0 {
                        AnswerDifficulty::Easy
                    } else {
                        AnswerDifficulty::Wrong
                    };
                    shared.answer(&card, difficulty, 1).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let summary = shared.progress(&ProgressConfig::default()).unwrap();
    assert_eq!(summary.total_cards, 40);
    assert_eq!(summary.cards_per_bucket, vec![20, 20]);
    assert_eq!(summary.history.unwrap().answered, 40);
}

#[test]
fn test_parallel_promotions_of_one_card_serialize() {
    let shared = Arc::new(SharedSession::new(DeckFactory::create_session(1)));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for _ in 0..25 {
                    shared
                        .answer(&DeckFactory::card(0), AnswerDifficulty::Easy, 1)
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let session = shared.snapshot().unwrap();
    assert_eq!(session.assignment().bucket_of(&DeckFactory::card(0)), Some(200));
    assert_eq!(session.assignment().len(), 1);
}

#[test]
fn test_untracked_card_through_shared_session() {
    let shared = SharedSession::new(DeckFactory::create_session(2));
    let err = shared
        .answer(&DeckFactory::card(99), AnswerDifficulty::Hard, 1)
        .unwrap_err();
    assert!(err.to_string().contains("card-99"));
    assert_eq!(shared.due(1).unwrap().len(), 2);
}
