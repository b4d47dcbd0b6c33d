//! Journey: a learner studies a small deck day after day
//!
//! Drives the full loop (select due cards, answer, move) through
//! `LeitnerSession` and checks where every card ends up.

use leitner_core::{AnswerDifficulty, Flashcard, ProgressConfig, to_bucket_sets};
use leitner_e2e_tests::DeckFactory;

fn answer_for(card: &Flashcard, day: i64) -> AnswerDifficulty {
    match card.front() {
        "card-0" => AnswerDifficulty::Easy,
        "card-1" => AnswerDifficulty::Wrong,
        _ if day % 2 == 1 => AnswerDifficulty::Easy,
        _ => AnswerDifficulty::Hard,
    }
}

#[test]
fn test_sixteen_day_study_loop() {
    let mut session = DeckFactory::create_session(3);
    let mut practiced = vec![Vec::new(); 3];

    for day in 1..=16 {
        let mut due: Vec<Flashcard> = session.due(day).into_iter().collect();
        due.sort();
        for card in &due {
            let index: usize = card.front()["card-".len()..].parse().unwrap();
            practiced[index].push(day);
            session.answer(card, answer_for(card, day), day).unwrap();
        }
    }

    let assignment = session.assignment();

    // Always easy: promoted on days 1, 2, 4, 8 and 16 only
    assert_eq!(practiced[0], vec![1, 2, 4, 8, 16]);
    assert_eq!(assignment.bucket_of(&DeckFactory::card(0)), Some(5));

    // Always wrong: stuck in bucket 0 and seen every day
    assert_eq!(practiced[1].len(), 16);
    assert_eq!(assignment.bucket_of(&DeckFactory::card(1)), Some(0));

    // Easy on odd days, hard on even days: oscillates between 0 and 1
    assert_eq!(practiced[2].len(), 16);
    assert_eq!(assignment.bucket_of(&DeckFactory::card(2)), Some(0));

    assert_eq!(session.history().len(), 37);

    let summary = session.progress(&ProgressConfig::default());
    assert_eq!(summary.total_cards, 3);
    assert_eq!(summary.mastery_bucket, Some(5));
    assert_eq!(summary.mastered_cards, 1);

    let stats = summary.history.unwrap();
    assert_eq!(stats.days_practiced, 16);
    assert_eq!(stats.wrong, 16);
    assert_eq!(stats.easy, 5 + 8);
    assert_eq!(stats.hard, 8);
    assert_eq!(stats.promotions, 5 + 8);
    assert_eq!(stats.demotions, 8);
    assert_eq!(stats.resets, 0);
}

#[test]
fn test_bootstrap_day_reviews_everything() {
    let deck = DeckFactory::create_gapped_deck();
    let session = leitner_core::LeitnerSession::from_assignment(deck);

    assert_eq!(session.due(0).len(), 3);
    assert_eq!(session.due(-4).len(), 3);
    // Day 1: only bucket 0
    assert_eq!(session.due(1).len(), 1);
    // Day 4: buckets 0, 1 and 2
    assert_eq!(session.due(4).len(), 2);
    // Day 32: every bucket up to 5
    assert_eq!(session.due(32).len(), 3);
}

#[test]
fn test_gapped_deck_views() {
    let deck = DeckFactory::create_gapped_deck();
    let sequence = to_bucket_sets(&deck);

    assert_eq!(sequence.len(), 6);
    assert_eq!(
        sequence.iter().map(|set| set.len()).collect::<Vec<_>>(),
        vec![1, 0, 1, 0, 0, 1]
    );

    let range = leitner_core::get_bucket_range(&sequence).unwrap();
    assert_eq!((range.min_bucket, range.max_bucket), (1, 6));
}

#[test]
fn test_wrong_answer_after_promotions_resets() {
    let mut session = DeckFactory::create_session(1);
    let card = DeckFactory::card(0);

    for day in [1, 2, 4, 8] {
        session.answer(&card, AnswerDifficulty::Easy, day).unwrap();
    }
    assert_eq!(session.assignment().bucket_of(&card), Some(4));

    let transition = session.answer(&card, AnswerDifficulty::Wrong, 16).unwrap();
    assert_eq!((transition.from, transition.to), (4, 0));

    let stats = session.progress(&ProgressConfig::default()).history.unwrap();
    assert_eq!(stats.resets, 1);
}

#[test]
fn test_hints_through_the_deck() {
    let deck = DeckFactory::create_gapped_deck();
    let mut hints: Vec<(String, Option<String>)> = deck
        .cards()
        .map(|(_, card)| {
            (
                card.front().to_string(),
                leitner_core::get_hint(card).ok().map(String::from),
            )
        })
        .collect();
    hints.sort();

    assert_eq!(
        hints,
        vec![
            ("gato".to_string(), None),
            ("hola".to_string(), Some("greeting".to_string())),
            ("perro".to_string(), Some("woof".to_string())),
        ]
    );
}
