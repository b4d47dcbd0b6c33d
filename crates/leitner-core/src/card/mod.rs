//! Card module - Core flashcard types
//!
//! Implements the learner-facing value types:
//! - Flashcards with value identity (front, back, hint, tags)
//! - Answer difficulty signals that drive bucket transitions
//! - Hint lookup

mod difficulty;
mod flashcard;

pub use difficulty::AnswerDifficulty;
pub use flashcard::{get_hint, Flashcard};

use std::collections::HashSet;

/// A set of flashcards filed together (one bucket, or one day's practice set)
pub type CardSet = HashSet<Flashcard>;
