//! Flashcard - The unit moved between buckets
//!
//! Cards are created once by the caller and never mutated afterwards.
//! Two cards with identical front, back, hint and tags are the same card.

use serde::{Deserialize, Serialize};

use crate::scheduler::{Result, SchedulerError};

// ============================================================================
// FLASHCARD
// ============================================================================

/// An immutable flashcard
///
/// Identity is by value: equality, hashing and ordering all cover every
/// field, so two structurally identical cards are interchangeable in a
/// [`CardSet`](crate::CardSet).
///
/// Uses `deny_unknown_fields` so a deck file with a mistyped field is
/// rejected instead of silently producing a different card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Flashcard {
    front: String,
    back: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hint: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

impl Flashcard {
    /// Create a new flashcard
    pub fn new(
        front: impl Into<String>,
        back: impl Into<String>,
        hint: Option<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            hint,
            tags,
        }
    }

    /// Create a card with no hint and no tags
    pub fn basic(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self::new(front, back, None, Vec::new())
    }

    /// Return a copy of this card carrying `hint`
    pub fn with_hint(self, hint: impl Into<String>) -> Self {
        Self {
            hint: Some(hint.into()),
            ..self
        }
    }

    /// Return a copy of this card carrying `tags`
    pub fn with_tags<I, S>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    /// The prompt side
    pub fn front(&self) -> &str {
        &self.front
    }

    /// The answer side
    pub fn back(&self) -> &str {
        &self.back
    }

    /// The stored hint, if any
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Category labels, in the order they were given
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Check whether the card carries `tag`
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl std::fmt::Display for Flashcard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.front, self.back)
    }
}

// ============================================================================
// HINTS
// ============================================================================

/// Return the stored hint for a card.
///
/// A card that was created without a hint yields [`SchedulerError::NoHint`].
/// An empty-string hint counts as present and is returned as-is.
pub fn get_hint(card: &Flashcard) -> Result<&str> {
    card.hint().ok_or_else(|| SchedulerError::NoHint {
        front: card.front.clone(),
    })
}

// ============================================================================
// TESTS
// ============================================================================
