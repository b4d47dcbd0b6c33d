use std::sync::{Mutex, MutexGuard};

use super::LeitnerSession;
use crate::card::{AnswerDifficulty, CardSet, Flashcard};
use crate::progress::{ProgressConfig, ProgressSummary};
use crate::scheduler::{BucketTransition, Result, SchedulerError};

/// A [`LeitnerSession`] guarded by one mutex
///
/// Every method takes `&self`, so the session can sit behind an `Arc` and be
/// driven from several threads. The read-then-write of an answer happens
/// under a single lock acquisition.
#[derive(Debug, Default)]
pub struct SharedSession {
    inner: Mutex<LeitnerSession>,
}

impl SharedSession {
    /// Wrap an existing session
    pub fn new(session: LeitnerSession) -> Self {
        Self {
            inner: Mutex::new(session),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, LeitnerSession>> {
        self.inner
            .lock()
            .map_err(|_| SchedulerError::LockPoisoned("Session lock poisoned".into()))
    }

    /// Start tracking `card` in bucket 0
    pub fn add_card(&self, card: Flashcard) -> Result<()> {
        self.lock()?.add_card(card)
    }

    /// Cards due for review on `day`
    pub fn due(&self, day: i64) -> Result<CardSet> {
        Ok(self.lock()?.due(day))
    }

    /// Apply and record an answer atomically
    pub fn answer(
        &self,
        card: &Flashcard,
        difficulty: AnswerDifficulty,
        day: i64,
    ) -> Result<BucketTransition> {
        self.lock()?.answer(card, difficulty, day)
    }

    /// Progress summary including history statistics
    pub fn progress(&self, config: &ProgressConfig) -> Result<ProgressSummary> {
        Ok(self.lock()?.progress(config))
    }

    /// Clone the current session state
    pub fn snapshot(&self) -> Result<LeitnerSession> {
        Ok(self.lock()?.clone())
    }

    /// Unwrap the guarded session
    pub fn into_inner(self) -> Result<LeitnerSession> {
        self.inner
            .into_inner()
            .map_err(|_| SchedulerError::LockPoisoned("Session lock poisoned".into()))
    }
}
