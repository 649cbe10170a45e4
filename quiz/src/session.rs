//! In-progress quiz state.
//!
//! One session per quiz attempt, owned by whatever orchestrates the UI and
//! passed by reference. Nothing here is global; two sessions never share
//! state.

use prefs::{encode_preferences, Direction, PreferenceMap, ITEM_COUNT};
use wire::QuizResult;

use crate::error::SessionError;

/// State of a single quiz attempt: recorded swipes, the cursor, and the
/// most recent favorite (up) and most-hated (down) items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSession {
    swipes: PreferenceMap,
    cursor: usize,
    favorite: Option<usize>,
    hated: Option<usize>,
}

impl QuizSession {
    /// Creates a fresh session at item 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the swipe for the current item and advances the cursor.
    ///
    /// An up swipe marks the item as the running favorite, a down swipe as
    /// the running most-hated; later extremes overwrite earlier ones.
    /// Swipes after the last item are ignored.
    pub fn record_swipe(&mut self, direction: Direction) {
        if self.cursor >= ITEM_COUNT {
            return;
        }

        self.swipes.insert(self.cursor, direction);
        match direction {
            Direction::Up => self.favorite = Some(self.cursor),
            Direction::Down => self.hated = Some(self.cursor),
            Direction::Left | Direction::Right => {}
        }
        self.cursor += 1;
    }

    /// Index of the item the next swipe applies to.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.cursor
    }

    /// Fraction of the quiz completed, in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.cursor as f64 / ITEM_COUNT as f64
    }

    /// Returns `true` once all 81 items have been swiped.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.cursor >= ITEM_COUNT
    }

    /// Running favorite item, if the user has swiped up on anything.
    #[must_use]
    pub const fn favorite(&self) -> Option<usize> {
        self.favorite
    }

    /// Running most-hated item, if the user has swiped down on anything.
    #[must_use]
    pub const fn hated(&self) -> Option<usize> {
        self.hated
    }

    /// Discards all state and returns to item 0.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Seals the session into an immutable [`QuizResult`].
    ///
    /// The favorite and most-hated indices are masked to one byte for the
    /// wire format, defaulting to 0 when the user never swiped up or down.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Incomplete`] before all 81 swipes are in.
    pub fn finish(&self, quiz_id: &str, completed_at_ms: u64) -> Result<QuizResult, SessionError> {
        if !self.is_complete() {
            return Err(SessionError::Incomplete {
                answered: self.swipes.len(),
            });
        }

        Ok(QuizResult {
            quiz_id: quiz_id.to_string(),
            preferences: encode_preferences(&self.swipes),
            favorite_index: (self.favorite.unwrap_or(0) % 256) as u8,
            hated_index: (self.hated.unwrap_or(0) % 256) as u8,
            completed_at_ms,
        })
    }
}
