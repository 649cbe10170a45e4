//! Persistence of finished quiz results.

use std::collections::HashMap;

use wire::QuizResult;

use crate::error::StoreError;

/// A key-value store of finished quiz results, keyed by quiz id.
///
/// The core only ever hands a store complete [`QuizResult`]s; backends
/// decide durability. Saving under an existing quiz id replaces the
/// earlier result.
pub trait ResultStore {
    /// Persists a result under its quiz id.
    fn save(&mut self, result: QuizResult) -> Result<(), StoreError>;

    /// Looks up the result for a quiz id.
    fn get(&self, quiz_id: &str) -> Result<Option<QuizResult>, StoreError>;

    /// Returns every stored result, in unspecified order.
    fn get_all(&self) -> Result<Vec<QuizResult>, StoreError>;

    /// Removes all stored results.
    fn clear(&mut self) -> Result<(), StoreError>;

    /// Returns `true` if a result exists for the quiz id.
    fn has_completed(&self, quiz_id: &str) -> Result<bool, StoreError> {
        Ok(self.get(quiz_id)?.is_some())
    }
}

/// An in-memory [`ResultStore`]. Reference implementation and test double;
/// never fails.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    results: HashMap<String, QuizResult>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl ResultStore for MemoryStore {
    fn save(&mut self, result: QuizResult) -> Result<(), StoreError> {
        self.results.insert(result.quiz_id.clone(), result);
        Ok(())
    }

    fn get(&self, quiz_id: &str) -> Result<Option<QuizResult>, StoreError> {
        Ok(self.results.get(quiz_id).cloned())
    }

    fn get_all(&self) -> Result<Vec<QuizResult>, StoreError> {
        Ok(self.results.values().cloned().collect())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.results.clear();
        Ok(())
    }
}
