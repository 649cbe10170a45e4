//! In-progress preference state, one slot per quiz item.

use crate::direction::{Direction, ITEM_COUNT};

/// An ordered association from item index (0..81) to [`Direction`].
///
/// Slots start empty; an empty slot means the item has not been answered
/// yet and encodes as [`Direction::Left`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceMap {
    slots: [Option<Direction>; ITEM_COUNT],
}

impl Default for PreferenceMap {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceMap {
    /// Creates an empty map with all 81 slots unanswered.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [None; ITEM_COUNT],
        }
    }

    /// Creates a map with every slot set to the same direction.
    #[must_use]
    pub const fn filled(direction: Direction) -> Self {
        Self {
            slots: [Some(direction); ITEM_COUNT],
        }
    }

    /// Records the direction for an item. Out-of-range indices are ignored.
    pub fn insert(&mut self, index: usize, direction: Direction) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Some(direction);
        }
    }

    /// Returns the recorded direction for an item, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Direction> {
        self.slots.get(index).copied().flatten()
    }

    /// Returns the number of answered items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns `true` if no item has been answered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Returns `true` if every one of the 81 items has been answered.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Iterates answered items as `(index, direction)` in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Direction)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.map(|dir| (index, dir)))
    }
}
