//! Trait interfaces for the pharmacy engine.
//!
//! - [`ShelfLifeCalculator`] — one-day transition over items (pharmacy-engine implements)

use crate::rule::Rule;
use crate::types::{Item, ItemState};

/// Pure one-day transition of item state.
///
/// Implementations hold an immutable rule table and carry no state between
/// calls. Every transition is per-item, so batch order never affects the
/// result.
pub trait ShelfLifeCalculator: Send + Sync {
    /// Rule governing items called `name`. Total over all names.
    fn rule_for(&self, name: &str) -> &Rule;

    /// State of `item` after one day. Does not modify `item`.
    fn next_state(&self, item: &Item) -> ItemState;

    /// Move `item` forward by one day in place.
    ///
    /// Default implementation applies [`next_state`](Self::next_state).
    fn step(&self, item: &mut Item) {
        let next = self.next_state(item);
        item.apply(next);
    }

    /// Move every item in the batch forward by one day in place.
    fn advance_in_place(&self, items: &mut [Item]) {
        for item in items.iter_mut() {
            self.step(item);
        }
    }

    /// Move a batch forward by one day and hand it back.
    ///
    /// Order and length are preserved.
    fn advance(&self, mut items: Vec<Item>) -> Vec<Item> {
        self.advance_in_place(&mut items);
        items
    }
}
