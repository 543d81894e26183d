//! Shared test helpers for scenario and property tests.

use pharmacy_core::traits::ShelfLifeCalculator;
use pharmacy_core::types::{Item, ItemState};
use pharmacy_engine::ShelfEngine;

/// Build a validated item, panicking on bad test data.
pub fn item(name: &str, expiry: i64, value: i64) -> Item {
    Item::new(name, expiry, value).unwrap()
}

/// One day of `(name, expiry, value)` under the standard table.
pub fn one_day(name: &str, expiry: i64, value: i64) -> (i64, i64) {
    let ItemState { expiry, value } = ShelfEngine::standard().next_state(&item(name, expiry, value));
    (expiry, value)
}

/// Run `items` forward `days` days, collecting the batch after each day.
pub fn history(calc: &dyn ShelfLifeCalculator, mut items: Vec<Item>, days: usize) -> Vec<Vec<Item>> {
    let mut out = Vec::with_capacity(days);
    for _ in 0..days {
        items = calc.advance(items);
        out.push(items.clone());
    }
    out
}
