//! Item types shared by the engine and its callers.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_BENEFIT, MIN_BENEFIT};
use crate::error::ItemError;

/// A named item on the shelf.
///
/// `name` only selects a rule; two items with the same name are
/// independent. `expiry` counts days until expiry and goes negative once
/// the item is past it. `value` is the benefit, kept in
/// `[MIN_BENEFIT, MAX_BENEFIT]` by every transition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(rename = "expiresIn")]
    pub expiry: i64,
    #[serde(rename = "benefit")]
    pub value: i64,
}

impl Item {
    /// Create a validated item.
    ///
    /// Rejects an empty name and a benefit outside the shelf bounds. Fields
    /// stay public for callers that build items directly; the engine clamps
    /// regardless.
    ///
    /// # Examples
    ///
    /// ```
    /// use pharmacy_core::types::Item;
    /// let item = Item::new("Fervex", 12, 35).unwrap();
    /// assert_eq!(item.state().expiry, 12);
    /// assert!(Item::new("Fervex", 12, 51).is_err());
    /// ```
    pub fn new(name: impl Into<String>, expiry: i64, value: i64) -> Result<Self, ItemError> {
        let item = Self {
            name: name.into(),
            expiry,
            value,
        };
        item.validate()?;
        Ok(item)
    }

    /// Check the boundary constraints [`Item::new`] enforces.
    pub fn validate(&self) -> Result<(), ItemError> {
        if self.name.is_empty() {
            return Err(ItemError::EmptyName);
        }
        if !(MIN_BENEFIT..=MAX_BENEFIT).contains(&self.value) {
            return Err(ItemError::BenefitOutOfRange {
                value: self.value,
                min: MIN_BENEFIT,
                max: MAX_BENEFIT,
            });
        }
        Ok(())
    }

    /// Current `(expiry, value)` pair.
    pub fn state(&self) -> ItemState {
        ItemState {
            expiry: self.expiry,
            value: self.value,
        }
    }

    /// Overwrite the mutable state, keeping the name.
    pub fn apply(&mut self, state: ItemState) {
        self.expiry = state.expiry;
        self.value = state.value;
    }
}

/// The mutable half of an [`Item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemState {
    pub expiry: i64,
    pub value: i64,
}

impl ItemState {
    pub fn new(expiry: i64, value: i64) -> Self {
        Self { expiry, value }
    }
}

impl From<(i64, i64)> for ItemState {
    fn from((expiry, value): (i64, i64)) -> Self {
        Self { expiry, value }
    }
}
