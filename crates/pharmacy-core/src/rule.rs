//! Rule records describing how an item's benefit moves each day.
//!
//! A [`Rule`] is plain data. Amounts are non-negative magnitudes; the sign
//! comes from whether an amount is decay or growth. Past expiry the net
//! daily change is scaled by `expired_multiplier`, or replaced by a reset
//! to zero when `zero_on_expiry` is set.

use crate::constants::{DEFAULT_DECAY, DEFAULT_EXPIRED_MULTIPLIER, is_expired};
use crate::error::RuleError;

/// One step of a tiered growth schedule.
///
/// Applies while the pre-decrement expiry is `<= ceiling`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tier {
    pub ceiling: i64,
    pub growth: u32,
}

impl Tier {
    pub const fn new(ceiling: i64, growth: u32) -> Self {
        Self { ceiling, growth }
    }
}

/// How a rule changes benefit while the item is not expired.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Constant daily change: `growth - decay`.
    Flat { decay: u32, growth: u32 },
    /// Growth picked from `tiers` (ascending ceilings, first match wins),
    /// `base_growth` when expiry is above every ceiling.
    Tiered { base_growth: u32, tiers: Vec<Tier> },
    /// Benefit never changes.
    Frozen,
}

/// The change a rule prescribes for one day, before clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// Add this signed amount to the benefit.
    Shift(i64),
    /// Set the benefit to zero.
    Reset,
}

/// Rule-data record consumed by the transition engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    pub shape: Shape,
    /// Factor applied to the magnitude of the daily change once expired.
    pub expired_multiplier: u32,
    /// Pin benefit to zero once expired instead of scaling the change.
    pub zero_on_expiry: bool,
    /// Whether expiry decreases each day.
    pub counts_down: bool,
}

impl Default for Rule {
    /// The fallback for unregistered names: lose 1 a day, 2 once expired.
    fn default() -> Self {
        Self::decaying(DEFAULT_DECAY)
    }
}

impl Rule {
    fn with_shape(shape: Shape) -> Self {
        Self {
            shape,
            expired_multiplier: DEFAULT_EXPIRED_MULTIPLIER,
            zero_on_expiry: false,
            counts_down: true,
        }
    }

    /// Lose `decay` per day.
    pub fn decaying(decay: u32) -> Self {
        Self::with_shape(Shape::Flat { decay, growth: 0 })
    }

    /// Gain `growth` per day.
    pub fn appreciating(growth: u32) -> Self {
        Self::with_shape(Shape::Flat { decay: 0, growth })
    }

    /// Gain according to a tier schedule keyed on remaining expiry.
    pub fn tiered(base_growth: u32, tiers: impl IntoIterator<Item = Tier>) -> Self {
        Self::with_shape(Shape::Tiered {
            base_growth,
            tiers: tiers.into_iter().collect(),
        })
    }

    /// Never changes benefit and never counts down.
    pub fn frozen() -> Self {
        Self {
            counts_down: false,
            ..Self::with_shape(Shape::Frozen)
        }
    }

    pub fn with_expired_multiplier(mut self, multiplier: u32) -> Self {
        self.expired_multiplier = multiplier;
        self
    }

    pub fn zeroed_on_expiry(mut self) -> Self {
        self.zero_on_expiry = true;
        self
    }

    pub fn with_countdown(mut self, counts_down: bool) -> Self {
        self.counts_down = counts_down;
        self
    }

    /// Check the record is well formed.
    ///
    /// Tier ceilings must be positive and strictly ascending so that tiers
    /// are mutually exclusive, and the expired multiplier must be non-zero.
    pub fn validate(&self) -> Result<(), RuleError> {
        if self.expired_multiplier == 0 {
            return Err(RuleError::ZeroExpiredMultiplier);
        }
        if let Shape::Tiered { tiers, .. } = &self.shape {
            if let Some(first) = tiers.first() {
                if is_expired(first.ceiling) {
                    return Err(RuleError::TierAtOrBelowExpiry(first.ceiling));
                }
            }
            for pair in tiers.windows(2) {
                if pair[0].ceiling >= pair[1].ceiling {
                    return Err(RuleError::UnsortedTiers {
                        previous: pair[0].ceiling,
                        next: pair[1].ceiling,
                    });
                }
            }
        }
        Ok(())
    }

    /// Signed daily change for an unexpired item at `expiry`.
    pub fn base_delta(&self, expiry: i64) -> i64 {
        match &self.shape {
            Shape::Flat { decay, growth } => i64::from(*growth) - i64::from(*decay),
            Shape::Tiered { base_growth, tiers } => {
                let growth = tiers
                    .iter()
                    .find(|tier| expiry <= tier.ceiling)
                    .map_or(*base_growth, |tier| tier.growth);
                i64::from(growth)
            }
            Shape::Frozen => 0,
        }
    }

    /// The change to apply for a day that starts at `expiry`.
    ///
    /// `expiry` is the value before that day's countdown.
    ///
    /// # Examples
    ///
    /// ```
    /// use pharmacy_core::rule::{Adjustment, Rule};
    /// let rule = Rule::decaying(2);
    /// assert_eq!(rule.adjustment(3), Adjustment::Shift(-2));
    /// assert_eq!(rule.adjustment(0), Adjustment::Shift(-4));
    /// ```
    pub fn adjustment(&self, expiry: i64) -> Adjustment {
        if matches!(self.shape, Shape::Frozen) {
            return Adjustment::Shift(0);
        }
        let delta = self.base_delta(expiry);
        if !is_expired(expiry) {
            return Adjustment::Shift(delta);
        }
        if self.zero_on_expiry {
            return Adjustment::Reset;
        }
        Adjustment::Shift(delta.saturating_mul(i64::from(self.expired_multiplier)))
    }
}
