//! Shelf constants. Benefit is an integer score, expiry is counted in days.

/// Lowest benefit an item can hold.
pub const MIN_BENEFIT: i64 = 0;

/// Highest benefit an item can hold.
pub const MAX_BENEFIT: i64 = 50;

/// Benefit lost per day by drugs without a registered rule.
pub const DEFAULT_DECAY: u32 = 1;

/// Factor applied to the daily change once an item has expired.
pub const DEFAULT_EXPIRED_MULTIPLIER: u32 = 2;

/// An item whose expiry is at or below this value is expired.
pub const EXPIRY_BOUNDARY: i64 = 0;

/// Gains benefit with age, twice as fast once expired.
pub const HERBAL_TEA: &str = "Herbal Tea";

/// Gains benefit faster as expiry approaches, worthless once expired.
pub const FERVEX: &str = "Fervex";

/// Never expires and never changes benefit.
pub const MAGIC_PILL: &str = "Magic Pill";

/// Degrades twice as fast as an ordinary drug.
pub const DAFALGAN: &str = "Dafalgan";

/// Daily decay of [`DAFALGAN`] before expiry.
pub const DAFALGAN_DECAY: u32 = 2;

/// Daily gain of [`FERVEX`] while more than 10 days remain.
pub const FERVEX_BASE_GROWTH: u32 = 1;

/// `(inclusive expiry ceiling, daily gain)` tiers for [`FERVEX`], tightest first.
pub const FERVEX_TIERS: [(i64, u32); 2] = [(5, 3), (10, 2)];

/// Number of days the simulator runs when none is given.
pub const DEFAULT_SIMULATION_DAYS: u32 = 30;

/// Clamp a benefit into `[MIN_BENEFIT, MAX_BENEFIT]`.
///
/// # Examples
///
/// ```
/// use pharmacy_core::constants::clamp_benefit;
/// assert_eq!(clamp_benefit(51), 50);
/// assert_eq!(clamp_benefit(-3), 0);
/// assert_eq!(clamp_benefit(17), 17);
/// ```
pub fn clamp_benefit(value: i64) -> i64 {
    value.clamp(MIN_BENEFIT, MAX_BENEFIT)
}

/// Whether an item with this (pre-decrement) expiry follows expired rules.
///
/// # Examples
///
/// ```
/// use pharmacy_core::constants::is_expired;
/// assert!(!is_expired(1));
/// assert!(is_expired(0));
/// assert!(is_expired(-7));
/// ```
pub fn is_expired(expiry: i64) -> bool {
    expiry <= EXPIRY_BOUNDARY
}
