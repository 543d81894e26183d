//! Error types for the pharmacy engine.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("empty item name")] EmptyName,
    #[error("benefit {value} outside [{min}, {max}]")] BenefitOutOfRange { value: i64, min: i64, max: i64 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("empty rule name")] EmptyName,
    #[error("expired multiplier must be at least 1")] ZeroExpiredMultiplier,
    #[error("tier thresholds not strictly ascending: {previous} then {next}")] UnsortedTiers { previous: i64, next: i64 },
    #[error("tier threshold {0} is not after expiry")] TierAtOrBelowExpiry(i64),
}
