//! # pharmacy-engine — one-day shelf transitions.
//!
//! All arithmetic is integer-only and saturating.
//!
//! - **Rule table**: immutable map from drug name to a [`Rule`] record, with
//!   a default rule for every unregistered name.
//! - **Transition engine**: looks up the rule for each item, applies the
//!   day's benefit change from the pre-decrement expiry, clamps benefit to
//!   `[0, 50]`, then counts expiry down unless the rule is exempt.
//!
//! [`Rule`]: pharmacy_core::rule::Rule

pub mod engine;
pub mod rules;

pub use engine::{ShelfEngine, next_value};
pub use rules::{RuleLookup, RuleTable};
