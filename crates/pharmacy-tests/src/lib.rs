//! Scenario and property test suite for the pharmacy engine.
//!
//! Integration tests live under `tests/` and exercise the rule table and
//! engine together through the public API only.

pub mod helpers;
