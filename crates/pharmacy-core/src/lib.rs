//! # pharmacy-core
//! Foundation types and traits for the pharmacy shelf-life engine.

pub mod constants;
pub mod error;
pub mod rule;
pub mod traits;
pub mod types;
