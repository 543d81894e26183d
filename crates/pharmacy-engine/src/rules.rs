//! Name-keyed rule table.
//!
//! The table is built once and handed to the engine. Lookups are total:
//! names without a registered rule get the table's default rule.
//!
//! Registered by [`RuleTable::standard`]:
//! 1. [`HERBAL_TEA`] gains 1 a day, 2 once expired.
//! 2. [`FERVEX`] gains 1, then 2 at 10 days or less, then 3 at 5 days or
//!    less, and drops to 0 once expired.
//! 3. [`MAGIC_PILL`] never changes and never counts down.
//! 4. [`DAFALGAN`] loses 2 a day, 4 once expired.

use std::collections::HashMap;

use pharmacy_core::constants::{
    DAFALGAN, DAFALGAN_DECAY, FERVEX, FERVEX_BASE_GROWTH, FERVEX_TIERS, HERBAL_TEA, MAGIC_PILL,
};
use pharmacy_core::error::RuleError;
use pharmacy_core::rule::{Rule, Tier};

/// Where a looked-up rule came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleLookup<'a> {
    /// A rule registered under the exact name.
    Registered(&'a Rule),
    /// No rule for the name; the table's default applies.
    Fallback(&'a Rule),
}

impl<'a> RuleLookup<'a> {
    pub fn rule(self) -> &'a Rule {
        match self {
            Self::Registered(rule) | Self::Fallback(rule) => rule,
        }
    }

    pub fn is_fallback(self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Immutable mapping from drug name to rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: HashMap<String, Rule>,
    default: Rule,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl RuleTable {
    /// A table with no registered names; everything uses [`Rule::default`].
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
            default: Rule::default(),
        }
    }

    /// The pharmacy's registered drugs.
    pub fn standard() -> Self {
        let fervex_tiers = FERVEX_TIERS
            .iter()
            .map(|&(ceiling, growth)| Tier::new(ceiling, growth));

        let mut rules = HashMap::with_capacity(4);
        rules.insert(HERBAL_TEA.to_string(), Rule::appreciating(1));
        rules.insert(
            FERVEX.to_string(),
            Rule::tiered(FERVEX_BASE_GROWTH, fervex_tiers).zeroed_on_expiry(),
        );
        rules.insert(MAGIC_PILL.to_string(), Rule::frozen());
        rules.insert(DAFALGAN.to_string(), Rule::decaying(DAFALGAN_DECAY));

        Self {
            rules,
            default: Rule::default(),
        }
    }

    /// Register `rule` under `name`, replacing any previous entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use pharmacy_core::rule::Rule;
    /// use pharmacy_engine::RuleTable;
    ///
    /// let table = RuleTable::empty()
    ///     .with_rule("Ginseng", Rule::appreciating(3))
    ///     .unwrap();
    /// assert_eq!(table.rule_for("Ginseng"), &Rule::appreciating(3));
    /// assert_eq!(table.rule_for("Doliprane"), &Rule::default());
    /// ```
    pub fn with_rule(mut self, name: impl Into<String>, rule: Rule) -> Result<Self, RuleError> {
        let name = name.into();
        if name.is_empty() {
            return Err(RuleError::EmptyName);
        }
        rule.validate()?;
        self.rules.insert(name, rule);
        Ok(self)
    }

    /// Replace the rule used for unregistered names.
    pub fn with_default(mut self, rule: Rule) -> Result<Self, RuleError> {
        rule.validate()?;
        self.default = rule;
        Ok(self)
    }

    /// Look up `name`, reporting whether the default was used.
    pub fn lookup(&self, name: &str) -> RuleLookup<'_> {
        match self.rules.get(name) {
            Some(rule) => RuleLookup::Registered(rule),
            None => RuleLookup::Fallback(&self.default),
        }
    }

    /// Rule for `name`, or the default rule.
    pub fn rule_for(&self, name: &str) -> &Rule {
        self.lookup(name).rule()
    }

    /// The rule unregistered names receive.
    pub fn default_rule(&self) -> &Rule {
        &self.default
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
