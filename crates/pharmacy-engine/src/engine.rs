//! Transition engine implementing the [`ShelfLifeCalculator`] trait.
//!
//! One generic algorithm parameterised by the rule record:
//! 1. look up the rule by name,
//! 2. compute the day's adjustment from the pre-decrement expiry,
//! 3. clamp benefit into `[MIN_BENEFIT, MAX_BENEFIT]`,
//! 4. count expiry down unless the rule is exempt.

use pharmacy_core::constants::clamp_benefit;
use pharmacy_core::rule::{Adjustment, Rule};
use pharmacy_core::traits::ShelfLifeCalculator;
use pharmacy_core::types::{Item, ItemState};
use tracing::{debug, trace};

use crate::rules::RuleTable;

/// The production shelf-life calculator.
#[derive(Debug, Clone, Default)]
pub struct ShelfEngine {
    table: RuleTable,
}

impl ShelfEngine {
    /// Create an engine over the given rule table.
    pub fn new(table: RuleTable) -> Self {
        Self { table }
    }

    /// Engine over [`RuleTable::standard`].
    pub fn standard() -> Self {
        Self::new(RuleTable::standard())
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }
}

/// Benefit after one day under `rule`, starting from `expiry` and `value`.
///
/// The result is always clamped, even for frozen rules, so an item that
/// entered out of range leaves in range.
pub fn next_value(rule: &Rule, expiry: i64, value: i64) -> i64 {
    match rule.adjustment(expiry) {
        Adjustment::Shift(delta) => clamp_benefit(value.saturating_add(delta)),
        Adjustment::Reset => clamp_benefit(0),
    }
}

/// Expiry after one day under `rule`.
fn next_expiry(rule: &Rule, expiry: i64) -> i64 {
    if rule.counts_down {
        expiry.saturating_sub(1)
    } else {
        expiry
    }
}

impl ShelfLifeCalculator for ShelfEngine {
    fn rule_for(&self, name: &str) -> &Rule {
        self.table.rule_for(name)
    }

    fn next_state(&self, item: &Item) -> ItemState {
        let lookup = self.table.lookup(&item.name);
        if lookup.is_fallback() {
            trace!(name = %item.name, "no registered rule, applying default");
        }
        let rule = lookup.rule();

        // Both fields derive from the pre-decrement expiry.
        let next = ItemState {
            expiry: next_expiry(rule, item.expiry),
            value: next_value(rule, item.expiry, item.value),
        };

        debug!(
            name = %item.name,
            expiry = item.expiry,
            value = item.value,
            next_expiry = next.expiry,
            next_value = next.value,
            "advanced item"
        );
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pharmacy_core::constants::{
        DAFALGAN, FERVEX, HERBAL_TEA, MAGIC_PILL, MAX_BENEFIT, MIN_BENEFIT,
    };
    use pharmacy_core::rule::Tier;
    use proptest::prelude::*;

    fn engine() -> ShelfEngine {
        ShelfEngine::standard()
    }

    fn step(name: &str, expiry: i64, value: i64) -> (i64, i64) {
        let item = Item::new(name, expiry, value).unwrap();
        let next = engine().next_state(&item);
        (next.expiry, next.value)
    }

    // --- default rule ---

    #[test]
    fn default_decays_by_one() {
        assert_eq!(step("X", 2, 3), (1, 2));
    }

    #[test]
    fn default_last_unexpired_day() {
        assert_eq!(step("Doliprane", 1, 10), (0, 9));
    }

    #[test]
    fn default_decays_twice_as_fast_once_expired() {
        assert_eq!(step("Doliprane", 0, 10), (-1, 8));
        assert_eq!(step("Doliprane", -12, 10), (-13, 8));
    }

    #[test]
    fn default_never_below_zero() {
        assert_eq!(step("Doliprane", 5, 0), (4, 0));
        assert_eq!(step("Doliprane", -1, 1), (-2, 0));
    }

    // --- herbal tea ---

    #[test]
    fn herbal_tea_gains() {
        assert_eq!(step(HERBAL_TEA, 10, 5), (9, 6));
    }

    #[test]
    fn herbal_tea_gains_double_once_expired() {
        assert_eq!(step(HERBAL_TEA, 0, 5), (-1, 7));
    }

    #[test]
    fn herbal_tea_capped_at_max() {
        assert_eq!(step(HERBAL_TEA, 3, 49), (2, 50));
        assert_eq!(step(HERBAL_TEA, -3, 49), (-4, 50));
        assert_eq!(step(HERBAL_TEA, 3, MAX_BENEFIT), (2, MAX_BENEFIT));
    }

    // --- fervex ---

    #[test]
    fn fervex_gains_one_far_from_expiry() {
        assert_eq!(step(FERVEX, 12, 35), (11, 36));
        assert_eq!(step(FERVEX, 11, 35), (10, 36));
    }

    #[test]
    fn fervex_gains_two_at_ten_days() {
        assert_eq!(step(FERVEX, 10, 20), (9, 22));
        assert_eq!(step(FERVEX, 6, 20), (5, 22));
    }

    #[test]
    fn fervex_gains_three_at_five_days() {
        assert_eq!(step(FERVEX, 5, 20), (4, 23));
        assert_eq!(step(FERVEX, 1, 20), (0, 23));
    }

    #[test]
    fn fervex_drops_to_zero_once_expired() {
        assert_eq!(step(FERVEX, 0, 40), (-1, 0));
        assert_eq!(step(FERVEX, -4, 0), (-5, 0));
    }

    #[test]
    fn fervex_capped_at_max() {
        assert_eq!(step(FERVEX, 3, 49), (2, 50));
    }

    // --- magic pill ---

    #[test]
    fn magic_pill_is_frozen() {
        assert_eq!(step(MAGIC_PILL, 15, 40), (15, 40));
        assert_eq!(step(MAGIC_PILL, 0, 40), (0, 40));
        assert_eq!(step(MAGIC_PILL, -3, 0), (-3, 0));
    }

    // --- dafalgan ---

    #[test]
    fn dafalgan_decays_by_two() {
        assert_eq!(step(DAFALGAN, 3, 10), (2, 8));
    }

    #[test]
    fn dafalgan_decays_by_four_once_expired() {
        assert_eq!(step(DAFALGAN, 0, 10), (-1, 6));
    }

    #[test]
    fn dafalgan_last_unexpired_day() {
        assert_eq!(step(DAFALGAN, 1, 5), (0, 3));
    }

    #[test]
    fn dafalgan_clamps_at_zero() {
        assert_eq!(step(DAFALGAN, 1, 1), (0, MIN_BENEFIT));
        assert_eq!(step(DAFALGAN, -1, 3), (-2, MIN_BENEFIT));
    }

    // --- batch operations ---

    #[test]
    fn advance_preserves_order_and_length() {
        let items = vec![
            Item::new("Doliprane", 20, 30).unwrap(),
            Item::new(HERBAL_TEA, 10, 5).unwrap(),
            Item::new(FERVEX, 12, 35).unwrap(),
            Item::new(MAGIC_PILL, 15, 40).unwrap(),
        ];
        let next = engine().advance(items);
        assert_eq!(
            next,
            vec![
                Item::new("Doliprane", 19, 29).unwrap(),
                Item::new(HERBAL_TEA, 9, 6).unwrap(),
                Item::new(FERVEX, 11, 36).unwrap(),
                Item::new(MAGIC_PILL, 15, 40).unwrap(),
            ]
        );
    }

    #[test]
    fn duplicate_names_are_independent() {
        let mut items = vec![
            Item::new(DAFALGAN, 5, 10).unwrap(),
            Item::new(DAFALGAN, 0, 3).unwrap(),
        ];
        engine().advance_in_place(&mut items);
        assert_eq!(items[0].state(), ItemState::new(4, 8));
        assert_eq!(items[1].state(), ItemState::new(-1, 0));
    }

    #[test]
    fn advance_empty_batch() {
        assert!(engine().advance(Vec::new()).is_empty());
    }

    #[test]
    fn step_mutates_in_place() {
        let mut item = Item::new(HERBAL_TEA, 1, 1).unwrap();
        let e = engine();
        e.step(&mut item);
        e.step(&mut item);
        assert_eq!(item.state(), ItemState::new(-1, 4));
    }

    #[test]
    fn next_state_does_not_mutate() {
        let item = Item::new(FERVEX, 3, 3).unwrap();
        let _ = engine().next_state(&item);
        assert_eq!(item.state(), ItemState::new(3, 3));
    }

    // --- custom tables ---

    #[test]
    fn custom_table_changes_behaviour() {
        let table = RuleTable::empty()
            .with_rule("Ginseng", Rule::tiered(0, [Tier::new(3, 5)]))
            .unwrap();
        let e = ShelfEngine::new(table);
        let item = Item::new("Ginseng", 3, 10).unwrap();
        assert_eq!(e.next_state(&item), ItemState::new(2, 15));
        // unregistered in this table
        let pill = Item::new(MAGIC_PILL, 3, 10).unwrap();
        assert_eq!(e.next_state(&pill), ItemState::new(2, 9));
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        let item = Item {
            name: MAGIC_PILL.to_string(),
            expiry: 4,
            value: 80,
        };
        assert_eq!(engine().next_state(&item), ItemState::new(4, MAX_BENEFIT));
    }

    #[test]
    fn expiry_saturates_at_minimum() {
        let item = Item::new("Doliprane", i64::MIN, 10).unwrap();
        assert_eq!(engine().next_state(&item).expiry, i64::MIN);
    }

    // --- dyn compatibility ---

    #[test]
    fn engine_is_object_safe() {
        let e = engine();
        let dyn_e: &dyn ShelfLifeCalculator = &e;
        assert_eq!(dyn_e.rule_for(MAGIC_PILL), &Rule::frozen());
    }

    // --- proptest ---

    fn any_name() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(HERBAL_TEA.to_string()),
            Just(FERVEX.to_string()),
            Just(MAGIC_PILL.to_string()),
            Just(DAFALGAN.to_string()),
            "[A-Za-z ]{1,12}",
        ]
    }

    proptest! {
        #[test]
        fn benefit_stays_in_bounds(
            name in any_name(),
            expiry in -1_000i64..1_000,
            value in MIN_BENEFIT..=MAX_BENEFIT,
        ) {
            let item = Item::new(name, expiry, value).unwrap();
            let next = engine().next_state(&item);
            prop_assert!((MIN_BENEFIT..=MAX_BENEFIT).contains(&next.value));
        }

        #[test]
        fn expiry_counts_down_unless_frozen(
            name in any_name(),
            expiry in -1_000i64..1_000,
            value in MIN_BENEFIT..=MAX_BENEFIT,
        ) {
            let frozen = name == MAGIC_PILL;
            let item = Item::new(name, expiry, value).unwrap();
            let next = engine().next_state(&item);
            if frozen {
                prop_assert_eq!(next, item.state());
            } else {
                prop_assert_eq!(next.expiry, expiry - 1);
            }
        }

        #[test]
        fn batch_matches_per_item(
            batch in proptest::collection::vec(
                (any_name(), -50i64..50, MIN_BENEFIT..=MAX_BENEFIT),
                0..16,
            ),
        ) {
            let e = engine();
            let items: Vec<Item> = batch
                .into_iter()
                .map(|(n, x, v)| Item::new(n, x, v).unwrap())
                .collect();
            let one_by_one: Vec<ItemState> = items.iter().map(|i| e.next_state(i)).collect();

            let mut reversed = items.clone();
            reversed.reverse();
            let mut reversed = e.advance(reversed);
            reversed.reverse();

            let advanced = e.advance(items);
            let states: Vec<ItemState> = advanced.iter().map(Item::state).collect();
            prop_assert_eq!(&states, &one_by_one);
            prop_assert_eq!(advanced, reversed);
        }
    }
}
