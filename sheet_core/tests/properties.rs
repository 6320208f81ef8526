//! Property tests for the arithmetic core

use proptest::prelude::*;
use sheet_core::derive::{ability_modifier, proficiency_bonus};
use sheet_core::scores::{point_buy_cost, validate, STANDARD_ARRAY, POINT_BUY_BUDGET};
use sheet_core::types::{Ability, AbilitySet, GenerationMethod};
use sheet_core::RuleSet;

fn ability_set(values: [i32; 6]) -> AbilitySet {
    let mut set = AbilitySet::uniform(0);
    for (&ability, &value) in Ability::all().iter().zip(values.iter()) {
        set.set(ability, value);
    }
    set
}

proptest! {
    #[test]
    fn point_buy_cost_is_monotonic(score in 8..15i32) {
        let here = point_buy_cost(score).unwrap();
        let next = point_buy_cost(score + 1).unwrap();
        prop_assert!(next >= here);
    }

    #[test]
    fn budget_error_iff_total_cost_exceeds_budget(values in prop::array::uniform6(8..=15i32)) {
        let total: i32 = values.iter().map(|&v| point_buy_cost(v).unwrap()).sum();
        let errors = validate(GenerationMethod::PointBuy, &ability_set(values));
        let has_budget_error = errors.iter().any(|e| e.message.contains("budget"));
        prop_assert_eq!(has_budget_error, total > POINT_BUY_BUDGET);
    }

    #[test]
    fn modifier_steps_by_one_per_two_points(score in -10..40i32) {
        prop_assert_eq!(ability_modifier(score + 2), ability_modifier(score) + 1);
    }

    #[test]
    fn modifier_anchored_at_ten(offset in 0..15i32) {
        // Even scores n >= 10 have modifier (n - 10) / 2 exactly
        prop_assert_eq!(ability_modifier(10 + 2 * offset), offset);
    }

    #[test]
    fn proficiency_bonus_is_non_decreasing(level in 1..20u32) {
        prop_assert!(proficiency_bonus(level + 1) >= proficiency_bonus(level));
    }

    #[test]
    fn standard_array_valid_under_any_permutation(
        assignment in Just(STANDARD_ARRAY.to_vec()).prop_shuffle()
    ) {
        let mut values = [0i32; 6];
        values.copy_from_slice(&assignment);
        let errors = validate(GenerationMethod::StandardArray, &ability_set(values));
        prop_assert!(errors.is_empty());
    }

    #[test]
    fn racial_deltas_are_order_independent(base in prop::array::uniform6(3..=18i32)) {
        // Applying race then subrace matches applying a pre-summed map
        let rules = RuleSet::default();
        let dwarf = rules.race("Dwarf").unwrap();
        let mountain = dwarf.subrace("Mountain Dwarf");

        let base_set = ability_set(base);
        let combined = sheet_core::scores::apply_racial_asi(&base_set, dwarf, mountain, &[]);

        let mut sequential = base_set;
        for (&ability, &amount) in &dwarf.asi {
            sequential.add(ability, amount);
        }
        for (&ability, &amount) in &mountain.unwrap().asi {
            sequential.add(ability, amount);
        }
        prop_assert_eq!(combined, sequential);
    }

    #[test]
    fn proficiency_bonus_breakpoints_match_step_formula(level in 1..=20u32) {
        // +2 at level 1, stepping at 5, 9, 13, 17
        let expected = 2 + ((level - 1) / 4) as i32;
        prop_assert_eq!(proficiency_bonus(level), expected);
    }
}
