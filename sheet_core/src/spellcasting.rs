//! Spellcasting resolution: casting ability, save DC, attack bonus,
//! and spell slots by class and level

use crate::derive::{ability_modifier, proficiency_bonus};
use crate::ruleset::tables::{full_caster_slots, half_caster_effective_level, pact_slots};
use crate::ruleset::{CasterProgression, ClassDefinition};
use crate::types::{Ability, AbilitySet};
use serde::{Deserialize, Serialize};

/// Available spell slots. Full and half casters share the
/// per-spell-level array; pact magic is a (count, level) pair with a
/// different shape. The two must not be conflated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpellSlots {
    /// Slot count per spell level 1st..9th
    Leveled([u32; 9]),
    /// Pact magic: `slots` slots, all of `slot_level`
    Pact { slots: u32, slot_level: u32 },
}

impl SpellSlots {
    /// Whether any slot is available at all
    pub fn is_empty(&self) -> bool {
        match self {
            SpellSlots::Leveled(slots) => slots.iter().all(|&n| n == 0),
            SpellSlots::Pact { slots, .. } => *slots == 0,
        }
    }
}

/// Resolved spellcasting numbers for a caster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellcastingBlock {
    pub ability: Ability,
    pub save_dc: i32,
    pub attack_bonus: i32,
    pub slots: SpellSlots,
}

/// Resolve the spellcasting block for a class at a level, or None for
/// non-casters. None is a normal outcome, not an error.
pub fn resolve(
    class: &ClassDefinition,
    level: u32,
    final_scores: &AbilitySet,
) -> Option<SpellcastingBlock> {
    let casting = class.spellcasting?;

    let modifier = ability_modifier(final_scores.get(casting.ability));
    let prof = proficiency_bonus(level);

    let slots = match casting.progression {
        CasterProgression::Full => SpellSlots::Leveled(full_caster_slots(level)),
        CasterProgression::Half => {
            SpellSlots::Leveled(full_caster_slots(half_caster_effective_level(level)))
        }
        CasterProgression::Pact => {
            let (slots, slot_level) = pact_slots(level);
            SpellSlots::Pact { slots, slot_level }
        }
    };

    Some(SpellcastingBlock {
        ability: casting.ability,
        save_dc: 8 + prof + modifier,
        attack_bonus: prof + modifier,
        slots,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ruleset::RuleSet;

    #[test]
    fn test_non_caster_resolves_to_none() {
        let rules = RuleSet::default();
        let fighter = rules.class("Fighter").unwrap();
        let scores = AbilitySet::uniform(10);
        assert!(resolve(fighter, 1, &scores).is_none());
    }

    #[test]
    fn test_full_caster_dc_and_attack() {
        let rules = RuleSet::default();
        let wizard = rules.class("Wizard").unwrap();
        let mut scores = AbilitySet::uniform(10);
        scores.set(Ability::Intelligence, 16); // +3

        let block = resolve(wizard, 1, &scores).unwrap();
        assert_eq!(block.ability, Ability::Intelligence);
        assert_eq!(block.save_dc, 8 + 2 + 3);
        assert_eq!(block.attack_bonus, 2 + 3);
        assert_eq!(block.slots, SpellSlots::Leveled([2, 0, 0, 0, 0, 0, 0, 0, 0]));
    }

    #[test]
    fn test_half_caster_uses_effective_level() {
        // Level 2 half caster acts as a level-1 full caster
        let rules = RuleSet::default();
        let ranger = rules.class("Ranger").unwrap();
        let scores = AbilitySet::uniform(10);

        let block = resolve(ranger, 2, &scores).unwrap();
        assert_eq!(block.slots, SpellSlots::Leveled([2, 0, 0, 0, 0, 0, 0, 0, 0]));

        let block = resolve(ranger, 5, &scores).unwrap();
        assert_eq!(block.slots, SpellSlots::Leveled([4, 2, 0, 0, 0, 0, 0, 0, 0]));
    }

    #[test]
    fn test_pact_caster_pair_shape() {
        // Pact slots at level 3: two level-2 slots
        let rules = RuleSet::default();
        let warlock = rules.class("Warlock").unwrap();
        let scores = AbilitySet::uniform(10);

        let block = resolve(warlock, 3, &scores).unwrap();
        assert_eq!(
            block.slots,
            SpellSlots::Pact {
                slots: 2,
                slot_level: 2
            }
        );
    }

    #[test]
    fn test_out_of_table_level_yields_empty_slots() {
        let rules = RuleSet::default();
        let wizard = rules.class("Wizard").unwrap();
        let warlock = rules.class("Warlock").unwrap();
        let scores = AbilitySet::uniform(10);

        let block = resolve(wizard, 25, &scores).unwrap();
        assert!(block.slots.is_empty());

        let block = resolve(warlock, 0, &scores).unwrap();
        assert!(block.slots.is_empty());
    }
}
