//! Derived stats - pure arithmetic over finalized scores and level
//!
//! Everything here is a deterministic function of its inputs: ability
//! modifiers, the proficiency step function, skill bonuses, initiative,
//! level-1 hit points, and passive perception.

use crate::types::{Ability, AbilitySet};

/// Ability modifier: floor((score - 10) / 2) with floor division, so a
/// score of 9 yields -1, not 0
pub fn ability_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// Proficiency bonus step function: +2 at levels 1-4, stepping up at
/// levels 5, 9, 13, and 17. Levels outside 1-20 clamp to the nearest
/// step rather than erroring.
pub fn proficiency_bonus(level: u32) -> i32 {
    match level {
        0..=4 => 2,
        5..=8 => 3,
        9..=12 => 4,
        13..=16 => 5,
        _ => 6,
    }
}

/// Skill bonus: governing ability modifier, plus proficiency bonus if
/// the skill is in the proficient set
pub fn skill_bonus(scores: &AbilitySet, governing: Ability, proficient: bool, level: u32) -> i32 {
    let modifier = ability_modifier(scores.get(governing));
    if proficient {
        modifier + proficiency_bonus(level)
    } else {
        modifier
    }
}

/// Initiative is the dexterity modifier
pub fn initiative(scores: &AbilitySet) -> i32 {
    ability_modifier(scores.get(Ability::Dexterity))
}

/// Level-1 hit points: the hit die's maximum face plus the constitution
/// modifier, never below 1. Levels above 1 are entered manually by the
/// caller.
pub fn hit_points_at_level_1(hit_die: u32, scores: &AbilitySet) -> i32 {
    (hit_die as i32 + ability_modifier(scores.get(Ability::Constitution))).max(1)
}

/// Passive perception: 10 plus the Perception skill bonus
pub fn passive_perception(scores: &AbilitySet, perception_proficient: bool, level: u32) -> i32 {
    10 + skill_bonus(scores, Ability::Wisdom, perception_proficient, level)
}
