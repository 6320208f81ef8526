//! Score-generation methods: manual, point-buy, and standard array
//!
//! Each method validates the *base* ability set (pre-racial). Manual
//! entry is always valid from the engine's perspective; the caller may
//! still surface implausible scores as a soft warning.

use crate::types::{AbilitySet, GenerationMethod, ValidationError};
use rand::Rng;

/// Total points available for point-buy
pub const POINT_BUY_BUDGET: i32 = 27;
/// Lowest score purchasable with point-buy
pub const POINT_BUY_MIN: i32 = 8;
/// Highest score purchasable with point-buy
pub const POINT_BUY_MAX: i32 = 15;

/// The canonical standard-array values, assigned exactly once each
pub const STANDARD_ARRAY: [i32; 6] = [15, 14, 13, 12, 10, 8];

/// Point cost for a score, or None outside the legal range. Pricing is
/// nonlinear: one point per step up to 13, then 14 costs 7 and 15
/// costs 9.
pub fn point_buy_cost(score: i32) -> Option<i32> {
    match score {
        8..=13 => Some(score - 8),
        14 => Some(7),
        15 => Some(9),
        _ => None,
    }
}

/// Validate base scores against the chosen generation method,
/// returning every problem found
pub fn validate(method: GenerationMethod, base: &AbilitySet) -> Vec<ValidationError> {
    match method {
        GenerationMethod::Manual => Vec::new(),
        GenerationMethod::PointBuy => validate_point_buy(base),
        GenerationMethod::StandardArray => validate_standard_array(base),
    }
}

fn validate_point_buy(base: &AbilitySet) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut spent = 0;

    for (ability, score) in base.iter() {
        match point_buy_cost(score) {
            Some(cost) => spent += cost,
            None => errors.push(ValidationError::new(
                ability.name(),
                format!(
                    "score {} is outside the point-buy range {}-{}",
                    score, POINT_BUY_MIN, POINT_BUY_MAX
                ),
            )),
        }
    }

    if spent > POINT_BUY_BUDGET {
        errors.push(ValidationError::new(
            "abilities",
            format!(
                "point-buy budget exceeded: spent {} of {}",
                spent, POINT_BUY_BUDGET
            ),
        ));
    }

    errors
}

fn validate_standard_array(base: &AbilitySet) -> Vec<ValidationError> {
    // Order of assignment is irrelevant; duplication or omission is not.
    let mut assigned = base.values();
    assigned.sort_unstable();
    let mut canonical = STANDARD_ARRAY;
    canonical.sort_unstable();

    if assigned == canonical {
        Vec::new()
    } else {
        vec![ValidationError::new(
            "abilities",
            format!(
                "scores must use each of {:?} exactly once",
                STANDARD_ARRAY
            ),
        )]
    }
}

/// Baseline scores a method resets to. Switching methods is
/// destructive: the caller confirms before discarding entered scores.
pub fn baseline_scores(method: GenerationMethod) -> AbilitySet {
    AbilitySet::uniform(method.baseline())
}

/// Roll a full set of scores with 4d6-drop-lowest, for feeding the
/// manual method. Deterministic given the RNG.
pub fn roll_scores(rng: &mut impl Rng) -> AbilitySet {
    let mut scores = AbilitySet::default();
    for &ability in crate::types::Ability::all() {
        let mut rolls: Vec<i32> = (0..4).map(|_| rng.gen_range(1..=6)).collect();
        rolls.sort_unstable();
        scores.set(ability, rolls[1..].iter().sum());
    }
    scores
}
