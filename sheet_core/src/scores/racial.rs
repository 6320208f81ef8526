//! Racial modifier application
//!
//! Merges race and subrace ability score increases into the base
//! scores. Flexible "choose N distinct abilities" grants are resolved
//! from the caller's choice before the fixed deltas are applied, so the
//! grant never masquerades as a real ability key.

use crate::ruleset::{Feature, FlexibleAsi, RaceDefinition, SubraceDefinition};
use crate::types::{Ability, AbilitySet, ValidationError};
use std::collections::HashMap;

/// Race and subrace descriptive fields merged into one view
#[derive(Debug, Clone, PartialEq)]
pub struct RaceProfile {
    pub speed: u32,
    pub darkvision: Option<u32>,
    pub languages: Vec<String>,
    pub features: Vec<Feature>,
    /// Every ability delta that was applied, flexible choices included
    pub applied_asi: HashMap<Ability, i32>,
}

/// Sum race and (optional) subrace fixed ASI maps key-by-key
fn combined_asi(
    race: &RaceDefinition,
    subrace: Option<&SubraceDefinition>,
) -> HashMap<Ability, i32> {
    let mut deltas = race.asi.clone();
    if let Some(sub) = subrace {
        for (&ability, &amount) in &sub.asi {
            *deltas.entry(ability).or_insert(0) += amount;
        }
    }
    deltas
}

/// The flexible grant in effect, race-level taking precedence
pub(crate) fn flexible_grant(
    race: &RaceDefinition,
    subrace: Option<&SubraceDefinition>,
) -> Option<FlexibleAsi> {
    race.asi_choice
        .or_else(|| subrace.and_then(|s| s.asi_choice))
}

/// Check a caller-supplied flexible-ASI choice: the right number of
/// abilities, all distinct
pub fn validate_flexible_choice(
    grant: &FlexibleAsi,
    choice: &[Ability],
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if choice.len() != grant.count as usize {
        errors.push(ValidationError::new(
            "asi_choice",
            format!(
                "race grants +{} to {} abilities of your choice; {} chosen",
                grant.amount,
                grant.count,
                choice.len()
            ),
        ));
    }

    let mut seen = choice.to_vec();
    seen.sort_unstable();
    seen.dedup();
    if seen.len() != choice.len() {
        errors.push(ValidationError::new(
            "asi_choice",
            "chosen abilities must be distinct".to_string(),
        ));
    }

    errors
}

/// Apply race + subrace ability score increases to base scores.
///
/// Pure and order-independent: fixed deltas commute, and the flexible
/// choice is folded in as ordinary deltas before application. Every
/// ability key is present in the result even with a zero delta.
pub fn apply_racial_asi(
    base: &AbilitySet,
    race: &RaceDefinition,
    subrace: Option<&SubraceDefinition>,
    any_choice: &[Ability],
) -> AbilitySet {
    let mut deltas = combined_asi(race, subrace);

    if let Some(grant) = flexible_grant(race, subrace) {
        for &ability in any_choice {
            *deltas.entry(ability).or_insert(0) += grant.amount;
        }
    }

    let mut scores = *base;
    for (&ability, &amount) in &deltas {
        scores.add(ability, amount);
    }
    scores
}

/// Merge race and subrace descriptive fields: speed and darkvision
/// override, languages and features append
pub fn resolve_race_profile(
    race: &RaceDefinition,
    subrace: Option<&SubraceDefinition>,
    any_choice: &[Ability],
) -> RaceProfile {
    let mut languages = race.languages.clone();
    let mut features = race.features.clone();
    let mut speed = race.speed;
    let mut darkvision = race.darkvision;

    if let Some(sub) = subrace {
        languages.extend(sub.additional_languages.iter().cloned());
        features.extend(sub.features.iter().cloned());
        if let Some(s) = sub.speed {
            speed = s;
        }
        if let Some(d) = sub.darkvision {
            darkvision = Some(d);
        }
    }

    let mut applied_asi = combined_asi(race, subrace);
    if let Some(grant) = flexible_grant(race, subrace) {
        for &ability in any_choice {
            *applied_asi.entry(ability).or_insert(0) += grant.amount;
        }
    }

    RaceProfile {
        speed,
        darkvision,
        languages,
        features,
        applied_asi,
    }
}
