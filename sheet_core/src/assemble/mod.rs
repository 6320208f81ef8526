//! CharacterAssembler - orchestrates every rules stage into one
//! immutable output record
//!
//! Assembly runs score validation, racial application, proficiency
//! resolution, derived stats, and spellcasting in order, collecting
//! *all* validation errors so the caller can display every problem at
//! once. Any error blocks assembly; there is no partial output.

mod selections;

pub use selections::Selections;

use crate::derive;
use crate::proficiency;
use crate::ruleset::{Feature, RuleSet};
use crate::scores;
use crate::spellcasting::{self, SpellcastingBlock};
use crate::types::{Ability, AbilitySet, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Identity fields of the finished record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub name: String,
    pub player: String,
    pub race: String,
    #[serde(default)]
    pub subrace: Option<String>,
    pub class: String,
    pub level: u32,
    pub background: String,
    #[serde(default)]
    pub alignment: Option<String>,
}

/// Resolved racial traits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceBlock {
    pub speed: u32,
    #[serde(default)]
    pub darkvision: Option<u32>,
    pub languages: Vec<String>,
    pub features: Vec<Feature>,
    pub applied_asi: HashMap<Ability, i32>,
}

/// Resolved class grants and choices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassBlock {
    pub saving_throws: Vec<Ability>,
    pub hit_die: u32,
    pub chosen_skills: Vec<String>,
    pub chosen_equipment: Vec<String>,
}

/// Resolved background grants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundBlock {
    pub skills: Vec<String>,
    pub languages: Vec<String>,
    pub tools: Vec<String>,
    pub feature: Feature,
    pub equipment: Vec<String>,
}

/// Derived combat numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatBlock {
    pub hit_points: i32,
    pub initiative: i32,
    pub passive_perception: i32,
    pub speed: u32,
    #[serde(default)]
    pub darkvision: Option<u32>,
}

/// The immutable output record. A new `Selections` state produces a
/// new record; this one is never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedCharacter {
    pub schema_version: u32,
    pub meta: Meta,
    pub base_abilities: AbilitySet,
    pub final_abilities: AbilitySet,
    pub race: RaceBlock,
    pub class: ClassBlock,
    pub background: BackgroundBlock,
    /// Skill name -> total bonus, for every skill in the ruleset
    pub skills: BTreeMap<String, i32>,
    pub combat: CombatBlock,
    #[serde(default)]
    pub spells: Option<SpellcastingBlock>,
    pub chosen_spells: Vec<String>,
}

fn require_non_empty(value: &str, field: &str, errors: &mut Vec<ValidationError>) {
    if value.trim().is_empty() {
        errors.push(ValidationError::new(field, format!("{} is required", field)));
    }
}

/// Assemble a validated character from the caller's selections.
///
/// Returns the full error list on any failure; the selections are
/// never mutated, and identical input always yields identical output.
pub fn assemble(
    selections: &Selections,
    rules: &RuleSet,
) -> Result<DerivedCharacter, Vec<ValidationError>> {
    let mut errors = Vec::new();

    // Identity
    require_non_empty(&selections.name, "name", &mut errors);
    require_non_empty(&selections.race, "race", &mut errors);
    require_non_empty(&selections.class, "class", &mut errors);
    require_non_empty(&selections.background, "background", &mut errors);
    if !(1..=20).contains(&selections.level) {
        errors.push(ValidationError::new(
            "level",
            format!("level must be 1-20, got {}", selections.level),
        ));
    }

    // Reference lookups; an unknown name is recoverable input, not a fault
    let race = rules.race(&selections.race);
    if race.is_none() && !selections.race.trim().is_empty() {
        errors.push(ValidationError::new(
            "race",
            format!("unknown race '{}'", selections.race),
        ));
    }
    let subrace = race.zip(selections.subrace.as_deref()).and_then(|(r, name)| {
        let found = r.subrace(name);
        if found.is_none() {
            errors.push(ValidationError::new(
                "subrace",
                format!("unknown subrace '{}' for race '{}'", name, r.name),
            ));
        }
        found
    });
    let class = rules.class(&selections.class);
    if class.is_none() && !selections.class.trim().is_empty() {
        errors.push(ValidationError::new(
            "class",
            format!("unknown class '{}'", selections.class),
        ));
    }
    let background = rules.background(&selections.background);
    if background.is_none() && !selections.background.trim().is_empty() {
        errors.push(ValidationError::new(
            "background",
            format!("unknown background '{}'", selections.background),
        ));
    }

    // Stage 1: ability score generation
    errors.extend(scores::validate(selections.method, &selections.base_scores));

    // Stage 2: racial modifiers
    let mut final_abilities = selections.base_scores;
    let mut race_block = None;
    if let Some(race) = race {
        if let Some(grant) = scores::flexible_grant(race, subrace) {
            errors.extend(scores::validate_flexible_choice(
                &grant,
                &selections.asi_choice,
            ));
        }
        final_abilities =
            scores::apply_racial_asi(&selections.base_scores, race, subrace, &selections.asi_choice);
        let profile = scores::resolve_race_profile(race, subrace, &selections.asi_choice);
        race_block = Some(RaceBlock {
            speed: profile.speed,
            darkvision: profile.darkvision,
            languages: profile.languages,
            features: profile.features,
            applied_asi: profile.applied_asi,
        });
    }

    // Stage 3: proficiencies
    let background_skills: Vec<String> = background
        .map(|b| b.skills.clone())
        .unwrap_or_default();
    let mut proficient_skills = std::collections::BTreeSet::new();
    if let Some(class) = class {
        let outcome = proficiency::resolve(
            &selections.class_skills,
            &background_skills,
            &class.skill_choices,
        );
        errors.extend(outcome.errors);
        proficient_skills = outcome.skills;
    }

    let mut background_languages = Vec::new();
    if let Some(background) = background {
        let (languages, language_errors) = proficiency::resolve_languages(
            &background.languages,
            &selections.background_languages,
            rules,
        );
        errors.extend(language_errors);
        background_languages = languages;
    }

    // Equipment groups: exactly one choice per group, drawn from the group
    let mut chosen_equipment = Vec::new();
    if let Some(class) = class {
        for (index, group) in class.equipment_groups.iter().enumerate() {
            match selections.equipment_choices.get(&index) {
                Some(choice) if group.options.contains(choice) => {
                    chosen_equipment.push(choice.clone());
                }
                Some(choice) => errors.push(ValidationError::new(
                    "equipment",
                    format!("'{}' is not an option in equipment group {}", choice, index + 1),
                )),
                None => errors.push(ValidationError::new(
                    "equipment",
                    format!("equipment group {} has no choice made", index + 1),
                )),
            }
        }
        for &index in selections.equipment_choices.keys() {
            if index >= class.equipment_groups.len() {
                errors.push(ValidationError::new(
                    "equipment",
                    format!("equipment group {} does not exist", index + 1),
                ));
            }
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // All inputs validated; the lookups below cannot miss.
    let race_block = race_block.expect("race resolved above");
    let class = class.expect("class resolved above");
    let background = background.expect("background resolved above");

    // Stage 4: derived stats
    let level = selections.level;
    let mut skills = BTreeMap::new();
    for (skill, governing) in rules.skills() {
        let proficient = proficient_skills.contains(skill);
        skills.insert(
            skill.to_string(),
            derive::skill_bonus(&final_abilities, governing, proficient, level),
        );
    }
    let combat = CombatBlock {
        hit_points: derive::hit_points_at_level_1(class.hit_die, &final_abilities),
        initiative: derive::initiative(&final_abilities),
        passive_perception: derive::passive_perception(
            &final_abilities,
            proficient_skills.contains("perception"),
            level,
        ),
        speed: race_block.speed,
        darkvision: race_block.darkvision,
    };

    // Stage 5: spellcasting
    let spells = spellcasting::resolve(class, level, &final_abilities);

    Ok(DerivedCharacter {
        schema_version: crate::record::SCHEMA_VERSION,
        meta: Meta {
            name: selections.name.clone(),
            player: selections.player.clone(),
            race: selections.race.clone(),
            subrace: selections.subrace.clone(),
            class: selections.class.clone(),
            level,
            background: selections.background.clone(),
            alignment: selections.alignment.clone(),
        },
        base_abilities: selections.base_scores,
        final_abilities,
        race: race_block,
        class: ClassBlock {
            saving_throws: class.saving_throws.clone(),
            hit_die: class.hit_die,
            chosen_skills: selections.class_skills.clone(),
            chosen_equipment,
        },
        background: BackgroundBlock {
            skills: background.skills.clone(),
            languages: background_languages,
            tools: background.tools.clone(),
            feature: background.feature.clone(),
            equipment: background.equipment.clone(),
        },
        skills,
        combat,
        spells,
        chosen_spells: selections.chosen_spells.clone(),
    })
}
