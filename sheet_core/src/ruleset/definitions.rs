//! Static reference data types loaded from the ruleset files

use crate::types::Ability;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named racial or background feature with descriptive text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A flexible ability score increase: the player picks `count` distinct
/// abilities and each receives `amount`. Replaces the stringly-typed
/// "any" sentinel key found in older datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlexibleAsi {
    pub count: u32,
    pub amount: i32,
}

/// Race reference data. Subrace fields merge over (add to, not replace)
/// the parent race's fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<Feature>,
    /// Fixed ability score increases (ability -> increment)
    #[serde(default)]
    pub asi: HashMap<Ability, i32>,
    /// Optional player-chosen increase on top of the fixed map
    #[serde(default)]
    pub asi_choice: Option<FlexibleAsi>,
    pub speed: u32,
    /// Darkvision radius in feet; absent means none
    #[serde(default)]
    pub darkvision: Option<u32>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub subraces: Vec<SubraceDefinition>,
}

impl RaceDefinition {
    pub fn subrace(&self, name: &str) -> Option<&SubraceDefinition> {
        self.subraces.iter().find(|s| s.name == name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubraceDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub asi: HashMap<Ability, i32>,
    #[serde(default)]
    pub asi_choice: Option<FlexibleAsi>,
    /// Overrides the parent race's speed when present
    #[serde(default)]
    pub speed: Option<u32>,
    /// Overrides the parent race's darkvision when present
    #[serde(default)]
    pub darkvision: Option<u32>,
    /// Appended to the parent race's languages
    #[serde(default)]
    pub additional_languages: Vec<String>,
}

/// How many skills the class grants and from which menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillChoices {
    pub choose: usize,
    pub from: Vec<String>,
}

/// One starting-equipment option group. Exactly one option per group
/// must be chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentGroup {
    pub options: Vec<String>,
}

/// Spell slot progression category. Full and half casters share the
/// per-spell-level slot array; pact magic uses a (count, level) pair
/// with a different shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CasterProgression {
    Full,
    Half,
    Pact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spellcasting {
    pub ability: Ability,
    pub progression: CasterProgression,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDefinition {
    pub name: String,
    /// Maximum face of the hit die (10 = d10)
    pub hit_die: u32,
    /// Exactly two saving-throw proficiencies
    pub saving_throws: Vec<Ability>,
    pub skill_choices: SkillChoices,
    #[serde(default)]
    pub equipment_groups: Vec<EquipmentGroup>,
    /// Absent for non-casters; a normal, expected state
    #[serde(default)]
    pub spellcasting: Option<Spellcasting>,
}

/// A background's language grant: either a fixed list of named
/// languages or a count of free choices from the ruleset vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LanguageGrant {
    Choose(usize),
    Fixed(Vec<String>),
}

impl Default for LanguageGrant {
    fn default() -> Self {
        LanguageGrant::Fixed(Vec::new())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackgroundDefinition {
    pub name: String,
    /// Unconditional skill grants; never count against class picks
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub languages: LanguageGrant,
    #[serde(default)]
    pub tools: Vec<String>,
    pub feature: Feature,
    #[serde(default)]
    pub equipment: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellDefinition {
    pub name: String,
    /// 0 = cantrip
    pub level: u32,
    pub school: String,
    #[serde(default)]
    pub description: String,
}
