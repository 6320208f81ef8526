//! RuleSet store - immutable reference data loaded from TOML files
//!
//! Loaded once and read-only afterwards. The engine does not validate
//! the dataset's internal consistency; lookups that miss degrade to
//! documented defaults instead of failing.

mod definitions;
pub mod tables;

pub use definitions::{
    BackgroundDefinition, CasterProgression, ClassDefinition, EquipmentGroup, Feature,
    FlexibleAsi, LanguageGrant, RaceDefinition, SkillChoices, SpellDefinition, Spellcasting,
    SubraceDefinition,
};

use crate::types::Ability;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Hit die used when a class is missing from the dataset
pub const DEFAULT_HIT_DIE: u32 = 8;

/// Ruleset loading error
#[derive(Error, Debug)]
pub enum RulesError {
    #[error("Failed to read ruleset file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Ruleset validation error: {0}")]
    ValidationError(String),
}

/// Skill/language/alignment/spell vocabulary shared by all races,
/// classes, and backgrounds
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CoreData {
    /// Skill name -> governing ability
    skills: HashMap<String, Ability>,
    #[serde(default)]
    languages: Vec<String>,
    #[serde(default)]
    alignments: Vec<String>,
    #[serde(default)]
    spells: Vec<SpellDefinition>,
    /// Class name -> known-spell menu
    #[serde(default)]
    spell_lists: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RacesFile {
    races: Vec<RaceDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ClassesFile {
    classes: Vec<ClassDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BackgroundsFile {
    backgrounds: Vec<BackgroundDefinition>,
}

/// The complete immutable ruleset
#[derive(Debug, Clone)]
pub struct RuleSet {
    core: CoreData,
    races: Vec<RaceDefinition>,
    classes: Vec<ClassDefinition>,
    backgrounds: Vec<BackgroundDefinition>,
}

fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, RulesError> {
    let parsed: T = toml::from_str(content)?;
    Ok(parsed)
}

fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, RulesError> {
    let content = fs::read_to_string(path)?;
    parse_toml(&content)
}

impl RuleSet {
    /// Load a ruleset from a directory containing core.toml,
    /// races.toml, classes.toml, and backgrounds.toml
    pub fn load_from_dir(dir: &Path) -> Result<Self, RulesError> {
        let core: CoreData = load_toml(&dir.join("core.toml"))?;
        let races: RacesFile = load_toml(&dir.join("races.toml"))?;
        let classes: ClassesFile = load_toml(&dir.join("classes.toml"))?;
        let backgrounds: BackgroundsFile = load_toml(&dir.join("backgrounds.toml"))?;
        Ok(RuleSet {
            core,
            races: races.races,
            classes: classes.classes,
            backgrounds: backgrounds.backgrounds,
        })
    }

    /// Parse a ruleset from TOML strings
    pub fn parse(
        core: &str,
        races: &str,
        classes: &str,
        backgrounds: &str,
    ) -> Result<Self, RulesError> {
        let core: CoreData = parse_toml(core)?;
        let races: RacesFile = parse_toml(races)?;
        let classes: ClassesFile = parse_toml(classes)?;
        let backgrounds: BackgroundsFile = parse_toml(backgrounds)?;
        Ok(RuleSet {
            core,
            races: races.races,
            classes: classes.classes,
            backgrounds: backgrounds.backgrounds,
        })
    }

    // === Lookups ===

    pub fn race(&self, name: &str) -> Option<&RaceDefinition> {
        self.races.iter().find(|r| r.name == name)
    }

    pub fn class(&self, name: &str) -> Option<&ClassDefinition> {
        self.classes.iter().find(|c| c.name == name)
    }

    pub fn background(&self, name: &str) -> Option<&BackgroundDefinition> {
        self.backgrounds.iter().find(|b| b.name == name)
    }

    /// Governing ability for a skill, if the skill is known
    pub fn governing_ability(&self, skill: &str) -> Option<Ability> {
        self.core.skills.get(skill).copied()
    }

    /// Hit die for a class; an unknown class degrades to a d8
    pub fn hit_die(&self, class: &str) -> u32 {
        self.class(class).map(|c| c.hit_die).unwrap_or(DEFAULT_HIT_DIE)
    }

    pub fn is_known_language(&self, language: &str) -> bool {
        self.core.languages.iter().any(|l| l == language)
    }

    /// Known-spell menu for a class; empty for classes without one
    pub fn spell_list(&self, class: &str) -> &[String] {
        self.core
            .spell_lists
            .get(class)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    // === Enumeration (for caller-side menus) ===

    pub fn skills(&self) -> impl Iterator<Item = (&str, Ability)> {
        self.core.skills.iter().map(|(s, &a)| (s.as_str(), a))
    }

    pub fn races(&self) -> &[RaceDefinition] {
        &self.races
    }

    pub fn classes(&self) -> &[ClassDefinition] {
        &self.classes
    }

    pub fn backgrounds(&self) -> &[BackgroundDefinition] {
        &self.backgrounds
    }

    pub fn languages(&self) -> &[String] {
        &self.core.languages
    }

    pub fn alignments(&self) -> &[String] {
        &self.core.alignments
    }

    pub fn spells(&self) -> &[SpellDefinition] {
        &self.core.spells
    }
}

impl Default for RuleSet {
    /// The SRD-leaning dataset shipped with the crate
    fn default() -> Self {
        RuleSet::parse(
            include_str!("../../rules/core.toml"),
            include_str!("../../rules/races.toml"),
            include_str!("../../rules/classes.toml"),
            include_str!("../../rules/backgrounds.toml"),
        )
        .expect("embedded ruleset data is well-formed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ruleset_loads() {
        let rules = RuleSet::default();
        assert_eq!(rules.races().len(), 12);
        assert_eq!(rules.classes().len(), 12);
        assert_eq!(rules.backgrounds().len(), 6);
        assert_eq!(rules.skills().count(), 18);
        assert_eq!(rules.languages().len(), 16);
        assert_eq!(rules.alignments().len(), 9);
    }

    #[test]
    fn test_governing_abilities() {
        let rules = RuleSet::default();
        assert_eq!(rules.governing_ability("perception"), Some(Ability::Wisdom));
        assert_eq!(rules.governing_ability("athletics"), Some(Ability::Strength));
        assert_eq!(rules.governing_ability("stealth"), Some(Ability::Dexterity));
        assert_eq!(rules.governing_ability("basket weaving"), None);
    }

    #[test]
    fn test_unknown_class_hit_die_defaults_to_d8() {
        // Silent-default policy: a class missing from the dataset
        // degrades to a d8 rather than failing.
        let rules = RuleSet::default();
        assert_eq!(rules.hit_die("Artificer"), DEFAULT_HIT_DIE);
        assert_eq!(rules.hit_die("Fighter"), 10);
        assert_eq!(rules.hit_die("Barbarian"), 12);
        assert_eq!(rules.hit_die("Wizard"), 6);
    }

    #[test]
    fn test_race_subrace_lookup() {
        let rules = RuleSet::default();
        let elf = rules.race("Elf").unwrap();
        assert_eq!(elf.speed, 30);
        assert_eq!(elf.darkvision, Some(60));
        let wood = elf.subrace("Wood Elf").unwrap();
        assert_eq!(wood.speed, Some(35));
        assert!(elf.subrace("Sea Elf").is_none());
    }

    #[test]
    fn test_class_save_throws_are_two() {
        let rules = RuleSet::default();
        for class in rules.classes() {
            assert_eq!(
                class.saving_throws.len(),
                2,
                "{} must have exactly two saving throws",
                class.name
            );
        }
    }

    #[test]
    fn test_caster_progressions() {
        let rules = RuleSet::default();
        let wizard = rules.class("Wizard").unwrap().spellcasting.unwrap();
        assert_eq!(wizard.ability, Ability::Intelligence);
        assert_eq!(wizard.progression, CasterProgression::Full);

        let paladin = rules.class("Paladin").unwrap().spellcasting.unwrap();
        assert_eq!(paladin.progression, CasterProgression::Half);

        let warlock = rules.class("Warlock").unwrap().spellcasting.unwrap();
        assert_eq!(warlock.progression, CasterProgression::Pact);

        assert!(rules.class("Fighter").unwrap().spellcasting.is_none());
    }

    #[test]
    fn test_background_language_grants() {
        let rules = RuleSet::default();
        let acolyte = rules.background("Acolyte").unwrap();
        assert_eq!(acolyte.languages, LanguageGrant::Choose(2));
        let criminal = rules.background("Criminal").unwrap();
        assert_eq!(criminal.languages, LanguageGrant::Choose(0));
    }
}
