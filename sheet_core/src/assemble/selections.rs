//! Selections - the caller-owned mutable input aggregate
//!
//! Created empty, mutated field-by-field as the user makes choices.
//! The engine only ever reads it; assembly returns new data and leaves
//! the selections untouched.

use crate::scores::baseline_scores;
use crate::types::{Ability, AbilitySet, GenerationMethod};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selections {
    // Identity
    pub name: String,
    #[serde(default)]
    pub player: String,
    pub race: String,
    #[serde(default)]
    pub subrace: Option<String>,
    pub class: String,
    pub level: u32,
    pub background: String,
    #[serde(default)]
    pub alignment: Option<String>,

    // Ability scores
    pub method: GenerationMethod,
    pub base_scores: AbilitySet,
    /// Abilities chosen for a flexible racial increase, when the race
    /// grants one
    #[serde(default)]
    pub asi_choice: Vec<Ability>,

    // Proficiencies and gear
    #[serde(default)]
    pub class_skills: Vec<String>,
    #[serde(default)]
    pub background_languages: Vec<String>,
    /// Equipment group index -> chosen option text
    #[serde(default)]
    pub equipment_choices: BTreeMap<usize, String>,

    #[serde(default)]
    pub chosen_spells: Vec<String>,
}

impl Selections {
    pub fn new() -> Self {
        Selections {
            name: String::new(),
            player: String::new(),
            race: String::new(),
            subrace: None,
            class: String::new(),
            level: 1,
            background: String::new(),
            alignment: None,
            method: GenerationMethod::default(),
            base_scores: baseline_scores(GenerationMethod::default()),
            asi_choice: Vec::new(),
            class_skills: Vec::new(),
            background_languages: Vec::new(),
            equipment_choices: BTreeMap::new(),
            chosen_spells: Vec::new(),
        }
    }

    /// Switch generation method, resetting base scores to the new
    /// method's baseline. Destructive: previously entered scores are
    /// discarded, so callers confirm with the user before invoking.
    pub fn set_generation_method(&mut self, method: GenerationMethod) {
        self.method = method;
        self.base_scores = baseline_scores(method);
    }
}

impl Default for Selections {
    fn default() -> Self {
        Selections::new()
    }
}
