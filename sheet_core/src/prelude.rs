//! Prelude module for convenient imports
//!
//! ```rust
//! use sheet_core::prelude::*;
//! ```

// Core types
pub use crate::types::{Ability, AbilitySet, GenerationMethod, ValidationError};

// Ruleset store
pub use crate::ruleset::{
    BackgroundDefinition, CasterProgression, ClassDefinition, LanguageGrant, RaceDefinition,
    RuleSet, RulesError, SubraceDefinition,
};

// Score generation and racial modifiers
pub use crate::scores::{apply_racial_asi, baseline_scores, roll_scores, validate};

// Derived stats
pub use crate::derive::{ability_modifier, proficiency_bonus, skill_bonus};

// Spellcasting
pub use crate::spellcasting::{SpellSlots, SpellcastingBlock};

// Assembly
pub use crate::assemble::{assemble, DerivedCharacter, Selections};

// Persistence seams
pub use crate::record::{file_name, from_json, to_json, SCHEMA_VERSION};
pub use crate::snapshot::{MemorySnapshotStore, SnapshotStore};
