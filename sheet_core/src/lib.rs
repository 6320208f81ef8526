//! sheet_core - Rules evaluation engine for tabletop character sheets
//!
//! This library provides:
//! - RuleSet: immutable race/class/background/spell reference data
//! - Score generation: manual, point-buy, and standard-array validation
//! - Racial modifiers: ASI merging including flexible "choose any" grants
//! - Derived stats: modifiers, proficiency, skills, HP, initiative
//! - Spellcasting: save DC, attack bonus, and slot resolution
//! - Assembly: selections in, validated DerivedCharacter out
//!
//! The engine is purely synchronous and deterministic: every operation
//! is a function of its inputs, so recomputing after every edit is safe
//! and idempotent. The UI layer supplies plain `Selections` values and
//! renders what comes back.

pub mod assemble;
pub mod derive;
pub mod prelude;
pub mod proficiency;
pub mod record;
pub mod ruleset;
pub mod scores;
pub mod snapshot;
pub mod spellcasting;
pub mod types;

// Re-export core types for convenience
pub use assemble::{assemble, DerivedCharacter, Selections};
pub use ruleset::{
    BackgroundDefinition, CasterProgression, ClassDefinition, RaceDefinition, RuleSet, RulesError,
    SubraceDefinition,
};
pub use spellcasting::{SpellSlots, SpellcastingBlock};
pub use types::{Ability, AbilitySet, GenerationMethod, ValidationError};
