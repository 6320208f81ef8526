//! Output record serialization
//!
//! The finished character is written as a flat JSON document with a
//! `schema_version` field for forward evolution. File names derive
//! from the character name, sanitized to a safe character set.

use crate::assemble::DerivedCharacter;

/// Version of the persisted record layout
pub const SCHEMA_VERSION: u32 = 1;

/// Suffix appended to every character file name
pub const FILE_SUFFIX: &str = ".char.json";

/// Stem used when a name sanitizes to nothing
const FALLBACK_STEM: &str = "character";

/// Serialize a character record to pretty-printed JSON
pub fn to_json(character: &DerivedCharacter) -> serde_json::Result<String> {
    serde_json::to_string_pretty(character)
}

/// Deserialize a character record from JSON
pub fn from_json(json: &str) -> serde_json::Result<DerivedCharacter> {
    serde_json::from_str(json)
}

/// Derive a safe file name from a character name: whitespace becomes
/// underscores, anything outside [A-Za-z0-9_-] is dropped, and a fixed
/// suffix is appended
pub fn file_name(character_name: &str) -> String {
    let stem: String = character_name
        .trim()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();

    let stem = if stem.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        stem
    };

    format!("{}{}", stem, FILE_SUFFIX)
}
