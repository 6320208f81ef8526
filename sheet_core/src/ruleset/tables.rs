//! Fixed spell-slot progression tables
//!
//! Three distinct shapes:
//! - full casters: per-spell-level slot array, indexed by character level
//! - half casters: character level maps to a lower effective level, then
//!   the full-caster array is used
//! - pact magic: a (slot count, slot level) pair, indexed directly
//!
//! A level outside 1-20 yields empty slots, never an error.

/// Slots per spell level (1st..9th) for full casters, indexed by
/// character level 1..=20.
const FULL_CASTER_SLOTS: [[u32; 9]; 20] = [
    [2, 0, 0, 0, 0, 0, 0, 0, 0], // 1
    [3, 0, 0, 0, 0, 0, 0, 0, 0], // 2
    [4, 2, 0, 0, 0, 0, 0, 0, 0], // 3
    [4, 3, 0, 0, 0, 0, 0, 0, 0], // 4
    [4, 3, 2, 0, 0, 0, 0, 0, 0], // 5
    [4, 3, 3, 0, 0, 0, 0, 0, 0], // 6
    [4, 3, 3, 1, 0, 0, 0, 0, 0], // 7
    [4, 3, 3, 2, 0, 0, 0, 0, 0], // 8
    [4, 3, 3, 3, 1, 0, 0, 0, 0], // 9
    [4, 3, 3, 3, 2, 0, 0, 0, 0], // 10
    [4, 3, 3, 3, 2, 1, 0, 0, 0], // 11
    [4, 3, 3, 3, 2, 1, 0, 0, 0], // 12
    [4, 3, 3, 3, 2, 1, 1, 0, 0], // 13
    [4, 3, 3, 3, 2, 1, 1, 0, 0], // 14
    [4, 3, 3, 3, 2, 1, 1, 1, 0], // 15
    [4, 3, 3, 3, 2, 1, 1, 1, 0], // 16
    [4, 3, 3, 3, 2, 1, 1, 1, 1], // 17
    [4, 3, 3, 3, 3, 1, 1, 1, 1], // 18
    [4, 3, 3, 3, 3, 2, 1, 1, 1], // 19
    [4, 3, 3, 3, 3, 2, 2, 1, 1], // 20
];

/// Pact magic (slot count, slot level) pairs, indexed by character
/// level 1..=20.
const PACT_SLOTS: [(u32, u32); 20] = [
    (1, 1), // 1
    (2, 1), // 2
    (2, 2), // 3
    (2, 2), // 4
    (2, 3), // 5
    (2, 3), // 6
    (2, 4), // 7
    (2, 4), // 8
    (2, 5), // 9
    (2, 5), // 10
    (3, 5), // 11
    (3, 5), // 12
    (3, 5), // 13
    (3, 5), // 14
    (3, 5), // 15
    (3, 5), // 16
    (4, 5), // 17
    (4, 5), // 18
    (4, 5), // 19
    (4, 5), // 20
];

/// Full-caster slots for a character level; all zeros outside 1-20
pub fn full_caster_slots(level: u32) -> [u32; 9] {
    match level {
        1..=20 => FULL_CASTER_SLOTS[(level - 1) as usize],
        _ => [0; 9],
    }
}

/// Effective full-caster level for a half caster: ceil(level / 2),
/// so levels 1 and 2 both act as a level-1 full caster. Zero outside
/// 1-20.
pub fn half_caster_effective_level(level: u32) -> u32 {
    match level {
        1..=20 => level.div_ceil(2),
        _ => 0,
    }
}

/// Pact magic (slot count, slot level) for a character level;
/// (0, 0) outside 1-20
pub fn pact_slots(level: u32) -> (u32, u32) {
    match level {
        1..=20 => PACT_SLOTS[(level - 1) as usize],
        _ => (0, 0),
    }
}
