//! Spell slot curves and per-class spellcasting progression tables.
//!
//! Every table is indexed by class level 0-20. Row 0 is the zero row for a
//! character who has not taken the class yet.

use serde::{Deserialize, Serialize};

/// Highest class level a table covers.
pub const MAX_LEVEL: u8 = 20;

/// Number of slots per spell level, 1st through 9th.
pub type SlotRow = [u8; 9];

const NONE: SlotRow = [0; 9];

// ============================================================================
// Slot curves
// ============================================================================

/// Full casters. Identical in both rulesets.
pub static FULL_CASTER_SLOTS: [SlotRow; 21] = [
    NONE,
    [2, 0, 0, 0, 0, 0, 0, 0, 0],
    [3, 0, 0, 0, 0, 0, 0, 0, 0],
    [4, 2, 0, 0, 0, 0, 0, 0, 0],
    [4, 3, 0, 0, 0, 0, 0, 0, 0],
    [4, 3, 2, 0, 0, 0, 0, 0, 0],
    [4, 3, 3, 0, 0, 0, 0, 0, 0],
    [4, 3, 3, 1, 0, 0, 0, 0, 0],
    [4, 3, 3, 2, 0, 0, 0, 0, 0],
    [4, 3, 3, 3, 1, 0, 0, 0, 0],
    [4, 3, 3, 3, 2, 0, 0, 0, 0],
    [4, 3, 3, 3, 2, 1, 0, 0, 0],
    [4, 3, 3, 3, 2, 1, 0, 0, 0],
    [4, 3, 3, 3, 2, 1, 1, 0, 0],
    [4, 3, 3, 3, 2, 1, 1, 0, 0],
    [4, 3, 3, 3, 2, 1, 1, 1, 0],
    [4, 3, 3, 3, 2, 1, 1, 1, 0],
    [4, 3, 3, 3, 2, 1, 1, 1, 1],
    [4, 3, 3, 3, 3, 1, 1, 1, 1],
    [4, 3, 3, 3, 3, 2, 1, 1, 1],
    [4, 3, 3, 3, 3, 2, 2, 1, 1],
];

/// Legacy half casters get nothing until level 2.
pub static LEGACY_HALF_CASTER_SLOTS: [SlotRow; 21] = [
    NONE,
    NONE,
    [2, 0, 0, 0, 0, 0, 0, 0, 0],
    [3, 0, 0, 0, 0, 0, 0, 0, 0],
    [3, 0, 0, 0, 0, 0, 0, 0, 0],
    [4, 2, 0, 0, 0, 0, 0, 0, 0],
    [4, 2, 0, 0, 0, 0, 0, 0, 0],
    [4, 3, 0, 0, 0, 0, 0, 0, 0],
    [4, 3, 0, 0, 0, 0, 0, 0, 0],
    [4, 3, 2, 0, 0, 0, 0, 0, 0],
    [4, 3, 2, 0, 0, 0, 0, 0, 0],
    [4, 3, 3, 0, 0, 0, 0, 0, 0],
    [4, 3, 3, 0, 0, 0, 0, 0, 0],
    [4, 3, 3, 1, 0, 0, 0, 0, 0],
    [4, 3, 3, 1, 0, 0, 0, 0, 0],
    [4, 3, 3, 2, 0, 0, 0, 0, 0],
    [4, 3, 3, 2, 0, 0, 0, 0, 0],
    [4, 3, 3, 3, 1, 0, 0, 0, 0],
    [4, 3, 3, 3, 1, 0, 0, 0, 0],
    [4, 3, 3, 3, 2, 0, 0, 0, 0],
    [4, 3, 3, 3, 2, 0, 0, 0, 0],
];

/// Current half casters cast from level 1.
pub static CURRENT_HALF_CASTER_SLOTS: [SlotRow; 21] = [
    NONE,
    [2, 0, 0, 0, 0, 0, 0, 0, 0],
    [2, 0, 0, 0, 0, 0, 0, 0, 0],
    [3, 0, 0, 0, 0, 0, 0, 0, 0],
    [3, 0, 0, 0, 0, 0, 0, 0, 0],
    [4, 2, 0, 0, 0, 0, 0, 0, 0],
    [4, 2, 0, 0, 0, 0, 0, 0, 0],
    [4, 3, 0, 0, 0, 0, 0, 0, 0],
    [4, 3, 0, 0, 0, 0, 0, 0, 0],
    [4, 3, 2, 0, 0, 0, 0, 0, 0],
    [4, 3, 2, 0, 0, 0, 0, 0, 0],
    [4, 3, 3, 0, 0, 0, 0, 0, 0],
    [4, 3, 3, 0, 0, 0, 0, 0, 0],
    [4, 3, 3, 1, 0, 0, 0, 0, 0],
    [4, 3, 3, 1, 0, 0, 0, 0, 0],
    [4, 3, 3, 2, 0, 0, 0, 0, 0],
    [4, 3, 3, 2, 0, 0, 0, 0, 0],
    [4, 3, 3, 3, 1, 0, 0, 0, 0],
    [4, 3, 3, 3, 1, 0, 0, 0, 0],
    [4, 3, 3, 3, 2, 0, 0, 0, 0],
    [4, 3, 3, 3, 2, 0, 0, 0, 0],
];

/// Third casters (Eldritch Knight, Arcane Trickster). Identical in both rulesets.
pub static THIRD_CASTER_SLOTS: [SlotRow; 21] = [
    NONE,
    NONE,
    NONE,
    [2, 0, 0, 0, 0, 0, 0, 0, 0],
    [3, 0, 0, 0, 0, 0, 0, 0, 0],
    [3, 0, 0, 0, 0, 0, 0, 0, 0],
    [3, 0, 0, 0, 0, 0, 0, 0, 0],
    [4, 2, 0, 0, 0, 0, 0, 0, 0],
    [4, 2, 0, 0, 0, 0, 0, 0, 0],
    [4, 2, 0, 0, 0, 0, 0, 0, 0],
    [4, 3, 0, 0, 0, 0, 0, 0, 0],
    [4, 3, 0, 0, 0, 0, 0, 0, 0],
    [4, 3, 0, 0, 0, 0, 0, 0, 0],
    [4, 3, 2, 0, 0, 0, 0, 0, 0],
    [4, 3, 2, 0, 0, 0, 0, 0, 0],
    [4, 3, 2, 0, 0, 0, 0, 0, 0],
    [4, 3, 3, 0, 0, 0, 0, 0, 0],
    [4, 3, 3, 0, 0, 0, 0, 0, 0],
    [4, 3, 3, 0, 0, 0, 0, 0, 0],
    [4, 3, 3, 1, 0, 0, 0, 0, 0],
    [4, 3, 3, 1, 0, 0, 0, 0, 0],
];

/// Pact magic as `(slot count, slot level)` per warlock level.
pub static PACT_SLOTS: [(u8, u8); 21] = [
    (0, 0),
    (1, 1),
    (2, 1),
    (2, 2),
    (2, 2),
    (2, 3),
    (2, 3),
    (2, 4),
    (2, 4),
    (2, 5),
    (2, 5),
    (3, 5),
    (3, 5),
    (3, 5),
    (3, 5),
    (3, 5),
    (3, 5),
    (4, 5),
    (4, 5),
    (4, 5),
    (4, 5),
];

/// Mystic Arcanum unlocks as `(warlock level, spell level)`. One casting per
/// long rest each, no slot expended.
pub static MYSTIC_ARCANUM: [(u8, u8); 4] = [(11, 6), (13, 7), (15, 8), (17, 9)];

// ============================================================================
// Shared curves for subclass-granted casting
// ============================================================================

/// Cantrips known by a subclass caster (Eldritch Knight / Arcane Trickster).
pub static SUBCLASS_CASTER_CANTRIPS: [u8; 21] = [
    0, 0, 0, 2, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3,
];

/// Spells known or prepared by a subclass caster.
pub static SUBCLASS_CASTER_SPELLS: [u8; 21] = [
    0, 0, 0, 3, 4, 4, 4, 5, 6, 6, 7, 8, 8, 9, 10, 10, 11, 11, 11, 12, 13,
];

/// Pact slot rows expanded into the flat per-spell-level shape.
pub fn pact_slot_rows() -> [SlotRow; 21] {
    let mut rows = [NONE; 21];
    for (row, &(count, slot_level)) in rows.iter_mut().zip(PACT_SLOTS.iter()) {
        if count > 0 {
            row[slot_level as usize - 1] = count;
        }
    }
    rows
}

/// Flatten a slot row into one entry per slot, ascending by spell level.
///
/// `[2, 1, 0, ..]` becomes `[1, 1, 2]`.
pub fn flatten_slots(row: &SlotRow) -> Vec<u8> {
    row.iter()
        .enumerate()
        .flat_map(|(i, &count)| std::iter::repeat((i + 1) as u8).take(count as usize))
        .collect()
}

/// Spell levels of the Mystic Arcanum available at a warlock level.
pub fn mystic_arcanum(level: u8) -> Vec<u8> {
    MYSTIC_ARCANUM
        .iter()
        .filter(|(unlocked_at, _)| level >= *unlocked_at)
        .map(|(_, spell_level)| *spell_level)
        .collect()
}

/// Value of a step curve given as `(level, value)` breakpoints.
fn step_value(breakpoints: &[(u8, u8)], level: u8) -> u8 {
    breakpoints
        .iter()
        .take_while(|(from, _)| *from <= level)
        .last()
        .map(|(_, value)| *value)
        .unwrap_or(0)
}

// ============================================================================
// Class tables
// ============================================================================

/// One row of a class's spellcasting table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellProgressionRow {
    pub level: u8,
    pub cantrips_known: u8,
    /// Explicit prepared/known count. `None` means the count comes from a formula.
    pub spells_prepared: Option<u8>,
    pub slots: SlotRow,
}

impl SpellProgressionRow {
    pub fn total_slots(&self) -> u8 {
        self.slots.iter().sum()
    }

    pub fn has_slots(&self) -> bool {
        self.total_slots() > 0
    }
}

/// Per-class spellcasting table, rows 0 through 20.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellProgressionTable {
    rows: Vec<SpellProgressionRow>,
}

impl SpellProgressionTable {
    /// Build a table from cantrip breakpoints, an optional explicit
    /// prepared/known count for levels 1-20, and a slot curve.
    pub fn new(
        cantrips: &[(u8, u8)],
        prepared: Option<&[u8; 20]>,
        slots: &[SlotRow; 21],
    ) -> Self {
        let rows = (0..=MAX_LEVEL)
            .map(|level| SpellProgressionRow {
                level,
                cantrips_known: step_value(cantrips, level),
                spells_prepared: match (level, prepared) {
                    (0, Some(_)) => Some(0),
                    (_, Some(counts)) => Some(counts[level as usize - 1]),
                    (_, None) => None,
                },
                slots: slots[level as usize],
            })
            .collect();
        Self { rows }
    }

    /// Row for a class level, or `None` outside 0-20.
    pub fn row(&self, level: u8) -> Option<&SpellProgressionRow> {
        self.rows.get(level as usize)
    }

    pub fn rows(&self) -> &[SpellProgressionRow] {
        &self.rows
    }

    /// True when every row carries an explicit prepared/known count.
    pub fn is_fully_tabulated(&self) -> bool {
        self.rows.iter().all(|r| r.spells_prepared.is_some())
    }
}
