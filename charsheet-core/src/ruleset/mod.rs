//! Versioned rule bundles and spellcasting progression queries.
//!
//! A [`Ruleset`] is an immutable bundle of species, class, and background
//! data. Two exist, [`RulesetId::Legacy`] (2014 Player's Handbook) and
//! [`RulesetId::Current`] (2024 Player's Handbook). Both are built once per
//! process and shared through [`rulesets()`].
//!
//! The progression queries are total: levels outside 0-20 and classes a
//! ruleset does not define resolve to zero or empty values. Callers that want
//! those cases rejected go through [`Ruleset::resolve_spellcasting`] with a
//! [`LookupPolicy::Strict`] config.

mod current;
mod legacy;

use crate::class_data::{CasterKind, CharacterClass, ClassDef, Spellcasting, SpellcastingConfig};
use crate::config::{LookupPolicy, ResolverConfig};
use crate::progression::{
    self, flatten_slots, SlotRow, MAX_LEVEL, PACT_SLOTS, SUBCLASS_CASTER_CANTRIPS,
    SUBCLASS_CASTER_SPELLS,
};
use crate::stats::{Ability, Size, Skill};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Errors from checked ruleset lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("Unknown class: {0}")]
    UnknownClass(String),

    #[error("Unknown ruleset: {0}")]
    UnknownRuleset(String),

    #[error("Unknown species: {0}")]
    UnknownSpecies(String),

    #[error("Level {level} is outside 0-20")]
    LevelOutOfRange { level: u8 },

    #[error("{class} at level {level} must have a subclass chosen")]
    SubclassNotChosen { class: CharacterClass, level: u8 },

    #[error("{class} has no subclass named {subclass}")]
    UnknownSubclass {
        class: CharacterClass,
        subclass: String,
    },
}

// ============================================================================
// Identifiers
// ============================================================================

/// Which rule bundle a character was created under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RulesetId {
    /// 2014 Player's Handbook.
    Legacy,
    /// 2024 Player's Handbook.
    Current,
}

impl RulesetId {
    pub fn name(&self) -> &'static str {
        match self {
            RulesetId::Legacy => "legacy",
            RulesetId::Current => "current",
        }
    }

    pub fn all() -> &'static [RulesetId] {
        &[RulesetId::Legacy, RulesetId::Current]
    }
}

impl fmt::Display for RulesetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for RulesetId {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" | "2014" => Ok(RulesetId::Legacy),
            "current" | "2024" => Ok(RulesetId::Current),
            _ => Err(RulesError::UnknownRuleset(s.to_string())),
        }
    }
}

// ============================================================================
// Species and backgrounds
// ============================================================================

/// An optional variant of a species (subrace, lineage, ancestry, legacy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Lineage {
    pub name: &'static str,
    pub species: &'static str,
    pub description: &'static str,
}

/// A playable species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Species {
    pub name: &'static str,
    pub size: Size,
    /// Walking speed in feet.
    pub speed: u32,
    pub traits: Vec<&'static str>,
    pub lineages: Vec<Lineage>,
}

impl Species {
    pub fn new(name: &'static str, size: Size, speed: u32, traits: &[&'static str]) -> Self {
        Self {
            name,
            size,
            speed,
            traits: traits.to_vec(),
            lineages: Vec::new(),
        }
    }

    pub fn with_lineages(mut self, lineages: &[(&'static str, &'static str)]) -> Self {
        let species = self.name;
        self.lineages = lineages
            .iter()
            .map(|&(name, description)| Lineage {
                name,
                species,
                description,
            })
            .collect();
        self
    }
}

/// A character background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Background {
    pub name: &'static str,
    pub skill_proficiencies: [Skill; 2],
    pub tool_proficiency: Option<&'static str>,
    /// Abilities the background can raise. Current ruleset only.
    pub ability_scores: Option<[Ability; 3]>,
    /// Origin feat granted. Current ruleset only.
    pub origin_feat: Option<&'static str>,
}

// ============================================================================
// Ruleset
// ============================================================================

/// Generic slot curves by caster kind. Pact slots come from the pact class's table.
#[derive(Debug, Clone, Copy)]
pub struct SlotCurves {
    pub full: &'static [SlotRow; 21],
    pub half: &'static [SlotRow; 21],
    pub third: &'static [SlotRow; 21],
}

/// Spellcasting entitlements for one class at one level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellcastingSummary {
    pub cantrips: u8,
    pub prepared: u8,
    /// One entry per slot, ascending by spell level.
    pub slots: Vec<u8>,
    /// Mystic Arcanum spell levels (pact casters only).
    pub arcanum: Vec<u8>,
}

/// An immutable bundle of rule data.
#[derive(Debug, Clone)]
pub struct Ruleset {
    id: RulesetId,
    species: Vec<Species>,
    classes: BTreeMap<CharacterClass, ClassDef>,
    backgrounds: BTreeMap<&'static str, Background>,
    slot_curves: SlotCurves,
}

impl Ruleset {
    /// Assemble a bundle. New ruleset versions are added by building a new one.
    pub fn new(
        id: RulesetId,
        species: Vec<Species>,
        classes: Vec<ClassDef>,
        backgrounds: Vec<Background>,
        slot_curves: SlotCurves,
    ) -> Self {
        let classes: BTreeMap<_, _> = classes.into_iter().map(|def| (def.class, def)).collect();
        let backgrounds: BTreeMap<_, _> = backgrounds.into_iter().map(|b| (b.name, b)).collect();
        tracing::debug!(
            ruleset = %id,
            species = species.len(),
            classes = classes.len(),
            backgrounds = backgrounds.len(),
            "ruleset built"
        );
        Self {
            id,
            species,
            classes,
            backgrounds,
            slot_curves,
        }
    }

    /// The 2014 Player's Handbook bundle.
    pub fn legacy() -> Self {
        legacy::build()
    }

    /// The 2024 Player's Handbook bundle.
    pub fn current() -> Self {
        current::build()
    }

    pub fn id(&self) -> RulesetId {
        self.id
    }

    pub fn class(&self, class: CharacterClass) -> Option<&ClassDef> {
        self.classes.get(&class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &ClassDef> {
        self.classes.values()
    }

    pub fn species(&self, name: &str) -> Option<&Species> {
        self.species
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Like [`Ruleset::species`], but an unknown name is an error.
    pub fn lookup_species(&self, name: &str) -> Result<&Species, RulesError> {
        self.species(name)
            .ok_or_else(|| RulesError::UnknownSpecies(name.to_string()))
    }

    pub fn all_species(&self) -> &[Species] {
        &self.species
    }

    pub fn background(&self, name: &str) -> Option<&Background> {
        self.backgrounds
            .values()
            .find(|b| b.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn backgrounds(&self) -> impl Iterator<Item = &Background> {
        self.backgrounds.values()
    }

    // ------------------------------------------------------------------------
    // Progression queries
    // ------------------------------------------------------------------------

    /// Cantrips a member of `class` knows at `level`.
    ///
    /// Subclass-granted casters read the shared curve; the caller is expected
    /// to have confirmed the qualifying subclass.
    pub fn max_cantrips_known(&self, class: CharacterClass, level: u8) -> u8 {
        let Some(spellcasting) = self.spellcasting(class) else {
            return 0;
        };
        match spellcasting.table() {
            Some(table) => table.row(level).map_or(0, |row| row.cantrips_known),
            None => shared_curve(&SUBCLASS_CASTER_CANTRIPS, level),
        }
    }

    /// Spells a member of `class` may have prepared (or known) at `level`.
    ///
    /// An explicit table count wins and `ability_modifier` is ignored.
    /// Otherwise full casters get `modifier + level` and half casters get
    /// `modifier + level / 2`, floored at zero, and only once the class has
    /// slots.
    pub fn max_spells_prepared(&self, class: CharacterClass, level: u8, ability_modifier: i8) -> u8 {
        let Some(spellcasting) = self.spellcasting(class) else {
            return 0;
        };
        let Some(table) = spellcasting.table() else {
            return shared_curve(&SUBCLASS_CASTER_SPELLS, level);
        };
        let Some(row) = table.row(level) else {
            return 0;
        };
        if let Some(count) = row.spells_prepared {
            return count;
        }
        if !row.has_slots() {
            return 0;
        }
        let modifier = i16::from(ability_modifier);
        let level = i16::from(level);
        let count = match spellcasting.kind {
            CasterKind::Full => modifier + level,
            CasterKind::Half => modifier + level / 2,
            // Third casters are subclass-granted and never reach a class table;
            // pact tables always list known spells.
            CasterKind::Third | CasterKind::Pact => 0,
        };
        count.clamp(0, u8::MAX as i16) as u8
    }

    /// Every slot available to a `kind` caster at `level`, as a flat list of
    /// spell levels in ascending order.
    pub fn slots_for(&self, kind: CasterKind, level: u8) -> Vec<u8> {
        self.slot_row(kind, level)
            .map(|row| flatten_slots(&row))
            .unwrap_or_default()
    }

    /// Pact slots as `(count, slot level)`.
    pub fn pact_slots(&self, level: u8) -> (u8, u8) {
        PACT_SLOTS.get(level as usize).copied().unwrap_or((0, 0))
    }

    /// Mystic Arcanum spell levels unlocked at a pact caster level.
    pub fn mystic_arcanum(&self, level: u8) -> Vec<u8> {
        if level > MAX_LEVEL {
            return Vec::new();
        }
        progression::mystic_arcanum(level)
    }

    /// Lineages of one species, or of every species in declaration order.
    pub fn lineages(&self, species: Option<&str>) -> Vec<&Lineage> {
        match species {
            Some(name) => self
                .species(name)
                .map(|s| s.lineages.iter().collect())
                .unwrap_or_default(),
            None => self.species.iter().flat_map(|s| s.lineages.iter()).collect(),
        }
    }

    /// Subclass names of one class, or of every class.
    pub fn subclasses(&self, class: Option<CharacterClass>) -> Vec<&'static str> {
        match class {
            Some(class) => self
                .class(class)
                .map(|def| def.subclass_names().collect())
                .unwrap_or_default(),
            None => self
                .classes
                .values()
                .flat_map(|def| def.subclass_names())
                .collect(),
        }
    }

    /// Resolve everything spellcasting-related for one class at one level,
    /// applying `config.policy` to out-of-contract input.
    pub fn resolve_spellcasting(
        &self,
        class: CharacterClass,
        level: u8,
        subclass: Option<&str>,
        ability_modifier: i8,
        config: &ResolverConfig,
    ) -> Result<SpellcastingSummary, RulesError> {
        if let Err(err) = self.check_contract(class, level, subclass) {
            return match config.policy {
                LookupPolicy::Strict => Err(err),
                LookupPolicy::Lenient => {
                    tracing::debug!(ruleset = %self.id, %class, level, error = %err, "lenient lookup degraded to zero");
                    Ok(SpellcastingSummary::default())
                }
            };
        }

        let Some(spellcasting) = self.spellcasting(class) else {
            return Ok(SpellcastingSummary::default());
        };
        if !spellcasting.grants_via(subclass) {
            return Ok(SpellcastingSummary::default());
        }

        let arcanum = match spellcasting.kind {
            CasterKind::Pact => self.mystic_arcanum(level),
            _ => Vec::new(),
        };
        Ok(SpellcastingSummary {
            cantrips: self.max_cantrips_known(class, level),
            prepared: self.max_spells_prepared(class, level, ability_modifier),
            slots: self.slots_for(spellcasting.kind, level),
            arcanum,
        })
    }

    fn check_contract(
        &self,
        class: CharacterClass,
        level: u8,
        subclass: Option<&str>,
    ) -> Result<(), RulesError> {
        if level > MAX_LEVEL {
            return Err(RulesError::LevelOutOfRange { level });
        }
        let def = self
            .class(class)
            .ok_or_else(|| RulesError::UnknownClass(class.name().to_string()))?;
        if let Some(name) = subclass {
            if def.subclass(name).is_none() {
                return Err(RulesError::UnknownSubclass {
                    class,
                    subclass: name.to_string(),
                });
            }
        } else if def
            .spellcasting
            .as_enabled()
            .is_some_and(|s| s.granting_subclasses().is_some())
            && def.requires_subclass(level)
        {
            return Err(RulesError::SubclassNotChosen { class, level });
        }
        Ok(())
    }

    fn spellcasting(&self, class: CharacterClass) -> Option<&Spellcasting> {
        match &self.class(class)?.spellcasting {
            SpellcastingConfig::Disabled => None,
            SpellcastingConfig::Enabled(spellcasting) => Some(spellcasting),
        }
    }

    fn slot_row(&self, kind: CasterKind, level: u8) -> Option<SlotRow> {
        let curve = match kind {
            CasterKind::Full => self.slot_curves.full,
            CasterKind::Half => self.slot_curves.half,
            CasterKind::Third => self.slot_curves.third,
            CasterKind::Pact => {
                return self
                    .classes
                    .values()
                    .filter_map(|def| def.spellcasting.as_enabled())
                    .filter(|s| s.kind == CasterKind::Pact)
                    .find_map(|s| s.table())
                    .and_then(|table| table.row(level))
                    .map(|row| row.slots);
            }
        };
        curve.get(level as usize).copied()
    }
}

fn shared_curve(curve: &[u8; 21], level: u8) -> u8 {
    curve.get(level as usize).copied().unwrap_or(0)
}

// ============================================================================
// Registry
// ============================================================================

/// Both rule bundles, built once.
#[derive(Debug)]
pub struct RulesetRegistry {
    legacy: Ruleset,
    current: Ruleset,
}

impl RulesetRegistry {
    pub fn build() -> Self {
        Self {
            legacy: Ruleset::legacy(),
            current: Ruleset::current(),
        }
    }

    pub fn get(&self, id: RulesetId) -> &Ruleset {
        match id {
            RulesetId::Legacy => &self.legacy,
            RulesetId::Current => &self.current,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ruleset> {
        [&self.legacy, &self.current].into_iter()
    }
}

static RULESETS: LazyLock<RulesetRegistry> = LazyLock::new(RulesetRegistry::build);

/// The process-wide registry.
pub fn rulesets() -> &'static RulesetRegistry {
    &RULESETS
}

/// Shorthand for `rulesets().get(id)`.
pub fn ruleset(id: RulesetId) -> &'static Ruleset {
    RULESETS.get(id)
}

/// Build both bundles now rather than on first use.
pub fn init() {
    LazyLock::force(&RULESETS);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ruleset_id_parse() {
        assert_eq!("2014".parse::<RulesetId>().unwrap(), RulesetId::Legacy);
        assert_eq!("Current".parse::<RulesetId>().unwrap(), RulesetId::Current);
        assert!(matches!(
            "4e".parse::<RulesetId>(),
            Err(RulesError::UnknownRuleset(_))
        ));
        assert_eq!(RulesetId::Legacy.to_string(), "legacy");
    }

    #[test]
    fn test_registry_shares_bundles() {
        init();
        let a = ruleset(RulesetId::Current) as *const Ruleset;
        let b = rulesets().get(RulesetId::Current) as *const Ruleset;
        assert_eq!(a, b);
        assert_eq!(rulesets().iter().count(), 2);
        for id in RulesetId::all() {
            assert_eq!(ruleset(*id).id(), *id);
        }
    }

    #[test]
    fn test_every_class_defined() {
        for rules in rulesets().iter() {
            for class in CharacterClass::all() {
                assert!(rules.class(*class).is_some(), "{} missing {}", rules.id(), class);
            }
        }
    }

    #[test]
    fn test_slots_for_full_caster() {
        let rules = ruleset(RulesetId::Legacy);
        assert_eq!(rules.slots_for(CasterKind::Full, 0), Vec::<u8>::new());
        assert_eq!(rules.slots_for(CasterKind::Full, 1), vec![1, 1]);
        assert_eq!(rules.slots_for(CasterKind::Full, 3), vec![1, 1, 1, 1, 2, 2]);
        assert!(rules.slots_for(CasterKind::Full, 21).is_empty());
    }

    #[test]
    fn test_half_caster_level_1_diverges() {
        assert!(ruleset(RulesetId::Legacy)
            .slots_for(CasterKind::Half, 1)
            .is_empty());
        assert_eq!(
            ruleset(RulesetId::Current).slots_for(CasterKind::Half, 1),
            vec![1, 1]
        );
    }

    #[test]
    fn test_pact_slots_use_warlock_table() {
        for rules in rulesets().iter() {
            assert_eq!(rules.slots_for(CasterKind::Pact, 1), vec![1]);
            assert_eq!(rules.slots_for(CasterKind::Pact, 3), vec![2, 2]);
            assert_eq!(rules.slots_for(CasterKind::Pact, 9), vec![5, 5]);
            assert_eq!(rules.slots_for(CasterKind::Pact, 17), vec![5, 5, 5, 5]);
            assert_eq!(rules.pact_slots(11), (3, 5));
        }
    }

    #[test]
    fn test_unknown_species_has_no_lineages() {
        let rules = ruleset(RulesetId::Current);
        assert!(rules.lineages(Some("Warforged")).is_empty());
    }

    #[test]
    fn test_lenient_out_of_range_is_zero() {
        let config = ResolverConfig::new().with_policy(LookupPolicy::Lenient);
        let summary = ruleset(RulesetId::Current)
            .resolve_spellcasting(CharacterClass::Wizard, 25, None, 3, &config)
            .unwrap();
        assert_eq!(summary, SpellcastingSummary::default());
    }

    #[test]
    fn test_strict_out_of_range_errors() {
        let config = ResolverConfig::new().with_policy(LookupPolicy::Strict);
        let err = ruleset(RulesetId::Current)
            .resolve_spellcasting(CharacterClass::Wizard, 25, None, 3, &config)
            .unwrap_err();
        assert_eq!(err, RulesError::LevelOutOfRange { level: 25 });
    }
    #[test]
    fn test_lookup_species() {
        let rules = ruleset(RulesetId::Legacy);
        assert_eq!(rules.lookup_species("half-orc").unwrap().name, "Half-Orc");
        assert_eq!(
            rules.lookup_species("Goliath").unwrap_err(),
            RulesError::UnknownSpecies("Goliath".to_string())
        );
    }

    #[test]
    fn test_subclass_caster_contract() {
        let rules = ruleset(RulesetId::Current);
        let strict = ResolverConfig::new().with_policy(LookupPolicy::Strict);

        let err = rules
            .resolve_spellcasting(CharacterClass::Fighter, 5, None, 0, &strict)
            .unwrap_err();
        assert_eq!(err, RulesError::SubclassNotChosen { class: CharacterClass::Fighter, level: 5 });

        let err = rules
            .resolve_spellcasting(CharacterClass::Rogue, 5, Some("Swashbuckler"), 0, &strict)
            .unwrap_err();
        assert!(matches!(err, RulesError::UnknownSubclass { .. }));

        // Below the subclass level there is nothing to choose yet.
        let summary = rules
            .resolve_spellcasting(CharacterClass::Fighter, 2, None, 0, &strict)
            .unwrap();
        assert_eq!(summary, SpellcastingSummary::default());

        let champion = rules
            .resolve_spellcasting(CharacterClass::Fighter, 7, Some("Champion"), 0, &strict)
            .unwrap();
        assert_eq!(champion, SpellcastingSummary::default());

        let knight = rules
            .resolve_spellcasting(CharacterClass::Fighter, 7, Some("Eldritch Knight"), 0, &strict)
            .unwrap();
        assert_eq!(knight.cantrips, 2);
        assert_eq!(knight.prepared, 5);
        assert_eq!(knight.slots, vec![1, 1, 1, 1, 2, 2]);
        assert!(knight.arcanum.is_empty());
    }

    #[test]
    fn test_warlock_summary_has_arcanum() {
        let strict = ResolverConfig::new().with_policy(LookupPolicy::Strict);
        let summary = ruleset(RulesetId::Legacy)
            .resolve_spellcasting(CharacterClass::Warlock, 13, Some("The Fiend"), 4, &strict)
            .unwrap();
        assert_eq!(summary.slots, vec![5, 5, 5]);
        assert_eq!(summary.arcanum, vec![6, 7]);
    }

    #[test]
    fn test_formula_gives_nothing_to_tabled_third_caster() {
        use crate::class_data::PreparedSpellChange;
        use crate::progression::{
            SpellProgressionTable, CURRENT_HALF_CASTER_SLOTS, FULL_CASTER_SLOTS, THIRD_CASTER_SLOTS,
        };

        let fighter = ClassDef::base(CharacterClass::Fighter, &[Ability::Strength], 3)
            .with_spellcasting(Spellcasting::native(
                CasterKind::Third,
                Ability::Intelligence,
                PreparedSpellChange::LevelUp,
                SpellProgressionTable::new(&[(3, 2)], None, &THIRD_CASTER_SLOTS),
            ));
        let rules = Ruleset::new(
            RulesetId::Current,
            Vec::new(),
            vec![fighter],
            Vec::new(),
            SlotCurves {
                full: &FULL_CASTER_SLOTS,
                half: &CURRENT_HALF_CASTER_SLOTS,
                third: &THIRD_CASTER_SLOTS,
            },
        );
        assert_eq!(rules.max_spells_prepared(CharacterClass::Fighter, 7, 4), 0);
        assert_eq!(rules.max_cantrips_known(CharacterClass::Fighter, 7), 2);
    }
}
