//! D&D 5e class definitions.
//!
//! A [`ClassDef`] is the per-ruleset description of a class: its chassis
//! (hit die, saves, proficiencies, skill choices), level-gated traits,
//! subclasses, and how it casts spells. The chassis pieces that never
//! changed between printings live on [`CharacterClass`] itself.

use crate::progression::SpellProgressionTable;
use crate::ruleset::RulesError;
use crate::stats::{Ability, ArmorCategory, HitDie, Skill};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Classes
// ============================================================================

/// D&D character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CharacterClass {
    Barbarian,
    Bard,
    Cleric,
    Druid,
    Fighter,
    Monk,
    Paladin,
    Ranger,
    Rogue,
    Sorcerer,
    Warlock,
    Wizard,
}

impl CharacterClass {
    pub fn name(&self) -> &'static str {
        match self {
            CharacterClass::Barbarian => "Barbarian",
            CharacterClass::Bard => "Bard",
            CharacterClass::Cleric => "Cleric",
            CharacterClass::Druid => "Druid",
            CharacterClass::Fighter => "Fighter",
            CharacterClass::Monk => "Monk",
            CharacterClass::Paladin => "Paladin",
            CharacterClass::Ranger => "Ranger",
            CharacterClass::Rogue => "Rogue",
            CharacterClass::Sorcerer => "Sorcerer",
            CharacterClass::Warlock => "Warlock",
            CharacterClass::Wizard => "Wizard",
        }
    }

    pub fn hit_die(&self) -> HitDie {
        match self {
            CharacterClass::Barbarian => HitDie::D12,
            CharacterClass::Fighter | CharacterClass::Paladin | CharacterClass::Ranger => {
                HitDie::D10
            }
            CharacterClass::Bard
            | CharacterClass::Cleric
            | CharacterClass::Druid
            | CharacterClass::Monk
            | CharacterClass::Rogue
            | CharacterClass::Warlock => HitDie::D8,
            CharacterClass::Sorcerer | CharacterClass::Wizard => HitDie::D6,
        }
    }

    pub fn saving_throws(&self) -> [Ability; 2] {
        match self {
            CharacterClass::Barbarian | CharacterClass::Fighter => {
                [Ability::Strength, Ability::Constitution]
            }
            CharacterClass::Bard => [Ability::Dexterity, Ability::Charisma],
            CharacterClass::Cleric | CharacterClass::Paladin | CharacterClass::Warlock => {
                [Ability::Wisdom, Ability::Charisma]
            }
            CharacterClass::Druid | CharacterClass::Wizard => {
                [Ability::Intelligence, Ability::Wisdom]
            }
            CharacterClass::Monk | CharacterClass::Ranger => {
                [Ability::Strength, Ability::Dexterity]
            }
            CharacterClass::Rogue => [Ability::Dexterity, Ability::Intelligence],
            CharacterClass::Sorcerer => [Ability::Constitution, Ability::Charisma],
        }
    }

    /// Skill proficiencies chosen at level 1.
    pub fn skill_choices(&self) -> SkillChoices {
        match self {
            CharacterClass::Barbarian => SkillChoices::new(
                2,
                &[
                    Skill::AnimalHandling,
                    Skill::Athletics,
                    Skill::Intimidation,
                    Skill::Nature,
                    Skill::Perception,
                    Skill::Survival,
                ],
            ),
            CharacterClass::Bard => SkillChoices::new(3, Skill::all()),
            CharacterClass::Cleric => SkillChoices::new(
                2,
                &[
                    Skill::History,
                    Skill::Insight,
                    Skill::Medicine,
                    Skill::Persuasion,
                    Skill::Religion,
                ],
            ),
            CharacterClass::Druid => SkillChoices::new(
                2,
                &[
                    Skill::Arcana,
                    Skill::AnimalHandling,
                    Skill::Insight,
                    Skill::Medicine,
                    Skill::Nature,
                    Skill::Perception,
                    Skill::Religion,
                    Skill::Survival,
                ],
            ),
            CharacterClass::Fighter => SkillChoices::new(
                2,
                &[
                    Skill::Acrobatics,
                    Skill::AnimalHandling,
                    Skill::Athletics,
                    Skill::History,
                    Skill::Insight,
                    Skill::Intimidation,
                    Skill::Perception,
                    Skill::Survival,
                ],
            ),
            CharacterClass::Monk => SkillChoices::new(
                2,
                &[
                    Skill::Acrobatics,
                    Skill::Athletics,
                    Skill::History,
                    Skill::Insight,
                    Skill::Religion,
                    Skill::Stealth,
                ],
            ),
            CharacterClass::Paladin => SkillChoices::new(
                2,
                &[
                    Skill::Athletics,
                    Skill::Insight,
                    Skill::Intimidation,
                    Skill::Medicine,
                    Skill::Persuasion,
                    Skill::Religion,
                ],
            ),
            CharacterClass::Ranger => SkillChoices::new(
                3,
                &[
                    Skill::AnimalHandling,
                    Skill::Athletics,
                    Skill::Insight,
                    Skill::Investigation,
                    Skill::Nature,
                    Skill::Perception,
                    Skill::Stealth,
                    Skill::Survival,
                ],
            ),
            CharacterClass::Rogue => SkillChoices::new(
                4,
                &[
                    Skill::Acrobatics,
                    Skill::Athletics,
                    Skill::Deception,
                    Skill::Insight,
                    Skill::Intimidation,
                    Skill::Investigation,
                    Skill::Perception,
                    Skill::Performance,
                    Skill::Persuasion,
                    Skill::SleightOfHand,
                    Skill::Stealth,
                ],
            ),
            CharacterClass::Sorcerer => SkillChoices::new(
                2,
                &[
                    Skill::Arcana,
                    Skill::Deception,
                    Skill::Insight,
                    Skill::Intimidation,
                    Skill::Persuasion,
                    Skill::Religion,
                ],
            ),
            CharacterClass::Warlock => SkillChoices::new(
                2,
                &[
                    Skill::Arcana,
                    Skill::Deception,
                    Skill::History,
                    Skill::Intimidation,
                    Skill::Investigation,
                    Skill::Nature,
                    Skill::Religion,
                ],
            ),
            CharacterClass::Wizard => SkillChoices::new(
                2,
                &[
                    Skill::Arcana,
                    Skill::History,
                    Skill::Insight,
                    Skill::Investigation,
                    Skill::Medicine,
                    Skill::Religion,
                ],
            ),
        }
    }

    /// Get all character classes.
    pub fn all() -> &'static [CharacterClass] {
        &[
            CharacterClass::Barbarian,
            CharacterClass::Bard,
            CharacterClass::Cleric,
            CharacterClass::Druid,
            CharacterClass::Fighter,
            CharacterClass::Monk,
            CharacterClass::Paladin,
            CharacterClass::Ranger,
            CharacterClass::Rogue,
            CharacterClass::Sorcerer,
            CharacterClass::Warlock,
            CharacterClass::Wizard,
        ]
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CharacterClass {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CharacterClass::all()
            .iter()
            .copied()
            .find(|class| class.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RulesError::UnknownClass(s.to_string()))
    }
}

// ============================================================================
// Class definition
// ============================================================================

/// Skills to pick from at level 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillChoices {
    /// Number of skills to choose.
    pub count: usize,
    /// Skills available to choose from.
    pub options: &'static [Skill],
}

impl SkillChoices {
    pub const fn new(count: usize, options: &'static [Skill]) -> Self {
        Self { count, options }
    }
}

/// Armor, weapon, and tool training.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Proficiencies {
    pub armor: Vec<ArmorCategory>,
    pub weapons: Vec<&'static str>,
    pub tools: Vec<&'static str>,
}

impl Proficiencies {
    pub fn new(armor: &[ArmorCategory], weapons: &[&'static str], tools: &[&'static str]) -> Self {
        Self {
            armor: armor.to_vec(),
            weapons: weapons.to_vec(),
            tools: tools.to_vec(),
        }
    }
}

/// A class or subclass feature, optionally gated by class level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassTrait {
    pub name: &'static str,
    pub level: Option<u8>,
}

impl ClassTrait {
    pub const fn at(level: u8, name: &'static str) -> Self {
        Self {
            name,
            level: Some(level),
        }
    }

    pub const fn always(name: &'static str) -> Self {
        Self { name, level: None }
    }

    pub fn unlocked_at(&self, level: u8) -> bool {
        self.level.map_or(true, |gate| gate <= level)
    }
}

/// A subclass option and its own traits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subclass {
    pub name: &'static str,
    pub traits: Vec<ClassTrait>,
}

impl Subclass {
    pub fn new(name: &'static str, traits: &[(u8, &'static str)]) -> Self {
        Self {
            name,
            traits: traits
                .iter()
                .map(|&(level, trait_name)| ClassTrait::at(level, trait_name))
                .collect(),
        }
    }
}

/// Everything a ruleset says about one class.
#[derive(Debug, Clone, Serialize)]
pub struct ClassDef {
    pub class: CharacterClass,
    pub hit_die: HitDie,
    pub primary_abilities: Vec<Ability>,
    pub saving_throws: [Ability; 2],
    pub proficiencies: Proficiencies,
    pub skill_choices: SkillChoices,
    pub traits: Vec<ClassTrait>,
    pub subclasses: Vec<Subclass>,
    /// Class level at which a subclass must be chosen.
    pub subclass_level: u8,
    pub spellcasting: SpellcastingConfig,
}

impl ClassDef {
    /// Start a definition from the class's fixed chassis.
    pub fn base(class: CharacterClass, primary_abilities: &[Ability], subclass_level: u8) -> Self {
        Self {
            class,
            hit_die: class.hit_die(),
            primary_abilities: primary_abilities.to_vec(),
            saving_throws: class.saving_throws(),
            proficiencies: Proficiencies::default(),
            skill_choices: class.skill_choices(),
            traits: Vec::new(),
            subclasses: Vec::new(),
            subclass_level,
            spellcasting: SpellcastingConfig::Disabled,
        }
    }

    pub fn with_proficiencies(mut self, proficiencies: Proficiencies) -> Self {
        self.proficiencies = proficiencies;
        self
    }

    pub fn with_traits(mut self, traits: &[(u8, &'static str)]) -> Self {
        self.traits = traits
            .iter()
            .map(|&(level, name)| ClassTrait::at(level, name))
            .collect();
        self
    }

    pub fn with_subclasses(mut self, subclasses: Vec<Subclass>) -> Self {
        self.subclasses = subclasses;
        self
    }

    pub fn with_spellcasting(mut self, spellcasting: Spellcasting) -> Self {
        self.spellcasting = SpellcastingConfig::Enabled(spellcasting);
        self
    }

    pub fn name(&self) -> &'static str {
        self.class.name()
    }

    /// Traits unlocked at or below `level`.
    pub fn traits_at(&self, level: u8) -> impl Iterator<Item = &ClassTrait> {
        self.traits.iter().filter(move |t| t.unlocked_at(level))
    }

    /// Whether a character of this level must have picked a subclass.
    pub fn requires_subclass(&self, level: u8) -> bool {
        level >= self.subclass_level
    }

    pub fn subclass(&self, name: &str) -> Option<&Subclass> {
        self.subclasses
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn subclass_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.subclasses.iter().map(|s| s.name)
    }

    pub fn is_spellcaster(&self) -> bool {
        matches!(self.spellcasting, SpellcastingConfig::Enabled(_))
    }
}

// ============================================================================
// Spellcasting
// ============================================================================

/// Which slot progression a caster follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CasterKind {
    Full,
    Half,
    Third,
    Pact,
}

impl CasterKind {
    pub fn name(&self) -> &'static str {
        match self {
            CasterKind::Full => "Full",
            CasterKind::Half => "Half",
            CasterKind::Third => "Third",
            CasterKind::Pact => "Pact",
        }
    }

    pub fn all() -> &'static [CasterKind] {
        &[
            CasterKind::Full,
            CasterKind::Half,
            CasterKind::Third,
            CasterKind::Pact,
        ]
    }
}

/// When a caster may swap the spells on their list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreparedSpellChange {
    LevelUp,
    LongRest,
}

/// Where a class's spellcasting comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SpellSource {
    /// Every member of the class casts, following the class's own table.
    Class(SpellProgressionTable),
    /// Only the listed subclasses cast, on the shared subclass-caster curves.
    Subclasses(Vec<&'static str>),
}

/// Spellcasting details for a class that can cast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Spellcasting {
    pub kind: CasterKind,
    pub ability: Ability,
    pub prepared_change: PreparedSpellChange,
    pub source: SpellSource,
}

impl Spellcasting {
    pub fn native(
        kind: CasterKind,
        ability: Ability,
        prepared_change: PreparedSpellChange,
        table: SpellProgressionTable,
    ) -> Self {
        Self {
            kind,
            ability,
            prepared_change,
            source: SpellSource::Class(table),
        }
    }

    pub fn via_subclass(
        kind: CasterKind,
        ability: Ability,
        prepared_change: PreparedSpellChange,
        subclasses: &[&'static str],
    ) -> Self {
        Self {
            kind,
            ability,
            prepared_change,
            source: SpellSource::Subclasses(subclasses.to_vec()),
        }
    }

    /// The class's own table, absent for subclass-granted casting.
    pub fn table(&self) -> Option<&SpellProgressionTable> {
        match &self.source {
            SpellSource::Class(table) => Some(table),
            SpellSource::Subclasses(_) => None,
        }
    }

    /// Subclasses that unlock casting, absent when the whole class casts.
    pub fn granting_subclasses(&self) -> Option<&[&'static str]> {
        match &self.source {
            SpellSource::Class(_) => None,
            SpellSource::Subclasses(names) => Some(names.as_slice()),
        }
    }

    /// Whether a character with this subclass (if any) actually casts.
    pub fn grants_via(&self, subclass: Option<&str>) -> bool {
        match &self.source {
            SpellSource::Class(_) => true,
            SpellSource::Subclasses(names) => subclass.is_some_and(|chosen| {
                names.iter().any(|n| n.eq_ignore_ascii_case(chosen.trim()))
            }),
        }
    }
}

/// Whether and how a class casts spells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SpellcastingConfig {
    Disabled,
    Enabled(Spellcasting),
}

impl SpellcastingConfig {
    pub fn as_enabled(&self) -> Option<&Spellcasting> {
        match self {
            SpellcastingConfig::Disabled => None,
            SpellcastingConfig::Enabled(spellcasting) => Some(spellcasting),
        }
    }
}
