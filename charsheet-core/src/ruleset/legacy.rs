//! 2014 Player's Handbook rule data.
//!
//! Cleric, Druid, Wizard, and Paladin prepare from a formula; Bard, Ranger,
//! Sorcerer, and Warlock learn a fixed number of spells per level.

use super::{Background, Ruleset, RulesetId, SlotCurves, Species};
use crate::class_data::{
    CasterKind, CharacterClass, ClassDef, PreparedSpellChange, Proficiencies, Spellcasting,
    Subclass,
};
use crate::progression::{
    pact_slot_rows, SpellProgressionTable, FULL_CASTER_SLOTS, LEGACY_HALF_CASTER_SLOTS,
    THIRD_CASTER_SLOTS,
};
use crate::stats::{Ability, ArmorCategory, Size, Skill};

const ALL_ARMOR: &[ArmorCategory] = &[
    ArmorCategory::Light,
    ArmorCategory::Medium,
    ArmorCategory::Heavy,
    ArmorCategory::Shields,
];
const MEDIUM_ARMOR: &[ArmorCategory] = &[
    ArmorCategory::Light,
    ArmorCategory::Medium,
    ArmorCategory::Shields,
];
const ARCANE_WEAPONS: &[&str] = &["Daggers", "Darts", "Slings", "Quarterstaffs", "Light crossbows"];
const FINESSE_WEAPONS: &[&str] = &[
    "Simple weapons",
    "Hand crossbows",
    "Longswords",
    "Rapiers",
    "Shortswords",
];

// Spells known, class levels 1-20.
const BARD_KNOWN: [u8; 20] = [4, 5, 6, 7, 8, 9, 10, 11, 12, 14, 15, 15, 16, 18, 19, 19, 20, 22, 22, 22];
const RANGER_KNOWN: [u8; 20] = [0, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10, 11, 11];
const SORCERER_KNOWN: [u8; 20] = [2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 12, 13, 13, 14, 14, 15, 15, 15, 15];
const WARLOCK_KNOWN: [u8; 20] = [2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 11, 11, 12, 12, 13, 13, 14, 14, 15, 15];

pub(super) fn build() -> Ruleset {
    Ruleset::new(
        RulesetId::Legacy,
        species(),
        classes(),
        backgrounds(),
        SlotCurves {
            full: &FULL_CASTER_SLOTS,
            half: &LEGACY_HALF_CASTER_SLOTS,
            third: &THIRD_CASTER_SLOTS,
        },
    )
}

fn species() -> Vec<Species> {
    vec![
        Species::new("Dwarf", Size::Medium, 25, &["Darkvision", "Dwarven Resilience", "Stonecunning"])
            .with_lineages(&[
                ("Hill Dwarf", "Dwarven Toughness: +1 hit point per level."),
                ("Mountain Dwarf", "Dwarven Armor Training with light and medium armor."),
            ]),
        Species::new("Elf", Size::Medium, 30, &["Darkvision", "Keen Senses", "Fey Ancestry", "Trance"])
            .with_lineages(&[
                ("High Elf", "Knows one wizard cantrip and one extra language."),
                ("Wood Elf", "Fleet of Foot and Mask of the Wild."),
                ("Dark Elf (Drow)", "Superior Darkvision, Sunlight Sensitivity, and Drow Magic."),
            ]),
        Species::new("Halfling", Size::Small, 25, &["Lucky", "Brave", "Halfling Nimbleness"])
            .with_lineages(&[
                ("Lightfoot", "Naturally Stealthy behind larger creatures."),
                ("Stout", "Stout Resilience against poison."),
            ]),
        Species::new("Human", Size::Medium, 30, &["Ability Score Increase"]),
        Species::new("Dragonborn", Size::Medium, 30, &["Draconic Ancestry", "Breath Weapon", "Damage Resistance"]),
        Species::new("Gnome", Size::Small, 25, &["Darkvision", "Gnome Cunning"]).with_lineages(&[
            ("Forest Gnome", "Natural Illusionist and Speak with Small Beasts."),
            ("Rock Gnome", "Artificer's Lore and Tinker."),
        ]),
        Species::new("Half-Elf", Size::Medium, 30, &["Darkvision", "Fey Ancestry", "Skill Versatility"]),
        Species::new(
            "Half-Orc",
            Size::Medium,
            30,
            &["Darkvision", "Menacing", "Relentless Endurance", "Savage Attacks"],
        ),
        Species::new("Tiefling", Size::Medium, 30, &["Darkvision", "Hellish Resistance", "Infernal Legacy"]),
    ]
}

fn classes() -> Vec<ClassDef> {
    vec![
        ClassDef::base(CharacterClass::Barbarian, &[Ability::Strength], 3)
            .with_proficiencies(Proficiencies::new(MEDIUM_ARMOR, &["Simple weapons", "Martial weapons"], &[]))
            .with_traits(&[
                (1, "Rage"),
                (1, "Unarmored Defense"),
                (2, "Reckless Attack"),
                (2, "Danger Sense"),
                (3, "Primal Path"),
                (5, "Extra Attack"),
                (5, "Fast Movement"),
                (7, "Feral Instinct"),
                (9, "Brutal Critical"),
                (11, "Relentless Rage"),
                (15, "Persistent Rage"),
                (18, "Indomitable Might"),
                (20, "Primal Champion"),
            ])
            .with_subclasses(vec![
                Subclass::new("Path of the Berserker", &[(3, "Frenzy"), (6, "Mindless Rage")]),
                Subclass::new("Path of the Totem Warrior", &[(3, "Spirit Seeker"), (3, "Totem Spirit")]),
            ]),
        ClassDef::base(CharacterClass::Bard, &[Ability::Charisma], 3)
            .with_proficiencies(Proficiencies::new(
                &[ArmorCategory::Light],
                FINESSE_WEAPONS,
                &["Three musical instruments"],
            ))
            .with_traits(&[
                (1, "Spellcasting"),
                (1, "Bardic Inspiration"),
                (2, "Jack of All Trades"),
                (2, "Song of Rest"),
                (3, "Bard College"),
                (3, "Expertise"),
                (5, "Font of Inspiration"),
                (6, "Countercharm"),
                (10, "Magical Secrets"),
                (20, "Superior Inspiration"),
            ])
            .with_subclasses(vec![
                Subclass::new("College of Lore", &[(3, "Cutting Words"), (6, "Additional Magical Secrets")]),
                Subclass::new("College of Valor", &[(3, "Combat Inspiration"), (6, "Extra Attack")]),
            ])
            .with_spellcasting(Spellcasting::native(
                CasterKind::Full,
                Ability::Charisma,
                PreparedSpellChange::LevelUp,
                SpellProgressionTable::new(&[(1, 2), (4, 3), (10, 4)], Some(&BARD_KNOWN), &FULL_CASTER_SLOTS),
            )),
        ClassDef::base(CharacterClass::Cleric, &[Ability::Wisdom], 1)
            .with_proficiencies(Proficiencies::new(MEDIUM_ARMOR, &["Simple weapons"], &[]))
            .with_traits(&[
                (1, "Spellcasting"),
                (1, "Divine Domain"),
                (2, "Channel Divinity"),
                (5, "Destroy Undead"),
                (10, "Divine Intervention"),
            ])
            .with_subclasses(vec![
                Subclass::new("Knowledge Domain", &[(1, "Blessings of Knowledge")]),
                Subclass::new("Life Domain", &[(1, "Disciple of Life")]),
                Subclass::new("Light Domain", &[(1, "Warding Flare")]),
                Subclass::new("Nature Domain", &[(1, "Acolyte of Nature")]),
                Subclass::new("Tempest Domain", &[(1, "Wrath of the Storm")]),
                Subclass::new("Trickery Domain", &[(1, "Blessing of the Trickster")]),
                Subclass::new("War Domain", &[(1, "War Priest")]),
            ])
            .with_spellcasting(Spellcasting::native(
                CasterKind::Full,
                Ability::Wisdom,
                PreparedSpellChange::LongRest,
                SpellProgressionTable::new(&[(1, 3), (4, 4), (10, 5)], None, &FULL_CASTER_SLOTS),
            )),
        ClassDef::base(CharacterClass::Druid, &[Ability::Wisdom], 2)
            .with_proficiencies(Proficiencies::new(
                MEDIUM_ARMOR,
                &[
                    "Clubs", "Daggers", "Darts", "Javelins", "Maces", "Quarterstaffs", "Scimitars",
                    "Sickles", "Slings", "Spears",
                ],
                &["Herbalism kit"],
            ))
            .with_traits(&[
                (1, "Druidic"),
                (1, "Spellcasting"),
                (2, "Wild Shape"),
                (2, "Druid Circle"),
                (18, "Timeless Body"),
                (18, "Beast Spells"),
                (20, "Archdruid"),
            ])
            .with_subclasses(vec![
                Subclass::new("Circle of the Land", &[(2, "Natural Recovery")]),
                Subclass::new("Circle of the Moon", &[(2, "Combat Wild Shape")]),
            ])
            .with_spellcasting(Spellcasting::native(
                CasterKind::Full,
                Ability::Wisdom,
                PreparedSpellChange::LongRest,
                SpellProgressionTable::new(&[(1, 2), (4, 3), (10, 4)], None, &FULL_CASTER_SLOTS),
            )),
        ClassDef::base(CharacterClass::Fighter, &[Ability::Strength, Ability::Dexterity], 3)
            .with_proficiencies(Proficiencies::new(ALL_ARMOR, &["Simple weapons", "Martial weapons"], &[]))
            .with_traits(&[
                (1, "Fighting Style"),
                (1, "Second Wind"),
                (2, "Action Surge"),
                (3, "Martial Archetype"),
                (5, "Extra Attack"),
                (9, "Indomitable"),
            ])
            .with_subclasses(vec![
                Subclass::new("Champion", &[(3, "Improved Critical")]),
                Subclass::new("Battle Master", &[(3, "Combat Superiority")]),
                Subclass::new("Eldritch Knight", &[(3, "Spellcasting"), (3, "Weapon Bond")]),
            ])
            .with_spellcasting(Spellcasting::via_subclass(
                CasterKind::Third,
                Ability::Intelligence,
                PreparedSpellChange::LevelUp,
                &["Eldritch Knight"],
            )),
        ClassDef::base(CharacterClass::Monk, &[Ability::Dexterity, Ability::Wisdom], 3)
            .with_proficiencies(Proficiencies::new(
                &[],
                &["Simple weapons", "Shortswords"],
                &["One type of artisan's tools or musical instrument"],
            ))
            .with_traits(&[
                (1, "Unarmored Defense"),
                (1, "Martial Arts"),
                (2, "Ki"),
                (2, "Unarmored Movement"),
                (3, "Monastic Tradition"),
                (3, "Deflect Missiles"),
                (4, "Slow Fall"),
                (5, "Extra Attack"),
                (5, "Stunning Strike"),
                (7, "Evasion"),
                (14, "Diamond Soul"),
                (18, "Empty Body"),
            ])
            .with_subclasses(vec![
                Subclass::new("Way of the Open Hand", &[(3, "Open Hand Technique")]),
                Subclass::new("Way of Shadow", &[(3, "Shadow Arts")]),
                Subclass::new("Way of the Four Elements", &[(3, "Disciple of the Elements")]),
            ]),
        ClassDef::base(CharacterClass::Paladin, &[Ability::Strength, Ability::Charisma], 3)
            .with_proficiencies(Proficiencies::new(ALL_ARMOR, &["Simple weapons", "Martial weapons"], &[]))
            .with_traits(&[
                (1, "Divine Sense"),
                (1, "Lay on Hands"),
                (2, "Fighting Style"),
                (2, "Spellcasting"),
                (2, "Divine Smite"),
                (3, "Divine Health"),
                (3, "Sacred Oath"),
                (5, "Extra Attack"),
                (6, "Aura of Protection"),
                (10, "Aura of Courage"),
                (11, "Improved Divine Smite"),
                (14, "Cleansing Touch"),
            ])
            .with_subclasses(vec![
                Subclass::new("Oath of Devotion", &[(3, "Sacred Weapon")]),
                Subclass::new("Oath of the Ancients", &[(3, "Nature's Wrath")]),
                Subclass::new("Oath of Vengeance", &[(3, "Vow of Enmity")]),
            ])
            .with_spellcasting(Spellcasting::native(
                CasterKind::Half,
                Ability::Charisma,
                PreparedSpellChange::LongRest,
                SpellProgressionTable::new(&[], None, &LEGACY_HALF_CASTER_SLOTS),
            )),
        ClassDef::base(CharacterClass::Ranger, &[Ability::Dexterity, Ability::Wisdom], 3)
            .with_proficiencies(Proficiencies::new(MEDIUM_ARMOR, &["Simple weapons", "Martial weapons"], &[]))
            .with_traits(&[
                (1, "Favored Enemy"),
                (1, "Natural Explorer"),
                (2, "Fighting Style"),
                (2, "Spellcasting"),
                (3, "Ranger Archetype"),
                (3, "Primeval Awareness"),
                (5, "Extra Attack"),
                (8, "Land's Stride"),
                (10, "Hide in Plain Sight"),
                (14, "Vanish"),
                (18, "Feral Senses"),
                (20, "Foe Slayer"),
            ])
            .with_subclasses(vec![
                Subclass::new("Hunter", &[(3, "Hunter's Prey")]),
                Subclass::new("Beast Master", &[(3, "Ranger's Companion")]),
            ])
            .with_spellcasting(Spellcasting::native(
                CasterKind::Half,
                Ability::Wisdom,
                PreparedSpellChange::LevelUp,
                SpellProgressionTable::new(&[], Some(&RANGER_KNOWN), &LEGACY_HALF_CASTER_SLOTS),
            )),
        ClassDef::base(CharacterClass::Rogue, &[Ability::Dexterity], 3)
            .with_proficiencies(Proficiencies::new(
                &[ArmorCategory::Light],
                FINESSE_WEAPONS,
                &["Thieves' tools"],
            ))
            .with_traits(&[
                (1, "Expertise"),
                (1, "Sneak Attack"),
                (1, "Thieves' Cant"),
                (2, "Cunning Action"),
                (3, "Roguish Archetype"),
                (5, "Uncanny Dodge"),
                (7, "Evasion"),
                (11, "Reliable Talent"),
                (14, "Blindsense"),
                (15, "Slippery Mind"),
                (18, "Elusive"),
                (20, "Stroke of Luck"),
            ])
            .with_subclasses(vec![
                Subclass::new("Thief", &[(3, "Fast Hands"), (3, "Second-Story Work")]),
                Subclass::new("Assassin", &[(3, "Assassinate")]),
                Subclass::new("Arcane Trickster", &[(3, "Spellcasting"), (3, "Mage Hand Legerdemain")]),
            ])
            .with_spellcasting(Spellcasting::via_subclass(
                CasterKind::Third,
                Ability::Intelligence,
                PreparedSpellChange::LevelUp,
                &["Arcane Trickster"],
            )),
        ClassDef::base(CharacterClass::Sorcerer, &[Ability::Charisma], 1)
            .with_proficiencies(Proficiencies::new(&[], ARCANE_WEAPONS, &[]))
            .with_traits(&[
                (1, "Spellcasting"),
                (1, "Sorcerous Origin"),
                (2, "Font of Magic"),
                (3, "Metamagic"),
                (20, "Sorcerous Restoration"),
            ])
            .with_subclasses(vec![
                Subclass::new("Draconic Bloodline", &[(1, "Dragon Ancestor"), (1, "Draconic Resilience")]),
                Subclass::new("Wild Magic", &[(1, "Wild Magic Surge"), (1, "Tides of Chaos")]),
            ])
            .with_spellcasting(Spellcasting::native(
                CasterKind::Full,
                Ability::Charisma,
                PreparedSpellChange::LevelUp,
                SpellProgressionTable::new(&[(1, 4), (4, 5), (10, 6)], Some(&SORCERER_KNOWN), &FULL_CASTER_SLOTS),
            )),
        ClassDef::base(CharacterClass::Warlock, &[Ability::Charisma], 1)
            .with_proficiencies(Proficiencies::new(&[ArmorCategory::Light], &["Simple weapons"], &[]))
            .with_traits(&[
                (1, "Otherworldly Patron"),
                (1, "Pact Magic"),
                (2, "Eldritch Invocations"),
                (3, "Pact Boon"),
                (11, "Mystic Arcanum"),
                (20, "Eldritch Master"),
            ])
            .with_subclasses(vec![
                Subclass::new("The Archfey", &[(1, "Fey Presence")]),
                Subclass::new("The Fiend", &[(1, "Dark One's Blessing")]),
                Subclass::new("The Great Old One", &[(1, "Awakened Mind")]),
            ])
            .with_spellcasting(Spellcasting::native(
                CasterKind::Pact,
                Ability::Charisma,
                PreparedSpellChange::LevelUp,
                SpellProgressionTable::new(&[(1, 2), (4, 3), (10, 4)], Some(&WARLOCK_KNOWN), &pact_slot_rows()),
            )),
        ClassDef::base(CharacterClass::Wizard, &[Ability::Intelligence], 2)
            .with_proficiencies(Proficiencies::new(&[], ARCANE_WEAPONS, &[]))
            .with_traits(&[
                (1, "Spellcasting"),
                (1, "Arcane Recovery"),
                (2, "Arcane Tradition"),
                (18, "Spell Mastery"),
                (20, "Signature Spells"),
            ])
            .with_subclasses(vec![
                Subclass::new("School of Abjuration", &[(2, "Arcane Ward")]),
                Subclass::new("School of Conjuration", &[(2, "Minor Conjuration")]),
                Subclass::new("School of Divination", &[(2, "Portent")]),
                Subclass::new("School of Enchantment", &[(2, "Hypnotic Gaze")]),
                Subclass::new("School of Evocation", &[(2, "Sculpt Spells")]),
                Subclass::new("School of Illusion", &[(2, "Improved Minor Illusion")]),
                Subclass::new("School of Necromancy", &[(2, "Grim Harvest")]),
                Subclass::new("School of Transmutation", &[(2, "Minor Alchemy")]),
            ])
            .with_spellcasting(Spellcasting::native(
                CasterKind::Full,
                Ability::Intelligence,
                PreparedSpellChange::LongRest,
                SpellProgressionTable::new(&[(1, 3), (4, 4), (10, 5)], None, &FULL_CASTER_SLOTS),
            )),
    ]
}

fn background(name: &'static str, skills: [Skill; 2], tools: Option<&'static str>) -> Background {
    Background {
        name,
        skill_proficiencies: skills,
        tool_proficiency: tools,
        ability_scores: None,
        origin_feat: None,
    }
}

fn backgrounds() -> Vec<Background> {
    vec![
        background("Acolyte", [Skill::Insight, Skill::Religion], None),
        background("Charlatan", [Skill::Deception, Skill::SleightOfHand], Some("Disguise kit, forgery kit")),
        background("Criminal", [Skill::Deception, Skill::Stealth], Some("One type of gaming set, thieves' tools")),
        background("Entertainer", [Skill::Acrobatics, Skill::Performance], Some("Disguise kit, one musical instrument")),
        background("Folk Hero", [Skill::AnimalHandling, Skill::Survival], Some("One type of artisan's tools, vehicles (land)")),
        background("Guild Artisan", [Skill::Insight, Skill::Persuasion], Some("One type of artisan's tools")),
        background("Hermit", [Skill::Medicine, Skill::Religion], Some("Herbalism kit")),
        background("Noble", [Skill::History, Skill::Persuasion], Some("One type of gaming set")),
        background("Outlander", [Skill::Athletics, Skill::Survival], Some("One musical instrument")),
        background("Sage", [Skill::Arcana, Skill::History], None),
        background("Sailor", [Skill::Athletics, Skill::Perception], Some("Navigator's tools, vehicles (water)")),
        background("Soldier", [Skill::Athletics, Skill::Intimidation], Some("One type of gaming set, vehicles (land)")),
        background("Urchin", [Skill::SleightOfHand, Skill::Stealth], Some("Disguise kit, thieves' tools")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        let rules = build();
        assert_eq!(rules.classes().count(), 12);
        assert_eq!(rules.all_species().len(), 9);
        assert_eq!(rules.backgrounds().count(), 13);
    }

    #[test]
    fn test_subclass_levels_vary() {
        let rules = build();
        assert_eq!(rules.class(CharacterClass::Cleric).unwrap().subclass_level, 1);
        assert_eq!(rules.class(CharacterClass::Wizard).unwrap().subclass_level, 2);
        assert_eq!(rules.class(CharacterClass::Fighter).unwrap().subclass_level, 3);
    }

    #[test]
    fn test_backgrounds_have_no_origin_feats() {
        let rules = build();
        assert!(rules.backgrounds().all(|b| b.origin_feat.is_none()));
        assert_eq!(
            rules.background("folk hero").unwrap().skill_proficiencies,
            [Skill::AnimalHandling, Skill::Survival]
        );
    }
}
