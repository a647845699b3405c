//! 2024 Player's Handbook rule data.
//!
//! Every class that casts from level 1 lists its prepared spell count
//! explicitly, so the ability modifier never feeds a formula here.

use super::{Background, Ruleset, RulesetId, SlotCurves, Species};
use crate::class_data::{
    CasterKind, CharacterClass, ClassDef, PreparedSpellChange, Proficiencies, Spellcasting,
    Subclass,
};
use crate::progression::{
    pact_slot_rows, SpellProgressionTable, CURRENT_HALF_CASTER_SLOTS, FULL_CASTER_SLOTS,
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
const MARTIAL: &[&str] = &["Simple weapons", "Martial weapons"];
const SIMPLE: &[&str] = &["Simple weapons"];

// Prepared spells, class levels 1-20.
const FULL_PREPARED: [u8; 20] = [4, 5, 6, 7, 9, 10, 11, 12, 14, 15, 16, 16, 17, 17, 18, 18, 19, 20, 21, 22];
const SORCERER_PREPARED: [u8; 20] = [2, 4, 6, 7, 9, 10, 11, 12, 14, 15, 16, 16, 17, 17, 18, 18, 19, 20, 21, 22];
const WIZARD_PREPARED: [u8; 20] = [4, 5, 6, 7, 9, 10, 11, 12, 14, 15, 16, 16, 17, 18, 19, 21, 22, 23, 24, 25];
const HALF_PREPARED: [u8; 20] = [2, 3, 4, 5, 6, 6, 7, 7, 9, 9, 10, 10, 11, 11, 12, 12, 14, 14, 15, 15];
const WARLOCK_PREPARED: [u8; 20] = [2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 11, 11, 12, 12, 13, 13, 14, 14, 15, 15];

pub(super) fn build() -> Ruleset {
    Ruleset::new(
        RulesetId::Current,
        species(),
        classes(),
        backgrounds(),
        SlotCurves {
            full: &FULL_CASTER_SLOTS,
            half: &CURRENT_HALF_CASTER_SLOTS,
            third: &THIRD_CASTER_SLOTS,
        },
    )
}

fn species() -> Vec<Species> {
    vec![
        Species::new(
            "Aasimar",
            Size::SmallOrMedium,
            30,
            &["Celestial Resistance", "Darkvision", "Healing Hands", "Light Bearer", "Celestial Revelation"],
        ),
        Species::new(
            "Dragonborn",
            Size::Medium,
            30,
            &["Draconic Ancestry", "Breath Weapon", "Damage Resistance", "Darkvision", "Draconic Flight"],
        )
        .with_lineages(&[
            ("Black Dragon", "Acid breath and resistance."),
            ("Blue Dragon", "Lightning breath and resistance."),
            ("Brass Dragon", "Fire breath and resistance."),
            ("Bronze Dragon", "Lightning breath and resistance."),
            ("Copper Dragon", "Acid breath and resistance."),
            ("Gold Dragon", "Fire breath and resistance."),
            ("Green Dragon", "Poison breath and resistance."),
            ("Red Dragon", "Fire breath and resistance."),
            ("Silver Dragon", "Cold breath and resistance."),
            ("White Dragon", "Cold breath and resistance."),
        ]),
        Species::new(
            "Dwarf",
            Size::Medium,
            30,
            &["Darkvision", "Dwarven Resilience", "Dwarven Toughness", "Stonecunning"],
        ),
        Species::new(
            "Elf",
            Size::Medium,
            30,
            &["Darkvision", "Elven Lineage", "Fey Ancestry", "Keen Senses", "Trance"],
        )
        .with_lineages(&[
            ("Drow", "Darkvision to 120 feet; Dancing Lights, then Faerie Fire and Darkness."),
            ("High Elf", "Prestidigitation, then Detect Magic and Misty Step."),
            ("Wood Elf", "Speed 35 feet; Druidcraft, then Longstrider and Pass without Trace."),
        ]),
        Species::new("Gnome", Size::Small, 30, &["Darkvision", "Gnomish Cunning", "Gnomish Lineage"])
            .with_lineages(&[
                ("Forest Gnome", "Minor Illusion and Speak with Animals."),
                ("Rock Gnome", "Mending, Prestidigitation, and clockwork devices."),
            ]),
        Species::new("Goliath", Size::Medium, 35, &["Giant Ancestry", "Large Form", "Powerful Build"])
            .with_lineages(&[
                ("Cloud Giant", "Cloud's Jaunt: teleport 30 feet as a bonus action."),
                ("Fire Giant", "Fire's Burn: 1d10 fire damage on a hit."),
                ("Frost Giant", "Frost's Chill: 1d6 cold damage and reduced speed."),
                ("Hill Giant", "Hill's Tumble: knock a Large or smaller target prone."),
                ("Stone Giant", "Stone's Endurance: reduce damage by 1d12 + CON."),
                ("Storm Giant", "Storm's Thunder: 1d8 thunder damage as a reaction."),
            ]),
        Species::new(
            "Halfling",
            Size::Small,
            30,
            &["Brave", "Halfling Nimbleness", "Luck", "Naturally Stealthy"],
        ),
        Species::new("Human", Size::SmallOrMedium, 30, &["Resourceful", "Skillful", "Versatile"]),
        Species::new("Orc", Size::Medium, 30, &["Adrenaline Rush", "Darkvision", "Relentless Endurance"]),
        Species::new(
            "Tiefling",
            Size::SmallOrMedium,
            30,
            &["Darkvision", "Fiendish Legacy", "Otherworldly Presence"],
        )
        .with_lineages(&[
            ("Abyssal", "Poison resistance; Poison Spray, then Ray of Sickness and Hold Person."),
            ("Chthonic", "Necrotic resistance; Chill Touch, then False Life and Ray of Enfeeblement."),
            ("Infernal", "Fire resistance; Fire Bolt, then Hellish Rebuke and Darkness."),
        ]),
    ]
}

fn classes() -> Vec<ClassDef> {
    vec![
        ClassDef::base(CharacterClass::Barbarian, &[Ability::Strength], 3)
            .with_proficiencies(Proficiencies::new(MEDIUM_ARMOR, MARTIAL, &[]))
            .with_traits(&[
                (1, "Rage"),
                (1, "Unarmored Defense"),
                (1, "Weapon Mastery"),
                (2, "Danger Sense"),
                (2, "Reckless Attack"),
                (3, "Barbarian Subclass"),
                (3, "Primal Knowledge"),
                (5, "Extra Attack"),
                (5, "Fast Movement"),
                (7, "Feral Instinct"),
                (7, "Instinctive Pounce"),
                (9, "Brutal Strike"),
                (11, "Relentless Rage"),
                (15, "Persistent Rage"),
                (18, "Indomitable Might"),
                (20, "Primal Champion"),
            ])
            .with_subclasses(vec![
                Subclass::new("Path of the Berserker", &[(3, "Frenzy")]),
                Subclass::new("Path of the Wild Heart", &[(3, "Animal Speaker"), (3, "Rage of the Wilds")]),
                Subclass::new("Path of the World Tree", &[(3, "Vitality of the Tree")]),
                Subclass::new("Path of the Zealot", &[(3, "Divine Fury"), (3, "Warrior of the Gods")]),
            ]),
        ClassDef::base(CharacterClass::Bard, &[Ability::Charisma], 3)
            .with_proficiencies(Proficiencies::new(
                &[ArmorCategory::Light],
                SIMPLE,
                &["Three musical instruments"],
            ))
            .with_traits(&[
                (1, "Bardic Inspiration"),
                (1, "Spellcasting"),
                (2, "Expertise"),
                (2, "Jack of All Trades"),
                (3, "Bard Subclass"),
                (5, "Font of Inspiration"),
                (7, "Countercharm"),
                (10, "Magical Secrets"),
                (18, "Superior Inspiration"),
                (20, "Words of Creation"),
            ])
            .with_subclasses(vec![
                Subclass::new("College of Dance", &[(3, "Dazzling Footwork")]),
                Subclass::new("College of Glamour", &[(3, "Beguiling Magic"), (3, "Mantle of Inspiration")]),
                Subclass::new("College of Lore", &[(3, "Bonus Proficiencies"), (3, "Cutting Words")]),
                Subclass::new("College of Valor", &[(3, "Combat Inspiration"), (3, "Martial Training")]),
            ])
            .with_spellcasting(Spellcasting::native(
                CasterKind::Full,
                Ability::Charisma,
                PreparedSpellChange::LevelUp,
                SpellProgressionTable::new(&[(1, 2), (4, 3), (10, 4)], Some(&FULL_PREPARED), &FULL_CASTER_SLOTS),
            )),
        ClassDef::base(CharacterClass::Cleric, &[Ability::Wisdom], 3)
            .with_proficiencies(Proficiencies::new(MEDIUM_ARMOR, SIMPLE, &[]))
            .with_traits(&[
                (1, "Spellcasting"),
                (1, "Divine Order"),
                (2, "Channel Divinity"),
                (3, "Cleric Subclass"),
                (5, "Sear Undead"),
                (7, "Blessed Strikes"),
                (10, "Divine Intervention"),
                (14, "Improved Blessed Strikes"),
                (20, "Greater Divine Intervention"),
            ])
            .with_subclasses(vec![
                Subclass::new("Life Domain", &[(3, "Disciple of Life"), (3, "Preserve Life")]),
                Subclass::new("Light Domain", &[(3, "Radiance of the Dawn"), (3, "Warding Flare")]),
                Subclass::new("Trickery Domain", &[(3, "Blessing of the Trickster"), (3, "Invoke Duplicity")]),
                Subclass::new("War Domain", &[(3, "Guided Strike"), (3, "War Priest")]),
            ])
            .with_spellcasting(Spellcasting::native(
                CasterKind::Full,
                Ability::Wisdom,
                PreparedSpellChange::LongRest,
                SpellProgressionTable::new(&[(1, 3), (4, 4), (10, 5)], Some(&FULL_PREPARED), &FULL_CASTER_SLOTS),
            )),
        ClassDef::base(CharacterClass::Druid, &[Ability::Wisdom], 3)
            .with_proficiencies(Proficiencies::new(
                &[ArmorCategory::Light, ArmorCategory::Shields],
                SIMPLE,
                &["Herbalism kit"],
            ))
            .with_traits(&[
                (1, "Spellcasting"),
                (1, "Druidic"),
                (1, "Primal Order"),
                (2, "Wild Shape"),
                (2, "Wild Companion"),
                (3, "Druid Subclass"),
                (5, "Wild Resurgence"),
                (7, "Elemental Fury"),
                (15, "Improved Elemental Fury"),
                (18, "Beast Spells"),
                (20, "Archdruid"),
            ])
            .with_subclasses(vec![
                Subclass::new("Circle of the Land", &[(3, "Circle of the Land Spells"), (3, "Land's Aid")]),
                Subclass::new("Circle of the Moon", &[(3, "Circle Forms")]),
                Subclass::new("Circle of the Sea", &[(3, "Wrath of the Sea")]),
                Subclass::new("Circle of the Stars", &[(3, "Star Map"), (3, "Starry Form")]),
            ])
            .with_spellcasting(Spellcasting::native(
                CasterKind::Full,
                Ability::Wisdom,
                PreparedSpellChange::LongRest,
                SpellProgressionTable::new(&[(1, 2), (4, 3), (10, 4)], Some(&FULL_PREPARED), &FULL_CASTER_SLOTS),
            )),
        ClassDef::base(CharacterClass::Fighter, &[Ability::Strength, Ability::Dexterity], 3)
            .with_proficiencies(Proficiencies::new(ALL_ARMOR, MARTIAL, &[]))
            .with_traits(&[
                (1, "Fighting Style"),
                (1, "Second Wind"),
                (1, "Weapon Mastery"),
                (2, "Action Surge"),
                (2, "Tactical Mind"),
                (3, "Fighter Subclass"),
                (5, "Extra Attack"),
                (5, "Tactical Shift"),
                (9, "Indomitable"),
                (9, "Tactical Master"),
                (13, "Studied Attacks"),
                (20, "Three Extra Attacks"),
            ])
            .with_subclasses(vec![
                Subclass::new("Battle Master", &[(3, "Combat Superiority")]),
                Subclass::new("Champion", &[(3, "Improved Critical"), (3, "Remarkable Athlete")]),
                Subclass::new("Eldritch Knight", &[(3, "Spellcasting"), (3, "War Bond")]),
                Subclass::new("Psi Warrior", &[(3, "Psionic Power")]),
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
                &["Simple weapons", "Martial weapons with the Light property"],
                &["One type of artisan's tools or musical instrument"],
            ))
            .with_traits(&[
                (1, "Martial Arts"),
                (1, "Unarmored Defense"),
                (2, "Monk's Focus"),
                (2, "Unarmored Movement"),
                (2, "Uncanny Metabolism"),
                (3, "Deflect Attacks"),
                (3, "Monk Subclass"),
                (4, "Slow Fall"),
                (5, "Extra Attack"),
                (5, "Stunning Strike"),
                (7, "Evasion"),
                (14, "Disciplined Survivor"),
                (18, "Superior Defense"),
                (20, "Body and Mind"),
            ])
            .with_subclasses(vec![
                Subclass::new("Warrior of Mercy", &[(3, "Hand of Harm"), (3, "Hand of Healing")]),
                Subclass::new("Warrior of Shadow", &[(3, "Shadow Arts")]),
                Subclass::new("Warrior of the Elements", &[(3, "Elemental Attunement")]),
                Subclass::new("Warrior of the Open Hand", &[(3, "Open Hand Technique")]),
            ]),
        ClassDef::base(CharacterClass::Paladin, &[Ability::Strength, Ability::Charisma], 3)
            .with_proficiencies(Proficiencies::new(ALL_ARMOR, MARTIAL, &[]))
            .with_traits(&[
                (1, "Lay on Hands"),
                (1, "Spellcasting"),
                (1, "Weapon Mastery"),
                (2, "Fighting Style"),
                (2, "Paladin's Smite"),
                (3, "Channel Divinity"),
                (3, "Paladin Subclass"),
                (5, "Extra Attack"),
                (5, "Faithful Steed"),
                (6, "Aura of Protection"),
                (9, "Abjure Foes"),
                (10, "Aura of Courage"),
                (11, "Radiant Strikes"),
                (14, "Restoring Touch"),
                (18, "Aura Expansion"),
            ])
            .with_subclasses(vec![
                Subclass::new("Oath of Devotion", &[(3, "Sacred Weapon")]),
                Subclass::new("Oath of Glory", &[(3, "Inspiring Smite"), (3, "Peerless Athlete")]),
                Subclass::new("Oath of the Ancients", &[(3, "Nature's Wrath")]),
                Subclass::new("Oath of Vengeance", &[(3, "Vow of Enmity")]),
            ])
            .with_spellcasting(Spellcasting::native(
                CasterKind::Half,
                Ability::Charisma,
                PreparedSpellChange::LongRest,
                SpellProgressionTable::new(&[], Some(&HALF_PREPARED), &CURRENT_HALF_CASTER_SLOTS),
            )),
        ClassDef::base(CharacterClass::Ranger, &[Ability::Dexterity, Ability::Wisdom], 3)
            .with_proficiencies(Proficiencies::new(MEDIUM_ARMOR, MARTIAL, &[]))
            .with_traits(&[
                (1, "Spellcasting"),
                (1, "Favored Enemy"),
                (1, "Weapon Mastery"),
                (2, "Deft Explorer"),
                (2, "Fighting Style"),
                (3, "Ranger Subclass"),
                (5, "Extra Attack"),
                (6, "Roving"),
                (9, "Expertise"),
                (10, "Tireless"),
                (13, "Relentless Hunter"),
                (14, "Nature's Veil"),
                (17, "Precise Hunter"),
                (18, "Feral Senses"),
                (20, "Foe Slayer"),
            ])
            .with_subclasses(vec![
                Subclass::new("Beast Master", &[(3, "Primal Companion")]),
                Subclass::new("Fey Wanderer", &[(3, "Dreadful Strikes"), (3, "Otherworldly Glamour")]),
                Subclass::new("Gloom Stalker", &[(3, "Dread Ambusher"), (3, "Umbral Sight")]),
                Subclass::new("Hunter", &[(3, "Hunter's Lore"), (3, "Hunter's Prey")]),
            ])
            .with_spellcasting(Spellcasting::native(
                CasterKind::Half,
                Ability::Wisdom,
                PreparedSpellChange::LongRest,
                SpellProgressionTable::new(&[], Some(&HALF_PREPARED), &CURRENT_HALF_CASTER_SLOTS),
            )),
        ClassDef::base(CharacterClass::Rogue, &[Ability::Dexterity], 3)
            .with_proficiencies(Proficiencies::new(
                &[ArmorCategory::Light],
                &["Simple weapons", "Martial weapons with the Finesse or Light property"],
                &["Thieves' tools"],
            ))
            .with_traits(&[
                (1, "Expertise"),
                (1, "Sneak Attack"),
                (1, "Thieves' Cant"),
                (1, "Weapon Mastery"),
                (2, "Cunning Action"),
                (3, "Rogue Subclass"),
                (3, "Steady Aim"),
                (5, "Cunning Strike"),
                (5, "Uncanny Dodge"),
                (7, "Evasion"),
                (7, "Reliable Talent"),
                (11, "Improved Cunning Strike"),
                (14, "Devious Strikes"),
                (15, "Slippery Mind"),
                (18, "Elusive"),
                (20, "Stroke of Luck"),
            ])
            .with_subclasses(vec![
                Subclass::new("Arcane Trickster", &[(3, "Spellcasting"), (3, "Mage Hand Legerdemain")]),
                Subclass::new("Assassin", &[(3, "Assassinate"), (3, "Assassin's Tools")]),
                Subclass::new("Soulknife", &[(3, "Psionic Power"), (3, "Psychic Blades")]),
                Subclass::new("Thief", &[(3, "Fast Hands"), (3, "Second-Story Work")]),
            ])
            .with_spellcasting(Spellcasting::via_subclass(
                CasterKind::Third,
                Ability::Intelligence,
                PreparedSpellChange::LevelUp,
                &["Arcane Trickster"],
            )),
        ClassDef::base(CharacterClass::Sorcerer, &[Ability::Charisma], 3)
            .with_proficiencies(Proficiencies::new(&[], SIMPLE, &[]))
            .with_traits(&[
                (1, "Spellcasting"),
                (1, "Innate Sorcery"),
                (2, "Font of Magic"),
                (2, "Metamagic"),
                (3, "Sorcerer Subclass"),
                (5, "Sorcerous Restoration"),
                (7, "Sorcery Incarnate"),
                (20, "Arcane Apotheosis"),
            ])
            .with_subclasses(vec![
                Subclass::new("Aberrant Sorcery", &[(3, "Psionic Spells"), (3, "Telepathic Speech")]),
                Subclass::new("Clockwork Sorcery", &[(3, "Clockwork Spells"), (3, "Restore Balance")]),
                Subclass::new("Draconic Sorcery", &[(3, "Draconic Resilience"), (3, "Draconic Spells")]),
                Subclass::new("Wild Magic Sorcery", &[(3, "Wild Magic Surge"), (3, "Tides of Chaos")]),
            ])
            .with_spellcasting(Spellcasting::native(
                CasterKind::Full,
                Ability::Charisma,
                PreparedSpellChange::LevelUp,
                SpellProgressionTable::new(&[(1, 4), (4, 5), (10, 6)], Some(&SORCERER_PREPARED), &FULL_CASTER_SLOTS),
            )),
        ClassDef::base(CharacterClass::Warlock, &[Ability::Charisma], 3)
            .with_proficiencies(Proficiencies::new(&[ArmorCategory::Light], SIMPLE, &[]))
            .with_traits(&[
                (1, "Eldritch Invocations"),
                (1, "Pact Magic"),
                (2, "Magical Cunning"),
                (3, "Warlock Subclass"),
                (9, "Contact Patron"),
                (11, "Mystic Arcanum"),
                (20, "Eldritch Master"),
            ])
            .with_subclasses(vec![
                Subclass::new("Archfey Patron", &[(3, "Steps of the Fey")]),
                Subclass::new("Celestial Patron", &[(3, "Healing Light")]),
                Subclass::new("Fiend Patron", &[(3, "Dark One's Blessing")]),
                Subclass::new("Great Old One Patron", &[(3, "Awakened Mind"), (3, "Psychic Spells")]),
            ])
            .with_spellcasting(Spellcasting::native(
                CasterKind::Pact,
                Ability::Charisma,
                PreparedSpellChange::LevelUp,
                SpellProgressionTable::new(&[(1, 2), (4, 3), (10, 4)], Some(&WARLOCK_PREPARED), &pact_slot_rows()),
            )),
        ClassDef::base(CharacterClass::Wizard, &[Ability::Intelligence], 3)
            .with_proficiencies(Proficiencies::new(&[], SIMPLE, &[]))
            .with_traits(&[
                (1, "Spellcasting"),
                (1, "Ritual Adept"),
                (1, "Arcane Recovery"),
                (2, "Scholar"),
                (3, "Wizard Subclass"),
                (5, "Memorize Spell"),
                (18, "Spell Mastery"),
                (20, "Signature Spells"),
            ])
            .with_subclasses(vec![
                Subclass::new("Abjurer", &[(3, "Abjuration Savant"), (3, "Arcane Ward")]),
                Subclass::new("Diviner", &[(3, "Divination Savant"), (3, "Portent")]),
                Subclass::new("Evoker", &[(3, "Evocation Savant"), (3, "Potent Cantrip")]),
                Subclass::new("Illusionist", &[(3, "Illusion Savant"), (3, "Improved Illusions")]),
            ])
            .with_spellcasting(Spellcasting::native(
                CasterKind::Full,
                Ability::Intelligence,
                PreparedSpellChange::LongRest,
                SpellProgressionTable::new(&[(1, 3), (4, 4), (10, 5)], Some(&WIZARD_PREPARED), &FULL_CASTER_SLOTS),
            )),
    ]
}

fn background(
    name: &'static str,
    ability_scores: [Ability; 3],
    origin_feat: &'static str,
    skills: [Skill; 2],
    tool: &'static str,
) -> Background {
    Background {
        name,
        skill_proficiencies: skills,
        tool_proficiency: Some(tool),
        ability_scores: Some(ability_scores),
        origin_feat: Some(origin_feat),
    }
}

fn backgrounds() -> Vec<Background> {
    use Ability::*;
    vec![
        background("Acolyte", [Intelligence, Wisdom, Charisma], "Magic Initiate (Cleric)", [Skill::Insight, Skill::Religion], "Calligrapher's Supplies"),
        background("Artisan", [Strength, Dexterity, Intelligence], "Crafter", [Skill::Investigation, Skill::Persuasion], "One kind of Artisan's Tools"),
        background("Charlatan", [Dexterity, Constitution, Charisma], "Skilled", [Skill::Deception, Skill::SleightOfHand], "Forgery Kit"),
        background("Criminal", [Dexterity, Constitution, Intelligence], "Alert", [Skill::SleightOfHand, Skill::Stealth], "Thieves' Tools"),
        background("Entertainer", [Strength, Dexterity, Charisma], "Musician", [Skill::Acrobatics, Skill::Performance], "One kind of Musical Instrument"),
        background("Farmer", [Strength, Constitution, Wisdom], "Tough", [Skill::AnimalHandling, Skill::Nature], "Carpenter's Tools"),
        background("Guard", [Strength, Intelligence, Wisdom], "Alert", [Skill::Athletics, Skill::Perception], "One kind of Gaming Set"),
        background("Guide", [Dexterity, Constitution, Wisdom], "Magic Initiate (Druid)", [Skill::Stealth, Skill::Survival], "Cartographer's Tools"),
        background("Hermit", [Constitution, Wisdom, Charisma], "Healer", [Skill::Medicine, Skill::Religion], "Herbalism Kit"),
        background("Merchant", [Constitution, Intelligence, Charisma], "Lucky", [Skill::AnimalHandling, Skill::Persuasion], "Navigator's Tools"),
        background("Noble", [Strength, Intelligence, Charisma], "Skilled", [Skill::History, Skill::Persuasion], "One kind of Gaming Set"),
        background("Sage", [Constitution, Intelligence, Wisdom], "Magic Initiate (Wizard)", [Skill::Arcana, Skill::History], "Calligrapher's Supplies"),
        background("Sailor", [Strength, Dexterity, Wisdom], "Tavern Brawler", [Skill::Acrobatics, Skill::Perception], "Navigator's Tools"),
        background("Scribe", [Dexterity, Intelligence, Wisdom], "Skilled", [Skill::Investigation, Skill::Perception], "Calligrapher's Supplies"),
        background("Soldier", [Strength, Dexterity, Constitution], "Savage Attacker", [Skill::Athletics, Skill::Intimidation], "One kind of Gaming Set"),
        background("Wayfarer", [Dexterity, Wisdom, Charisma], "Lucky", [Skill::Insight, Skill::Stealth], "Thieves' Tools"),
    ]
}
