//! Spellcasting progression across both rulesets.
//!
//! Run with: `cargo test -p charsheet-core --test progression`

use charsheet_core::class_data::{CasterKind, CharacterClass, PreparedSpellChange};
use charsheet_core::ruleset::{ruleset, rulesets, RulesetId};
use charsheet_core::{LookupPolicy, ResolverConfig};

#[test]
fn test_native_casters_are_monotonic() {
    for rules in rulesets().iter() {
        for def in rules.classes() {
            let Some(table) = def.spellcasting.as_enabled().and_then(|s| s.table()) else {
                continue;
            };
            let pact = def
                .spellcasting
                .as_enabled()
                .is_some_and(|s| s.kind == CasterKind::Pact);

            for pair in table.rows().windows(2) {
                let (prev, next) = (&pair[0], &pair[1]);
                let context = format!("{} {} level {}", rules.id(), def.name(), next.level);
                assert!(next.cantrips_known >= prev.cantrips_known, "cantrips: {context}");
                if let (Some(a), Some(b)) = (prev.spells_prepared, next.spells_prepared) {
                    assert!(b >= a, "prepared: {context}");
                }
                if pact {
                    // Pact slots move up in level instead of accumulating.
                    assert!(next.total_slots() >= prev.total_slots(), "pact slots: {context}");
                } else {
                    for spell_level in 0..9 {
                        assert!(
                            next.slots[spell_level] >= prev.slots[spell_level],
                            "slots: {context}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_cantrips_through_queries_are_monotonic() {
    for rules in rulesets().iter() {
        for class in CharacterClass::all() {
            let counts: Vec<u8> = (0..=20).map(|l| rules.max_cantrips_known(*class, l)).collect();
            assert!(counts.windows(2).all(|w| w[1] >= w[0]), "{} {}", rules.id(), class);
        }
    }
}

#[test]
fn test_prepared_divergence_between_rulesets() {
    let legacy = ruleset(RulesetId::Legacy);
    let current = ruleset(RulesetId::Current);

    for class in [CharacterClass::Wizard, CharacterClass::Cleric, CharacterClass::Druid] {
        let low = legacy.max_spells_prepared(class, 5, 1);
        let high = legacy.max_spells_prepared(class, 5, 4);
        assert_eq!(low, 6, "{class}");
        assert_eq!(high, 9, "{class}");

        assert_eq!(
            current.max_spells_prepared(class, 5, 1),
            current.max_spells_prepared(class, 5, 4),
            "{class}"
        );
    }
    assert_eq!(current.max_spells_prepared(CharacterClass::Wizard, 5, 0), 9);
}

#[test]
fn test_legacy_half_caster_formula() {
    let legacy = ruleset(RulesetId::Legacy);
    assert_eq!(legacy.max_spells_prepared(CharacterClass::Paladin, 1, 3), 0);
    assert_eq!(legacy.max_spells_prepared(CharacterClass::Paladin, 2, 3), 4);
    assert_eq!(legacy.max_spells_prepared(CharacterClass::Paladin, 9, 3), 7);
    assert_eq!(legacy.max_spells_prepared(CharacterClass::Paladin, 2, -1), 0);
    // The legacy ranger lists spells known explicitly.
    assert_eq!(
        legacy.max_spells_prepared(CharacterClass::Ranger, 5, 5),
        legacy.max_spells_prepared(CharacterClass::Ranger, 5, -2)
    );
}

#[test]
fn test_formula_never_negative() {
    let legacy = ruleset(RulesetId::Legacy);
    assert_eq!(legacy.max_spells_prepared(CharacterClass::Wizard, 1, -5), 0);
    assert_eq!(legacy.max_spells_prepared(CharacterClass::Wizard, 0, 5), 0);
    assert_eq!(legacy.max_spells_prepared(CharacterClass::Wizard, 2, -1), 1);
}

#[test]
fn test_non_casters_are_zero() {
    for rules in rulesets().iter() {
        for class in [CharacterClass::Barbarian, CharacterClass::Monk] {
            for level in 0..=20 {
                assert_eq!(rules.max_cantrips_known(class, level), 0);
                assert_eq!(rules.max_spells_prepared(class, level, 5), 0);
            }
        }
    }
}

#[test]
fn test_subclass_casters_share_curve() {
    for rules in rulesets().iter() {
        for level in 0..=20 {
            assert_eq!(
                rules.max_cantrips_known(CharacterClass::Fighter, level),
                rules.max_cantrips_known(CharacterClass::Rogue, level)
            );
            assert_eq!(
                rules.max_spells_prepared(CharacterClass::Fighter, level, 0),
                rules.max_spells_prepared(CharacterClass::Rogue, level, 5)
            );
        }
        assert_eq!(rules.max_cantrips_known(CharacterClass::Fighter, 3), 2);
        assert_eq!(rules.max_spells_prepared(CharacterClass::Fighter, 3, 0), 3);
        assert_eq!(rules.max_cantrips_known(CharacterClass::Fighter, 2), 0);
    }
}

#[test]
fn test_out_of_table_levels_are_empty() {
    let rules = ruleset(RulesetId::Current);
    assert_eq!(rules.max_cantrips_known(CharacterClass::Wizard, 21), 0);
    assert_eq!(rules.max_spells_prepared(CharacterClass::Wizard, 40, 3), 0);
    assert!(rules.slots_for(CasterKind::Half, 21).is_empty());
    assert!(rules.mystic_arcanum(21).is_empty());
}

#[test]
fn test_slots_are_ascending() {
    for rules in rulesets().iter() {
        for kind in CasterKind::all() {
            for level in 0..=20 {
                let slots = rules.slots_for(*kind, level);
                assert!(slots.windows(2).all(|w| w[0] <= w[1]), "{kind:?} {level}");
            }
        }
        assert_eq!(rules.slots_for(CasterKind::Full, 20).len(), 22);
    }
}

#[test]
fn test_listing_order() {
    let legacy = ruleset(RulesetId::Legacy);
    let names: Vec<&str> = legacy.lineages(None).iter().map(|l| l.name).collect();
    let dwarf = names.iter().position(|n| *n == "Hill Dwarf").unwrap();
    let elf = names.iter().position(|n| *n == "High Elf").unwrap();
    assert!(dwarf < elf);
    assert!(legacy.lineages(Some("Human")).is_empty());

    let current = ruleset(RulesetId::Current);
    let elves: Vec<&str> = current.lineages(Some("elf")).iter().map(|l| l.name).collect();
    assert_eq!(elves, ["Drow", "High Elf", "Wood Elf"]);

    let wizard = current.subclasses(Some(CharacterClass::Wizard));
    assert_eq!(wizard, ["Abjurer", "Diviner", "Evoker", "Illusionist"]);
    assert_eq!(current.subclasses(None).len(), 48);
}

#[test]
fn test_cleric_prepares_on_long_rest() {
    for rules in rulesets().iter() {
        let cleric = rules.class(CharacterClass::Cleric).unwrap();
        let casting = cleric.spellcasting.as_enabled().unwrap();
        assert_eq!(casting.prepared_change, PreparedSpellChange::LongRest);
    }
}

#[test]
fn test_checked_resolution_policies() {
    let rules = ruleset(RulesetId::Legacy);
    let strict = ResolverConfig::new().with_policy(LookupPolicy::Strict);
    let lenient = ResolverConfig::new().with_policy(LookupPolicy::Lenient);

    assert!(rules
        .resolve_spellcasting(CharacterClass::Rogue, 4, None, 2, &strict)
        .is_err());
    let degraded = rules
        .resolve_spellcasting(CharacterClass::Rogue, 4, None, 2, &lenient)
        .unwrap();
    assert_eq!(degraded.cantrips, 0);
    assert!(degraded.slots.is_empty());

    let trickster = rules
        .resolve_spellcasting(CharacterClass::Rogue, 4, Some("arcane trickster"), 2, &strict)
        .unwrap();
    assert_eq!(trickster.cantrips, 2);
    assert_eq!(trickster.prepared, 4);
    assert_eq!(trickster.slots, vec![1, 1, 1]);
}
