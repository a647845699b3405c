//! D&D 5e character sheet rules core.
//!
//! This crate provides:
//! - Versioned rule bundles for the 2014 and 2024 Player's Handbooks
//! - Spellcasting progression queries (cantrips, prepared spells, slots)
//! - Coin purse arithmetic with real change-making
//! - Immutable character to ruleset binding
//!
//! Everything is synchronous and pure. The rule bundles are built once per
//! process and shared by reference.
//!
//! # Quick Start
//!
//! ```
//! use charsheet_core::{
//!     apply_deltas_with_change, ruleset, CharacterClass, CoinPurse, Denomination, RulesetId,
//! };
//!
//! let rules = ruleset(RulesetId::Current);
//! assert_eq!(rules.max_cantrips_known(CharacterClass::Wizard, 1), 3);
//! assert_eq!(rules.max_spells_prepared(CharacterClass::Wizard, 1, 3), 4);
//!
//! let purse = CoinPurse::of(Denomination::Gp, 100);
//! let spent = apply_deltas_with_change(&purse, &CoinPurse::of(Denomination::Cp, -1));
//! assert_eq!(spent.to_string(), "99 gp, 9 sp, 9 cp");
//! ```

pub mod binding;
pub mod class_data;
pub mod coins;
pub mod config;
pub mod progression;
pub mod ruleset;
pub mod stats;

// Primary public API
pub use binding::{BindingError, CharacterId, RulesetBinding};
pub use class_data::{CasterKind, CharacterClass, ClassDef, SpellcastingConfig};
pub use coins::{
    apply_deltas_with_change, can_afford, to_copper, try_apply_deltas, CoinPurse, Denomination,
    LedgerError,
};
pub use config::{ConfigError, LookupPolicy, ResolverConfig};
pub use ruleset::{ruleset, rulesets, RulesError, Ruleset, RulesetId, SpellcastingSummary};
pub use stats::{Ability, AbilityScores, Skill};
