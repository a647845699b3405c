//! Character to ruleset binding.
//!
//! A character is bound to one ruleset when created and keeps it for life.

use crate::config::ResolverConfig;
use crate::ruleset::{self, Ruleset, RulesetId};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("Character is bound to the {bound} ruleset and cannot switch to {requested}")]
    RulesetLocked {
        bound: RulesetId,
        requested: RulesetId,
    },
}

/// The ruleset a character was created under.
///
/// Fields are private and there is no setter; a stored binding is restored
/// through serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RulesetBinding {
    character: CharacterId,
    ruleset: RulesetId,
}

impl RulesetBinding {
    pub fn new(character: CharacterId, ruleset: RulesetId) -> Self {
        Self { character, ruleset }
    }

    /// Bind a freshly created character to the configured default ruleset.
    pub fn for_new_character(config: &ResolverConfig) -> Self {
        let binding = Self::new(CharacterId::new(), config.default_ruleset);
        tracing::debug!(character = %binding.character, ruleset = %binding.ruleset, "character bound");
        binding
    }

    pub fn character(&self) -> CharacterId {
        self.character
    }

    pub fn ruleset(&self) -> RulesetId {
        self.ruleset
    }

    /// The rule bundle this character resolves against.
    pub fn rules(&self) -> &'static Ruleset {
        ruleset::ruleset(self.ruleset)
    }

    /// Succeeds only when `requested` is the ruleset already bound.
    pub fn rebind(&self, requested: RulesetId) -> Result<(), BindingError> {
        if requested == self.ruleset {
            Ok(())
        } else {
            Err(BindingError::RulesetLocked {
                bound: self.ruleset,
                requested,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_ids_unique() {
        assert_ne!(CharacterId::new(), CharacterId::new());
    }

    #[test]
    fn test_new_character_uses_config_default() {
        let config = ResolverConfig::new().with_default_ruleset(RulesetId::Legacy);
        let binding = RulesetBinding::for_new_character(&config);
        assert_eq!(binding.ruleset(), RulesetId::Legacy);
        assert_eq!(binding.rules().id(), RulesetId::Legacy);
    }

    #[test]
    fn test_rebind_is_rejected() {
        let binding = RulesetBinding::new(CharacterId::new(), RulesetId::Current);
        assert!(binding.rebind(RulesetId::Current).is_ok());
        assert_eq!(
            binding.rebind(RulesetId::Legacy),
            Err(BindingError::RulesetLocked {
                bound: RulesetId::Current,
                requested: RulesetId::Legacy,
            })
        );
        assert_eq!(binding.ruleset(), RulesetId::Current);
    }

    #[test]
    fn test_binding_serialization() {
        let binding = RulesetBinding::new(CharacterId::new(), RulesetId::Legacy);
        let json = serde_json::to_string(&binding).unwrap();
        assert!(json.contains("\"legacy\""));
        let restored: RulesetBinding = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, binding);
    }
}
