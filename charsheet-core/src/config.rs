//! Resolver configuration.
//!
//! Controls how contract violations (levels past 20, a subclass caster with no
//! subclass chosen) are treated by the checked resolution path, and which
//! ruleset new characters are bound to.

use crate::ruleset::RulesetId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable selecting the [`LookupPolicy`].
pub const POLICY_VAR: &str = "CHARSHEET_LOOKUP_POLICY";

/// Environment variable selecting the default [`RulesetId`].
pub const RULESET_VAR: &str = "CHARSHEET_DEFAULT_RULESET";

/// Errors from loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {var}")]
    InvalidValue { var: &'static str, value: String },
}

/// What the checked resolution path does with out-of-contract input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupPolicy {
    /// Reject with a [`RulesError`](crate::ruleset::RulesError).
    Strict,
    /// Degrade to zero/empty values.
    Lenient,
}

impl Default for LookupPolicy {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            LookupPolicy::Strict
        } else {
            LookupPolicy::Lenient
        }
    }
}

impl fmt::Display for LookupPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupPolicy::Strict => write!(f, "strict"),
            LookupPolicy::Lenient => write!(f, "lenient"),
        }
    }
}

impl FromStr for LookupPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(LookupPolicy::Strict),
            "lenient" => Ok(LookupPolicy::Lenient),
            _ => Err(ConfigError::InvalidValue {
                var: POLICY_VAR,
                value: s.to_string(),
            }),
        }
    }
}

/// Configuration for ruleset resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// How out-of-contract lookups are handled.
    pub policy: LookupPolicy,

    /// Ruleset new characters are created under.
    pub default_ruleset: RulesetId,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolverConfig {
    /// Build-profile default policy, current ruleset.
    pub fn new() -> Self {
        Self {
            policy: LookupPolicy::default(),
            default_ruleset: RulesetId::Current,
        }
    }

    pub fn with_policy(mut self, policy: LookupPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_default_ruleset(mut self, ruleset: RulesetId) -> Self {
        self.default_ruleset = ruleset;
        self
    }

    /// Load overrides from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load overrides through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::new();
        if let Some(value) = lookup(POLICY_VAR) {
            config.policy = value.parse()?;
        }
        if let Some(value) = lookup(RULESET_VAR) {
            config.default_ruleset = value.parse().map_err(|_| ConfigError::InvalidValue {
                var: RULESET_VAR,
                value: value.clone(),
            })?;
        }
        tracing::debug!(
            policy = %config.policy,
            default_ruleset = %config.default_ruleset,
            "resolver config loaded"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ResolverConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ResolverConfig::new());
        assert_eq!(config.default_ruleset, RulesetId::Current);
    }

    #[test]
    fn test_overrides() {
        let config = ResolverConfig::from_lookup(lookup_from(&[
            (POLICY_VAR, "Lenient"),
            (RULESET_VAR, "2014"),
        ]))
        .unwrap();
        assert_eq!(config.policy, LookupPolicy::Lenient);
        assert_eq!(config.default_ruleset, RulesetId::Legacy);
    }

    #[test]
    fn test_invalid_values() {
        let err = ResolverConfig::from_lookup(lookup_from(&[(POLICY_VAR, "loose")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                var: POLICY_VAR,
                value: "loose".to_string()
            }
        );
        assert_eq!(
            ResolverConfig::from_lookup(lookup_from(&[(RULESET_VAR, "3.5e")])).unwrap_err(),
            ConfigError::InvalidValue {
                var: RULESET_VAR,
                value: "3.5e".to_string()
            }
        );
    }

    #[test]
    fn test_builder() {
        let config = ResolverConfig::new()
            .with_policy(LookupPolicy::Strict)
            .with_default_ruleset(RulesetId::Legacy);
        assert_eq!(config.policy, LookupPolicy::Strict);
        assert_eq!(config.default_ruleset, RulesetId::Legacy);
    }
}
