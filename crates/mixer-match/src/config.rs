use serde::{Deserialize, Serialize};

use mixer_core::errors::ErrorInfo;
use mixer_core::MixError;

use crate::engine::GroupSize;

/// YAML-configurable parameters governing an event's rounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Requested group size for each round.
    #[serde(default)]
    pub group_size: GroupSize,
    /// Rounds during which a previously paired duo must not be re-paired.
    #[serde(default = "default_window")]
    pub avoid_repeat_window: u32,
    /// Round seed policy.
    #[serde(default)]
    pub seed_policy: SeedPolicy,
}

fn default_window() -> u32 {
    3
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            group_size: GroupSize::default(),
            avoid_repeat_window: default_window(),
            seed_policy: SeedPolicy::default(),
        }
    }
}

/// Deterministic seeding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedPolicy {
    /// Seed for the next round; values outside the 32-bit range are masked.
    #[serde(default = "default_round_seed")]
    pub round_seed: u64,
    /// Optional label documented in round manifests.
    #[serde(default)]
    pub label: Option<String>,
}

fn default_round_seed() -> u64 {
    0x50C1_A715
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self {
            round_seed: default_round_seed(),
            label: None,
        }
    }
}

impl MatchConfig {
    /// Parses a YAML configuration document.
    pub fn from_yaml(text: &str) -> Result<Self, MixError> {
        serde_yaml::from_str(text).map_err(|err| {
            MixError::Config(ErrorInfo::new("config-parse", err.to_string()))
        })
    }
}
