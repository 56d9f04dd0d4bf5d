//! Provenance and schema descriptors shared across mixer artifacts.

use serde::{Deserialize, Serialize};

/// Semantic version describing the schema of serialized payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Major version incremented for breaking changes.
    pub major: u32,
    /// Minor version incremented for additive changes.
    pub minor: u32,
    /// Patch version incremented for bug fixes and documentation updates.
    pub patch: u32,
}

impl SchemaVersion {
    /// Creates a new schema version descriptor.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

/// Provenance block tying a produced assignment to its exact inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RoundProvenance {
    /// Scope the round was produced for.
    pub scope: String,
    /// Index of the round within its scope.
    pub round_index: u64,
    /// Seed that actually produced the returned assignment.
    pub used_seed: u32,
    /// Canonical hash of the sorted participant identifier list.
    pub input_hash: String,
    /// ISO-8601 timestamp recording when the artifact was generated.
    pub created_at: String,
}
