use std::fs;
use std::path::Path;

use mixer_core::errors::ErrorInfo;
use mixer_core::provenance::{RoundProvenance, SchemaVersion};
use mixer_core::{MixError, Participant, ParticipantId, ScopeId};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::engine::GroupSet;

/// Computes the canonical hash of a connected snapshot.
///
/// Covers `(id, badge)` entries sorted by id, so the hash is invariant
/// under input order while still pinning everything the ranking depends on.
pub fn input_hash(connected: &[Participant]) -> Result<String, MixError> {
    let mut entries: Vec<(&str, &str)> = connected
        .iter()
        .map(|participant| (participant.id.as_str(), participant.badge.as_str()))
        .collect();
    entries.sort();
    let bytes = serde_json::to_vec(&entries).map_err(|err| {
        MixError::Serde(ErrorInfo::new("input-hash-serialize", err.to_string()))
    })?;
    Ok(format!("{:x}", Sha256::digest(bytes)))
}

/// Structured manifest describing one committed round.
///
/// Pure audit artifact: together with the stored history it is enough to
/// reproduce the assignment byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundManifest {
    /// Schema version for the manifest payload.
    pub schema_version: SchemaVersion,
    /// Provenance block tying the round to its exact inputs.
    pub provenance: RoundProvenance,
    /// Sizes of the committed groups in carve order.
    pub group_sizes: Vec<usize>,
    /// Waiting participant, if the pairs path left one out.
    pub waiting: Option<ParticipantId>,
    /// Ranking attempts executed, including the successful one.
    pub attempts: u32,
    /// Whether the unconstrained fallback produced the result.
    pub fallback: bool,
}

impl RoundManifest {
    /// Assembles a manifest for a produced assignment.
    ///
    /// `created_at` is supplied by the caller; the engine never reads a
    /// clock.
    pub fn from_group_set(
        scope: &ScopeId,
        round_index: u64,
        connected: &[Participant],
        set: &GroupSet,
        created_at: impl Into<String>,
    ) -> Result<Self, MixError> {
        Ok(Self {
            schema_version: SchemaVersion::default(),
            provenance: RoundProvenance {
                scope: scope.as_str().to_string(),
                round_index,
                used_seed: set.used_seed,
                input_hash: input_hash(connected)?,
                created_at: created_at.into(),
            },
            group_sizes: set.groups.iter().map(|group| group.size()).collect(),
            waiting: set.waiting.as_ref().map(|p| p.id.clone()),
            attempts: set.attempts,
            fallback: set.fallback,
        })
    }

    /// Writes the manifest to a JSON file.
    pub fn write(&self, path: &Path) -> Result<(), MixError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                MixError::Serde(
                    ErrorInfo::new("manifest-mkdir", err.to_string())
                        .with_context("path", parent.display().to_string()),
                )
            })?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|err| {
            MixError::Serde(
                ErrorInfo::new("manifest-serialize", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        fs::write(path, json).map_err(|err| {
            MixError::Serde(
                ErrorInfo::new("manifest-write", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }

    /// Loads a manifest from disk.
    pub fn load(path: &Path) -> Result<Self, MixError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            MixError::Serde(
                ErrorInfo::new("manifest-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        serde_json::from_str(&contents).map_err(|err| {
            MixError::Serde(
                ErrorInfo::new("manifest-parse", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }
}
