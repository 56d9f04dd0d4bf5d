#![deny(missing_docs)]

//! In-memory avoidance history and round bookkeeping.
//!
//! Reference implementation of the [`AvoidanceHistory`] trait, intended for
//! tests and single-process deployments. One instance serves any number of
//! scopes; entries never leak between them. The surrounding layer owns
//! locking: the engine assumes the history it reads is not mutated
//! mid-computation within a scope.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use mixer_core::{AvoidanceHistory, Grouping, PairKey, ParticipantId, ScopeId};

/// Bookkeeping entry retained for every committed round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Scope the round belongs to.
    pub scope: ScopeId,
    /// Index of the round within its scope.
    pub index: u64,
    /// Seed that produced the committed assignment.
    pub used_seed: u32,
    /// ISO-8601 timestamp recording when the round was committed.
    pub created_at: String,
}

/// Map-backed avoidance history with per-scope round records.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    avoidance: BTreeMap<(ScopeId, PairKey), u64>,
    rounds: BTreeMap<ScopeId, Vec<RoundRecord>>,
}

impl MemoryHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits a produced assignment for the given round.
    ///
    /// Stores a [`RoundRecord`] and records an avoidance entry for every
    /// committed pair. Groups of 3 and 4 never enter the avoidance history;
    /// only 2-sized groups count as pairings.
    pub fn commit_round(
        &mut self,
        scope: &ScopeId,
        index: u64,
        used_seed: u32,
        groups: &[Grouping],
    ) -> RoundRecord {
        for group in groups {
            if group.size() == 2 {
                self.record_pair(scope, &group.members[0].id, &group.members[1].id, index);
            }
        }
        let record = RoundRecord {
            scope: scope.clone(),
            index,
            used_seed,
            created_at: Utc::now().to_rfc3339(),
        };
        self.rounds
            .entry(scope.clone())
            .or_default()
            .push(record.clone());
        record
    }

    /// Returns the committed rounds for a scope, oldest first.
    pub fn rounds(&self, scope: &ScopeId) -> &[RoundRecord] {
        self.rounds.get(scope).map_or(&[], Vec::as_slice)
    }

    /// Returns the most recently committed round for a scope.
    pub fn last_round(&self, scope: &ScopeId) -> Option<&RoundRecord> {
        self.rounds(scope).last()
    }

    /// Next round index for a scope: the count of committed rounds.
    pub fn next_round_index(&self, scope: &ScopeId) -> u64 {
        self.rounds(scope).len() as u64
    }
}

impl AvoidanceHistory for MemoryHistory {
    fn last_paired(
        &self,
        scope: &ScopeId,
        a: &ParticipantId,
        b: &ParticipantId,
    ) -> Option<u64> {
        self.avoidance
            .get(&(scope.clone(), PairKey::new(a, b)))
            .copied()
    }

    fn record_pair(
        &mut self,
        scope: &ScopeId,
        a: &ParticipantId,
        b: &ParticipantId,
        round_index: u64,
    ) {
        self.avoidance
            .insert((scope.clone(), PairKey::new(a, b)), round_index);
    }
}
