use std::collections::BTreeSet;

use mixer_core::errors::ErrorInfo;
use mixer_core::{
    mask_seed, reseed, AvoidanceHistory, Grouping, MixError, Participant, ScopeId,
};
use serde::{Deserialize, Serialize};

use crate::attempt::{attempt_pairs, PairAssignment};
use crate::config::MatchConfig;
use crate::rank::rank_participants;

/// Number of reseeded retries after the original attempt.
pub const MAX_RESEEDS: u32 = 5;

/// Requested group size for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupSize {
    /// Groups of two, matched under the avoidance window.
    Pairs,
    /// Groups of four (with 3- and 2-sized remainders), no avoidance checks.
    Quads,
}

impl GroupSize {
    /// Nominal member count for the size.
    pub fn member_count(self) -> usize {
        match self {
            GroupSize::Pairs => 2,
            GroupSize::Quads => 4,
        }
    }

    /// Parses a raw member count as supplied by external callers.
    pub fn from_member_count(count: usize) -> Result<Self, MixError> {
        match count {
            2 => Ok(GroupSize::Pairs),
            4 => Ok(GroupSize::Quads),
            other => Err(MixError::Config(
                ErrorInfo::new("invalid-group-size", "group size must be 2 or 4")
                    .with_context("requested", other.to_string()),
            )),
        }
    }
}

impl Default for GroupSize {
    fn default() -> Self {
        GroupSize::Pairs
    }
}

/// Pairing outcome returned by [`build_pairs`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairSet {
    /// Committed pairs in scan order.
    pub pairs: Vec<(Participant, Participant)>,
    /// Participant left out when the connected count is odd.
    pub waiting: Option<Participant>,
    /// Seed that actually produced this assignment.
    pub used_seed: u32,
    /// Ranking attempts executed, including the successful one.
    pub attempts: u32,
    /// Whether the unconstrained fallback produced the result.
    pub fallback: bool,
}

/// Grouping outcome returned by [`build_groups`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSet {
    /// Committed groups in carve order.
    pub groups: Vec<Grouping>,
    /// Participant left out when the pairs path had an odd count.
    pub waiting: Option<Participant>,
    /// Seed that actually produced this assignment.
    pub used_seed: u32,
    /// Ranking attempts executed, including the successful one.
    pub attempts: u32,
    /// Whether the unconstrained fallback produced the result.
    pub fallback: bool,
}

/// Group-size distribution for one quads-mode round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupPlan {
    /// Number of 4-sized groups.
    pub fours: usize,
    /// Number of 3-sized groups.
    pub threes: usize,
    /// Number of 2-sized groups.
    pub twos: usize,
}

impl GroupPlan {
    /// Distribution table on `n mod 4`; callers guarantee `n >= 4`.
    pub fn for_count(n: usize) -> Self {
        match n % 4 {
            0 => Self {
                fours: n / 4,
                threes: 0,
                twos: 0,
            },
            1 if n >= 9 => Self {
                fours: (n - 5) / 4,
                threes: 1,
                twos: 1,
            },
            // n == 5: no four fits alongside the remainder.
            1 => Self {
                fours: 0,
                threes: 1,
                twos: 1,
            },
            2 => Self {
                fours: (n - 2) / 4,
                threes: 0,
                twos: 1,
            },
            _ => Self {
                fours: (n - 3) / 4,
                threes: 1,
                twos: 0,
            },
        }
    }

    /// Total participants covered by the plan.
    pub fn total(&self) -> usize {
        4 * self.fours + 3 * self.threes + 2 * self.twos
    }
}

/// Builds a full pairing for the connected snapshot.
///
/// Tries up to [`MAX_RESEEDS`] reseeded rankings after the original seed;
/// when every attempt is infeasible the unconstrained fallback pairs by
/// sorted identifier. The returned `used_seed` is whichever seed produced
/// the assignment (the last seed tried, under fallback), so the result can
/// be reproduced exactly.
pub fn build_pairs(
    scope: &ScopeId,
    connected: &[Participant],
    round_index: u64,
    round_seed: u64,
    window: u32,
    history: &dyn AvoidanceHistory,
) -> Result<PairSet, MixError> {
    ensure_unique_ids(connected)?;
    let mut seed = mask_seed(round_seed);
    for attempt in 0..=MAX_RESEEDS {
        let ranked = rank_participants(connected, seed);
        if let Some(assignment) = attempt_pairs(scope, ranked, round_index, window, history) {
            return Ok(pair_set(assignment, seed, attempt + 1, false));
        }
        if attempt < MAX_RESEEDS {
            seed = reseed(seed);
        }
    }
    Ok(pair_set(fallback_pairs(connected), seed, MAX_RESEEDS + 1, true))
}

/// Builds groups of the requested size for the connected snapshot.
///
/// Pairs mode delegates wholly to [`build_pairs`], as does any snapshot
/// with fewer than four participants. Quads mode ranks once under the
/// masked seed and carves the list per [`GroupPlan`]; it performs no
/// avoidance checks and leaves nobody waiting.
pub fn build_groups(
    scope: &ScopeId,
    connected: &[Participant],
    round_index: u64,
    round_seed: u64,
    group_size: GroupSize,
    window: u32,
    history: &dyn AvoidanceHistory,
) -> Result<GroupSet, MixError> {
    if group_size == GroupSize::Pairs || connected.len() < 4 {
        let result = build_pairs(scope, connected, round_index, round_seed, window, history)?;
        let groups = result
            .pairs
            .iter()
            .map(|(a, b)| Grouping::new(vec![a.clone(), b.clone()]))
            .collect();
        return Ok(GroupSet {
            groups,
            waiting: result.waiting,
            used_seed: result.used_seed,
            attempts: result.attempts,
            fallback: result.fallback,
        });
    }

    ensure_unique_ids(connected)?;
    let seed = mask_seed(round_seed);
    let ranked = rank_participants(connected, seed);
    let plan = GroupPlan::for_count(ranked.len());

    let mut groups = Vec::with_capacity(plan.fours + plan.threes + plan.twos);
    let mut cursor = 0;
    for (count, size) in [(plan.fours, 4), (plan.threes, 3), (plan.twos, 2)] {
        for _ in 0..count {
            let members = ranked[cursor..cursor + size]
                .iter()
                .map(|entry| entry.participant.clone())
                .collect();
            groups.push(Grouping::new(members));
            cursor += size;
        }
    }

    Ok(GroupSet {
        groups,
        waiting: None,
        used_seed: seed,
        attempts: 1,
        fallback: false,
    })
}

/// Runs one round under the provided configuration.
pub fn run_round(
    config: &MatchConfig,
    scope: &ScopeId,
    connected: &[Participant],
    round_index: u64,
    history: &dyn AvoidanceHistory,
) -> Result<GroupSet, MixError> {
    build_groups(
        scope,
        connected,
        round_index,
        config.seed_policy.round_seed,
        config.group_size,
        config.avoid_repeat_window,
        history,
    )
}

fn pair_set(assignment: PairAssignment, used_seed: u32, attempts: u32, fallback: bool) -> PairSet {
    PairSet {
        pairs: assignment.pairs,
        waiting: assignment.waiting,
        used_seed,
        attempts,
        fallback,
    }
}

fn fallback_pairs(connected: &[Participant]) -> PairAssignment {
    let mut sorted: Vec<Participant> = connected.to_vec();
    sorted.sort_by(|a, b| a.id.cmp(&b.id));
    let chunks = sorted.chunks_exact(2);
    let waiting = chunks.remainder().first().cloned();
    let pairs = chunks
        .map(|chunk| (chunk[0].clone(), chunk[1].clone()))
        .collect();
    PairAssignment { pairs, waiting }
}

fn ensure_unique_ids(connected: &[Participant]) -> Result<(), MixError> {
    let mut seen = BTreeSet::new();
    for participant in connected {
        if !seen.insert(&participant.id) {
            return Err(MixError::Input(
                ErrorInfo::new(
                    "duplicate-participant",
                    "participant id appears more than once",
                )
                .with_context("id", participant.id.as_str())
                .with_hint("deduplicate the connected snapshot before matchmaking"),
            ));
        }
    }
    Ok(())
}
