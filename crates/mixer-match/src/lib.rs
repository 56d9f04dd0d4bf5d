#![deny(missing_docs)]

//! Deterministic round-based matchmaking engine.
//!
//! One invocation partitions an immutable snapshot of connected
//! participants into pairs or quads for a single round: rank the snapshot
//! under a 32-bit seed, pair adjacent ranks subject to the avoidance
//! window, reseed and retry on infeasibility, and fall back to an
//! unconstrained pairing once the retry budget is spent. The avoidance
//! history is injected per call; the engine itself holds no state and
//! performs no I/O.

/// YAML configuration schema and defaults.
pub mod config;
/// Entry points, retry loop, fallback and group carving.
pub mod engine;
/// Round manifest serialization and input hashing.
pub mod manifest;
/// Seeded ranking with explicit tie-breaking.
pub mod rank;

mod attempt;

pub use config::{MatchConfig, SeedPolicy};
pub use engine::{
    build_groups, build_pairs, run_round, GroupPlan, GroupSet, GroupSize, PairSet, MAX_RESEEDS,
};
pub use manifest::{input_hash, RoundManifest};
pub use rank::{rank_participants, RankedParticipant};
