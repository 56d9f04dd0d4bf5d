#![deny(missing_docs)]
#![doc = "Core types, hashing primitives and the avoidance-history interface for the mixer matchmaking engine."]

pub mod errors;
pub mod hash;
pub mod history;
pub mod provenance;
mod types;

pub use errors::{ErrorInfo, MixError};
pub use hash::{badge_code, fresh_seed, mask_seed, mix32, rank_key, reseed, seed_from_clock_ms};
pub use history::AvoidanceHistory;
pub use provenance::{RoundProvenance, SchemaVersion};
pub use types::{Grouping, PairKey, Participant, ParticipantId, ScopeId};
