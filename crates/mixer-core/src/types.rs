use serde::{Deserialize, Serialize};

use crate::hash::badge_code;

/// Identifier for one mixing event; namespaces all history entries.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ScopeId(String);

impl ScopeId {
    /// Creates a new identifier from its raw string representation.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the raw string representation of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier for a participant; unique within a scope.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Creates a new identifier from its raw string representation.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the raw string representation of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A connected participant as seen by the matchmaking engine.
///
/// The badge is the externally issued display identity (an emoji or short
/// hex code); its rolling-hash reduction feeds the rank function. The engine
/// only reads participants, it never creates or mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Stable identifier used for history keys and tie-breaking.
    pub id: ParticipantId,
    /// Display identity whose hash drives the seeded ranking.
    pub badge: String,
}

impl Participant {
    /// Creates a participant from its identifier and badge.
    pub fn new(id: impl Into<String>, badge: impl Into<String>) -> Self {
        Self {
            id: ParticipantId::new(id),
            badge: badge.into(),
        }
    }

    /// Returns the 32-bit hash input derived from the badge.
    pub fn code(&self) -> u32 {
        badge_code(&self.badge)
    }
}

/// Canonical unordered pair of participant identifiers.
///
/// Construction sorts the two identifiers, so `(A,B)` and `(B,A)` produce
/// the same key. This is the only key shape the avoidance history accepts.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PairKey(ParticipantId, ParticipantId);

impl PairKey {
    /// Builds the canonical key for an unordered participant pair.
    pub fn new(a: &ParticipantId, b: &ParticipantId) -> Self {
        if a <= b {
            Self(a.clone(), b.clone())
        } else {
            Self(b.clone(), a.clone())
        }
    }

    /// Returns the lexicographically smaller identifier.
    pub fn first(&self) -> &ParticipantId {
        &self.0
    }

    /// Returns the lexicographically larger identifier.
    pub fn second(&self) -> &ParticipantId {
        &self.1
    }
}

/// An ordered group of 2 to 4 participants produced for one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grouping {
    /// Members in rank order.
    pub members: Vec<Participant>,
}

impl Grouping {
    /// Wraps the given members as a group.
    pub fn new(members: Vec<Participant>) -> Self {
        Self { members }
    }

    /// Number of participants in the group.
    pub fn size(&self) -> usize {
        self.members.len()
    }
}
