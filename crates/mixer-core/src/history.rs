//! Avoidance-history interface consumed by the matchmaking engine.

use crate::types::{ParticipantId, ScopeId};

/// Read/write contract for the pair-avoidance history of a deployment.
///
/// The engine is handed a history reference per invocation instead of
/// reaching for process-wide state, so tests and concurrent scopes stay
/// isolated. Both operations canonicalize the pair internally: `(A,B)` and
/// `(B,A)` always address the same entry.
pub trait AvoidanceHistory: Send + Sync {
    /// Returns the round index in which the two participants were last
    /// grouped together, or `None` if they never were.
    fn last_paired(
        &self,
        scope: &ScopeId,
        a: &ParticipantId,
        b: &ParticipantId,
    ) -> Option<u64>;

    /// Records that the two participants were paired in the given round.
    ///
    /// Called once per committed pair after the surrounding layer accepts a
    /// result; never called by the engine itself.
    fn record_pair(
        &mut self,
        scope: &ScopeId,
        a: &ParticipantId,
        b: &ParticipantId,
        round_index: u64,
    );
}
