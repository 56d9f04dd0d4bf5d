use mixer_core::{rank_key, Participant};

/// A participant annotated with its rank key for one attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedParticipant {
    /// Participant carried through the attempt.
    pub participant: Participant,
    /// Rank key under the attempt seed.
    pub rank: u32,
}

/// Ranks a connected snapshot for the given seed.
///
/// Ascending by rank key; ties are broken by participant id so badge-hash
/// collisions order identically on every run. Sort stability is never
/// relied upon.
pub fn rank_participants(connected: &[Participant], seed: u32) -> Vec<RankedParticipant> {
    let mut ranked: Vec<RankedParticipant> = connected
        .iter()
        .map(|participant| RankedParticipant {
            rank: rank_key(participant.code(), seed),
            participant: participant.clone(),
        })
        .collect();
    ranked.sort_by(|a, b| {
        a.rank
            .cmp(&b.rank)
            .then_with(|| a.participant.id.cmp(&b.participant.id))
    });
    ranked
}
