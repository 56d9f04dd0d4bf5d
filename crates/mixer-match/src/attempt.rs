use mixer_core::{AvoidanceHistory, Participant, ScopeId};

use crate::rank::RankedParticipant;

/// Pairing produced by a single constrained pass.
#[derive(Debug, Clone)]
pub(crate) struct PairAssignment {
    pub pairs: Vec<(Participant, Participant)>,
    pub waiting: Option<Participant>,
}

/// True when the pair may be matched in the current round.
pub(crate) fn outside_window(round_index: u64, last: Option<u64>, window: u32) -> bool {
    match last {
        None => true,
        Some(last) => (round_index as i64) - (last as i64) > i64::from(window),
    }
}

/// One deterministic pass over a ranked list, honoring the avoidance window.
///
/// Scans left to right in steps of two. A lone survivor becomes the waiting
/// participant. A window violation triggers a single lookahead to the
/// candidate after the violating neighbor; the displaced neighbor keeps its
/// ranked position for the next iteration. Anything beyond that one step is
/// out of bounds: the attempt reports infeasible and the caller reseeds.
pub(crate) fn attempt_pairs(
    scope: &ScopeId,
    mut ranked: Vec<RankedParticipant>,
    round_index: u64,
    window: u32,
    history: &dyn AvoidanceHistory,
) -> Option<PairAssignment> {
    let mut pairs = Vec::with_capacity(ranked.len() / 2);
    let mut waiting = None;

    let mut index = 0;
    while index < ranked.len() {
        if index == ranked.len() - 1 {
            waiting = Some(ranked[index].participant.clone());
            break;
        }
        let a = ranked[index].participant.clone();
        let b = &ranked[index + 1].participant;
        let last = history.last_paired(scope, &a.id, &b.id);
        if outside_window(round_index, last, window) {
            pairs.push((a, b.clone()));
            index += 2;
            continue;
        }
        if index + 2 < ranked.len() {
            let c = &ranked[index + 2].participant;
            let last_ac = history.last_paired(scope, &a.id, &c.id);
            if outside_window(round_index, last_ac, window) {
                pairs.push((a, c.clone()));
                // B moves into C's old slot and retains its ranked order.
                ranked.swap(index + 1, index + 2);
                index += 2;
                continue;
            }
        }
        return None;
    }

    Some(PairAssignment { pairs, waiting })
}
