use mixer_core::{AvoidanceHistory, Participant, ScopeId};
use mixer_history::MemoryHistory;
use mixer_match::{build_groups, GroupPlan, GroupSize};

fn roster(n: usize) -> Vec<Participant> {
    (0..n)
        .map(|i| Participant::new(format!("usr_{i:02}"), format!("B{i:02}")))
        .collect()
}

#[test]
fn plan_matches_the_remainder_table() {
    for n in 4..=41 {
        let plan = GroupPlan::for_count(n);
        assert_eq!(plan.total(), n, "plan must cover all {n} participants");
        match n % 4 {
            0 => assert_eq!((plan.fours, plan.threes, plan.twos), (n / 4, 0, 0)),
            1 if n >= 9 => {
                assert_eq!((plan.fours, plan.threes, plan.twos), ((n - 5) / 4, 1, 1))
            }
            1 => assert_eq!((plan.fours, plan.threes, plan.twos), (0, 1, 1)),
            2 => assert_eq!((plan.fours, plan.threes, plan.twos), ((n - 2) / 4, 0, 1)),
            _ => assert_eq!((plan.fours, plan.threes, plan.twos), ((n - 3) / 4, 1, 0)),
        }
    }
}

#[test]
fn groups_are_carved_largest_first() {
    let history = MemoryHistory::new();
    let scope = ScopeId::new("evt_groups");
    for n in [4usize, 5, 9, 10, 11, 13, 16, 23] {
        let connected = roster(n);
        let result = build_groups(&scope, &connected, 0, 11, GroupSize::Quads, 3, &history)
            .expect("groups");
        let sizes: Vec<usize> = result.groups.iter().map(|g| g.size()).collect();
        let mut sorted_desc = sizes.clone();
        sorted_desc.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(sizes, sorted_desc, "carve order for n={n}");
        assert_eq!(sizes.iter().sum::<usize>(), n);
        assert!(result.waiting.is_none());
        assert!(sizes.iter().all(|s| (2..=4).contains(s)));
    }
}

#[test]
fn quads_ignore_avoidance_history() {
    let mut history = MemoryHistory::new();
    let scope = ScopeId::new("evt_groups");
    let connected = roster(8);
    // Saturate the history: every duo was paired in the previous round.
    for i in 0..connected.len() {
        for j in (i + 1)..connected.len() {
            history.record_pair(&scope, &connected[i].id, &connected[j].id, 4);
        }
    }

    let result =
        build_groups(&scope, &connected, 5, 3, GroupSize::Quads, 3, &history).expect("groups");

    assert_eq!(result.attempts, 1);
    assert!(!result.fallback);
    assert_eq!(result.groups.len(), 2);
}

#[test]
fn pairs_mode_delegates_and_tags_groups_of_two() {
    let history = MemoryHistory::new();
    let scope = ScopeId::new("evt_groups");
    let connected = roster(7);

    let result =
        build_groups(&scope, &connected, 0, 5, GroupSize::Pairs, 3, &history).expect("groups");

    assert_eq!(result.groups.len(), 3);
    assert!(result.groups.iter().all(|g| g.size() == 2));
    assert!(result.waiting.is_some());
}

#[test]
fn group_size_parsing_rejects_other_counts() {
    assert_eq!(GroupSize::from_member_count(2).unwrap(), GroupSize::Pairs);
    assert_eq!(GroupSize::from_member_count(4).unwrap(), GroupSize::Quads);
    let err = GroupSize::from_member_count(3).unwrap_err();
    assert_eq!(err.info().code, "invalid-group-size");
    assert_eq!(GroupSize::Pairs.member_count(), 2);
    assert_eq!(GroupSize::Quads.member_count(), 4);
}
