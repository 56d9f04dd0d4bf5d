use mixer_core::{Participant, ScopeId};
use mixer_history::MemoryHistory;
use mixer_match::{build_groups, input_hash, GroupSize, RoundManifest};

fn roster(n: usize) -> Vec<Participant> {
    (0..n)
        .map(|i| Participant::new(format!("usr_{i:02}"), format!("B{i:02}")))
        .collect()
}

#[test]
fn input_hash_is_order_invariant() {
    let connected = roster(6);
    let mut shuffled = connected.clone();
    shuffled.reverse();
    assert_eq!(
        input_hash(&connected).expect("hash"),
        input_hash(&shuffled).expect("hash")
    );
}

#[test]
fn input_hash_tracks_badges() {
    let connected = roster(4);
    let mut rebadged = connected.clone();
    rebadged[0].badge = "Z9".into();
    assert_ne!(
        input_hash(&connected).expect("hash"),
        input_hash(&rebadged).expect("hash")
    );
}

#[test]
fn manifest_round_trips_through_disk() {
    let scope = ScopeId::new("evt_manifest");
    let history = MemoryHistory::new();
    let connected = roster(9);
    let set = build_groups(&scope, &connected, 2, 42, GroupSize::Quads, 3, &history)
        .expect("groups");

    let manifest = RoundManifest::from_group_set(
        &scope,
        2,
        &connected,
        &set,
        "2026-08-07T12:00:00Z",
    )
    .expect("manifest");

    assert_eq!(manifest.group_sizes, vec![4, 3, 2]);
    assert_eq!(manifest.provenance.used_seed, 42);
    assert_eq!(manifest.provenance.scope, "evt_manifest");
    assert!(!manifest.fallback);

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("rounds").join("round-2.json");
    manifest.write(&path).expect("write");
    let loaded = RoundManifest::load(&path).expect("load");
    assert_eq!(loaded, manifest);
}

#[test]
fn missing_manifest_surfaces_a_serde_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = RoundManifest::load(&dir.path().join("absent.json")).unwrap_err();
    assert_eq!(err.info().code, "manifest-read");
}
