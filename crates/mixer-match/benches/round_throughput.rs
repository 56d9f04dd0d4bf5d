use criterion::{criterion_group, criterion_main, Criterion};
use mixer_core::{AvoidanceHistory, Participant, ScopeId};
use mixer_history::MemoryHistory;
use mixer_match::{build_groups, build_pairs, GroupSize};

fn roster(n: usize) -> Vec<Participant> {
    (0..n)
        .map(|i| Participant::new(format!("usr_{i:03}"), format!("B{i:03}")))
        .collect()
}

fn bench_rounds(c: &mut Criterion) {
    let scope = ScopeId::new("evt_bench");
    let connected = roster(200);
    let mut history = MemoryHistory::new();
    for chunk in connected.chunks(2) {
        history.record_pair(&scope, &chunk[0].id, &chunk[1].id, 0);
    }

    c.bench_function("build_pairs_200", |b| {
        b.iter(|| {
            let _ = build_pairs(&scope, &connected, 4, 42, 3, &history).unwrap();
        })
    });

    c.bench_function("build_quads_200", |b| {
        b.iter(|| {
            let _ =
                build_groups(&scope, &connected, 4, 42, GroupSize::Quads, 3, &history).unwrap();
        })
    });
}

criterion_group!(benches, bench_rounds);
criterion_main!(benches);
