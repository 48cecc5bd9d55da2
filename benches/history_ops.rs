use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use keepsake::{Caretaker, Originator};

fn filled(len: usize) -> Caretaker<Originator> {
    let mut caretaker = Caretaker::new(Originator::new("bench state with a reasonably long body"));
    for _ in 0..len {
        caretaker.backup();
    }
    caretaker
}

fn bench_backup(c: &mut Criterion) {
    let mut group = c.benchmark_group("backup");

    for len in [0usize, 1_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched(
                || filled(len),
                |mut caretaker| {
                    caretaker.backup();
                    black_box(caretaker)
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_undo(c: &mut Criterion) {
    let mut group = c.benchmark_group("undo");

    for len in [1usize, 1_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched(
                || filled(len),
                |mut caretaker| black_box(caretaker.undo()),
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_history_walk(c: &mut Criterion) {
    let caretaker = filled(10_000);
    c.bench_function("history_walk_10k", |b| {
        b.iter(|| caretaker.history().history().map(|s| s.label().len()).sum::<usize>())
    });
}

criterion_group!(benches, bench_backup, bench_undo, bench_history_walk);
criterion_main!(benches);
