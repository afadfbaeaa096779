use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use minichess::agent::ai::{search, search_parallel, MaterialEvaluator};
use minichess::game_repr::{Board, Color};

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");
    let board = Board::starting_position().expect("starting layout parses");

    for depth in [2u8, 3, 4] {
        group.bench_with_input(BenchmarkId::new("sequential", depth), &depth, |b, &depth| {
            let mut board = board.clone();
            b.iter(|| black_box(search(&mut board, Color::White, depth, &MaterialEvaluator)))
        });
        group.bench_with_input(BenchmarkId::new("parallel", depth), &depth, |b, &depth| {
            b.iter(|| black_box(search_parallel(&board, Color::White, depth, &MaterialEvaluator)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
